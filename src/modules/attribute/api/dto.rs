use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::attribute::application::{
    CreateAttributeCommand, ListAttributesQuery, UpdateAttributeCommand,
};
use crate::modules::attribute::domain::{Attribute, AttributeOption, AttributeType};

fn enabled_by_default() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttributeRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub attribute_type: String,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub default_filterable: bool,
    #[serde(default)]
    pub default_searchable: bool,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default)]
    pub options: Option<Vec<AttributeOption>>,
}

impl From<CreateAttributeRequest> for CreateAttributeCommand {
    fn from(request: CreateAttributeRequest) -> Self {
        Self {
            id: request.id,
            name: request.name,
            slug: request.slug,
            attribute_type: request.attribute_type,
            unit: request.unit,
            default_filterable: request.default_filterable,
            default_searchable: request.default_searchable,
            sort_order: request.sort_order,
            enabled: request.enabled,
            options: request.options.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAttributeRequest {
    pub id: String,
    pub version: i32,
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub attribute_type: String,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub default_filterable: bool,
    #[serde(default)]
    pub default_searchable: bool,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default)]
    pub options: Option<Vec<AttributeOption>>,
}

impl From<UpdateAttributeRequest> for UpdateAttributeCommand {
    fn from(request: UpdateAttributeRequest) -> Self {
        Self {
            id: request.id,
            version: request.version,
            name: request.name,
            slug: request.slug,
            attribute_type: request.attribute_type,
            unit: request.unit,
            default_filterable: request.default_filterable,
            default_searchable: request.default_searchable,
            sort_order: request.sort_order,
            enabled: request.enabled,
            options: request.options.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttributeListParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub enabled: Option<bool>,
    #[serde(rename = "type")]
    pub attribute_type: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl From<AttributeListParams> for ListAttributesQuery {
    fn from(params: AttributeListParams) -> Self {
        Self {
            page: params.page,
            size: params.size,
            enabled: params.enabled,
            attribute_type: params.attribute_type,
            sort: params.sort,
            order: params.order,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeResponse {
    pub id: String,
    pub version: i32,
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub default_filterable: bool,
    pub default_searchable: bool,
    pub sort_order: i32,
    pub enabled: bool,
    /// Omitted when the attribute has no options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<AttributeOption>>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl From<&Attribute> for AttributeResponse {
    fn from(attribute: &Attribute) -> Self {
        let options = (!attribute.options().is_empty()).then(|| attribute.options().to_vec());

        Self {
            id: attribute.id().to_string(),
            version: attribute.version(),
            name: attribute.name().to_string(),
            slug: attribute.slug().to_string(),
            attribute_type: attribute.attribute_type(),
            unit: attribute.unit().map(str::to_string),
            default_filterable: attribute.default_filterable(),
            default_searchable: attribute.default_searchable(),
            sort_order: attribute.sort_order(),
            enabled: attribute.enabled(),
            options,
            created_at: attribute.created_at(),
            modified_at: attribute.modified_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::attribute::domain::AttributeState;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_create_request_defaults() {
        let request: CreateAttributeRequest =
            serde_json::from_value(json!({"name": "Color", "slug": "color", "type": "select"}))
                .unwrap();
        let command = CreateAttributeCommand::from(request);

        assert!(command.id.is_none());
        assert_eq!(command.sort_order, 0);
        assert!(command.enabled);
        assert!(command.options.is_empty());
    }

    #[test]
    fn test_response_is_camel_case_and_hides_empty_options() {
        let attribute = Attribute::reconstruct(AttributeState {
            id: "attr-weight".to_string(),
            version: 2,
            name: "Weight".to_string(),
            slug: "weight".to_string(),
            attribute_type: AttributeType::Range,
            unit: Some("kg".to_string()),
            default_filterable: true,
            default_searchable: false,
            sort_order: 1,
            enabled: true,
            options: vec![],
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            modified_at: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
        });

        let body = serde_json::to_value(AttributeResponse::from(&attribute)).unwrap();
        assert_eq!(body["id"], json!("attr-weight"));
        assert_eq!(body["type"], json!("range"));
        assert_eq!(body["defaultFilterable"], json!(true));
        assert_eq!(body["sortOrder"], json!(1));
        assert!(body.get("options").is_none());
        assert!(body.get("createdAt").is_some());
    }
}
