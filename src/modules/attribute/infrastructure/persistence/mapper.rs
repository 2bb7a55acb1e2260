/// Conversions between the attribute aggregate and its storage record
use crate::modules::attribute::domain::{
    Attribute, AttributeOption, AttributeState, AttributeType,
};
use crate::shared::errors::{AppError, AppResult};

use super::record::AttributeRecord;

pub fn to_record(attribute: &Attribute) -> AppResult<AttributeRecord> {
    Ok(AttributeRecord {
        id: attribute.id().to_string(),
        version: attribute.version(),
        name: attribute.name().to_string(),
        slug: attribute.slug().to_string(),
        attribute_type: attribute.attribute_type().as_str().to_string(),
        unit: attribute.unit().map(str::to_string),
        default_filterable: attribute.default_filterable(),
        default_searchable: attribute.default_searchable(),
        sort_order: attribute.sort_order(),
        enabled: attribute.enabled(),
        options: serde_json::to_value(attribute.options())?,
        created_at: attribute.created_at(),
        modified_at: attribute.modified_at(),
    })
}

/// Stored rows are trusted; only undecodable columns are reported
pub fn to_domain(record: AttributeRecord) -> AppResult<Attribute> {
    let attribute_type = record.attribute_type.parse::<AttributeType>().map_err(|_| {
        AppError::DatabaseError(format!(
            "Attribute {} has unknown stored type '{}'",
            record.id, record.attribute_type
        ))
    })?;

    let options: Vec<AttributeOption> = match record.options {
        serde_json::Value::Null => Vec::new(),
        value => serde_json::from_value(value).map_err(|e| {
            AppError::DatabaseError(format!(
                "Attribute {} has malformed options: {}",
                record.id, e
            ))
        })?,
    };

    Ok(Attribute::reconstruct(AttributeState {
        id: record.id,
        version: record.version,
        name: record.name,
        slug: record.slug,
        attribute_type,
        unit: record.unit,
        default_filterable: record.default_filterable,
        default_searchable: record.default_searchable,
        sort_order: record.sort_order,
        enabled: record.enabled,
        options,
        created_at: record.created_at,
        modified_at: record.modified_at,
    }))
}
