/// Test data factories using builder pattern
///
/// Commands come with valid defaults so each test only spells out the
/// fields it cares about
use attribute_service::modules::attribute::application::CreateAttributeCommand;
use attribute_service::modules::attribute::domain::AttributeOption;
use attribute_service::modules::category_attribute::application::AssignAttributeCommand;
use attribute_service::shared::domain::OverrideFlag;

pub struct AttributeFactory {
    id: Option<String>,
    name: String,
    slug: String,
    attribute_type: String,
    unit: Option<String>,
    default_filterable: bool,
    sort_order: i32,
    enabled: bool,
    options: Vec<AttributeOption>,
}

impl AttributeFactory {
    pub fn new(slug: &str) -> Self {
        Self {
            id: None,
            name: slug.replace('-', " "),
            slug: slug.to_string(),
            attribute_type: "select".to_string(),
            unit: None,
            default_filterable: false,
            sort_order: 0,
            enabled: true,
            options: Vec::new(),
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn attribute_type(mut self, attribute_type: &str) -> Self {
        self.attribute_type = attribute_type.to_string();
        self
    }

    pub fn unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }

    pub fn filterable(mut self) -> Self {
        self.default_filterable = true;
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn option(mut self, value: &str, slug: &str) -> Self {
        let position = self.options.len() as i32;
        self.options
            .push(AttributeOption::new(value, slug).with_sort_order(position));
        self
    }

    pub fn build(self) -> CreateAttributeCommand {
        CreateAttributeCommand {
            id: self.id,
            name: self.name,
            slug: self.slug,
            attribute_type: self.attribute_type,
            unit: self.unit,
            default_filterable: self.default_filterable,
            default_searchable: false,
            sort_order: self.sort_order,
            enabled: self.enabled,
            options: self.options,
        }
    }
}

pub struct AssignmentFactory {
    category_id: String,
    attribute_id: String,
    required: bool,
    sort_order: i32,
    filterable: OverrideFlag,
}

impl AssignmentFactory {
    pub fn new(category_id: &str, attribute_id: &str) -> Self {
        Self {
            category_id: category_id.to_string(),
            attribute_id: attribute_id.to_string(),
            required: false,
            sort_order: 0,
            filterable: OverrideFlag::Inherit,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = OverrideFlag::Override(filterable);
        self
    }

    pub fn build(self) -> AssignAttributeCommand {
        AssignAttributeCommand {
            id: None,
            category_id: self.category_id,
            attribute_id: self.attribute_id,
            required: self.required,
            sort_order: self.sort_order,
            filterable: self.filterable,
            searchable: OverrideFlag::Inherit,
            enabled: true,
        }
    }
}
