/// Query for a single attribute by id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetAttributeQuery {
    pub id: String,
}

impl GetAttributeQuery {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
