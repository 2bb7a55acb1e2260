use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::AppError;

/// How an attribute's values are presented and filtered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    Select,
    Multiselect,
    Range,
    Boolean,
    Text,
}

impl AttributeType {
    pub const ALL: [AttributeType; 5] = [
        AttributeType::Select,
        AttributeType::Multiselect,
        AttributeType::Range,
        AttributeType::Boolean,
        AttributeType::Text,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeType::Select => "select",
            AttributeType::Multiselect => "multiselect",
            AttributeType::Range => "range",
            AttributeType::Boolean => "boolean",
            AttributeType::Text => "text",
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttributeType {
    type Err = AppError;

    /// Exact, case-sensitive match on the wire names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| AppError::ValidationError(format!("invalid attribute type '{}'", s)))
    }
}
