use serde::{Deserialize, Serialize};

/// Per-assignment override of an attribute-level default.
///
/// `Inherit` defers to the attribute's own default. On the wire and in
/// storage this is a nullable boolean, `null` meaning `Inherit`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum OverrideFlag {
    #[default]
    Inherit,
    Override(bool),
}

impl OverrideFlag {
    pub fn as_option(self) -> Option<bool> {
        match self {
            OverrideFlag::Inherit => None,
            OverrideFlag::Override(value) => Some(value),
        }
    }

    /// Effective value given the attribute-level default
    pub fn resolve(self, default: bool) -> bool {
        self.as_option().unwrap_or(default)
    }

    pub fn is_inherit(self) -> bool {
        matches!(self, OverrideFlag::Inherit)
    }
}

impl From<Option<bool>> for OverrideFlag {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(v) => OverrideFlag::Override(v),
            None => OverrideFlag::Inherit,
        }
    }
}

impl From<OverrideFlag> for Option<bool> {
    fn from(flag: OverrideFlag) -> Self {
        flag.as_option()
    }
}
