use serde::{Deserialize, Serialize};

/// A climbing-gym brand (chain). Immutable reference data in this scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClimbBrand {
    pub id: i64,
    pub name: String,
}

impl ClimbBrand {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
