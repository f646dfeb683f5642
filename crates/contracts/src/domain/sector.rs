use serde::{Deserialize, Serialize};

use super::setting::SettingRecord;

/// A named subdivision of a climb center (a wall or area) with its own
/// route-setting history. Belongs to exactly one center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sector {
    pub id: i64,
    pub name: String,

    #[serde(rename = "climbCenterId")]
    pub climb_center_id: i64,

    #[serde(rename = "settingHistory")]
    pub setting_history: Vec<SettingRecord>,
}

impl Sector {
    pub fn new(id: i64, name: impl Into<String>, climb_center_id: i64) -> Self {
        Self {
            id,
            name: name.into(),
            climb_center_id,
            setting_history: Vec::new(),
        }
    }
}
