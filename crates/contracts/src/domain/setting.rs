use serde::{Deserialize, Serialize};

/// A dated route-setting entry for a sector.
///
/// `setting_date` is a calendar date with no time component, serialized
/// strictly as `YYYY-MM-DD`. A sector may carry several records for the
/// same date; the history is append/revoke only, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingRecord {
    pub id: i64,

    #[serde(rename = "sectorId")]
    pub sector_id: i64,

    #[serde(rename = "settingDate")]
    pub setting_date: String,
}

impl SettingRecord {
    pub fn new(id: i64, sector_id: i64, setting_date: impl Into<String>) -> Self {
        Self {
            id,
            sector_id,
            setting_date: setting_date.into(),
        }
    }
}
