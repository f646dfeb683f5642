use serde::{Deserialize, Serialize};

use super::brand::ClimbBrand;
use super::sector::Sector;

/// A climbing gym. `brand` is the denormalized embed of the brand referenced
/// by `brand_id`, carried for read convenience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClimbCenter {
    pub id: i64,
    pub name: String,
    pub address: String,

    #[serde(rename = "brandId")]
    pub brand_id: i64,

    #[serde(rename = "instagramUrl")]
    pub instagram_url: String,

    pub sectors: Vec<Sector>,

    pub brand: ClimbBrand,
}
