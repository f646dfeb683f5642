pub mod brand;
pub mod center;
pub mod sector;
pub mod setting;

pub use brand::ClimbBrand;
pub use center::ClimbCenter;
pub use sector::Sector;
pub use setting::SettingRecord;
