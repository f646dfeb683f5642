//! Shared entity contracts for the climb-center admin tool.
//!
//! Everything in this crate is pure data plus validation: no I/O, no async.
//! The backend owns entity lifecycles; clients only validate shapes on the
//! way in and out.

pub mod domain;
pub mod validation;

pub use domain::{ClimbBrand, ClimbCenter, Sector, SettingRecord};
pub use validation::{
    check_references, validate_entity, Entity, EntityKind, ReferenceViolation, Validate,
    ValidationError,
};
