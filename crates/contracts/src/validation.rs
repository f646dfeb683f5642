//! Structural validation of entity shapes.
//!
//! Mirrors the backend's wire contract: a candidate JSON value either matches
//! an entity shape exactly or is rejected with the offending field path.
//! Validation is pure — it never touches the network or the clock, except
//! that typed validation parses `settingDate` strings through chrono.

use chrono::NaiveDate;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::{ClimbBrand, ClimbCenter, Sector, SettingRecord};

/// Format accepted for `settingDate` fields.
pub const CANONICAL_DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// Errors
// ============================================================================

/// A value failed to conform to an entity's schema.
///
/// `path` points at the offending field in wire (camelCase) notation,
/// e.g. `sectors[2].settingHistory[0].sectorId`. `$` denotes the root value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value at `{path}`: expected {expected}, got {actual}")]
pub struct ValidationError {
    pub path: String,
    pub expected: &'static str,
    pub actual: String,
}

impl ValidationError {
    fn new(path: &str, expected: &'static str, actual: impl Into<String>) -> Self {
        Self {
            path: if path.is_empty() {
                "$".to_string()
            } else {
                path.to_string()
            },
            expected,
            actual: actual.into(),
        }
    }
}

// ============================================================================
// Entity kinds
// ============================================================================

/// Discriminant for [`validate_entity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Brand,
    ClimbCenter,
    Sector,
    SettingRecord,
}

/// A successfully validated entity.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Brand(ClimbBrand),
    ClimbCenter(ClimbCenter),
    Sector(Sector),
    SettingRecord(SettingRecord),
}

/// Validate a candidate JSON value against an entity shape.
///
/// Checks required fields and primitive types, recursing into nested
/// entities (`ClimbCenter` → `sectors[]` + `brand`, `Sector` →
/// `settingHistory[]`). Cross-reference invariants between parent and child
/// ids are deliberately not part of shape validation; see
/// [`check_references`].
pub fn validate_entity(candidate: &Value, kind: EntityKind) -> Result<Entity, ValidationError> {
    match kind {
        EntityKind::Brand => ClimbBrand::from_value(candidate).map(Entity::Brand),
        EntityKind::ClimbCenter => ClimbCenter::from_value(candidate).map(Entity::ClimbCenter),
        EntityKind::Sector => Sector::from_value(candidate).map(Entity::Sector),
        EntityKind::SettingRecord => {
            SettingRecord::from_value(candidate).map(Entity::SettingRecord)
        }
    }
}

// ============================================================================
// Shape helpers
// ============================================================================

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn join(path: &str, field: &str) -> String {
    if path.is_empty() {
        field.to_string()
    } else {
        format!("{path}.{field}")
    }
}

fn expect_object<'a>(
    value: &'a Value,
    path: &str,
) -> Result<&'a Map<String, Value>, ValidationError> {
    value
        .as_object()
        .ok_or_else(|| ValidationError::new(path, "object", type_name(value)))
}

fn field<'a>(
    obj: &'a Map<String, Value>,
    path: &str,
    name: &str,
    expected: &'static str,
) -> Result<&'a Value, ValidationError> {
    obj.get(name)
        .ok_or_else(|| ValidationError::new(&join(path, name), expected, "missing field"))
}

/// Identifiers on the wire are positive integers.
fn positive_int_field(
    obj: &Map<String, Value>,
    path: &str,
    name: &str,
) -> Result<i64, ValidationError> {
    let field_path = join(path, name);
    let value = field(obj, path, name, "positive integer")?;
    let n = value
        .as_i64()
        .ok_or_else(|| ValidationError::new(&field_path, "positive integer", type_name(value)))?;
    if n < 1 {
        return Err(ValidationError::new(
            &field_path,
            "positive integer",
            n.to_string(),
        ));
    }
    Ok(n)
}

fn string_field(
    obj: &Map<String, Value>,
    path: &str,
    name: &str,
) -> Result<String, ValidationError> {
    let field_path = join(path, name);
    let value = field(obj, path, name, "string")?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ValidationError::new(&field_path, "string", type_name(value)))
}

fn array_field<'a>(
    obj: &'a Map<String, Value>,
    path: &str,
    name: &str,
) -> Result<&'a [Value], ValidationError> {
    let field_path = join(path, name);
    let value = field(obj, path, name, "array")?;
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| ValidationError::new(&field_path, "array", type_name(value)))
}

// ============================================================================
// Per-entity shape validation
// ============================================================================

impl ClimbBrand {
    /// Validate and convert a JSON value into a brand.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        Self::from_value_at(value, "")
    }

    fn from_value_at(value: &Value, path: &str) -> Result<Self, ValidationError> {
        let obj = expect_object(value, path)?;
        Ok(Self {
            id: positive_int_field(obj, path, "id")?,
            name: string_field(obj, path, "name")?,
        })
    }
}

impl SettingRecord {
    /// Validate and convert a JSON value into a setting record.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        Self::from_value_at(value, "")
    }

    fn from_value_at(value: &Value, path: &str) -> Result<Self, ValidationError> {
        let obj = expect_object(value, path)?;
        Ok(Self {
            id: positive_int_field(obj, path, "id")?,
            sector_id: positive_int_field(obj, path, "sectorId")?,
            setting_date: string_field(obj, path, "settingDate")?,
        })
    }
}

impl Sector {
    /// Validate and convert a JSON value into a sector, recursing into its
    /// setting history.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        Self::from_value_at(value, "")
    }

    fn from_value_at(value: &Value, path: &str) -> Result<Self, ValidationError> {
        let obj = expect_object(value, path)?;
        let history = array_field(obj, path, "settingHistory")?;
        let setting_history = history
            .iter()
            .enumerate()
            .map(|(i, item)| {
                SettingRecord::from_value_at(item, &format!("{}[{}]", join(path, "settingHistory"), i))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: positive_int_field(obj, path, "id")?,
            name: string_field(obj, path, "name")?,
            climb_center_id: positive_int_field(obj, path, "climbCenterId")?,
            setting_history,
        })
    }
}

impl ClimbCenter {
    /// Validate and convert a JSON value into a climb center, recursing into
    /// `sectors[]` and the embedded `brand`.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        Self::from_value_at(value, "")
    }

    fn from_value_at(value: &Value, path: &str) -> Result<Self, ValidationError> {
        let obj = expect_object(value, path)?;
        let sector_values = array_field(obj, path, "sectors")?;
        let sectors = sector_values
            .iter()
            .enumerate()
            .map(|(i, item)| Sector::from_value_at(item, &format!("{}[{}]", join(path, "sectors"), i)))
            .collect::<Result<Vec<_>, _>>()?;

        let brand_value = field(obj, path, "brand", "object")?;
        let brand = ClimbBrand::from_value_at(brand_value, &join(path, "brand"))?;

        Ok(Self {
            id: positive_int_field(obj, path, "id")?,
            name: string_field(obj, path, "name")?,
            address: string_field(obj, path, "address")?,
            brand_id: positive_int_field(obj, path, "brandId")?,
            instagram_url: string_field(obj, path, "instagramUrl")?,
            sectors,
            brand,
        })
    }
}

// ============================================================================
// Typed validation
// ============================================================================

/// Validation of already-typed entities, for outbound request construction.
///
/// Shape validation guarantees primitive types; this layer adds the value
/// constraints the type system cannot express (positive ids, strict
/// `YYYY-MM-DD` dates) and recurses with the same path reporting.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

fn validate_id(id: i64, path: &str, name: &str) -> Result<(), ValidationError> {
    if id < 1 {
        return Err(ValidationError::new(
            &join(path, name),
            "positive integer",
            id.to_string(),
        ));
    }
    Ok(())
}

/// Strict canonical-date check: the string must parse as `YYYY-MM-DD` and
/// survive a reformat unchanged (rejects unpadded months/days).
fn validate_canonical_date(date: &str, path: &str, name: &str) -> Result<(), ValidationError> {
    let parsed = NaiveDate::parse_from_str(date, CANONICAL_DATE_FORMAT).map_err(|_| {
        ValidationError::new(&join(path, name), "YYYY-MM-DD date string", date.to_string())
    })?;
    if parsed.format(CANONICAL_DATE_FORMAT).to_string() != date {
        return Err(ValidationError::new(
            &join(path, name),
            "YYYY-MM-DD date string",
            date.to_string(),
        ));
    }
    Ok(())
}

fn validate_setting_at(record: &SettingRecord, path: &str) -> Result<(), ValidationError> {
    validate_id(record.id, path, "id")?;
    validate_id(record.sector_id, path, "sectorId")?;
    validate_canonical_date(&record.setting_date, path, "settingDate")
}

fn validate_sector_at(sector: &Sector, path: &str) -> Result<(), ValidationError> {
    validate_id(sector.id, path, "id")?;
    validate_id(sector.climb_center_id, path, "climbCenterId")?;
    for (i, record) in sector.setting_history.iter().enumerate() {
        validate_setting_at(record, &format!("{}[{}]", join(path, "settingHistory"), i))?;
    }
    Ok(())
}

impl Validate for ClimbBrand {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_id(self.id, "", "id")
    }
}

impl Validate for SettingRecord {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_setting_at(self, "")
    }
}

impl Validate for Sector {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_sector_at(self, "")
    }
}

impl Validate for ClimbCenter {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_id(self.id, "", "id")?;
        validate_id(self.brand_id, "", "brandId")?;
        self.brand.validate().map_err(|e| ValidationError {
            path: join("brand", &e.path),
            ..e
        })?;
        for (i, sector) in self.sectors.iter().enumerate() {
            validate_sector_at(sector, &format!("sectors[{i}]"))?;
        }
        Ok(())
    }
}

// ============================================================================
// Cross-reference checks (advisory)
// ============================================================================

/// A parent/child id mismatch inside a denormalized entity tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceViolation {
    pub path: String,
    pub message: String,
}

/// Report cross-reference mismatches inside a climb center.
///
/// The backend is authoritative over these invariants, so shape validation
/// accepts mismatched ids; callers wanting the stricter reading run this
/// check on top.
pub fn check_references(center: &ClimbCenter) -> Vec<ReferenceViolation> {
    let mut violations = Vec::new();

    if center.brand.id != center.brand_id {
        violations.push(ReferenceViolation {
            path: "brand.id".to_string(),
            message: format!(
                "embedded brand id {} does not match brandId {}",
                center.brand.id, center.brand_id
            ),
        });
    }

    for (i, sector) in center.sectors.iter().enumerate() {
        if sector.climb_center_id != center.id {
            violations.push(ReferenceViolation {
                path: format!("sectors[{i}].climbCenterId"),
                message: format!(
                    "sector {} references center {} but is contained in center {}",
                    sector.id, sector.climb_center_id, center.id
                ),
            });
        }
        for (j, record) in sector.setting_history.iter().enumerate() {
            if record.sector_id != sector.id {
                violations.push(ReferenceViolation {
                    path: format!("sectors[{i}].settingHistory[{j}].sectorId"),
                    message: format!(
                        "setting record {} references sector {} but is contained in sector {}",
                        record.id, record.sector_id, sector.id
                    ),
                });
            }
        }
    }

    violations
}
