//! HTTP client core for the climb-center admin tool.
//!
//! Thin, stateless wrappers around the backend's REST endpoints plus the
//! small helpers both sides of a request need (canonical dates, base-URL
//! resolution, random ids). No caching, no retries, no coordination: every
//! call is one independent request and the backend stays authoritative.

pub mod config;
pub mod error;
pub mod setting_record;
pub mod utils;

pub use config::{base_url_from_env, resolve_base_url, DEFAULT_BASE_URL};
pub use error::RequestError;
pub use setting_record::{SettingRecordClient, WriteOutcome};
pub use utils::{
    canonical_date, canonical_today, parse_canonical, random_id, random_int, InvalidDateError,
    InvalidRangeError,
};
