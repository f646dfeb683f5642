//! Base-URL resolution.
//!
//! The backend address differs between local, dev and prod deployments.
//! Resolution is a pure prioritized fallback over explicitly passed
//! candidates; the env-reading wrapper is the only place that touches
//! process state.

/// Used when no configuration source provides a URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/";

/// Direct backend base-URL override, strongest source.
pub const BASE_URL_VAR: &str = "CLIMB_ADMIN_BASE_URL";

/// Explicitly configured site URL, set per deployment.
pub const SITE_URL_VAR: &str = "CLIMB_ADMIN_SITE_URL";

/// URL provided by the deployment platform.
pub const DEPLOYMENT_URL_VAR: &str = "CLIMB_ADMIN_DEPLOYMENT_URL";

/// Resolve the effective base URL from an ordered list of optional sources.
///
/// The first present candidate wins and is normalized so the result always
/// starts with an `http(s)://` scheme (plain hosts get `https://`) and ends
/// with exactly one trailing `/`. With no candidates present the hardcoded
/// default is returned.
pub fn resolve_base_url(candidates: &[Option<&str>]) -> String {
    let raw = candidates
        .iter()
        .copied()
        .find_map(|c| c.filter(|s| !s.trim().is_empty()))
        .unwrap_or(DEFAULT_BASE_URL);

    let mut url = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };

    while url.ends_with('/') {
        url.pop();
    }
    url.push('/');
    url
}

/// Resolve the base URL from the environment.
///
/// Priority: direct base-URL override, then the explicitly configured site
/// URL, then the platform-provided deployment URL, then
/// [`DEFAULT_BASE_URL`]. Read at call time; clients capture the result once
/// at construction.
pub fn base_url_from_env() -> String {
    let base = std::env::var(BASE_URL_VAR).ok();
    let site = std::env::var(SITE_URL_VAR).ok();
    let deployment = std::env::var(DEPLOYMENT_URL_VAR).ok();

    if base.is_none() && site.is_none() && deployment.is_none() {
        tracing::debug!("no base URL configured, using {}", DEFAULT_BASE_URL);
    }

    resolve_base_url(&[base.as_deref(), site.as_deref(), deployment.as_deref()])
}
