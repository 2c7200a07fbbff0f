//! Brand-asset name resolution for connector identifiers.

/// CDN the original front-end loaded brand icons from; the TUI shows
/// the resolved key as text instead.
pub const BRAND_CDN_BASE: &str = "https://cdn.brandfetch.io/";

/// Map a raw connector/source identifier to a displayable brand key.
///
/// Lowercases the input, strips the `app_source_` prefix if present,
/// rewrites the one known vendor abbreviation (`msft` -> `microsoft`),
/// and appends the `.com` suffix. Total: every input maps to some
/// output.
pub fn image_name(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let stripped = lowered.strip_prefix("app_source_").unwrap_or(&lowered);
    format!("{}.com", stripped.replacen("msft", "microsoft", 1))
}
