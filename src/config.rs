//! Build-time site settings.
//!
//! The hydrated bundle has no process environment, so anything configurable is
//! baked in when the crate is compiled.

use chrono::{DateTime, Datelike, Utc};

const DEFAULT_CONTACT_FORM_ENDPOINT: &str = "https://formspree.io/f/xpwzgkqv";

/// Form-relay endpoint receiving the contact form, overridable with
/// `CONTACT_FORM_ENDPOINT` at build time.
pub const CONTACT_FORM_ENDPOINT: &str = match option_env!("CONTACT_FORM_ENDPOINT") {
    Some(endpoint) => endpoint,
    None => DEFAULT_CONTACT_FORM_ENDPOINT,
};

/// RFC 3339 timestamp captured by `build.rs`.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

pub const SITE_TITLE: &str = "Curan | Data Analyst";
pub const OWNER: &str = "Jerech Jan Curan";
/// Served from `public/`.
pub const PROFILE_IMAGE: &str = "/profile.svg";

pub fn copyright_year() -> i32 {
    build_year(BUILD_TIME).unwrap_or_else(|| Utc::now().year())
}

fn build_year(timestamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|t| t.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_year() {
        assert_eq!(build_year("2026-01-04T10:00:00+00:00"), Some(2026));
        assert_eq!(build_year("not a date"), None);
    }

    #[test]
    fn test_profile_image_is_shipped() {
        let path = PROFILE_IMAGE.strip_prefix('/').unwrap();
        let asset = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("public")
            .join(path);
        assert!(asset.is_file(), "{} missing", asset.display());
    }

    #[test]
    fn test_build_time_is_parseable() {
        assert!(build_year(BUILD_TIME).is_some());
    }
}
