//! Resolution of logical asset paths into embeddable URL strings.

use std::env;

use crate::asset_urls::classify::is_image_path;

/// Environment variable consulted when detecting the URL mode.
pub const MODE_ENV_VAR: &str = "SITE_ENV";

/// Build profile governing how asset URLs are prefixed.
///
/// Production exports are served relative to the repository base, so paths
/// stay relative to the document. During development the site runs under a
/// path-aware dev server and references are rooted at `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlMode {
    /// Static export served from a sub-path or file host.
    Production,
    /// Local dev server resolving paths from the server root.
    Development,
}

impl UrlMode {
    /// Detect the mode from the `SITE_ENV` environment variable.
    pub fn detect() -> Self {
        Self::from_profile(env::var(MODE_ENV_VAR).ok().as_deref())
    }

    /// Interpret a profile value; only `production` selects production mode.
    pub fn from_profile(profile: Option<&str>) -> Self {
        match profile {
            Some(value) if value.eq_ignore_ascii_case("production") => Self::Production,
            _ => Self::Development,
        }
    }
}

/// Output format hint for image transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Keep the authored format.
    Original,
    /// Prefer WebP output.
    Webp,
    /// Prefer AVIF output.
    Avif,
}

/// Requested output dimensions for image transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resize {
    /// Target width in pixels.
    pub width: Option<u32>,
    /// Target height in pixels.
    pub height: Option<u32>,
}

/// Image transformation hints accepted by [`resolve_asset_url`].
///
/// The hints are parsed but never applied: the export pipeline serves media
/// files verbatim, and no image processing step exists to honour them. They
/// are accepted so call sites can state intent without changing the resolved
/// URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageTransform {
    /// Preferred output format.
    pub format: Option<ImageFormat>,
    /// Encoding quality between 0 and 100.
    pub quality: Option<u8>,
    /// Requested output dimensions.
    pub resize: Option<Resize>,
}

/// Produce the URL string a component should embed for a logical asset path.
///
/// An empty path resolves to an empty string. A leading slash on the input is
/// stripped before the mode prefix is applied, so rooted and unrooted inputs
/// resolve identically.
pub fn resolve_asset_url(path: &str, mode: UrlMode, transform: Option<&ImageTransform>) -> String {
    if path.is_empty() {
        return String::new();
    }

    let relative = path.strip_prefix('/').unwrap_or(path);
    let prefix = match mode {
        UrlMode::Production => "",
        UrlMode::Development => "/",
    };

    if transform.is_some() && is_image_path(relative) {
        // Transform hints are inert; the concatenation is returned unchanged.
        return format!("{prefix}{relative}");
    }

    format!("{prefix}{relative}")
}
