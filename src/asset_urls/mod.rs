//! Helpers for building and classifying asset URLs at render time.
//!
//! This module intentionally splits the responsibilities into focused
//! submodules so that URL resolution, media classification and the display
//! formatting helpers can be tested independently. The same code is shared
//! between the rendering layer and the catalog defaults.

mod classify;
mod phone;
mod placeholder;
mod resolve;

pub use classify::{is_image_path, is_video_path};
pub use phone::format_phone_number;
pub use placeholder::{dominant_color, placeholder_image};
pub use resolve::{ImageFormat, ImageTransform, MODE_ENV_VAR, Resize, UrlMode, resolve_asset_url};
