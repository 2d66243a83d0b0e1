//! Site catalog defaults and the optional authored override file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::asset_urls::{UrlMode, resolve_asset_url};
use crate::models::{ContactInfo, ServiceItem, SiteConfig, SocialLinks};

/// Default catalog file name searched for in the project directory.
pub const DEFAULT_CATALOG_FILE: &str = "site.catalog.json";

/// Site configuration and service catalog consumed by the rendering layer.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteCatalog {
    /// Site-wide configuration values.
    pub site: SiteConfig,
    /// Service offerings in display order.
    pub services: Vec<ServiceItem>,
}

/// Errors that can occur while loading an authored catalog file.
#[derive(Debug)]
pub enum CatalogError {
    /// Failed to read the catalog file from disk.
    Io {
        /// Path that caused the error.
        path: PathBuf,
        /// Source I/O error.
        source: std::io::Error,
    },
    /// Failed to parse the JSON catalog file.
    Parse {
        /// Path that caused the error.
        path: PathBuf,
        /// Source parse error.
        source: serde_json::Error,
    },
}

impl SiteCatalog {
    /// Load the catalog from the authored file if present.
    ///
    /// A missing file yields the built-in defaults; an unreadable or
    /// unparseable file is an error so authored overrides never silently
    /// disappear.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(CatalogError::Io {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        serde_json::from_str(&contents).map_err(|err| CatalogError::Parse {
            path: path.to_path_buf(),
            source: err,
        })
    }

    /// Service offerings with media paths resolved for the given mode.
    pub fn resolved_services(&self, mode: UrlMode) -> Vec<ServiceItem> {
        self.services
            .iter()
            .map(|service| ServiceItem {
                images: service
                    .images
                    .iter()
                    .map(|path| resolve_asset_url(path, mode, None))
                    .collect(),
                ..service.clone()
            })
            .collect()
    }
}

impl Default for SiteCatalog {
    fn default() -> Self {
        Self {
            site: SiteConfig {
                name: "Yaroz Sweets".into(),
                description: "Modern, Elegant Cakes & Catering".into(),
                url: "https://yarozsweets.com".into(),
                og_image: "images/placeholders/logo.png".into(),
                links: SocialLinks {
                    instagram: "https://www.instagram.com/yaroz_sweets".into(),
                    facebook: "https://www.facebook.com/profile.php?id=100063774739476".into(),
                },
                contact: ContactInfo {
                    address: "Amman, Jordan (pickup by appointment or delivery)".into(),
                },
            },
            services: vec![
                ServiceItem {
                    id: "custom-cakes".into(),
                    title: "Custom Cakes".into(),
                    description: "Artfully designed custom cakes for birthdays, weddings, and \
                                  special celebrations, crafted with premium ingredients and \
                                  attention to detail."
                        .into(),
                    images: media_paths("images/Cakes", "cake", 6, &[]),
                    slug: "custom-cakes".into(),
                },
                ServiceItem {
                    id: "sweets-for-events".into(),
                    title: "Sweets for Events".into(),
                    description: "Delightful selections of pastries, cookies, and treats perfect \
                                  for corporate gatherings, family celebrations, and special \
                                  occasions."
                        .into(),
                    images: media_paths(
                        "images/Sweets",
                        "Sweets",
                        6,
                        &["images/Sweets/Sweets_14.mp4"],
                    ),
                    slug: "sweets-for-events".into(),
                },
                ServiceItem {
                    id: "full-service-catering".into(),
                    title: "Full-service Catering".into(),
                    description: "Complete catering solutions for weddings and large \
                                  celebrations, featuring our signature sweets and coordinated \
                                  service."
                        .into(),
                    images: media_paths("images/Catering", "catering", 6, &[]),
                    slug: "full-service-catering".into(),
                },
            ],
        }
    }
}

fn media_paths(dir: &str, stem: &str, count: usize, extra: &[&str]) -> Vec<String> {
    let mut paths: Vec<String> = (1..=count)
        .map(|index| format!("{dir}/{stem}_{index}.jpg"))
        .collect();
    paths.extend(extra.iter().map(|path| path.to_string()));
    paths
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}
