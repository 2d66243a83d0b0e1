#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_urls;
pub mod catalog;
pub mod config;
pub mod models;
pub mod normalizer;
pub mod project;

pub use catalog::SiteCatalog;
pub use config::ProjectConfig;
pub use normalizer::{NormalizeReport, normalize_export};
pub use project::ExportLayout;
