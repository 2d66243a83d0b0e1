//! Layout description for the static exporter's output tree.

/// Filesystem layout of a static export, as consumed by the normalizer.
///
/// The candidate lists are an explicit statement of the exporter's output
/// conventions: the fixed top-level pages it emits and the subdirectories
/// whose HTML files also need rewriting. Adjusting the exporter means
/// adjusting this list, not the rewriting code.
#[derive(Debug, Clone)]
pub struct ExportLayout {
    /// Directory the exporter writes the finished site into.
    pub out_dir: String,
    /// Top-level HTML files the exporter is known to emit.
    pub page_files: Vec<String>,
    /// Subdirectories whose `.html` files are also candidates.
    pub page_subdirs: Vec<String>,
    /// Directory name the framework emits its chunks and runtime under.
    pub framework_asset_dir: String,
    /// Site-root media route names referenced from markup.
    pub media_routes: Vec<String>,
}
