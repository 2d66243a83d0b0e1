//! Text rewriting rules applied to exported HTML.

use regex::Regex;

use crate::project::ExportLayout;

/// Ordered set of rewrites stripping the leading slash from rooted asset
/// references.
///
/// Rules only match the leading-slash form, so applying them to already
/// rewritten text is a no-op.
pub struct RewriteRules {
    rules: Vec<(Regex, String)>,
}

impl RewriteRules {
    /// Build the rewrite set for the given export layout.
    pub fn for_layout(layout: &ExportLayout) -> Self {
        let mut rules = Vec::new();

        let framework = regex::escape(&layout.framework_asset_dir);
        rules.push((
            Regex::new(&format!(r#"(['"])/{framework}/"#)).expect("invalid quoted asset regex"),
            format!("${{1}}{}/", layout.framework_asset_dir),
        ));
        for attribute in ["src", "href"] {
            rules.push((
                Regex::new(&format!(r#"{attribute}="/{framework}/"#))
                    .expect("invalid attribute asset regex"),
                format!(r#"{attribute}="{}/"#, layout.framework_asset_dir),
            ));
        }

        for route in &layout.media_routes {
            let escaped = regex::escape(route);
            rules.push((
                Regex::new(&format!(r#"(['"])/{escaped}/"#)).expect("invalid media route regex"),
                format!("${{1}}{route}/"),
            ));
        }

        Self { rules }
    }

    /// Apply every rewrite in order and return the resulting text.
    pub fn apply(&self, input: &str) -> String {
        let mut text = input.to_string();
        for (pattern, replacement) in &self.rules {
            text = pattern.replace_all(&text, replacement.as_str()).into_owned();
        }
        text
    }
}
