//! Candidate enumeration and in-place rewriting of exported HTML files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::normalizer::rules::RewriteRules;
use crate::project::ExportLayout;

/// Outcome of a normalization run over an export directory.
#[derive(Debug, Default)]
pub struct NormalizeReport {
    /// Files that were rewritten in place.
    pub processed: Vec<PathBuf>,
    /// Files that existed but could not be read or written back.
    pub failed: Vec<PathBuf>,
}

/// Rewrite rooted asset references in every candidate HTML file of the export.
///
/// Candidates are the layout's fixed page files plus every `.html` file found
/// in its listed subdirectories. Missing candidates are skipped; a candidate
/// that exists but fails to read or write is logged and counted, and the run
/// continues with the next one.
pub fn normalize_export(layout: &ExportLayout) -> NormalizeReport {
    let rules = RewriteRules::for_layout(layout);
    let mut report = NormalizeReport::default();

    log::info!("starting path fixing in {}", layout.out_dir);

    for candidate in candidate_files(layout) {
        if !candidate.is_file() {
            log::debug!("skipping missing candidate {}", candidate.display());
            continue;
        }

        log::info!("processing {}", candidate.display());
        match normalize_file(&rules, &candidate) {
            Ok(()) => report.processed.push(candidate),
            Err(err) => {
                log::error!("error processing {}: {err:#}", candidate.display());
                report.failed.push(candidate);
            }
        }
    }

    log::info!(
        "path fixing completed, successfully processed {} files",
        report.processed.len()
    );
    report
}

fn normalize_file(rules: &RewriteRules, path: &Path) -> Result<()> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let rewritten = rules.apply(&text);
    fs::write(path, rewritten).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

fn candidate_files(layout: &ExportLayout) -> Vec<PathBuf> {
    let out_dir = Path::new(&layout.out_dir);
    let mut candidates: Vec<PathBuf> = layout
        .page_files
        .iter()
        .map(|file| out_dir.join(file))
        .collect();

    for subdir in &layout.page_subdirs {
        let dir = out_dir.join(subdir);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(_) => continue,
        };

        let mut pages: Vec<PathBuf> = entries
            .flatten()
            .filter(|entry| entry.file_type().is_ok_and(|ft| ft.is_file()))
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "html"))
            .collect();
        pages.sort();
        candidates.extend(pages);
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectConfig;
    use tempfile::tempdir;

    fn layout_for(out_dir: &Path) -> ExportLayout {
        let mut layout = ProjectConfig::default().into_layout();
        layout.out_dir = out_dir.to_string_lossy().into_owned();
        layout
    }

    #[test]
    fn rewrites_fixed_pages_and_subdirectory_pages() {
        let dir = tempdir().unwrap();
        let out = dir.path();
        fs::write(
            out.join("index.html"),
            r#"<script src="/_next/main.js"></script>"#,
        )
        .unwrap();
        fs::write(out.join("404.html"), r#"<img src="/images/logo.png">"#).unwrap();
        fs::create_dir(out.join("404")).unwrap();
        fs::write(
            out.join("404/index.html"),
            r#"<video src='/videos/intro.mp4'></video>"#,
        )
        .unwrap();
        fs::write(out.join("404/notes.txt"), "/images/ignored").unwrap();

        let report = normalize_export(&layout_for(out));

        assert_eq!(report.processed.len(), 3);
        assert!(report.failed.is_empty());
        assert_eq!(
            fs::read_to_string(out.join("index.html")).unwrap(),
            r#"<script src="_next/main.js"></script>"#
        );
        assert_eq!(
            fs::read_to_string(out.join("404.html")).unwrap(),
            r#"<img src="images/logo.png">"#
        );
        assert_eq!(
            fs::read_to_string(out.join("404/index.html")).unwrap(),
            r#"<video src='videos/intro.mp4'></video>"#
        );
        assert_eq!(
            fs::read_to_string(out.join("404/notes.txt")).unwrap(),
            "/images/ignored"
        );
    }

    #[test]
    fn missing_candidates_yield_empty_report() {
        let dir = tempdir().unwrap();

        let report = normalize_export(&layout_for(dir.path()));

        assert!(report.processed.is_empty());
        assert!(report.failed.is_empty());
    }

    #[test]
    fn unreadable_candidate_is_counted_and_run_continues() {
        let dir = tempdir().unwrap();
        let out = dir.path();
        fs::write(out.join("index.html"), [0xff, 0xfe, 0x00, 0x80]).unwrap();
        fs::write(out.join("404.html"), r#"<img src="/images/logo.png">"#).unwrap();

        let report = normalize_export(&layout_for(out));

        assert_eq!(report.failed, vec![out.join("index.html")]);
        assert_eq!(report.processed, vec![out.join("404.html")]);
        assert_eq!(
            fs::read_to_string(out.join("404.html")).unwrap(),
            r#"<img src="images/logo.png">"#
        );
    }

    #[test]
    fn rerunning_produces_no_further_change() {
        let dir = tempdir().unwrap();
        let out = dir.path();
        fs::write(
            out.join("index.html"),
            r#"<link href="/_next/site.css"><img src="/images/a.jpg">"#,
        )
        .unwrap();

        let layout = layout_for(out);
        normalize_export(&layout);
        let first = fs::read_to_string(out.join("index.html")).unwrap();
        normalize_export(&layout);
        let second = fs::read_to_string(out.join("index.html")).unwrap();

        assert_eq!(first, second);
    }
}
