//! CLI output formatting for `check` and `build`.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every section is its position on the page and its name, with the
//! anchor it answers to and its content count as secondary context. Files
//! written are listed after the page inventory.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Sections
//! 001 Home → #home
//! 002 Programs → #programs (5 programs)
//! 003 Features → #features (9 features)
//! ...
//!
//! Config
//!     site/config.toml
//!     assets/ (3 files)
//! ```
//!
//! ## Build
//!
//! ```text
//! Home → index.html (84211 bytes)
//!     001 Navbar
//!     002 Hero → #home
//!     ...
//!
//! Assets
//!     assets/hero-children.png
//!
//! Generated 1 page, 1 asset
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::content;
use crate::generate::GenerateReport;
use crate::types::{Block, Section};
use std::path::Path;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Content count shown next to a section, if it lists anything.
fn section_detail(section: Section) -> Option<String> {
    match section {
        Section::Home => None,
        Section::Programs => Some(plural(content::PROGRAMS.len(), "program", "programs")),
        Section::Features => Some(plural(content::FEATURES.len(), "feature", "features")),
        Section::About => Some(plural(content::HIGHLIGHTS.len(), "highlight", "highlights")),
        Section::Gallery => {
            let featured = content::GALLERY.iter().filter(|i| i.featured).count();
            Some(format!(
                "{}, {} featured",
                plural(content::GALLERY.len(), "image", "images"),
                featured
            ))
        }
        Section::Admissions => Some(plural(content::class_options().count(), "class", "classes")),
        Section::Contact => Some(plural(content::CONTACT_INFO.len(), "info card", "info cards")),
    }
}

/// `Name → #anchor (detail)` for a section block.
fn section_line(name: &str, section: Section) -> String {
    match section_detail(section) {
        Some(detail) => format!("{} \u{2192} {} ({})", name, section.anchor(), detail),
        None => format!("{} \u{2192} {}", name, section.anchor()),
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format the page inventory and the inputs `build` would read.
///
/// `config_path` is `None` when the stock defaults are in effect.
pub fn format_check_output(config_path: Option<&Path>, asset_count: usize) -> Vec<String> {
    let mut lines = vec!["Sections".to_string()];
    for (i, section) in Section::ALL.into_iter().enumerate() {
        let name = content::NAV_LINKS
            .iter()
            .find(|l| l.section == section)
            .map_or(section.id(), |l| l.name);
        lines.push(format!("{} {}", format_index(i + 1), section_line(name, section)));
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    match config_path {
        Some(path) => lines.push(format!("{}{}", indent(1), path.display())),
        None => lines.push(format!("{}(stock defaults)", indent(1))),
    }
    if asset_count > 0 {
        lines.push(format!(
            "{}assets/ ({})",
            indent(1),
            plural(asset_count, "file", "files")
        ));
    }
    lines
}

pub fn print_check_output(config_path: Option<&Path>, asset_count: usize) {
    for line in format_check_output(config_path, asset_count) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

pub fn format_generate_output(report: &GenerateReport, output_dir: &Path) -> Vec<String> {
    let index = report
        .index
        .strip_prefix(output_dir)
        .unwrap_or(&report.index);
    let mut lines = vec![format!(
        "Home \u{2192} {} ({} bytes)",
        index.display(),
        report.index_bytes
    )];

    for (i, block) in Block::PAGE_ORDER.into_iter().enumerate() {
        let line = match block.section() {
            Some(section) => section_line(block.name(), section),
            None => block.name().to_string(),
        };
        lines.push(format!("{}{} {}", indent(1), format_index(i + 1), line));
    }

    if !report.assets.is_empty() {
        lines.push(String::new());
        lines.push("Assets".to_string());
        for asset in &report.assets {
            lines.push(format!("{}{}", indent(1), asset.display()));
        }
    }
    if !report.hero_image_found {
        lines.push(String::new());
        lines.push("Warning: hero image is missing from the copied assets".to_string());
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated 1 page, {}",
        plural(report.assets.len(), "asset", "assets")
    ));
    lines
}

/// Print build output to stdout.
pub fn print_generate_output(report: &GenerateReport, output_dir: &Path) {
    for line in format_generate_output(report, output_dir) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn report(assets: Vec<&str>, hero_image_found: bool) -> GenerateReport {
        GenerateReport {
            index: PathBuf::from("dist/index.html"),
            index_bytes: 1234,
            assets: assets.into_iter().map(PathBuf::from).collect(),
            hero_image_found,
        }
    }

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(12), "012");
    }

    #[test]
    fn indent_levels() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(2), "        ");
    }

    #[test]
    fn plural_forms() {
        assert_eq!(plural(1, "asset", "assets"), "1 asset");
        assert_eq!(plural(0, "asset", "assets"), "0 assets");
    }

    #[test]
    fn check_lists_sections_in_order() {
        let lines = format_check_output(None, 0);
        assert_eq!(lines[0], "Sections");
        assert_eq!(lines[1], "001 Home \u{2192} #home");
        assert_eq!(lines[2], "002 Programs \u{2192} #programs (5 programs)");
        assert_eq!(
            lines[5],
            "005 Gallery \u{2192} #gallery (8 images, 2 featured)"
        );
        assert_eq!(lines[7], "007 Contact \u{2192} #contact (4 info cards)");
    }

    #[test]
    fn check_reports_config_source() {
        let lines = format_check_output(None, 0);
        assert!(lines.contains(&"    (stock defaults)".to_string()));
        assert!(!lines.iter().any(|l| l.contains("assets/")));

        let path = Path::new("site/config.toml");
        let lines = format_check_output(Some(path), 3);
        assert!(lines.contains(&"    site/config.toml".to_string()));
        assert!(lines.contains(&"    assets/ (3 files)".to_string()));
    }

    #[test]
    fn generate_lists_blocks_and_assets() {
        let lines = format_generate_output(
            &report(vec!["assets/hero-children.png"], true),
            Path::new("dist"),
        );
        assert_eq!(lines[0], "Home \u{2192} index.html (1234 bytes)");
        assert_eq!(lines[1], "    001 Navbar");
        assert_eq!(lines[2], "    002 Hero \u{2192} #home");
        assert_eq!(lines[9], "    009 Footer");
        assert!(lines.contains(&"    assets/hero-children.png".to_string()));
        assert_eq!(lines.last().unwrap(), "Generated 1 page, 1 asset");
        assert!(!lines.iter().any(|l| l.starts_with("Warning")));
    }

    #[test]
    fn generate_warns_about_missing_hero() {
        let lines = format_generate_output(&report(vec![], false), Path::new("dist"));
        assert!(lines.iter().any(|l| l.starts_with("Warning: hero image")));
        assert_eq!(lines.last().unwrap(), "Generated 1 page, 0 assets");
    }
}
