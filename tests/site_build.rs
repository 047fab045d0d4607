//! End-to-end CLI tests: run the built binary against the bundled `site/`
//! directory and inspect what it writes.

use little_junior::config::{self, SiteConfig};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_little-junior")
}

fn site_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("site")
}

fn run(args: &[&str]) -> Output {
    Command::new(bin())
        .args(args)
        .output()
        .expect("failed to run little-junior")
}

fn build_into(source: &Path, output: &Path) -> Output {
    run(&[
        "build",
        "--source",
        source.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ])
}

#[test]
fn build_writes_single_page_and_assets() {
    let out = TempDir::new().unwrap();
    let result = build_into(&site_dir(), out.path());
    assert!(
        result.status.success(),
        "build failed: {}",
        String::from_utf8_lossy(&result.stderr)
    );

    let index = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(index.starts_with("<!DOCTYPE html>"));
    for anchor in [
        "home",
        "programs",
        "features",
        "about",
        "gallery",
        "admissions",
        "contact",
    ] {
        assert!(index.contains(&format!(r#"id="{anchor}""#)), "#{anchor}");
    }
    assert!(out.path().join("assets/hero-children.png").is_file());

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Home \u{2192} index.html"));
    assert!(stdout.contains("assets/hero-children.png"));
    assert!(stdout.contains("Generated 1 page, 1 asset"));
}

#[test]
fn build_stamps_current_year_in_footer() {
    use chrono::Datelike;
    let out = TempDir::new().unwrap();
    assert!(build_into(&site_dir(), out.path()).status.success());
    let index = fs::read_to_string(out.path().join("index.html")).unwrap();
    let year = chrono::Local::now().year();
    assert!(index.contains(&format!("© {year} Little Junior DPS")));
}

#[test]
fn build_without_site_directory_uses_defaults() {
    let empty = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let result = build_into(&empty.path().join("missing"), out.path());
    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Warning: hero image"));
    let index = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(index.contains("<title>Little Junior DPS | Pre School &amp; Day Care</title>"));
}

#[test]
fn build_applies_config_overrides() {
    let source = TempDir::new().unwrap();
    fs::write(
        source.path().join("config.toml"),
        "[behavior]\nsubmit_delay_ms = 250\n\n[colors]\nprimary = \"#336699\"\n",
    )
    .unwrap();
    let out = TempDir::new().unwrap();
    assert!(build_into(source.path(), out.path()).status.success());

    let index = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(index.contains(r#""submit_delay_ms":250"#));
    assert!(index.contains("--color-primary: #336699"));
}

#[test]
fn invalid_config_fails_check_and_build() {
    let source = TempDir::new().unwrap();
    fs::write(
        source.path().join("config.toml"),
        "[colors]\nprimary = \"orange\"\n",
    )
    .unwrap();

    let check = run(&["check", "--source", source.path().to_str().unwrap()]);
    assert!(!check.status.success());
    assert!(String::from_utf8_lossy(&check.stderr).contains("colors.primary"));

    let out = TempDir::new().unwrap();
    assert!(!build_into(source.path(), out.path()).status.success());
    assert!(!out.path().join("index.html").exists());
}

#[test]
fn hero_image_outside_assets_is_rejected() {
    let source = TempDir::new().unwrap();
    fs::create_dir_all(source.path().join("images")).unwrap();
    fs::write(source.path().join("images/hero.png"), b"png").unwrap();
    fs::write(
        source.path().join("config.toml"),
        "[site]\nhero_image = \"images/hero.png\"\n",
    )
    .unwrap();

    let out = TempDir::new().unwrap();
    let result = build_into(source.path(), out.path());
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("site.hero_image"));
    assert!(!out.path().join("index.html").exists());
}

#[test]
fn unknown_config_keys_are_rejected() {
    let source = TempDir::new().unwrap();
    fs::write(source.path().join("config.toml"), "[site]\nlogo = \"x.png\"\n").unwrap();
    let check = run(&["check", "--source", source.path().to_str().unwrap()]);
    assert!(!check.status.success());
}

#[test]
fn check_prints_inventory() {
    let result = run(&["check", "--source", site_dir().to_str().unwrap()]);
    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("001 Home \u{2192} #home"));
    assert!(stdout.contains("(5 programs)"));
    assert!(stdout.contains("config.toml"));
    assert!(stdout.contains("assets/ (1 file)"));
    assert!(stdout.contains("==> Content is valid"));
}

#[test]
fn gen_config_output_loads_as_defaults() {
    let result = run(&["gen-config"]);
    assert!(result.status.success());
    let stock = String::from_utf8(result.stdout).unwrap();

    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), &stock).unwrap();
    let loaded = config::load_config(dir.path()).unwrap();
    let defaults = SiteConfig::default();
    assert_eq!(loaded.behavior.scroll_threshold, defaults.behavior.scroll_threshold);
    assert_eq!(loaded.behavior.submit_delay_ms, defaults.behavior.submit_delay_ms);
    assert_eq!(loaded.colors.primary, defaults.colors.primary);
    assert_eq!(loaded.site.map_embed_url, defaults.site.map_embed_url);
}
