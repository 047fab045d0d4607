//! HTML site generation.
//!
//! Renders the single page from a [`PageState`] and writes the static site.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html          # The whole site: every section, inline CSS and JS
//! └── assets/             # Copied verbatim from <source>/assets
//!     └── hero-children.png
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Base styles (colors injected from config)
//! - `static/site.js`: Navbar, smooth scroll, entrance reveals, lightbox,
//!   class dropdown, simulated submission, and toasts
//!
//! The script reads its timings from a JSON `<script>` block serialized from
//! [`BehaviorConfig`](crate::config::BehaviorConfig), so the browser and the
//! Rust interaction model run on the same numbers.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.

use crate::config::{self, SiteConfig};
use crate::content;
use crate::page::PageState;
use crate::sections;
use crate::types::Block;
use log::{debug, info, warn};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("walking {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// What a build wrote.
#[derive(Debug)]
pub struct GenerateReport {
    pub index: PathBuf,
    pub index_bytes: usize,
    /// Output paths of copied asset files, relative to the output directory.
    pub assets: Vec<PathBuf>,
    /// Whether the configured hero image exists in the source directory.
    pub hero_image_found: bool,
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/site.js");

const ASSETS_DIR: &str = "assets";

pub fn generate(
    source_dir: &Path,
    output_dir: &Path,
    config: &SiteConfig,
) -> Result<GenerateReport, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let assets = copy_assets(&source_dir.join(ASSETS_DIR), &output_dir.join(ASSETS_DIR))?;

    let hero_image_found = output_dir.join(&config.site.hero_image).is_file();
    if !hero_image_found {
        warn!(
            "hero image {} was not copied to {}",
            config.site.hero_image,
            output_dir.display()
        );
    }

    let state = PageState::initial(config);
    let page = render_page(&state, config)?.into_string();
    let index = output_dir.join("index.html");
    fs::write(&index, &page)?;
    info!("generated {} ({} bytes)", index.display(), page.len());

    Ok(GenerateReport {
        index,
        index_bytes: page.len(),
        assets,
        hero_image_found,
    })
}

/// Files `build` would copy, relative to `source_dir`.
pub fn list_assets(source_dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(source_dir.join(ASSETS_DIR))
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            entry
                .path()
                .strip_prefix(source_dir)
                .ok()
                .map(Path::to_path_buf)
        })
        .collect()
}

/// Copy every file under `src` into `dst`, keeping the relative layout.
///
/// A missing `src` is not an error; the site then has no local assets.
fn copy_assets(src: &Path, dst: &Path) -> Result<Vec<PathBuf>, GenerateError> {
    if !src.is_dir() {
        debug!("no assets directory at {}", src.display());
        return Ok(Vec::new());
    }
    let mut copied = Vec::new();
    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry.map_err(|source| GenerateError::Walk {
            path: src.to_path_buf(),
            source,
        })?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if entry.file_type().is_file() {
            fs::copy(entry.path(), &target)?;
            debug!("copied {}", relative.display());
            copied.push(Path::new(ASSETS_DIR).join(relative));
        }
    }
    Ok(copied)
}

// ============================================================================
// Document
// ============================================================================

/// Renders the base HTML document structure
fn base_document(
    title: &str,
    css: &str,
    root_class: Option<String>,
    behavior_json: &str,
    body: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" class=[root_class] {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content={
                    (content::SCHOOL_NAME) ": " (content::TAGLINE) " for children aged "
                    (content::AGE_SPAN) "."
                };
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (body)
                div.toasts id="toasts" aria-live="polite" {}
                script type="application/json" id="site-behavior" { (PreEscaped(behavior_json)) }
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// Compose every block in page order into a full document.
pub fn render_page(state: &PageState, config: &SiteConfig) -> Result<Markup, GenerateError> {
    let color_css = config::generate_color_css(&config.colors);
    let css = format!("{}\n\n{}", color_css, CSS_STATIC);
    let behavior_json = serde_json::to_string(&config.behavior)?;

    let body = html! {
        @for block in Block::PAGE_ORDER {
            (sections::render_block(block, state, config))
        }
    };

    Ok(base_document(
        &config.site.title,
        &css,
        state.root.class_attr(),
        &behavior_json,
        body,
    ))
}
