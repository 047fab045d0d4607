//! # Little Junior
//!
//! Site builder for the Little Junior DPS pre school and day care: a single
//! scrolling page that presents the school and captures admission and
//! contact enquiries.
//!
//! # Architecture: Content, Interaction Model, Renderers
//!
//! ```text
//! content   (static registry)  ─┐
//! page      (PageState)        ─┼─▶  sections  ─▶  generate  ─▶  dist/index.html
//! config    (config.toml)      ─┘
//! ```
//!
//! - **Content** is compiled in. Every list the page shows lives once in
//!   [`content`]; lists shown in two places (navigation, programs) are read
//!   from the same slice.
//! - **Interaction state** is modeled in Rust: navbar, visibility latches,
//!   lightbox, and the two lead forms with their cancelable submissions. The
//!   renderers are pure functions of a [`page::PageState`], so every state the
//!   page can be in has a testable rendering.
//! - **Generation** renders the initial state to one HTML file with inline
//!   CSS and a small script that drives the same transitions in the browser,
//!   using the timings serialized from [`config::BehaviorConfig`].
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Sections, blocks, icons, themes, and the content record types |
//! | [`content`] | The content registry and its consistency checks |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`navbar`] | Scroll threshold, mobile menu, reduced-motion toggle |
//! | [`visibility`] | One-shot "has entered the viewport" latches per section |
//! | [`lightbox`] | Gallery overlay state |
//! | [`forms`] | Field constraints, submission controllers, lead sinks, toasts |
//! | [`page`] | Whole-page state snapshot fed to the renderers |
//! | [`sections`] | Maud renderers, one per page block |
//! | [`generate`] | Document composition and writing `dist/` |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time HTML
//! macro system. Malformed markup is a build error, interpolation is escaped
//! by default, and there is no template directory to ship.
//!
//! ## Native Constraints Are the Validation Model
//!
//! Each form field is declared once as a [`forms::FieldSpec`]. The renderer
//! turns it into `required`, `maxlength`, `pattern`, and `type` attributes and
//! the submission gate runs the same checks, so the browser and the model
//! refuse the same inputs.
//!
//! ## Submissions Are Owned Tasks
//!
//! A pending submission is a tokio task held by its form. Dropping the form
//! aborts the task, so no toast or reset can land after the form is gone.

pub mod config;
pub mod content;
pub mod forms;
pub mod generate;
pub mod lightbox;
pub mod navbar;
pub mod output;
pub mod page;
pub mod sections;
pub mod types;
pub mod visibility;

#[cfg(test)]
pub(crate) mod test_helpers;
