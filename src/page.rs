//! Whole-page interaction state, the input to rendering.
//!
//! Rendering is a pure function of a [`PageState`]; `build` renders
//! [`PageState::initial`], which is also the state the page script starts
//! from in the browser.

use crate::config::SiteConfig;
use crate::content;
use crate::forms::{AdmissionView, ContactFields, FormState};
use crate::lightbox::Lightbox;
use crate::navbar::{DocumentRoot, Navbar};
use crate::types::{ScrollRequest, Section};
use crate::visibility::VisibilityObserver;
use chrono::Datelike;

#[derive(Debug)]
pub struct PageState {
    pub root: DocumentRoot,
    pub navbar: Navbar,
    pub lightbox: Lightbox,
    pub visibility: VisibilityObserver,
    pub admission: AdmissionView,
    pub contact: FormState<ContactFields>,
    /// Calendar year shown in the footer and the admissions badge.
    pub year: i32,
}

impl PageState {
    /// Freshly loaded page; the year is read from the local clock.
    pub fn initial(config: &SiteConfig) -> Self {
        Self::for_year(config, chrono::Local::now().year())
    }

    pub fn for_year(config: &SiteConfig, year: i32) -> Self {
        Self {
            root: DocumentRoot::default(),
            navbar: Navbar::new(config.behavior.scroll_threshold),
            lightbox: Lightbox::default(),
            visibility: VisibilityObserver::new(),
            admission: AdmissionView::default(),
            contact: FormState::default(),
            year,
        }
    }

    /// Academic session advertised by the admissions badge, e.g. `2026-27`.
    pub fn admission_session(&self) -> String {
        format!("{}-{:02}", self.year, (self.year + 1).rem_euclid(100))
    }
}

/// The hero's "Enquire Now" button.
pub fn enquire_now() -> ScrollRequest {
    ScrollRequest::Anchor(Section::Admissions)
}

/// The hero's "Call Us" link target.
pub fn call_href() -> String {
    format!("tel:{}", content::PHONE_TEL)
}

/// The footer's floating button.
pub fn scroll_to_top() -> ScrollRequest {
    ScrollRequest::Top
}
