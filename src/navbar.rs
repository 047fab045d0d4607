//! Navbar interaction state and the document-root marker it controls.

use crate::types::{ScrollRequest, Section};
use std::collections::BTreeSet;

/// Marker class the reduced-motion toggle puts on the document root.
pub const REDUCE_MOTION_CLASS: &str = "reduce-motion";

/// Presentation-level class list on the document root.
///
/// Global animation styles key off these markers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentRoot {
    classes: BTreeSet<&'static str>,
}

impl DocumentRoot {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn set_class(&mut self, class: &'static str, on: bool) {
        if on {
            self.classes.insert(class);
        } else {
            self.classes.remove(class);
        }
    }

    /// Space-separated `class` attribute value, `None` when empty.
    pub fn class_attr(&self) -> Option<String> {
        if self.classes.is_empty() {
            None
        } else {
            Some(self.classes.iter().copied().collect::<Vec<_>>().join(" "))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navbar {
    threshold: u32,
    scrolled: bool,
    menu_open: bool,
    reduce_motion: bool,
}

impl Navbar {
    pub fn new(scroll_threshold: u32) -> Self {
        Self {
            threshold: scroll_threshold,
            scrolled: false,
            menu_open: false,
            reduce_motion: false,
        }
    }

    /// Solid background and shadow once the page is scrolled past the threshold.
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn reduce_motion(&self) -> bool {
        self.reduce_motion
    }

    /// Feed the current vertical scroll offset in CSS pixels.
    pub fn on_scroll(&mut self, offset_y: f64) {
        let scrolled = offset_y > f64::from(self.threshold);
        if scrolled != self.scrolled {
            log::debug!("navbar scrolled={scrolled} at offset {offset_y}");
        }
        self.scrolled = scrolled;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Flip the reduced-motion preference and mirror it onto `root`.
    pub fn toggle_reduce_motion(&mut self, root: &mut DocumentRoot) {
        self.reduce_motion = !self.reduce_motion;
        root.set_class(REDUCE_MOTION_CLASS, self.reduce_motion);
        log::debug!("reduce motion {}", if self.reduce_motion { "on" } else { "off" });
    }

    /// Label of the reduced-motion toggle, desktop and mobile variants.
    pub fn motion_labels(&self) -> (&'static str, &'static str) {
        motion_labels_for(self.reduce_motion)
    }

    /// Follow a navigation link. Always closes the mobile menu.
    pub fn select(&mut self, section: Section) -> ScrollRequest {
        self.menu_open = false;
        ScrollRequest::Anchor(section)
    }

    /// The "Admissions Open" call to action.
    pub fn admissions_cta(&mut self) -> ScrollRequest {
        self.select(Section::Admissions)
    }
}

/// Toggle labels for a given reduced-motion setting, desktop then mobile.
pub fn motion_labels_for(reduce_motion: bool) -> (&'static str, &'static str) {
    if reduce_motion {
        ("✓ Motion Off", "✓ Reduced Motion")
    } else {
        ("⚡ Motion On", "⚡ Full Animations")
    }
}
