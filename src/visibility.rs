//! One-shot "has entered the viewport" latches.
//!
//! Every animated section owns a latch that starts `false` and flips to `true`
//! the first time the section is reported visible. It never flips back. The
//! flag only gates entrance animations; no content depends on it.
//!
//! Latches are `tokio::sync::watch` channels so any number of observers can
//! follow a section as a stream: the stream yields the current value first,
//! then at most one more item when the latch fires.

use crate::types::Section;
use std::collections::HashMap;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

#[derive(Debug)]
pub struct VisibilityObserver {
    latches: HashMap<Section, watch::Sender<bool>>,
}

impl Default for VisibilityObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibilityObserver {
    pub fn new() -> Self {
        let latches = Section::ALL
            .into_iter()
            .map(|section| (section, watch::Sender::new(false)))
            .collect();
        Self { latches }
    }

    /// Feed an intersection observation for `section`.
    ///
    /// Returns `true` only for the observation that fires the latch.
    pub fn report(&self, section: Section, intersecting: bool) -> bool {
        let fired = self.latch(section).send_if_modified(|entered| {
            if intersecting && !*entered {
                *entered = true;
                true
            } else {
                false
            }
        });
        if fired {
            log::debug!("section #{} entered the viewport", section.id());
        }
        fired
    }

    pub fn has_entered(&self, section: Section) -> bool {
        *self.latch(section).borrow()
    }

    /// Follow a section's latch as a stream of `bool`.
    pub fn observe(&self, section: Section) -> WatchStream<bool> {
        WatchStream::new(self.latch(section).subscribe())
    }

    /// Sections whose latch has fired, in page order.
    pub fn entered(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| self.has_entered(*s))
            .collect()
    }

    fn latch(&self, section: Section) -> &watch::Sender<bool> {
        // Populated for every Section in new().
        &self.latches[&section]
    }
}
