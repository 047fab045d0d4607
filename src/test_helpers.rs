//! Shared test utilities: filled-in forms and scripted lead sinks.
//!
//! ```ignore
//! use crate::test_helpers::*;
//!
//! let sink = RecordingSink::new(Duration::from_millis(1500));
//! let leads = sink.leads();
//! let mut form = ContactForm::new(Handle::current(), Arc::new(sink), toaster);
//! fill_contact(&form);
//! form.submit().unwrap();
//! form.settled().await;
//! assert_eq!(leads.lock().unwrap().len(), 1);
//! ```

use crate::forms::{AdmissionForm, ContactForm, Lead, LeadSink, SubmitError};
use crate::types::ProgramId;
use std::sync::{Arc, Mutex};
use std::time::Duration;

// =========================================================================
// Form fillers
// =========================================================================

/// The contact-form scenario: Asha Rao asking about evening slots.
pub fn fill_contact<S: LeadSink>(form: &ContactForm<S>) {
    for (name, value) in [
        ("name", "Asha Rao"),
        ("email", "asha@example.com"),
        ("phone", ""),
        ("subject", "Admission inquiry"),
        ("message", "Do you have evening slots?"),
    ] {
        form.set(name, value).unwrap();
    }
}

/// A complete admission enquiry, class picked through the dropdown.
pub fn fill_admission<S: LeadSink>(form: &mut AdmissionForm<S>) {
    for (name, value) in [
        ("childName", "Kabir"),
        ("childAge", "3 years 6 months"),
        ("parentName", "Meera Shah"),
        ("phone", "9876543210"),
        ("email", "meera@example.com"),
    ] {
        form.set(name, value).unwrap();
    }
    form.toggle_dropdown();
    form.select_class(ProgramId::Nursery);
}

// =========================================================================
// Sinks
// =========================================================================

/// Accepts every lead after `delay` and keeps a copy.
pub struct RecordingSink {
    delay: Duration,
    leads: Arc<Mutex<Vec<Lead>>>,
}

impl RecordingSink {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            leads: Arc::default(),
        }
    }

    /// Handle to the recorded leads that outlives the sink being moved into a form.
    pub fn leads(&self) -> Arc<Mutex<Vec<Lead>>> {
        Arc::clone(&self.leads)
    }
}

impl LeadSink for RecordingSink {
    async fn submit(&self, lead: Lead) -> Result<(), SubmitError> {
        tokio::time::sleep(self.delay).await;
        self.leads.lock().unwrap().push(lead);
        Ok(())
    }
}

/// Rejects every lead after `delay`.
pub struct FailingSink {
    delay: Duration,
}

impl FailingSink {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl LeadSink for FailingSink {
    async fn submit(&self, _lead: Lead) -> Result<(), SubmitError> {
        tokio::time::sleep(self.delay).await;
        Err(SubmitError::Unavailable)
    }
}
