//! Submission: the constraint gate, the in-flight task, and its settlement.
//!
//! A submission runs as a tokio task owned by its [`FormController`]. Dropping
//! the controller aborts the task, so a form that is gone never raises a toast
//! or resets fields after the fact.

use super::{AdmissionFields, ContactFields, FieldViolation, FormError, FormFields, Toaster};
use crate::config::BehaviorConfig;
use serde::Serialize;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// A submitted form, tagged with the form it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum Lead {
    Admission(AdmissionFields),
    Contact(ContactFields),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("lead endpoint unavailable")]
    Unavailable,
}

/// Why [`FormController::submit`] did not start a submission.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRefused {
    #[error("a submission is already in progress")]
    Pending,
    #[error("invalid field {0}")]
    Invalid(FieldViolation),
}

/// Destination of submitted leads.
pub trait LeadSink: Send + Sync + 'static {
    fn submit(&self, lead: Lead) -> impl Future<Output = Result<(), SubmitError>> + Send;
}

/// Stand-in endpoint: waits a fixed delay, then accepts every lead.
#[derive(Debug, Clone)]
pub struct SimulatedSink {
    delay: Duration,
}

impl SimulatedSink {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

/// The configured `behavior.submit_delay_ms`, the same delay the page script
/// waits before settling.
impl From<&BehaviorConfig> for SimulatedSink {
    fn from(behavior: &BehaviorConfig) -> Self {
        Self::new(behavior.submit_delay())
    }
}

impl LeadSink for SimulatedSink {
    async fn submit(&self, lead: Lead) -> Result<(), SubmitError> {
        tokio::time::sleep(self.delay).await;
        match serde_json::to_string(&lead) {
            Ok(json) => log::debug!("simulated lead accepted: {json}"),
            Err(err) => log::debug!("simulated lead accepted (unserializable: {err})"),
        }
        Ok(())
    }
}

/// Field values plus the submitting flag; what a renderer needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState<F> {
    pub fields: F,
    pub submitting: bool,
}

pub struct FormController<F: FormFields, S: LeadSink> {
    state: Arc<Mutex<FormState<F>>>,
    sink: Arc<S>,
    toaster: Toaster,
    runtime: Handle,
    in_flight: Option<JoinHandle<()>>,
}

impl<F: FormFields, S: LeadSink> FormController<F, S> {
    pub fn new(runtime: Handle, sink: Arc<S>, toaster: Toaster) -> Self {
        Self {
            state: Arc::new(Mutex::new(FormState::default())),
            sink,
            toaster,
            runtime,
            in_flight: None,
        }
    }

    /// Edit one field. Edits are accepted while a submission is pending.
    pub fn set(&self, name: &str, value: &str) -> Result<(), FormError> {
        self.lock().fields.set(name, value)
    }

    pub(crate) fn update(&self, edit: impl FnOnce(&mut F)) {
        edit(&mut self.lock().fields);
    }

    pub fn fields(&self) -> F {
        self.lock().fields.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.lock().submitting
    }

    pub fn snapshot(&self) -> FormState<F> {
        self.lock().clone()
    }

    /// Start a submission of the current values.
    ///
    /// Refused without side effects when a submission is already pending or a
    /// field fails its input constraints. Otherwise the submitting flag is set
    /// before this returns and cleared when the sink settles.
    pub fn submit(&mut self) -> Result<(), SubmitRefused> {
        let lead = {
            let mut state = self.lock();
            if state.submitting {
                return Err(SubmitRefused::Pending);
            }
            if let Some(violation) = state.fields.first_violation() {
                log::debug!("{:?} form blocked: {violation}", F::KIND);
                return Err(SubmitRefused::Invalid(violation));
            }
            state.submitting = true;
            state.fields.clone().into_lead()
        };
        log::debug!("{:?} form submitting", F::KIND);

        let state = Arc::clone(&self.state);
        let sink = Arc::clone(&self.sink);
        let toaster = self.toaster.clone();
        self.in_flight = Some(self.runtime.spawn(async move {
            let outcome = sink.submit(lead).await;
            settle(&state, &toaster, outcome);
        }));
        Ok(())
    }

    /// Wait for the in-flight submission, if any, to settle.
    pub async fn settled(&mut self) {
        if let Some(task) = self.in_flight.take() {
            if let Err(err) = task.await {
                log::debug!("{:?} submission task ended early: {err}", F::KIND);
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, FormState<F>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<F: FormFields, S: LeadSink> Drop for FormController<F, S> {
    fn drop(&mut self) {
        if let Some(task) = self.in_flight.take() {
            if !task.is_finished() {
                log::debug!("{:?} form dropped mid-submission, cancelling", F::KIND);
            }
            task.abort();
        }
    }
}

fn settle<F: FormFields>(
    state: &Mutex<FormState<F>>,
    toaster: &Toaster,
    outcome: Result<(), SubmitError>,
) {
    let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
    state.submitting = false;
    match outcome {
        Ok(()) => {
            state.fields = F::default();
            toaster.notify(F::KIND.success_toast());
        }
        Err(err) => {
            log::warn!("{:?} form submission failed: {err}", F::KIND);
            toaster.notify(F::KIND.failure_toast());
        }
    }
}
