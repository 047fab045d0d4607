//! Lead-capture forms.
//!
//! Two forms share one machinery:
//!
//! | Piece | Role |
//! |-------|------|
//! | [`FieldSpec`] | Input constraints of one control (required, max length, pattern, type) |
//! | [`FormFields`] | A record of field values plus its static field table |
//! | [`FormController`] | Submitting flag, constraint gate, cancelable submission task |
//! | [`LeadSink`] | Where a submitted lead goes; [`SimulatedSink`] waits and succeeds |
//! | [`Toaster`] | Transient success/failure notifications |
//!
//! The field tables drive both the rendered `<input>` attributes and the
//! constraint check run before a submission starts, so the two cannot drift.
//! Constraints mirror what a browser enforces natively; there is no separate
//! validation model and no per-field error text beyond the violation kind.

mod admission;
mod contact;
mod submit;
mod toast;

pub use admission::{AdmissionFields, AdmissionForm, AdmissionView};
pub use contact::{ContactFields, ContactForm};
pub use submit::{FormController, FormState, Lead, LeadSink, SimulatedSink, SubmitError, SubmitRefused};
pub use toast::{Toast, ToastFeed, ToastLevel, Toaster, channel};

use std::fmt;
use thiserror::Error;

/// Which of the two forms a piece of state or copy belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Admission,
    Contact,
}

impl FormKind {
    /// Element id of the rendered `<form>`.
    pub fn dom_id(self) -> &'static str {
        match self {
            FormKind::Admission => "admission-form",
            FormKind::Contact => "contact-form",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            FormKind::Admission => "Submit Enquiry",
            FormKind::Contact => "Send Message",
        }
    }

    pub fn pending_label(self) -> &'static str {
        match self {
            FormKind::Admission => "Submitting...",
            FormKind::Contact => "Sending...",
        }
    }

    pub fn success_toast(self) -> Toast {
        match self {
            FormKind::Admission => Toast::success(
                self,
                "Application submitted successfully!",
                "We will contact you shortly.",
            ),
            FormKind::Contact => Toast::success(
                self,
                "Message sent successfully!",
                "We will get back to you soon.",
            ),
        }
    }

    pub fn failure_toast(self) -> Toast {
        match self {
            FormKind::Admission => {
                Toast::error(self, "Failed to submit application", "Please try again later.")
            }
            FormKind::Contact => {
                Toast::error(self, "Failed to send message", "Please try again later.")
            }
        }
    }
}

/// Control type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Tel,
    Email,
    TextArea { rows: u8 },
    /// The admission form's custom single-select dropdown.
    Choice,
}

impl InputKind {
    /// `type` attribute for `<input>` controls.
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            InputKind::Text => Some("text"),
            InputKind::Tel => Some("tel"),
            InputKind::Email => Some("email"),
            InputKind::TextArea { .. } | InputKind::Choice => None,
        }
    }
}

/// The only pattern constraint the forms use: an exact count of ASCII digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Digits(usize),
}

impl Pattern {
    /// `pattern` attribute value.
    pub fn html(self) -> String {
        match self {
            Pattern::Digits(n) => format!("[0-9]{{{n}}}"),
        }
    }

    pub fn matches(self, value: &str) -> bool {
        match self {
            Pattern::Digits(n) => value.len() == n && value.bytes().all(|b| b.is_ascii_digit()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Form control name, also the key in the serialized lead.
    pub name: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    pub required: bool,
    /// Maximum length in characters. `None` for the class choice.
    pub max_len: Option<usize>,
    pub pattern: Option<Pattern>,
    pub placeholder: &'static str,
}

impl FieldSpec {
    /// Label with the required marker, as displayed.
    pub fn display_label(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else if self.kind == InputKind::Choice {
            self.label.to_string()
        } else {
            format!("{} (Optional)", self.label)
        }
    }

    /// Run the browser-equivalent constraint check on a value.
    pub fn check(&self, value: &str) -> Result<(), Violation> {
        if value.is_empty() {
            return if self.required {
                Err(Violation::ValueMissing)
            } else {
                Ok(())
            };
        }
        if let Some(max) = self.max_len.filter(|&max| value.chars().count() > max) {
            return Err(Violation::TooLong { max });
        }
        if self.kind == InputKind::Email && !is_email_shaped(value.trim()) {
            return Err(Violation::TypeMismatch);
        }
        if let Some(pattern) = self.pattern {
            if !pattern.matches(value) {
                return Err(Violation::PatternMismatch);
            }
        }
        Ok(())
    }

    /// Cut a typed value down to the field's `maxlength`.
    pub fn clamp(&self, value: &str) -> String {
        match self.max_len {
            Some(max) => value.chars().take(max).collect(),
            None => value.to_string(),
        }
    }
}

/// Why a value fails its field's input constraints.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    #[error("a value is required")]
    ValueMissing,
    #[error("longer than {max} characters")]
    TooLong { max: usize },
    #[error("does not match the requested format")]
    PatternMismatch,
    #[error("is not an email address")]
    TypeMismatch,
}

/// A violation attributed to a field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{field}: {violation}")]
pub struct FieldViolation {
    pub field: &'static str,
    pub violation: Violation,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("form has no field named {0:?}")]
    UnknownField(String),
    #[error("{value:?} is not one of the options of {field}")]
    InvalidOption { field: &'static str, value: String },
}

/// A record of form values together with its static field table.
pub trait FormFields: Default + Clone + PartialEq + fmt::Debug + Send + 'static {
    const KIND: FormKind;

    /// Field table in display order.
    fn specs() -> &'static [FieldSpec];

    /// Current value of a field, `""` when unset.
    fn value(&self, name: &str) -> Option<&str>;

    /// Apply an edit coming from the input boundary.
    ///
    /// Text values are clamped to the field's maximum length, the way
    /// `maxlength` stops typing.
    fn set(&mut self, name: &str, value: &str) -> Result<(), FormError>;

    fn into_lead(self) -> Lead;

    fn spec(name: &str) -> Option<&'static FieldSpec> {
        Self::specs().iter().find(|s| s.name == name)
    }

    /// First failing field in display order, if any.
    fn first_violation(&self) -> Option<FieldViolation> {
        Self::specs().iter().find_map(|spec| {
            let value = self.value(spec.name).unwrap_or_default();
            spec.check(value).err().map(|violation| FieldViolation {
                field: spec.name,
                violation,
            })
        })
    }

    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Loose `local@domain` shape check, close to what `type="email"` accepts.
pub fn is_email_shaped(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c));
    let domain_ok = !domain.is_empty()
        && domain.split('.').all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        });
    local_ok && domain_ok
}
