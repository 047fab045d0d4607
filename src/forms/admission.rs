use super::{
    FieldSpec, FormController, FormError, FormFields, FormKind, FormState, InputKind, Lead,
    LeadSink, Pattern, SubmitRefused, Toaster,
};
use crate::types::ProgramId;
use serde::Serialize;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Admissions enquiry values.
///
/// `class_applying` can only hold one of the five programs; "unselected" is
/// `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionFields {
    pub child_name: String,
    pub child_age: String,
    pub class_applying: Option<ProgramId>,
    pub parent_name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

pub const CLASS_FIELD: &str = "classApplying";

const SPECS: &[FieldSpec] = &[
    FieldSpec {
        name: "childName",
        label: "Child's Name",
        kind: InputKind::Text,
        required: true,
        max_len: Some(100),
        pattern: None,
        placeholder: "Enter child's name",
    },
    FieldSpec {
        name: "childAge",
        label: "Child's Age",
        kind: InputKind::Text,
        required: true,
        max_len: Some(20),
        pattern: None,
        placeholder: "e.g., 3 years 6 months",
    },
    FieldSpec {
        name: CLASS_FIELD,
        label: "Class Applying For",
        kind: InputKind::Choice,
        required: true,
        max_len: None,
        pattern: None,
        placeholder: "Select a program",
    },
    FieldSpec {
        name: "parentName",
        label: "Parent/Guardian Name",
        kind: InputKind::Text,
        required: true,
        max_len: Some(100),
        pattern: None,
        placeholder: "Enter parent's name",
    },
    FieldSpec {
        name: "phone",
        label: "Phone Number",
        kind: InputKind::Tel,
        required: true,
        max_len: Some(10),
        pattern: Some(Pattern::Digits(10)),
        placeholder: "10-digit mobile number",
    },
    FieldSpec {
        name: "email",
        label: "Email Address",
        kind: InputKind::Email,
        required: true,
        max_len: Some(255),
        pattern: None,
        placeholder: "your@email.com",
    },
    FieldSpec {
        name: "message",
        label: "Message",
        kind: InputKind::TextArea { rows: 4 },
        required: false,
        max_len: Some(1000),
        pattern: None,
        placeholder: "Any specific queries or requirements...",
    },
];

impl AdmissionFields {
    fn slot(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "childName" => Some(&mut self.child_name),
            "childAge" => Some(&mut self.child_age),
            "parentName" => Some(&mut self.parent_name),
            "phone" => Some(&mut self.phone),
            "email" => Some(&mut self.email),
            "message" => Some(&mut self.message),
            _ => None,
        }
    }
}

impl FormFields for AdmissionFields {
    const KIND: FormKind = FormKind::Admission;

    fn specs() -> &'static [FieldSpec] {
        SPECS
    }

    fn value(&self, name: &str) -> Option<&str> {
        match name {
            "childName" => Some(&self.child_name),
            "childAge" => Some(&self.child_age),
            CLASS_FIELD => Some(self.class_applying.map(ProgramId::title).unwrap_or_default()),
            "parentName" => Some(&self.parent_name),
            "phone" => Some(&self.phone),
            "email" => Some(&self.email),
            "message" => Some(&self.message),
            _ => None,
        }
    }

    fn set(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        if name == CLASS_FIELD {
            self.class_applying = match value {
                "" => None,
                title => Some(ProgramId::from_title(title).ok_or_else(|| {
                    FormError::InvalidOption {
                        field: CLASS_FIELD,
                        value: title.to_string(),
                    }
                })?),
            };
            return Ok(());
        }
        let spec = Self::spec(name).ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        let slot = self
            .slot(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        *slot = spec.clamp(value);
        Ok(())
    }

    fn into_lead(self) -> Lead {
        Lead::Admission(self)
    }
}

/// Renderable state of the admission form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdmissionView {
    pub form: FormState<AdmissionFields>,
    pub dropdown_open: bool,
}

/// Admission form controller plus the class dropdown.
///
/// The dropdown opens and closes independently of submission.
pub struct AdmissionForm<S: LeadSink> {
    controller: FormController<AdmissionFields, S>,
    dropdown_open: bool,
}

impl<S: LeadSink> AdmissionForm<S> {
    pub fn new(runtime: Handle, sink: Arc<S>, toaster: Toaster) -> Self {
        Self {
            controller: FormController::new(runtime, sink, toaster),
            dropdown_open: false,
        }
    }

    pub fn set(&self, name: &str, value: &str) -> Result<(), FormError> {
        self.controller.set(name, value)
    }

    pub fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    /// Pick a class from the dropdown; the dropdown closes.
    pub fn select_class(&mut self, class: ProgramId) {
        self.controller
            .update(|fields| fields.class_applying = Some(class));
        self.dropdown_open = false;
    }

    pub fn fields(&self) -> AdmissionFields {
        self.controller.fields()
    }

    pub fn is_submitting(&self) -> bool {
        self.controller.is_submitting()
    }

    pub fn submit(&mut self) -> Result<(), SubmitRefused> {
        self.controller.submit()
    }

    pub async fn settled(&mut self) {
        self.controller.settled().await
    }

    pub fn view(&self) -> AdmissionView {
        AdmissionView {
            form: self.controller.snapshot(),
            dropdown_open: self.dropdown_open,
        }
    }
}
