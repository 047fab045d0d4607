use super::{FieldSpec, FormController, FormError, FormFields, FormKind, InputKind, Lead};
use serde::Serialize;

/// General enquiry form.
pub type ContactForm<S> = FormController<ContactFields, S>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

const SPECS: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        label: "Your Name",
        kind: InputKind::Text,
        required: true,
        max_len: Some(100),
        pattern: None,
        placeholder: "John Doe",
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
        name: "phone",
        label: "Phone Number",
        kind: InputKind::Tel,
        required: false,
        max_len: Some(15),
        pattern: None,
        placeholder: "+91 1234567890",
    },
    FieldSpec {
        name: "subject",
        label: "Subject",
        kind: InputKind::Text,
        required: true,
        max_len: Some(200),
        pattern: None,
        placeholder: "Admission inquiry",
    },
    FieldSpec {
        name: "message",
        label: "Message",
        kind: InputKind::TextArea { rows: 5 },
        required: true,
        max_len: Some(1000),
        pattern: None,
        placeholder: "Your message here...",
    },
];

impl ContactFields {
    fn slot(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "name" => Some(&mut self.name),
            "email" => Some(&mut self.email),
            "phone" => Some(&mut self.phone),
            "subject" => Some(&mut self.subject),
            "message" => Some(&mut self.message),
            _ => None,
        }
    }
}

impl FormFields for ContactFields {
    const KIND: FormKind = FormKind::Contact;

    fn specs() -> &'static [FieldSpec] {
        SPECS
    }

    fn value(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            "phone" => Some(&self.phone),
            "subject" => Some(&self.subject),
            "message" => Some(&self.message),
            _ => None,
        }
    }

    fn set(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        let spec = Self::spec(name).ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        let slot = self
            .slot(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        *slot = spec.clamp(value);
        Ok(())
    }

    fn into_lead(self) -> Lead {
        Lead::Contact(self)
    }
}
