//! Transient notifications raised by form submissions.

use super::FormKind;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toast {
    pub form: FormKind,
    pub level: ToastLevel,
    pub title: &'static str,
    pub description: &'static str,
}

impl Toast {
    pub fn success(form: FormKind, title: &'static str, description: &'static str) -> Self {
        Self {
            form,
            level: ToastLevel::Success,
            title,
            description,
        }
    }

    pub fn error(form: FormKind, title: &'static str, description: &'static str) -> Self {
        Self {
            form,
            level: ToastLevel::Error,
            title,
            description,
        }
    }
}

/// Sending half, cloned into every form.
#[derive(Debug, Clone)]
pub struct Toaster {
    tx: mpsc::UnboundedSender<Toast>,
}

/// Receiving half, drained by whatever displays notifications.
#[derive(Debug)]
pub struct ToastFeed {
    rx: mpsc::UnboundedReceiver<Toast>,
}

pub fn channel() -> (Toaster, ToastFeed) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Toaster { tx }, ToastFeed { rx })
}

impl Toaster {
    pub fn notify(&self, toast: Toast) {
        if self.tx.send(toast).is_err() {
            log::debug!("toast dropped, nobody is listening: {}", toast.title);
        }
    }
}

impl ToastFeed {
    /// Everything raised so far, without waiting.
    pub fn drain(&mut self) -> Vec<Toast> {
        let mut toasts = Vec::new();
        while let Ok(toast) = self.rx.try_recv() {
            toasts.push(toast);
        }
        toasts
    }
}
