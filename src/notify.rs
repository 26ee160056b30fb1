//! User-facing notices for failed lookups
//!
//! The reducer only declares `Effect::Notify`; which channel carries the
//! message is decided by the [`Notifier`] the binary is configured with.

use std::io::Write;
use std::sync::{Arc, Mutex};

use crate::action::Action;

#[derive(thiserror::Error, Debug)]
pub enum NotifyError {
    #[error("terminal write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("notifier unavailable")]
    Unavailable,
}

/// Delivers a message to the user.
///
/// Returning an action feeds it back into the store, which is how the
/// in-app modal gets opened.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str) -> Result<Option<Action>, NotifyError>;
}

/// Blocking in-app notice (the default)
#[derive(Debug, Default, Clone, Copy)]
pub struct ModalNotifier;

impl Notifier for ModalNotifier {
    fn notify(&self, message: &str) -> Result<Option<Action>, NotifyError> {
        Ok(Some(Action::NoticeShow(message.to_string())))
    }
}

/// Rings the terminal bell, then opens the modal
#[derive(Debug, Default, Clone, Copy)]
pub struct BellNotifier;

impl Notifier for BellNotifier {
    fn notify(&self, message: &str) -> Result<Option<Action>, NotifyError> {
        let mut stderr = std::io::stderr();
        stderr.write_all(b"\x07")?;
        stderr.flush()?;
        ModalNotifier.notify(message)
    }
}

/// Log only; the UI stays interactive
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) -> Result<Option<Action>, NotifyError> {
        tracing::warn!(%message, "lookup failed");
        Ok(None)
    }
}

/// Captures messages in memory
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records, then reports a delivery failure
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) -> Result<Option<Action>, NotifyError> {
        self.messages
            .lock()
            .map_err(|_| NotifyError::Unavailable)?
            .push(message.to_string());
        if self.fail {
            return Err(NotifyError::Unavailable);
        }
        Ok(None)
    }
}

/// Notifier selection for the command line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum NotifyMode {
    #[default]
    Modal,
    Bell,
    Log,
}

impl NotifyMode {
    pub fn notifier(self) -> Arc<dyn Notifier> {
        match self {
            NotifyMode::Modal => Arc::new(ModalNotifier),
            NotifyMode::Bell => Arc::new(BellNotifier),
            NotifyMode::Log => Arc::new(LogNotifier),
        }
    }
}

/// Hand `message` to `notifier`; delivery failures are logged and dropped.
pub fn deliver(notifier: &dyn Notifier, message: &str) -> Option<Action> {
    match notifier.notify(message) {
        Ok(action) => action,
        Err(error) => {
            tracing::warn!(%error, %message, "notice not delivered");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_opens_notice() {
        let action = deliver(&ModalNotifier, "city not found");
        assert_eq!(action, Some(Action::NoticeShow("city not found".into())));
    }

    #[test]
    fn test_log_notifier_emits_nothing() {
        assert_eq!(deliver(&LogNotifier, "city not found"), None);
    }

    #[test]
    fn test_recording_notifier_captures() {
        let notifier = RecordingNotifier::new();
        deliver(&notifier, "first");
        deliver(&notifier, "second");
        assert_eq!(notifier.messages(), vec!["first", "second"]);
    }

    #[test]
    fn test_failing_notifier_is_swallowed() {
        let notifier = RecordingNotifier::failing();
        assert_eq!(deliver(&notifier, "boom"), None);
        assert_eq!(notifier.messages(), vec!["boom"]);
    }

    #[test]
    fn test_mode_selects_notifier() {
        let notifier = NotifyMode::Modal.notifier();
        assert!(notifier.notify("x").unwrap().is_some());
        let notifier = NotifyMode::Log.notifier();
        assert!(notifier.notify("x").unwrap().is_none());
    }
}
