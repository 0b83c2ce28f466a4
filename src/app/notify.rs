//! Outward notifications (the "toasts"): success with context, error with a reason code.

use crate::domain::LedgerError;
use serde::Serialize;
use tokio::sync::broadcast;

const CHANNEL_CAPACITY: usize = 64;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    Success {
        message: String,
        /// Credits involved, when the event moved any.
        #[serde(skip_serializing_if = "Option::is_none")]
        amount: Option<u64>,
    },
    Error {
        code: &'static str,
        message: String,
    },
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Notification::Success {
            message: message.into(),
            amount: None,
        }
    }

    pub fn success_with_amount(message: impl Into<String>, amount: u64) -> Self {
        Notification::Success {
            message: message.into(),
            amount: Some(amount),
        }
    }

    pub fn from_error(err: &LedgerError) -> Self {
        Notification::Error {
            code: err.code(),
            message: err.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notification::Error { .. })
    }
}

/// Fan-out of notifications to any number of subscribers. Publishing never blocks and never
/// fails: with no subscribers the notification is only logged.
pub struct Notifier {
    sender: broadcast::Sender<Notification>,
}

impl Notifier {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }

    pub fn publish(&self, notification: Notification) {
        match &notification {
            Notification::Success { message, amount: Some(amount) } => {
                println!("> Notify: {} (-{} credits)", message, amount)
            }
            Notification::Success { message, amount: None } => println!("> Notify: {}", message),
            Notification::Error { code, message } => {
                eprintln!("> Notify: error [{}]: {}", code, message)
            }
        }
        // No receivers is fine.
        let _ = self.sender.send(notification);
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
