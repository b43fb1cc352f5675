//! Notification handler failures.

use thiserror::Error;

use crate::accordion::{AccordionEvent, SubscriptionId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Error a notification handler may return to signal that it could not process an event.
pub enum HandlerError {
    /// The handler rejected the event with a message.
    #[error("handler rejected event: {0}")]
    Rejected(String),
    /// The handler's downstream target is gone (for example, an unmounted view).
    #[error("handler target is no longer available")]
    Detached,
}

impl HandlerError {
    /// Builds a [`HandlerError::Rejected`] from any message.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("subscriber {subscription:?} failed on {event}: {error}")]
/// A handler failure isolated during dispatch. Dispatch continues past it.
pub struct NotificationFailure {
    /// Subscription whose handler failed.
    pub subscription: SubscriptionId,
    /// Event being delivered.
    pub event: AccordionEvent,
    /// Error returned by the handler.
    pub error: HandlerError,
}
