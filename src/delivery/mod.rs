mod console;
mod webhook;

pub use console::ConsoleSender;
pub use webhook::WebhookSender;

use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

use crate::error::MealPlanError;

/// Who a message goes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    /// A messaging group, addressed by its invite/group id
    Group(String),
    /// A single contact, addressed by phone number
    Contact(String),
}

impl Recipient {
    pub fn group(id: impl Into<String>) -> Self {
        Recipient::Group(id.into().trim().to_string())
    }

    pub fn contact(phone: impl Into<String>) -> Self {
        Recipient::Contact(phone.into().trim().to_string())
    }

    pub fn id(&self) -> &str {
        match self {
            Recipient::Group(id) | Recipient::Contact(id) => id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Recipient::Group(_) => "group",
            Recipient::Contact(_) => "contact",
        }
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.id())
    }
}

/// Timing of a single send.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeliveryOptions {
    /// Wait before sending
    pub delay: Duration,
    /// Do not keep the connection to the gateway open afterwards
    pub close_after_send: bool,
    /// Wait before the one retry of a failed send
    pub retry_wait: Duration,
}

/// Unified trait for outbound message channels
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Get the channel name (e.g., "webhook", "console")
    fn sender_name(&self) -> &str;

    async fn send(
        &self,
        recipient: &Recipient,
        body: &str,
        options: &DeliveryOptions,
    ) -> Result<(), MealPlanError>;
}
