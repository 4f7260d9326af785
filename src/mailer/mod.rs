//! Outgoing mail.
//!
//! # Data Flow
//! ```text
//! Mailer (registration.rs) builds a Mail
//!     → Delivery::deliver
//!         LogDelivery: structured log event
//!         MemoryDelivery: kept in memory, inspected by tests
//! ```

pub mod registration;

use std::sync::Mutex;

use thiserror::Error;

pub use registration::UserRegistrationByEmailMailer;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MailError {
    #[error("invalid recipient address: {0:?}")]
    InvalidRecipient(String),

    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// A composed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mail {
    pub subject: String,
    pub to: Vec<String>,
    pub from: Vec<String>,
    pub body: String,
}

/// Transport for composed messages.
pub trait Delivery: Send + Sync {
    fn deliver(&self, mail: &Mail) -> Result<(), MailError>;
}

/// Emits each message as a log event instead of sending it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDelivery;

impl Delivery for LogDelivery {
    fn deliver(&self, mail: &Mail) -> Result<(), MailError> {
        tracing::info!(
            to = ?mail.to,
            from = ?mail.from,
            subject = %mail.subject,
            "Mail delivered"
        );
        Ok(())
    }
}

/// Keeps delivered messages in memory.
#[derive(Debug, Default)]
pub struct MemoryDelivery {
    outbox: Mutex<Vec<Mail>>,
}

impl MemoryDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages delivered so far, oldest first.
    pub fn deliveries(&self) -> Vec<Mail> {
        self.outbox
            .lock()
            .map(|outbox| outbox.clone())
            .unwrap_or_default()
    }
}

impl Delivery for MemoryDelivery {
    fn deliver(&self, mail: &Mail) -> Result<(), MailError> {
        let mut outbox = self
            .outbox
            .lock()
            .map_err(|_| MailError::Delivery("outbox lock poisoned".to_string()))?;
        outbox.push(mail.clone());
        Ok(())
    }
}

/// Loose address check: one `@` with something on both sides, no spaces.
pub fn is_address(address: &str) -> bool {
    match address.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !address.chars().any(|c| c.is_whitespace())
        }
        None => false,
    }
}
