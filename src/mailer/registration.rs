//! Notifications for users registering by email.

use std::sync::Arc;

use crate::config::MailerConfig;
use crate::mailer::{is_address, Delivery, Mail, MailError};

pub struct UserRegistrationByEmailMailer {
    from: String,
    delivery: Arc<dyn Delivery>,
}

impl UserRegistrationByEmailMailer {
    pub fn new(config: &MailerConfig, delivery: Arc<dyn Delivery>) -> Self {
        Self {
            from: config.from.clone(),
            delivery,
        }
    }

    /// Compose the account activation message.
    pub fn account_activation(&self, to: &str) -> Result<Mail, MailError> {
        self.compose(
            to,
            "Account activation",
            "Hi,\n\nPlease activate your account to finish signing up.\n",
        )
    }

    /// Compose the password reset message.
    pub fn password_reset(&self, to: &str) -> Result<Mail, MailError> {
        self.compose(
            to,
            "Password reset",
            "Hi,\n\nA password reset was requested for your account.\n",
        )
    }

    pub fn deliver_account_activation(&self, to: &str) -> Result<Mail, MailError> {
        let mail = self.account_activation(to)?;
        self.delivery.deliver(&mail)?;
        Ok(mail)
    }

    pub fn deliver_password_reset(&self, to: &str) -> Result<Mail, MailError> {
        let mail = self.password_reset(to)?;
        self.delivery.deliver(&mail)?;
        Ok(mail)
    }

    fn compose(&self, to: &str, subject: &str, body: &str) -> Result<Mail, MailError> {
        if !is_address(to) {
            return Err(MailError::InvalidRecipient(to.to_string()));
        }
        Ok(Mail {
            subject: subject.to_string(),
            to: vec![to.to_string()],
            from: vec![self.from.clone()],
            body: body.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mailer::MemoryDelivery;

    fn mailer(delivery: Arc<MemoryDelivery>) -> UserRegistrationByEmailMailer {
        UserRegistrationByEmailMailer::new(&MailerConfig::default(), delivery)
    }

    #[test]
    fn test_account_activation() {
        let mail = mailer(Arc::new(MemoryDelivery::new()))
            .account_activation("to@example.org")
            .unwrap();
        assert_eq!(mail.subject, "Account activation");
        assert_eq!(mail.to, vec!["to@example.org"]);
        assert_eq!(mail.from, vec!["from@example.com"]);
        assert!(mail.body.contains("Hi"));
    }

    #[test]
    fn test_password_reset_delivered() {
        let delivery = Arc::new(MemoryDelivery::new());
        let mail = mailer(delivery.clone())
            .deliver_password_reset("to@example.org")
            .unwrap();
        assert_eq!(mail.subject, "Password reset");
        assert_eq!(delivery.deliveries(), vec![mail]);
    }

    #[test]
    fn test_rejects_bad_recipient() {
        let delivery = Arc::new(MemoryDelivery::new());
        let err = mailer(delivery.clone())
            .deliver_account_activation("not-an-address")
            .unwrap_err();
        assert_eq!(err, MailError::InvalidRecipient("not-an-address".into()));
        assert!(delivery.deliveries().is_empty());
    }
}
