use lettre::message::{Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use log::info;

use crate::config::EmailConfig;
use crate::error::{ConfigError, DeliveryError};

/// SMTP delivery channel for rendered reports.
#[derive(Debug)]
pub struct EmailService {
    smtp_server: String,
    port: u16,
    username: String,
    password: String,
}

impl EmailService {
    /// Validate the delivery configuration. No network I/O happens here.
    pub fn new(config: EmailConfig) -> Result<Self, ConfigError> {
        let smtp_server = config
            .smtp_server
            .ok_or(ConfigError::MissingEmailValue("EMAIL_SMTP_SERVER"))?;
        let username = config
            .username
            .ok_or(ConfigError::MissingEmailValue("EMAIL_USERNAME"))?;
        let password = config
            .password
            .ok_or(ConfigError::MissingEmailValue("EMAIL_PASSWORD"))?;

        Ok(Self {
            smtp_server,
            port: config.port,
            username,
            password,
        })
    }

    /// Send `html_body` to `recipient` as the single HTML part of a
    /// multipart message. The connection is opened with STARTTLS,
    /// authenticated, and released when this call returns, whatever the
    /// outcome.
    pub fn send(
        &self,
        recipient: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<(), DeliveryError> {
        let from: Mailbox = self.username.parse()?;
        let to: Mailbox = recipient.parse()?;

        let email = Message::builder()
            .from(from)
            .to(to)
            .subject(subject)
            .multipart(MultiPart::mixed().singlepart(SinglePart::html(html_body.to_string())))?;

        let credentials = Credentials::new(self.username.clone(), self.password.clone());
        let mailer = SmtpTransport::starttls_relay(&self.smtp_server)?
            .port(self.port)
            .credentials(credentials)
            .build();

        mailer.send(&email)?;
        info!("Report emailed to {recipient}");
        Ok(())
    }
}
