use lettre::message::{Mailbox, MultiPart, SinglePart, header};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, Message, SmtpTransport, Transport};
use tracing::{info, instrument};

use staffee_config::EmailConfig;
use staffee_core::AppError;
use staffee_models::contact::ContactMessage;

use crate::utils::html::escape;

pub struct EmailService {
    config: EmailConfig,
}

impl EmailService {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Relays a contact-form submission to the site inbox, with the sender
    /// as `Reply-To`. Returns `Ok(false)` without sending when SMTP is off.
    #[instrument(skip(self, contact), fields(from = %contact.email))]
    pub async fn send_contact_message(&self, contact: &ContactMessage) -> Result<bool, AppError> {
        if !self.config.enabled {
            info!("SMTP disabled, contact message not relayed");
            return Ok(false);
        }

        let email = self.build_contact_message(contact)?;
        self.send(email).await?;
        Ok(true)
    }

    pub fn build_contact_message(&self, contact: &ContactMessage) -> Result<Message, AppError> {
        let from: Mailbox = format!("{} <{}>", self.config.from_name, self.config.from_email)
            .parse()
            .map_err(|e| AppError::internal_error(format!("Invalid from email: {}", e)))?;
        let to: Mailbox = self
            .config
            .contact_email
            .parse()
            .map_err(|e| AppError::internal_error(format!("Invalid contact email: {}", e)))?;
        // The display name is free text; lettre quotes or encodes it.
        let sender: Address = contact
            .email
            .parse()
            .map_err(|e| AppError::bad_request(anyhow::anyhow!("Invalid email address: {}", e)))?;
        let reply_to = Mailbox::new(Some(contact.name.clone()), sender);

        let text_body = format!(
            "New contact message\n\n\
             From: {} <{}>\n\
             Subject: {}\n\n\
             {}",
            contact.name, contact.email, contact.subject, contact.message
        );

        Message::builder()
            .from(from)
            .to(to)
            .reply_to(reply_to)
            .subject(format!("[Contact] {}", contact.subject))
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_PLAIN)
                            .body(text_body),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_HTML)
                            .body(contact_template(contact)),
                    ),
            )
            .map_err(|e| AppError::internal_error(format!("Failed to build email: {}", e)))
    }

    async fn send(&self, email: Message) -> Result<(), AppError> {
        let mailer = if self.config.smtp_username.is_empty() {
            SmtpTransport::builder_dangerous(&self.config.smtp_host)
                .port(self.config.smtp_port)
                .build()
        } else {
            let creds = Credentials::new(
                self.config.smtp_username.clone(),
                self.config.smtp_password.clone(),
            );

            SmtpTransport::relay(&self.config.smtp_host)
                .map_err(|e| {
                    AppError::internal_error(format!("Failed to create SMTP relay: {}", e))
                })?
                .port(self.config.smtp_port)
                .credentials(creds)
                .build()
        };

        tokio::task::spawn_blocking(move || mailer.send(&email))
            .await
            .map_err(|e| AppError::internal_error(format!("Task join error: {}", e)))?
            .map_err(|e| AppError::internal_error(format!("Failed to send email: {}", e)))?;

        Ok(())
    }
}

fn contact_template(contact: &ContactMessage) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<body style="font-family: Arial, sans-serif; color: #333333;">
    <h2 style="color: #0F766E;">New contact message</h2>
    <p><strong>From:</strong> {name} &lt;{email}&gt;</p>
    <p><strong>Subject:</strong> {subject}</p>
    <p style="white-space: pre-wrap;">{message}</p>
</body>
</html>"#,
        name = escape(&contact.name),
        email = escape(&contact.email),
        subject = escape(&contact.subject),
        message = escape(&contact.message),
    )
}
