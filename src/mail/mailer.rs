use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::config::Config;

/// Outbound message channel. Sending is best-effort: the boolean result is
/// advisory and callers are expected to discard it rather than fail the
/// operation that triggered the message.
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    async fn send(&self, recipients: &[String], subject: &str, body: &str, category: &str)
        -> bool;
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl SmtpMailer {
    pub fn new(config: &Config) -> SmtpMailer {
        let transport = match AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
        {
            Ok(builder) => {
                let mut builder = builder.port(config.smtp_port);
                if !config.smtp_username.is_empty() {
                    builder = builder.credentials(Credentials::new(
                        config.smtp_username.clone(),
                        config.smtp_password.clone(),
                    ));
                }
                builder.build()
            }
            Err(err) => {
                tracing::warn!(
                    "SMTP relay setup for {} failed ({}); falling back to localhost:25",
                    config.smtp_host,
                    err
                );
                AsyncSmtpTransport::<Tokio1Executor>::unencrypted_localhost()
            }
        };

        SmtpMailer {
            transport,
            from: config.mail_from.clone(),
        }
    }
}

#[async_trait]
impl NotificationGateway for SmtpMailer {
    async fn send(
        &self,
        recipients: &[String],
        subject: &str,
        body: &str,
        category: &str,
    ) -> bool {
        let from: Mailbox = match self.from.parse() {
            Ok(mailbox) => mailbox,
            Err(err) => {
                tracing::warn!("invalid MAIL_FROM address {}: {}", self.from, err);
                return false;
            }
        };

        let mut delivered_all = true;

        for recipient in recipients {
            if recipient.is_empty() || !recipient.contains('@') {
                tracing::warn!(category, "skipping invalid email recipient: {:?}", recipient);
                delivered_all = false;
                continue;
            }

            let mailbox: Mailbox = match recipient.parse() {
                Ok(mailbox) => mailbox,
                Err(err) => {
                    tracing::warn!(category, "unparseable email recipient {}: {}", recipient, err);
                    delivered_all = false;
                    continue;
                }
            };

            let message = Message::builder()
                .from(from.clone())
                .to(mailbox)
                .subject(subject)
                .header(ContentType::TEXT_PLAIN)
                .body(body.to_string());

            let message = match message {
                Ok(message) => message,
                Err(err) => {
                    tracing::warn!(category, "failed to build email for {}: {}", recipient, err);
                    delivered_all = false;
                    continue;
                }
            };

            match self.transport.send(message).await {
                Ok(_) => {
                    tracing::info!(category, "email sent to {}: {}", recipient, subject);
                }
                Err(err) => {
                    tracing::warn!(category, "email to {} failed: {}", recipient, err);
                    delivered_all = false;
                }
            }
        }

        delivered_all
    }
}
