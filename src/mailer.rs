//! Report delivery: SMTP email via `lettre`, or a local HTML file for dry runs.
//!
//! The email is `multipart/mixed`: the HTML summary as the body and the raw
//! status snapshot as a `text/plain` attachment.

use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::future::Future;
use std::path::PathBuf;
use tracing::{info, instrument};

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("no recipients configured")]
    NoRecipients,

    #[error("failed to write report file: {0}")]
    Io(#[from] std::io::Error),
}

/// A finished report ready to hand to a delivery channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingReport {
    pub subject: String,
    pub html: String,
    pub attachment_name: String,
    pub attachment: Vec<u8>,
}

/// Accepts a final formatted report.
pub trait Delivery {
    fn deliver(&self, report: &OutgoingReport)
    -> impl Future<Output = Result<(), MailError>> + Send;
}

/// SMTP connection settings with credentials already resolved from the environment.
#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub from: String,
    pub to: Vec<String>,
}

/// Build the MIME message for `report`.
pub fn build_message(
    from: &str,
    to: &[String],
    report: &OutgoingReport,
) -> Result<Message, MailError> {
    if to.is_empty() {
        return Err(MailError::NoRecipients);
    }
    let mut builder = Message::builder()
        .from(from.parse::<Mailbox>()?)
        .subject(report.subject.clone());
    for recipient in to {
        builder = builder.to(recipient.parse::<Mailbox>()?);
    }
    let message = builder.multipart(
        MultiPart::mixed()
            .singlepart(SinglePart::html(report.html.clone()))
            .singlepart(
                Attachment::new(report.attachment_name.clone())
                    .body(report.attachment.clone(), ContentType::TEXT_PLAIN),
            ),
    )?;
    Ok(message)
}

/// Sends reports via SMTP with STARTTLS.
pub struct SmtpMailer {
    settings: SmtpSettings,
}

impl SmtpMailer {
    pub fn new(settings: SmtpSettings) -> Self {
        Self { settings }
    }
}

impl Delivery for SmtpMailer {
    #[instrument(skip(self, report), fields(operation = "send_email", host = %self.settings.host))]
    async fn deliver(&self, report: &OutgoingReport) -> Result<(), MailError> {
        let message = build_message(&self.settings.from, &self.settings.to, report)?;

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.settings.host)?
            .port(self.settings.port)
            .credentials(Credentials::new(
                self.settings.user.clone(),
                self.settings.password.clone(),
            ))
            .build();
        mailer.send(message).await?;

        info!(to = ?self.settings.to, "Email sent successfully");
        Ok(())
    }
}

/// Writes the HTML to a local file instead of sending it.
pub struct FileDelivery {
    path: PathBuf,
}

impl FileDelivery {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Delivery for FileDelivery {
    async fn deliver(&self, report: &OutgoingReport) -> Result<(), MailError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, report.html.as_bytes()).await?;
        info!(path = %self.path.display(), "Report written (email disabled)");
        Ok(())
    }
}
