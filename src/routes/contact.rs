use crate::domain::contact_form::ContactForm;
use crate::domain::inquiry_repository::InquiryRepository;
use crate::domain::mail_notifier::MailNotifier;
use crate::domain::messaging_notifier::MessagingNotifier;
use crate::domain::new_inquiry::NewInquiry;
use crate::domain::notification::{chat_notification, email_notification};
use actix_web::{web, HttpResponse};

#[derive(serde::Serialize)]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: String,
}

#[derive(thiserror::Error)]
pub enum SubmissionError {
    #[error("{0}")]
    InvalidForm(String),
    #[error("failed to persist the inquiry")]
    Store(#[source] anyhow::Error),
    #[error("failed to send the chat notification")]
    Messaging(#[source] anyhow::Error),
    #[error("failed to send the email notification")]
    Mail(#[source] anyhow::Error),
}

impl std::fmt::Debug for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Handle one contact-form submission end to end.
///
/// The caller only ever observes a generic success or failure payload; the
/// specific failure (store, chat channel or mail channel) is logged, never
/// returned.
#[tracing::instrument(
    name = "Handling a contact form submission",
    skip(form, repository, messaging, mailer),
    fields(
        inquiry_name = ?form.name,
        inquiry_email = ?form.email)
)]
pub async fn submit_contact(
    form: web::Json<ContactForm>,
    repository: web::Data<dyn InquiryRepository>,
    messaging: web::Data<dyn MessagingNotifier>,
    mailer: web::Data<dyn MailNotifier>,
) -> HttpResponse {
    match process_submission(
        &form,
        repository.get_ref(),
        messaging.get_ref(),
        mailer.get_ref(),
    )
    .await
    {
        Ok(_) => HttpResponse::Ok().json(SubmissionResponse {
            success: true,
            message: "Form submitted successfully!".to_string(),
        }),
        Err(e) => {
            tracing::error!(error.cause_chain = ?e, "Failed to process a contact submission");

            HttpResponse::InternalServerError().json(SubmissionResponse {
                success: false,
                message: "Error processing request".to_string(),
            })
        }
    }
}

/// The ordered side-effect pipeline: persist, then chat, then mail.
/// Short-circuits on the first failure; there is no rollback, so an inquiry
/// whose notification step fails stays persisted.
async fn process_submission(
    form: &ContactForm,
    repository: &dyn InquiryRepository,
    messaging: &dyn MessagingNotifier,
    mailer: &dyn MailNotifier,
) -> Result<(), SubmissionError> {
    let inquiry = NewInquiry::try_from(form).map_err(SubmissionError::InvalidForm)?;

    repository
        .create(&inquiry)
        .await
        .map_err(SubmissionError::Store)?;

    messaging
        .send(&chat_notification(&inquiry, form))
        .await
        .map_err(SubmissionError::Messaging)?;

    let (subject, html_body) = email_notification(&inquiry, form);
    mailer
        .send(&subject, &html_body)
        .await
        .map_err(SubmissionError::Mail)?;

    Ok(())
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
