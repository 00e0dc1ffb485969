use crate::domain::contact_form::ContactForm;
use crate::domain::new_inquiry::NewInquiry;

const CHAT_BANNER: &str = "New inquiry via the studio website";

/// Render the chat-channel notification body.
///
/// The optional fields fall back to "Not specified" when absent. The original
/// site rendered a missing number verbatim; that is normalized here to the
/// same placeholder used for the occasion.
pub fn chat_notification(inquiry: &NewInquiry, form: &ContactForm) -> String {
    format!(
        "*{}*\n\nName: {}\nEmail: {}\nNumber: {}\nOccasion: {}\nMessage: {}",
        CHAT_BANNER,
        inquiry.name,
        inquiry.email,
        or_placeholder(&form.number, "Not specified"),
        or_placeholder(&form.occasion, "Not specified"),
        inquiry.message,
    )
}

/// Render the email notification as a `(subject, html_body)` pair.
pub fn email_notification(inquiry: &NewInquiry, form: &ContactForm) -> (String, String) {
    let subject = format!("New inquiry from {}", inquiry.name);
    let html_body = format!(
        "<h2>{}</h2>\
         <p><b>Name:</b> {}</p>\
         <p><b>Email:</b> {}</p>\
         <p><b>Number:</b> {}</p>\
         <p><b>Occasion:</b> {}</p>\
         <p><b>Message:</b><br>{}</p>\
         <hr>\
         <p style=\"font-style: italic;\">Sent automatically from the studio website</p>",
        CHAT_BANNER,
        inquiry.name,
        inquiry.email,
        or_placeholder(&form.number, "Not provided"),
        or_placeholder(&form.occasion, "Not specified"),
        inquiry.message,
    );

    (subject, html_body)
}

fn or_placeholder<'a>(value: &'a Option<String>, placeholder: &'a str) -> &'a str {
    match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => placeholder,
    }
}
