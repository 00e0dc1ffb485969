use crate::domain::contact_form::ContactForm;

/// A validated inquiry, ready to be persisted.
///
/// Only `name`, `email` and `message` are stored. The `number` and `occasion`
/// fields of the incoming form are forwarded to the notification channels but
/// deliberately left out of the durable record.
#[derive(Debug)]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl TryFrom<&ContactForm> for NewInquiry {
    type Error = String;

    fn try_from(form: &ContactForm) -> Result<Self, Self::Error> {
        Ok(Self {
            name: required_field(&form.name, "name")?,
            email: required_field(&form.email, "email")?,
            message: required_field(&form.message, "message")?,
        })
    }
}

fn required_field(value: &Option<String>, field: &str) -> Result<String, String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.clone()),
        _ => Err(format!("missing required field `{}`", field)),
    }
}
