pub mod contact_form;
pub mod inquiry_repository;
pub mod mail_notifier;
pub mod messaging_notifier;
pub mod new_inquiry;
pub mod notification;
