pub mod http_mail_client;
pub mod mongo_inquiry_repository;
pub mod twilio_messaging_client;
