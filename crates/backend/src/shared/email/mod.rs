pub mod resend_provider;
pub mod types;

pub use resend_provider::ResendEmailSender;
pub use types::{EmailError, EmailSender, OutgoingEmail};
