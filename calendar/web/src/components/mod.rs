mod error_message;
mod event_modal;
mod loading_spinner;

pub use error_message::ErrorMessage;
pub use event_modal::EventModal;
pub use loading_spinner::LoadingSpinner;
