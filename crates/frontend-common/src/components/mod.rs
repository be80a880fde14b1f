mod message;
mod spinner;

pub use message::MessageBanner;
pub use spinner::LoadingSpinner as Spinner;
