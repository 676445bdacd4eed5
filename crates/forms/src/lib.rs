// forms crate

mod context;
mod form;
mod notify;
mod registry;

pub use context::{FormContext, Notifier};
pub use form::{ErrorIndicator, Form};
pub use notify::ConsoleNotifier;
pub use registry::{FormError, FormRegistry};
