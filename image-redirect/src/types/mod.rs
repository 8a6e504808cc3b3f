mod environment;
mod error;
mod redirect;

pub use environment::Environment;
pub use error::AppError;
pub use redirect::ImageRedirect;
