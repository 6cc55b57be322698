mod evaluation;
mod registration;

pub use evaluation::{register, RegisterError, RegisterResponse};
pub use registration::{BrowserName, Registration, Session, WebBrowser};
