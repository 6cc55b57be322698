mod health_check;
mod registrations;

pub use health_check::*;
pub use registrations::*;
