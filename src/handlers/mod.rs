mod health;
mod metrics;
mod password;
mod reset;

pub use health::health_handler;
pub use metrics::metrics_handler;
pub use password::{password_check_handler, username_check_handler};
pub use reset::forgot_password_handler;
