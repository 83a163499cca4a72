mod client_ip;
mod error_handler;

pub use client_ip::{ClientIp, UNKNOWN_IP};
pub use error_handler::log_errors;
