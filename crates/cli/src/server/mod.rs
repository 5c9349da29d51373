pub mod dns;
pub mod shutdown;
pub mod web;

pub use dns::start_dns_server;
pub use shutdown::shutdown_signal;
pub use web::start_web_server;
