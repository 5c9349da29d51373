pub mod query_logger;
pub mod server;

pub use query_logger::TracingQueryLog;
pub use server::DnsServerHandler;
