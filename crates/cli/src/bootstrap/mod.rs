mod config;
mod logging;
mod records;

pub use config::load_config;
pub use logging::init_logging;
pub use records::seed_records;
