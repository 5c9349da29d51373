pub mod dns;
pub mod repositories;
