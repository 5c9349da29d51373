#![allow(dead_code)]
mod dns_messages;

pub use dns_messages::*;
