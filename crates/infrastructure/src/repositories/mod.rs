pub mod in_memory_record_store;

pub use in_memory_record_store::InMemoryRecordStore;
