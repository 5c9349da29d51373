pub mod dns;
pub mod records;

pub use dns::ResolveQueryUseCase;
pub use records::{
    CreateRecordUseCase, GetRecordUseCase, ListRecordsUseCase, RemoveRecordUseCase,
};
