pub mod create;
pub mod get;
pub mod list;
pub mod remove;

pub use create::CreateRecordUseCase;
pub use get::GetRecordUseCase;
pub use list::ListRecordsUseCase;
pub use remove::RemoveRecordUseCase;
