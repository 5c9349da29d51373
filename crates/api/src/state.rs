use std::sync::Arc;

use vinyl_application::use_cases::{
    CreateRecordUseCase, GetRecordUseCase, ListRecordsUseCase, RemoveRecordUseCase,
};

#[derive(Clone)]
pub struct AppState {
    pub create_record: Arc<CreateRecordUseCase>,
    pub remove_record: Arc<RemoveRecordUseCase>,
    pub get_record: Arc<GetRecordUseCase>,
    pub list_records: Arc<ListRecordsUseCase>,
}
