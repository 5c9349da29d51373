use std::sync::Arc;

use vinyl_api::AppState;
use vinyl_application::use_cases::{
    CreateRecordUseCase, GetRecordUseCase, ListRecordsUseCase, RemoveRecordUseCase,
    ResolveQueryUseCase,
};

use super::Repositories;

pub struct UseCases {
    pub create_record: Arc<CreateRecordUseCase>,
    pub remove_record: Arc<RemoveRecordUseCase>,
    pub get_record: Arc<GetRecordUseCase>,
    pub list_records: Arc<ListRecordsUseCase>,
    pub resolve_query: Arc<ResolveQueryUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            create_record: Arc::new(CreateRecordUseCase::new(repos.records.clone())),
            remove_record: Arc::new(RemoveRecordUseCase::new(repos.records.clone())),
            get_record: Arc::new(GetRecordUseCase::new(repos.records.clone())),
            list_records: Arc::new(ListRecordsUseCase::new(repos.records.clone())),
            resolve_query: Arc::new(ResolveQueryUseCase::new(
                repos.records.clone(),
                repos.query_log.clone(),
            )),
        }
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            create_record: self.create_record.clone(),
            remove_record: self.remove_record.clone(),
            get_record: self.get_record.clone(),
            list_records: self.list_records.clone(),
        }
    }
}
