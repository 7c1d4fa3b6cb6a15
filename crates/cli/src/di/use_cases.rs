use super::Repositories;
use prionis_dns_application::use_cases::{
    CreateRecordUseCase, DeleteRecordUseCase, HandleDnsQueryUseCase, ListRecordsUseCase,
    UpdateRecordUseCase,
};
use std::sync::Arc;

pub struct UseCases {
    pub handle_query: Arc<HandleDnsQueryUseCase>,
    pub create_record: Arc<CreateRecordUseCase>,
    pub list_records: Arc<ListRecordsUseCase>,
    pub update_record: Arc<UpdateRecordUseCase>,
    pub delete_record: Arc<DeleteRecordUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            handle_query: Arc::new(HandleDnsQueryUseCase::new(repos.records.clone())),
            create_record: Arc::new(CreateRecordUseCase::new(repos.records.clone())),
            list_records: Arc::new(ListRecordsUseCase::new(repos.records.clone())),
            update_record: Arc::new(UpdateRecordUseCase::new(repos.records.clone())),
            delete_record: Arc::new(DeleteRecordUseCase::new(repos.records.clone())),
        }
    }
}
