pub mod dns;
pub mod records;

pub use dns::{HandleDnsQueryUseCase, QueryResolution};
pub use records::{
    CreateRecordUseCase, DeleteRecordUseCase, ListRecordsUseCase, RecordChanges,
    UpdateRecordUseCase,
};
