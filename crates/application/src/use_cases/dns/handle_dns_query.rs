use crate::ports::RecordRepository;
use prionis_dns_domain::dns_name::normalize_domain;
use prionis_dns_domain::{DnsRecord, Question, ResponseCode};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Answers gathered for one message, in question order.
#[derive(Debug, Clone, Default)]
pub struct QueryResolution {
    pub answers: Vec<DnsRecord>,
    /// Questions whose lookup failed and contributed no answers.
    pub failed_lookups: usize,
}

impl QueryResolution {
    pub fn response_code(&self) -> ResponseCode {
        if self.failed_lookups > 0 {
            ResponseCode::ServFail
        } else {
            ResponseCode::NoError
        }
    }
}

pub struct HandleDnsQueryUseCase {
    repository: Arc<dyn RecordRepository>,
}

impl HandleDnsQueryUseCase {
    pub fn new(repository: Arc<dyn RecordRepository>) -> Self {
        Self { repository }
    }

    /// Looks up every question in received order. A failing lookup yields no
    /// answers for that question only.
    pub async fn execute(&self, questions: &[Question]) -> QueryResolution {
        let mut resolution = QueryResolution::default();

        for question in questions {
            let domain = normalize_domain(&question.name);
            let start = Instant::now();

            match self
                .repository
                .find_records(&domain, question.record_type)
                .await
            {
                Ok(records) => {
                    debug!(
                        domain = %domain,
                        record_type = %question.record_type,
                        matches = records.len(),
                        elapsed_us = start.elapsed().as_micros() as u64,
                        "Lookup complete"
                    );
                    resolution.answers.extend(records);
                }
                Err(e) => {
                    warn!(
                        domain = %domain,
                        record_type = %question.record_type,
                        error = %e,
                        "Record lookup failed, answering without records"
                    );
                    resolution.failed_lookups += 1;
                }
            }
        }

        resolution
    }
}
