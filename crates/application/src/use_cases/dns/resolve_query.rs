use std::sync::Arc;
use std::time::Instant;

use vinyl_domain::{DnsAnswer, DnsQuery, DomainError, QueryLog, RecordType, ResponseStatus};

use crate::ports::{QueryLogPort, RecordRepository};

/// Turns a DNS question set into address answers.
///
/// Resolution is all-or-nothing per request: the first question that fails
/// aborts the whole batch and no answers are returned, even for questions
/// that had already resolved. Every outcome, including the full error, is
/// handed to the query log; callers only need the status.
pub struct ResolveQueryUseCase {
    records: Arc<dyn RecordRepository>,
    query_log: Arc<dyn QueryLogPort>,
}

impl ResolveQueryUseCase {
    pub fn new(records: Arc<dyn RecordRepository>, query_log: Arc<dyn QueryLogPort>) -> Self {
        Self { records, query_log }
    }

    pub fn execute(&self, query: &DnsQuery) -> Result<Vec<DnsAnswer>, DomainError> {
        let start = Instant::now();
        let result = self.resolve(query);

        let (status, answers, error) = match &result {
            Ok(answers) => (ResponseStatus::NoError, answers.len(), None),
            Err(e) => (ResponseStatus::ServFail, 0, Some(e.to_string())),
        };

        self.query_log.log_query(&QueryLog {
            op_code: query.op_code,
            questions: query.question_names(),
            client_ip: query.client_ip,
            answers,
            status,
            error,
            response_time_us: start.elapsed().as_micros() as u64,
        });

        result
    }

    fn resolve(&self, query: &DnsQuery) -> Result<Vec<DnsAnswer>, DomainError> {
        if !query.op_code.is_query() {
            return Err(DomainError::UnsupportedOpcode {
                op_code: query.op_code,
            });
        }

        let mut answers = Vec::with_capacity(query.questions.len());

        for question in &query.questions {
            if question.record_type != RecordType::A {
                return Err(DomainError::UnsupportedRecordType {
                    record_type: question.record_type,
                });
            }

            let record = self.records.get(&question.lookup_name())?;
            answers.push(DnsAnswer::from(&record));
        }

        Ok(answers)
    }
}
