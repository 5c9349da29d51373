use std::iter;
use std::net::IpAddr;
use std::sync::Arc;

use hickory_proto::op::{Header, ResponseCode};
use hickory_proto::rr::{rdata, Name, RData, Record};
use hickory_proto::ProtoError;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use tracing::{debug, error};
use vinyl_application::use_cases::ResolveQueryUseCase;
use vinyl_domain::{DnsAnswer, DnsQuery, DnsQuestion, OpCode, RecordType};

/// Adapts hickory's request pipeline to [`ResolveQueryUseCase`].
///
/// Successful resolutions go out as NOERROR with one answer per question.
/// Any failure becomes SERVFAIL with an empty answer section; the reason only
/// reaches the query log.
pub struct DnsServerHandler {
    use_case: Arc<ResolveQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<ResolveQueryUseCase>) -> Self {
        Self { use_case }
    }

    fn to_query(request: &Request) -> DnsQuery {
        let op_code = OpCode(u8::from(request.header().op_code()));
        let questions = request
            .queries()
            .iter()
            .map(|q| {
                DnsQuestion::new(
                    q.name().to_string(),
                    RecordType::from_u16(u16::from(q.query_type())),
                )
            })
            .collect();

        DnsQuery::new(op_code, questions).with_client_ip(request.src().ip())
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let query = Self::to_query(request);

        let answers = match self.use_case.execute(&query) {
            Ok(answers) => answers,
            Err(_) => return send_servfail(request, &mut response_handle).await,
        };

        let records = match answers.iter().map(to_hickory_record).collect::<Result<Vec<_>, _>>() {
            Ok(records) => records,
            Err(e) => {
                error!(error = %e, "Failed to encode answer name");
                return send_servfail(request, &mut response_handle).await;
            }
        };

        debug!(answers = records.len(), client = %request.src(), "Sending response");

        let header = Header::response_from_request(request.header());
        let response = MessageResponseBuilder::from_message_request(request).build(
            header,
            records.iter(),
            iter::empty(),
            iter::empty(),
            iter::empty(),
        );

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send response");
                ResponseInfo::from(header)
            }
        }
    }
}

fn to_hickory_record(answer: &DnsAnswer) -> Result<Record, ProtoError> {
    let name = Name::from_ascii(&answer.name)?;
    let rdata = match answer.address {
        IpAddr::V4(v4) => RData::A(rdata::A(v4)),
        IpAddr::V6(v6) => RData::AAAA(rdata::AAAA(v6)),
    };
    Ok(Record::from_rdata(name, answer.ttl, rdata))
}

async fn send_servfail<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
) -> ResponseInfo {
    let mut header = Header::response_from_request(request.header());
    header.set_response_code(ResponseCode::ServFail);
    let response = MessageResponseBuilder::from_message_request(request).build_no_records(header);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(header)
        }
    }
}
