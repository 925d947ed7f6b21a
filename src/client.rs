use std::sync::Arc;

use crate::error::SearchError;
use crate::fetch::{FetchOptions, HttpTransport, Transport};
use crate::model::FlightOption;
use crate::parse;
use crate::query::SearchPayload;

/// Issues availability searches. Holds no per-search state, so one client
/// can serve any number of concurrent calls.
#[derive(Clone)]
pub struct FlightClient {
    transport: Arc<dyn Transport>,
}

impl FlightClient {
    pub fn new(options: &FetchOptions) -> Result<Self, SearchError> {
        let transport = HttpTransport::new(options)?;
        Ok(Self::with_transport(transport))
    }

    pub fn with_transport<T: Transport + 'static>(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    pub async fn search_flights(
        &self,
        payload: &SearchPayload,
    ) -> Result<Vec<FlightOption>, SearchError> {
        if payload.legs.is_empty() {
            return Err(SearchError::Validation(
                "at least one flight leg required".into(),
            ));
        }

        let body = payload.to_json()?;
        tracing::debug!(
            legs = payload.legs.len(),
            bytes = body.len(),
            "sending availability request"
        );

        let reply = self.transport.post(body).await.map_err(|e| {
            tracing::debug!(error = %e, "availability request failed");
            SearchError::Transport(e)
        })?;
        tracing::debug!(
            status = reply.status,
            bytes = reply.body.len(),
            "availability response received"
        );

        let result = parse::parse_response(&reply.body);
        match &result {
            Ok(options) => tracing::debug!(options = options.len(), "availability search succeeded"),
            Err(SearchError::Decode(cause)) => {
                tracing::warn!(status = reply.status, error = %cause, "decoding error")
            }
            Err(SearchError::Business(code)) => {
                tracing::info!(code = %code, "availability endpoint reported failure")
            }
            Err(e) => tracing::debug!(error = %e, "availability search failed"),
        }
        result
    }
}
