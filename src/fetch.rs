use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use wreq::Client;
use wreq_util::Emulation;

use crate::error::{self, TransportError};

pub const AVAILABILITY_URL: &str = "https://www.turkishairlines.com/api/v1/availability";

/// Sent verbatim on every availability request.
pub const HEADERS: &[(&str, &str)] = &[
    ("Accept", "application/json, text/plain, */*"),
    ("Content-Type", "application/json"),
    ("X-Bfp", "eefd623666b7d32de067e67c19cdbcbe"),
    ("X-Clientid", "fdc44a1f-aaee-46bd-aaa3-3f8539ee3bc8"),
    ("X-Conversationid", "68006240-6101-4a7e-9dc2-c384d695ca9c"),
    ("X-Country", "int"),
    ("X-Requestid", "b604f200-7ba5-45b7-a80d-e769f76e16af"),
];

#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub endpoint: String,
    pub proxy: Option<String>,
    pub timeout: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            endpoint: AVAILABILITY_URL.to_string(),
            proxy: None,
            timeout: 30,
        }
    }
}

/// Raw outcome of one exchange with the endpoint.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

/// Carries one serialized payload to the availability endpoint.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, body: Vec<u8>) -> Result<Reply, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn post(&self, body: Vec<u8>) -> Result<Reply, TransportError> {
        (**self).post(body).await
    }
}

#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(options: &FetchOptions) -> Result<Self, TransportError> {
        let mut builder = Client::builder()
            .emulation(Emulation::Chrome137)
            .timeout(Duration::from_secs(options.timeout));

        if let Some(ref proxy) = options.proxy {
            builder = builder.proxy(wreq::Proxy::all(proxy).map_err(error::from_http_error)?);
        }

        let client = builder.build().map_err(error::from_http_error)?;

        Ok(Self {
            client,
            endpoint: options.endpoint.clone(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, body: Vec<u8>) -> Result<Reply, TransportError> {
        let mut request = self.client.post(self.endpoint.as_str());
        for (name, value) in HEADERS {
            request = request.header(*name, *value);
        }

        let response = request
            .body(body)
            .send()
            .await
            .map_err(error::from_http_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(error::from_http_error)?;

        Ok(Reply { status, body })
    }
}
