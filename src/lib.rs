pub mod client;
pub mod error;
pub mod fetch;
pub mod model;
pub mod parse;
pub mod query;
pub mod table;

use client::FlightClient;
use error::SearchError;
use fetch::FetchOptions;
use model::FlightOption;
use query::SearchPayload;

pub async fn search_flights(
    payload: &SearchPayload,
    options: &FetchOptions,
) -> Result<Vec<FlightOption>, SearchError> {
    FlightClient::new(options)?.search_flights(payload).await
}
