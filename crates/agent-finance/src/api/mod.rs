//! API clients for price and filing providers

pub mod financial_datasets;
pub mod sec_api;
pub mod yahoo;

pub use financial_datasets::FinancialDatasetsClient;
pub use sec_api::{SecApiClient, SecFiling};
pub use yahoo::YahooFinanceClient;

use crate::error::SourceFailure;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

/// Longest response body kept in an `UnsuccessfulResponse`
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Send a request once and decode a 200 response body as JSON
///
/// No retry and no timeout override: the transport defaults apply.
pub(crate) async fn get_json<T: DeserializeOwned>(
    request: RequestBuilder,
) -> Result<T, SourceFailure> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if status != StatusCode::OK {
        return Err(SourceFailure::UnsuccessfulResponse {
            status: status.as_u16(),
            body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
        });
    }

    Ok(serde_json::from_str(&body)?)
}
