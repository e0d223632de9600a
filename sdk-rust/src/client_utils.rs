use crate::LanguageModelError;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};

/// Create a JSON request, parse the response.
/// Throws error on non OK status code.
pub async fn send_json<T: Serialize, R: DeserializeOwned>(
    client: &Client,
    url: &str,
    data: &T,
    headers: reqwest::header::HeaderMap,
) -> Result<R, LanguageModelError> {
    let response = client
        .post(url)
        .headers(headers)
        .json(data)
        .send()
        .await
        .map_err(transport_error)?;
    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        Err(LanguageModelError::StatusCode(
            status,
            response.text().await.unwrap_or_default(),
        ))
    } else {
        response.json::<R>().await.map_err(transport_error)
    }
}

/// The request URL may carry credentials in its query string, so it never
/// ends up in the error text.
fn transport_error(error: reqwest::Error) -> LanguageModelError {
    LanguageModelError::Transport(error.without_url())
}
