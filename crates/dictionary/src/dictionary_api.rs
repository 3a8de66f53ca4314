use reqwest::{Client, Request, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{ApiConfig, DictionaryError};

pub(crate) const REQUEST_ID_HEADER: &str = "x-http-req-id";
pub(crate) const CLIENT_NAME_HEADER: &str = "x-http-client-name";

pub(crate) fn parse_endpoint(host: &str) -> Result<Url, DictionaryError> {
    match Url::parse(host) {
        Ok(url) if !url.cannot_be_a_base() => Ok(url),
        _ => Err(DictionaryError::InvalidEndpoint(host.to_owned())),
    }
}

pub(crate) fn check_word(word: &str) -> Result<&str, DictionaryError> {
    if word.trim().is_empty() {
        return Err(DictionaryError::InvalidWord(word.to_owned()));
    }
    Ok(word)
}

/// Builds a GET for `endpoint` followed by `segments`, each segment encoded on its own.
pub(crate) fn build_request(
    client: &Client,
    endpoint: &Url,
    config: &ApiConfig,
    segments: &[&str],
) -> Result<Request, DictionaryError> {
    let mut url = endpoint.clone();
    url.path_segments_mut()
        .map_err(|_| DictionaryError::InvalidEndpoint(endpoint.to_string()))?
        .pop_if_empty()
        .extend(segments);
    client
        .get(url)
        .query(&[("api_key", config.api_key.as_str())])
        .header(REQUEST_ID_HEADER, Uuid::new_v4().to_string())
        .header(CLIENT_NAME_HEADER, config.client_name.to_lowercase())
        .timeout(config.timeout)
        .build()
        .map_err(DictionaryError::Fetch)
}

pub(crate) async fn fetch<T: DeserializeOwned>(
    client: &Client,
    client_name: &str,
    request: Request,
) -> Result<T, DictionaryError> {
    // the query string carries the api key, so urls are kept out of logs and errors
    let path = request.url().path().to_owned();
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    debug!(client = client_name, %path, %request_id, "sending dictionary request");

    let response = client
        .execute(request)
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|error| {
            let error = error.without_url();
            warn!(client = client_name, %path, %request_id, %error, "dictionary request failed");
            DictionaryError::Fetch(error)
        })?;
    let body = response.json::<T>().await.map_err(|error| {
        let error = error.without_url();
        warn!(client = client_name, %path, %request_id, %error, "malformed dictionary response");
        DictionaryError::Deserialize(error)
    })?;
    debug!(client = client_name, %path, %request_id, "dictionary request succeeded");
    Ok(body)
}
