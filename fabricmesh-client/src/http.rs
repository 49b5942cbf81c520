//! HTTP transport: endpoint rotation, retries, and the error envelope.

use std::sync::atomic::{AtomicUsize, Ordering};

use bytes::Bytes;
use reqwest::{Method, StatusCode};
use url::Url;
use uuid::Uuid;

use fabricmesh_core::JsonReader;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::serialization::error_body::fabric_error_body;

/// Correlation header attached to every request.
const REQUEST_ID_HEADER: &str = "X-FabricMesh-Request-Id";

/// The transport under [`FabricMeshClient`](crate::FabricMeshClient).
///
/// Each request is sent to one of the configured gateway endpoints; transport
/// failures rotate to the next endpoint with exponential backoff until the
/// retry budget is spent. Responses the cluster itself rejected (non-2xx) are
/// terminal and never retried.
pub(crate) struct HttpTransport {
    inner: reqwest::Client,
    config: ClientConfig,
    next_endpoint: AtomicUsize,
}

impl HttpTransport {
    pub(crate) fn new(config: ClientConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;
        Ok(Self {
            inner,
            config,
            next_endpoint: AtomicUsize::new(0),
        })
    }

    /// Sends a GET and returns the response body.
    pub(crate) async fn get(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<Bytes> {
        self.send(Method::GET, segments, query, None).await
    }

    /// Sends a POST with an optional JSON body and returns the response body.
    pub(crate) async fn post(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
        body: Option<String>,
    ) -> Result<Bytes> {
        self.send(Method::POST, segments, query, body).await
    }

    async fn send(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(&str, &str)],
        body: Option<String>,
    ) -> Result<Bytes> {
        let attempts = self.config.retry().max_retries() + 1;
        let mut last_error: Option<reqwest::Error> = None;

        for attempt in 0..attempts {
            if attempt > 0 {
                let backoff = self.config.retry().backoff_for(attempt - 1);
                tokio::time::sleep(backoff).await;
            }

            let endpoint = self.pick_endpoint();
            let url = self.build_url(endpoint, segments, query)?;
            let request_id = Uuid::new_v4();
            tracing::debug!(
                method = %method,
                url = %url,
                request_id = %request_id,
                attempt,
                "sending request"
            );

            let mut request = self
                .inner
                .request(method.clone(), url.clone())
                .header(REQUEST_ID_HEADER, request_id.to_string());
            if let Some(body) = &body {
                request = request
                    .header(reqwest::header::CONTENT_TYPE, "application/json")
                    .body(body.clone());
            }

            match request.send().await {
                Ok(response) => {
                    let status = response.status();
                    let bytes = response.bytes().await?;
                    if status.is_success() {
                        return Ok(bytes);
                    }
                    tracing::warn!(
                        status = status.as_u16(),
                        url = %url,
                        request_id = %request_id,
                        "cluster rejected request"
                    );
                    return Err(service_error(status, &bytes));
                }
                Err(e) => {
                    tracing::warn!(
                        url = %url,
                        request_id = %request_id,
                        error = %e,
                        "request failed, will rotate endpoint"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(ClientError::Exhausted {
            attempts,
            last: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no attempt was made".to_string()),
        })
    }

    fn pick_endpoint(&self) -> &Url {
        let endpoints = self.config.endpoints();
        let index = self.next_endpoint.fetch_add(1, Ordering::Relaxed);
        &endpoints[index % endpoints.len()]
    }

    /// Builds the request URL from path segments (percent-encoded
    /// individually, so node names with reserved characters stay intact)
    /// and the query, always appending `api-version`.
    fn build_url(&self, endpoint: &Url, segments: &[&str], query: &[(&str, &str)]) -> Result<Url> {
        let mut url = endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(format!("endpoint {} cannot be a base", endpoint)))?
            .pop_if_empty()
            .extend(segments);
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("api-version", self.config.api_version());
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }
}

/// Maps a non-2xx response to [`ClientError::Service`], extracting the
/// cluster's error envelope when the body carries one.
fn service_error(status: StatusCode, body: &[u8]) -> ClientError {
    let text = String::from_utf8_lossy(body);
    let details = JsonReader::new(&text)
        .and_then(|mut reader| fabric_error_body::deserialize(&mut reader))
        .ok()
        .and_then(|envelope| envelope.error);
    match details {
        Some(details) => ClientError::Service {
            status: status.as_u16(),
            code: details.code.unwrap_or_default(),
            message: details.message.unwrap_or_default(),
        },
        None => ClientError::Service {
            status: status.as_u16(),
            code: String::new(),
            message: text.into_owned(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    fn transport() -> HttpTransport {
        let config = ClientConfig::builder()
            .add_endpoint(Url::parse("http://localhost:19080").unwrap())
            .build()
            .unwrap();
        HttpTransport::new(config).unwrap()
    }

    #[test]
    fn test_build_url_appends_api_version() {
        let transport = transport();
        let endpoint = Url::parse("http://localhost:19080").unwrap();
        let url = transport
            .build_url(&endpoint, &["Nodes", "Node.1"], &[])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:19080/Nodes/Node.1?api-version=6.0");
    }

    #[test]
    fn test_build_url_escapes_segments() {
        let transport = transport();
        let endpoint = Url::parse("http://localhost:19080").unwrap();
        let url = transport
            .build_url(&endpoint, &["Nodes", "front end/0"], &[])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:19080/Nodes/front%20end%2F0?api-version=6.0"
        );
    }

    #[test]
    fn test_build_url_extra_query_pairs() {
        let transport = transport();
        let endpoint = Url::parse("http://localhost:19080").unwrap();
        let url = transport
            .build_url(&endpoint, &["Nodes"], &[("ContinuationToken", "Node.5")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:19080/Nodes?api-version=6.0&ContinuationToken=Node.5"
        );
    }

    #[test]
    fn test_endpoint_rotation_wraps() {
        let config = ClientConfig::builder()
            .add_endpoint(Url::parse("http://a:19080").unwrap())
            .add_endpoint(Url::parse("http://b:19080").unwrap())
            .build()
            .unwrap();
        let transport = HttpTransport::new(config).unwrap();
        let first = transport.pick_endpoint().clone();
        let second = transport.pick_endpoint().clone();
        let third = transport.pick_endpoint().clone();
        assert_ne!(first, second);
        assert_eq!(first, third);
    }

    #[test]
    fn test_service_error_parses_envelope() {
        let body = br#"{"Error": {"Code": "FABRIC_E_NODE_NOT_FOUND", "Message": "no such node"}}"#;
        let err = service_error(StatusCode::NOT_FOUND, body);
        match err {
            ClientError::Service { status, code, message } => {
                assert_eq!(status, 404);
                assert_eq!(code, "FABRIC_E_NODE_NOT_FOUND");
                assert_eq!(message, "no such node");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_service_error_falls_back_to_raw_body() {
        let err = service_error(StatusCode::BAD_GATEWAY, b"upstream timeout");
        match err {
            ClientError::Service { status, code, message } => {
                assert_eq!(status, 502);
                assert_eq!(code, "");
                assert_eq!(message, "upstream timeout");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
