//! Thin JSON-over-HTTP accessor

use std::time::Duration;

use reqwest::{header, Client, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with {status}")]
    Status { url: String, status: StatusCode },
    #[error("could not decode response from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("could not build http client")]
    Build(#[source] reqwest::Error),
}

/// GET/POST with a JSON content type; no retry, no caching
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeout: Option<Duration>) -> Result<Self, HttpError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(HttpError::Build)?;
        Ok(Self { client })
    }

    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        log::trace!("GET {url}");
        let request = self.client.get(url);
        self.send(url, request).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        log::trace!("POST {url}");
        let request = self.client.post(url).json(body);
        self.send(url, request).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        url: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, HttpError> {
        let response = request.send().await.map_err(|source| HttpError::Transport {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.json::<T>().await.map_err(|source| HttpError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Echo {
        value: u32,
    }

    #[tokio::test]
    async fn test_get_decodes_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/echo")
                    .header("content-type", "application/json");
                then.status(200).json_body(json!({ "value": 7 }));
            })
            .await;

        let client = HttpClient::new(None).unwrap();
        let echo: Echo = client.get(&server.url("/echo")).await.unwrap();

        mock.assert_async().await;
        assert_eq!(echo, Echo { value: 7 });
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/echo")
                    .json_body(json!({ "value": 3 }));
                then.status(201).json_body(json!({ "value": 3 }));
            })
            .await;

        let client = HttpClient::new(None).unwrap();
        let echo: Echo = client
            .post(&server.url("/echo"), &json!({ "value": 3 }))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(echo.value, 3);
    }

    #[tokio::test]
    async fn test_error_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/missing");
                then.status(404);
            })
            .await;

        let client = HttpClient::new(None).unwrap();
        let err = client
            .get::<Echo>(&server.url("/missing"))
            .await
            .unwrap_err();

        match err {
            HttpError::Status { status, .. } => assert_eq!(status, StatusCode::NOT_FOUND),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/garbage");
                then.status(200).body("<html>");
            })
            .await;

        let client = HttpClient::new(None).unwrap();
        let err = client
            .get::<Echo>(&server.url("/garbage"))
            .await
            .unwrap_err();
        assert!(matches!(err, HttpError::Decode { .. }));
    }
}
