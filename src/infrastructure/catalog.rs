//! PokeAPI catalog gateway

use async_trait::async_trait;
use futures::future::join_all;
use thiserror::Error;
use url::Url;

use crate::{
    domain::{Pokemon, PokemonPage, PokemonUrl},
    infrastructure::http::{HttpClient, HttpError},
};

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error(transparent)]
    Http(#[from] HttpError),
}

/// Catalog operations the pagination effect depends on
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// One page of reference records
    async fn fetch_page(&self, limit: u32, offset: u32) -> Result<PokemonPage, CatalogError>;

    /// Resolve every reference concurrently. Failed lookups are dropped, the
    /// rest keep the order of `references`. Never fails.
    async fn fetch_details(&self, references: &[PokemonUrl]) -> Vec<Pokemon>;
}

pub struct PokeApi {
    http: HttpClient,
    base_url: Url,
}

impl PokeApi {
    pub fn new(http: HttpClient, base_url: &str) -> Result<Self, CatalogError> {
        // Url::join drops the last path segment unless it ends with a slash
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{base_url}/"))?
        };
        Ok(Self { http, base_url })
    }

    pub fn page_url(&self, limit: u32, offset: u32) -> Result<Url, CatalogError> {
        let mut url = self.base_url.join("pokemon")?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("offset", &offset.to_string());
        Ok(url)
    }

    async fn fetch_detail(&self, reference: &PokemonUrl) -> Result<Pokemon, CatalogError> {
        Ok(self.http.get(&reference.url).await?)
    }
}

#[async_trait]
impl CatalogApi for PokeApi {
    async fn fetch_page(&self, limit: u32, offset: u32) -> Result<PokemonPage, CatalogError> {
        let url = self.page_url(limit, offset)?;
        log::debug!("PokeApi: fetching page limit={limit} offset={offset}");
        Ok(self.http.get(url.as_str()).await?)
    }

    async fn fetch_details(&self, references: &[PokemonUrl]) -> Vec<Pokemon> {
        let results = join_all(references.iter().map(|r| self.fetch_detail(r))).await;

        references
            .iter()
            .zip(results)
            .filter_map(|(reference, result)| match result {
                Ok(pokemon) => Some(pokemon),
                Err(e) => {
                    log::warn!("PokeApi: dropping {}: {e}", reference.name);
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn api(server: &MockServer) -> PokeApi {
        PokeApi::new(HttpClient::new(None).unwrap(), &server.url("/api/v2")).unwrap()
    }

    #[test]
    fn test_page_url() {
        let api = PokeApi::new(HttpClient::new(None).unwrap(), DEFAULT_BASE_URL).unwrap();
        assert_eq!(
            api.page_url(10, 20).unwrap().as_str(),
            "https://pokeapi.co/api/v2/pokemon?limit=10&offset=20"
        );

        let api = PokeApi::new(HttpClient::new(None).unwrap(), "https://pokeapi.co/api/v2/")
            .unwrap();
        assert_eq!(
            api.page_url(5, 0).unwrap().as_str(),
            "https://pokeapi.co/api/v2/pokemon?limit=5&offset=0"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = PokeApi::new(HttpClient::new(None).unwrap(), "not a url");
        assert!(matches!(result, Err(CatalogError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_fetch_page() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v2/pokemon")
                    .query_param("limit", "10")
                    .query_param("offset", "0");
                then.status(200).json_body(json!({
                    "count": 23,
                    "next": null,
                    "previous": null,
                    "results": [
                        {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"}
                    ]
                }));
            })
            .await;

        let page = api(&server).fetch_page(10, 0).await.unwrap();

        mock.assert_async().await;
        assert_eq!(page.count, 23);
        assert_eq!(page.total_pages(10), 3);
        assert_eq!(page.results[0].name, "bulbasaur");
    }

    #[tokio::test]
    async fn test_fetch_page_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v2/pokemon");
                then.status(500);
            })
            .await;

        let result = api(&server).fetch_page(10, 0).await;
        assert!(matches!(result, Err(CatalogError::Http(HttpError::Status { .. }))));
    }

    #[tokio::test]
    async fn test_fetch_details_drops_failures_and_keeps_order() {
        let server = MockServer::start_async().await;
        let mut references = Vec::new();
        for id in 1..=10u32 {
            let path = format!("/api/v2/pokemon/{id}/");
            if id == 4 {
                server
                    .mock_async(|when, then| {
                        when.method(GET).path(path.clone());
                        then.status(500);
                    })
                    .await;
            } else {
                server
                    .mock_async(|when, then| {
                        when.method(GET).path(path.clone());
                        then.status(200).json_body(json!({
                            "id": id,
                            "name": format!("mon-{id}"),
                            "sprites": {"front_default": format!("https://img/{id}.png")}
                        }));
                    })
                    .await;
            }
            references.push(PokemonUrl::new(format!("mon-{id}"), server.url(&path)));
        }

        let details = api(&server).fetch_details(&references).await;

        assert_eq!(details.len(), 9);
        let ids: Vec<u32> = details.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 5, 6, 7, 8, 9, 10]);
    }

    #[tokio::test]
    async fn test_fetch_details_empty() {
        let server = MockServer::start_async().await;
        let details = api(&server).fetch_details(&[]).await;
        assert!(details.is_empty());
    }
}
