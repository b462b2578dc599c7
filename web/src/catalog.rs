use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use trivia_core::{Catalog, LoadError, Result};
use trivia_protocol::{self as protocol, CategoryDetails, CategoryId, CategorySummary};

/// [`Catalog`] backed by the trivia HTTP API.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HttpCatalog {
    base_url: String,
}

impl HttpCatalog {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        protocol::endpoint(&self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|err| LoadError::Network(format!("{url}: {err}")))?;
        check_status(&url, response.status())?;

        let body = response
            .text()
            .await
            .map_err(|err| LoadError::Network(format!("{url}: {err}")))?;
        log::trace!("{} returned {} bytes", url, body.len());
        decode(&url, &body)
    }
}

impl Catalog for HttpCatalog {
    async fn categories(&self, count: usize) -> Result<Vec<CategorySummary>> {
        self.get_json(&protocol::categories_path(count)).await
    }

    async fn category(&self, id: CategoryId) -> Result<CategoryDetails> {
        self.get_json(&protocol::category_path(id)).await
    }
}

fn check_status(url: &str, status: u16) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(LoadError::Network(format!("{url}: HTTP {status}")))
    }
}

fn decode<T: DeserializeOwned>(url: &str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|err| LoadError::MalformedResponse(format!("{url}: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_route() {
        let catalog = HttpCatalog::new("https://example.org/api");

        assert_eq!(
            catalog.url(&protocol::category_path(5)),
            "https://example.org/api/category?id=5"
        );
    }

    #[test]
    fn non_success_status_is_a_network_error() {
        assert_eq!(check_status("u", 200), Ok(()));
        assert_eq!(check_status("u", 204), Ok(()));
        assert_eq!(
            check_status("u", 503),
            Err(LoadError::Network("u: HTTP 503".into()))
        );
        assert!(check_status("u", 404).is_err());
    }

    #[test]
    fn undecodable_body_is_malformed() {
        let err = decode::<CategoryDetails>("u", r#"{"title": "no clues"}"#).unwrap_err();

        assert!(matches!(err, LoadError::MalformedResponse(msg) if msg.starts_with("u: ")));
    }

    #[test]
    fn category_list_decodes() {
        let summaries: Vec<CategorySummary> =
            decode("u", r#"[{"id": 1, "title": "a"}, {"id": 2, "title": "b"}]"#).unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[1].id, 2);
    }
}
