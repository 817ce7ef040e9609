use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::article::{Article, Collection};
use crate::error::GeneratorError;

const BASE_URL: &str = "https://strapi.matthewp.io/api";

pub trait StrapiClient: Send + Sync {
    fn fetch_articles(&self) -> Result<Collection<Article>, GeneratorError>;
}

#[derive(Clone)]
pub struct StrapiHttpClient {
    client: Client,
    base_url: String,
}

impl StrapiHttpClient {
    pub fn new() -> Result<Self, GeneratorError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("article-gen/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| GeneratorError::StrapiHttp(err.to_string()))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|err| GeneratorError::StrapiHttp(err.to_string()))?;

        Ok(Self {
            client,
            base_url: BASE_URL.to_string(),
        })
    }
}

impl StrapiClient for StrapiHttpClient {
    /// One GET for the whole article collection, with the author and
    /// image-attribution relations expanded and newest-first ordering.
    /// A failed request is fatal to the run; there are no retries.
    fn fetch_articles(&self) -> Result<Collection<Article>, GeneratorError> {
        let url = format!("{}/articles", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("populate", "authors"),
                ("populate", "imageAttribution"),
                ("sort[0]", "createdAt:desc"),
            ])
            .send()
            .map_err(|err| GeneratorError::StrapiHttp(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .unwrap_or_else(|_| "strapi request failed".to_string());
            return Err(GeneratorError::StrapiStatus { status, body });
        }

        response
            .json::<Collection<Article>>()
            .map_err(|err| GeneratorError::Decode(err.to_string()))
    }
}
