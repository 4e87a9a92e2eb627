use crate::models::book::PageResult;
use crate::models::error::CatalogError;
use crate::models::query::{SearchType, SortOrder};
use crate::utils::config::CatalogConfig;
use crate::utils::url::{books_url, validate_cursor};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::sync::Arc;
use tracing::{error, info};

/// Performs a single GET against the catalog and hands back the raw body.
#[async_trait]
pub trait CatalogTransport {
    async fn get(&self, url: &Url) -> Result<String, CatalogError>;
}

pub type Transport = Arc<dyn CatalogTransport + Send + Sync>;

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogTransport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<String, CatalogError> {
        let response = self.client.get(url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status().as_u16()));
        }

        Ok(response.text().await?)
    }
}

#[derive(Clone)]
pub struct CatalogClient {
    config: CatalogConfig,
    transport: Transport,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig) -> Self {
        Self::with_transport(config, Arc::new(HttpTransport::new()))
    }

    pub fn with_transport(config: CatalogConfig, transport: Transport) -> Self {
        Self { config, transport }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Lists every book in the catalog. Failures degrade to an empty page.
    pub async fn list_all(&self, sort_order: &SortOrder, page: u32) -> PageResult {
        let page_str = page.to_string();
        let params = [("sort", sort_order.as_str()), ("page", page_str.as_str())];

        self.fetch_or_empty(&params).await
    }

    /// Searches the catalog. Only an unsupported `search_type` is reported to
    /// the caller, and in that case nothing is sent.
    pub async fn search(
        &self,
        query: &str,
        search_type: &str,
        sort_order: &SortOrder,
        page: u32,
    ) -> Result<PageResult, CatalogError> {
        let search_type: SearchType = search_type.parse()?;

        Ok(self.search_by(query, search_type, sort_order, page).await)
    }

    /// Searches with an already validated search type. Failures degrade to
    /// an empty page.
    pub async fn search_by(
        &self,
        query: &str,
        search_type: SearchType,
        sort_order: &SortOrder,
        page: u32,
    ) -> PageResult {
        let page_str = page.to_string();
        let params = [
            (search_type.query_param(), query),
            ("sort", sort_order.as_str()),
            ("page", page_str.as_str()),
        ];

        self.fetch_or_empty(&params).await
    }

    async fn fetch_or_empty(&self, params: &[(&str, &str)]) -> PageResult {
        match self.fetch_page(params).await {
            Ok(page) => page,
            Err(e) => {
                error!("Catalog request failed, returning empty page: {}", e);
                PageResult::empty()
            }
        }
    }

    async fn fetch_page(&self, params: &[(&str, &str)]) -> Result<PageResult, CatalogError> {
        let url = books_url(&self.config.base_url, params)?;
        info!("Fetching {}", url);

        let body = self.transport.get(&url).await?;
        let page: PageResult = serde_json::from_str(&body)?;

        validate_cursor(page.next.as_deref())?;
        validate_cursor(page.previous.as_deref())?;

        info!(
            "Catalog returned {} of {} books",
            page.results.len(),
            page.count
        );
        Ok(page)
    }
}
