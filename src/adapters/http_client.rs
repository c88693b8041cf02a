//! HTTP adapter for the product backend
//!
//! Speaks plain JSON over REST:
//! - `GET    {base}{products}` lists products
//! - `GET    {base}{products}/{id}` fetches one
//! - `POST   {base}{products}` creates
//! - `PUT    {base}{products}/{id}` updates

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ApiSettings;
use crate::domain::{Product, ProductDraft, ProductId, ProductService, ServiceError};

/// [`ProductService`] backed by the REST backend.
#[derive(Debug, Clone)]
pub struct HttpProductService {
    client: Client,
    base_url: String,
    products_path: String,
}

impl HttpProductService {
    pub fn new(base_url: impl Into<String>, products_path: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url, products_path)
    }

    /// Uses a preconfigured client (proxy, TLS, default headers).
    pub fn with_client(client: Client, base_url: impl Into<String>, products_path: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            products_path: products_path.into(),
        }
    }

    pub fn from_settings(settings: &ApiSettings) -> Self {
        Self::new(settings.base_url.clone(), settings.products_path.clone())
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, self.products_path)
    }

    fn item_url(&self, id: ProductId) -> String {
        format!("{}/{}", self.collection_url(), id)
    }

    /// Sends the request and decodes a success body.
    ///
    /// `id` is the product the request is about, so that a 404 can be
    /// reported as [`ServiceError::NotFound`].
    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        id: Option<ProductId>,
    ) -> Result<T, ServiceError> {
        let response = request
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        let response = Self::check_status(response, id).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ServiceError::Decode(e.to_string()))
    }

    async fn check_status(response: Response, id: Option<ProductId>) -> Result<Response, ServiceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if let (StatusCode::NOT_FOUND, Some(id)) = (status, id) {
            return Err(ServiceError::NotFound(id));
        }

        let message = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), body = %message, "Backend returned an error");
        Err(ServiceError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait(?Send)]
impl ProductService for HttpProductService {
    async fn list(&self) -> Result<Vec<Product>, ServiceError> {
        let url = self.collection_url();
        debug!(url = %url, "GET products");
        self.send(self.client.get(&url), None).await
    }

    async fn fetch_one(&self, id: ProductId) -> Result<Product, ServiceError> {
        let url = self.item_url(id);
        debug!(url = %url, "GET product");
        self.send(self.client.get(&url), Some(id)).await
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Product, ServiceError> {
        let url = self.collection_url();
        debug!(url = %url, "POST product");
        self.send(self.client.post(&url).json(draft), None).await
    }

    async fn update(&self, id: ProductId, draft: &ProductDraft) -> Result<Product, ServiceError> {
        let url = self.item_url(id);
        debug!(url = %url, "PUT product");
        self.send(self.client.put(&url).json(draft), Some(id)).await
    }
}
