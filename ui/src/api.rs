//! API client for the product backend

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use product_editor::domain::{Product, ProductDraft, ProductId, ProductService, ServiceError};

const API_BASE: &str = "/api";

/// [`ProductService`] over `fetch`, relative to the page origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserProductService;

#[async_trait(?Send)]
impl ProductService for BrowserProductService {
    async fn list(&self) -> Result<Vec<Product>, ServiceError> {
        let url = format!("{}/products", API_BASE);
        fetch_json::<Vec<Product>>(&url, None).await
    }

    async fn fetch_one(&self, id: ProductId) -> Result<Product, ServiceError> {
        let url = format!("{}/products/{}", API_BASE, id);
        fetch_json::<Product>(&url, Some(id)).await
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Product, ServiceError> {
        let url = format!("{}/products", API_BASE);
        post_json::<ProductDraft, Product>(&url, draft).await
    }

    async fn update(&self, id: ProductId, draft: &ProductDraft) -> Result<Product, ServiceError> {
        let url = format!("{}/products/{}", API_BASE, id);
        put_json::<ProductDraft, Product>(&url, draft, id).await
    }
}

// ============================================================================
// Helper functions
// ============================================================================

async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str, id: Option<ProductId>) -> Result<T, ServiceError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ServiceError::Transport(format!("Request failed: {}", e)))?;

    decode(response, id).await
}

async fn post_json<T: serde::Serialize, R: serde::de::DeserializeOwned>(
    url: &str,
    body: &T,
) -> Result<R, ServiceError> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| ServiceError::Transport(format!("Failed to serialize body: {}", e)))?
        .send()
        .await
        .map_err(|e| ServiceError::Transport(format!("Request failed: {}", e)))?;

    decode(response, None).await
}

async fn put_json<T: serde::Serialize, R: serde::de::DeserializeOwned>(
    url: &str,
    body: &T,
    id: ProductId,
) -> Result<R, ServiceError> {
    let response = Request::put(url)
        .json(body)
        .map_err(|e| ServiceError::Transport(format!("Failed to serialize body: {}", e)))?
        .send()
        .await
        .map_err(|e| ServiceError::Transport(format!("Request failed: {}", e)))?;

    decode(response, Some(id)).await
}

async fn decode<R: serde::de::DeserializeOwned>(response: Response, id: Option<ProductId>) -> Result<R, ServiceError> {
    if !response.ok() {
        let status = response.status();
        if let (404, Some(id)) = (status, id) {
            return Err(ServiceError::NotFound(id));
        }
        let message = response.text().await.unwrap_or_default();
        log::warn!("Backend returned {}: {}", status, message);
        return Err(ServiceError::Status { status, message });
    }

    response
        .json::<R>()
        .await
        .map_err(|e| ServiceError::Decode(format!("Failed to parse response: {}", e)))
}
