//! Ports the editor talks through: the remote product service and the router.

use async_trait::async_trait;

use super::error::ServiceError;
use super::product::{Product, ProductDraft, ProductId};

/// Remote CRUD service holding the products.
///
/// Futures are not required to be `Send`: the editor runs on a single
/// event loop, which in the browser is the only thread there is.
#[async_trait(?Send)]
pub trait ProductService {
    /// All products, for the listing view
    async fn list(&self) -> Result<Vec<Product>, ServiceError>;

    async fn fetch_one(&self, id: ProductId) -> Result<Product, ServiceError>;

    async fn create(&self, draft: &ProductDraft) -> Result<Product, ServiceError>;

    async fn update(&self, id: ProductId, draft: &ProductDraft) -> Result<Product, ServiceError>;
}

/// Routing collaborator used to leave the form.
pub trait Navigator {
    fn navigate(&mut self, path: &str);

    /// Return to the previous view.
    fn back(&mut self);
}
