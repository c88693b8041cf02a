use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::{Product, ProductDraft, ProductId, ProductService, ServiceError};

/// A call received by [`InMemoryProductService`], in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceCall {
    List,
    FetchOne(ProductId),
    Create(ProductDraft),
    Update(ProductId, ProductDraft),
}

#[derive(Debug, Default)]
struct Store {
    products: BTreeMap<ProductId, ProductDraft>,
    calls: Vec<ServiceCall>,
    failure: Option<ServiceError>,
}

/// Product service backed by a map, for demos and tests.
///
/// Clones share the same store, so a test can keep a handle while the
/// editor owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductService {
    store: Arc<Mutex<Store>>,
}

impl InMemoryProductService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let service = Self::new();
        {
            let mut store = service.lock();
            for product in products {
                store.products.insert(product.id, product.draft);
            }
        }
        service
    }

    /// Makes every following call fail with `error` until cleared with `None`.
    pub fn set_failure(&self, error: Option<ServiceError>) {
        self.lock().failure = error;
    }

    pub fn calls(&self) -> Vec<ServiceCall> {
        self.lock().calls.clone()
    }

    pub fn get(&self, id: ProductId) -> Option<Product> {
        self.lock()
            .products
            .get(&id)
            .map(|draft| Product::new(id, draft.clone()))
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        // A panicking test must not poison the other handles
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, call: ServiceCall) -> Result<MutexGuard<'_, Store>, ServiceError> {
        let mut store = self.lock();
        store.calls.push(call);
        match store.failure.clone() {
            Some(error) => Err(error),
            None => Ok(store),
        }
    }
}

#[async_trait(?Send)]
impl ProductService for InMemoryProductService {
    async fn list(&self) -> Result<Vec<Product>, ServiceError> {
        let store = self.record(ServiceCall::List)?;
        Ok(store
            .products
            .iter()
            .map(|(id, draft)| Product::new(*id, draft.clone()))
            .collect())
    }

    async fn fetch_one(&self, id: ProductId) -> Result<Product, ServiceError> {
        let store = self.record(ServiceCall::FetchOne(id))?;
        store
            .products
            .get(&id)
            .map(|draft| Product::new(id, draft.clone()))
            .ok_or(ServiceError::NotFound(id))
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Product, ServiceError> {
        let mut store = self.record(ServiceCall::Create(draft.clone()))?;
        let next = store.products.keys().next_back().map_or(1, |id| id.get() + 1);
        let id = ProductId::new(next).ok_or_else(|| ServiceError::Status {
            status: 500,
            message: "identifier space exhausted".to_string(),
        })?;
        store.products.insert(id, draft.clone());
        Ok(Product::new(id, draft.clone()))
    }

    async fn update(&self, id: ProductId, draft: &ProductDraft) -> Result<Product, ServiceError> {
        let mut store = self.record(ServiceCall::Update(id, draft.clone()))?;
        match store.products.get_mut(&id) {
            Some(existing) => {
                *existing = draft.clone();
                Ok(Product::new(id, draft.clone()))
            }
            None => Err(ServiceError::NotFound(id)),
        }
    }
}
