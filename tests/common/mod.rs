//! Fake product backend served by axum on an ephemeral port

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use product_editor::domain::{Product, ProductDraft, ProductId};
use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct BackendState {
    products: Arc<RwLock<BTreeMap<u64, ProductDraft>>>,
    requests: Arc<RwLock<Vec<String>>>,
    fail_writes: Arc<AtomicBool>,
}

impl BackendState {
    async fn log(&self, line: String) {
        self.requests.write().await.push(line);
    }
}

pub struct FakeBackend {
    #[allow(dead_code)]
    pub addr: SocketAddr,
    pub base_url: String,
    state: BackendState,
}

impl FakeBackend {
    pub async fn start(products: Vec<Product>) -> Self {
        let state = BackendState::default();
        {
            let mut store = state.products.write().await;
            for product in products {
                store.insert(product.id.get(), product.draft);
            }
        }

        let app = Router::new()
            .route("/products", get(list_products).post(create_product))
            .route("/products/:id", get(get_product).put(update_product))
            .route("/garbage/products", get(|| async { "this is not json" }))
            .with_state(state.clone());

        // Start server on random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        FakeBackend {
            addr,
            base_url,
            state,
        }
    }

    /// Requests received so far, as `"METHOD /path"`
    pub async fn requests(&self) -> Vec<String> {
        self.state.requests.read().await.clone()
    }

    pub async fn product(&self, id: u64) -> Option<ProductDraft> {
        self.state.products.read().await.get(&id).cloned()
    }

    /// Makes POST and PUT answer 500 from now on
    pub fn fail_writes(&self) {
        self.state.fail_writes.store(true, Ordering::SeqCst);
    }
}

fn to_product(id: u64, draft: ProductDraft) -> Option<Product> {
    ProductId::new(id).map(|id| Product::new(id, draft))
}

async fn list_products(State(state): State<BackendState>) -> Json<Vec<Product>> {
    state.log("GET /products".to_string()).await;
    let products = state.products.read().await;
    Json(
        products
            .iter()
            .filter_map(|(id, draft)| to_product(*id, draft.clone()))
            .collect(),
    )
}

async fn get_product(
    State(state): State<BackendState>,
    Path(id): Path<u64>,
) -> Result<Json<Product>, StatusCode> {
    state.log(format!("GET /products/{}", id)).await;
    let products = state.products.read().await;
    products
        .get(&id)
        .and_then(|draft| to_product(id, draft.clone()))
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_product(
    State(state): State<BackendState>,
    Json(draft): Json<ProductDraft>,
) -> impl IntoResponse {
    state.log("POST /products".to_string()).await;
    if state.fail_writes.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable").into_response();
    }

    let mut products = state.products.write().await;
    let id = products.keys().next_back().map_or(1, |id| id + 1);
    products.insert(id, draft.clone());
    match to_product(id, draft) {
        Some(product) => (StatusCode::CREATED, Json(product)).into_response(),
        None => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

async fn update_product(
    State(state): State<BackendState>,
    Path(id): Path<u64>,
    Json(draft): Json<ProductDraft>,
) -> impl IntoResponse {
    state.log(format!("PUT /products/{}", id)).await;
    if state.fail_writes.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable").into_response();
    }

    let mut products = state.products.write().await;
    match products.get_mut(&id) {
        Some(existing) => {
            *existing = draft.clone();
            match to_product(id, draft) {
                Some(product) => Json(product).into_response(),
                None => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
            }
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
