mod common;

use common::FakeBackend;
use product_editor::adapters::http_client::HttpProductService;
use product_editor::adapters::navigator::HistoryNavigator;
use product_editor::application::{
    EditorPhase, LoadOutcome, Notice, ProductEditor, SaveAction, SubmitOutcome,
};
use product_editor::domain::{Product, ProductDraft, ProductField, ProductId, ProductService, ServiceError};

fn id(raw: u64) -> ProductId {
    ProductId::new(raw).unwrap()
}

/// Client that talks to the fake backend directly, whatever proxy the
/// environment configures
fn service_for(backend: &FakeBackend, products_path: &str) -> HttpProductService {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpProductService::with_client(client, &backend.base_url, products_path)
}

fn chair() -> Product {
    Product::new(id(42), ProductDraft::new("Chair", "", 10.5, 3))
}

#[tokio::test]
async fn test_list_and_fetch_one() {
    let backend = FakeBackend::start(vec![chair()]).await;
    let service = service_for(&backend, "/products");

    let products = service.list().await.unwrap();
    assert_eq!(products, vec![chair()]);

    let product = service.fetch_one(id(42)).await.unwrap();
    assert_eq!(product, chair());
}

#[tokio::test]
async fn test_missing_product_is_not_found() {
    let backend = FakeBackend::start(vec![]).await;
    let service = service_for(&backend, "/products");

    let err = service.fetch_one(id(5)).await.unwrap_err();
    assert_eq!(err, ServiceError::NotFound(id(5)));
}

#[tokio::test]
async fn test_server_error_is_reported_with_status() {
    let backend = FakeBackend::start(vec![]).await;
    backend.fail_writes();
    let service = service_for(&backend, "/products");

    let err = service.create(&ProductDraft::new("Desk", "", 1.0, 1)).await.unwrap_err();
    assert_eq!(
        err,
        ServiceError::Status {
            status: 500,
            message: "database unavailable".to_string()
        }
    );
}

#[tokio::test]
async fn test_undecodable_body_is_a_decode_error() {
    let backend = FakeBackend::start(vec![]).await;
    let service = service_for(&backend, "/garbage/products");

    let err = service.list().await.unwrap_err();
    assert!(matches!(err, ServiceError::Decode(_)));
}

#[tokio::test]
async fn test_editor_loads_product_over_http() {
    let backend = FakeBackend::start(vec![chair()]).await;
    let service = service_for(&backend, "/products");
    let mut editor = ProductEditor::for_route(Some("42")).unwrap();

    let outcome = editor.load(&service).await;

    assert_eq!(outcome, LoadOutcome::Loaded(chair()));
    assert_eq!(editor.draft(), &ProductDraft::new("Chair", "", 10.5, 3));
    assert_eq!(editor.phase(), EditorPhase::Idle);
    assert_eq!(backend.requests().await, vec!["GET /products/42"]);
}

#[tokio::test]
async fn test_editor_load_not_found_over_http() {
    let backend = FakeBackend::start(vec![]).await;
    let service = service_for(&backend, "/products");
    let mut editor = ProductEditor::for_route(Some("42")).unwrap();

    let outcome = editor.load(&service).await;

    assert_eq!(outcome.notice(), Some(Notice::NotFound));
    assert_eq!(editor.draft(), &ProductDraft::default());
    assert!(!editor.is_busy());
}

#[tokio::test]
async fn test_editor_creates_product_over_http() {
    let backend = FakeBackend::start(vec![]).await;
    let service = service_for(&backend, "/products");
    let mut navigator = HistoryNavigator::new("/products/new");
    let mut editor = ProductEditor::new(None);

    editor.change_field(ProductField::Name, "Desk").unwrap();
    editor.change_field(ProductField::Description, "Wood").unwrap();
    editor.change_field(ProductField::Price, "199.99").unwrap();
    editor.change_field(ProductField::Quantity, "5").unwrap();
    let outcome = editor.submit(&service, &mut navigator).await;

    let desk = ProductDraft::new("Desk", "Wood", 199.99, 5);
    assert_eq!(
        outcome,
        SubmitOutcome::Saved {
            action: SaveAction::Created,
            product: Product::new(id(1), desk.clone()),
            navigate_to: "/".to_string(),
        }
    );
    assert_eq!(backend.requests().await, vec!["POST /products"]);
    assert_eq!(backend.product(1).await, Some(desk));
    assert_eq!(navigator.current(), "/");
}

#[tokio::test]
async fn test_editor_updates_existing_product_over_http() {
    let backend = FakeBackend::start(vec![Product::new(id(7), ProductDraft::new("Shelf", "Pine", 30.0, 2))]).await;
    let service = service_for(&backend, "/products");
    let mut navigator = HistoryNavigator::new("/products/7/edit");
    let mut editor = ProductEditor::for_route(Some("7")).unwrap();

    editor.load(&service).await;
    editor.change_field(ProductField::Price, "35.5").unwrap();
    let outcome = editor.submit(&service, &mut navigator).await;

    assert_eq!(outcome.notice(), Some(Notice::Updated));
    assert_eq!(backend.requests().await, vec!["GET /products/7", "PUT /products/7"]);
    assert_eq!(backend.product(7).await, Some(ProductDraft::new("Shelf", "Pine", 35.5, 2)));
}

#[tokio::test]
async fn test_editor_save_failure_over_http() {
    let backend = FakeBackend::start(vec![]).await;
    backend.fail_writes();
    let service = service_for(&backend, "/products");
    let mut navigator = HistoryNavigator::new("/products/new");
    let mut editor = ProductEditor::new(None);
    editor.change_field(ProductField::Name, "Desk").unwrap();
    editor.change_field(ProductField::Price, "10").unwrap();

    let outcome = editor.submit(&service, &mut navigator).await;

    assert_eq!(outcome.notice(), Some(Notice::SaveFailed));
    assert_eq!(editor.draft().name, "Desk");
    assert!(!editor.is_busy());
    assert_eq!(navigator.current(), "/products/new");
}

#[tokio::test]
async fn test_invalid_draft_never_hits_the_backend() {
    let backend = FakeBackend::start(vec![]).await;
    let service = service_for(&backend, "/products");
    let mut navigator = HistoryNavigator::new("/products/new");
    let mut editor = ProductEditor::new(None);
    editor.change_field(ProductField::Name, "Desk").unwrap();
    editor.change_field(ProductField::Price, "0").unwrap();

    let outcome = editor.submit(&service, &mut navigator).await;

    assert_eq!(outcome.notice().unwrap().to_string(), "Price must be greater than zero");
    assert!(backend.requests().await.is_empty());
}
