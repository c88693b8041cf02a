//! # Product Editor
//!
//! Headless create/edit form for products stored behind a REST backend.
//!
//! ## Features
//!
//! - **Draft as a value**: every input change produces a new [`ProductDraft`](domain::ProductDraft)
//! - **Explicit busy state**: idle, loading or submitting, never both
//! - **Typed outcomes**: loads and submissions return outcomes and notices
//!   instead of showing alerts, so any front end can render them
//! - **Pluggable backend**: the editor only sees the [`ProductService`](domain::ProductService) port
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use product_editor::adapters::http_client::HttpProductService;
//! use product_editor::adapters::navigator::HistoryNavigator;
//! use product_editor::application::ProductEditor;
//! use product_editor::domain::ProductField;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let service = HttpProductService::new("http://localhost:3000", "/products");
//!     let mut navigator = HistoryNavigator::new("/products/new");
//!
//!     let mut editor = ProductEditor::new(None);
//!     editor.change_field(ProductField::Name, "Desk")?;
//!     editor.change_field(ProductField::Price, "199.99")?;
//!
//!     let outcome = editor.submit(&service, &mut navigator).await;
//!     if let Some(notice) = outcome.notice() {
//!         println!("{}", notice);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Domain**: product types, validation rules and ports
//! - **Application**: the editor state machine
//! - **Adapters**: HTTP backend, in-memory backend, navigators
//! - **Config** and **CLI**: the terminal front end (feature `native`)

pub mod adapters;
pub mod application;
pub mod domain;

#[cfg(feature = "native")]
pub mod cli;
#[cfg(feature = "native")]
pub mod config;
