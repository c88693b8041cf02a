pub mod error;
pub mod ports;
pub mod product;
pub mod validation;

pub use error::{InputError, InvalidProductId, ServiceError};
pub use ports::{Navigator, ProductService};
pub use product::{Product, ProductDraft, ProductField, ProductId};
pub use validation::ValidationError;
