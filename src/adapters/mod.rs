#[cfg(feature = "native")]
pub mod http_client;
pub mod in_memory;
pub mod navigator;
