pub mod client;
pub mod error;
mod retry;
pub mod types;

pub use client::ShopClient;
pub use error::ClientError;
pub use types::{ProductsPage, ShopProduct};
