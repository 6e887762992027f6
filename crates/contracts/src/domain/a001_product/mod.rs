pub mod aggregate;
pub mod seed;
pub mod store;

pub use aggregate::{parse_price, parse_stock, Product, ProductDto, ProductFields, ProductId};
pub use store::{ProductStore, StoreEvent, SubscriptionId};
