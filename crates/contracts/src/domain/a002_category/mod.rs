pub mod aggregate;

pub use aggregate::CategoryCatalog;
