pub mod form;

pub use form::CategoryFormDialog;
