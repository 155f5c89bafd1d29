//! UI components

pub mod cart_panel;
pub mod catalog;
pub mod form_field;

pub use cart_panel::CartPanel;
pub use catalog::ServiceCatalog;
pub use form_field::FormFieldInput;
