//! Page sections

pub mod contact;
pub mod shop;

pub use contact::ContactView;
pub use shop::ShopView;
