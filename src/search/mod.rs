mod client;
pub mod normalize;

pub use client::{NaverShoppingClient, ShoppingSearch};
pub use normalize::normalize_listing;
