pub mod footer;
pub mod navbar;
pub mod product_card;
