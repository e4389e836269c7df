pub mod form;
pub mod product;
