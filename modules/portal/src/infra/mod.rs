pub mod images;
pub mod keys;
