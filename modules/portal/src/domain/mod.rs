pub mod auth;
pub mod directory;
pub mod error;
pub mod ids;
pub mod market;
pub mod news;
pub mod policy;
pub mod ports;
pub mod profile;
