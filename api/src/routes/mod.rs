pub mod ask;
pub mod basic_routes;
pub mod questions;
pub mod upload;
