pub mod common;
pub mod traits;
pub mod web;
