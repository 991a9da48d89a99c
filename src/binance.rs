pub mod rest;
pub mod stream;
pub mod types;
