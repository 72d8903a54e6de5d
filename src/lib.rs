pub mod card;
pub mod error;
pub mod reader;
pub mod request;
pub mod service;
