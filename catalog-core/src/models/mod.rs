pub mod book;
pub mod error;
pub mod query;
pub mod responses;
