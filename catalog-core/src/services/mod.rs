pub mod catalog;
pub mod controller;
pub mod transform;
