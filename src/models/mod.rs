pub mod common;
pub mod form;
pub mod order;
pub mod property;
