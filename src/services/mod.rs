pub mod form_store;
pub mod validation;


#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;
