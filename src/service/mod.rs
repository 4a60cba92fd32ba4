//! CRUD execution and request validation.

pub mod crud;
pub mod validation;

pub use crud::CrudService;
pub use validation::{
    valid_id, validate_new_id, validate_thing, ValidationErrors, MAX_CLIENT_ID, MAX_STRING_LENGTH,
};
