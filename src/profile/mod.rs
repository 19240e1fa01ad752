pub mod field_key;
pub mod profile_model;
