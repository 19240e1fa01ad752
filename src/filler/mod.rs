pub mod error;
pub mod form_filler;
pub mod outcome;
pub mod request;
