pub mod document;
pub mod error;
pub mod html;
pub mod snapshot;
