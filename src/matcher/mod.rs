pub mod dictionary;
pub mod field_matcher;
pub mod normalize;
