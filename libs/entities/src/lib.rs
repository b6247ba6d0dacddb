pub mod comment;
pub mod link;
pub mod prelude;
