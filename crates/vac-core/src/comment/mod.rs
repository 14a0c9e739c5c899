//! Comment module
//!
//! Comments and the per-annotation threads the comment list renders.

pub mod model;
pub mod validator;

pub use model::*;
pub use validator::CommentValidator;
