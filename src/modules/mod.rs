pub mod comment;
pub mod media;
pub mod tag;
