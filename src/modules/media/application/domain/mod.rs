pub mod entities;
pub mod status;
pub mod value_objects;
