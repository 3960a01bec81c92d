pub mod config;
pub mod db;
pub mod modules;
pub mod telemetry;

pub use modules::comment;
pub use modules::media;
pub use modules::tag;

#[cfg(test)]
mod tests;
