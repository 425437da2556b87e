//! Real collaborator implementations

pub mod candidate_source;
pub mod file_store;
pub mod http_publisher;
pub mod memory_store;
pub mod template_renderer;

#[cfg(test)]
mod tests;

pub use candidate_source::*;
pub use file_store::*;
pub use http_publisher::*;
pub use memory_store::*;
pub use template_renderer::*;
