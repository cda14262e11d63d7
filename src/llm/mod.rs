mod llm_client;
mod message;
pub mod providers;
mod registry;

pub use llm_client::*;
pub use message::*;
pub use registry::*;
