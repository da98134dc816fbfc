//! Event Handlers
//!
//! - api: responses arriving from the background fetch worker
//! - keyboard: user keyboard input

pub mod api;
pub mod keyboard;

// Re-export for convenience
pub use api::handle_api_response;
pub use keyboard::handle_key;
