//! External Services
//!
//! - api: background fetch worker that executes catalog requests off the
//!   UI loop and ships sequence-tagged responses back over a channel

pub mod api;

pub use api::{spawn_api_service, ApiRequest, ApiResponse};
