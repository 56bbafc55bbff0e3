//! Network layer between the widget and the chat gateway.

pub mod api;
pub mod types;

pub use api::{CHAT_ENDPOINT, ChatTransport, HttpTransport, TransportError};
