//! # widget
//!
//! Client-side core of the pottery village chat widget: the conversation
//! state machine, the per-mount widget session, and the HTTP transport that
//! talks to the gateway's `/api/chat` endpoint.
//!
//! Rendering is left to the host page. A view reads the session's flags and
//! labels and forwards clicks and keystrokes to it. On submit it calls
//! [`state::session::ChatSession::take_submission`], re-renders (the loading
//! indicator is now showing and the input is disabled), sends
//! [`PendingRequest::message`] through a [`ChatTransport`] without holding
//! the session, and hands the outcome to
//! [`state::session::ChatSession::complete`].
//!
//! [`state::session::ChatSession::send_draft`] runs the same steps in one
//! call for hosts that do not render while a request is in flight.

pub mod net;
pub mod state;

pub use net::{ChatTransport, HttpTransport, TransportError};
pub use state::conversation::{ConversationStore, Message, PendingRequest, Phase, Role};
pub use state::session::ChatSession;
