//! Client-side widget state.
//!
//! DESIGN
//! ======
//! `conversation` is pure domain state (messages and request lifecycle);
//! `session` layers the panel and input concerns on top of it so the
//! rendering layer only has to read flags and labels.

pub mod conversation;
pub mod session;
