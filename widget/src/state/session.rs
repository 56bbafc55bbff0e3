//! Widget session: one per mounted widget, dropped on unmount.
//!
//! Owns the conversation plus the panel and input state the reference page
//! renders: the floating button toggles `is_open`, the header shows
//! [`ChatSession::status_label`], and the input box is bound to `draft`.
//! Nothing here is persisted.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use tracing::{debug, warn};

use super::conversation::{ConversationStore, PendingRequest};
use crate::net::{ChatTransport, TransportError};

pub const STATUS_ONLINE: &str = "Trực tuyến";
pub const STATUS_OFFLINE: &str = "Tạm ngắt kết nối";
pub const PLACEHOLDER_ONLINE: &str = "Hỏi về lịch sử, kỹ thuật gốm Mỹ Thiện…";
pub const PLACEHOLDER_OFFLINE: &str = "Hệ thống đang bảo trì…";
pub const LOADING_TEXT: &str = "Đang nung đất sét…";

#[derive(Clone, Debug, Default)]
pub struct ChatSession {
    conversation: ConversationStore,
    is_open: bool,
    draft: String,
}

impl ChatSession {
    /// A closed widget with the greeting already in place.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn conversation(&self) -> &ConversationStore {
        &self.conversation
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    // =========================================================================
    // PANEL
    // =========================================================================

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    // =========================================================================
    // INPUT
    // =========================================================================

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Submit the current draft. Clears the draft only when the submission
    /// is accepted.
    ///
    /// The session is left in its loading state until [`Self::complete`]
    /// receives the outcome, so a view can render the indicator while the
    /// caller sends [`PendingRequest::message`].
    pub fn take_submission(&mut self) -> Option<PendingRequest> {
        let pending = self.conversation.submit(&self.draft)?;
        self.draft.clear();
        Some(pending)
    }

    /// Apply the outcome of the request behind `pending`.
    pub fn complete(&mut self, pending: PendingRequest, outcome: Result<String, TransportError>) {
        match outcome {
            Ok(text) => self.conversation.resolve(pending, &text),
            Err(e) => {
                warn!(error = %e, "chat: request failed, widget going offline");
                self.conversation.fail(pending);
            }
        }
    }

    /// Submit the draft and wait for the gateway. Returns `false` when the
    /// submission was ignored and no request was made.
    ///
    /// Borrows the session for the whole round trip. Views that show the
    /// loading indicator use [`Self::take_submission`] and [`Self::complete`]
    /// instead.
    pub async fn send_draft<T>(&mut self, transport: &T) -> bool
    where
        T: ChatTransport + ?Sized,
    {
        let Some(pending) = self.take_submission() else {
            debug!(
                loading = self.conversation.is_loading(),
                reachable = self.conversation.backend_reachable(),
                "chat: submission ignored"
            );
            return false;
        };
        let outcome = transport.send_message(pending.message()).await;
        self.complete(pending, outcome);
        true
    }

    // =========================================================================
    // VIEW MODEL
    // =========================================================================

    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.conversation.backend_reachable() { STATUS_ONLINE } else { STATUS_OFFLINE }
    }

    #[must_use]
    pub fn input_placeholder(&self) -> &'static str {
        if self.conversation.backend_reachable() { PLACEHOLDER_ONLINE } else { PLACEHOLDER_OFFLINE }
    }

    /// Input box and send button are disabled while loading or offline.
    #[must_use]
    pub fn input_disabled(&self) -> bool {
        !self.conversation.can_submit()
    }

    #[must_use]
    pub fn loading_indicator(&self) -> Option<&'static str> {
        self.conversation.is_loading().then_some(LOADING_TEXT)
    }
}
