//! Conversation store: the widget's message list and request lifecycle.
//!
//! DESIGN
//! ======
//! A three-phase machine: `Idle` accepts a submission, `AwaitingResponse`
//! holds exactly one in-flight request, and `Offline` is terminal. A
//! submission hands back a [`PendingRequest`] token that only
//! [`ConversationStore::resolve`] or [`ConversationStore::fail`] can
//! consume, so a reply can never land without a matching user message and
//! a second request cannot start while one is outstanding.
//!
//! The message list is append-only; insertion order is display order.

use serde::{Deserialize, Serialize};
use tracing::warn;

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

/// Seeded model message shown when the widget mounts.
pub const GREETING: &str = "Chào bạn! Tôi là **Sứ giả của Làng gốm Mỹ Thiện**. \
    Tôi sẵn sàng chia sẻ về lịch sử, kỹ thuật và tinh hoa gốm truyền thống Quảng Ngãi.";

/// Substituted when the gateway answers with an empty text.
pub const EMPTY_REPLY_PLACEHOLDER: &str = "Tôi đang suy ngẫm thêm về câu hỏi này...";

/// Appended once when a round trip fails; the store is offline afterwards.
pub const OFFLINE_MESSAGE: &str = "Lò nung đang tạm nghỉ 🔥. \
    Hệ thống AI chưa sẵn sàng, vui lòng thử lại sau.";

/// Author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// A single chat message. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    text: String,
}

impl Message {
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: Role::User, text: text.into() }
    }

    #[must_use]
    pub fn model(text: impl Into<String>) -> Self {
        Self { role: Role::Model, text: text.into() }
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Lifecycle phase of the conversation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Ready for the next submission.
    #[default]
    Idle,
    /// A request is in flight; submissions are ignored.
    AwaitingResponse,
    /// The backend failed once; submissions are ignored for the rest of the
    /// session.
    Offline,
}

/// Proof that a submission was accepted. Carries the text to send.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a pending request must be resolved or failed"]
pub struct PendingRequest {
    message: String,
}

impl PendingRequest {
    /// Text to send to the gateway, exactly as the user typed it.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Ordered message list plus lifecycle phase.
#[derive(Clone, Debug)]
pub struct ConversationStore {
    messages: Vec<Message>,
    phase: Phase,
    revision: u64,
}

impl ConversationStore {
    /// A fresh conversation holding only the greeting.
    #[must_use]
    pub fn new() -> Self {
        Self { messages: vec![Message::model(GREETING)], phase: Phase::Idle, revision: 0 }
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::AwaitingResponse
    }

    #[must_use]
    pub fn backend_reachable(&self) -> bool {
        self.phase != Phase::Offline
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Bumped on every append. Views scroll to the newest message when it
    /// changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Accept `text` as the next user message.
    ///
    /// Returns `None` without touching the store when `text` is blank, a
    /// request is already in flight, or the backend is offline.
    pub fn submit(&mut self, text: &str) -> Option<PendingRequest> {
        if text.trim().is_empty() || !self.can_submit() {
            return None;
        }
        self.push(Message::user(text));
        self.phase = Phase::AwaitingResponse;
        Some(PendingRequest { message: text.to_owned() })
    }

    /// Record the gateway's reply to `pending`. Ignored unless a request is
    /// in flight.
    pub fn resolve(&mut self, _pending: PendingRequest, reply: &str) {
        if !self.expects_reply("resolve") {
            return;
        }
        let text = if reply.is_empty() { EMPTY_REPLY_PLACEHOLDER } else { reply };
        self.push(Message::model(text));
        self.phase = Phase::Idle;
    }

    /// Record that `pending` failed. The store goes offline for good.
    /// Ignored unless a request is in flight.
    pub fn fail(&mut self, _pending: PendingRequest) {
        if !self.expects_reply("fail") {
            return;
        }
        self.push(Message::model(OFFLINE_MESSAGE));
        self.phase = Phase::Offline;
    }

    fn expects_reply(&self, op: &'static str) -> bool {
        let awaiting = self.phase == Phase::AwaitingResponse;
        if !awaiting {
            warn!(op, phase = ?self.phase, "conversation: no request in flight, token ignored");
        }
        awaiting
    }

    fn push(&mut self, message: Message) {
        self.messages.push(message);
        self.revision += 1;
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}
