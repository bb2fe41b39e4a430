//! Transient in-memory message store.
//!
//! Process-wide, append-only, non-durable: the list starts empty at
//! startup and is lost on restart.  A single mutex-guarded owner ensures
//! concurrent appends are never lost.

use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::models::Message;

/// Handle to the shared message list; cloning shares the same list.
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    inner: Arc<Mutex<Vec<Message>>>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new message with a fresh id and return it.
    pub async fn add(&self, text: &str) -> Message {
        let message = Message {
            id: Uuid::new_v4(),
            text: text.to_string(),
        };
        self.inner.lock().await.push(message.clone());
        message
    }

    /// Snapshot of all messages in insertion order.
    pub async fn list(&self) -> Vec<Message> {
        self.inner.lock().await.clone()
    }
}
