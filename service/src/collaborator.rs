//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Interfaces to the collaborators the engine relies on but does not own
//!
//! The connection layer provides the socket writer, the metadata store and the event bus.
//! In-memory implementations live in [`crate::memory`].

use crate::{ConnectionId, NegotiationEvent, Result};
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;

/// Metadata keys written by the built-in handlers
pub mod keys {
    /// Terminal type reported by the client
    pub const TTYPE: &str = "ttype";
    /// Whether the client agreed to send its terminal type
    pub const TTYPE_ENABLED: &str = "ttypeEnabled";
    /// Whether the client agreed to echo
    pub const ECHO_ENABLED: &str = "echoEnabled";
    /// Charset in effect for the connection
    pub const CHARSET: &str = "charset";
}

/// Charset every connection starts with
pub const DEFAULT_CHARSET: &str = "ascii";

/// Terminal type reported for connections that never completed TTYPE
pub const DEFAULT_TTYPE: &str = "unknown";

/// A value stored against a connection
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MetadataValue {
    /// String value
    Text(String),
    /// Boolean value
    Flag(bool),
}

impl MetadataValue {
    /// The string value, if this is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetadataValue::Text(text) => Some(text),
            MetadataValue::Flag(_) => None,
        }
    }

    /// The boolean value, if this is a flag
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            MetadataValue::Flag(flag) => Some(*flag),
            MetadataValue::Text(_) => None,
        }
    }
}

impl From<bool> for MetadataValue {
    fn from(flag: bool) -> Self {
        MetadataValue::Flag(flag)
    }
}

impl From<String> for MetadataValue {
    fn from(text: String) -> Self {
        MetadataValue::Text(text)
    }
}

impl From<&str> for MetadataValue {
    fn from(text: &str) -> Self {
        MetadataValue::Text(text.to_string())
    }
}

/// Writes bytes to a connection's socket
#[async_trait]
pub trait SocketWriter: Send + Sync + 'static {
    /// Deliver `bytes` to the connection
    ///
    /// Fails when the connection is unknown or its socket has closed.
    async fn write(&self, id: ConnectionId, bytes: Bytes) -> Result<()>;
}

/// Per-connection key/value store
pub trait MetadataStore: Send + Sync + 'static {
    /// Store `value` under `key` for the connection
    fn set(&self, id: ConnectionId, key: &str, value: MetadataValue);

    /// Read the value stored under `key`
    fn get(&self, id: ConnectionId, key: &str) -> Option<MetadataValue>;

    /// Forget everything stored for the connection
    fn clear(&self, id: ConnectionId);
}

/// Fire-and-forget event bus
pub trait EventPublisher: Send + Sync + 'static {
    /// Publish an event. Delivery is not guaranteed.
    fn publish(&self, event: NegotiationEvent);
}

/// The collaborator handles a service is built with
#[derive(Clone)]
pub struct Collaborators {
    /// Socket writer
    pub writer: Arc<dyn SocketWriter>,
    /// Metadata store
    pub metadata: Arc<dyn MetadataStore>,
    /// Event bus
    pub events: Arc<dyn EventPublisher>,
}

impl Collaborators {
    /// Bundle the three collaborators
    pub fn new(
        writer: Arc<dyn SocketWriter>,
        metadata: Arc<dyn MetadataStore>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            writer,
            metadata,
            events,
        }
    }
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}

/// Snapshot of what has been negotiated for a connection
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NegotiatedState {
    /// Terminal type, or [`DEFAULT_TTYPE`]
    pub ttype: String,
    /// Client agreed to send its terminal type
    pub ttype_enabled: bool,
    /// Client agreed to echo
    pub echo_enabled: bool,
    /// Charset in effect, or [`DEFAULT_CHARSET`]
    pub charset: String,
}

impl NegotiatedState {
    /// Read the negotiated state for a connection out of `store`
    pub fn load(store: &dyn MetadataStore, id: ConnectionId) -> Self {
        let text = |key: &str, default: &str| {
            store
                .get(id, key)
                .and_then(|value| value.as_text().map(str::to_string))
                .unwrap_or_else(|| default.to_string())
        };
        let flag = |key: &str| {
            store
                .get(id, key)
                .and_then(|value| value.as_flag())
                .unwrap_or(false)
        };

        Self {
            ttype: text(keys::TTYPE, DEFAULT_TTYPE),
            ttype_enabled: flag(keys::TTYPE_ENABLED),
            echo_enabled: flag(keys::ECHO_ENABLED),
            charset: text(keys::CHARSET, DEFAULT_CHARSET),
        }
    }
}
