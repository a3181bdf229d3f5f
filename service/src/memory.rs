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

//! In-memory collaborator implementations
//!
//! Suitable for tests and for small servers that keep all connection state in-process.

use crate::{
    ConnectionId, EventPublisher, MetadataStore, MetadataValue, NegotiationError,
    NegotiationEvent, Result, SocketWriter,
};
use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;
use std::collections::HashMap;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, trace};

/// Metadata store backed by a concurrent map
#[derive(Debug, Default)]
pub struct MemoryMetadataStore {
    entries: DashMap<ConnectionId, HashMap<String, MetadataValue>>,
}

impl MemoryMetadataStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of connections with stored metadata
    pub fn connection_count(&self) -> usize {
        self.entries.len()
    }
}

impl MetadataStore for MemoryMetadataStore {
    fn set(&self, id: ConnectionId, key: &str, value: MetadataValue) {
        trace!(connection_id = %id, key, value = ?value, "Setting metadata");
        self.entries
            .entry(id)
            .or_default()
            .insert(key.to_string(), value);
    }

    fn get(&self, id: ConnectionId, key: &str) -> Option<MetadataValue> {
        self.entries
            .get(&id)
            .and_then(|entry| entry.get(key).cloned())
    }

    fn clear(&self, id: ConnectionId) {
        self.entries.remove(&id);
    }
}

/// Event publisher backed by a tokio broadcast channel
///
/// Events published while nobody is subscribed are dropped, and slow subscribers may miss
/// events once the channel capacity is exceeded.
#[derive(Debug, Clone)]
pub struct BroadcastPublisher {
    sender: broadcast::Sender<NegotiationEvent>,
}

impl BroadcastPublisher {
    /// Create a publisher retaining up to `capacity` undelivered events per subscriber
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Subscribe to future events
    pub fn subscribe(&self) -> broadcast::Receiver<NegotiationEvent> {
        self.sender.subscribe()
    }
}

impl Default for BroadcastPublisher {
    fn default() -> Self {
        Self::new(256)
    }
}

impl EventPublisher for BroadcastPublisher {
    fn publish(&self, event: NegotiationEvent) {
        trace!(event = %event, "Publishing event");
        // No subscribers is not an error
        let _ = self.sender.send(event);
    }
}

/// Socket writer that forwards bytes to per-connection channels
///
/// The connection layer calls [`ChannelWriter::attach`] when a connection is accepted and
/// drains the returned receiver into the socket.
#[derive(Debug)]
pub struct ChannelWriter {
    channels: DashMap<ConnectionId, mpsc::Sender<Bytes>>,
    capacity: usize,
}

impl ChannelWriter {
    /// Create a writer whose per-connection channels buffer up to `capacity` writes
    pub fn new(capacity: usize) -> Self {
        Self {
            channels: DashMap::new(),
            capacity: capacity.max(1),
        }
    }

    /// Register a connection and return the receiving end of its write channel
    ///
    /// Attaching an id twice replaces the earlier channel.
    pub fn attach(&self, id: ConnectionId) -> mpsc::Receiver<Bytes> {
        let (tx, rx) = mpsc::channel(self.capacity);
        if self.channels.insert(id, tx).is_some() {
            debug!(connection_id = %id, "Replacing existing write channel");
        }
        rx
    }

    /// Forget a connection
    pub fn detach(&self, id: ConnectionId) {
        self.channels.remove(&id);
    }

    /// Number of attached connections
    pub fn connection_count(&self) -> usize {
        self.channels.len()
    }
}

impl Default for ChannelWriter {
    fn default() -> Self {
        Self::new(64)
    }
}

#[async_trait]
impl SocketWriter for ChannelWriter {
    async fn write(&self, id: ConnectionId, bytes: Bytes) -> Result<()> {
        let sender = self
            .channels
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(NegotiationError::ConnectionNotFound(id))?;

        trace!(connection_id = %id, len = bytes.len(), "Queueing write");
        sender
            .send(bytes)
            .await
            .map_err(|_| NegotiationError::ConnectionClosed(id))
    }
}
