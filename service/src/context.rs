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

use crate::{
    Collaborators, ConnectionId, MetadataValue, NegotiationConfig, NegotiationEvent, Result,
};
use bytes::Bytes;
use std::sync::Arc;
use tracing::trace;

/// Everything a handler may touch while processing a frame for one connection
///
/// Cloning is cheap; all shared state is reference counted.
#[derive(Clone, Debug)]
pub struct HandlerContext {
    id: ConnectionId,
    config: Arc<NegotiationConfig>,
    collaborators: Collaborators,
}

impl HandlerContext {
    /// Create a context for a connection
    pub fn new(
        id: ConnectionId,
        config: Arc<NegotiationConfig>,
        collaborators: Collaborators,
    ) -> Self {
        Self {
            id,
            config,
            collaborators,
        }
    }

    /// Connection being negotiated
    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// Configuration snapshot
    pub fn config(&self) -> &NegotiationConfig {
        &self.config
    }

    /// Write bytes to the connection's socket
    pub async fn send(&self, bytes: Bytes) -> Result<()> {
        trace!(connection_id = %self.id, bytes = ?bytes.as_ref(), "Sending");
        self.collaborators.writer.write(self.id, bytes).await
    }

    /// Store connection metadata
    pub fn set(&self, key: &str, value: impl Into<MetadataValue>) {
        self.collaborators.metadata.set(self.id, key, value.into());
    }

    /// Read connection metadata
    pub fn get(&self, key: &str) -> Option<MetadataValue> {
        self.collaborators.metadata.get(self.id, key)
    }

    /// Publish a domain event
    pub fn publish(&self, event: NegotiationEvent) {
        self.collaborators.events.publish(event);
    }
}
