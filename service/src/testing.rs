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

//! Shared fixtures for unit tests

use crate::{
    BroadcastPublisher, ChannelWriter, Collaborators, ConnectionId, HandlerContext,
    MemoryMetadataStore, NegotiatedState, NegotiationConfig, NegotiationEvent,
};
use bytes::Bytes;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};

/// A handler context wired to in-memory collaborators
pub(crate) struct Harness {
    pub ctx: HandlerContext,
    pub metadata: Arc<MemoryMetadataStore>,
    pub writer: Arc<ChannelWriter>,
    events: broadcast::Receiver<NegotiationEvent>,
    writes: mpsc::Receiver<Bytes>,
}

impl Harness {
    pub fn new(config: NegotiationConfig) -> Self {
        let id = ConnectionId::new(1);
        let metadata = Arc::new(MemoryMetadataStore::new());
        let writer = Arc::new(ChannelWriter::new(32));
        let publisher = BroadcastPublisher::new(32);
        let events = publisher.subscribe();
        let writes = writer.attach(id);
        let collaborators =
            Collaborators::new(writer.clone(), metadata.clone(), Arc::new(publisher));

        Self {
            ctx: HandlerContext::new(id, Arc::new(config), collaborators),
            metadata,
            writer,
            events,
            writes,
        }
    }

    /// Everything written to the socket since the last call
    pub fn written(&mut self) -> Vec<Bytes> {
        let mut out = Vec::new();
        while let Ok(bytes) = self.writes.try_recv() {
            out.push(bytes);
        }
        out
    }

    /// Everything published since the last call
    pub fn published(&mut self) -> Vec<NegotiationEvent> {
        let mut out = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            out.push(event);
        }
        out
    }

    pub fn state(&self) -> NegotiatedState {
        NegotiatedState::load(self.metadata.as_ref(), self.ctx.id())
    }
}
