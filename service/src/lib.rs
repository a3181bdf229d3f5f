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

//! Telnet Option Negotiation Engine
//!
//! Reacts to the negotiation commands a Telnet client sends and drives the server's half of
//! the TTYPE, CHARSET and ECHO exchanges. Sockets, connection metadata and event delivery
//! belong to the embedding server and are reached through the traits in [`Collaborators`].
//!
//! # Architecture
//!
//! ```text
//! NegotiationService
//!     ↓  on_connect            on_data
//! NegotiationSequencer     extract_frames → HandlerRegistry → OptionHandler*
//!     ↓                                           ↓
//!            HandlerContext (SocketWriter, MetadataStore, EventPublisher)
//! ```
//!
//! Handlers are looked up per frame; every handler whose predicate matches runs, in the
//! order handlers were registered. Re-registering a name replaces the earlier handler.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use telnego_service::{
//!     BroadcastPublisher, ChannelWriter, Collaborators, ConnectionId, HandlerRegistry,
//!     MemoryMetadataStore, NegotiationConfig, NegotiationService, handlers,
//! };
//!
//! # async fn run() -> telnego_service::Result<()> {
//! let mut registry = HandlerRegistry::with_builtin_handlers();
//! registry.register(handlers::EchoWill)?;
//!
//! let service = NegotiationService::new(
//!     NegotiationConfig::new().with_charset("UTF-8"),
//!     registry,
//!     Collaborators::new(
//!         Arc::new(ChannelWriter::default()),
//!         Arc::new(MemoryMetadataStore::new()),
//!         Arc::new(BroadcastPublisher::default()),
//!     ),
//! )?;
//!
//! let id = ConnectionId::new(7);
//! service.on_connect(id).await?;
//! let summary = service.on_data(id, &[255, 251, 24]).await;
//! println!("{} frames, state {:?}", summary.frames, service.state(id));
//! # Ok(())
//! # }
//! ```

mod collaborator;
mod config;
mod context;
mod error;
mod event;
mod handler;
pub mod handlers;
pub mod memory;
mod registry;
mod sequencer;
mod service;
#[cfg(test)]
mod testing;
mod types;

pub use collaborator::{
    Collaborators, DEFAULT_CHARSET, DEFAULT_TTYPE, EventPublisher, MetadataStore, MetadataValue,
    NegotiatedState, SocketWriter, keys,
};
pub use config::NegotiationConfig;
pub use context::HandlerContext;
pub use error::{NegotiationError, Result};
pub use event::NegotiationEvent;
pub use handler::{FnHandler, OptionHandler};
pub use memory::{BroadcastPublisher, ChannelWriter, MemoryMetadataStore};
pub use registry::HandlerRegistry;
pub use sequencer::NegotiationSequencer;
pub use service::NegotiationService;
pub use types::{ConnectionId, IngestSummary};
