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

//! Per-connection negotiation facade

use crate::{
    Collaborators, ConnectionId, DEFAULT_CHARSET, HandlerContext, HandlerRegistry,
    IngestSummary, NegotiatedState, NegotiationConfig, NegotiationSequencer, Result, keys,
};
use metrics::counter;
use std::sync::Arc;
use telnego_codec::extract_frames;
use tracing::{debug, info, instrument, trace, warn};

/// Drives option negotiation for every connection of a server
///
/// The connection layer calls [`on_connect`](Self::on_connect) once a socket is accepted,
/// [`on_data`](Self::on_data) for each inbound chunk and
/// [`on_disconnect`](Self::on_disconnect) when the socket closes. Calls for one connection
/// must be serialized by the caller; different connections may be driven concurrently.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use telnego_service::{
///     BroadcastPublisher, ChannelWriter, Collaborators, ConnectionId, MemoryMetadataStore,
///     NegotiationConfig, NegotiationService,
/// };
///
/// # async fn run() -> telnego_service::Result<()> {
/// let writer = Arc::new(ChannelWriter::default());
/// let collaborators = Collaborators::new(
///     writer.clone(),
///     Arc::new(MemoryMetadataStore::new()),
///     Arc::new(BroadcastPublisher::default()),
/// );
/// let service = NegotiationService::with_builtin_handlers(
///     NegotiationConfig::new().with_charset("UTF-8"),
///     collaborators,
/// )?;
///
/// let id = ConnectionId::new(1);
/// let _outbound = writer.attach(id);
/// service.on_connect(id).await?;
/// service.on_data(id, &[255, 251, 24]).await;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct NegotiationService {
    config: Arc<NegotiationConfig>,
    registry: Arc<HandlerRegistry>,
    collaborators: Collaborators,
    sequencer: NegotiationSequencer,
}

impl NegotiationService {
    /// Create a service with a caller-assembled registry
    pub fn new(
        config: NegotiationConfig,
        registry: HandlerRegistry,
        collaborators: Collaborators,
    ) -> Result<Self> {
        config.validate()?;
        info!(
            ttype = config.ttype,
            charset = config.charset().unwrap_or("-"),
            handlers = registry.len(),
            "Negotiation service ready"
        );
        Ok(Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
            collaborators,
            sequencer: NegotiationSequencer::new(),
        })
    }

    /// Create a service using the built-in TTYPE, CHARSET and ECHO handlers
    pub fn with_builtin_handlers(
        config: NegotiationConfig,
        collaborators: Collaborators,
    ) -> Result<Self> {
        Self::new(config, HandlerRegistry::with_builtin_handlers(), collaborators)
    }

    /// Handler context for a connection
    pub fn context(&self, id: ConnectionId) -> HandlerContext {
        HandlerContext::new(id, self.config.clone(), self.collaborators.clone())
    }

    /// Seed defaults and send the server's opening offers
    #[instrument(skip(self), fields(connection_id = %id))]
    pub async fn on_connect(&self, id: ConnectionId) -> Result<()> {
        let ctx = self.context(id);
        ctx.set(keys::CHARSET, DEFAULT_CHARSET);
        self.sequencer.start(&ctx).await?;
        counter!("telnego.connections.negotiated").increment(1);
        debug!("Opening negotiation sent");
        Ok(())
    }

    /// Extract frames from an inbound chunk and dispatch each one, in order
    ///
    /// A failing frame is logged and recorded in the summary; the remaining frames are
    /// still dispatched.
    #[instrument(skip(self, bytes), fields(connection_id = %id, len = bytes.len()))]
    pub async fn on_data(&self, id: ConnectionId, bytes: &[u8]) -> IngestSummary {
        let frames = extract_frames(bytes);
        let mut summary = IngestSummary {
            frames: frames.len(),
            ..IngestSummary::default()
        };
        if frames.is_empty() {
            trace!("No frames in chunk");
            return summary;
        }

        counter!("telnego.frames.received").increment(frames.len() as u64);
        let ctx = self.context(id);
        for (index, frame) in frames.iter().enumerate() {
            match self.registry.dispatch(&ctx, frame).await {
                Ok(0) => {
                    counter!("telnego.frames.unmatched").increment(1);
                    trace!(frame = ?frame, "No handler matched");
                    summary.unmatched += 1;
                }
                Ok(invoked) => summary.handled += invoked,
                Err(error) => {
                    warn!(frame = ?frame, error = %error, "Frame dispatch failed");
                    summary.failures.push((index, error));
                }
            }
        }
        summary
    }

    /// Forget everything stored for a connection
    #[instrument(skip(self), fields(connection_id = %id))]
    pub fn on_disconnect(&self, id: ConnectionId) {
        self.collaborators.metadata.clear(id);
        debug!("Connection metadata cleared");
    }

    /// What has been negotiated so far for a connection
    pub fn state(&self, id: ConnectionId) -> NegotiatedState {
        NegotiatedState::load(self.collaborators.metadata.as_ref(), id)
    }

    /// Handlers in dispatch order
    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Active configuration
    pub fn config(&self) -> &NegotiationConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BroadcastPublisher, ChannelWriter, MemoryMetadataStore};

    fn collaborators() -> Collaborators {
        Collaborators::new(
            Arc::new(ChannelWriter::default()),
            Arc::new(MemoryMetadataStore::new()),
            Arc::new(BroadcastPublisher::default()),
        )
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = NegotiationService::with_builtin_handlers(
            NegotiationConfig::new().with_charset("UTF 8"),
            collaborators(),
        )
        .unwrap_err();
        assert!(err.is_configuration_error());
    }

    #[tokio::test]
    async fn non_command_input_is_ignored() {
        let service =
            NegotiationService::with_builtin_handlers(NegotiationConfig::default(), collaborators())
                .unwrap();
        let summary = service.on_data(ConnectionId::new(3), b"look north\r\n").await;
        assert_eq!(summary.frames, 0);
        assert!(summary.is_clean());
    }

    #[tokio::test]
    async fn connect_fails_without_attached_socket() {
        let service =
            NegotiationService::with_builtin_handlers(NegotiationConfig::default(), collaborators())
                .unwrap();
        let err = service.on_connect(ConnectionId::new(4)).await.unwrap_err();
        assert!(err.is_connection_error());
        // Seeded before the first write
        assert_eq!(service.state(ConnectionId::new(4)).charset, DEFAULT_CHARSET);
    }
}
