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

//! Negotiation Server Example
//!
//! A TCP server that runs only the option negotiation engine:
//! - Accepts connections on port 2323
//! - Offers TTYPE and CHARSET on connect
//! - Logs every negotiation event and the final negotiated state on disconnect
//!
//! ## Usage
//!
//! Run the server:
//! ```bash
//! RUST_LOG=debug cargo run --example negotiation_server
//! ```
//!
//! Connect with a telnet client:
//! ```bash
//! telnet localhost 2323
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use telnego_service::{
    BroadcastPublisher, ChannelWriter, Collaborators, ConnectionId, MemoryMetadataStore,
    NegotiationConfig, NegotiationService,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let writer = Arc::new(ChannelWriter::default());
    let publisher = BroadcastPublisher::default();
    let mut events = publisher.subscribe();
    let collaborators = Collaborators::new(
        writer.clone(),
        Arc::new(MemoryMetadataStore::new()),
        Arc::new(publisher),
    );
    let service = NegotiationService::with_builtin_handlers(
        NegotiationConfig::new().with_charset("UTF-8"),
        collaborators,
    )?;

    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            tracing::info!("{}", event);
        }
    });

    let listener = TcpListener::bind("127.0.0.1:2323").await?;
    println!("Negotiation server listening on 127.0.0.1:2323");
    println!("Press Ctrl+C to stop the server\n");

    let next_id = AtomicU64::new(1);
    loop {
        tokio::select! {
            accepted = listener.accept() => {
                let (stream, peer) = accepted?;
                let id = ConnectionId::new(next_id.fetch_add(1, Ordering::Relaxed));
                tracing::info!("Client {} connected from {}", id, peer);
                tokio::spawn(serve(id, stream, service.clone(), writer.clone()));
            }
            _ = tokio::signal::ctrl_c() => {
                println!("\nShutting down server...");
                break;
            }
        }
    }
    Ok(())
}

async fn serve(
    id: ConnectionId,
    stream: TcpStream,
    service: NegotiationService,
    writer: Arc<ChannelWriter>,
) {
    let (mut reader, mut socket) = stream.into_split();
    let mut outbound = writer.attach(id);
    let flush = tokio::spawn(async move {
        while let Some(bytes) = outbound.recv().await {
            if socket.write_all(&bytes).await.is_err() {
                break;
            }
        }
    });

    if let Err(e) = service.on_connect(id).await {
        tracing::error!("Failed to start negotiation for {}: {}", id, e);
    }

    let mut buffer = [0u8; 1024];
    loop {
        match reader.read(&mut buffer).await {
            Ok(0) => break,
            Ok(n) => {
                let summary = service.on_data(id, &buffer[..n]).await;
                tracing::debug!(
                    "Client {}: {} frames, {} handled, {} unmatched",
                    id,
                    summary.frames,
                    summary.handled,
                    summary.unmatched
                );
            }
            Err(e) => {
                tracing::error!("Read error for {}: {}", id, e);
                break;
            }
        }
    }

    tracing::info!("Client {} disconnected with {:?}", id, service.state(id));
    service.on_disconnect(id);
    writer.detach(id);
    let _ = flush.await;
}
