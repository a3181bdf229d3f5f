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

//! Error types for the negotiation engine

use crate::types::ConnectionId;
use thiserror::Error;

/// Result type for negotiation operations
pub type Result<T> = std::result::Result<T, NegotiationError>;

/// Negotiation error types
#[derive(Debug, Error)]
pub enum NegotiationError {
    /// A reply could not be encoded
    #[error("Codec error: {0}")]
    Codec(#[from] telnego_codec::CodecError),

    /// No socket is registered for the connection
    #[error("Connection {0} not found")]
    ConnectionNotFound(ConnectionId),

    /// The connection's socket has been closed
    #[error("Connection {0} closed")]
    ConnectionClosed(ConnectionId),

    /// A handler failed the registration contract
    #[error("Invalid handler: {0}")]
    InvalidHandler(String),

    /// Negotiation configuration was rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A handler reported a failure of its own
    #[error("Handler '{name}' failed: {reason}")]
    Handler {
        /// Name of the failing handler
        name: String,
        /// Description of the failure
        reason: String,
    },
}

impl NegotiationError {
    /// Check if the error came from the connection's socket
    ///
    /// These errors mean the peer is gone; the connection layer decides what to do with it.
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            NegotiationError::ConnectionNotFound(_) | NegotiationError::ConnectionClosed(_)
        )
    }

    /// Check if the error is a startup configuration problem
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            NegotiationError::InvalidHandler(_) | NegotiationError::InvalidConfig(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_connection_error() {
        assert!(NegotiationError::ConnectionNotFound(ConnectionId::new(1)).is_connection_error());
        assert!(NegotiationError::ConnectionClosed(ConnectionId::new(1)).is_connection_error());
        assert!(!NegotiationError::InvalidConfig("bad".into()).is_connection_error());
    }

    #[test]
    fn test_error_is_configuration_error() {
        assert!(NegotiationError::InvalidHandler("".into()).is_configuration_error());
        assert!(NegotiationError::InvalidConfig("bad".into()).is_configuration_error());
        assert!(!NegotiationError::ConnectionClosed(ConnectionId::new(7)).is_configuration_error());
    }

    #[test]
    fn test_error_display() {
        let err = NegotiationError::ConnectionClosed(ConnectionId::new(42));
        assert_eq!(err.to_string(), "Connection conn-42 closed");

        let err = NegotiationError::Handler {
            name: "ttype.is".to_string(),
            reason: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Handler 'ttype.is' failed: boom");
    }
}
