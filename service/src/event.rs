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

use crate::ConnectionId;

/// Domain events published as negotiation progresses.
///
/// Events are fire-and-forget; publishers make no delivery or ordering promise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NegotiationEvent {
    /// Client agreed to send its terminal type
    TtypeEnabled {
        /// Connection the event belongs to
        id: ConnectionId,
    },
    /// Client refused an option (any `WONT`)
    TtypeDisabled {
        /// Connection the event belongs to
        id: ConnectionId,
    },
    /// Client reported its terminal type
    TtypeSet {
        /// Connection the event belongs to
        id: ConnectionId,
        /// Reported terminal type
        ttype: String,
    },
    /// Connection charset settled
    CharsetSet {
        /// Connection the event belongs to
        id: ConnectionId,
        /// Charset now in effect
        charset: String,
    },
    /// Client will echo
    EchoEnabled {
        /// Connection the event belongs to
        id: ConnectionId,
    },
    /// Client refused an option (any `WONT`)
    EchoDisabled {
        /// Connection the event belongs to
        id: ConnectionId,
    },
}

impl NegotiationEvent {
    /// Bus topic for this event
    pub fn name(&self) -> &'static str {
        match self {
            NegotiationEvent::TtypeEnabled { .. } => "telnet.ttype.enabled",
            NegotiationEvent::TtypeDisabled { .. } => "telnet.ttype.disabled",
            NegotiationEvent::TtypeSet { .. } => "telnet.ttype.set",
            NegotiationEvent::CharsetSet { .. } => "telnet.charset.set",
            NegotiationEvent::EchoEnabled { .. } => "telnet.echo.enabled",
            NegotiationEvent::EchoDisabled { .. } => "telnet.echo.disabled",
        }
    }

    /// Connection the event belongs to
    pub fn id(&self) -> ConnectionId {
        match self {
            NegotiationEvent::TtypeEnabled { id }
            | NegotiationEvent::TtypeDisabled { id }
            | NegotiationEvent::TtypeSet { id, .. }
            | NegotiationEvent::CharsetSet { id, .. }
            | NegotiationEvent::EchoEnabled { id }
            | NegotiationEvent::EchoDisabled { id } => *id,
        }
    }

    /// Payload value, for events that carry one
    pub fn value(&self) -> Option<&str> {
        match self {
            NegotiationEvent::TtypeSet { ttype, .. } => Some(ttype),
            NegotiationEvent::CharsetSet { charset, .. } => Some(charset),
            _ => None,
        }
    }
}

impl std::fmt::Display for NegotiationEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{} {{{}, {}}}", self.name(), self.id(), value),
            None => write!(f, "{} {{{}}}", self.name(), self.id()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names() {
        let id = ConnectionId::new(3);
        assert_eq!(
            NegotiationEvent::TtypeEnabled { id }.name(),
            "telnet.ttype.enabled"
        );
        assert_eq!(
            NegotiationEvent::EchoDisabled { id }.name(),
            "telnet.echo.disabled"
        );
        let event = NegotiationEvent::CharsetSet {
            id,
            charset: "UTF-8".to_string(),
        };
        assert_eq!(event.name(), "telnet.charset.set");
        assert_eq!(event.value(), Some("UTF-8"));
        assert_eq!(event.id(), id);
    }

    #[test]
    fn event_display() {
        let id = ConnectionId::new(9);
        let event = NegotiationEvent::TtypeSet {
            id,
            ttype: "vt100".to_string(),
        };
        assert_eq!(event.to_string(), "telnet.ttype.set {conn-9, vt100}");
        assert_eq!(
            NegotiationEvent::EchoEnabled { id }.to_string(),
            "telnet.echo.enabled {conn-9}"
        );
    }
}
