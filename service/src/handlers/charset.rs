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

//! Character set negotiation (RFC 2066)
//!
//! The server offers `WILL CHARSET` on connect. A cooperating client answers `DO CHARSET`,
//! the server requests its configured character set and the client accepts or rejects it.

use crate::{DEFAULT_CHARSET, HandlerContext, NegotiationEvent, OptionHandler, Result, keys};
use async_trait::async_trait;
use telnego_codec::consts::{ACCEPTED, DO, DONT, IAC, REJECTED, SB, option};
use telnego_codec::{Frame, encode};
use tracing::debug;

fn store_charset(ctx: &HandlerContext, charset: &str) {
    ctx.set(keys::CHARSET, charset);
    ctx.publish(NegotiationEvent::CharsetSet {
        id: ctx.id(),
        charset: charset.to_string(),
    });
}

/// `IAC DO CHARSET`: send `REQUEST <charset>`, or refuse when no charset is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct CharsetDo;

#[async_trait]
impl OptionHandler for CharsetDo {
    fn name(&self) -> &str {
        "charset.do"
    }

    fn matches(&self, frame: &Frame) -> bool {
        frame.is_negotiation(DO, option::CHARSET)
    }

    async fn handle(&self, ctx: &HandlerContext, _frame: &Frame) -> Result<()> {
        match ctx.config().charset() {
            Some(charset) => {
                debug!(connection_id = %ctx.id(), charset, "Requesting charset");
                ctx.send(encode::charset_request(charset)?).await
            }
            None => ctx.send(encode::wont_sequence(option::CHARSET)).await,
        }
    }
}

/// `IAC SB CHARSET ACCEPTED ...`: the requested charset is in effect
#[derive(Debug, Clone, Copy, Default)]
pub struct CharsetAccepted;

#[async_trait]
impl OptionHandler for CharsetAccepted {
    fn name(&self) -> &str {
        "charset.accepted"
    }

    fn matches(&self, frame: &Frame) -> bool {
        frame.starts_with(&[IAC, SB, option::CHARSET, ACCEPTED])
    }

    async fn handle(&self, ctx: &HandlerContext, _frame: &Frame) -> Result<()> {
        let charset = ctx.config().charset().unwrap_or(DEFAULT_CHARSET).to_string();
        store_charset(ctx, &charset);
        Ok(())
    }
}

/// Charset refused: fall back to ASCII
///
/// Matches `IAC SB CHARSET REJECTED`, the transposed `IAC SB REJECTED CHARSET` some clients
/// send, and `IAC DONT CHARSET`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharsetRejected;

#[async_trait]
impl OptionHandler for CharsetRejected {
    fn name(&self) -> &str {
        "charset.rejected"
    }

    fn matches(&self, frame: &Frame) -> bool {
        frame.starts_with(&[IAC, SB, option::CHARSET, REJECTED])
            || frame.starts_with(&[IAC, SB, REJECTED, option::CHARSET])
            || frame.is_negotiation(DONT, option::CHARSET)
    }

    async fn handle(&self, ctx: &HandlerContext, _frame: &Frame) -> Result<()> {
        store_charset(ctx, DEFAULT_CHARSET);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NegotiationConfig;
    use crate::testing::Harness;
    use telnego_codec::consts::{SE, WILL};

    #[test]
    fn rejection_patterns() {
        let matches = |bytes: &[u8]| CharsetRejected.matches(&Frame::from(bytes.to_vec()));

        assert!(matches(&[IAC, SB, option::CHARSET, REJECTED, IAC, SE]));
        assert!(matches(&[IAC, SB, REJECTED, option::CHARSET, IAC, SE]));
        assert!(matches(&[IAC, DONT, option::CHARSET]));
        assert!(!matches(&[IAC, WILL, option::CHARSET]));
        assert!(!matches(&[IAC, SB, option::CHARSET, ACCEPTED, IAC, SE]));
    }

    #[tokio::test]
    async fn do_requests_configured_charset() {
        let mut harness = Harness::new(NegotiationConfig::new().with_charset("UTF-8"));
        CharsetDo
            .handle(&harness.ctx, &Frame::from(vec![IAC, DO, option::CHARSET]))
            .await
            .unwrap();

        let written = harness.written();
        assert_eq!(written.len(), 1);
        assert_eq!(
            written[0].as_ref(),
            &[IAC, SB, option::CHARSET, 1, b' ', b'U', b'T', b'F', b'-', b'8', IAC, SE]
        );
    }

    #[tokio::test]
    async fn do_without_charset_refuses() {
        let mut harness = Harness::new(NegotiationConfig::new().without_charset());
        CharsetDo
            .handle(&harness.ctx, &Frame::from(vec![IAC, DO, option::CHARSET]))
            .await
            .unwrap();
        assert_eq!(harness.written(), vec![encode::wont_sequence(option::CHARSET)]);
    }

    #[tokio::test]
    async fn accepted_stores_configured_charset() {
        let mut harness = Harness::new(NegotiationConfig::new().with_charset("UTF-8"));
        let frame = Frame::from(vec![IAC, SB, option::CHARSET, ACCEPTED, b'U', IAC, SE]);
        CharsetAccepted.handle(&harness.ctx, &frame).await.unwrap();

        assert_eq!(harness.state().charset, "UTF-8");
        assert_eq!(
            harness.published(),
            vec![NegotiationEvent::CharsetSet {
                id: harness.ctx.id(),
                charset: "UTF-8".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn rejected_falls_back_to_ascii() {
        let mut harness = Harness::new(NegotiationConfig::new().with_charset("UTF-8"));
        CharsetRejected
            .handle(&harness.ctx, &Frame::from(vec![IAC, DONT, option::CHARSET]))
            .await
            .unwrap();

        assert_eq!(harness.state().charset, DEFAULT_CHARSET);
        assert_eq!(harness.published().len(), 1);
        assert!(harness.written().is_empty());
    }
}
