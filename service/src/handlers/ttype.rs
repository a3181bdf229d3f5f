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

//! Terminal Type (RFC 1091)
//!
//! ```text
//! client: IAC WILL TTYPE
//! server: IAC SB TTYPE SEND IAC SE
//! client: IAC SB TTYPE IS <terminal-type> IAC SE
//! ```

use super::is_wont_any;
use crate::{HandlerContext, NegotiationEvent, OptionHandler, Result, keys};
use async_trait::async_trait;
use telnego_codec::consts::{IAC, SB, WILL, option};
use telnego_codec::{Frame, encode};
use tracing::debug;

/// Decode a TTYPE `IS` payload into a terminal type
///
/// Bytes are read as 7-bit ASCII. The leading `IS` marker is dropped and surrounding
/// whitespace trimmed.
pub fn decode_terminal_type(payload: &[u8]) -> String {
    payload
        .iter()
        .skip(1)
        .map(|&b| char::from(b & 0x7F))
        .collect::<String>()
        .trim()
        .to_string()
}

/// `IAC WILL TTYPE`: the client can send its terminal type, so ask for it
#[derive(Debug, Clone, Copy, Default)]
pub struct TtypeWill;

#[async_trait]
impl OptionHandler for TtypeWill {
    fn name(&self) -> &str {
        "ttype.will"
    }

    fn matches(&self, frame: &Frame) -> bool {
        frame.is_negotiation(WILL, option::TTYPE)
    }

    async fn handle(&self, ctx: &HandlerContext, _frame: &Frame) -> Result<()> {
        ctx.set(keys::TTYPE_ENABLED, true);
        ctx.publish(NegotiationEvent::TtypeEnabled { id: ctx.id() });
        ctx.send(encode::ttype_send()).await
    }
}

/// `IAC WONT <any>`: terminal type will not be sent
#[derive(Debug, Clone, Copy, Default)]
pub struct TtypeWont;

#[async_trait]
impl OptionHandler for TtypeWont {
    fn name(&self) -> &str {
        "ttype.wont"
    }

    fn matches(&self, frame: &Frame) -> bool {
        is_wont_any(frame)
    }

    async fn handle(&self, ctx: &HandlerContext, _frame: &Frame) -> Result<()> {
        ctx.set(keys::TTYPE_ENABLED, false);
        ctx.publish(NegotiationEvent::TtypeDisabled { id: ctx.id() });
        Ok(())
    }
}

/// `IAC SB TTYPE IS ... IAC SE`: the client's terminal type
#[derive(Debug, Clone, Copy, Default)]
pub struct TtypeIs;

#[async_trait]
impl OptionHandler for TtypeIs {
    fn name(&self) -> &str {
        "ttype.is"
    }

    fn matches(&self, frame: &Frame) -> bool {
        frame.starts_with(&[IAC, SB, option::TTYPE])
    }

    async fn handle(&self, ctx: &HandlerContext, frame: &Frame) -> Result<()> {
        let ttype = decode_terminal_type(frame.payload());
        debug!(connection_id = %ctx.id(), ttype = %ttype, "Terminal type reported");
        ctx.set(keys::TTYPE, ttype.as_str());
        ctx.publish(NegotiationEvent::TtypeSet { id: ctx.id(), ttype });
        Ok(())
    }
}
