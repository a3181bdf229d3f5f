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

//! Server-initiated negotiation

use crate::{HandlerContext, Result};
use telnego_codec::consts::option;
use telnego_codec::encode;
use tracing::debug;

/// Sends the server's opening offers when a connection is established
///
/// ```text
/// ttype enabled   -> IAC DO TTYPE
/// ttype disabled  -> IAC DONT TTYPE
/// charset set     -> IAC WILL CHARSET
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NegotiationSequencer;

impl NegotiationSequencer {
    /// Create a sequencer
    pub fn new() -> Self {
        Self
    }

    /// Write the opening offers for `ctx`'s connection, in order
    pub async fn start(&self, ctx: &HandlerContext) -> Result<()> {
        let config = ctx.config();
        if config.ttype {
            debug!(connection_id = %ctx.id(), "Requesting terminal type");
            ctx.send(encode::do_sequence(option::TTYPE)).await?;
        } else {
            debug!(connection_id = %ctx.id(), "Declining terminal type");
            ctx.send(encode::dont_sequence(option::TTYPE)).await?;
        }

        if let Some(charset) = config.charset() {
            debug!(connection_id = %ctx.id(), charset, "Offering charset");
            ctx.send(encode::will_sequence(option::CHARSET)).await?;
        }
        Ok(())
    }
}
