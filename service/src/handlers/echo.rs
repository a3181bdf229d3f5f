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

//! Echo (RFC 857) state tracking

use super::is_wont_any;
use crate::{HandlerContext, NegotiationEvent, OptionHandler, Result, keys};
use async_trait::async_trait;
use telnego_codec::Frame;
use telnego_codec::consts::{WILL, option};

/// `IAC WILL ECHO`
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoWill;

#[async_trait]
impl OptionHandler for EchoWill {
    fn name(&self) -> &str {
        "echo.will"
    }

    fn matches(&self, frame: &Frame) -> bool {
        frame.is_negotiation(WILL, option::ECHO)
    }

    async fn handle(&self, ctx: &HandlerContext, _frame: &Frame) -> Result<()> {
        ctx.set(keys::ECHO_ENABLED, true);
        ctx.publish(NegotiationEvent::EchoEnabled { id: ctx.id() });
        Ok(())
    }
}

/// `IAC WONT <any>`
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoWont;

#[async_trait]
impl OptionHandler for EchoWont {
    fn name(&self) -> &str {
        "echo.wont"
    }

    fn matches(&self, frame: &Frame) -> bool {
        is_wont_any(frame)
    }

    async fn handle(&self, ctx: &HandlerContext, _frame: &Frame) -> Result<()> {
        ctx.set(keys::ECHO_ENABLED, false);
        ctx.publish(NegotiationEvent::EchoDisabled { id: ctx.id() });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NegotiationConfig;
    use crate::testing::Harness;
    use telnego_codec::consts::{IAC, WONT};

    #[tokio::test]
    async fn will_then_wont() {
        let mut harness = Harness::new(NegotiationConfig::default());
        let will = Frame::from(vec![IAC, WILL, option::ECHO]);
        let wont = Frame::from(vec![IAC, WONT, option::TTYPE]);

        assert!(EchoWill.matches(&will));
        EchoWill.handle(&harness.ctx, &will).await.unwrap();
        assert!(harness.state().echo_enabled);

        assert!(EchoWont.matches(&wont));
        EchoWont.handle(&harness.ctx, &wont).await.unwrap();
        assert!(!harness.state().echo_enabled);

        let id = harness.ctx.id();
        assert_eq!(
            harness.published(),
            vec![
                NegotiationEvent::EchoEnabled { id },
                NegotiationEvent::EchoDisabled { id }
            ]
        );
        assert!(harness.written().is_empty());
    }
}
