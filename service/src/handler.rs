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

//! Option handler trait and a closure-based implementation

use crate::{HandlerContext, Result};
use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;
use telnego_codec::Frame;

/// A unit of negotiation capability
///
/// A handler pairs a predicate over frames with an action run when the predicate matches.
/// Handlers are registered by name in a [`HandlerRegistry`](crate::HandlerRegistry); every
/// matching handler runs for a frame, in registration order.
///
/// # Example
///
/// ```no_run
/// use telnego_service::{HandlerContext, OptionHandler, Result};
/// use telnego_codec::{Frame, consts};
/// use async_trait::async_trait;
///
/// struct NawsLogger;
///
/// #[async_trait]
/// impl OptionHandler for NawsLogger {
///     fn name(&self) -> &str {
///         "naws.log"
///     }
///
///     fn matches(&self, frame: &Frame) -> bool {
///         frame.is_negotiation(consts::WILL, consts::option::NAWS)
///     }
///
///     async fn handle(&self, ctx: &HandlerContext, _frame: &Frame) -> Result<()> {
///         println!("{} offered NAWS", ctx.id());
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait OptionHandler: Send + Sync + 'static {
    /// Registry key. Must not be blank.
    fn name(&self) -> &str;

    /// True when this handler should run for `frame`
    fn matches(&self, frame: &Frame) -> bool;

    /// React to a matching frame
    async fn handle(&self, ctx: &HandlerContext, frame: &Frame) -> Result<()>;
}

type Matcher = Box<dyn Fn(&Frame) -> bool + Send + Sync + 'static>;
type Action = Box<
    dyn Fn(HandlerContext, Frame) -> Pin<Box<dyn Future<Output = Result<()>> + Send>>
        + Send
        + Sync
        + 'static,
>;

/// Handler assembled from a predicate and an async closure
///
/// # Example
///
/// ```no_run
/// use telnego_service::FnHandler;
/// use telnego_codec::consts;
///
/// let handler = FnHandler::new(
///     "ayt.reply",
///     |frame| frame.command() == Some(consts::AYT),
///     |ctx, _frame| async move { ctx.send(bytes::Bytes::from_static(b"[yes]\r\n")).await },
/// );
/// ```
pub struct FnHandler {
    name: String,
    matcher: Matcher,
    action: Action,
}

impl FnHandler {
    /// Build a handler from a predicate and an action
    pub fn new<M, A, Fut>(name: impl Into<String>, matcher: M, action: A) -> Self
    where
        M: Fn(&Frame) -> bool + Send + Sync + 'static,
        A: Fn(HandlerContext, Frame) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        Self {
            name: name.into(),
            matcher: Box::new(matcher),
            action: Box::new(move |ctx, frame| Box::pin(action(ctx, frame))),
        }
    }
}

impl std::fmt::Debug for FnHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnHandler")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl OptionHandler for FnHandler {
    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, frame: &Frame) -> bool {
        (self.matcher)(frame)
    }

    async fn handle(&self, ctx: &HandlerContext, frame: &Frame) -> Result<()> {
        (self.action)(ctx.clone(), frame.clone()).await
    }
}
