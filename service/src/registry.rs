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

//! Ordered handler registry and frame dispatch

use crate::{HandlerContext, NegotiationError, OptionHandler, Result, handlers};
use metrics::counter;
use std::sync::Arc;
use telnego_codec::Frame;
use tracing::{debug, info, instrument, trace};

/// Named option handlers, kept in registration order
///
/// Registration happens while the service is being assembled. Once a registry is handed to
/// a [`NegotiationService`](crate::NegotiationService) it is shared read-only.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: Vec<Arc<dyn OptionHandler>>,
}

impl HandlerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in TTYPE, CHARSET and ECHO handlers
    pub fn with_builtin_handlers() -> Self {
        Self {
            handlers: handlers::builtin(),
        }
    }

    /// Register a handler
    ///
    /// A handler whose name is already registered replaces the earlier one and takes over
    /// its position in the dispatch order.
    pub fn register<H: OptionHandler>(&mut self, handler: H) -> Result<()> {
        self.register_shared(Arc::new(handler))
    }

    /// Register an already shared handler
    pub fn register_shared(&mut self, handler: Arc<dyn OptionHandler>) -> Result<()> {
        let name = handler.name().to_string();
        if name.trim().is_empty() {
            return Err(NegotiationError::InvalidHandler(
                "handler name must not be blank".to_string(),
            ));
        }

        match self.handlers.iter().position(|h| h.name() == name) {
            Some(index) => {
                self.handlers[index] = handler;
                info!(handler = %name, position = index, "Replaced handler");
            }
            None => {
                self.handlers.push(handler);
                debug!(handler = %name, position = self.handlers.len() - 1, "Registered handler");
            }
        }
        Ok(())
    }

    /// Register several handlers in order, stopping at the first rejected one
    pub fn register_all<I>(&mut self, handlers: I) -> Result<()>
    where
        I: IntoIterator<Item = Arc<dyn OptionHandler>>,
    {
        for handler in handlers {
            self.register_shared(handler)?;
        }
        Ok(())
    }

    /// Number of registered handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// True when nothing is registered
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered names in dispatch order
    pub fn names(&self) -> Vec<&str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    /// Look up a handler by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn OptionHandler>> {
        self.handlers.iter().find(|h| h.name() == name).cloned()
    }

    /// True when a handler with this name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.iter().any(|h| h.name() == name)
    }

    /// Run every handler that matches `frame`, one after another, in registration order
    ///
    /// Returns how many handlers ran. The first handler error is returned immediately and
    /// the remaining handlers for this frame are skipped.
    #[instrument(skip_all, fields(connection_id = %ctx.id(), frame = ?frame))]
    pub async fn dispatch(&self, ctx: &HandlerContext, frame: &Frame) -> Result<usize> {
        let mut invoked = 0;
        for handler in &self.handlers {
            if !handler.matches(frame) {
                continue;
            }

            trace!(handler = handler.name(), "Invoking handler");
            counter!("telnego.handlers.invoked").increment(1);
            if let Err(error) = handler.handle(ctx, frame).await {
                counter!("telnego.handlers.failed").increment(1);
                debug!(handler = handler.name(), error = %error, "Handler failed");
                return Err(error);
            }
            invoked += 1;
        }
        Ok(invoked)
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handlers", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FnHandler;
    use telnego_codec::consts::{IAC, WILL, WONT};
    use tracing_test::traced_test;

    fn noop(name: &str) -> FnHandler {
        FnHandler::new(name, |_| true, |_, _| async { Ok(()) })
    }

    #[test]
    fn register_preserves_order() {
        let mut registry = HandlerRegistry::new();
        registry.register(noop("a")).unwrap();
        registry.register(noop("b")).unwrap();
        registry.register(noop("c")).unwrap();
        assert_eq!(registry.names(), vec!["a", "b", "c"]);
    }

    #[test]
    fn register_all_keeps_order_and_replaces_in_place() {
        let mut registry = HandlerRegistry::new();
        registry.register(noop("a")).unwrap();
        registry
            .register_all(vec![
                Arc::new(noop("b")) as Arc<dyn OptionHandler>,
                Arc::new(noop("c")),
                Arc::new(FnHandler::new(
                    "a",
                    |frame: &Frame| frame.command() == Some(WONT),
                    |_, _| async { Ok(()) },
                )),
            ])
            .unwrap();

        assert_eq!(registry.names(), vec!["a", "b", "c"]);
        let replaced = registry.get("a").unwrap();
        assert!(!replaced.matches(&Frame::from(vec![IAC, WILL, 1])));
    }

    #[test]
    fn register_all_stops_at_first_blank_name() {
        let mut registry = HandlerRegistry::new();
        let err = registry
            .register_all(vec![
                Arc::new(noop("a")) as Arc<dyn OptionHandler>,
                Arc::new(noop("")),
                Arc::new(noop("c")),
            ])
            .unwrap_err();

        assert!(matches!(err, NegotiationError::InvalidHandler(_)));
        assert_eq!(registry.names(), vec!["a"]);
    }

    #[test]
    fn reregistering_replaces_in_place() {
        let mut registry = HandlerRegistry::new();
        registry.register(noop("a")).unwrap();
        registry.register(noop("b")).unwrap();
        registry
            .register(FnHandler::new(
                "a",
                |frame: &Frame| frame.command() == Some(WONT),
                |_, _| async { Ok(()) },
            ))
            .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["a", "b"]);
        let replaced = registry.get("a").unwrap();
        assert!(!replaced.matches(&Frame::from(vec![IAC, WILL, 1])));
        assert!(replaced.matches(&Frame::from(vec![IAC, WONT, 1])));
    }

    #[test]
    fn blank_names_are_rejected() {
        let mut registry = HandlerRegistry::new();
        let err = registry.register(noop("  ")).unwrap_err();
        assert!(err.is_configuration_error());
        assert!(registry.is_empty());
    }

    #[test]
    fn builtin_registry_contents() {
        let registry = HandlerRegistry::with_builtin_handlers();
        assert_eq!(
            registry.names(),
            vec![
                "ttype.will",
                "ttype.wont",
                "ttype.is",
                "charset.do",
                "charset.accepted",
                "charset.rejected",
                "echo.will",
                "echo.wont",
            ]
        );
        assert!(registry.contains("echo.wont"));
        assert!(!registry.contains("naws.is"));
    }

    #[traced_test]
    #[test]
    fn registration_is_logged() {
        let mut registry = HandlerRegistry::new();
        registry.register(noop("echo.will")).unwrap();
        registry.register(noop("echo.will")).unwrap();
        assert!(logs_contain("Registered handler"));
        assert!(logs_contain("Replaced handler"));
    }
}
