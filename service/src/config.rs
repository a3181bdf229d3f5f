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

//! Negotiation configuration
//!
//! # Example
//!
//! ```
//! use telnego_service::NegotiationConfig;
//!
//! let config = NegotiationConfig::default()
//!     .with_ttype(true)
//!     .with_charset("UTF-8");
//! assert_eq!(config.charset(), Some("UTF-8"));
//! ```

use crate::{NegotiationError, Result};

/// Options negotiated with every connection
///
/// Supplied once when the service is built and shared read-only with every handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegotiationConfig {
    /// Ask clients for their terminal type (`DO TTYPE`), or refuse it (`DONT TTYPE`)
    pub ttype: bool,

    /// Charset name offered to clients via CHARSET
    ///
    /// `None` (or an empty name) disables CHARSET negotiation and leaves connections at
    /// `"ascii"`.
    pub charset: Option<String>,
}

impl Default for NegotiationConfig {
    fn default() -> Self {
        Self {
            ttype: true,
            charset: None,
        }
    }
}

impl NegotiationConfig {
    /// Create a configuration with TTYPE enabled and CHARSET disabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable TTYPE negotiation
    pub fn with_ttype(mut self, enabled: bool) -> Self {
        self.ttype = enabled;
        self
    }

    /// Offer the given charset to clients
    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    /// Disable CHARSET negotiation
    pub fn without_charset(mut self) -> Self {
        self.charset = None;
        self
    }

    /// The configured charset, if CHARSET negotiation is enabled
    pub fn charset(&self) -> Option<&str> {
        self.charset.as_deref().filter(|name| !name.is_empty())
    }

    /// Validate the configuration
    ///
    /// The charset name is sent verbatim inside a subnegotiation, so it must be printable
    /// ASCII without spaces.
    pub fn validate(&self) -> Result<()> {
        if let Some(charset) = self.charset() {
            if let Some(byte) = charset
                .bytes()
                .find(|b| !b.is_ascii_graphic())
            {
                return Err(NegotiationError::InvalidConfig(format!(
                    "charset '{}' contains invalid byte 0x{:02X}",
                    charset.escape_debug(),
                    byte
                )));
            }
        }
        Ok(())
    }
}
