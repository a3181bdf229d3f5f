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

//! Core types shared across the negotiation engine

use std::fmt;

/// Identifier the connection layer assigns to an accepted connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(u64);

impl ConnectionId {
    /// Create a new connection ID
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying u64 value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ConnectionId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

/// Outcome of processing one chunk of inbound bytes
#[derive(Debug, Default)]
pub struct IngestSummary {
    /// Frames extracted from the chunk
    pub frames: usize,
    /// Total handler invocations across all frames
    pub handled: usize,
    /// Frames no handler matched
    pub unmatched: usize,
    /// Frames whose dispatch failed, by position in the chunk
    pub failures: Vec<(usize, crate::NegotiationError)>,
}

impl IngestSummary {
    /// True when every frame dispatched without error
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
