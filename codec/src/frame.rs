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

use crate::{TelnetOption, consts};
use bytes::Bytes;

/// A single Telnet command as it appeared on the wire.
///
/// A frame comes in one of two shapes:
///
/// - **simple**: `IAC <command> <option>`
/// - **subnegotiation**: `IAC SB <option> <payload...> IAC SE`
///
/// Frames produced by [`extract_frames`](crate::extract_frames) always begin with
/// [`consts::IAC`] and never share bytes with one another.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Frame(Bytes);

impl Frame {
    /// Wrap raw bytes as a frame.
    pub fn new(bytes: impl Into<Bytes>) -> Frame {
        Frame(bytes.into())
    }

    /// The raw bytes of this frame
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of bytes in the frame
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the frame holds no bytes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The command byte following IAC (`WILL`, `DO`, `SB`, ...)
    pub fn command(&self) -> Option<u8> {
        self.0.get(1).copied()
    }

    /// The option byte following the command byte
    pub fn option(&self) -> Option<u8> {
        self.0.get(2).copied()
    }

    /// The option byte decoded as a [`TelnetOption`]
    pub fn telnet_option(&self) -> Option<TelnetOption> {
        self.option().map(TelnetOption::from)
    }

    /// True when this is an `IAC SB ...` frame
    pub fn is_subnegotiation(&self) -> bool {
        self.0.first() == Some(&consts::IAC) && self.command() == Some(consts::SB)
    }

    /// True when the frame begins with exactly `prefix`
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.0.starts_with(prefix)
    }

    /// True when the frame begins with `IAC <command> <option>`
    pub fn is_negotiation(&self, command: u8, option: u8) -> bool {
        self.starts_with(&[consts::IAC, command, option])
    }

    /// Subnegotiation payload: the bytes between `IAC SB <option>` and the trailing `IAC SE`.
    ///
    /// Frames shorter than five bytes have no payload.
    pub fn payload(&self) -> &[u8] {
        if self.0.len() < 5 {
            return &[];
        }
        &self.0[3..self.0.len() - 2]
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Frame {
    fn from(bytes: Vec<u8>) -> Self {
        Frame(Bytes::from(bytes))
    }
}

impl From<&'static [u8]> for Frame {
    fn from(bytes: &'static [u8]) -> Self {
        Frame(Bytes::from_static(bytes))
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Frame({:?})", self.0.as_ref())
    }
}
