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

//! Telnet wire constants
//!
//! These values must match exactly for wire compatibility with Telnet peers.

/// Subnegotiation End
pub const SE: u8 = 240;
/// No Operation
pub const NOP: u8 = 241;
/// Are You There
pub const AYT: u8 = 246;
/// Subnegotiation Begin
pub const SB: u8 = 250;
/// Sender wants to enable an option
pub const WILL: u8 = 251;
/// Sender refuses to enable an option
pub const WONT: u8 = 252;
/// Sender asks the receiver to enable an option
pub const DO: u8 = 253;
/// Sender asks the receiver not to enable an option
pub const DONT: u8 = 254;
/// Interpret As Command
pub const IAC: u8 = 255;

/// Subnegotiation `IS` (TTYPE reply marker)
pub const IS: u8 = 0;
/// Subnegotiation `SEND` (TTYPE query marker)
pub const SEND: u8 = 1;
/// Subnegotiation `INFO`
pub const INFO: u8 = 2;

/// CHARSET `REQUEST`
pub const REQUEST: u8 = 1;
/// CHARSET `ACCEPTED`
pub const ACCEPTED: u8 = 2;
/// CHARSET `REJECTED`
pub const REJECTED: u8 = 3;

/// Separator used between charset names in a CHARSET `REQUEST`
pub const SPACE: u8 = 32;

/// Telnet option codes
pub mod option {
    /// Echo [RFC857](https://tools.ietf.org/html/rfc857)
    pub const ECHO: u8 = 1;
    /// Suppress Go Ahead [RFC858](https://tools.ietf.org/html/rfc858)
    pub const SUPPRESS_GO_AHEAD: u8 = 3;
    /// Terminal Type [RFC1091](https://tools.ietf.org/html/rfc1091)
    pub const TTYPE: u8 = 24;
    /// Negotiate About Window Size [RFC1073](https://tools.ietf.org/html/rfc1073)
    pub const NAWS: u8 = 31;
    /// Character Set [RFC2066](https://tools.ietf.org/html/rfc2066)
    pub const CHARSET: u8 = 42;
}
