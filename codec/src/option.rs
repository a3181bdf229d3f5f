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

use crate::consts;

///
/// Telnet options recognised by the negotiation engine.
///
/// Option codes outside this set are carried as [`TelnetOption::Unknown`] so that frames for
/// them can still be matched and dispatched.
///
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TelnetOption {
    /// [`consts::option::ECHO`] Telnet Echo Option [RFC857](https://tools.ietf.org/html/rfc857)
    Echo,
    /// [`consts::option::SUPPRESS_GO_AHEAD`] Suppress Go Ahead [RFC858](https://tools.ietf.org/html/rfc858)
    SuppressGoAhead,
    /// [`consts::option::TTYPE`] Terminal Type [RFC1091](https://tools.ietf.org/html/rfc1091)
    TerminalType,
    /// [`consts::option::NAWS`] Negotiate About Window Size [RFC1073](https://tools.ietf.org/html/rfc1073)
    NAWS,
    /// [`consts::option::CHARSET`] Character Set [RFC2066](https://tools.ietf.org/html/rfc2066)
    Charset,
    /// Any other option code
    Unknown(u8),
}

impl TelnetOption {
    /// Map a raw option byte onto a `TelnetOption`
    pub fn from_u8(byte: u8) -> TelnetOption {
        match byte {
            consts::option::ECHO => TelnetOption::Echo,
            consts::option::SUPPRESS_GO_AHEAD => TelnetOption::SuppressGoAhead,
            consts::option::TTYPE => TelnetOption::TerminalType,
            consts::option::NAWS => TelnetOption::NAWS,
            consts::option::CHARSET => TelnetOption::Charset,
            other => TelnetOption::Unknown(other),
        }
    }

    /// Raw option byte for this option
    pub fn to_u8(self) -> u8 {
        match self {
            TelnetOption::Echo => consts::option::ECHO,
            TelnetOption::SuppressGoAhead => consts::option::SUPPRESS_GO_AHEAD,
            TelnetOption::TerminalType => consts::option::TTYPE,
            TelnetOption::NAWS => consts::option::NAWS,
            TelnetOption::Charset => consts::option::CHARSET,
            TelnetOption::Unknown(byte) => byte,
        }
    }
}

impl std::fmt::Display for TelnetOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TelnetOption::Echo => write!(f, "Echo"),
            TelnetOption::SuppressGoAhead => write!(f, "SuppressGoAhead"),
            TelnetOption::TerminalType => write!(f, "TerminalType"),
            TelnetOption::NAWS => write!(f, "NAWS"),
            TelnetOption::Charset => write!(f, "Charset"),
            TelnetOption::Unknown(byte) => write!(f, "Unknown({byte})"),
        }
    }
}

impl From<u8> for TelnetOption {
    fn from(byte: u8) -> Self {
        Self::from_u8(byte)
    }
}

impl From<TelnetOption> for u8 {
    fn from(option: TelnetOption) -> Self {
        option.to_u8()
    }
}
