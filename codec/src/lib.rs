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

//! # Telnego Command Codec
//!
//! Framing and encoding for the Telnet option negotiation sublanguage.
//!
//! ## Overview
//!
//! Inbound bytes that begin with `IAC` are split into [`Frame`]s by [`extract_frames`]. Each
//! frame is exactly one Telnet command:
//!
//! - 3-byte negotiation: `IAC <DO|DONT|WILL|WONT> <option>`
//! - Subnegotiation: `IAC SB <option> <data...> IAC SE`
//!
//! Outbound negotiation sequences are built by the functions in [`encode`], or through the
//! [`CommandEncoder`] which implements [`tokio_util::codec::Encoder`].
//!
//! ## Usage Example
//!
//! ```rust
//! use telnego_codec::{consts, encode, extract_frames};
//!
//! let request = encode::do_sequence(consts::option::TTYPE);
//! assert_eq!(&request[..], &[consts::IAC, consts::DO, consts::option::TTYPE]);
//!
//! let frames = extract_frames(&[consts::IAC, consts::WILL, consts::option::TTYPE]);
//! assert!(frames[0].is_negotiation(consts::WILL, consts::option::TTYPE));
//! ```
//!
//! ## Limitations
//!
//! Doubled `IAC` bytes inside subnegotiation payloads are neither produced nor unescaped.
//!
//! ## Related RFCs
//!
//! - RFC 854: Telnet Protocol Specification
//! - RFC 857: Telnet Echo Option
//! - RFC 1091: Telnet Terminal-Type Option
//! - RFC 2066: Telnet Charset Option

#![warn(
    clippy::cargo,
    missing_docs,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(
    clippy::option_if_let_else,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]

pub mod consts;
pub mod encode;
mod extract;
mod frame;
mod option;
mod result;

pub use self::encode::{Command, CommandEncoder};
pub use self::extract::{FrameExtractor, extract_frames};
pub use self::frame::Frame;
pub use self::option::TelnetOption;
pub use self::result::{CodecError, CodecResult};
