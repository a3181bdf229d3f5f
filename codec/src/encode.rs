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

//! Builders for outbound negotiation byte sequences.

use crate::{CodecError, CodecResult, TelnetOption, consts};
use bytes::{BufMut, Bytes, BytesMut};
use tokio_util::codec::Encoder;

/// `IAC DO <option>`
pub fn do_sequence(option: impl Into<u8>) -> Bytes {
    negotiation(consts::DO, option.into())
}

/// `IAC DONT <option>`
pub fn dont_sequence(option: impl Into<u8>) -> Bytes {
    negotiation(consts::DONT, option.into())
}

/// `IAC WILL <option>`
pub fn will_sequence(option: impl Into<u8>) -> Bytes {
    negotiation(consts::WILL, option.into())
}

/// `IAC WONT <option>`
pub fn wont_sequence(option: impl Into<u8>) -> Bytes {
    negotiation(consts::WONT, option.into())
}

/// `IAC SB <option> <payload...> IAC SE`
///
/// The payload is written verbatim, so it may not contain `IAC` or `SE`.
pub fn subnegotiation(option: impl Into<u8>, payload: &[u8]) -> CodecResult<Bytes> {
    let option = option.into();
    let mut buffer = BytesMut::with_capacity(payload.len() + 5);
    put_subnegotiation(&mut buffer, option, payload)?;
    Ok(buffer.freeze())
}

/// `IAC SB TTYPE SEND IAC SE`
pub fn ttype_send() -> Bytes {
    Bytes::from_static(&[
        consts::IAC,
        consts::SB,
        consts::option::TTYPE,
        consts::SEND,
        consts::IAC,
        consts::SE,
    ])
}

/// `IAC SB CHARSET REQUEST SPACE <charset> IAC SE`
pub fn charset_request(charset: &str) -> CodecResult<Bytes> {
    let mut payload = Vec::with_capacity(charset.len() + 2);
    payload.push(consts::REQUEST);
    payload.push(consts::SPACE);
    payload.extend_from_slice(charset.as_bytes());
    subnegotiation(consts::option::CHARSET, &payload)
}

fn negotiation(command: u8, option: u8) -> Bytes {
    Bytes::copy_from_slice(&[consts::IAC, command, option])
}

fn put_subnegotiation(dst: &mut BytesMut, option: u8, payload: &[u8]) -> CodecResult<()> {
    if let Some(byte) = payload
        .iter()
        .find(|&&b| b == consts::IAC || b == consts::SE)
    {
        return Err(CodecError::InvalidPayload {
            option,
            reason: format!("payload contains reserved byte 0x{:02X}", byte),
        });
    }
    dst.reserve(payload.len() + 5);
    dst.put_u8(consts::IAC);
    dst.put_u8(consts::SB);
    dst.put_u8(option);
    dst.put_slice(payload);
    dst.put_u8(consts::IAC);
    dst.put_u8(consts::SE);
    Ok(())
}

/// An outbound negotiation command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Ask the peer to enable an option
    Do(TelnetOption),
    /// Ask the peer not to enable an option
    Dont(TelnetOption),
    /// Offer to enable an option locally
    Will(TelnetOption),
    /// Refuse to enable an option locally
    Wont(TelnetOption),
    /// Subnegotiation block for an option
    Subnegotiate(TelnetOption, Bytes),
    /// Pre-built bytes
    Raw(Bytes),
}

/// Encodes [`Command`]s into their wire representation.
#[derive(Clone, Copy, Debug, Default)]
pub struct CommandEncoder;

impl CommandEncoder {
    /// Creates a new `CommandEncoder`
    pub fn new() -> CommandEncoder {
        CommandEncoder
    }
}

impl Encoder<Command> for CommandEncoder {
    type Error = CodecError;

    fn encode(&mut self, item: Command, dst: &mut BytesMut) -> Result<(), Self::Error> {
        match item {
            Command::Do(option) => dst.put_slice(&do_sequence(option)),
            Command::Dont(option) => dst.put_slice(&dont_sequence(option)),
            Command::Will(option) => dst.put_slice(&will_sequence(option)),
            Command::Wont(option) => dst.put_slice(&wont_sequence(option)),
            Command::Subnegotiate(option, payload) => {
                put_subnegotiation(dst, option.to_u8(), &payload)?
            }
            Command::Raw(bytes) => dst.put_slice(&bytes),
        }
        Ok(())
    }
}
