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

use crate::{CodecError, Frame, consts};
use bytes::{BufMut, BytesMut};
use tokio_util::codec::Decoder;
use tracing::trace;

/// Splits a chunk of inbound bytes into discrete Telnet command frames.
///
/// If the chunk does not start with [`consts::IAC`] it is not a command stream and an empty
/// list is returned, leaving the bytes for other consumers. Otherwise the chunk is scanned
/// one byte at a time:
///
/// - `IAC` outside a subnegotiation closes the frame being accumulated (if any) and starts a
///   new one. Inside a subnegotiation it is simply appended.
/// - `SB` is appended and enters subnegotiation.
/// - `SE` is appended, closes the current frame and leaves subnegotiation.
/// - Any other byte is appended. If it is the final byte of the chunk the frame is closed.
///
/// A chunk that ends on `IAC` or `SB` leaves an unterminated frame behind, which is dropped.
/// Bytes that follow a closed frame without a new `IAC` (typed text after a subnegotiation,
/// say) belong to no command and are dropped as well, so every frame begins with `IAC`.
///
/// Doubled `IAC` bytes are not unescaped, so a literal `0xF0` inside a subnegotiation payload
/// terminates the frame early and a literal `0xFF` data byte is kept as-is.
///
/// # Example
/// ```
/// use telnego_codec::{consts, extract_frames};
///
/// let frames = extract_frames(&[consts::IAC, consts::DO, 24, consts::IAC, consts::WILL, 1]);
/// assert_eq!(frames.len(), 2);
/// ```
pub fn extract_frames(input: &[u8]) -> Vec<Frame> {
    if input.first() != Some(&consts::IAC) {
        return Vec::new();
    }

    let last = input.len() - 1;
    let mut frames = Vec::new();
    let mut current = BytesMut::with_capacity(input.len());
    let mut in_subnegotiation = false;
    let mut stray = 0usize;

    for (index, &byte) in input.iter().enumerate() {
        if current.is_empty() && byte != consts::IAC {
            stray += 1;
            continue;
        }
        match byte {
            consts::IAC => {
                if !in_subnegotiation && !current.is_empty() {
                    frames.push(Frame::new(current.split().freeze()));
                }
                current.put_u8(byte);
            }
            consts::SB => {
                current.put_u8(byte);
                in_subnegotiation = true;
            }
            consts::SE => {
                current.put_u8(byte);
                frames.push(Frame::new(current.split().freeze()));
                in_subnegotiation = false;
            }
            _ => {
                current.put_u8(byte);
                if index == last {
                    frames.push(Frame::new(current.split().freeze()));
                }
            }
        }
    }

    if stray > 0 {
        trace!(discarded = stray, "Dropping bytes outside any command");
    }
    if !current.is_empty() {
        trace!(
            discarded = current.len(),
            "Dropping unterminated command at end of chunk"
        );
    }

    frames
}

/// Stateless frame extractor usable as a [`Decoder`].
///
/// Every call to [`Decoder::decode`] consumes the whole buffered chunk and yields the frames
/// found in it, mirroring how inbound data is delivered as discrete ingestion events.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameExtractor;

impl FrameExtractor {
    /// Creates a new `FrameExtractor`
    pub fn new() -> FrameExtractor {
        FrameExtractor
    }

    /// Extract the frames contained in `input`. See [`extract_frames`].
    pub fn extract(&self, input: &[u8]) -> Vec<Frame> {
        extract_frames(input)
    }
}

impl Decoder for FrameExtractor {
    type Item = Vec<Frame>;
    type Error = CodecError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Vec<Frame>>, Self::Error> {
        if src.is_empty() {
            return Ok(None);
        }
        let chunk = src.split();
        Ok(Some(extract_frames(&chunk)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{DO, IAC, IS, NOP, SB, SE, WILL, WONT, option::TTYPE};

    #[test]
    fn literal_three_frames() {
        let input = [
            IAC, DO, TTYPE, IAC, SB, TTYPE, IS, b'T', b'E', b'S', b'T', IAC, SE, IAC, WILL, TTYPE,
        ];
        let frames = extract_frames(&input);
        assert_eq!(
            frames,
            vec![
                Frame::from(vec![IAC, DO, TTYPE]),
                Frame::from(vec![IAC, SB, TTYPE, IS, b'T', b'E', b'S', b'T', IAC, SE]),
                Frame::from(vec![IAC, WILL, TTYPE]),
            ]
        );
    }

    #[test]
    fn non_command_input_is_ignored() {
        assert!(extract_frames(b"hello").is_empty());
        assert!(extract_frames(&[]).is_empty());
        assert!(extract_frames(&[b'x', IAC, WILL, TTYPE]).is_empty());
    }

    #[test]
    fn single_simple_command() {
        let frames = extract_frames(&[IAC, WONT, 1]);
        assert_eq!(frames, vec![Frame::from(vec![IAC, WONT, 1])]);
    }

    #[test]
    fn two_byte_command_is_split_on_next_iac() {
        let frames = extract_frames(&[IAC, NOP, IAC, WILL, TTYPE]);
        assert_eq!(
            frames,
            vec![
                Frame::from(vec![IAC, NOP]),
                Frame::from(vec![IAC, WILL, TTYPE]),
            ]
        );
    }

    #[test]
    fn unterminated_tail_is_dropped() {
        let frames = extract_frames(&[IAC, DO, TTYPE, IAC]);
        assert_eq!(frames, vec![Frame::from(vec![IAC, DO, TTYPE])]);

        let frames = extract_frames(&[IAC, SB]);
        assert!(frames.is_empty());
    }

    #[test]
    fn iac_inside_subnegotiation_does_not_split() {
        let frames = extract_frames(&[IAC, SB, TTYPE, IS, IAC, IAC, b'x', IAC, SE]);
        assert_eq!(
            frames,
            vec![Frame::from(vec![IAC, SB, TTYPE, IS, IAC, IAC, b'x', IAC, SE])]
        );
    }

    #[test]
    fn literal_se_in_payload_ends_frame_early() {
        let frames = extract_frames(&[IAC, SB, TTYPE, IS, SE, b'x', IAC, SE]);
        assert_eq!(frames[0], Frame::from(vec![IAC, SB, TTYPE, IS, SE]));
    }

    #[test]
    fn text_after_subnegotiation_is_dropped() {
        let frames = extract_frames(&[IAC, SB, TTYPE, IS, b'x', IAC, SE, b'h', b'i']);
        assert_eq!(
            frames,
            vec![Frame::from(vec![IAC, SB, TTYPE, IS, b'x', IAC, SE])]
        );
        assert!(frames.iter().all(|f| f.as_bytes()[0] == IAC));
    }

    #[test]
    fn text_between_frames_is_skipped() {
        let input = [IAC, SB, TTYPE, IS, IAC, SE, b'o', b'k', IAC, WILL, TTYPE];
        let frames = extract_frames(&input);
        assert_eq!(
            frames,
            vec![
                Frame::from(vec![IAC, SB, TTYPE, IS, IAC, SE]),
                Frame::from(vec![IAC, WILL, TTYPE]),
            ]
        );
    }

    #[test]
    fn decoder_consumes_whole_chunk() {
        let mut extractor = FrameExtractor::new();
        let mut buffer = BytesMut::from(&[IAC, WILL, TTYPE, IAC, DO, 1][..]);
        let frames = extractor.decode(&mut buffer).unwrap().unwrap();
        assert_eq!(frames.len(), 2);
        assert!(buffer.is_empty());
        assert!(extractor.decode(&mut buffer).unwrap().is_none());
    }
}
