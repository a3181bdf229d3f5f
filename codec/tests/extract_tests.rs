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

//! Extraction tests for the command codec

use proptest::prelude::*;
use telnego_codec::consts::{self, DO, DONT, IAC, SB, SE, WILL, WONT, option};
use telnego_codec::{Frame, encode, extract_frames};

// ============================================================================
// Helper Functions
// ============================================================================

fn concat(frames: &[Frame]) -> Vec<u8> {
    frames
        .iter()
        .flat_map(|frame| frame.as_bytes().iter().copied())
        .collect()
}

fn is_reserved(byte: u8) -> bool {
    byte == IAC || byte == SB || byte == SE
}

fn simple_frame() -> impl Strategy<Value = Frame> {
    (
        prop::sample::select(vec![DO, DONT, WILL, WONT]),
        any::<u8>().prop_filter("option must not be a framing byte", |b| !is_reserved(*b)),
    )
        .prop_map(|(command, option)| Frame::from(vec![IAC, command, option]))
}

fn subnegotiation_frame() -> impl Strategy<Value = Frame> {
    (
        any::<u8>().prop_filter("option must not be a framing byte", |b| !is_reserved(*b)),
        prop::collection::vec(
            any::<u8>().prop_filter("payload must not hold IAC or SE", |b| {
                *b != IAC && *b != SE
            }),
            0..32,
        ),
    )
        .prop_map(|(option, payload)| {
            let mut bytes = vec![IAC, SB, option];
            bytes.extend(payload);
            bytes.extend([IAC, SE]);
            Frame::from(bytes)
        })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn well_formed_frames_round_trip(
        frames in prop::collection::vec(prop_oneof![simple_frame(), subnegotiation_frame()], 1..16)
    ) {
        let bytes = concat(&frames);
        prop_assert_eq!(extract_frames(&bytes), frames);
    }

    #[test]
    fn non_command_chunks_yield_nothing(
        first in any::<u8>().prop_filter("first byte must not be IAC", |b| *b != IAC),
        rest in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let mut bytes = vec![first];
        bytes.extend(rest);
        prop_assert!(extract_frames(&bytes).is_empty());
    }

    #[test]
    fn frames_always_begin_with_iac(rest in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut bytes = vec![IAC];
        bytes.extend(rest);
        for frame in extract_frames(&bytes) {
            prop_assert_eq!(frame.as_bytes()[0], IAC);
        }
    }
}

// ============================================================================
// Scenario Tests
// ============================================================================

#[test]
fn negotiation_burst_from_client() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&encode::will_sequence(option::TTYPE));
    bytes.extend_from_slice(&encode::do_sequence(option::CHARSET));
    bytes.extend_from_slice(&[IAC, SB, option::TTYPE, consts::IS]);
    bytes.extend_from_slice(b"xterm-256color");
    bytes.extend_from_slice(&[IAC, SE]);
    bytes.extend_from_slice(&encode::wont_sequence(option::ECHO));

    let frames = extract_frames(&bytes);
    assert_eq!(frames.len(), 4);
    assert!(frames[0].is_negotiation(WILL, option::TTYPE));
    assert!(frames[1].is_negotiation(DO, option::CHARSET));
    assert!(frames[2].is_subnegotiation());
    assert_eq!(&frames[2].payload()[1..], b"xterm-256color");
    assert!(frames[3].is_negotiation(WONT, option::ECHO));
}

#[test]
fn every_frame_starts_with_iac() {
    let bytes = [
        IAC, WILL, option::ECHO, IAC, SB, option::CHARSET, consts::ACCEPTED, b'U', IAC, SE, IAC,
        DONT, option::CHARSET,
    ];
    let frames = extract_frames(&bytes);
    assert_eq!(frames.len(), 3);
    assert!(frames.iter().all(|frame| frame.as_bytes()[0] == IAC));
    assert_eq!(concat(&frames), bytes.to_vec());
}

#[test]
fn typed_text_after_terminal_type_is_not_a_frame() {
    let mut bytes = vec![IAC, SB, option::TTYPE, consts::IS];
    bytes.extend_from_slice(b"vt100");
    bytes.extend_from_slice(&[IAC, SE]);
    bytes.extend_from_slice(b"look\r\n");

    let frames = extract_frames(&bytes);
    assert_eq!(frames.len(), 1);
    assert_eq!(&frames[0].payload()[1..], b"vt100");
}

#[test]
fn encoded_charset_request_extracts_as_one_frame() {
    let request = encode::charset_request("UTF-8").unwrap();
    let frames = extract_frames(&request);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].as_bytes(), &request[..]);
    assert_eq!(frames[0].payload(), b"\x01 UTF-8");
}
