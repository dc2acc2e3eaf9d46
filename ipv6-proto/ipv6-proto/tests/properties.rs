// Copyright 2025 Anapaya Systems
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Properties that hold for every address
//!
//! 1. Text and binary forms round-trip without loss.
//! 2. Canonical text is a fixed point of parse-then-format.
//! 3. Canonical text agrees with an independent reference and compresses only the first longest
//!    zero run of length two or more.
//! 4. Ordering is unsigned 128-bit integer ordering.
//! 5. Arbitrary input never panics the parser.

use std::net;

use ipv6_proto::{
    address::{Ipv6Address, ParseError},
    wire_encoding::{WireDecode, WireEncode},
};
use proptest::{
    collection::vec,
    prelude::{ProptestConfig, Strategy, any, prop},
    prop_assert, prop_assert_eq, prop_oneof, proptest,
};

/// Addresses biased towards zero segments so that compression cases are common.
fn address() -> impl Strategy<Value = Ipv6Address> {
    prop::array::uniform8(prop_oneof![
        3 => proptest::strategy::Just(0u16),
        1 => proptest::strategy::Just(1u16),
        2 => any::<u16>(),
    ])
    .prop_map(Ipv6Address::from_segments)
}

/// Returns the (start, length) of every maximal zero run.
fn zero_runs(segments: &[u16; 8]) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut index = 0;
    while index < segments.len() {
        if segments[index] == 0 {
            let start = index;
            while index < segments.len() && segments[index] == 0 {
                index += 1;
            }
            runs.push((start, index - start));
        } else {
            index += 1;
        }
    }
    runs
}

/// `std` writes IPv4-mapped addresses in dotted form, otherwise it follows RFC 5952 as well.
fn is_ipv4_mapped(segments: &[u16; 8]) -> bool {
    segments[..5] == [0; 5] && segments[5] == 0xffff
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2_000))]

    #[test]
    fn text_round_trips(address in address()) {
        let text = address.to_string();
        prop_assert_eq!(text.parse::<Ipv6Address>(), Ok(address));
    }

    #[test]
    fn canonical_text_is_idempotent(address in address()) {
        let text = address.to_canonical();
        let reparsed = Ipv6Address::parse_ascii(text.as_bytes()).unwrap();
        prop_assert_eq!(reparsed.to_canonical(), text);
    }

    #[test]
    fn canonical_text_is_lowercase_without_leading_zeros(address in address()) {
        let text = address.to_string();
        prop_assert!(text.len() <= 39);
        prop_assert!(!text.bytes().any(|byte| byte.is_ascii_uppercase()));
        for segment in text.split(':').filter(|segment| !segment.is_empty()) {
            prop_assert!(segment.len() <= 4);
            prop_assert!(segment == "0" || !segment.starts_with('0'), "{}", text);
        }
    }

    #[test]
    fn compresses_only_first_longest_run(address in address()) {
        let segments = address.segments();
        let text = address.to_string();
        let runs = zero_runs(&segments);
        let longest = runs.iter().map(|(_, length)| *length).max().unwrap_or(0);

        prop_assert!(text.matches("::").count() <= 1);
        if longest < 2 {
            prop_assert!(!text.contains("::"), "{}", text);
        } else {
            let (start, length) = runs.iter().copied().find(|(_, length)| *length == longest).unwrap();
            let head = segments[..start].iter().map(|s| format!("{s:x}")).collect::<Vec<_>>().join(":");
            let tail = segments[start + length..].iter().map(|s| format!("{s:x}")).collect::<Vec<_>>().join(":");
            prop_assert_eq!(text, format!("{head}::{tail}"));
        }
    }

    #[test]
    fn canonical_text_matches_std(address in address()) {
        let segments = address.segments();
        if !is_ipv4_mapped(&segments) {
            prop_assert_eq!(address.to_string(), net::Ipv6Addr::from(segments).to_string());
        }
    }

    #[test]
    fn parses_what_std_parses(segments in prop::array::uniform8(any::<u16>())) {
        let full = segments.iter().map(|s| format!("{s:04X}")).collect::<Vec<_>>().join(":");
        prop_assert_eq!(full.parse::<Ipv6Address>(), Ok(Ipv6Address::from_segments(segments)));
        prop_assert_eq!(
            net::Ipv6Addr::from(full.parse::<Ipv6Address>().unwrap()),
            full.parse::<net::Ipv6Addr>().unwrap()
        );
    }

    #[test]
    fn binary_round_trips(address in address()) {
        let octets = address.octets();
        prop_assert_eq!(octets.len(), 16);
        prop_assert_eq!(Ipv6Address::decode_binary(&octets), Ok(address));

        let mut encoded = address.encode_to_bytes();
        prop_assert_eq!(encoded.as_ref(), &octets[..]);
        prop_assert_eq!(Ipv6Address::decode(&mut encoded), Ok(address));
    }

    #[test]
    fn any_sixteen_bytes_decode(octets in prop::array::uniform16(any::<u8>())) {
        prop_assert_eq!(Ipv6Address::decode_binary(&octets).map(|a| a.octets()), Ok(octets));
    }

    #[test]
    fn ordering_matches_integer_ordering(a in address(), b in address()) {
        prop_assert_eq!(a.cmp(&b), a.to_bits().cmp(&b.to_bits()));
    }

    #[test]
    fn parser_never_panics(input in vec(prop_oneof![
        any::<u8>(),
        proptest::strategy::Just(b':'),
        proptest::strategy::Just(b'0'),
        proptest::strategy::Just(b'f'),
    ], 0..48)) {
        match Ipv6Address::parse_ascii(&input) {
            Ok(address) => {
                prop_assert_eq!(Ipv6Address::parse_ascii(address.to_string().as_bytes()), Ok(address));
            }
            Err(ParseError::Empty) => prop_assert!(input.is_empty()),
            Err(error) => prop_assert!(error.input().is_some()),
        }
    }

    #[test]
    fn agrees_with_std_on_acceptance(input in "[0-9a-fA-F:]{0,41}") {
        prop_assert_eq!(
            input.parse::<Ipv6Address>().ok().map(net::Ipv6Addr::from),
            input.parse::<net::Ipv6Addr>().ok()
        );
    }
}
