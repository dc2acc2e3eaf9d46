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

//! RFC 4291 text parsing.
//!
//! Parsing runs in two passes. The first locates the `::` marker, if any, and rejects misplaced
//! colons. The second parses the explicit segments on either side of the marker. Only after both
//! sides are known can the number of zero segments hidden by `::` be computed.

use std::{cmp::Ordering, ops::Range, str::FromStr};

use super::{Ipv6Address, ParseError};
use crate::ascii::{self, COLON};

const MAX_SEGMENT_DIGITS: usize = 4;

/// Explicit segments parsed from one side of the `::` marker.
///
/// `count` keeps growing past the capacity of `values` so that every part is validated before
/// the segment count is checked.
struct Segments {
    values: [u16; Ipv6Address::SEGMENTS],
    count: usize,
}

/// Parser state for a single input.
struct Parser<'a> {
    input: &'a [u8],
}

impl<'a> Parser<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self { input }
    }

    fn input_string(&self) -> String {
        String::from_utf8_lossy(self.input).into_owned()
    }

    fn parse(&self) -> Result<Ipv6Address, ParseError> {
        if self.input.is_empty() {
            return Err(ParseError::Empty);
        }

        match self.find_compression()? {
            Some(marker) => {
                let head = self.parse_segments(&self.input[..marker.start])?;
                let tail = self.parse_segments(&self.input[marker.end..])?;
                // `::` stands for at least one zero segment.
                if head.count + tail.count >= Ipv6Address::SEGMENTS {
                    return Err(ParseError::TooManySegments(self.input_string()));
                }

                let mut segments = [0u16; Ipv6Address::SEGMENTS];
                segments[..head.count].copy_from_slice(&head.values[..head.count]);
                segments[Ipv6Address::SEGMENTS - tail.count..]
                    .copy_from_slice(&tail.values[..tail.count]);
                Ok(Ipv6Address::from_segments(segments))
            }
            None => {
                let all = self.parse_segments(self.input)?;
                match all.count.cmp(&Ipv6Address::SEGMENTS) {
                    Ordering::Less => Err(ParseError::TooFewSegments(self.input_string())),
                    Ordering::Greater => Err(ParseError::TooManySegments(self.input_string())),
                    Ordering::Equal => Ok(Ipv6Address::from_segments(all.values)),
                }
            }
        }
    }

    /// First pass: returns the byte range of the `::` marker.
    ///
    /// Afterwards, every colon outside the marker is known to sit between two non-empty parts.
    fn find_compression(&self) -> Result<Option<Range<usize>>, ParseError> {
        let mut marker: Option<Range<usize>> = None;
        let mut malformed = false;

        let mut index = 0;
        while index < self.input.len() {
            if self.input[index] != COLON {
                index += 1;
                continue;
            }

            let start = index;
            while index < self.input.len() && self.input[index] == COLON {
                index += 1;
            }

            match index - start {
                1 => {
                    if start == 0 || index == self.input.len() {
                        malformed = true;
                    }
                }
                2 => {
                    if marker.is_some() {
                        return Err(ParseError::MultipleCompressions(self.input_string()));
                    }
                    marker = Some(start..index);
                }
                _ => malformed = true,
            }
        }

        if malformed {
            return Err(ParseError::InvalidFormat(self.input_string()));
        }
        Ok(marker)
    }

    /// Second pass: parses the colon-separated segments of `part`.
    ///
    /// `part` contains no empty segments, which the first pass guarantees.
    fn parse_segments(&self, part: &[u8]) -> Result<Segments, ParseError> {
        let mut segments = Segments {
            values: [0; Ipv6Address::SEGMENTS],
            count: 0,
        };
        if part.is_empty() {
            return Ok(segments);
        }

        for text in part.split(|byte| *byte == COLON) {
            let value = self.parse_segment(text)?;
            if let Some(slot) = segments.values.get_mut(segments.count) {
                *slot = value;
            }
            segments.count += 1;
        }
        Ok(segments)
    }

    fn parse_segment(&self, text: &[u8]) -> Result<u16, ParseError> {
        if text.len() > MAX_SEGMENT_DIGITS {
            return Err(ParseError::InvalidSegment {
                input: self.input_string(),
                segment: String::from_utf8_lossy(text).into_owned(),
            });
        }

        text.iter().try_fold(0u16, |value, &byte| {
            let digit = ascii::hex_digit_value(byte).ok_or_else(|| ParseError::InvalidCharacter {
                input: self.input_string(),
                byte,
            })?;
            Ok(value * 16 + u16::from(digit))
        })
    }
}

impl Ipv6Address {
    /// Parses an address from ASCII text.
    ///
    /// Accepts every RFC 4291 text form: eight segments, or fewer with a single `::` standing in
    /// for one or more zero segments. Each segment has one to four hex digits in either case.
    /// IPv4 suffixes, zone identifiers and prefix lengths are not accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ipv6_proto::address::{Ipv6Address, ParseError};
    /// assert_eq!(
    ///     Ipv6Address::parse_ascii(b"2001:db8::1"),
    ///     Ok(Ipv6Address::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 1))
    /// );
    /// assert_eq!(
    ///     Ipv6Address::parse_ascii(b"1::2::3"),
    ///     Err(ParseError::MultipleCompressions("1::2::3".into()))
    /// );
    /// ```
    pub fn parse_ascii(input: &[u8]) -> Result<Self, ParseError> {
        Parser::new(input).parse().inspect_err(|error| {
            tracing::trace!(%error, "rejected IPv6 address text");
        })
    }
}

impl FromStr for Ipv6Address {
    type Err = ParseError;

    /// Parses an address from text, see [`Ipv6Address::parse_ascii`].
    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Self::parse_ascii(string.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::param_test;

    param_test! {
        parses_valid_text: [
            compressed_documentation: ("2001:db8::1", [0x2001, 0xdb8, 0, 0, 0, 0, 0, 1]),
            full_form: ("2001:0db8:0000:0000:0000:0000:0000:0001", [0x2001, 0xdb8, 0, 0, 0, 0, 0, 1]),
            upper_case: ("2001:DB8::ABCD", [0x2001, 0xdb8, 0, 0, 0, 0, 0, 0xabcd]),
            mixed_case: ("aBcD::eF01", [0xabcd, 0, 0, 0, 0, 0, 0, 0xef01]),
            unspecified: ("::", [0; 8]),
            loopback: ("::1", [0, 0, 0, 0, 0, 0, 0, 1]),
            trailing_compression: ("fe80::", [0xfe80, 0, 0, 0, 0, 0, 0, 0]),
            compression_of_one_segment: ("1:2:3:4:5:6::8", [1, 2, 3, 4, 5, 6, 0, 8]),
            leading_compression_of_one_segment: ("::2:3:4:5:6:7:8", [0, 2, 3, 4, 5, 6, 7, 8]),
            trailing_compression_of_one_segment: ("1:2:3:4:5:6:7::", [1, 2, 3, 4, 5, 6, 7, 0]),
            non_canonical_compression: ("2001:0:0:1::1", [0x2001, 0, 0, 1, 0, 0, 0, 1]),
            explicit_zeros: ("0:0:0:0:0:0:0:0", [0; 8]),
            max_value: ("ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff", [0xffff; 8]),
            leading_zeros: ("0001:002:03:4::", [1, 2, 3, 4, 0, 0, 0, 0]),
        ]
    }
    fn parses_valid_text(text: &str, segments: [u16; 8]) {
        assert_eq!(
            text.parse::<Ipv6Address>(),
            Ok(Ipv6Address::from_segments(segments))
        );
    }

    fn invalid_character(input: &str, byte: u8) -> ParseError {
        ParseError::InvalidCharacter {
            input: input.into(),
            byte,
        }
    }

    fn invalid_segment(input: &str, segment: &str) -> ParseError {
        ParseError::InvalidSegment {
            input: input.into(),
            segment: segment.into(),
        }
    }

    param_test! {
        rejects_invalid_text: [
            empty: ("", ParseError::Empty),
            non_hex_letters: ("gggg::1", invalid_character("gggg::1", b'g')),
            ipv4_suffix_dot: ("::ffff:1.2", invalid_character("::ffff:1.2", b'.')),
            zone_identifier: ("fe80::1%1", invalid_character("fe80::1%1", b'%')),
            prefix_length: ("2001:db8::/3", invalid_character("2001:db8::/3", b'/')),
            whitespace: (" ::1", invalid_character(" ::1", b' ')),
            non_ascii: ("::\u{e9}", invalid_character("::\u{e9}", 0xc3)),
            five_digits: ("12345::", invalid_segment("12345::", "12345")),
            five_digit_leading_zero: ("00001::", invalid_segment("00001::", "00001")),
            long_ipv4_suffix: ("::ffff:1.2.3.4", invalid_segment("::ffff:1.2.3.4", "1.2.3.4")),
            two_compressions: ("1::2::3", ParseError::MultipleCompressions("1::2::3".into())),
            compression_at_both_ends: ("::1::", ParseError::MultipleCompressions("::1::".into())),
            seven_segments: ("1:2:3:4:5:6:7", ParseError::TooFewSegments("1:2:3:4:5:6:7".into())),
            single_segment: ("1", ParseError::TooFewSegments("1".into())),
            nine_segments: ("1:2:3:4:5:6:7:8:9", ParseError::TooManySegments("1:2:3:4:5:6:7:8:9".into())),
            compression_with_eight_segments: ("1:2:3:4::5:6:7:8", ParseError::TooManySegments("1:2:3:4::5:6:7:8".into())),
            bad_character_after_eight_segments: ("1:2:3:4:5:6:7:8:g", invalid_character("1:2:3:4:5:6:7:8:g", b'g')),
            long_segment_after_eight_segments: ("1:2:3:4:5:6:7:8:zzzzz", invalid_segment("1:2:3:4:5:6:7:8:zzzzz", "zzzzz")),
            bad_character_before_compression: ("1:2:3:4:5:6:7:8:g::", invalid_character("1:2:3:4:5:6:7:8:g::", b'g')),
            ten_segments: ("1:2:3:4:5:6:7:8:9:a", ParseError::TooManySegments("1:2:3:4:5:6:7:8:9:a".into())),
            trailing_compression_with_eight_segments: ("1:2:3:4:5:6:7:8::", ParseError::TooManySegments("1:2:3:4:5:6:7:8::".into())),
            lone_leading_colon: (":1:2:3:4:5:6:7", ParseError::InvalidFormat(":1:2:3:4:5:6:7".into())),
            lone_trailing_colon: ("1:2:3:4:5:6:7:", ParseError::InvalidFormat("1:2:3:4:5:6:7:".into())),
            single_colon: (":", ParseError::InvalidFormat(":".into())),
            triple_colon: ("1:::2", ParseError::InvalidFormat("1:::2".into())),
            only_colons: (":::", ParseError::InvalidFormat(":::".into())),
        ]
    }
    fn rejects_invalid_text(text: &str, expected: ParseError) {
        assert_eq!(Ipv6Address::parse_ascii(text.as_bytes()), Err(expected));
    }

    #[test]
    fn first_invalid_byte_is_reported() {
        assert_eq!(
            "12xz::".parse::<Ipv6Address>(),
            Err(invalid_character("12xz::", b'x'))
        );
    }

    #[test]
    fn overlong_segment_takes_precedence_over_bad_characters() {
        assert_eq!(
            "zzzzz::".parse::<Ipv6Address>(),
            Err(invalid_segment("zzzzz::", "zzzzz"))
        );
    }

    #[test]
    fn invalid_bytes_are_reported_lossily() {
        let input = b"1::\xff";
        assert_eq!(
            Ipv6Address::parse_ascii(input),
            Err(invalid_character("1::\u{fffd}", 0xff))
        );
    }

    #[test_log::test]
    fn parse_failure_keeps_input_for_diagnostics() {
        let error = "2001:db8::g".parse::<Ipv6Address>().unwrap_err();
        assert_eq!(error.input(), Some("2001:db8::g"));
        assert_eq!(
            error.to_string(),
            "invalid character 'g' in IPv6 address \"2001:db8::g\""
        );
    }
}
