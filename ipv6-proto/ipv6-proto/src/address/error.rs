// Copyright 2025 Mysten Labs
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

//! Errors raised when parsing or decoding IPv6 addresses.

/// An error which can be returned when parsing an [`Ipv6Address`][super::Ipv6Address] from text.
///
/// Variants other than [`ParseError::Empty`] carry the rejected input, decoded lossily as UTF-8,
/// so that a diagnostic can be rendered without the caller keeping the input around.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum ParseError {
    /// The input was empty.
    #[error("cannot parse IPv6 address from empty input")]
    Empty,
    /// A byte that is neither a hex digit nor a colon was found.
    #[error("invalid character '{}' in IPv6 address \"{input}\"", .byte.escape_ascii())]
    InvalidCharacter {
        /// The full input.
        input: String,
        /// The offending byte.
        byte: u8,
    },
    /// A colon-delimited segment has more than four characters.
    #[error("segment \"{segment}\" of IPv6 address \"{input}\" is longer than 4 hex digits")]
    InvalidSegment {
        /// The full input.
        input: String,
        /// The offending segment.
        segment: String,
    },
    /// The input contains `::` more than once.
    #[error("IPv6 address \"{0}\" contains more than one '::'")]
    MultipleCompressions(String),
    /// The input names fewer than eight segments and has no `::` to fill the gap.
    #[error("IPv6 address \"{0}\" has fewer than 8 segments")]
    TooFewSegments(String),
    /// The input names more than eight segments, or eight segments and a `::`.
    #[error("IPv6 address \"{0}\" has more than 8 segments")]
    TooManySegments(String),
    /// The colons are misplaced in a way not covered by the other variants, such as a single
    /// leading or trailing colon or a run of three or more colons.
    #[error("malformed IPv6 address \"{0}\"")]
    InvalidFormat(String),
}

impl ParseError {
    /// Returns the rejected input, or `None` for [`ParseError::Empty`].
    pub fn input(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::InvalidCharacter { input, .. }
            | Self::InvalidSegment { input, .. }
            | Self::MultipleCompressions(input)
            | Self::TooFewSegments(input)
            | Self::TooManySegments(input)
            | Self::InvalidFormat(input) => Some(input),
        }
    }
}

/// Errors raised when failing to decode an [`Ipv6Address`][super::Ipv6Address] from its binary
/// form.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum DecodeError {
    /// The buffer does not hold the number of bytes the binary form requires.
    #[error("expected {expected} bytes for an IPv6 address but got {actual}")]
    LengthMismatch {
        /// The required number of bytes.
        expected: usize,
        /// The number of bytes provided.
        actual: usize,
    },
}
