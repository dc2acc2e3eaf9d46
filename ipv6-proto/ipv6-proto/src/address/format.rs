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

//! RFC 5952 canonical text form.

use std::{
    fmt::{Debug, Display, Formatter},
    ops::{Deref, Range},
};

use super::Ipv6Address;
use crate::ascii::{COLON, LOWER_HEX_DIGITS};

/// The canonical text of an [`Ipv6Address`], held in a fixed-size buffer.
///
/// Dereferences to [`str`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanonicalText {
    buffer: [u8; Self::MAX_LENGTH],
    length: usize,
}

impl CanonicalText {
    /// The longest canonical text, eight four-digit segments and seven colons.
    pub const MAX_LENGTH: usize = 39;

    const fn empty() -> Self {
        Self {
            buffer: [0; Self::MAX_LENGTH],
            length: 0,
        }
    }

    fn push(&mut self, byte: u8) {
        self.buffer[self.length] = byte;
        self.length += 1;
    }

    /// Appends `value` as lowercase hex without leading zeros.
    fn push_hex(&mut self, value: u16) {
        let digits = (u16::BITS - value.leading_zeros()).div_ceil(4).max(1);
        for nibble in (0..digits).rev() {
            let digit = (value >> (nibble * 4)) & 0xf;
            self.push(LOWER_HEX_DIGITS[usize::from(digit)]);
        }
    }

    /// Returns the text as ASCII bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.length]
    }

    /// Returns the text.
    pub fn as_str(&self) -> &str {
        // Only `COLON` and `LOWER_HEX_DIGITS` are ever pushed.
        debug_assert!(self.as_bytes().is_ascii());
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }
}

impl Deref for CanonicalText {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for CanonicalText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<[u8]> for CanonicalText {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq<str> for CanonicalText {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for CanonicalText {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Display for CanonicalText {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl Debug for CanonicalText {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self.as_str(), f)
    }
}

/// Returns the segment range that `::` replaces, if any.
///
/// This is the longest run of zero segments, the first one if several are equally long. Runs of a
/// single segment are never compressed.
fn compressed_run(segments: &[u16; Ipv6Address::SEGMENTS]) -> Option<Range<usize>> {
    let mut longest = 0..0;
    let mut run_start = None;

    for index in 0..=segments.len() {
        let is_zero = segments.get(index) == Some(&0);
        match (is_zero, run_start) {
            (true, None) => run_start = Some(index),
            (false, Some(start)) => {
                if index - start > longest.len() {
                    longest = start..index;
                }
                run_start = None;
            }
            _ => {}
        }
    }

    (longest.len() >= 2).then_some(longest)
}

impl Ipv6Address {
    /// Returns the RFC 5952 canonical text of the address.
    ///
    /// The text depends only on the address value: hex digits are lowercase without leading
    /// zeros, and the longest run of two or more zero segments (the first, on ties) is replaced
    /// by `::`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ipv6_proto::address::Ipv6Address;
    /// let address = Ipv6Address::new(0x2001, 0, 0, 0x5678, 0x9abc, 0, 0, 0x2222);
    /// assert_eq!(address.to_canonical(), "2001::5678:9abc:0:0:2222");
    /// ```
    pub fn to_canonical(&self) -> CanonicalText {
        let segments = self.segments();
        let compressed = compressed_run(&segments);
        let mut text = CanonicalText::empty();

        let mut index = 0;
        while index < segments.len() {
            match &compressed {
                Some(run) if run.start == index => {
                    text.push(COLON);
                    text.push(COLON);
                    index = run.end;
                    continue;
                }
                Some(run) if run.end == index => {}
                _ if index > 0 => text.push(COLON),
                _ => {}
            }
            text.push_hex(segments[index]);
            index += 1;
        }

        text
    }
}

impl Display for Ipv6Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.to_canonical().as_str())
    }
}
