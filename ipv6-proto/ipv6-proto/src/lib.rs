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

//! Protocol-level representation of IPv6 addresses
//!
//! An IPv6 address is a 128-bit value, written as eight 16-bit segments. Many textual spellings
//! denote the same address (`2001:0DB8:0:0:0:0:0:1`, `2001:db8::1`, ...). [RFC 4291][rfc4291]
//! defines which spellings are legal, and [RFC 5952][rfc5952] picks a single canonical one.
//!
//! This crate provides:
//!
//! - the [address value type][address::Ipv6Address] with classification predicates and the
//!   well-known constants;
//! - a [parser][address::Ipv6Address::parse_ascii] accepting every RFC 4291 text form and
//!   reporting a precise [`ParseError`][address::ParseError] otherwise;
//! - the [canonical serializer][address::Ipv6Address::to_canonical] producing RFC 5952 text; and
//! - the 16-byte network-order [wire encoding][wire_encoding].
//!
//! The structured form (via `serde`) is the canonical text string.
//!
//! This crate does not perform any I/O.
//!
//! [rfc4291]: https://www.rfc-editor.org/rfc/rfc4291#section-2.2
//! [rfc5952]: https://www.rfc-editor.org/rfc/rfc5952#section-4

pub mod address;
pub mod wire_encoding;

pub(crate) mod ascii;

#[cfg(test)]
pub(crate) mod test_utils;
