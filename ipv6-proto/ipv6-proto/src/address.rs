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

//! IPv6 addresses and their text and binary representations.
//!
//! # Organisation
//!
//! - [`Ipv6Address`] is the 128-bit address value, stored as eight big-endian 16-bit segments.
//!   It is created from segments, from text ([`Ipv6Address::parse_ascii`] or [`str::parse`]), or
//!   from its 16-byte binary form ([`Ipv6Address::decode_binary`]).
//! - [`Ipv6Kind`] names the address classes that [`Ipv6Address::kind`] distinguishes.
//! - [`CanonicalText`] holds the RFC 5952 canonical text of an address without allocating.
//! - [`ParseError`] and [`DecodeError`] report why text or binary input was rejected.

mod ipv6;
pub use ipv6::Ipv6Address;

mod kind;
pub use kind::Ipv6Kind;

mod format;
pub use format::CanonicalText;

mod parse;

mod structured;

mod error;
pub use error::{DecodeError, ParseError};
