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

//! Structured encoding of addresses as their canonical text.

use std::fmt::Formatter;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, Visitor},
};

use super::{Ipv6Address, ParseError};

impl Serialize for Ipv6Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_canonical().as_str())
    }
}

impl<'de> Deserialize<'de> for Ipv6Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(Ipv6AddressVisitor)
    }
}

struct Ipv6AddressVisitor;

fn invalid_address<E: de::Error>(error: ParseError) -> E {
    E::custom(format_args!("invalid IPv6 address: {error}"))
}

impl Visitor<'_> for Ipv6AddressVisitor {
    type Value = Ipv6Address;

    fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
        formatter.write_str("an IPv6 address in text form")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        value.parse().map_err(invalid_address)
    }

    fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
        Ipv6Address::parse_ascii(value).map_err(invalid_address)
    }
}
