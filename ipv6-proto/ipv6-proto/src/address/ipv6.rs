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

use std::{
    fmt::{Debug, Formatter},
    net,
};

use bytes::{Buf, BufMut};

use super::{DecodeError, Ipv6Kind};
use crate::wire_encoding::{InadequateBufferSize, WireDecode, WireEncode};

/// A 128-bit IPv6 address.
///
/// The address is stored as eight 16-bit segments, most significant first, which is also the
/// order of the segments in network byte order. Every bit pattern is a valid address.
///
/// Addresses compare lexicographically by segment, which is the same as comparing them as
/// unsigned 128-bit integers.
///
/// # Examples
///
/// ```
/// # use ipv6_proto::address::Ipv6Address;
/// let address: Ipv6Address = "2001:DB8:0:0:0:0:0:1".parse().unwrap();
/// assert_eq!(address, Ipv6Address::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 1));
/// assert_eq!(address.to_string(), "2001:db8::1");
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ipv6Address {
    segments: [u16; Self::SEGMENTS],
}

impl Ipv6Address {
    /// The number of 16-bit segments in an address.
    pub const SEGMENTS: usize = 8;

    /// The length of the binary form in bytes.
    pub const OCTETS: usize = 16;

    /// The unspecified address `::`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ipv6_proto::address::Ipv6Address;
    /// assert_eq!(Ipv6Address::UNSPECIFIED.to_string(), "::");
    /// assert!(Ipv6Address::UNSPECIFIED.is_unspecified());
    /// ```
    pub const UNSPECIFIED: Self = Self::new(0, 0, 0, 0, 0, 0, 0, 0);

    /// The loopback address `::1`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ipv6_proto::address::Ipv6Address;
    /// assert_eq!(Ipv6Address::LOOPBACK.to_string(), "::1");
    /// assert!(Ipv6Address::LOOPBACK.is_loopback());
    /// ```
    pub const LOOPBACK: Self = Self::new(0, 0, 0, 0, 0, 0, 0, 1);

    /// Creates an address from its eight segments, most significant first.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(a: u16, b: u16, c: u16, d: u16, e: u16, f: u16, g: u16, h: u16) -> Self {
        Self::from_segments([a, b, c, d, e, f, g, h])
    }

    /// Creates an address from an array of segments, most significant first.
    pub const fn from_segments(segments: [u16; Self::SEGMENTS]) -> Self {
        Self { segments }
    }

    /// Returns the eight segments of the address, most significant first.
    pub const fn segments(&self) -> [u16; Self::SEGMENTS] {
        self.segments
    }

    /// Creates an address from its value as an unsigned 128-bit integer.
    pub const fn from_bits(bits: u128) -> Self {
        Self::from_octets(bits.to_be_bytes())
    }

    /// Returns the address as an unsigned 128-bit integer.
    pub const fn to_bits(&self) -> u128 {
        u128::from_be_bytes(self.octets())
    }

    /// Creates an address from its 16-byte network-order form.
    pub const fn from_octets(octets: [u8; Self::OCTETS]) -> Self {
        let mut segments = [0u16; Self::SEGMENTS];
        let mut i = 0;
        while i < Self::SEGMENTS {
            segments[i] = u16::from_be_bytes([octets[2 * i], octets[2 * i + 1]]);
            i += 1;
        }
        Self { segments }
    }

    /// Returns the 16-byte network-order form of the address.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ipv6_proto::address::Ipv6Address;
    /// let octets = Ipv6Address::LOOPBACK.octets();
    /// assert_eq!(octets, [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]);
    /// ```
    pub const fn octets(&self) -> [u8; Self::OCTETS] {
        let mut octets = [0u8; Self::OCTETS];
        let mut i = 0;
        while i < Self::SEGMENTS {
            let [high, low] = self.segments[i].to_be_bytes();
            octets[2 * i] = high;
            octets[2 * i + 1] = low;
            i += 1;
        }
        octets
    }

    /// Decodes an address from its binary form, which must be exactly 16 bytes long.
    ///
    /// Every 16-byte buffer holds a valid address, so the length is the only thing that can be
    /// wrong.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ipv6_proto::address::{DecodeError, Ipv6Address};
    /// assert_eq!(
    ///     Ipv6Address::decode_binary(&[0xff; 16]),
    ///     Ok(Ipv6Address::from_bits(u128::MAX))
    /// );
    /// assert_eq!(
    ///     Ipv6Address::decode_binary(&[0; 4]),
    ///     Err(DecodeError::LengthMismatch { expected: 16, actual: 4 })
    /// );
    /// ```
    pub fn decode_binary(bytes: &[u8]) -> Result<Self, DecodeError> {
        match <[u8; Self::OCTETS]>::try_from(bytes) {
            Ok(octets) => Ok(Self::from_octets(octets)),
            Err(_) => {
                tracing::trace!(length = bytes.len(), "rejected binary IPv6 address");
                Err(DecodeError::LengthMismatch {
                    expected: Self::OCTETS,
                    actual: bytes.len(),
                })
            }
        }
    }

    /// Returns the class of the address.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ipv6_proto::address::{Ipv6Address, Ipv6Kind};
    /// let address: Ipv6Address = "fe80::1".parse().unwrap();
    /// assert_eq!(address.kind(), Ipv6Kind::LinkLocal);
    /// ```
    pub const fn kind(&self) -> Ipv6Kind {
        if self.is_unspecified() {
            Ipv6Kind::Unspecified
        } else if self.is_loopback() {
            Ipv6Kind::Loopback
        } else if self.is_multicast() {
            Ipv6Kind::Multicast
        } else if self.is_link_local() {
            Ipv6Kind::LinkLocal
        } else if self.is_unique_local() {
            Ipv6Kind::UniqueLocal
        } else {
            Ipv6Kind::GlobalUnicast
        }
    }

    /// Returns true for the unspecified address `::`.
    pub const fn is_unspecified(&self) -> bool {
        self.to_bits() == 0
    }

    /// Returns true for the loopback address `::1`.
    pub const fn is_loopback(&self) -> bool {
        self.to_bits() == 1
    }

    /// Returns true for multicast addresses (`ff00::/8`).
    pub const fn is_multicast(&self) -> bool {
        self.segments[0] & 0xff00 == 0xff00
    }

    /// Returns true for link-local unicast addresses (`fe80::/10`).
    pub const fn is_link_local(&self) -> bool {
        self.segments[0] & 0xffc0 == 0xfe80
    }

    /// Returns true for unique local addresses (`fc00::/7`).
    pub const fn is_unique_local(&self) -> bool {
        self.segments[0] & 0xfe00 == 0xfc00
    }

    /// Returns true for addresses that belong to none of the other classes.
    pub const fn is_global_unicast(&self) -> bool {
        matches!(self.kind(), Ipv6Kind::GlobalUnicast)
    }
}

impl Debug for Ipv6Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ipv6Address({self})")
    }
}

impl From<[u16; Ipv6Address::SEGMENTS]> for Ipv6Address {
    fn from(segments: [u16; Ipv6Address::SEGMENTS]) -> Self {
        Self::from_segments(segments)
    }
}

impl From<[u8; Ipv6Address::OCTETS]> for Ipv6Address {
    fn from(octets: [u8; Ipv6Address::OCTETS]) -> Self {
        Self::from_octets(octets)
    }
}

impl From<Ipv6Address> for [u8; Ipv6Address::OCTETS] {
    fn from(address: Ipv6Address) -> Self {
        address.octets()
    }
}

impl From<u128> for Ipv6Address {
    fn from(bits: u128) -> Self {
        Self::from_bits(bits)
    }
}

impl From<Ipv6Address> for u128 {
    fn from(address: Ipv6Address) -> Self {
        address.to_bits()
    }
}

impl TryFrom<&[u8]> for Ipv6Address {
    type Error = DecodeError;

    /// Decodes the binary form, see [`Ipv6Address::decode_binary`].
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::decode_binary(bytes)
    }
}

impl From<net::Ipv6Addr> for Ipv6Address {
    fn from(address: net::Ipv6Addr) -> Self {
        Self::from_segments(address.segments())
    }
}

impl From<Ipv6Address> for net::Ipv6Addr {
    fn from(address: Ipv6Address) -> Self {
        net::Ipv6Addr::from(address.segments())
    }
}

impl WireEncode for Ipv6Address {
    type Error = InadequateBufferSize;

    #[inline]
    fn encoded_length(&self) -> usize {
        Self::OCTETS
    }

    fn encode_to_unchecked<T: BufMut>(&self, buffer: &mut T) {
        for segment in self.segments {
            buffer.put_u16(segment);
        }
    }
}

impl<T: Buf> WireDecode<T> for Ipv6Address {
    type Error = DecodeError;

    fn decode(data: &mut T) -> Result<Self, Self::Error> {
        if data.remaining() < Self::OCTETS {
            tracing::trace!(
                remaining = data.remaining(),
                "buffer too short for IPv6 address"
            );
            return Err(DecodeError::LengthMismatch {
                expected: Self::OCTETS,
                actual: data.remaining(),
            });
        }

        let mut segments = [0u16; Self::SEGMENTS];
        for segment in segments.iter_mut() {
            *segment = data.get_u16();
        }
        Ok(Self::from_segments(segments))
    }
}
