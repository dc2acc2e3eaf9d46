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

//! Traits for encoding values to and decoding values from their wire format.
//!
//! Values are written to any [`BufMut`] and read from any [`Buf`], so the same implementation
//! serves byte slices, [`Vec<u8>`] and [`bytes::BytesMut`] alike.

use bytes::{Buf, BufMut, Bytes, BytesMut};

/// Raised if the buffer does not have sufficient capacity for the encoded value.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy, Default)]
#[error("the provided buffer did not have sufficient size")]
pub struct InadequateBufferSize;

/// A value with a wire encoding.
pub trait WireEncode {
    /// The error returned when encoding fails.
    type Error: From<InadequateBufferSize>;

    /// The number of bytes [`Self::encode_to_unchecked`] writes.
    fn encoded_length(&self) -> usize;

    /// Writes the encoded value to the buffer.
    ///
    /// # Panics
    ///
    /// May panic if the buffer has less than [`Self::encoded_length`] bytes of remaining capacity.
    fn encode_to_unchecked<T: BufMut>(&self, buffer: &mut T);

    /// Writes the encoded value to the buffer after checking its remaining capacity.
    fn encode_to<T: BufMut>(&self, buffer: &mut T) -> Result<(), Self::Error> {
        if buffer.remaining_mut() < self.encoded_length() {
            return Err(InadequateBufferSize.into());
        }
        self.encode_to_unchecked(buffer);
        Ok(())
    }

    /// Encodes the value into a newly allocated, exactly sized buffer.
    fn encode_to_bytes(&self) -> Bytes {
        let mut buffer = BytesMut::with_capacity(self.encoded_length());
        self.encode_to_unchecked(&mut buffer);
        buffer.freeze()
    }
}

/// A value that can be decoded from the front of a buffer.
///
/// On success exactly the bytes belonging to the value are consumed.
pub trait WireDecode<T: Buf>: Sized {
    /// The error returned when decoding fails.
    type Error;

    /// Decodes a value from the start of `data`.
    fn decode(data: &mut T) -> Result<Self, Self::Error>;
}
