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

//! Test utilities

/// Shortcut for `<string>.parse().unwrap()`.
macro_rules! parse {
    ($string:literal) => {
        $string.parse().unwrap()
    };
}

pub(crate) use parse;

/// Expands a function into one `#[test]` per named case.
///
/// The macro takes the name of an existing function and a list of case names with their
/// arguments, and produces a module of the same name holding one test per case.
///
/// ```ignore
/// param_test! {
///     canonical_text: [
///         loopback: ([0, 0, 0, 0, 0, 0, 0, 1], "::1"),
///         #[ignore] unspecified: ([0; 8], "::"),
///     ]
/// }
/// fn canonical_text(segments: [u16; 8], expected: &str) {
///     assert_eq!(Ipv6Address::from_segments(segments).to_string(), expected);
/// }
/// ```
///
/// A return type such as `Result<(), Box<dyn Error>>` can follow the function name as
/// `name -> Type`.
macro_rules! param_test {
    ($func_name:ident -> $return_ty:ty: [
        $( $(#[$outer:meta])* $case_name:ident: ( $($args:expr),+ ) ),+$(,)?
    ]) => {
        mod $func_name {
            use super::*;

            $(
                #[test]
                $(#[$outer])*
                fn $case_name() -> $return_ty {
                    $func_name($($args),+)
                }
            )*
        }
    };
    ($func_name:ident: [
        $( $(#[$outer:meta])* $case_name:ident: ( $($args:expr),+ ) ),+$(,)?
    ]) => {
        param_test!($func_name -> (): [ $( $(#[$outer])* $case_name: ( $($args),+ ) ),+ ]);
    };
}

pub(crate) use param_test;

#[cfg(test)]
mod tests {
    use std::error::Error;

    use crate::address::Ipv6Address;

    super::param_test! {
        segment_count: [
            compressed: ("1::", 8),
            full: ("1:2:3:4:5:6:7:8", 8)
        ]
    }
    fn segment_count(text: &str, expected: usize) {
        let address: Ipv6Address = text.parse().unwrap();
        assert_eq!(address.segments().len(), expected);
    }

    super::param_test! {
        fallible_case -> Result<(), Box<dyn Error>>: [
            loopback: ("::1", 1),
            two: ("::2", 2)
        ]
    }
    fn fallible_case(text: &str, bits: u128) -> Result<(), Box<dyn Error>> {
        assert_eq!(text.parse::<Ipv6Address>()?.to_bits(), bits);
        Ok(())
    }
}
