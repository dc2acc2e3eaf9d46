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

use std::fmt::{Display, Formatter};

/// The class of an [`Ipv6Address`][super::Ipv6Address] as determined by its leading bits.
///
/// Every address belongs to exactly one class. [`Ipv6Kind::GlobalUnicast`] is whatever is left
/// after the other classes are ruled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ipv6Kind {
    /// The all-zero address `::`.
    Unspecified,
    /// The loopback address `::1`.
    Loopback,
    /// Multicast addresses `ff00::/8`.
    Multicast,
    /// Link-local unicast addresses `fe80::/10`.
    LinkLocal,
    /// Unique local addresses `fc00::/7`.
    UniqueLocal,
    /// All remaining addresses.
    GlobalUnicast,
}

impl Display for Ipv6Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Ipv6Kind::Unspecified => "unspecified",
            Ipv6Kind::Loopback => "loopback",
            Ipv6Kind::Multicast => "multicast",
            Ipv6Kind::LinkLocal => "link-local unicast",
            Ipv6Kind::UniqueLocal => "unique local",
            Ipv6Kind::GlobalUnicast => "global unicast",
        };
        f.write_str(name)
    }
}
