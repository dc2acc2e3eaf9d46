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
//! Subcommand implementations.
//!
//! Every command writes its result to the given writer, either one line per result or as a
//! single JSON document followed by a newline.

use std::{io::Write, path::Path};

use anyhow::Context;
use ipv6_proto::address::Ipv6Address;
use serde::Serialize;

use crate::cli::OutputFormat;

/// An address together with its class.
#[derive(Debug, Serialize)]
struct Classification {
    address: Ipv6Address,
    kind: String,
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, value).context("error writing JSON output")?;
    writeln!(out)?;
    Ok(())
}

fn write_lines<W: Write>(out: &mut W, addresses: &[Ipv6Address]) -> anyhow::Result<()> {
    for address in addresses {
        writeln!(out, "{address}")?;
    }
    Ok(())
}

/// Prints the canonical text of every address.
pub fn canonicalize<W: Write>(
    addresses: &[Ipv6Address],
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => write_lines(out, addresses),
        OutputFormat::Json => write_json(out, addresses),
    }
}

/// Prints the network-order octets of the address as lowercase hex.
pub fn encode<W: Write>(
    address: Ipv6Address,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    let encoded = hex::encode(address.octets());
    match format {
        OutputFormat::Text => writeln!(out, "{encoded}").map_err(Into::into),
        OutputFormat::Json => write_json(out, &encoded),
    }
}

/// Decodes a hex string holding the 16 network-order octets and prints the canonical text.
pub fn decode<W: Write>(input: &str, format: OutputFormat, out: &mut W) -> anyhow::Result<()> {
    let octets = hex::decode(input.trim()).with_context(|| format!("invalid hex \"{input}\""))?;
    let address = Ipv6Address::decode_binary(&octets)
        .with_context(|| format!("cannot decode \"{input}\" as an IPv6 address"))?;
    tracing::debug!(%address, "Decoded address");

    canonicalize(&[address], format, out)
}

/// Prints every address with its class.
pub fn classify<W: Write>(
    addresses: &[Ipv6Address],
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for address in addresses {
                writeln!(out, "{address}\t{}", address.kind())?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            let classified: Vec<_> = addresses
                .iter()
                .map(|address| Classification {
                    address: *address,
                    kind: address.kind().to_string(),
                })
                .collect();
            write_json(out, &classified)
        }
    }
}

/// Reads a JSON array of address strings from `path` and prints their canonical text.
pub fn batch<W: Write>(path: &Path, format: OutputFormat, out: &mut W) -> anyhow::Result<()> {
    let content = std::fs::read(path)
        .with_context(|| format!("error reading batch file {}", path.display()))?;
    let addresses: Vec<Ipv6Address> = serde_json::from_slice(&content)
        .with_context(|| format!("error decoding addresses from {}", path.display()))?;
    tracing::info!(path = %path.display(), count = addresses.len(), "Loaded batch file");

    canonicalize(&addresses, format, out)
}
