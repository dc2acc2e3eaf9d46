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
//! ipv6-tool CLI options.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use ipv6_proto::address::Ipv6Address;

/// Canonicalize, encode and classify IPv6 addresses.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Opts {
    /// Top-level subcommand
    #[command(subcommand)]
    pub command: Commands,

    /// Logging options
    #[command(flatten)]
    pub logging: LoggingOptions,

    /// Output options
    #[command(flatten)]
    pub output: OutputOptions,
}

/// Logging options.
#[derive(Debug, Args)]
pub struct LoggingOptions {
    /// Log to stderr.
    #[arg(long, global = true, default_value_t = true, action = ArgAction::Set)]
    pub stderr: bool,

    /// Directory for the log file.
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,
}

/// Output options.
#[derive(Debug, Args)]
pub struct OutputOptions {
    /// Format of the results written to stdout.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

/// Format of the results written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One result per line.
    Text,
    /// A single JSON document.
    Json,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the canonical text of each address.
    Canonicalize {
        /// Addresses in any legal text form.
        #[arg(required = true)]
        addresses: Vec<Ipv6Address>,
    },
    /// Print the 16-byte network-order form of an address as hex.
    Encode {
        /// Address in any legal text form.
        address: Ipv6Address,
    },
    /// Print the canonical text of an address given as 32 hex digits.
    Decode {
        /// Hex encoding of the 16-byte network-order form.
        hex: String,
    },
    /// Print the class of each address.
    Classify {
        /// Addresses in any legal text form.
        #[arg(required = true)]
        addresses: Vec<Ipv6Address>,
    },
    /// Canonicalize the addresses listed in a JSON file.
    Batch {
        /// JSON file holding an array of address strings.
        file: PathBuf,
    },
}
