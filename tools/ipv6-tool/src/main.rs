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
//! A tool to convert IPv6 addresses between their text and binary forms.

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use ipv6_sdk_observability::setup_tracing;

use crate::cli::{Commands, Opts};

mod cli;
mod commands;

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    let _guards = setup_tracing(opts.logging.log_dir.as_ref(), opts.logging.stderr)
        .context("error setting up logging")?;

    let mut stdout = io::stdout().lock();
    let format = opts.output.output;
    match opts.command {
        Commands::Canonicalize { addresses } => {
            commands::canonicalize(&addresses, format, &mut stdout)
        }
        Commands::Encode { address } => commands::encode(address, format, &mut stdout),
        Commands::Decode { hex } => commands::decode(&hex, format, &mut stdout),
        Commands::Classify { addresses } => commands::classify(&addresses, format, &mut stdout),
        Commands::Batch { file } => commands::batch(&file, format, &mut stdout),
    }?;

    stdout.flush().context("error flushing stdout")
}
