// Copyright (C) 2025-present The NetGauze Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
// implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use nxapi_decoder::{load_and_decode, Config, TokenKind};
use std::path::PathBuf;
use tracing::Level;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindToDecode {
    Duration,
    Timestamp,
}

impl From<KindToDecode> for TokenKind {
    fn from(value: KindToDecode) -> Self {
        match value {
            KindToDecode::Duration => TokenKind::Duration,
            KindToDecode::Timestamp => TokenKind::TimeStamp,
        }
    }
}

#[derive(Debug, Parser)]
#[command(version, long_about = None)]
struct Cli {
    /// Input file path with one value per line, `-` reads stdin
    #[clap(short, long)]
    input: String,

    /// JSON Lines output file path, if not specified
    /// output will be directed to stdout
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Specify the kind of values to decode
    #[clap(long, value_enum)]
    kind: KindToDecode,

    /// Stop at the first malformed value and exit with an error
    #[clap(long)]
    strict: bool,

    /// Logs are written to stderr
    #[clap(long, default_value = "info")]
    log_level: Level,
}

fn init_tracing(level: Level) -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("setting default subscriber failed")
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level)?;

    let config = Config {
        input_path: (cli.input != "-").then(|| PathBuf::from(&cli.input)),
        output_path: cli.output,
        kind: cli.kind.into(),
        strict: cli.strict,
    };
    tracing::debug!("decoding with {config:?}");

    load_and_decode(&config).with_context(|| format!("decoding `{}` failed", cli.input))?;
    Ok(())
}
