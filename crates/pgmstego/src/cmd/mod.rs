use clap::{Args, Subcommand};
use std::path::PathBuf;

use pgmstego::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod embed;
pub mod extract;
pub mod info;
pub mod run;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Embed a secret image, write the stego image, then extract it again.
    Run(RunArgs),
    /// Embed a secret image into a cover image.
    Embed(EmbedArgs),
    /// Recover the hidden image from a binary stego image.
    Extract(ExtractArgs),
    /// Print the header of a PGM file.
    Info(InfoArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Run(args) => run::run(args, format),
        Command::Embed(args) => embed::run(args, format),
        Command::Extract(args) => extract::run(args, format),
        Command::Info(args) => info::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// JSON configuration file. Flags override its values.
    #[arg(long, value_name = "FILE", env = "PGMSTEGO_CONFIG")]
    pub config: Option<PathBuf>,
    /// Cover image (P2).
    #[arg(long, value_name = "PATH", env = "PGMSTEGO_COVER")]
    pub cover: Option<PathBuf>,
    /// Secret image (P2).
    #[arg(long, value_name = "PATH", env = "PGMSTEGO_SECRET")]
    pub secret: Option<PathBuf>,
    /// Stego image output (P5).
    #[arg(long, value_name = "PATH", env = "PGMSTEGO_STEGO")]
    pub stego: Option<PathBuf>,
    /// Extracted secret output (P2).
    #[arg(long, value_name = "PATH", env = "PGMSTEGO_EXTRACTED")]
    pub extracted: Option<PathBuf>,
    /// Image width in pixels.
    #[arg(long, env = "PGMSTEGO_WIDTH")]
    pub width: Option<u32>,
    /// Image height in pixels.
    #[arg(long, env = "PGMSTEGO_HEIGHT")]
    pub height: Option<u32>,
    /// Expected secret width, when it differs from the cover's.
    #[arg(long)]
    pub secret_width: Option<u32>,
    /// Expected secret height, when it differs from the cover's.
    #[arg(long)]
    pub secret_height: Option<u32>,
}

#[derive(Args, Debug)]
pub struct EmbedArgs {
    /// Cover image (P2).
    pub cover: PathBuf,
    /// Secret image (P2).
    pub secret: PathBuf,
    /// Stego image output (P5).
    pub output: PathBuf,
    /// Image width in pixels.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,
    /// Image height in pixels.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Stego image (P5).
    pub stego: PathBuf,
    /// Extracted secret output (P2).
    pub output: PathBuf,
    /// Image width in pixels.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,
    /// Image height in pixels.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,
}

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// PGM file (P2 or P5).
    pub path: PathBuf,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
