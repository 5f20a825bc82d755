//! This crate contains the source code for the binary of the mazesearch solver.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use std::io;

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use mazesearch::{Cli, Status};

fn main() -> Result<Status> {
    install()?;

    let cli = Cli::parse();
    cli.init_logging()?;
    cli.run(&mut io::stdout().lock())
}
