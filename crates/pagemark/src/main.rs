#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod convert;
mod error;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    version,
    about,
    long_about = "Recover headings, lists, and tables from paginated character dumps and emit Markdown"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Convert a JSON page dump to Markdown
    Convert(crate::convert::ConvertOptions),
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Convert(options) => crate::convert::convert(options),
    }
}
