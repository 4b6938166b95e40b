use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "carnaval-page")]
#[command(about = "Terminal landing page with a built-in audio player", long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Play this audio file instead of the configured track
    #[arg(short, long, value_name = "FILE")]
    pub track: Option<PathBuf>,
}
