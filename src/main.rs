#[macro_use]
extern crate log;

mod bot;
mod config;
mod dice;
mod error;
mod fetcher;
mod listing;
mod utils;

use clap::Parser;

use config::Config;
use dice::Dice;
use error::Error;
use listing::ListingEntry;

/// Matrix bot replying to chat commands with anime screencap picks
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Bot access credential
    #[arg(short, long)]
    token: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    pretty_env_logger::init_timed();
    let args = Args::parse();

    info!("Starting anicobot");
    bot::Bot::run(args.token).await;
}
