mod cli;

use cli::commands::Command;
use cli::Seeker;
use structopt::StructOpt;

fn main() {
    env_logger::init();
    Seeker::from_args().execute();
}
