use clap::Parser;
use minidis::{repl, Error};

#[derive(Parser, Debug)]
#[command(version, about = "A miniature typed in-memory data store with a Redis-flavored CLI")]
struct Args {
    /// The prompt printed before each command
    #[arg(short, long, default_value = "minidis> ")]
    prompt: String,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let args = Args::parse();

    repl::run(&args.prompt).await
}
