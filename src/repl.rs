use std::io::Write;

use futures::StreamExt;
use tokio_util::codec::{FramedRead, LinesCodec};
use tracing::debug;

use crate::commands::executable::Executable;
use crate::commands::{Command, CommandParserError};
use crate::reply::Reply;
use crate::store::Store;
use crate::Error;

pub const INSTRUCTIONS: &str = "
Simple Redis-style CLI. Commands:
- SET key value [NX | XX] [GET] : Set a key to a string value
- GET key                       : Get the string value of key, or nil if the key does not exist
- DEL key [key ...]             : Delete the specified keys, ignoring non-existing keys
- LPUSH key value [value ...]   : Prepend values to the list stored at key
- LPOP key                      : Remove and return the first element of the list stored at key
- LLEN key                      : Return the length of the list stored at key
- LRANGE key start stop         : Return a range of elements from the list stored at key
- HSET key field value          : Set a field in the hash stored at key
- HGET key field                : Get the value of a field in the hash stored at key
- HELP                          : Show available commands
- QUIT                          : Close the CLI

See the Redis command documentation for more info on behavior and options.";

/// Runs the interactive session until QUIT or end of input. The store lives
/// exactly as long as the session; nothing is persisted.
pub async fn run(prompt: &str) -> Result<(), Error> {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| debug!("Failed to initialize global tracing: {}", e));

    let store = Store::new();
    let mut lines = FramedRead::new(tokio::io::stdin(), LinesCodec::new());

    println!("{}", INSTRUCTIONS);

    loop {
        print!("{}", prompt);
        std::io::stdout().flush()?;

        let line = match lines.next().await {
            Some(line) => line?,
            None => break,
        };

        match Command::try_from(line.as_str()) {
            Err(CommandParserError::EmptyInput) => continue,
            Err(err) => println!("{}", Reply::Error(err.to_string())),
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{}", INSTRUCTIONS),
            Ok(cmd) => {
                debug!(?cmd, "executing command");
                match cmd.exec(store.clone()) {
                    Ok(reply) => println!("{}", reply),
                    Err(err) => println!("{}", Reply::Error(err.to_string())),
                }
            }
        }
    }

    println!("Exiting...");
    Ok(())
}
