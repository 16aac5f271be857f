use crate::commands::executable::Executable;
use crate::commands::{CommandParser, CommandParserError};
use crate::reply::Reply;
use crate::store::{Store, StoreError};

/// Get the string value of `key`, or nil when the key does not exist. A key
/// holding a list or hash is an error.
///
/// Ref: <https://redis.io/docs/latest/commands/get/>
#[derive(Debug, PartialEq)]
pub struct Get {
    pub key: String,
}

impl Executable for Get {
    fn exec(self, store: Store) -> Result<Reply, StoreError> {
        let state = store.lock();

        let res = match state.get(&self.key)? {
            Some(value) => Reply::Bulk(value),
            None => Reply::Nil,
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Get {
    type Error = CommandParserError;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        parser.finish()?;

        Ok(Self { key })
    }
}
