use crate::commands::executable::Executable;
use crate::commands::{CommandParser, CommandParserError};
use crate::reply::Reply;
use crate::store::{Store, StoreError};

/// Removes and replies with the first element of the list stored at `key`, or
/// nil when the list is empty or the key does not exist. The count argument is
/// not supported.
///
/// Ref: <https://redis.io/docs/latest/commands/lpop/>
#[derive(Debug, PartialEq)]
pub struct Lpop {
    pub key: String,
}

impl Executable for Lpop {
    fn exec(self, store: Store) -> Result<Reply, StoreError> {
        let mut state = store.lock();

        let res = match state.lpop(&self.key)? {
            Some(value) => Reply::Bulk(value),
            None => Reply::Nil,
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Lpop {
    type Error = CommandParserError;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        parser.finish()?;

        Ok(Self { key })
    }
}
