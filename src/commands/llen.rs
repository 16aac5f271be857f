use crate::commands::executable::Executable;
use crate::commands::{CommandParser, CommandParserError};
use crate::reply::Reply;
use crate::store::{Store, StoreError};

/// Replies with the length of the list stored at `key`, or 0 when the key
/// does not exist.
///
/// Ref: <https://redis.io/docs/latest/commands/llen/>
#[derive(Debug, PartialEq)]
pub struct Llen {
    pub key: String,
}

impl Executable for Llen {
    fn exec(self, store: Store) -> Result<Reply, StoreError> {
        let state = store.lock();
        let len = state.llen(&self.key)?;

        Ok(Reply::Integer(len as i64))
    }
}

impl TryFrom<&mut CommandParser> for Llen {
    type Error = CommandParserError;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        parser.finish()?;

        Ok(Self { key })
    }
}
