use crate::commands::executable::Executable;
use crate::commands::{CommandParser, CommandParserError};
use crate::reply::Reply;
use crate::store::{Store, StoreError};

/// Removes the specified keys, of any type, ignoring the ones that do not
/// exist. Replies with the number of keys that were actually removed.
///
/// Ref: <https://redis.io/docs/latest/commands/del/>
#[derive(Debug, PartialEq)]
pub struct Del {
    pub keys: Vec<String>,
}

impl Executable for Del {
    fn exec(self, store: Store) -> Result<Reply, StoreError> {
        let mut state = store.lock();
        let deleted = state.del(&self.keys);

        Ok(Reply::Integer(deleted as i64))
    }
}

impl TryFrom<&mut CommandParser> for Del {
    type Error = CommandParserError;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        // At least one key; everything after the name is a key.
        let first = parser.next_string()?;
        let mut keys = vec![first];
        keys.extend(parser.rest());

        Ok(Self { keys })
    }
}
