use crate::commands::executable::Executable;
use crate::commands::{CommandParser, CommandParserError};
use crate::reply::Reply;
use crate::store::{Store, StoreError};

/// Sets `field` in the hash stored at `key` to `value`, creating the hash
/// first when the key is unused.
///
/// **NOTE**: the reply is `(integer) 1` whether the field was created or
/// overwritten; real Redis replies 1 only for new fields.
///
/// Ref: <https://redis.io/docs/latest/commands/hset/>
#[derive(Debug, PartialEq)]
pub struct Hset {
    pub key: String,
    pub field: String,
    pub value: String,
}

impl Executable for Hset {
    fn exec(self, store: Store) -> Result<Reply, StoreError> {
        let mut state = store.lock();
        state.hset(self.key, self.field, self.value)?;

        Ok(Reply::Integer(1))
    }
}

impl TryFrom<&mut CommandParser> for Hset {
    type Error = CommandParserError;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let field = parser.next_string()?;
        let value = parser.next_string()?;
        parser.finish()?;

        Ok(Self { key, field, value })
    }
}
