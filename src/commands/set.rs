use crate::commands::executable::Executable;
use crate::commands::{CommandParser, CommandParserError};
use crate::reply::Reply;
use crate::store::{Store, StoreError};

/// Set `key` to hold the string `value`, subject to the NX/XX/GET modifiers.
/// NX writes only if the key does not exist, XX only if it does. With GET the
/// reply is the previous value (or nil) instead of `OK`, whether or not the
/// write went through.
///
/// Ref: <https://redis.io/docs/latest/commands/set/>
#[derive(Debug, PartialEq)]
pub struct Set {
    pub key: String,
    pub value: String,
    pub options: SetOptions,
}

/// The optional SET modifiers, resolved from the trailing tokens of the
/// command line. NX and XX are mutually exclusive.
#[derive(Debug, Default, PartialEq)]
pub struct SetOptions {
    /// Only set the key if it does not already exist.
    pub nx: bool,
    /// Only set the key if it already exists.
    pub xx: bool,
    /// Return the previous value instead of a plain acknowledgment.
    pub get: bool,
    // TTL modifiers (EX, PX, EXAT, PXAT, KEEPTTL) are not supported.
}

impl SetOptions {
    pub fn parse(args: &[String]) -> Result<SetOptions, CommandParserError> {
        let mut options = SetOptions::default();

        for arg in args {
            match arg.to_uppercase().as_str() {
                "NX" => options.nx = true,
                "XX" => options.xx = true,
                "GET" => options.get = true,
                _ => return Err(CommandParserError::Syntax),
            }
        }

        if options.nx && options.xx {
            return Err(CommandParserError::Syntax);
        }

        Ok(options)
    }
}

impl Executable for Set {
    fn exec(self, store: Store) -> Result<Reply, StoreError> {
        let mut state = store.lock();

        // The pre-read doubles as the type check: SET against a list or hash
        // key fails here, before any write.
        let previous = state.get(&self.key)?;
        let exists = previous.is_some();

        if self.options.nx && exists {
            let res = match (self.options.get, previous) {
                (true, Some(prev)) => Reply::Bulk(prev),
                _ => Reply::Nil,
            };
            return Ok(res);
        }

        if self.options.xx && !exists {
            return Ok(Reply::Nil);
        }

        state.set(self.key, self.value)?;

        let res = match (self.options.get, previous) {
            (false, _) => Reply::Ok,
            (true, Some(prev)) => Reply::Bulk(prev),
            (true, None) => Reply::Nil,
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Set {
    type Error = CommandParserError;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let value = parser.next_string()?;
        let options = SetOptions::parse(&parser.rest())?;

        Ok(Self {
            key,
            value,
            options,
        })
    }
}
