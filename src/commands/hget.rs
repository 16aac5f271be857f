use crate::commands::executable::Executable;
use crate::commands::{CommandParser, CommandParserError};
use crate::reply::Reply;
use crate::store::{Store, StoreError};

/// Replies with the value of `field` in the hash stored at `key`, or nil when
/// the key or the field does not exist.
///
/// Ref: <https://redis.io/docs/latest/commands/hget/>
#[derive(Debug, PartialEq)]
pub struct Hget {
    pub key: String,
    pub field: String,
}

impl Executable for Hget {
    fn exec(self, store: Store) -> Result<Reply, StoreError> {
        let state = store.lock();

        let res = match state.hget(&self.key, &self.field)? {
            Some(value) => Reply::Bulk(value),
            None => Reply::Nil,
        };
        Ok(res)
    }
}

impl TryFrom<&mut CommandParser> for Hget {
    type Error = CommandParserError;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let field = parser.next_string()?;
        parser.finish()?;

        Ok(Self { key, field })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Command;

    #[test]
    fn existing_field() {
        let store = Store::new();
        store
            .lock()
            .hset("hash".to_string(), "f1".to_string(), "v1".to_string())
            .unwrap();

        let res = Command::try_from("HGET hash f1")
            .unwrap()
            .exec(store)
            .unwrap();

        assert_eq!(res, Reply::Bulk("v1".to_string()));
    }

    #[test]
    fn missing_field() {
        let store = Store::new();
        store
            .lock()
            .hset("hash".to_string(), "f1".to_string(), "v1".to_string())
            .unwrap();

        let res = Command::try_from("HGET hash missing")
            .unwrap()
            .exec(store)
            .unwrap();

        assert_eq!(res, Reply::Nil);
    }

    #[test]
    fn missing_key() {
        let store = Store::new();

        let res = Command::try_from("HGET nope f1")
            .unwrap()
            .exec(store)
            .unwrap();

        assert_eq!(res, Reply::Nil);
    }

    #[test]
    fn wrong_type() {
        let store = Store::new();
        store
            .lock()
            .set("key1".to_string(), "x".to_string())
            .unwrap();

        let err = Command::try_from("HGET key1 f")
            .unwrap()
            .exec(store)
            .unwrap_err();

        assert_eq!(err, StoreError::WrongType);
    }
}
