use crate::commands::executable::Executable;
use crate::commands::{CommandParser, CommandParserError};
use crate::reply::Reply;
use crate::store::{Store, StoreError};

/// Inserts the given values at the head of the list stored at `key`, creating
/// the list first when the key is unused. Values are prepended one at a time
/// in the order given, so the last value ends up at the head. Replies with the
/// number of values pushed.
///
/// Ref: <https://redis.io/docs/latest/commands/lpush/>
#[derive(Debug, PartialEq)]
pub struct Lpush {
    pub key: String,
    pub values: Vec<String>,
}

impl Executable for Lpush {
    fn exec(self, store: Store) -> Result<Reply, StoreError> {
        let mut state = store.lock();
        let pushed = state.lpush(self.key, self.values)?;

        Ok(Reply::Integer(pushed as i64))
    }
}

impl TryFrom<&mut CommandParser> for Lpush {
    type Error = CommandParserError;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        // At least one value.
        let first = parser.next_string()?;
        let mut values = vec![first];
        values.extend(parser.rest());

        Ok(Self { key, values })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Command;

    #[test]
    fn pushes_values_front_first() {
        let store = Store::new();

        let cmd = Command::try_from("LPUSH list a b c").unwrap();
        assert_eq!(
            cmd,
            Command::Lpush(Lpush {
                key: "list".to_string(),
                values: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            })
        );

        let res = cmd.exec(store.clone()).unwrap();

        assert_eq!(res, Reply::Integer(3));
        assert_eq!(
            store.lock().lrange("list", 0, -1),
            Ok(vec!["c".to_string(), "b".to_string(), "a".to_string()])
        );
    }

    #[test]
    fn replies_with_pushed_count_not_length() {
        let store = Store::new();

        Command::try_from("LPUSH list a b")
            .unwrap()
            .exec(store.clone())
            .unwrap();
        let res = Command::try_from("LPUSH list c")
            .unwrap()
            .exec(store.clone())
            .unwrap();

        assert_eq!(res, Reply::Integer(1));
        assert_eq!(store.lock().llen("list"), Ok(3));
    }

    #[test]
    fn missing_values() {
        let err = Command::try_from("LPUSH list").unwrap_err();

        assert_eq!(
            err,
            CommandParserError::WrongNumberOfArguments {
                command: "lpush".to_string()
            }
        );
    }

    #[test]
    fn wrong_type() {
        let store = Store::new();
        store
            .lock()
            .set("key1".to_string(), "x".to_string())
            .unwrap();

        let cmd = Command::try_from("LPUSH key1 y").unwrap();
        let err = cmd.exec(store.clone()).unwrap_err();

        assert_eq!(err, StoreError::WrongType);
        assert_eq!(store.lock().get("key1"), Ok(Some("x".to_string())));
    }
}
