use crate::commands::executable::Executable;
use crate::commands::{CommandParser, CommandParserError};
use crate::reply::Reply;
use crate::store::{Store, StoreError};

/// Replies with the elements of the list stored at `key` between `start` and
/// `stop`, both inclusive. Negative offsets index from the end of the list,
/// -1 being the last element. Out-of-range offsets are clamped to the list,
/// never reported as errors.
///
/// Ref: <https://redis.io/docs/latest/commands/lrange/>
#[derive(Debug, PartialEq)]
pub struct Lrange {
    pub key: String,
    pub start: i64,
    pub stop: i64,
}

impl Executable for Lrange {
    fn exec(self, store: Store) -> Result<Reply, StoreError> {
        let state = store.lock();
        let range = state.lrange(&self.key, self.start, self.stop)?;

        Ok(Reply::Array(range))
    }
}

impl TryFrom<&mut CommandParser> for Lrange {
    type Error = CommandParserError;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let key = parser.next_string()?;
        let start = parser.next_integer()?;
        let stop = parser.next_integer()?;
        parser.finish()?;

        Ok(Self { key, start, stop })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Command;

    fn seeded_store() -> Store {
        let store = Store::new();
        store
            .lock()
            .lpush(
                "list".to_string(),
                vec!["a".to_string(), "b".to_string(), "c".to_string()],
            )
            .unwrap();
        store
    }

    #[test]
    fn parse_with_negative_offsets() {
        let cmd = Command::try_from("LRANGE list 0 -1").unwrap();

        assert_eq!(
            cmd,
            Command::Lrange(Lrange {
                key: "list".to_string(),
                start: 0,
                stop: -1,
            })
        );
    }

    #[test]
    fn full_range() {
        let res = Command::try_from("LRANGE list 0 2")
            .unwrap()
            .exec(seeded_store())
            .unwrap();

        assert_eq!(
            res,
            Reply::Array(vec!["c".to_string(), "b".to_string(), "a".to_string()])
        );
    }

    #[test]
    fn offsets_beyond_both_ends_are_clamped() {
        let res = Command::try_from("LRANGE list -100 100")
            .unwrap()
            .exec(seeded_store())
            .unwrap();

        assert_eq!(
            res,
            Reply::Array(vec!["c".to_string(), "b".to_string(), "a".to_string()])
        );
    }

    #[test]
    fn start_beyond_length() {
        let res = Command::try_from("LRANGE list 5 10")
            .unwrap()
            .exec(seeded_store())
            .unwrap();

        assert_eq!(res, Reply::Array(Vec::new()));
        assert_eq!(res.to_string(), "(empty array)");
    }

    #[test]
    fn subrange() {
        let res = Command::try_from("LRANGE list 1 2")
            .unwrap()
            .exec(seeded_store())
            .unwrap();

        assert_eq!(res, Reply::Array(vec!["b".to_string(), "a".to_string()]));
    }

    #[test]
    fn missing_key() {
        let store = Store::new();

        let res = Command::try_from("LRANGE nope 0 -1")
            .unwrap()
            .exec(store)
            .unwrap();

        assert_eq!(res, Reply::Array(Vec::new()));
    }

    #[test]
    fn non_integer_offset() {
        let err = Command::try_from("LRANGE list zero -1").unwrap_err();

        assert_eq!(err, CommandParserError::NotAnInteger);
        assert_eq!(
            err.to_string(),
            "ERR value is not an integer or out of range"
        );
    }

    #[test]
    fn wrong_type() {
        let store = Store::new();
        store
            .lock()
            .set("key1".to_string(), "x".to_string())
            .unwrap();

        let err = Command::try_from("LRANGE key1 0 -1")
            .unwrap()
            .exec(store)
            .unwrap_err();

        assert_eq!(err, StoreError::WrongType);
    }
}
