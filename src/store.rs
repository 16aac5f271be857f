use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error as ThisError;

/// The Store keeps every key in a single map from key to a typed value, so a
/// key holds exactly one of string, list or hash at any time. Operations
/// type-check against the current value before mutating; a mismatch fails with
/// [`StoreError::WrongType`] and leaves the state untouched. The store is
/// designed to be shared and cloned cheaply using reference counting.
#[derive(Clone)]
pub struct Store {
    inner: Arc<Mutex<State>>,
}

impl Store {
    pub fn new() -> Store {
        let state = State {
            keys: HashMap::new(),
        };

        Store {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, State> {
        self.inner.lock().unwrap()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

type Key = String;

/// A typed value. Keeping the three shapes in one enum makes the
/// one-type-per-key invariant structural: the map simply cannot hold a string
/// and a list under the same key.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    String(String),
    List(VecDeque<String>),
    Hash(HashMap<String, String>),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::String(_) => Kind::String,
            Value::List(_) => Kind::List,
            Value::Hash(_) => Kind::Hash,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    String,
    List,
    Hash,
}

#[derive(Debug, ThisError, PartialEq)]
pub enum StoreError {
    #[error("WRONGTYPE Operation against a key holding the wrong kind of value")]
    WrongType,
}

pub struct State {
    keys: HashMap<Key, Value>,
}

impl State {
    /// A key with no value passes any check: every operation is free to create
    /// the key under its own type.
    fn check_type(&self, key: &str, expected: Kind) -> Result<(), StoreError> {
        match self.keys.get(key) {
            Some(value) if value.kind() != expected => Err(StoreError::WrongType),
            _ => Ok(()),
        }
    }

    /// Upserts a string value. The previous value, if any, is not returned;
    /// callers that need it (SET with GET) read it before writing.
    pub fn set(&mut self, key: Key, value: String) -> Result<(), StoreError> {
        self.check_type(&key, Kind::String)?;
        self.keys.insert(key, Value::String(value));
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.check_type(key, Kind::String)?;

        match self.keys.get(key) {
            Some(Value::String(value)) => Ok(Some(value.clone())),
            _ => Ok(None),
        }
    }

    /// Removes keys of any type, counting the ones that existed. Missing keys
    /// are skipped silently; this operation never fails.
    pub fn del(&mut self, keys: &[Key]) -> u64 {
        let mut deleted = 0;

        for key in keys {
            if self.keys.remove(key).is_some() {
                deleted += 1;
            }
        }

        deleted
    }

    /// Prepends each value, in the order given, to the front of the list at
    /// `key`, creating the list if the key is unused. The last input value
    /// ends up frontmost. Returns the number of values pushed, not the
    /// resulting list length.
    pub fn lpush(&mut self, key: Key, values: Vec<String>) -> Result<u64, StoreError> {
        self.check_type(&key, Kind::List)?;

        let entry = self
            .keys
            .entry(key)
            .or_insert_with(|| Value::List(VecDeque::new()));

        let pushed = values.len() as u64;
        if let Value::List(list) = entry {
            for value in values {
                list.push_front(value);
            }
        }

        Ok(pushed)
    }

    /// Removes and returns the front element. Popping the last element leaves
    /// the key in place holding an empty list; only DEL removes it. This
    /// asymmetry is inherited behavior and is kept on purpose.
    pub fn lpop(&mut self, key: &str) -> Result<Option<String>, StoreError> {
        self.check_type(key, Kind::List)?;

        match self.keys.get_mut(key) {
            Some(Value::List(list)) => Ok(list.pop_front()),
            _ => Ok(None),
        }
    }

    pub fn llen(&self, key: &str) -> Result<u64, StoreError> {
        self.check_type(key, Kind::List)?;

        match self.keys.get(key) {
            Some(Value::List(list)) => Ok(list.len() as u64),
            _ => Ok(0),
        }
    }

    /// Returns the elements between `start` and `stop`, both inclusive, in
    /// front-to-back order. Negative offsets index from the end of the list,
    /// -1 being the last element. Out-of-range offsets are clamped to the
    /// actual length rather than reported as errors.
    pub fn lrange(&self, key: &str, start: i64, stop: i64) -> Result<Vec<String>, StoreError> {
        self.check_type(key, Kind::List)?;

        let list = match self.keys.get(key) {
            Some(Value::List(list)) => list,
            _ => return Ok(Vec::new()),
        };

        let len = list.len() as i64;
        if len == 0 {
            return Ok(Vec::new());
        }

        let start = if start < 0 { len + start } else { start };
        let stop = if stop < 0 { len + stop } else { stop };

        if start >= len {
            return Ok(Vec::new());
        }

        // A start that is still negative after offsetting means "from the
        // first element". Clamping before the start/stop comparison also
        // rejects ranges whose stop is still negative: no element has an
        // index below 0.
        let start = start.max(0);
        let stop = stop.min(len - 1);
        if start > stop {
            return Ok(Vec::new());
        }

        let range = list
            .iter()
            .skip(start as usize)
            .take((stop - start + 1) as usize)
            .cloned()
            .collect();

        Ok(range)
    }

    /// Inserts or overwrites one field, creating the hash if the key is
    /// unused. The two cases are not distinguished in the return value.
    pub fn hset(&mut self, key: Key, field: String, value: String) -> Result<(), StoreError> {
        self.check_type(&key, Kind::Hash)?;

        let entry = self
            .keys
            .entry(key)
            .or_insert_with(|| Value::Hash(HashMap::new()));

        if let Value::Hash(hash) = entry {
            hash.insert(field, value);
        }

        Ok(())
    }

    pub fn hget(&self, key: &str, field: &str) -> Result<Option<String>, StoreError> {
        self.check_type(key, Kind::Hash)?;

        match self.keys.get(key) {
            Some(Value::Hash(hash)) => Ok(hash.get(field).cloned()),
            _ => Ok(None),
        }
    }

    pub fn kind(&self, key: &str) -> Option<Kind> {
        self.keys.get(key).map(Value::kind)
    }

    pub fn size(&self) -> usize {
        self.keys.len()
    }
}
