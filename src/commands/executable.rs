use crate::reply::Reply;
use crate::store::{Store, StoreError};

pub trait Executable {
    fn exec(self, store: Store) -> Result<Reply, StoreError>;
}
