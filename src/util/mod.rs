//! Small client-side helpers: the route guard and key/value storage.

pub mod guard;
pub mod storage;
