//! Data transfer objects exchanged with callers of the member service.

pub mod http;
