//! Types shared by the joke table, the session core and the front ends.

pub mod domain;
pub mod error;
pub mod protocol;
