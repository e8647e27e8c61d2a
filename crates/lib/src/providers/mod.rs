//! Backends that the recommendation client can talk to.

pub mod table;
