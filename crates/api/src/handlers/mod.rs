//! Request handlers, one module per entity.

pub mod expenses;
pub mod messages;
pub mod users;
