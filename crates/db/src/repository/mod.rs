//! Repository functions — one function per database operation.
//!
//! Every function takes a `&DbPool` (or an executor, for operations that
//! participate in a caller-owned transaction) and returns a
//! `Result<T, DbError>`.  No business logic, no domain types — pure SQL.

pub mod expenses;
pub mod users;
