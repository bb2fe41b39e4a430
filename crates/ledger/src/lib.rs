//! `ledger` crate — the expense-tracking domain core.
//!
//! Holds the API entity types, the row↔entity mapper, the validation
//! rules, the resolver set (one operation per API field), and the
//! transient in-memory message store.  Transport and persistence details
//! live in the `api` and `db` crates respectively.

pub mod error;
pub mod mapper;
pub mod messages;
pub mod models;
pub mod resolvers;
pub mod validation;

pub use error::LedgerError;
pub use messages::MessageStore;
pub use models::{Expense, Message, NewExpense, User};
pub use resolvers::Resolvers;

#[cfg(test)]
mod ledger_tests;
