//! Resolver set — one operation per API field.
//!
//! Each resolver orchestrates validation → store gateway → mapper and
//! performs at most one read-then-write round trip.  No resolver calls
//! another resolver.

use tracing::{debug, info};
use uuid::Uuid;

use db::{repository, DbPool};

use crate::{
    error::LedgerError,
    messages::MessageStore,
    models::{Expense, Message, NewExpense, User},
    validation,
};

/// The full operation set, sharing the connection pool and the transient
/// message store across concurrent calls.
#[derive(Debug, Clone)]
pub struct Resolvers {
    pool: DbPool,
    messages: MessageStore,
}

impl Resolvers {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            messages: MessageStore::new(),
        }
    }

    // ------ users ------

    /// Create a user with a fresh id and return it.
    pub async fn create_user(&self, name: &str) -> Result<User, LedgerError> {
        let row = repository::users::insert_user(&self.pool, name).await?;
        info!(id = %row.id, "user created");
        Ok(row.into())
    }

    /// All users, newest first.
    pub async fn list_users(&self) -> Result<Vec<User>, LedgerError> {
        let rows = repository::users::list_users(&self.pool).await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    // ------ expenses ------

    /// Validate and persist a new expense.
    ///
    /// The user-existence read and the insert share one transaction, so a
    /// concurrent user deletion cannot slip between check and write.
    /// Checks run in a fixed order: user existence, then amount, then
    /// description — the first violation is the one reported, and nothing
    /// is written.
    pub async fn create_expense(&self, input: NewExpense) -> Result<Expense, LedgerError> {
        let mut tx = self.pool.begin().await.map_err(db::DbError::from)?;

        let user_exists = repository::users::user_exists(&mut *tx, input.user_id).await?;
        validation::validate_new_expense(user_exists, &input)?;

        let row = repository::expenses::insert_expense(
            &mut *tx,
            &input.name,
            input.amount,
            &input.description,
            input.user_id,
        )
        .await?;
        tx.commit().await.map_err(db::DbError::from)?;

        info!(id = %row.id, user_id = %row.user_id, "expense created");
        Ok(row.into())
    }

    /// All expenses, store-default order.
    pub async fn list_expenses(&self) -> Result<Vec<Expense>, LedgerError> {
        let rows = repository::expenses::list_expenses(&self.pool).await?;
        Ok(rows.into_iter().map(Expense::from).collect())
    }

    /// One user's expenses, newest first.  An unknown user id yields an
    /// empty vec rather than an error — this read is permissive.
    pub async fn list_expenses_by_user(&self, user_id: Uuid) -> Result<Vec<Expense>, LedgerError> {
        let rows = repository::expenses::list_expenses_by_user(&self.pool, user_id).await?;
        Ok(rows.into_iter().map(Expense::from).collect())
    }

    /// Sum of all expense amounts; 0 when none exist.  The aggregate is
    /// computed by the store, not by fetching rows.
    pub async fn total_expense(&self) -> Result<f64, LedgerError> {
        let total = repository::expenses::sum_amounts(&self.pool).await?;
        Ok(total)
    }

    /// Replace amount and description of an existing expense.
    ///
    /// The new values are re-validated first; user existence is not
    /// re-checked since `user_id` is immutable.  A missing id fails with
    /// `ExpenseNotFound` and writes nothing.
    pub async fn update_expense(
        &self,
        id: Uuid,
        amount: f64,
        description: &str,
    ) -> Result<Expense, LedgerError> {
        validation::validate_update(amount, description)?;

        let row = repository::expenses::update_expense(&self.pool, id, amount, description)
            .await?
            .ok_or(LedgerError::ExpenseNotFound(id))?;

        info!(id = %row.id, "expense updated");
        Ok(row.into())
    }

    /// Delete an expense; returns whether a row was actually removed.
    ///
    /// A missing id is a `false` result, not an error.
    pub async fn delete_expense(&self, id: Uuid) -> Result<bool, LedgerError> {
        let affected = repository::expenses::delete_expense(&self.pool, id).await?;
        debug!(id = %id, affected, "expense delete");
        Ok(affected > 0)
    }

    // ------ messages ------

    /// Append a transient message and return it.
    pub async fn add_message(&self, text: &str) -> Message {
        self.messages.add(text).await
    }

    /// All transient messages in insertion order.
    pub async fn list_messages(&self) -> Vec<Message> {
        self.messages.list().await
    }
}
