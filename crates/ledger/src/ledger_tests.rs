//! Unit tests for validation, mapping, and the message store.
//!
//! These run without a real Postgres connection: the validation layer is
//! pure (the user-existence fact is passed in), the mapper only reshapes
//! structs, and the message store is in-process.  Properties that need a
//! live store (totals across create/delete, update-in-place) are encoded
//! in the repository contracts and exercised against a real database.

use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use db::models::{ExpenseRow, UserRow};

use crate::error::LedgerError;
use crate::mapper::{expense_to_row, user_to_row};
use crate::messages::MessageStore;
use crate::models::{Expense, NewExpense, User};
use crate::validation::{
    validate_amount, validate_description, validate_new_expense, validate_update,
};

fn new_expense(amount: f64, description: &str) -> NewExpense {
    NewExpense {
        name: "groceries".into(),
        amount,
        description: description.into(),
        user_id: Uuid::new_v4(),
    }
}

// ============================================================
// Validation rules and their ordering
// ============================================================

#[test]
fn valid_payload_passes() {
    let input = new_expense(42.5, "weekly shop");
    assert!(validate_new_expense(true, &input).is_ok());
}

#[test]
fn zero_and_negative_amounts_are_rejected() {
    for amount in [0.0, -5.0, -0.01] {
        let input = new_expense(amount, "weekly shop");
        match validate_new_expense(true, &input) {
            Err(LedgerError::InvalidAmount(got)) => assert_eq!(got, amount),
            other => panic!("expected InvalidAmount, got {other:?}"),
        }
    }
}

#[test]
fn nan_amount_is_rejected() {
    assert!(matches!(
        validate_amount(f64::NAN),
        Err(LedgerError::InvalidAmount(_))
    ));
}

#[test]
fn short_descriptions_are_rejected_after_trimming() {
    for description in ["", "ab", "  x  ", " ab ", "\t\n"] {
        let input = new_expense(10.0, description);
        assert!(matches!(
            validate_new_expense(true, &input),
            Err(LedgerError::InvalidDescription)
        ));
    }
}

#[test]
fn three_trimmed_chars_is_enough() {
    assert!(validate_description("  abc  ").is_ok());
    assert!(validate_description("abc").is_ok());
}

#[test]
fn missing_user_is_reported_before_other_violations() {
    // Amount and description are both invalid too; the user reference
    // must still win.
    let input = new_expense(-5.0, "x");
    match validate_new_expense(false, &input) {
        Err(LedgerError::UserNotFound(id)) => assert_eq!(id, input.user_id),
        other => panic!("expected UserNotFound, got {other:?}"),
    }
}

#[test]
fn amount_is_checked_before_description() {
    let input = new_expense(-1.0, "x");
    assert!(matches!(
        validate_new_expense(true, &input),
        Err(LedgerError::InvalidAmount(_))
    ));
}

#[test]
fn update_revalidates_amount_and_description() {
    assert!(validate_update(200.0, "new desc").is_ok());
    assert!(matches!(
        validate_update(0.0, "new desc"),
        Err(LedgerError::InvalidAmount(_))
    ));
    assert!(matches!(
        validate_update(200.0, " a "),
        Err(LedgerError::InvalidDescription)
    ));
}

// ============================================================
// Mapper round-trips and wire shape
// ============================================================

#[test]
fn expense_row_round_trips_through_entity() {
    let row = ExpenseRow {
        id: Uuid::new_v4(),
        name: "lunch".into(),
        amount: 12.75,
        description: "team lunch".into(),
        user_id: Uuid::new_v4(),
        created_at: Utc::now(),
    };

    let entity = Expense::from(row.clone());
    assert_eq!(entity.id, row.id);
    assert_eq!(entity.amount, row.amount);
    assert_eq!(entity.user_id, row.user_id);

    let back = expense_to_row(&entity, row.created_at);
    assert_eq!(back, row);
}

#[test]
fn user_row_round_trips_through_entity() {
    let row = UserRow {
        id: Uuid::new_v4(),
        name: "alice".into(),
        created_at: Utc::now(),
    };

    let entity = User::from(row.clone());
    let back = user_to_row(&entity, row.created_at);
    assert_eq!(back, row);
}

#[test]
fn expense_serializes_with_camel_case_user_id() {
    let expense = Expense {
        id: Uuid::nil(),
        name: "lunch".into(),
        amount: 1.5,
        description: "team lunch".into(),
        user_id: Uuid::nil(),
    };

    let value = serde_json::to_value(&expense).unwrap();
    assert!(value.get("userId").is_some());
    assert!(value.get("user_id").is_none());
}

#[test]
fn new_expense_deserializes_from_camel_case() {
    let user_id = Uuid::new_v4();
    let input: NewExpense = serde_json::from_value(json!({
        "name": "rent",
        "amount": 900.0,
        "description": "march rent",
        "userId": user_id,
    }))
    .unwrap();

    assert_eq!(input.user_id, user_id);
    assert_eq!(input.amount, 900.0);
}

// ============================================================
// Message store
// ============================================================

#[tokio::test]
async fn messages_keep_insertion_order_and_unique_ids() {
    let store = MessageStore::new();
    let first = store.add("first").await;
    let second = store.add("second").await;

    assert_ne!(first.id, second.id);

    let all = store.list().await;
    assert_eq!(all.len(), 2);
    assert_eq!(all[0], first);
    assert_eq!(all[1], second);
}

#[tokio::test]
async fn concurrent_appends_are_not_lost() {
    const TASKS: usize = 8;
    const PER_TASK: usize = 25;

    let store = MessageStore::new();
    let mut handles = Vec::with_capacity(TASKS);

    for t in 0..TASKS {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            for i in 0..PER_TASK {
                store.add(&format!("task {t} message {i}")).await;
            }
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(store.list().await.len(), TASKS * PER_TASK);
}

#[tokio::test]
async fn message_list_starts_empty() {
    let store = MessageStore::new();
    assert!(store.list().await.is_empty());
}
