// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::RecordError;
use crate::models::{Expense, ExpenseDraft};
use rust_decimal::Decimal;

/// Creates, edits and removes expense records.
pub trait ExpenseRepository {
    fn list(&self) -> &[Expense];

    fn get(&self, id: i64) -> Result<&Expense, RecordError>;

    fn create(&mut self, draft: ExpenseDraft) -> Result<Expense, RecordError>;

    fn update(&mut self, id: i64, draft: ExpenseDraft) -> Result<Expense, RecordError>;

    fn delete(&mut self, id: i64) -> Result<Expense, RecordError>;
}

/// Keeps records in process memory only; every change is logged and lost on
/// exit.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRepository {
    records: Vec<Expense>,
}

impl InMemoryRepository {
    pub fn new(records: Vec<Expense>) -> Self {
        Self { records }
    }

    pub fn into_records(self) -> Vec<Expense> {
        self.records
    }

    fn next_id(&self) -> i64 {
        self.records.iter().map(|e| e.id).max().unwrap_or(0) + 1
    }

    fn position(&self, id: i64) -> Result<usize, RecordError> {
        self.records
            .iter()
            .position(|e| e.id == id)
            .ok_or(RecordError::NotFound(id))
    }
}

pub fn validate(draft: &ExpenseDraft) -> Result<(), RecordError> {
    if draft.amount < Decimal::ZERO {
        return Err(RecordError::NegativeAmount(draft.amount.to_string()));
    }
    if draft.category.trim().is_empty() {
        return Err(RecordError::MissingCategory);
    }
    Ok(())
}

fn build(id: i64, draft: ExpenseDraft) -> Expense {
    Expense {
        id,
        date: draft.date,
        category: draft.category.trim().to_string(),
        amount: draft.amount.round_dp(2),
        notes: draft
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty()),
    }
}

impl ExpenseRepository for InMemoryRepository {
    fn list(&self) -> &[Expense] {
        &self.records
    }

    fn get(&self, id: i64) -> Result<&Expense, RecordError> {
        self.position(id).map(|i| &self.records[i])
    }

    fn create(&mut self, draft: ExpenseDraft) -> Result<Expense, RecordError> {
        validate(&draft)?;
        let expense = build(self.next_id(), draft);
        tracing::info!(
            id = expense.id,
            date = %expense.date,
            category = %expense.category,
            amount = %expense.amount,
            "expense added"
        );
        self.records.push(expense.clone());
        Ok(expense)
    }

    fn update(&mut self, id: i64, draft: ExpenseDraft) -> Result<Expense, RecordError> {
        validate(&draft)?;
        let idx = self.position(id)?;
        let expense = build(id, draft);
        tracing::info!(
            id,
            date = %expense.date,
            category = %expense.category,
            amount = %expense.amount,
            "expense updated"
        );
        self.records[idx] = expense.clone();
        Ok(expense)
    }

    fn delete(&mut self, id: i64) -> Result<Expense, RecordError> {
        let idx = self.position(id)?;
        let removed = self.records.remove(idx);
        tracing::info!(id, "expense deleted");
        Ok(removed)
    }
}
