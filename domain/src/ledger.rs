//! Ledger domain logic for the finance tracker.
//!
//! The ledger is the only owner of the financial aggregates. Every accepted
//! transaction updates the totals and the free balance in the same call, so
//! `free_balance == total_income - total_expenses` holds after any sequence
//! of operations. Validation happens before anything is touched: a rejected
//! transaction leaves the ledger exactly as it was.

use crate::clock::{iso_date, Clock};
use crate::money_management::{parse_amount, AmountParseError};
use log::{debug, info};
use shared::{FinanceSummary, MiniAppConfig, Transaction, TransactionKind};
use thiserror::Error;

/// Reasons a transaction is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Enter a valid amount")]
    InvalidAmount,
    #[error("Insufficient funds")]
    InsufficientFunds,
}

impl From<AmountParseError> for LedgerError {
    fn from(_: AmountParseError) -> Self {
        LedgerError::InvalidAmount
    }
}

/// Placeholders for missing transaction fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDefaults {
    pub description: String,
    pub category: String,
}

impl Default for TransactionDefaults {
    fn default() -> Self {
        let config = MiniAppConfig::default();
        Self::from(&config)
    }
}

impl From<&MiniAppConfig> for TransactionDefaults {
    fn from(config: &MiniAppConfig) -> Self {
        Self {
            description: config.default_description.clone(),
            category: config.default_category.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    total_income: i64,
    total_expenses: i64,
    free_balance: i64,
    income_history: Vec<Transaction>,
    expense_history: Vec<Transaction>,
    defaults: TransactionDefaults,
}

impl Ledger {
    /// Empty ledger
    pub fn new(defaults: TransactionDefaults) -> Self {
        Self::with_opening(0, 0, Vec::new(), Vec::new(), defaults)
    }

    /// Ledger with opening totals and histories.
    ///
    /// The totals are authoritative and are not recomputed from the histories.
    pub fn with_opening(
        total_income: i64,
        total_expenses: i64,
        income_history: Vec<Transaction>,
        expense_history: Vec<Transaction>,
        defaults: TransactionDefaults,
    ) -> Self {
        Self {
            total_income,
            total_expenses,
            free_balance: total_income - total_expenses,
            income_history,
            expense_history,
            defaults,
        }
    }

    pub fn from_config(config: &MiniAppConfig) -> Self {
        let seed = &config.seed;
        Self::with_opening(
            seed.total_income,
            seed.total_expenses,
            seed.income_history.clone(),
            seed.expense_history.clone(),
            TransactionDefaults::from(config),
        )
    }

    /// Record an income entry from raw form input
    pub fn record_income(
        &mut self,
        amount_input: &str,
        description: Option<&str>,
        category: Option<&str>,
        clock: &dyn Clock,
    ) -> Result<Transaction, LedgerError> {
        let amount = Self::validate_amount(amount_input)?;
        let total_income = self.total_income.checked_add(amount).ok_or(LedgerError::InvalidAmount)?;
        let free_balance = self.free_balance.checked_add(amount).ok_or(LedgerError::InvalidAmount)?;

        let transaction = self.build_transaction(amount, description, category, clock);
        self.income_history.push(transaction.clone());
        self.total_income = total_income;
        self.free_balance = free_balance;

        info!("Recorded income of {} ({})", amount, transaction.category);
        Ok(transaction)
    }

    /// Record an expense entry from raw form input
    pub fn record_expense(
        &mut self,
        amount_input: &str,
        description: Option<&str>,
        category: Option<&str>,
        clock: &dyn Clock,
    ) -> Result<Transaction, LedgerError> {
        let amount = Self::validate_amount(amount_input)?;
        if amount > self.free_balance {
            debug!("Rejected expense of {}: free balance is {}", amount, self.free_balance);
            return Err(LedgerError::InsufficientFunds);
        }
        let total_expenses = self.total_expenses.checked_add(amount).ok_or(LedgerError::InvalidAmount)?;

        let transaction = self.build_transaction(amount, description, category, clock);
        self.expense_history.push(transaction.clone());
        self.total_expenses = total_expenses;
        self.free_balance -= amount;

        info!("Recorded expense of {} ({})", amount, transaction.category);
        Ok(transaction)
    }

    /// Record a transaction of either kind
    pub fn record(
        &mut self,
        kind: TransactionKind,
        amount_input: &str,
        description: Option<&str>,
        category: Option<&str>,
        clock: &dyn Clock,
    ) -> Result<Transaction, LedgerError> {
        match kind {
            TransactionKind::Income => self.record_income(amount_input, description, category, clock),
            TransactionKind::Expense => self.record_expense(amount_input, description, category, clock),
        }
    }

    pub fn snapshot(&self) -> FinanceSummary {
        FinanceSummary {
            total_income: self.total_income,
            total_expenses: self.total_expenses,
            free_balance: self.free_balance,
        }
    }

    pub fn income_history(&self) -> &[Transaction] {
        &self.income_history
    }

    pub fn expense_history(&self) -> &[Transaction] {
        &self.expense_history
    }

    pub fn history(&self, kind: TransactionKind) -> &[Transaction] {
        match kind {
            TransactionKind::Income => &self.income_history,
            TransactionKind::Expense => &self.expense_history,
        }
    }

    fn validate_amount(amount_input: &str) -> Result<i64, LedgerError> {
        let amount = parse_amount(amount_input).map_err(|e| {
            debug!("Rejected amount input {:?}: {}", amount_input, e);
            LedgerError::from(e)
        })?;
        if amount <= 0 {
            debug!("Rejected non-positive amount {}", amount);
            return Err(LedgerError::InvalidAmount);
        }
        Ok(amount)
    }

    fn build_transaction(
        &self,
        amount: i64,
        description: Option<&str>,
        category: Option<&str>,
        clock: &dyn Clock,
    ) -> Transaction {
        Transaction {
            id: clock.now_millis(),
            amount,
            description: non_empty_or(description, &self.defaults.description),
            category: non_empty_or(category, &self.defaults.category),
            date: iso_date(clock.today()),
        }
    }
}

fn non_empty_or(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}
