//! # Finance Tracker Domain
//!
//! Contains the business logic of the finance tracker mini app.
//!
//! This crate owns the financial state and the screen state of a session and
//! knows nothing about how either is rendered. The frontend calls into it on
//! every UI event and re-renders from its read accessors afterwards.
//!
//! ## Module Organization
//!
//! - **ledger**: Aggregates and transaction histories, income/expense recording
//! - **navigator**: Current screen, transitions and footer tab derivation
//! - **money_management**: Amount parsing and currency formatting
//! - **bridge**: Capabilities provided by the host platform and the browser
//! - **notification**: Routing of user-facing notifications
//! - **bot_relay**: Outbound event messages for the companion bot
//! - **goals**: Read-only savings goals and progress calculations
//! - **insights**: Rotating tips shown on the main screen
//! - **clock**: Time source for ids, dates and timestamps
//! - **session**: The owned application context tying everything together
//!
//! ## Business Rules
//!
//! - Free balance is always total income minus total expenses
//! - Amounts are positive whole currency units
//! - An expense larger than the free balance is rejected, never clamped
//! - A rejected transaction leaves the ledger untouched
//! - Exactly one screen is active at any time

pub mod bot_relay;
pub mod bridge;
pub mod clock;
pub mod goals;
pub mod insights;
pub mod ledger;
pub mod money_management;
pub mod navigator;
pub mod notification;
pub mod session;

#[cfg(test)]
mod test_utils;

pub use bot_relay::*;
pub use bridge::*;
pub use clock::*;
pub use goals::*;
pub use insights::*;
pub use ledger::*;
pub use money_management::*;
pub use navigator::*;
pub use notification::*;
pub use session::*;
