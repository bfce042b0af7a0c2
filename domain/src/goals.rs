//! Savings goals shown on the main screen.
//!
//! Goals are read-only for now. Creating one is a placeholder action that
//! only tells the user the feature is coming.

use shared::Goal;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GoalBoard {
    goals: Vec<Goal>,
}

impl GoalBoard {
    pub fn new(goals: Vec<Goal>) -> Self {
        Self { goals }
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Sum saved across all goals
    pub fn total_saved(&self) -> i64 {
        self.goals.iter().map(|goal| goal.saved).sum()
    }
}

/// Saved share of the target in whole percent, clamped to 0..=100
pub fn progress_percent(goal: &Goal) -> u8 {
    if goal.target <= 0 {
        return 0;
    }
    let percent = (goal.saved.max(0) as i128 * 100) / goal.target as i128;
    percent.clamp(0, 100) as u8
}

/// Amount still missing to reach the target
pub fn remaining(goal: &Goal) -> i64 {
    (goal.target - goal.saved).max(0)
}
