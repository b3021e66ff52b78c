use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time::parse_calendar_date;

/// A savings goal as listed by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub goal_name: String,
    #[serde(default)]
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    pub deadline: String,
}

/// The goal the summary card highlights.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub goal_name: String,
    pub deadline: NaiveDate,
    pub current_amount: f64,
    pub target_amount: f64,
    pub percent: f64,
}

/// Earliest-deadline goal that is still open: positive target not yet reached,
/// deadline after `today`.
pub fn most_urgent(goals: &[Goal], today: NaiveDate) -> Option<GoalProgress> {
    goals
        .iter()
        .filter(|goal| goal.target_amount > 0.0 && goal.current_amount < goal.target_amount)
        .filter_map(|goal| {
            let deadline = parse_calendar_date(&goal.deadline)?;
            (deadline > today).then_some((deadline, goal))
        })
        .min_by_key(|(deadline, _)| *deadline)
        .map(|(deadline, goal)| GoalProgress {
            goal_name: goal.goal_name.clone(),
            deadline,
            current_amount: goal.current_amount,
            target_amount: goal.target_amount,
            percent: goal.current_amount / goal.target_amount * 100.0,
        })
}
