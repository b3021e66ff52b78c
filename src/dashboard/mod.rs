//! View models the dashboard cards are rendered from.

pub mod chart_session;
pub mod goals;
pub mod visualization;

pub use chart_session::{ChartHandle, ChartSession};
pub use goals::{most_urgent, Goal, GoalProgress};
pub use visualization::Visualization;
