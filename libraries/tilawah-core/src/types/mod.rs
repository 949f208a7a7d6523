mod chapter;
mod goals;
mod progress;
mod session;
mod stats;
mod verse;

pub use chapter::{Chapter, RevelationPlace, CHAPTER_COUNT};
pub use goals::{parse_goal_input, ReadingGoals};
pub use progress::{ProgressDraft, ProgressEntry, TrackingMode};
pub use session::{require_session, SessionState, UserSession};
pub use stats::{average_active_month, yearly_total, MonthlyPages, ReadingStats};
pub use verse::Verse;
