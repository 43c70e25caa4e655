//! The week-plan editor: pure operations over an ordered sequence of weeks,
//! each owning an ordered list of topics. Every operation takes the previous
//! sequence by reference and returns a fresh one, so callers get cheap
//! undo/redo and predictable re-renders. Targets that do not exist degrade to
//! a no-op rather than an error; the HTTP layer owns its own 404s.

pub mod ids;
pub mod topics;
pub mod weeks;

pub use topics::{add_topic_to_week, delete_topic_from_week, reorder_topics_in_week, update_topic_in_week};
pub use weeks::{add_week_at_position, delete_week, update_week};
