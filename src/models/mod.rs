pub mod class;
pub mod enrollment;
pub mod plan;

pub use class::{Class, ClassSummary, ClassWithWeeks, NewClassRequest, UpdateClassRequest};
pub use enrollment::{EnrolledStudent, Enrollment, JoinClassRequest};
pub use plan::{Topic, TopicKind, TopicPatch, WeekPatch, WeekPlan};
