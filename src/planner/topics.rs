use crate::models::{Topic, TopicKind, TopicPatch, WeekPlan};
use crate::planner::ids;

/// Appends a fresh default topic to the matching week's list. Unknown week
/// ids are a no-op.
pub fn add_topic_to_week(weeks: &[WeekPlan], week_id: &str) -> Vec<WeekPlan> {
    weeks
        .iter()
        .map(|week| {
            if week.id != week_id {
                return week.clone();
            }
            let mut week = week.clone();
            week.topics.push(Topic {
                id: ids::topic_id(),
                kind: TopicKind::Content,
                title: "New Topic".to_string(),
                description: "Add your content here...".to_string(),
            });
            week
        })
        .collect()
}

/// Applies one field patch to the matching topic, leaving its siblings and
/// every other week untouched. Unknown week or topic ids are a no-op.
pub fn update_topic_in_week(
    weeks: &[WeekPlan],
    week_id: &str,
    topic_id: &str,
    patch: &TopicPatch,
) -> Vec<WeekPlan> {
    weeks
        .iter()
        .map(|week| {
            if week.id != week_id {
                return week.clone();
            }
            let mut week = week.clone();
            for topic in week.topics.iter_mut() {
                if topic.id != topic_id {
                    continue;
                }
                match patch {
                    TopicPatch::Kind(kind) => topic.kind = *kind,
                    TopicPatch::Title(title) => topic.title = title.clone(),
                    TopicPatch::Description(description) => {
                        topic.description = description.clone()
                    }
                }
            }
            week
        })
        .collect()
}

/// Removes the matching topic from its week. No renumbering: topics carry no
/// positional field, order is just list order.
pub fn delete_topic_from_week(weeks: &[WeekPlan], week_id: &str, topic_id: &str) -> Vec<WeekPlan> {
    weeks
        .iter()
        .map(|week| {
            if week.id != week_id {
                return week.clone();
            }
            let mut week = week.clone();
            week.topics.retain(|topic| topic.id != topic_id);
            week
        })
        .collect()
}

/// Replaces the matching week's topic list wholesale with the caller-supplied
/// order. No permutation check: the caller owns the reorder computation.
pub fn reorder_topics_in_week(
    weeks: &[WeekPlan],
    week_id: &str,
    new_order: &[Topic],
) -> Vec<WeekPlan> {
    weeks
        .iter()
        .map(|week| {
            if week.id != week_id {
                return week.clone();
            }
            let mut week = week.clone();
            week.topics = new_order.to_vec();
            week
        })
        .collect()
}
