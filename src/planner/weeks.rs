use crate::models::{Topic, TopicKind, WeekPatch, WeekPlan};
use crate::planner::ids;

fn renumber(weeks: Vec<WeekPlan>) -> Vec<WeekPlan> {
    weeks
        .into_iter()
        .enumerate()
        .map(|(idx, week)| WeekPlan {
            week_number: idx as u32 + 1,
            ..week
        })
        .collect()
}

pub(crate) fn default_topic() -> Topic {
    Topic {
        id: ids::topic_id(),
        kind: TopicKind::Content,
        title: "New Content".to_string(),
        description: "Add your content here...".to_string(),
    }
}

/// Splices a new week (seeded with one default topic) into the sequence at
/// `position`, then renumbers every week. A position past the end appends.
pub fn add_week_at_position(weeks: &[WeekPlan], position: usize) -> Vec<WeekPlan> {
    let position = position.min(weeks.len());
    let new_week = WeekPlan {
        id: ids::week_id(),
        week_number: position as u32 + 1,
        title: format!("Week {}: New Week", position + 1),
        topics: vec![default_topic()],
    };

    let mut updated = weeks.to_vec();
    updated.insert(position, new_week);
    renumber(updated)
}

/// Applies one field patch to the matching week. Unknown ids are a no-op.
pub fn update_week(weeks: &[WeekPlan], week_id: &str, patch: &WeekPatch) -> Vec<WeekPlan> {
    weeks
        .iter()
        .map(|week| {
            if week.id != week_id {
                return week.clone();
            }
            let mut week = week.clone();
            match patch {
                WeekPatch::Title(title) => week.title = title.clone(),
                WeekPatch::Topics(topics) => week.topics = topics.clone(),
            }
            week
        })
        .collect()
}

/// Removes the matching week and renumbers the remainder from 1. Unknown ids
/// are a no-op.
pub fn delete_week(weeks: &[WeekPlan], week_id: &str) -> Vec<WeekPlan> {
    renumber(
        weeks
            .iter()
            .filter(|week| week.id != week_id)
            .cloned()
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week(id: &str, number: u32) -> WeekPlan {
        WeekPlan {
            id: id.to_string(),
            week_number: number,
            title: format!("Week {}", number),
            topics: vec![],
        }
    }

    #[test]
    fn add_week_into_empty_sequence() {
        let weeks = add_week_at_position(&[], 0);
        assert_eq!(weeks.len(), 1);
        assert_eq!(weeks[0].week_number, 1);
        assert_eq!(weeks[0].topics.len(), 1);
        assert_eq!(weeks[0].topics[0].kind, TopicKind::Content);
    }

    #[test]
    fn add_week_renumbers_all_siblings() {
        let start = vec![week("w1", 1), week("w2", 2), week("w3", 3)];
        let weeks = add_week_at_position(&start, 1);
        assert_eq!(weeks.len(), 4);
        let numbers: Vec<u32> = weeks.iter().map(|w| w.week_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(weeks[0].id, "w1");
        assert_eq!(weeks[2].id, "w2");
        assert_eq!(weeks[3].id, "w3");
    }

    #[test]
    fn add_week_past_the_end_appends() {
        let start = vec![week("w1", 1)];
        let weeks = add_week_at_position(&start, 99);
        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[1].week_number, 2);
        assert_eq!(weeks[0].id, "w1");
    }

    #[test]
    fn update_week_changes_only_the_target_field() {
        let start = vec![week("w1", 1), week("w2", 2)];
        let weeks = update_week(&start, "w2", &WeekPatch::Title("Revised".into()));
        assert_eq!(weeks[0], start[0]);
        assert_eq!(weeks[1].title, "Revised");
        assert_eq!(weeks[1].id, "w2");
        assert_eq!(weeks[1].week_number, 2);
    }

    #[test]
    fn update_week_replaces_topics_wholesale() {
        let start = vec![week("w1", 1), week("w2", 2)];
        let topics = vec![
            Topic {
                id: "t1".to_string(),
                kind: TopicKind::Reading,
                title: "Chapter one".to_string(),
                description: "Pages 1-20".to_string(),
            },
            Topic {
                id: "t2".to_string(),
                kind: TopicKind::Discussion,
                title: "Seminar".to_string(),
                description: String::new(),
            },
        ];
        let weeks = update_week(&start, "w1", &WeekPatch::Topics(topics.clone()));
        assert_eq!(weeks[0].topics, topics);
        assert_eq!(weeks[0].id, "w1");
        assert_eq!(weeks[0].week_number, 1);
        assert_eq!(weeks[0].title, start[0].title);
        assert_eq!(weeks[1], start[1]);
    }

    #[test]
    fn update_week_unknown_id_is_a_noop() {
        let start = vec![week("w1", 1)];
        let weeks = update_week(&start, "missing", &WeekPatch::Title("x".into()));
        assert_eq!(weeks, start);
    }

    #[test]
    fn delete_week_renumbers_the_rest() {
        let start = vec![week("w1", 1), week("w2", 2), week("w3", 3)];
        let weeks = delete_week(&start, "w2");
        assert_eq!(weeks.len(), 2);
        let numbers: Vec<u32> = weeks.iter().map(|w| w.week_number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(weeks[1].id, "w3");
    }

    #[test]
    fn delete_week_unknown_id_is_a_noop() {
        let start = vec![week("w1", 1), week("w2", 2)];
        assert_eq!(delete_week(&start, "nope"), start);
    }

    #[test]
    fn delete_last_week_leaves_empty_sequence() {
        let start = vec![week("w1", 1)];
        assert!(delete_week(&start, "w1").is_empty());
    }
}
