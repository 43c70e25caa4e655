use serde::{Deserialize, Serialize};

/// One unit of a curriculum. `week_number` is 1-based and always mirrors the
/// week's index in the containing sequence; the planner renumbers after every
/// structural change, so it is never settable on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekPlan {
    pub id: String,
    pub week_number: u32,
    pub title: String,
    // A missing "topics" field on the wire normalizes to an empty list.
    #[serde(default)]
    pub topics: Vec<Topic>,
}

/// A typed content item belonging to exactly one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TopicKind,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicKind {
    Content,
    Assignment,
    Reading,
    Lecture,
    Discussion,
}

/// The legal single-field updates on a week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "lowercase")]
pub enum WeekPatch {
    Title(String),
    Topics(Vec<Topic>),
}

/// The legal single-field updates on a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "lowercase")]
pub enum TopicPatch {
    #[serde(rename = "type")]
    Kind(TopicKind),
    Title(String),
    Description(String),
}
