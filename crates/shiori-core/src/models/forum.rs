use chrono::{DateTime, Utc};
use serde::Serialize;

use super::common::NamedRef;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ForumSubBoard {
    pub id: Option<u64>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ForumBoard {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub subboards: Vec<ForumSubBoard>,
}

/// A board category and its boards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Forum {
    pub title: Option<String>,
    pub boards: Vec<ForumBoard>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ForumTopic {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: NamedRef,
    pub number_of_posts: Option<u32>,
    pub last_post_created_at: Option<DateTime<Utc>>,
    pub last_post_created_by: NamedRef,
    pub is_locked: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostCreator {
    pub id: Option<u64>,
    pub name: Option<String>,
    /// Read from the API's `forum_avator` key.
    pub forum_avatar: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ForumPost {
    pub id: Option<u64>,
    /// Position of the post within its topic.
    pub number: Option<u32>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: PostCreator,
    pub body: Option<String>,
    pub signature: Option<String>,
}

/// A topic with its posts, in thread order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ForumTopicDetails {
    pub title: Option<String>,
    pub posts: Vec<ForumPost>,
}
