use serde::{Serialize, Deserialize};
use std::fmt;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct UserId(Uuid);

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PostId(Uuid);

impl UserId {
    pub fn new() -> Self {
        UserId(Uuid::new_v4())
    }
}

impl PostId {
    pub fn new() -> Self {
        PostId(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Freeform profile attributes (bio, location, ...).
pub type ProfileInfo = serde_json::Map<String, serde_json::Value>;

#[derive(Clone, Debug)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub(crate) password_hash: String,
    pub profile: Profile,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Profile {
    pub(crate) posts: Vec<Post>,
    pub(crate) info: ProfileInfo,
}

impl Profile {
    /// Shallow merge: new keys are added, existing keys overwritten, the rest kept.
    pub fn update_info(&mut self, new_info: ProfileInfo) {
        self.info.extend(new_info);
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn info(&self) -> &ProfileInfo {
        &self.info
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Post {
    pub id: PostId,
    pub author: UserId,
    pub(crate) content: String,
    pub created_at: String,
    pub(crate) likes: u64,
    pub(crate) dislikes: u64,
    pub(crate) comments: Vec<Comment>,
}

impl Post {
    pub(crate) fn new(author: UserId, content: String, created_at: String) -> Self {
        Post {
            id: PostId::new(),
            author,
            content,
            created_at,
            likes: 0,
            dislikes: 0,
            comments: Vec::new(),
        }
    }

    pub fn like(&mut self) {
        self.likes += 1;
    }

    pub fn dislike(&mut self) {
        self.dislikes += 1;
    }

    pub fn comment(&mut self, user: UserId, comment: &str) {
        self.comments.push(Comment {
            user,
            comment: comment.to_string(),
        });
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn likes(&self) -> u64 {
        self.likes
    }

    pub fn dislikes(&self) -> u64 {
        self.dislikes
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    pub user: UserId,
    pub comment: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FollowOutcome {
    Followed,
    AlreadyFollowing,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnfollowOutcome {
    Unfollowed,
    NotFollowing,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct UserRef {
    pub id: UserId,
    pub name: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct CommentSnapshot {
    pub user: UserRef,
    pub comment: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct PostSnapshot {
    pub id: PostId,
    pub author: UserRef,
    pub content: String,
    pub created_at: String,
    pub likes: u64,
    pub dislikes: u64,
    pub comments: Vec<CommentSnapshot>,
}

#[derive(Serialize, Clone, Debug)]
pub struct ProfileSnapshot {
    pub info: ProfileInfo,
    pub posts: Vec<PostSnapshot>,
}

/// Read-only dump of one user. Never carries the password hash.
#[derive(Serialize, Clone, Debug)]
pub struct UserSnapshot {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub profile: ProfileSnapshot,
    pub following: Vec<UserRef>,
    pub followers: Vec<UserRef>,
}
