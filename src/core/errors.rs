use thiserror::Error;
use crate::models::models::{PostId, UserId};

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Not Found: user {0}")]
    UnknownUser(UserId),
    #[error("Not Found: post {0}")]
    UnknownPost(PostId),
    #[error("Bad Request: user {0} cannot follow themselves")]
    SelfFollow(UserId),
    #[error("Bad Request: post content is empty")]
    EmptyContent,
    #[error("Internal Error: failed to hash password: {0}")]
    PasswordHash(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;
