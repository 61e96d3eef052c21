pub mod config;
pub mod core;
pub mod follow;
pub mod models;
pub mod network;
pub mod posts;
pub mod users;

pub use crate::config::GraphConfig;
pub use crate::core::errors::{GraphError, Result};
pub use crate::core::seed::{seed_demo_data, DemoUsers};
pub use crate::follow::FollowGraph;
pub use crate::models::models::{
    Comment, FollowOutcome, Post, PostId, Profile, ProfileInfo, UnfollowOutcome, User, UserId,
    UserSnapshot,
};
pub use crate::network::Network;
pub use crate::posts::PostFilter;
