use std::collections::HashMap;
use crate::core::errors::{GraphError, Result};
use crate::models::models::{FollowOutcome, UnfollowOutcome, UserId};
use crate::network::Network;

/// Directed follow edges, kept in both directions. Lists preserve the order
/// in which edges were created.
#[derive(Debug, Default, Clone)]
pub struct FollowGraph {
    followings: HashMap<UserId, Vec<UserId>>,
    followers: HashMap<UserId, Vec<UserId>>,
}

impl FollowGraph {
    pub fn is_following(&self, follower_id: UserId, following_id: UserId) -> bool {
        self.followings
            .get(&follower_id)
            .is_some_and(|list| list.contains(&following_id))
    }

    pub fn follow(&mut self, follower_id: UserId, following_id: UserId) -> FollowOutcome {
        if self.is_following(follower_id, following_id) {
            return FollowOutcome::AlreadyFollowing;
        }

        self.followings.entry(follower_id).or_default().push(following_id);
        self.followers.entry(following_id).or_default().push(follower_id);
        FollowOutcome::Followed
    }

    pub fn unfollow(&mut self, follower_id: UserId, following_id: UserId) -> UnfollowOutcome {
        if !self.is_following(follower_id, following_id) {
            return UnfollowOutcome::NotFollowing;
        }

        if let Some(list) = self.followings.get_mut(&follower_id) {
            list.retain(|id| *id != following_id);
        }
        if let Some(list) = self.followers.get_mut(&following_id) {
            list.retain(|id| *id != follower_id);
        }
        UnfollowOutcome::Unfollowed
    }

    pub fn followings(&self, user_id: UserId) -> &[UserId] {
        self.followings.get(&user_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn followers(&self, user_id: UserId) -> &[UserId] {
        self.followers.get(&user_id).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Network {
    pub fn follow(&mut self, follower_id: UserId, target_id: UserId) -> Result<FollowOutcome> {
        self.ensure_user(follower_id)?;
        self.ensure_user(target_id)?;

        if follower_id == target_id && !self.config.allow_self_follow {
            tracing::warn!(user_id = %follower_id, "rejected self-follow");
            return Err(GraphError::SelfFollow(follower_id));
        }

        let outcome = self.graph.follow(follower_id, target_id);
        match outcome {
            FollowOutcome::Followed => {
                let target_name = &self.user(target_id)?.name;
                tracing::info!(user_id = %follower_id, target_id = %target_id, "now following {}", target_name);
            }
            FollowOutcome::AlreadyFollowing => {
                tracing::debug!(user_id = %follower_id, target_id = %target_id, "already following this user");
            }
        }
        Ok(outcome)
    }

    pub fn unfollow(&mut self, follower_id: UserId, target_id: UserId) -> Result<UnfollowOutcome> {
        self.ensure_user(follower_id)?;
        self.ensure_user(target_id)?;

        let outcome = self.graph.unfollow(follower_id, target_id);
        match outcome {
            UnfollowOutcome::Unfollowed => {
                let target_name = &self.user(target_id)?.name;
                tracing::info!(user_id = %follower_id, target_id = %target_id, "unfollowed {}", target_name);
            }
            UnfollowOutcome::NotFollowing => {
                tracing::debug!(user_id = %follower_id, target_id = %target_id, "not following this user");
            }
        }
        Ok(outcome)
    }

    pub fn following(&self, user_id: UserId) -> Result<&[UserId]> {
        self.ensure_user(user_id)?;
        Ok(self.graph.followings(user_id))
    }

    pub fn followers(&self, user_id: UserId) -> Result<&[UserId]> {
        self.ensure_user(user_id)?;
        Ok(self.graph.followers(user_id))
    }

    pub fn is_following(&self, follower_id: UserId, target_id: UserId) -> bool {
        self.graph.is_following(follower_id, target_id)
    }
}
