use std::collections::HashMap;
use crate::config::GraphConfig;
use crate::core::errors::{GraphError, Result};
use crate::follow::FollowGraph;
use crate::models::models::{Post, PostId, User, UserId};

/// Registry owning every user (and through them profiles and posts) plus the
/// follow graph. Entities reference each other by id only.
#[derive(Debug, Default)]
pub struct Network {
    pub(crate) config: GraphConfig,
    pub(crate) users: Vec<User>,
    pub(crate) user_index: HashMap<UserId, usize>,
    // post id -> (user slot, post slot); posts are never removed or reparented
    pub(crate) post_index: HashMap<PostId, (usize, usize)>,
    pub(crate) graph: FollowGraph,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Network {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn user(&self, id: UserId) -> Result<&User> {
        self.user_index
            .get(&id)
            .map(|&slot| &self.users[slot])
            .ok_or(GraphError::UnknownUser(id))
    }

    pub(crate) fn user_mut(&mut self, id: UserId) -> Result<&mut User> {
        match self.user_index.get(&id) {
            Some(&slot) => Ok(&mut self.users[slot]),
            None => Err(GraphError::UnknownUser(id)),
        }
    }

    pub(crate) fn ensure_user(&self, id: UserId) -> Result<()> {
        if self.user_index.contains_key(&id) {
            Ok(())
        } else {
            Err(GraphError::UnknownUser(id))
        }
    }

    /// Users in registration order.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    pub fn post(&self, id: PostId) -> Result<&Post> {
        self.post_index
            .get(&id)
            .map(|&(user_slot, post_slot)| &self.users[user_slot].profile.posts[post_slot])
            .ok_or(GraphError::UnknownPost(id))
    }

    pub(crate) fn post_mut(&mut self, id: PostId) -> Result<&mut Post> {
        match self.post_index.get(&id) {
            Some(&(user_slot, post_slot)) => {
                Ok(&mut self.users[user_slot].profile.posts[post_slot])
            }
            None => Err(GraphError::UnknownPost(id)),
        }
    }

    /// Drops every user, post and follow edge. Configuration is kept.
    pub fn reset(&mut self) {
        self.users.clear();
        self.user_index.clear();
        self.post_index.clear();
        self.graph = FollowGraph::default();
        tracing::info!("network reset");
    }
}
