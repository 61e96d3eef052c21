use crate::core::errors::{GraphError, Result};
use crate::core::helpers::now_iso;
use crate::models::models::{Post, PostId, UserId};
use crate::network::Network;

/// Criteria for [`Network::search_posts`]. Unset fields match everything.
#[derive(Clone, Debug, Default)]
pub struct PostFilter {
    pub author: Option<UserId>,
    /// Case-insensitive substring of the post content.
    pub contains: Option<String>,
    pub min_likes: Option<u64>,
    /// Only posts whose author this user currently follows.
    pub followed_by: Option<UserId>,
}

impl PostFilter {
    pub fn by_author(author: UserId) -> Self {
        PostFilter {
            author: Some(author),
            ..Self::default()
        }
    }

    pub fn containing(text: &str) -> Self {
        PostFilter {
            contains: Some(text.to_string()),
            ..Self::default()
        }
    }

    pub fn followed_by(user: UserId) -> Self {
        PostFilter {
            followed_by: Some(user),
            ..Self::default()
        }
    }

    pub fn with_min_likes(mut self, likes: u64) -> Self {
        self.min_likes = Some(likes);
        self
    }
}

impl Network {
    pub fn post_message(&mut self, author_id: UserId, content: &str) -> Result<PostId> {
        if content.is_empty() && !self.config.allow_empty_posts {
            tracing::warn!(user_id = %author_id, "rejected empty post");
            return Err(GraphError::EmptyContent);
        }

        let slot = *self
            .user_index
            .get(&author_id)
            .ok_or(GraphError::UnknownUser(author_id))?;

        let post = Post::new(author_id, content.to_string(), now_iso());
        let id = post.id;

        let posts = &mut self.users[slot].profile.posts;
        self.post_index.insert(id, (slot, posts.len()));
        posts.push(post);

        tracing::info!(user_id = %author_id, post_id = %id, "message posted successfully");
        Ok(id)
    }

    pub fn like(&mut self, post_id: PostId) -> Result<u64> {
        let post = self.post_mut(post_id)?;
        post.like();
        tracing::debug!(post_id = %post_id, likes = post.likes(), "post liked");
        Ok(post.likes())
    }

    pub fn dislike(&mut self, post_id: PostId) -> Result<u64> {
        let post = self.post_mut(post_id)?;
        post.dislike();
        tracing::debug!(post_id = %post_id, dislikes = post.dislikes(), "post disliked");
        Ok(post.dislikes())
    }

    pub fn comment(&mut self, post_id: PostId, user_id: UserId, text: &str) -> Result<()> {
        self.ensure_user(user_id)?;
        let post = self.post_mut(post_id)?;
        post.comment(user_id, text);
        tracing::debug!(post_id = %post_id, user_id = %user_id, comments = post.comments().len(), "comment added");
        Ok(())
    }

    /// Posts matching every set criterion, grouped by author in registration
    /// order and in authorship order within each author.
    pub fn search_posts(&self, filter: &PostFilter) -> Vec<&Post> {
        let needle = filter.contains.as_ref().map(|s| s.to_lowercase());

        self.users
            .iter()
            .filter(|u| filter.author.map_or(true, |a| a == u.id))
            .filter(|u| {
                filter
                    .followed_by
                    .map_or(true, |follower| self.graph.is_following(follower, u.id))
            })
            .flat_map(|u| u.profile.posts().iter())
            .filter(|p| filter.min_likes.map_or(true, |min| p.likes() >= min))
            .filter(|p| {
                needle
                    .as_ref()
                    .map_or(true, |n| p.content().to_lowercase().contains(n.as_str()))
            })
            .collect()
    }
}
