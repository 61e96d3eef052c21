use crate::core::errors::Result;
use crate::core::helpers::{hash_password, verify_password};
use crate::models::models::{
    CommentSnapshot, Post, PostSnapshot, Profile, ProfileInfo, ProfileSnapshot, User, UserId,
    UserRef, UserSnapshot,
};
use crate::network::Network;

impl Network {
    pub fn register_user(&mut self, name: &str, email: &str, password: &str) -> Result<UserId> {
        let id = UserId::new();

        let user = User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            password_hash: hash_password(password)?,
            profile: Profile::default(),
        };

        self.user_index.insert(id, self.users.len());
        self.users.push(user);

        tracing::info!(user_id = %id, "registered user {}", name);
        Ok(id)
    }

    pub fn edit_profile_info(&mut self, user_id: UserId, info: ProfileInfo) -> Result<()> {
        let user = self.user_mut(user_id)?;
        let keys: Vec<String> = info.keys().cloned().collect();
        user.profile.update_info(info);

        tracing::info!(user_id = %user_id, ?keys, "profile information updated");
        Ok(())
    }

    /// Checks a candidate password against the stored hash. No session is created.
    pub fn verify_password(&self, user_id: UserId, candidate: &str) -> Result<bool> {
        let user = self.user(user_id)?;
        Ok(verify_password(candidate, &user.password_hash))
    }

    pub fn snapshot(&self, user_id: UserId) -> Result<UserSnapshot> {
        let user = self.user(user_id)?;

        let posts = user
            .profile
            .posts()
            .iter()
            .map(|post| self.post_snapshot(post))
            .collect::<Result<Vec<_>>>()?;

        Ok(UserSnapshot {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            profile: ProfileSnapshot {
                info: user.profile.info().clone(),
                posts,
            },
            following: self.user_refs(self.graph.followings(user_id))?,
            followers: self.user_refs(self.graph.followers(user_id))?,
        })
    }

    fn user_ref(&self, id: UserId) -> Result<UserRef> {
        let user = self.user(id)?;
        Ok(UserRef {
            id,
            name: user.name.clone(),
        })
    }

    fn user_refs(&self, ids: &[UserId]) -> Result<Vec<UserRef>> {
        ids.iter().map(|&id| self.user_ref(id)).collect()
    }

    fn post_snapshot(&self, post: &Post) -> Result<PostSnapshot> {
        let comments = post
            .comments()
            .iter()
            .map(|c| -> Result<CommentSnapshot> {
                Ok(CommentSnapshot {
                    user: self.user_ref(c.user)?,
                    comment: c.comment.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(PostSnapshot {
            id: post.id,
            author: self.user_ref(post.author)?,
            content: post.content().to_string(),
            created_at: post.created_at.clone(),
            likes: post.likes(),
            dislikes: post.dislikes(),
            comments,
        })
    }
}
