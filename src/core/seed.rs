use serde_json::json;
use crate::core::errors::Result;
use crate::models::models::{ProfileInfo, UserId};
use crate::network::Network;

#[derive(Clone, Copy, Debug)]
pub struct DemoUsers {
    pub john: UserId,
    pub jane: UserId,
}

fn bio(text: &str) -> ProfileInfo {
    let mut info = ProfileInfo::new();
    info.insert("bio".to_string(), json!(text));
    info
}

/// Replays the demo session: two users posting, following each other, one
/// unfollow, bios, and reactions on Jane's first post.
pub fn seed_demo_data(network: &mut Network) -> Result<DemoUsers> {
    let john = network.register_user("John Doe", "john@example.com", "securepassword")?;
    let jane = network.register_user("Jane Smith", "jane@example.com", "pa$$w0rd")?;

    network.post_message(john, "Hello, World!")?;
    network.post_message(john, "This is an example post.")?;
    network.post_message(john, "Excited to join this social media platform!")?;

    let jane_first = network.post_message(jane, "Nice weather today!")?;
    network.post_message(jane, "Feeling great!")?;

    network.follow(john, jane)?;
    network.follow(jane, john)?;

    network.post_message(john, "I'm following Jane now!")?;
    network.post_message(jane, "I'm following John now!")?;

    network.post_message(john, "This is a post by John.")?;
    network.post_message(jane, "This is a post by Jane.")?;

    network.unfollow(john, jane)?;

    network.post_message(john, "I've unfollowed Jane.")?;
    network.post_message(jane, "I've unfollowed John.")?;

    network.edit_profile_info(john, bio("Passionate about coding!"))?;
    network.edit_profile_info(jane, bio("Travel enthusiast."))?;

    network.like(jane_first)?;
    network.dislike(jane_first)?;
    network.comment(jane_first, john, "Great post!")?;
    network.comment(jane_first, jane, "Thanks for the like!")?;

    Ok(DemoUsers { john, jane })
}
