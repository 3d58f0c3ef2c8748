//! Inspect command implementation.

use blogapi_core::{EntityStore, Post, User};
use serde::Serialize;

/// Contents of a freshly started store.
#[derive(Debug, Serialize)]
pub struct InspectResult {
    /// Number of users.
    pub user_count: usize,
    /// Number of posts.
    pub post_count: usize,
    /// Users, without passwords.
    pub users: Vec<User>,
    /// Posts with authors joined (if requested).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posts: Option<Vec<Post>>,
}

/// Runs the inspect command.
pub fn run(empty: bool, show_posts: bool, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store = if empty {
        EntityStore::new()
    } else {
        EntityStore::seeded()
    };

    let result = InspectResult {
        user_count: store.user_count(),
        post_count: store.post_count(),
        users: store.find_all_users(),
        posts: show_posts.then(|| store.find_all_posts()),
    };

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        _ => {
            print_text_output(&result);
        }
    }

    Ok(())
}

fn print_text_output(result: &InspectResult) {
    println!("Users: {}", result.user_count);
    for user in &result.users {
        println!("  #{} {} <{}>", user.id, user.name, user.email);
    }
    println!("Posts: {}", result.post_count);
    if let Some(posts) = &result.posts {
        for post in posts {
            let author = post
                .author
                .as_ref()
                .map_or("?", |a| a.name.as_str());
            let state = if post.published { "published" } else { "draft" };
            println!("  #{} {:?} by {} ({})", post.id, post.title, author, state);
        }
    }
}
