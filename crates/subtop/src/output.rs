use crate::prelude::{print, println, *};
use colored::Colorize;
use serde_json::Value;
use subtop_core::listing::{display_value, PostRecord, TopQuery};

/// Convert posts to an indented JSON array
fn format_posts_json(posts: &[PostRecord]) -> Result<String> {
    serde_json::to_string_pretty(posts).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn or_none(value: &Option<Value>) -> String {
    value
        .as_ref()
        .map_or_else(|| "None".to_string(), display_value)
}

/// Convert posts to one labelled block per post
fn format_posts_text(posts: &[PostRecord], query: &TopQuery) -> String {
    let mut result = format!(
        "{}\n\n",
        format!(
            "Fetching top {} posts from r/{}...",
            query.limit, query.community
        )
        .bright_cyan()
    );

    for (idx, post) in posts.iter().enumerate() {
        result.push_str(&format!(
            "{}\n",
            format!("--- Post #{} ---", idx + 1).yellow().bold()
        ));
        result.push_str(&format!(
            "{} {}\n",
            "Title:".green(),
            or_none(&post.title).white().bold()
        ));
        result.push_str(&format!("{} u/{}\n", "Author:".green(), or_none(&post.author)));
        result.push_str(&format!(
            "{} {}\n",
            "Score:".green(),
            or_none(&post.score).bright_yellow()
        ));
        result.push_str(&format!("{} {}\n", "Link:".green(), or_none(&post.url).cyan()));
        result.push_str(&format!(
            "{} {}\n\n",
            "Comments:".green(),
            post.permalink.cyan()
        ));
    }

    result
}

pub fn output_json(posts: &[PostRecord]) -> Result<()> {
    let json = format_posts_json(posts)?;
    println!("{}", json);
    Ok(())
}

pub fn output_formatted(posts: &[PostRecord], query: &TopQuery) -> Result<()> {
    let formatted = format_posts_text(posts, query);
    print!("{}", formatted);
    Ok(())
}
