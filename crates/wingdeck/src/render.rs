// SPDX-FileCopyrightText: 2026 Wingdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared terminal rendering for application rows and search hits.

use colored::Colorize;

use wingdeck_core::{Application, PackageSuggestion};

/// Longest URL shown in a row before it is cut off.
const URL_DISPLAY_LIMIT: usize = 50;

/// Renders the full list, or the empty-state hint.
pub fn render_apps(apps: &[Application]) {
    if apps.is_empty() {
        println!("{}", "No apps added yet".bold());
        println!("Start by adding your first application to create installation scripts.");
        return;
    }
    for app in apps {
        render_app(app);
    }
}

/// One application as a labelled card.
pub fn render_app(app: &Application) {
    println!("{} {}", format!("[{}]", app.id).dimmed(), app.name.bold());
    if let Some(winget_id) = &app.winget_id {
        println!("    Winget ID:     {winget_id}");
    }
    if let Some(url) = &app.download_url {
        println!("    Download URL:  {}", truncate_url(url));
    }
    if let Some(args) = &app.args {
        println!("    Arguments:     {args}");
    }
}

/// One numbered search hit.
pub fn render_suggestion(number: usize, suggestion: &PackageSuggestion) {
    let detail = match &suggestion.publisher {
        Some(publisher) => format!("{} ({publisher})", suggestion.name),
        None => suggestion.name.clone(),
    };
    println!("  {number}. {}  {detail}", suggestion.id.bold());
}

/// Cuts long URLs down to their first 50 characters.
pub fn truncate_url(url: &str) -> String {
    if url.chars().count() > URL_DISPLAY_LIMIT {
        let head: String = url.chars().take(URL_DISPLAY_LIMIT).collect();
        format!("{head}...")
    } else {
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_urls_pass_through() {
        let url = "https://example.com/a.exe";
        assert_eq!(truncate_url(url), url);
    }

    #[test]
    fn boundary_url_is_untouched() {
        let url = "x".repeat(50);
        assert_eq!(truncate_url(&url), url);
    }

    #[test]
    fn long_urls_keep_the_first_fifty_characters() {
        let url = format!("https://downloads.example.com/{}", "y".repeat(60));
        let shown = truncate_url(&url);
        assert_eq!(shown.chars().count(), 53);
        assert!(shown.ends_with("..."));
        assert!(url.starts_with(shown.trim_end_matches("...")));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let url = "ü".repeat(60);
        let shown = truncate_url(&url);
        assert_eq!(shown.chars().count(), 53);
    }
}
