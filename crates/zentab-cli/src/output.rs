//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use serde::Serialize;

use zentab_core::{Bookmark, Category, Collection, Document, Settings};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Check if output is in quiet mode
    pub fn is_quiet(&self) -> bool {
        matches!(self.format, OutputFormat::Quiet)
    }

    /// Check if output is JSON
    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }

    /// Print the active collection with all its categories and bookmarks
    pub fn print_document(&self, doc: &Document) {
        match self.format {
            OutputFormat::Human => {
                let active = doc.active_collection().map(|c| c.id.as_str());
                let tabs: Vec<String> = doc
                    .collections
                    .iter()
                    .map(|c| {
                        if Some(c.id.as_str()) == active {
                            format!("[{}]", c.title)
                        } else {
                            c.title.clone()
                        }
                    })
                    .collect();
                println!("{}", tabs.join("  "));
                println!();

                let categories = doc.active_categories();
                if categories.is_empty() {
                    println!("No categories in this collection.");
                    return;
                }
                for category in categories {
                    self.print_category_block(category);
                }
            }
            OutputFormat::Json => print_json(&doc.active_collection()),
            OutputFormat::Quiet => {
                if let Some(collection) = doc.active_collection() {
                    println!("{}", collection.id);
                }
            }
        }
    }

    fn print_category_block(&self, category: &Category) {
        println!(
            "{} {}",
            short_id(&category.id),
            display_title(&category.title)
        );
        if category.bookmarks.is_empty() {
            println!("    (empty)");
        }
        for bookmark in &category.bookmarks {
            println!(
                "    {} | {} | {}",
                short_id(&bookmark.id),
                truncate(&bookmark.title, 30),
                truncate(&bookmark.url, 50)
            );
        }
        println!();
    }

    /// Print all collections, marking the active one
    pub fn print_collections(&self, doc: &Document) {
        let active = doc.active_collection().map(|c| c.id.clone());
        match self.format {
            OutputFormat::Human => {
                for collection in &doc.collections {
                    let marker = if Some(&collection.id) == active.as_ref() {
                        "*"
                    } else {
                        " "
                    };
                    println!(
                        "{} {} | {} | {} categories, {} bookmarks",
                        marker,
                        short_id(&collection.id),
                        truncate(&collection.title, 30),
                        collection.categories.len(),
                        collection.bookmark_count()
                    );
                }
                println!("\n{} collection(s)", doc.collections.len());
            }
            OutputFormat::Json => {
                let items: Vec<_> = doc
                    .collections
                    .iter()
                    .map(|c| collection_summary(c, Some(&c.id) == active.as_ref()))
                    .collect();
                print_json(&items);
            }
            OutputFormat::Quiet => {
                for collection in &doc.collections {
                    println!("{}", collection.id);
                }
            }
        }
    }

    /// Print categories of the active collection with their positions
    pub fn print_categories(&self, categories: &[Category]) {
        match self.format {
            OutputFormat::Human => {
                if categories.is_empty() {
                    println!("No categories found.");
                    return;
                }
                for (index, category) in categories.iter().enumerate() {
                    println!(
                        "{:>3}  {} | {} | {} bookmark(s)",
                        index,
                        short_id(&category.id),
                        truncate(&display_title(&category.title), 30),
                        category.bookmarks.len()
                    );
                }
                println!("\n{} category(ies)", categories.len());
            }
            OutputFormat::Json => print_json(categories),
            OutputFormat::Quiet => {
                for category in categories {
                    println!("{}", category.id);
                }
            }
        }
    }

    /// Print bookmarks with their positions
    pub fn print_bookmarks(&self, bookmarks: &[Bookmark]) {
        match self.format {
            OutputFormat::Human => {
                if bookmarks.is_empty() {
                    println!("No bookmarks found.");
                    return;
                }
                for (index, bookmark) in bookmarks.iter().enumerate() {
                    println!(
                        "{:>3}  {} | {} | {}",
                        index,
                        short_id(&bookmark.id),
                        truncate(&bookmark.title, 30),
                        truncate(&bookmark.url, 50)
                    );
                }
                println!("\n{} bookmark(s)", bookmarks.len());
            }
            OutputFormat::Json => print_json(bookmarks),
            OutputFormat::Quiet => {
                for bookmark in bookmarks {
                    println!("{}", bookmark.id);
                }
            }
        }
    }

    /// Print a single bookmark
    pub fn print_bookmark(&self, bookmark: &Bookmark) {
        match self.format {
            OutputFormat::Human => {
                println!("ID:    {}", bookmark.id);
                println!("Title: {}", bookmark.title);
                println!("URL:   {}", bookmark.url);
                if let Some(ref icon) = bookmark.icon {
                    println!("Icon:  {}", icon);
                }
            }
            OutputFormat::Json => print_json(bookmark),
            OutputFormat::Quiet => println!("{}", bookmark.id),
        }
    }

    /// Print the settings record
    pub fn print_settings(&self, settings: &Settings) {
        match self.format {
            OutputFormat::Human => {
                let or_unset = |v: &Option<String>| v.clone().unwrap_or_else(|| "(not set)".into());
                println!("Settings:");
                println!("  backgroundImageUrl: {}", or_unset(&settings.background_image_url));
                println!("  backgroundOpacity:  {}", settings.background_opacity);
                println!("  userName:           {}", or_unset(&settings.user_name));
                println!("  is24HourFormat:     {}", settings.is_24_hour_format);
                println!("  weatherCity:        {}", or_unset(&settings.weather_city));
                println!("  timeDisplaySize:    {}", settings.time_display_size);
                println!("  dateFormat:         {}", settings.date_format);
                println!("  isSearchEnabled:    {}", settings.is_search_enabled);
                println!("  isEditMode:         {}", settings.is_edit_mode);
                if !settings.extension_settings.is_empty() {
                    let ids: Vec<_> = settings.extension_settings.keys().cloned().collect();
                    println!("  extensions:         {}", ids.join(", "));
                }
            }
            OutputFormat::Json => print_json(settings),
            OutputFormat::Quiet => {}
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Print the id of something just created
    ///
    /// Quiet mode prints only the id so scripts can capture it.
    pub fn created(&self, kind: &str, id: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ Created {}: {}", kind, id),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "kind": kind, "id": id})
                );
            }
            OutputFormat::Quiet => println!("{}", id),
        }
    }

    /// Check if we should prompt for confirmation
    pub fn should_prompt(&self) -> bool {
        self.format == OutputFormat::Human
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"message": msg}));
            }
            OutputFormat::Quiet => {}
        }
    }
}

fn collection_summary(collection: &Collection, active: bool) -> serde_json::Value {
    serde_json::json!({
        "id": collection.id,
        "title": collection.title,
        "active": active,
        "categories": collection.categories.len(),
        "bookmarks": collection.bookmark_count(),
    })
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize output: {}", e),
    }
}

/// First 8 characters of an id
fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

/// Category titles may be empty
fn display_title(title: &str) -> String {
    if title.trim().is_empty() {
        "(untitled)".to_string()
    } else {
        title.to_string()
    }
}

/// Truncate a string to max characters, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_flags() {
        assert_eq!(OutputFormat::from_flags(false, false), OutputFormat::Human);
        assert_eq!(OutputFormat::from_flags(true, false), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flags(false, true), OutputFormat::Quiet);
        // Quiet takes precedence
        assert_eq!(OutputFormat::from_flags(true, true), OutputFormat::Quiet);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("this is a long string", 10), "this is...");
        assert_eq!(truncate("ååååååååååå", 5), "åå...");
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("default"), "default");
        assert_eq!(
            short_id("0b9f3c2e-1111-2222-3333-444455556666"),
            "0b9f3c2e"
        );
    }

    #[test]
    fn test_display_title() {
        assert_eq!(display_title(""), "(untitled)");
        assert_eq!(display_title("  "), "(untitled)");
        assert_eq!(display_title("News"), "News");
    }
}
