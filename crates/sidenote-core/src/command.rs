//! Command palette data model.
//!
//! Builds the ordered entry list the command palette widget consumes:
//! navigation links first, then blog posts, then the theme switchers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Color scheme choice forwarded to the page's theme collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    System,
}

impl ThemeMode {
    /// Wire string passed to `setThemeSetting`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

impl FromStr for ThemeMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(CoreError::Theme(other.to_string())),
        }
    }
}

/// Category label shown as the group header in the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CommandSection {
    Navigation,
    Posts,
    Theme,
}

impl CommandSection {
    /// Display label, also the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Navigation => "Navigation",
            Self::Posts => "Posts",
            Self::Theme => "Theme",
        }
    }
}

/// Side effect performed when a palette entry is invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandAction {
    /// Full-page navigation to the URL.
    Navigate(String),

    /// Delegate to the page's theme collaborator.
    SetTheme(ThemeMode),
}

/// A single palette entry.
///
/// Serializes to the object shape the widget expects; the action is attached
/// separately as a `handler` function property by the DOM layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandEntry {
    /// Unique entry id.
    pub id: String,

    /// Display title.
    pub title: String,

    /// Short description, may be empty.
    pub description: String,

    /// Group the entry is listed under.
    pub section: CommandSection,

    /// What invoking the entry does.
    #[serde(skip)]
    pub action: CommandAction,
}

/// A top-level navigation link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    /// Display title.
    pub title: String,

    /// Link URL.
    pub url: String,
}

/// A blog post link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostLink {
    /// Post title.
    pub title: String,

    /// Post summary, may be empty.
    #[serde(default)]
    pub description: String,

    /// Post URL.
    pub url: String,
}

/// Static site description emitted by the site generator at build time.
///
/// Embedded in the page as an inline JSON script tag, or served as a
/// standalone document for the fetched-manifest path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteManifest {
    /// Top-level navigation links, in display order.
    #[serde(default)]
    pub nav: Vec<NavLink>,

    /// Blog posts, newest first.
    #[serde(default)]
    pub posts: Vec<PostLink>,
}

impl SiteManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CoreError::manifest(e.to_string()))
    }
}

/// Derive the id slug for nav and post entries.
///
/// Lowercases, maps whitespace and separators to `-`, drops other
/// punctuation, and collapses runs of dashes.
pub fn slug(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .filter_map(|c| {
            if c.is_alphanumeric() {
                Some(c)
            } else if c.is_whitespace() || c == '-' || c == '_' {
                Some('-')
            } else {
                None
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// The three fixed theme-switcher entries.
pub fn theme_entries() -> [CommandEntry; 3] {
    [
        CommandEntry {
            id: "light-theme".to_string(),
            title: "Change theme to light".to_string(),
            description: "Change the theme of the site to Light".to_string(),
            section: CommandSection::Theme,
            action: CommandAction::SetTheme(ThemeMode::Light),
        },
        CommandEntry {
            id: "dark-theme".to_string(),
            title: "Change theme to dark".to_string(),
            description: "Change the theme of the site to Dark".to_string(),
            section: CommandSection::Theme,
            action: CommandAction::SetTheme(ThemeMode::Dark),
        },
        CommandEntry {
            id: "system-theme".to_string(),
            title: "Use system default theme".to_string(),
            description: "Change the theme of the site to System Default".to_string(),
            section: CommandSection::Theme,
            action: CommandAction::SetTheme(ThemeMode::System),
        },
    ]
}

/// Build the full palette index from a site manifest.
///
/// Order is fixed: navigation links, posts in manifest order, then the theme
/// switchers. Entry ids are unique as long as nav and post titles do not
/// collide under [`slug`].
pub fn build_entries(manifest: &SiteManifest) -> Vec<CommandEntry> {
    let mut entries = Vec::with_capacity(manifest.nav.len() + manifest.posts.len() + 3);

    for link in &manifest.nav {
        entries.push(CommandEntry {
            id: format!("nav-{}", slug(&link.title)),
            title: link.title.clone(),
            description: String::new(),
            section: CommandSection::Navigation,
            action: CommandAction::Navigate(link.url.clone()),
        });
    }

    for post in &manifest.posts {
        entries.push(CommandEntry {
            id: format!("post-{}", slug(&post.title)),
            title: post.title.clone(),
            description: post.description.clone(),
            section: CommandSection::Posts,
            action: CommandAction::Navigate(post.url.clone()),
        });
    }

    entries.extend(theme_entries());
    entries
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn sample_manifest() -> SiteManifest {
        SiteManifest {
            nav: vec![
                NavLink {
                    title: String::new(),
                    url: "/".to_string(),
                },
                NavLink {
                    title: "Blog".to_string(),
                    url: "/blog/".to_string(),
                },
            ],
            posts: vec![
                PostLink {
                    title: "Writing (rewriting) a lexer".to_string(),
                    description: "A journey of writing a lexer in Rust.".to_string(),
                    url: "/blog/2024/lexers/".to_string(),
                },
                PostLink {
                    title: "Binary search is Bananas!".to_string(),
                    description: String::new(),
                    url: "/blog/2023/binary-search/".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_slug_drops_punctuation() {
        assert_eq!(slug("Writing (rewriting) a lexer"), "writing-rewriting-a-lexer");
        assert_eq!(slug("Binary search is Bananas!"), "binary-search-is-bananas");
        assert_eq!(
            slug("Gossip Glomers - Efficient Broadcast"),
            "gossip-glomers-efficient-broadcast"
        );
    }

    #[test]
    fn test_slug_empty_title() {
        assert_eq!(slug(""), "");
        assert_eq!(slug("---"), "");
    }

    #[test]
    fn test_entry_order_and_sections() {
        let entries = build_entries(&sample_manifest());

        assert_eq!(entries.len(), 7);
        assert_eq!(entries[0].id, "nav-");
        assert_eq!(entries[1].id, "nav-blog");
        assert_eq!(entries[2].id, "post-writing-rewriting-a-lexer");
        assert_eq!(entries[3].id, "post-binary-search-is-bananas");
        assert_eq!(entries[4].id, "light-theme");
        assert_eq!(entries[5].id, "dark-theme");
        assert_eq!(entries[6].id, "system-theme");

        assert!(entries[..2]
            .iter()
            .all(|e| e.section == CommandSection::Navigation));
        assert!(entries[2..4].iter().all(|e| e.section == CommandSection::Posts));
        assert!(entries[4..].iter().all(|e| e.section == CommandSection::Theme));
    }

    #[test]
    fn test_entry_ids_unique() {
        let entries = build_entries(&sample_manifest());
        let ids: HashSet<_> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), entries.len());
    }

    #[test]
    fn test_nav_actions_navigate() {
        let entries = build_entries(&sample_manifest());
        assert_eq!(
            entries[1].action,
            CommandAction::Navigate("/blog/".to_string())
        );
        assert_eq!(
            entries[2].action,
            CommandAction::Navigate("/blog/2024/lexers/".to_string())
        );
    }

    #[test]
    fn test_theme_entries_cover_all_modes() {
        let modes: Vec<_> = theme_entries()
            .iter()
            .map(|e| match e.action {
                CommandAction::SetTheme(mode) => mode,
                _ => panic!("theme entry with non-theme action"),
            })
            .collect();
        assert_eq!(modes, vec![ThemeMode::Light, ThemeMode::Dark, ThemeMode::System]);
    }

    #[test]
    fn test_theme_mode_wire_strings() {
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
        assert_eq!(ThemeMode::System.as_str(), "system");

        assert_eq!("system".parse::<ThemeMode>().unwrap(), ThemeMode::System);
        assert!("solarized".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_manifest_from_json() {
        let manifest = SiteManifest::from_json(
            r#"{"nav":[{"title":"Blog","url":"/blog/"}],"posts":[{"title":"Hello","url":"/blog/hello/"}]}"#,
        )
        .unwrap();

        assert_eq!(manifest.nav.len(), 1);
        assert_eq!(manifest.posts.len(), 1);
        assert_eq!(manifest.posts[0].description, "");
    }

    #[test]
    fn test_manifest_rejects_garbage() {
        assert!(SiteManifest::from_json("not json").is_err());
    }

    #[test]
    fn test_entry_serialization_shape() {
        let entries = build_entries(&sample_manifest());
        let json = serde_json::to_string(&entries[4]).unwrap();

        assert!(json.contains("\"id\":\"light-theme\""));
        assert!(json.contains("\"section\":\"Theme\""));
        // the action is attached JS-side as a handler, never serialized
        assert!(!json.contains("action"));
    }
}
