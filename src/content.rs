// SPDX-License-Identifier: MPL-2.0
//! Portfolio content: who the site is about, what it shows, and where
//! it links. Ships with embedded defaults and can be replaced wholesale
//! from a TOML file, either via `--content` or the `content_path`
//! setting.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// Re-exported so content consumers get the full model from one place.
pub use crate::media::ImageEntry;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Content {
    pub profile: Profile,
    pub skill_groups: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub gallery: Vec<ImageEntry>,
    pub contact: ContactInfo,
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub summary: String,
    /// Avatar asset; the view falls back to the name's initial when it
    /// cannot be loaded.
    pub avatar: Option<ImageEntry>,
    /// Technologies shown as copyable pills under the summary.
    pub core_technologies: Vec<String>,
    /// Downloadable CV, opened with the system handler.
    pub cv_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image: Option<ImageEntry>,
    pub repository_url: Option<String>,
    pub demo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Form endpoint the contact form posts to. Without one, submissions
    /// are acknowledged locally instead of leaving the machine.
    pub form_endpoint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

impl Default for Content {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            skill_groups: default_skill_groups(),
            projects: default_projects(),
            gallery: default_gallery(),
            contact: ContactInfo::default(),
            social_links: default_social_links(),
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Alex Rivera".to_string(),
            title: "Software Engineer".to_string(),
            summary: "I build fast, reliable tools for the desktop and the web, \
                      with a soft spot for type systems and well-behaved state machines."
                .to_string(),
            avatar: Some(ImageEntry::new("assets/content/avatar.png").with_alt_text("Portrait")),
            core_technologies: vec![
                "Rust".to_string(),
                "Tokio".to_string(),
                "WebAssembly".to_string(),
                "PostgreSQL".to_string(),
            ],
            cv_url: Some("https://example.org/alex-rivera-cv.pdf".to_string()),
        }
    }
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            email: "hello@example.org".to_string(),
            phone: "+1 555 010 0199".to_string(),
            location: "Porto, Portugal".to_string(),
            form_endpoint: None,
        }
    }
}

impl Default for SkillGroup {
    fn default() -> Self {
        Self {
            category: String::new(),
            skills: Vec::new(),
        }
    }
}

impl Default for Project {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            technologies: Vec::new(),
            image: None,
            repository_url: None,
            demo_url: None,
        }
    }
}

impl Default for SocialLink {
    fn default() -> Self {
        Self {
            label: String::new(),
            url: String::new(),
        }
    }
}

fn default_skill_groups() -> Vec<SkillGroup> {
    vec![
        SkillGroup {
            category: "Languages".to_string(),
            skills: vec![
                "Rust".to_string(),
                "TypeScript".to_string(),
                "Python".to_string(),
                "SQL".to_string(),
            ],
        },
        SkillGroup {
            category: "Frameworks & Runtimes".to_string(),
            skills: vec![
                "Tokio".to_string(),
                "Axum".to_string(),
                "React".to_string(),
                "Node.js".to_string(),
            ],
        },
        SkillGroup {
            category: "Tools & Platforms".to_string(),
            skills: vec![
                "Docker".to_string(),
                "Kubernetes".to_string(),
                "PostgreSQL".to_string(),
                "Git".to_string(),
            ],
        },
    ]
}

fn default_projects() -> Vec<Project> {
    vec![
        Project {
            title: "Ledgerline".to_string(),
            description: "Double-entry bookkeeping engine with a plain-text ledger format, \
                          incremental balance caching, and a reporting CLI."
                .to_string(),
            technologies: vec!["Rust".to_string(), "SQLite".to_string()],
            image: Some(ImageEntry::new("assets/content/projects/ledgerline.png")),
            repository_url: Some("https://example.org/code/ledgerline".to_string()),
            demo_url: None,
        },
        Project {
            title: "Wavecast".to_string(),
            description: "Self-hosted podcast publishing service: RSS generation, \
                          chaptered audio uploads, and listener statistics."
                .to_string(),
            technologies: vec![
                "Rust".to_string(),
                "Axum".to_string(),
                "PostgreSQL".to_string(),
            ],
            image: Some(ImageEntry::new("assets/content/projects/wavecast.png")),
            repository_url: Some("https://example.org/code/wavecast".to_string()),
            demo_url: Some("https://wavecast.example.org".to_string()),
        },
        Project {
            title: "Gridnote".to_string(),
            description: "Keyboard-first note taking with a spatial canvas, offline sync, \
                          and full-text search across notebooks."
                .to_string(),
            technologies: vec!["TypeScript".to_string(), "React".to_string()],
            image: Some(ImageEntry::new("assets/content/projects/gridnote.png")),
            repository_url: Some("https://example.org/code/gridnote".to_string()),
            demo_url: Some("https://gridnote.example.org".to_string()),
        },
        Project {
            title: "Relay Atlas".to_string(),
            description: "Interactive map of community mesh-network nodes with live health \
                          probes and coverage estimates."
                .to_string(),
            technologies: vec![
                "Rust".to_string(),
                "WebAssembly".to_string(),
                "Leaflet".to_string(),
            ],
            image: Some(ImageEntry::new("assets/content/projects/relay-atlas.png")),
            repository_url: Some("https://example.org/code/relay-atlas".to_string()),
            demo_url: None,
        },
    ]
}

fn default_gallery() -> Vec<ImageEntry> {
    vec![
        ImageEntry::new("assets/content/gallery/workbench.png")
            .with_alt_text("Desk with two monitors")
            .with_caption("The workbench, mid-refactor"),
        ImageEntry::new("assets/content/gallery/ledgerline-tui.png")
            .with_alt_text("Terminal interface showing account balances")
            .with_caption("Ledgerline's reporting view"),
        ImageEntry::new("assets/content/gallery/wavecast-dashboard.png")
            .with_alt_text("Dashboard with listener graphs")
            .with_caption("Wavecast listener statistics"),
        ImageEntry::new("assets/content/gallery/meshnode.png")
            .with_alt_text("Rooftop antenna installation")
            .with_caption("Installing a mesh node"),
        ImageEntry::new("assets/content/gallery/conference-talk.png")
            .with_alt_text("Speaker on stage")
            .with_caption("Talking type systems at RustConf"),
        ImageEntry::new("assets/content/gallery/gridnote-canvas.png")
            .with_alt_text("Spatial canvas with linked notes"),
    ]
}

fn default_social_links() -> Vec<SocialLink> {
    vec![
        SocialLink {
            label: "GitHub".to_string(),
            url: "https://github.com/example".to_string(),
        },
        SocialLink {
            label: "LinkedIn".to_string(),
            url: "https://www.linkedin.com/in/example".to_string(),
        },
        SocialLink {
            label: "Mastodon".to_string(),
            url: "https://hachyderm.io/@example".to_string(),
        },
    ]
}

/// Load content from `path` when given, falling back to the embedded
/// defaults otherwise.
pub fn load(path: Option<&Path>) -> Result<Content> {
    match path {
        Some(path) => load_from_path(path),
        None => Ok(Content::default()),
    }
}

/// Load content from a TOML file.
///
/// Unlike the settings file, a malformed content file is reported as an
/// error instead of silently replaced: the user asked for this file.
pub fn load_from_path(path: &Path) -> Result<Content> {
    let raw = fs::read_to_string(path)?;
    toml::from_str(&raw).map_err(|e| Error::Content(format!("{}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_content_is_complete() {
        let content = Content::default();
        assert!(!content.profile.name.is_empty());
        assert!(!content.skill_groups.is_empty());
        assert!(content.projects.len() >= 3);
        assert!(content.gallery.len() >= 3);
        assert!(!content.social_links.is_empty());
    }

    #[test]
    fn load_without_path_returns_defaults() {
        let content = load(None).expect("defaults should always load");
        assert_eq!(content, Content::default());
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("content.toml");
        fs::write(
            &path,
            r#"
[profile]
name = "Sam Makes"
title = "Generalist"
"#,
        )
        .expect("failed to write content file");

        let content = load_from_path(&path).expect("partial content should load");
        assert_eq!(content.profile.name, "Sam Makes");
        // Sections absent from the file come from the defaults
        assert_eq!(content.gallery, Content::default().gallery);
        assert_eq!(content.contact, ContactInfo::default());
    }

    #[test]
    fn gallery_entries_round_trip_through_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("content.toml");
        fs::write(
            &path,
            r#"
[[gallery]]
source = "shots/one.png"
caption = "First"

[[gallery]]
source = "https://example.org/two.png"
alt_text = "Second shot"
"#,
        )
        .expect("failed to write content file");

        let content = load_from_path(&path).expect("content should load");
        assert_eq!(content.gallery.len(), 2);
        assert_eq!(content.gallery[0].caption.as_deref(), Some("First"));
        assert_eq!(content.gallery[1].alt_text.as_deref(), Some("Second shot"));
        assert!(content.gallery[1].caption.is_none());
    }

    #[test]
    fn malformed_file_is_reported_as_content_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("content.toml");
        fs::write(&path, "gallery = \"not a table\"").expect("failed to write content file");

        match load_from_path(&path) {
            Err(Error::Content(message)) => assert!(message.contains("content.toml")),
            other => panic!("expected Content error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_reported_as_io_error() {
        match load_from_path(Path::new("/definitely/not/here.toml")) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
