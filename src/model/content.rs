//! Portfolio content: the static copy and data the page renders.
//!
//! The built-in content ships inside the binary; a replacement can be loaded
//! from a `.toml` or `.json` file of the same shape.

use super::error::ContentError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

const BUILTIN_CONTENT: &str = include_str!("../../assets/content.toml");

/// Technologies shown on a project card before collapsing into `+N`.
pub const CARD_TECH_LIMIT: usize = 4;

/// Everything the page renders besides chrome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortfolioContent {
    /// Name in the footer copyright line.
    pub owner: String,
    /// Ticker text repeated along the bottom of the contact section.
    pub marquee: String,
    /// Landing banner copy.
    pub hero: HeroContent,
    /// Copy scrolled by the about crawl.
    pub crawl: CrawlContent,
    /// Heading block above the contact links.
    pub contact_intro: ContactIntro,
    /// Skill cards in display order.
    #[serde(default)]
    pub skills: Vec<Skill>,
    /// Project cards in display order.
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Contact links in display order.
    #[serde(default)]
    pub contacts: Vec<ContactLink>,
}

/// Landing banner copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeroContent {
    /// Small label above the title.
    pub eyebrow: String,
    /// Title, one entry per rendered line.
    pub title_lines: Vec<String>,
    /// Line under the title.
    pub subtitle: String,
    /// Label printed before the typed role.
    pub roles_label: String,
    /// Phrases cycled by the typewriter.
    pub roles: Vec<String>,
}

/// Opening crawl copy for the about section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CrawlContent {
    /// Episode line above the title.
    pub episode: String,
    /// Crawl title.
    pub title: String,
    /// Body paragraphs, scrolled in order.
    pub paragraphs: Vec<String>,
}

/// Heading block of the contact section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactIntro {
    /// Small label above the heading.
    pub label: String,
    /// Section heading.
    pub heading: String,
    /// Paragraph under the heading.
    pub body: String,
}

/// A skill card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Skill {
    /// Card title.
    pub title: String,
    /// One-line summary under the title.
    pub tagline: String,
    /// Card body.
    pub description: String,
    /// Bullet points under the body.
    #[serde(default)]
    pub highlights: Vec<String>,
    /// Technology badges.
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// A project card and its detail modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    /// Unique identifier, also used for lookups.
    pub id: String,
    /// Card title.
    pub title: String,
    /// Role held on the project.
    pub role: String,
    /// Full description shown in the modal.
    pub description: String,
    /// Technologies, in display order.
    #[serde(default)]
    pub tech_stack: Vec<String>,
    /// Link shown in the modal, if the project is live.
    #[serde(default)]
    pub live_url: Option<String>,
}

impl Project {
    /// Technologies shown on the card and how many were left out.
    pub fn card_technologies(&self) -> (&[String], usize) {
        let shown = self.tech_stack.len().min(CARD_TECH_LIMIT);
        (&self.tech_stack[..shown], self.tech_stack.len() - shown)
    }
}

/// A contact link row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactLink {
    /// Unique identifier.
    pub id: String,
    /// Label in the left column.
    pub label: String,
    /// Displayed value.
    pub value: String,
    /// Target opened on activation.
    pub href: String,
}

/// Serialization format of a content file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    /// `.toml` file.
    Toml,
    /// `.json` file.
    Json,
}

impl ContentFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(ContentFormat::Toml),
            "json" => Some(ContentFormat::Json),
            _ => None,
        }
    }
}

impl PortfolioContent {
    /// The content compiled into the binary.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::parse(BUILTIN_CONTENT, ContentFormat::Toml, "built-in content")
    }

    /// Load and validate a content file.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let format =
            ContentFormat::from_path(path).ok_or_else(|| ContentError::UnsupportedFormat {
                path: path.to_path_buf(),
            })?;
        let text = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let content = Self::parse(&text, format, &path.display().to_string())?;
        info!(
            path = %path.display(),
            projects = content.projects.len(),
            skills = content.skills.len(),
            "Loaded portfolio content"
        );
        Ok(content)
    }

    /// Parse and validate content text. `origin` names the source in errors.
    pub fn parse(text: &str, format: ContentFormat, origin: &str) -> Result<Self, ContentError> {
        let parsed: Result<Self, String> = match format {
            ContentFormat::Toml => toml::from_str(text).map_err(|e| e.to_string()),
            ContentFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
        };
        let content = parsed.map_err(|reason| ContentError::Parse {
            origin: origin.to_string(),
            reason,
        })?;
        content.validate()?;
        Ok(content)
    }

    /// Check the rules the page depends on: at least one typewriter role,
    /// and non-empty unique project ids.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.hero.roles.iter().all(|r| r.trim().is_empty()) {
            return Err(ContentError::Invalid(
                "hero.roles must contain at least one phrase".into(),
            ));
        }
        let mut seen = HashSet::new();
        for project in &self.projects {
            if project.id.trim().is_empty() {
                return Err(ContentError::Invalid(format!(
                    "project '{}' has an empty id",
                    project.title
                )));
            }
            if !seen.insert(project.id.as_str()) {
                return Err(ContentError::Invalid(format!(
                    "duplicate project id '{}'",
                    project.id
                )));
            }
        }
        Ok(())
    }

    /// Project with the given id.
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}
