//! Page section identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five addressable page sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    /// Landing banner with the typewriter roles.
    Hero,
    /// About section with the crawl.
    About,
    /// Skill cards.
    Skills,
    /// Project cards.
    Projects,
    /// Contact links and the message form.
    Contact,
}

impl SectionId {
    /// Every section in document order.
    pub const ALL: [SectionId; 5] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Element identifier (`hero`, `about`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    /// Position in document order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Following section, `None` after the last.
    pub fn next(self) -> Option<SectionId> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Preceding section, `None` before the first.
    pub fn prev(self) -> Option<SectionId> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no section.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section '{0}' (expected one of hero, about, skills, projects, contact)")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    /// Accepts the bare id or an anchor with a leading `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        let id = id.strip_prefix('#').unwrap_or(id);
        SectionId::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(id))
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}
