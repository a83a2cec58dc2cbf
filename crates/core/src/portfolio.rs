//! Static portfolio content models.
//!
//! These mirror the JSON documents served by the portfolio endpoints:
//! projects, skill categories, and the work/education timeline. The
//! documents are authored by hand and validated against these shapes at
//! startup; the API serves the parsed documents as-is.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Wire value for a professional position on the experience timeline.
pub const EXPERIENCE_TYPE_WORK: &str = "work";
/// Wire value for a degree or course on the experience timeline.
pub const EXPERIENCE_TYPE_EDUCATION: &str = "education";

/// All valid experience entry types.
pub const VALID_EXPERIENCE_TYPES: [&str; 2] = [EXPERIENCE_TYPE_WORK, EXPERIENCE_TYPE_EDUCATION];

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Kind of entry on the experience timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceType {
    Work,
    Education,
}

impl ExperienceType {
    /// Parse from the wire string, rejecting unknown values.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            EXPERIENCE_TYPE_WORK => Ok(Self::Work),
            EXPERIENCE_TYPE_EDUCATION => Ok(Self::Education),
            other => Err(format!("Invalid experience type: {other}")),
        }
    }

    /// Wire string for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Work => EXPERIENCE_TYPE_WORK,
            Self::Education => EXPERIENCE_TYPE_EDUCATION,
        }
    }
}

// ---------------------------------------------------------------------------
// Structs
// ---------------------------------------------------------------------------

/// A showcased project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioProject {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: String,
    pub thumbnail: String,
    pub status: String,
    pub category: String,
}

/// A single named skill with a 0-100 proficiency level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

/// A group of related skills under one heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<Skill>,
}

/// One entry on the work/education timeline.
///
/// Dates are free-form display strings such as `"Jan 2023"` or
/// `"Present"`, authored directly in the data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: i64,
    #[serde(rename = "type")]
    pub entry_type: ExperienceType,
    pub title: String,
    pub organization: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub technologies: Vec<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
