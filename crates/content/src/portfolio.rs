//! Static portfolio content catalog.
//!
//! Loads the three JSON documents (projects, skills, experience) from a
//! data directory once at startup. Each file must deserialize into its
//! typed model, which catches shape drift early; the stored
//! representation is the raw `serde_json::Value`, so the HTTP layer
//! serves the arrays exactly as authored, unknown fields included.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

use folio_core::portfolio::{Experience, PortfolioProject, SkillCategory};

/// File names expected inside the data directory.
pub const PROJECTS_FILE: &str = "projects.json";
pub const SKILLS_FILE: &str = "skills.json";
pub const EXPERIENCE_FILE: &str = "experience.json";

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for portfolio catalog loading failures.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A data file could not be read.
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    /// A data file is not valid JSON or does not match its expected
    /// shape.
    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}

// ---------------------------------------------------------------------------
// PortfolioData
// ---------------------------------------------------------------------------

/// Parsed and shape-checked portfolio documents.
#[derive(Debug, Clone)]
pub struct PortfolioData {
    projects: Value,
    skills: Value,
    experience: Value,
}

impl PortfolioData {
    /// Load and shape-check the three documents from `data_dir`.
    ///
    /// Fails when a file is missing, unreadable, or malformed. Callers
    /// treat this as a startup error.
    pub async fn load(data_dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = data_dir.as_ref();
        let projects = load_file::<Vec<PortfolioProject>>(&dir.join(PROJECTS_FILE)).await?;
        let skills = load_file::<Vec<SkillCategory>>(&dir.join(SKILLS_FILE)).await?;
        let experience = load_file::<Vec<Experience>>(&dir.join(EXPERIENCE_FILE)).await?;

        tracing::info!(
            projects = projects.as_array().map_or(0, Vec::len),
            skill_categories = skills.as_array().map_or(0, Vec::len),
            experience_entries = experience.as_array().map_or(0, Vec::len),
            "Portfolio data loaded",
        );

        Ok(Self {
            projects,
            skills,
            experience,
        })
    }

    /// The projects array, exactly as authored.
    pub fn projects(&self) -> &Value {
        &self.projects
    }

    /// The skills array, exactly as authored.
    pub fn skills(&self) -> &Value {
        &self.skills
    }

    /// The experience array, exactly as authored.
    pub fn experience(&self) -> &Value {
        &self.experience
    }
}

/// Read one file, check it against `T`, and return the raw JSON.
async fn load_file<T: DeserializeOwned>(path: &Path) -> Result<Value, CatalogError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    serde_json::from_str::<T>(&raw).map_err(|e| CatalogError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    serde_json::from_str(&raw).map_err(|e| CatalogError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const PROJECTS: &str = r#"[{
        "id": 1,
        "title": "Bird Gallery",
        "description": "Photo gallery with species tagging.",
        "technologies": ["Angular", "Firebase"],
        "link": "https://example.com/gallery",
        "thumbnail": "assets/images/gallery.png",
        "status": "Completed",
        "category": "Web",
        "featured": true
    }]"#;

    const SKILLS: &str = r#"[
        {"category": "Languages", "skills": [{"name": "Rust", "level": 80}]}
    ]"#;

    const EXPERIENCE: &str = r#"[{
        "id": 1,
        "type": "work",
        "title": "Software Engineer",
        "organization": "Example Corp",
        "location": "Remote",
        "startDate": "Jan 2023",
        "endDate": "Present",
        "description": "Backend services.",
        "technologies": ["Rust", "Postgres"]
    }]"#;

    fn write_data_dir(projects: &str, skills: &str, experience: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(dir.path().join(PROJECTS_FILE), projects).expect("write projects");
        std::fs::write(dir.path().join(SKILLS_FILE), skills).expect("write skills");
        std::fs::write(dir.path().join(EXPERIENCE_FILE), experience).expect("write experience");
        dir
    }

    #[tokio::test]
    async fn loads_all_three_documents() {
        let dir = write_data_dir(PROJECTS, SKILLS, EXPERIENCE);
        let data = PortfolioData::load(dir.path()).await.expect("load");

        assert_eq!(data.projects().as_array().expect("array").len(), 1);
        assert_eq!(data.skills()[0]["category"], "Languages");
        assert_eq!(data.experience()[0]["type"], "work");
    }

    #[tokio::test]
    async fn unknown_fields_survive_verbatim() {
        let dir = write_data_dir(PROJECTS, SKILLS, EXPERIENCE);
        let data = PortfolioData::load(dir.path()).await.expect("load");

        // "featured" is not part of the typed model but must be served.
        assert_eq!(data.projects()[0]["featured"], true);
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        assert_matches!(
            PortfolioData::load(dir.path()).await,
            Err(CatalogError::Io { .. })
        );
    }

    #[tokio::test]
    async fn malformed_json_is_parse_error() {
        let dir = write_data_dir("{ not json", SKILLS, EXPERIENCE);
        assert_matches!(
            PortfolioData::load(dir.path()).await,
            Err(CatalogError::Parse { .. })
        );
    }

    #[tokio::test]
    async fn wrong_shape_is_parse_error() {
        // Skill levels must be numbers.
        let skills = r#"[{"category": "Languages", "skills": [{"name": "Rust", "level": "high"}]}]"#;
        let dir = write_data_dir(PROJECTS, skills, EXPERIENCE);
        assert_matches!(
            PortfolioData::load(dir.path()).await,
            Err(CatalogError::Parse { .. })
        );
    }

    #[tokio::test]
    async fn unknown_experience_type_is_parse_error() {
        let experience = EXPERIENCE.replace("\"work\"", "\"volunteering\"");
        let dir = write_data_dir(PROJECTS, SKILLS, &experience);
        assert_matches!(
            PortfolioData::load(dir.path()).await,
            Err(CatalogError::Parse { .. })
        );
    }
}
