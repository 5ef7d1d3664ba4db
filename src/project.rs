//! Wire payloads mirrored from the Submagic API. The service owns these
//! records; we only ever hold a transient snapshot per call, so every field
//! is optional and unknown fields are ignored.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: Option<String>,
    /// Some endpoints (magic clips) return the identifier under this name.
    pub project_id: Option<String>,
    pub title: Option<String>,
    pub language: Option<String>,
    pub status: Option<String>,
    pub template_name: Option<String>,
    pub user_theme_id: Option<String>,
    pub magic_zooms: Option<bool>,
    pub magic_brolls: Option<bool>,
    pub magic_brolls_percentage: Option<u32>,
    pub remove_silence_pace: Option<String>,
    pub remove_bad_takes: Option<bool>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub webhook_url: Option<String>,
    pub video_url: Option<String>,
    pub output_url: Option<String>,
    /// Populated by the service when status is "failed".
    pub error: Option<String>,
}

impl Project {
    pub fn any_id(&self) -> Option<&str> {
        self.id.as_deref().or(self.project_id.as_deref())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LanguagesResponse {
    #[serde(default)]
    pub languages: Vec<LanguageEntry>,
}

/// The languages endpoint has returned both `{code, name}` objects and bare
/// string codes; accept either.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum LanguageEntry {
    Detailed {
        code: String,
        #[serde(default)]
        name: Option<String>,
    },
    Code(String),
}

#[derive(Debug, Default, Deserialize)]
pub struct TemplatesResponse {
    #[serde(default)]
    pub templates: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_decodes_camel_case_and_tolerates_missing_fields() {
        let project: Project = serde_json::from_str(
            r#"{"id":"p1","status":"queued","magicZooms":true,"createdAt":"2026-01-01","unknownField":7}"#,
        )
        .unwrap();
        assert_eq!(project.any_id(), Some("p1"));
        assert_eq!(project.status.as_deref(), Some("queued"));
        assert_eq!(project.magic_zooms, Some(true));
        assert!(project.output_url.is_none());
    }

    #[test]
    fn any_id_falls_back_to_project_id() {
        let project: Project = serde_json::from_str(r#"{"projectId":"mc-9"}"#).unwrap();
        assert_eq!(project.any_id(), Some("mc-9"));
    }

    #[test]
    fn language_entries_accept_objects_and_bare_codes() {
        let parsed: LanguagesResponse = serde_json::from_str(
            r#"{"languages":[{"code":"en","name":"English"},"es"]}"#,
        )
        .unwrap();
        assert_eq!(parsed.languages.len(), 2);
        assert!(matches!(&parsed.languages[1], LanguageEntry::Code(c) if c == "es"));
    }
}
