//! One validated input type per tool. Schemas are derived for the MCP
//! surface; constraints are enforced by `validate()` before any network
//! call. Wire bodies use the service's camelCase field names, mapped
//! explicitly per operation rather than by mechanical case conversion.

use std::sync::LazyLock;

use regex::Regex;
use rmcp::schemars;
use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::error::ValidationError;

pub const SILENCE_PACES: [&str; 3] = ["natural", "fast", "extra-fast"];

/// Standard creation codes: `en`, `es`, `pt-BR`.
static PROJECT_LANGUAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-z]{2}(-[A-Z]{2})?$").expect("static pattern"));

/// Clip generation accepts compound codes like `cmn_en`.
static CLIPS_LANGUAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-z]{2,10}(_[a-z]{2})?$").expect("static pattern"));

fn default_true() -> bool {
    true
}

fn default_brolls_percentage() -> u32 {
    75
}

fn default_silence_pace() -> String {
    "natural".to_string()
}

fn default_min_clip_length() -> u32 {
    15
}

fn default_max_clip_length() -> u32 {
    60
}

fn check_title(title: &str) -> Result<(), ValidationError> {
    let len = title.chars().count();
    if len == 0 || len > 100 {
        return Err(ValidationError::new(
            "title",
            "must be between 1 and 100 characters",
        ));
    }
    Ok(())
}

fn check_pace(field: &'static str, pace: &str) -> Result<(), ValidationError> {
    if !SILENCE_PACES.contains(&pace) {
        return Err(ValidationError::new(
            field,
            "must be one of: natural, fast, extra-fast",
        ));
    }
    Ok(())
}

fn check_range(
    field: &'static str,
    value: u32,
    min: u32,
    max: u32,
) -> Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::new(
            field,
            format!("must be between {min} and {max}"),
        ));
    }
    Ok(())
}

fn check_project_id(project_id: &str) -> Result<(), ValidationError> {
    if project_id.trim().is_empty() {
        return Err(ValidationError::new("project_id", "must not be empty"));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct CreateProjectRequest {
    /// Descriptive title for your video project (1-100 characters)
    pub title: String,
    /// Language code for transcription (e.g. 'en', 'es', 'pt-BR'). Use
    /// submagic_list_languages to see the options.
    pub language: String,
    /// Public URL to your video file (must be accessible without
    /// authentication)
    pub video_url: String,
    /// Template name for styling (e.g. 'Hormozi 2', 'Sara'). Use
    /// submagic_list_templates to see options. Cannot be combined with
    /// user_theme_id.
    pub template_name: Option<String>,
    /// Custom theme UUID. Cannot be combined with template_name.
    pub user_theme_id: Option<String>,
    /// URL to receive a webhook notification when processing completes
    pub webhook_url: Option<String>,
    /// Custom words or phrases to improve transcription accuracy (at most
    /// 100 entries)
    pub dictionary: Option<Vec<String>>,
    /// Enable AI-powered dynamic zooms for emphasis
    #[serde(default = "default_true")]
    pub magic_zooms: bool,
    /// Enable automatic B-roll insertion
    #[serde(default = "default_true")]
    pub magic_brolls: bool,
    /// Percentage of the video to fill with B-rolls (0-100)
    #[serde(default = "default_brolls_percentage")]
    pub magic_brolls_percentage: u32,
    /// Silence removal speed: natural (0.6+ sec), fast (0.2-0.6 sec) or
    /// extra-fast (0.1-0.2 sec)
    #[serde(default = "default_silence_pace")]
    pub remove_silence_pace: String,
    /// Automatically remove filler words and bad takes
    #[serde(default = "default_true")]
    pub remove_bad_takes: bool,
}

impl CreateProjectRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_title(&self.title)?;
        if !PROJECT_LANGUAGE.is_match(&self.language) {
            return Err(ValidationError::new(
                "language",
                "must be a two-letter code with optional region, e.g. 'en' or 'pt-BR'",
            ));
        }
        let has_template = self.template_name.as_deref().is_some_and(|t| !t.is_empty());
        let has_theme = self.user_theme_id.as_deref().is_some_and(|t| !t.is_empty());
        if has_template && has_theme {
            return Err(ValidationError::new(
                "template_name",
                "cannot be combined with user_theme_id; provide one or the other",
            ));
        }
        if let Some(dictionary) = &self.dictionary {
            if dictionary.len() > 100 {
                return Err(ValidationError::new(
                    "dictionary",
                    "holds at most 100 entries",
                ));
            }
        }
        check_range(
            "magic_brolls_percentage",
            self.magic_brolls_percentage,
            0,
            100,
        )?;
        check_pace("remove_silence_pace", &self.remove_silence_pace)?;
        Ok(())
    }

    pub fn to_body(&self) -> Value {
        let mut body = Map::new();
        body.insert("title".into(), json!(self.title));
        body.insert("language".into(), json!(self.language));
        body.insert("videoUrl".into(), json!(self.video_url));
        body.insert("magicZooms".into(), json!(self.magic_zooms));
        body.insert("magicBrolls".into(), json!(self.magic_brolls));
        body.insert(
            "magicBrollsPercentage".into(),
            json!(self.magic_brolls_percentage),
        );
        body.insert("removeSilencePace".into(), json!(self.remove_silence_pace));
        body.insert("removeBadTakes".into(), json!(self.remove_bad_takes));
        if let Some(template_name) = &self.template_name {
            body.insert("templateName".into(), json!(template_name));
        }
        if let Some(user_theme_id) = &self.user_theme_id {
            body.insert("userThemeId".into(), json!(user_theme_id));
        }
        if let Some(webhook_url) = &self.webhook_url {
            body.insert("webhookUrl".into(), json!(webhook_url));
        }
        if let Some(dictionary) = &self.dictionary {
            body.insert("dictionary".into(), json!(dictionary));
        }
        Value::Object(body)
    }
}

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct GetProjectRequest {
    /// UUID of the project to retrieve
    pub project_id: String,
}

impl GetProjectRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_project_id(&self.project_id)
    }
}

/// A clip insertion instruction; times are seconds.
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct BrollItem {
    /// When the clip should start, in seconds
    pub start_time: f64,
    /// When the clip should end, in seconds (must be greater than
    /// start_time)
    pub end_time: f64,
    /// UUID of your uploaded media (Submagic editor -> B-roll tab -> My
    /// videos)
    pub user_media_id: String,
}

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct UpdateProjectRequest {
    /// UUID of the project to update
    pub project_id: String,
    /// Adjust silence removal speed: natural (0.6+ sec), fast (0.2-0.6
    /// sec) or extra-fast (0.1-0.2 sec)
    pub remove_silence_pace: Option<String>,
    /// Enable AI-powered removal of filler words and bad takes (takes 1-2
    /// minutes to process)
    pub remove_bad_takes: Option<bool>,
    /// Custom B-roll clips to insert at specific timestamps
    pub custom_broll_items: Option<Vec<BrollItem>>,
}

impl UpdateProjectRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_project_id(&self.project_id)?;
        if let Some(pace) = &self.remove_silence_pace {
            check_pace("remove_silence_pace", pace)?;
        }
        if let Some(items) = &self.custom_broll_items {
            for (index, item) in items.iter().enumerate() {
                if item.end_time <= item.start_time {
                    return Err(ValidationError::new(
                        "custom_broll_items",
                        format!(
                            "clip {}: end_time ({}) must be greater than start_time ({})",
                            index + 1,
                            item.end_time,
                            item.start_time
                        ),
                    ));
                }
                if item.user_media_id.trim().is_empty() {
                    return Err(ValidationError::new(
                        "custom_broll_items",
                        format!("clip {}: user_media_id must not be empty", index + 1),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Partial-update body from the supplied fields only; `None` when no
    /// field was provided, so the caller can skip the network entirely.
    pub fn to_body(&self) -> Option<Value> {
        let mut body = Map::new();
        if let Some(pace) = &self.remove_silence_pace {
            body.insert("removeSilencePace".into(), json!(pace));
        }
        if let Some(remove_bad_takes) = self.remove_bad_takes {
            body.insert("removeBadTakes".into(), json!(remove_bad_takes));
        }
        if let Some(items) = &self.custom_broll_items {
            let items: Vec<Value> = items
                .iter()
                .map(|item| {
                    json!({
                        "startTime": item.start_time,
                        "endTime": item.end_time,
                        "userMediaId": item.user_media_id,
                    })
                })
                .collect();
            body.insert("items".into(), json!(items));
        }
        if body.is_empty() {
            None
        } else {
            Some(Value::Object(body))
        }
    }
}

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct ExportProjectRequest {
    /// UUID of the completed project to export
    pub project_id: String,
    /// Frames per second for the exported video (1-60). Defaults to the
    /// project's original fps.
    pub fps: Option<u32>,
    /// Video width in pixels (100-4000). Defaults to the project's
    /// original width.
    pub width: Option<u32>,
    /// Video height in pixels (100-4000). Defaults to the project's
    /// original height.
    pub height: Option<u32>,
    /// URL to receive a notification when the export is complete
    pub webhook_url: Option<String>,
}

impl ExportProjectRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_project_id(&self.project_id)?;
        if let Some(fps) = self.fps {
            check_range("fps", fps, 1, 60)?;
        }
        if let Some(width) = self.width {
            check_range("width", width, 100, 4000)?;
        }
        if let Some(height) = self.height {
            check_range("height", height, 100, 4000)?;
        }
        Ok(())
    }

    pub fn to_body(&self) -> Value {
        let mut body = Map::new();
        if let Some(fps) = self.fps {
            body.insert("fps".into(), json!(fps));
        }
        if let Some(width) = self.width {
            body.insert("width".into(), json!(width));
        }
        if let Some(height) = self.height {
            body.insert("height".into(), json!(height));
        }
        if let Some(webhook_url) = &self.webhook_url {
            body.insert("webhookUrl".into(), json!(webhook_url));
        }
        Value::Object(body)
    }
}

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct CreateMagicClipsRequest {
    /// Title for the clips project (1-100 characters)
    pub title: String,
    /// YouTube URL of the long-form video to clip
    pub youtube_url: String,
    /// Language code for captions (e.g. 'en', 'es', 'cmn_en')
    pub language: String,
    /// URL to receive a notification when clip generation completes
    pub webhook_url: Option<String>,
    /// UUID of a custom branded theme to apply to the clips
    pub user_theme_id: Option<String>,
    /// Minimum clip duration in seconds (15-300)
    #[serde(default = "default_min_clip_length")]
    pub min_clip_length: u32,
    /// Maximum clip duration in seconds (15-300); must be >=
    /// min_clip_length
    #[serde(default = "default_max_clip_length")]
    pub max_clip_length: u32,
}

impl CreateMagicClipsRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_title(&self.title)?;
        if !CLIPS_LANGUAGE.is_match(&self.language) {
            return Err(ValidationError::new(
                "language",
                "must be a lowercase code like 'en' or a compound code like 'cmn_en'",
            ));
        }
        if self.youtube_url.trim().is_empty() {
            return Err(ValidationError::new("youtube_url", "must not be empty"));
        }
        check_range("min_clip_length", self.min_clip_length, 15, 300)?;
        check_range("max_clip_length", self.max_clip_length, 15, 300)?;
        // Spans two already-validated fields, so it runs last.
        if self.min_clip_length > self.max_clip_length {
            return Err(ValidationError::new(
                "min_clip_length",
                format!(
                    "min_clip_length ({}) must be <= max_clip_length ({})",
                    self.min_clip_length, self.max_clip_length
                ),
            ));
        }
        Ok(())
    }

    pub fn to_body(&self) -> Value {
        let mut body = Map::new();
        body.insert("title".into(), json!(self.title));
        body.insert("youtubeUrl".into(), json!(self.youtube_url));
        body.insert("language".into(), json!(self.language));
        body.insert("minClipLength".into(), json!(self.min_clip_length));
        body.insert("maxClipLength".into(), json!(self.max_clip_length));
        if let Some(webhook_url) = &self.webhook_url {
            body.insert("webhookUrl".into(), json!(webhook_url));
        }
        if let Some(user_theme_id) = &self.user_theme_id {
            body.insert("userThemeId".into(), json!(user_theme_id));
        }
        Value::Object(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request() -> CreateProjectRequest {
        serde_json::from_value(json!({
            "title": "Demo",
            "language": "en",
            "video_url": "https://x/y.mp4",
        }))
        .unwrap()
    }

    #[test]
    fn create_defaults_are_applied() {
        let req = create_request();
        assert!(req.magic_zooms);
        assert!(req.magic_brolls);
        assert_eq!(req.magic_brolls_percentage, 75);
        assert_eq!(req.remove_silence_pace, "natural");
        assert!(req.remove_bad_takes);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn template_and_theme_are_mutually_exclusive() {
        let mut req = create_request();
        req.template_name = Some("Hormozi 2".to_string());
        req.user_theme_id = Some("11111111-2222".to_string());
        let err = req.validate().unwrap_err();
        assert_eq!(err.field, "template_name");
        assert!(err.constraint.contains("user_theme_id"));
    }

    #[test]
    fn either_template_or_theme_alone_is_fine() {
        let mut req = create_request();
        req.template_name = Some("Sara".to_string());
        assert!(req.validate().is_ok());

        let mut req = create_request();
        req.user_theme_id = Some("11111111-2222".to_string());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn language_patterns_differ_between_create_and_clips() {
        let mut req = create_request();
        req.language = "cmn_en".to_string();
        assert!(req.validate().is_err());

        let clips: CreateMagicClipsRequest = serde_json::from_value(json!({
            "title": "Clips",
            "youtube_url": "https://youtube.com/watch?v=abc",
            "language": "cmn_en",
        }))
        .unwrap();
        assert!(clips.validate().is_ok());
    }

    #[test]
    fn title_bounds_are_enforced() {
        let mut req = create_request();
        req.title = String::new();
        assert_eq!(req.validate().unwrap_err().field, "title");

        req.title = "x".repeat(101);
        assert_eq!(req.validate().unwrap_err().field, "title");
    }

    #[test]
    fn brolls_percentage_and_pace_are_bounded() {
        let mut req = create_request();
        req.magic_brolls_percentage = 101;
        assert_eq!(req.validate().unwrap_err().field, "magic_brolls_percentage");

        let mut req = create_request();
        req.remove_silence_pace = "medium".to_string();
        assert_eq!(req.validate().unwrap_err().field, "remove_silence_pace");
    }

    #[test]
    fn dictionary_is_capped_at_one_hundred_entries() {
        let mut req = create_request();
        req.dictionary = Some(vec!["word".to_string(); 101]);
        assert_eq!(req.validate().unwrap_err().field, "dictionary");
    }

    #[test]
    fn create_body_uses_wire_field_names() {
        let mut req = create_request();
        req.template_name = Some("Hormozi 2".to_string());
        let body = req.to_body();
        assert_eq!(body["videoUrl"], "https://x/y.mp4");
        assert_eq!(body["magicBrollsPercentage"], 75);
        assert_eq!(body["removeSilencePace"], "natural");
        assert_eq!(body["templateName"], "Hormozi 2");
        // Unsupplied optionals stay out of the body entirely.
        assert!(body.get("userThemeId").is_none());
        assert!(body.get("webhookUrl").is_none());
        assert!(body.get("dictionary").is_none());
    }

    #[test]
    fn update_body_is_none_when_nothing_supplied() {
        let req = UpdateProjectRequest {
            project_id: "p1".to_string(),
            remove_silence_pace: None,
            remove_bad_takes: None,
            custom_broll_items: None,
        };
        assert!(req.validate().is_ok());
        assert!(req.to_body().is_none());
    }

    #[test]
    fn update_body_renames_broll_items() {
        let req = UpdateProjectRequest {
            project_id: "p1".to_string(),
            remove_silence_pace: Some("fast".to_string()),
            remove_bad_takes: Some(false),
            custom_broll_items: Some(vec![BrollItem {
                start_time: 10.5,
                end_time: 15.0,
                user_media_id: "media-1".to_string(),
            }]),
        };
        let body = req.to_body().unwrap();
        assert_eq!(body["removeSilencePace"], "fast");
        assert_eq!(body["removeBadTakes"], false);
        assert_eq!(body["items"][0]["startTime"], 10.5);
        assert_eq!(body["items"][0]["endTime"], 15.0);
        assert_eq!(body["items"][0]["userMediaId"], "media-1");
    }

    #[test]
    fn broll_item_end_must_exceed_start() {
        let req = UpdateProjectRequest {
            project_id: "p1".to_string(),
            remove_silence_pace: None,
            remove_bad_takes: None,
            custom_broll_items: Some(vec![BrollItem {
                start_time: 15.0,
                end_time: 15.0,
                user_media_id: "media-1".to_string(),
            }]),
        };
        let err = req.validate().unwrap_err();
        assert_eq!(err.field, "custom_broll_items");
        assert!(err.constraint.contains("greater than start_time"));
    }

    #[test]
    fn export_ranges_are_enforced() {
        let mut req = ExportProjectRequest {
            project_id: "p1".to_string(),
            fps: Some(61),
            width: None,
            height: None,
            webhook_url: None,
        };
        assert_eq!(req.validate().unwrap_err().field, "fps");

        req.fps = Some(30);
        req.width = Some(99);
        assert_eq!(req.validate().unwrap_err().field, "width");

        req.width = Some(1080);
        req.height = Some(4001);
        assert_eq!(req.validate().unwrap_err().field, "height");

        req.height = Some(1920);
        assert!(req.validate().is_ok());
        let body = req.to_body();
        assert_eq!(body["fps"], 30);
        assert_eq!(body["width"], 1080);
        assert_eq!(body["height"], 1920);
    }

    #[test]
    fn clip_lengths_must_be_ordered_and_bounded() {
        let mut clips: CreateMagicClipsRequest = serde_json::from_value(json!({
            "title": "Clips",
            "youtube_url": "https://youtube.com/watch?v=abc",
            "language": "en",
        }))
        .unwrap();
        assert_eq!(clips.min_clip_length, 15);
        assert_eq!(clips.max_clip_length, 60);
        assert!(clips.validate().is_ok());

        clips.min_clip_length = 14;
        assert_eq!(clips.validate().unwrap_err().field, "min_clip_length");

        clips.min_clip_length = 120;
        clips.max_clip_length = 60;
        let err = clips.validate().unwrap_err();
        assert!(err.constraint.contains("must be <= max_clip_length"));
    }

    #[test]
    fn clips_body_uses_wire_field_names() {
        let clips: CreateMagicClipsRequest = serde_json::from_value(json!({
            "title": "Clips",
            "youtube_url": "https://youtube.com/watch?v=abc",
            "language": "en",
            "user_theme_id": "theme-1",
        }))
        .unwrap();
        let body = clips.to_body();
        assert_eq!(body["youtubeUrl"], "https://youtube.com/watch?v=abc");
        assert_eq!(body["minClipLength"], 15);
        assert_eq!(body["maxClipLength"], 60);
        assert_eq!(body["userThemeId"], "theme-1");
        assert!(body.get("webhookUrl").is_none());
    }
}
