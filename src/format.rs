//! Response-to-text rendering for LLM consumption. Every string that
//! leaves a tool passes through [`truncate`], since the consuming host has
//! a finite context budget.

use crate::project::Project;

pub const CHARACTER_LIMIT: usize = 25_000;
const TRUNCATION_MARKER: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailLevel {
    Summary,
    Detailed,
}

/// Deterministic truncation that always leaves room for the marker.
pub fn truncate(text: String) -> String {
    if text.chars().count() <= CHARACTER_LIMIT {
        return text;
    }
    let mut out: String = text
        .chars()
        .take(CHARACTER_LIMIT - TRUNCATION_MARKER.len())
        .collect();
    out.push_str(TRUNCATION_MARKER);
    out
}

fn mark(enabled: Option<bool>) -> &'static str {
    if enabled.unwrap_or(false) { "✓" } else { "✗" }
}

fn toggle(enabled: Option<bool>) -> &'static str {
    if enabled.unwrap_or(false) {
        "Enabled"
    } else {
        "Disabled"
    }
}

pub fn format_project(project: &Project, detail: DetailLevel) -> String {
    let title = project.title.as_deref().unwrap_or("Untitled");
    let id = project.any_id().unwrap_or("unknown");
    let status = project.status.as_deref().unwrap_or("unknown");
    let language = project.language.as_deref().unwrap_or("unknown");
    let template = project.template_name.as_deref().unwrap_or("default");
    let created = project.created_at.as_deref().unwrap_or("unknown");

    if detail == DetailLevel::Summary {
        return format!(
            "# Project: {title}\n\n\
             **ID:** `{id}`\n\
             **Status:** {status}\n\
             **Language:** {language}\n\
             **Template:** {template}\n\
             **Created:** {created}\n\n\
             **Features Enabled:**\n\
             - Magic Zooms: {}\n\
             - Magic B-rolls: {}\n\
             - Remove Bad Takes: {}\n",
            mark(project.magic_zooms),
            mark(project.magic_brolls),
            mark(project.remove_bad_takes),
        );
    }

    let updated = project.updated_at.as_deref().unwrap_or("unknown");
    let theme = project.user_theme_id.as_deref().unwrap_or("none");
    let percentage = project
        .magic_brolls_percentage
        .map(|p| p.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let pace = project.remove_silence_pace.as_deref().unwrap_or("natural");
    let webhook = project.webhook_url.as_deref().unwrap_or("none");

    let mut output = format!(
        "# Project Details: {title}\n\n\
         ## Basic Information\n\
         - **Project ID:** `{id}`\n\
         - **Status:** {status}\n\
         - **Language:** {language}\n\
         - **Created:** {created}\n\
         - **Updated:** {updated}\n\n\
         ## Styling\n\
         - **Template:** {template}\n\
         - **User Theme ID:** {theme}\n\n\
         ## AI Features\n\
         - **Magic Zooms:** {}\n\
         - **Magic B-rolls:** {}\n\
         - **B-roll Percentage:** {percentage}%\n\
         - **Remove Silence Pace:** {pace}\n\
         - **Remove Bad Takes:** {}\n\n\
         ## Integration\n\
         - **Webhook URL:** {webhook}\n",
        toggle(project.magic_zooms),
        toggle(project.magic_brolls),
        toggle(project.remove_bad_takes),
    );

    if let Some(video_url) = &project.video_url {
        output.push_str(&format!("\n**Video URL:** {video_url}"));
    }
    if let Some(output_url) = &project.output_url {
        output.push_str(&format!("\n\n## Output\n**Download URL:** {output_url}"));
    }

    output
}

/// Hint block keyed on the remote status enum; anything unrecognized gets
/// no hint rather than a wrong one.
pub fn status_hint(status: &str, error: Option<&str>) -> Option<String> {
    match status {
        "queued" => Some(
            "**🕐 Status: Queued**\nWaiting to start processing. Check again shortly."
                .to_string(),
        ),
        "processing" => {
            Some("**⏳ Status: Processing**\nCheck again in 30-60 seconds.".to_string())
        }
        "completed" => Some(
            "**✅ Status: Completed**\nReady to export! Use `submagic_export_project` to download."
                .to_string(),
        ),
        "failed" => Some(format!(
            "**❌ Status: Failed**\nError: {}",
            error.unwrap_or("Unknown error")
        )),
        _ => None,
    }
}

pub fn pace_description(pace: &str) -> String {
    match pace {
        "natural" => "Natural (0.6+ sec) - Gentle pacing".to_string(),
        "fast" => "Fast (0.2-0.6 sec) - Moderate compression".to_string(),
        "extra-fast" => "Extra-Fast (0.1-0.2 sec) - Maximum compression".to_string(),
        other => other.to_string(),
    }
}

/// Threshold bands on the maximum clip length.
pub fn platform_hint(max_clip_length: u32) -> &'static str {
    if max_clip_length <= 30 {
        "Perfect for TikTok!"
    } else if max_clip_length <= 60 {
        "Optimized for Instagram Reels & YouTube Shorts!"
    } else if max_clip_length <= 90 {
        "Great for extended YouTube Shorts!"
    } else {
        "Ideal for longer social media content!"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_project() -> Project {
        serde_json::from_str(
            r#"{
                "id": "p1",
                "title": "Demo",
                "language": "en",
                "status": "queued",
                "magicZooms": true,
                "magicBrolls": false,
                "magicBrollsPercentage": 75,
                "createdAt": "2026-08-01T00:00:00Z"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn truncate_is_bounded_and_marked() {
        let long = "x".repeat(CHARACTER_LIMIT + 500);
        let out = truncate(long);
        assert_eq!(out.chars().count(), CHARACTER_LIMIT);
        assert!(out.ends_with("..."));

        let short = "short".to_string();
        assert_eq!(truncate(short.clone()), short);
    }

    #[test]
    fn truncate_handles_multibyte_input() {
        let long = "日".repeat(CHARACTER_LIMIT + 1);
        let out = truncate(long);
        assert_eq!(out.chars().count(), CHARACTER_LIMIT);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn summary_shows_check_and_cross_marks() {
        let text = format_project(&sample_project(), DetailLevel::Summary);
        assert!(text.contains("# Project: Demo"));
        assert!(text.contains("**ID:** `p1`"));
        assert!(text.contains("- Magic Zooms: ✓"));
        assert!(text.contains("- Magic B-rolls: ✗"));
    }

    #[test]
    fn detailed_renders_placeholders_for_missing_fields() {
        let text = format_project(&sample_project(), DetailLevel::Detailed);
        assert!(text.contains("**User Theme ID:** none"));
        assert!(text.contains("**Updated:** unknown"));
        assert!(text.contains("**Webhook URL:** none"));
        // No video or output section when the URLs are absent.
        assert!(!text.contains("**Video URL:**"));
        assert!(!text.contains("**Download URL:**"));
    }

    #[test]
    fn detailed_appends_output_url_when_present() {
        let mut project = sample_project();
        project.output_url = Some("https://cdn.example/out.mp4".to_string());
        let text = format_project(&project, DetailLevel::Detailed);
        assert!(text.contains("**Download URL:** https://cdn.example/out.mp4"));
    }

    #[test]
    fn status_hints_are_distinct_per_status() {
        let completed = status_hint("completed", None).unwrap();
        let processing = status_hint("processing", None).unwrap();
        let failed = status_hint("failed", Some("transcode crashed")).unwrap();
        let queued = status_hint("queued", None).unwrap();
        assert!(completed.contains("submagic_export_project"));
        assert!(processing.contains("30-60 seconds"));
        assert!(failed.contains("transcode crashed"));
        assert_ne!(completed, processing);
        assert_ne!(processing, queued);
        assert!(status_hint("archived", None).is_none());
    }

    #[test]
    fn platform_bands_match_thresholds() {
        assert_eq!(platform_hint(30), "Perfect for TikTok!");
        assert_eq!(
            platform_hint(60),
            "Optimized for Instagram Reels & YouTube Shorts!"
        );
        assert_eq!(platform_hint(90), "Great for extended YouTube Shorts!");
        assert_eq!(platform_hint(180), "Ideal for longer social media content!");
    }
}
