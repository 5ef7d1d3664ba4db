//! The tool surface: seven stateless MCP tools composing
//! validator -> dispatcher -> formatter. Validation and API failures are
//! always rendered as tool text so the calling host never has to catch a
//! protocol error.

use reqwest::Method;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use tracing::debug;

use crate::api::ApiClient;
use crate::config::ServerContext;
use crate::error::{ApiFailure, ValidationError};
use crate::format::{
    DetailLevel, format_project, pace_description, platform_hint, status_hint, truncate,
};
use crate::inputs::{
    CreateMagicClipsRequest, CreateProjectRequest, ExportProjectRequest, GetProjectRequest,
    UpdateProjectRequest,
};
use crate::project::{LanguageEntry, LanguagesResponse, Project, TemplatesResponse};

#[derive(Clone)]
pub struct SubmagicServer {
    api: ApiClient,
    tool_router: ToolRouter<Self>,
}

fn text(output: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(truncate(output))])
}

fn error_text(output: String) -> CallToolResult {
    CallToolResult::error(vec![Content::text(truncate(output))])
}

fn rejected(err: ValidationError) -> CallToolResult {
    error_text(format!(
        "Input validation error: {err}\n\nPlease check your parameters and try again."
    ))
}

fn failed(failure: ApiFailure) -> CallToolResult {
    error_text(failure.render())
}

fn decode<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> Result<T, CallToolResult> {
    serde_json::from_value(value).map_err(|e| {
        error_text(format!("Unexpected response shape from the Submagic API: {e}"))
    })
}

#[tool_router]
impl SubmagicServer {
    pub fn new(ctx: &ServerContext) -> Self {
        Self {
            api: ApiClient::new(ctx),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Get the list of supported languages for transcription and captions. Use the returned code (e.g. 'en', 'es') as the language parameter of submagic_create_project. Rate limit: 1000 requests/hour."
    )]
    pub async fn submagic_list_languages(&self) -> Result<CallToolResult, McpError> {
        let value = match self.api.request(Method::GET, "languages", None, None).await {
            Ok(value) => value,
            Err(failure) => return Ok(failed(failure)),
        };
        let parsed: LanguagesResponse = match decode(value) {
            Ok(parsed) => parsed,
            Err(result) => return Ok(result),
        };

        let mut output = format!(
            "# Supported Languages ({} total)\n\n\
             Available language codes for transcription and captions:\n\n",
            parsed.languages.len()
        );
        for entry in &parsed.languages {
            match entry {
                LanguageEntry::Detailed { code, name } => {
                    output.push_str(&format!(
                        "- **{code}** - {}\n",
                        name.as_deref().unwrap_or("")
                    ));
                }
                LanguageEntry::Code(code) => output.push_str(&format!("- {code}\n")),
            }
        }
        output.push_str(
            "\n**Usage:** Use the language code (e.g. 'en', 'es') when creating a project.",
        );

        Ok(text(output))
    }

    #[tool(
        description = "Get the list of available video styling templates. The Hormozi series suits high-energy business content, 'Sara' general social media, 'Beast' entertainment. Pass the exact, case-sensitive name to submagic_create_project. Rate limit: 1000 requests/hour."
    )]
    pub async fn submagic_list_templates(&self) -> Result<CallToolResult, McpError> {
        let value = match self.api.request(Method::GET, "templates", None, None).await {
            Ok(value) => value,
            Err(failure) => return Ok(failed(failure)),
        };
        let parsed: TemplatesResponse = match decode(value) {
            Ok(parsed) => parsed,
            Err(result) => return Ok(result),
        };

        let (mut hormozi, mut other): (Vec<&String>, Vec<&String>) = parsed
            .templates
            .iter()
            .partition(|name| name.to_lowercase().contains("hormozi"));
        hormozi.sort();
        other.sort();

        let mut output = format!(
            "# Available Templates ({} total)\n\n\
             Choose a template name to apply professional styling to your videos:\n\n",
            parsed.templates.len()
        );
        if !hormozi.is_empty() {
            output.push_str("## Hormozi Series (Business/Sales)\n");
            for name in &hormozi {
                output.push_str(&format!("- `{name}`\n"));
            }
            output.push('\n');
        }
        if !other.is_empty() {
            output.push_str("## Other Styles\n");
            for name in &other {
                output.push_str(&format!("- `{name}`\n"));
            }
        }
        output.push_str(
            "\n**Usage:** Pass the exact template name to `submagic_create_project`\n\n\
             **Note:** Template names are case-sensitive. If not specified, \"Sara\" is used by default.",
        );

        Ok(text(output))
    }

    #[tool(
        description = "Create a new video project with AI-powered captions and effects. Downloads the video from the URL, transcribes it, applies the chosen template plus magic zooms/B-rolls, and removes silence and filler words. Processing takes 2-10 minutes; poll with submagic_get_project using the returned project ID. Rate limit: 500 requests/hour."
    )]
    pub async fn submagic_create_project(
        &self,
        Parameters(req): Parameters<CreateProjectRequest>,
    ) -> Result<CallToolResult, McpError> {
        if let Err(err) = req.validate() {
            return Ok(rejected(err));
        }
        debug!(title = %req.title, "creating project");

        let body = req.to_body();
        let value = match self
            .api
            .request(Method::POST, "projects", Some(&body), None)
            .await
        {
            Ok(value) => value,
            Err(failure) => return Ok(failed(failure)),
        };
        let project: Project = match decode(value) {
            Ok(project) => project,
            Err(result) => return Ok(result),
        };

        let id = project.any_id().unwrap_or("unknown").to_string();
        let output = format!(
            "{}\n\n\
             ## Next Steps\n\
             1. Save the project ID: `{id}`\n\
             2. Check processing status with: `submagic_get_project(\"{id}\")`\n\
             3. Once status is \"completed\", use `submagic_export_project` to download\n\n\
             **Processing Time:** Usually 2-10 minutes depending on video length\n\
             **Status Check:** Poll every 30-60 seconds until complete\n",
            format_project(&project, DetailLevel::Detailed)
        );

        Ok(text(output))
    }

    #[tool(
        description = "Get detailed information about a project, including processing status and, once completed, the download URL. Statuses: queued (waiting), processing (being edited), completed (ready to export), failed. Rate limit: 500 requests/hour."
    )]
    pub async fn submagic_get_project(
        &self,
        Parameters(req): Parameters<GetProjectRequest>,
    ) -> Result<CallToolResult, McpError> {
        if let Err(err) = req.validate() {
            return Ok(rejected(err));
        }

        let path = format!("projects/{}", req.project_id);
        let value = match self.api.request(Method::GET, &path, None, None).await {
            Ok(value) => value,
            Err(failure) => return Ok(failed(failure)),
        };
        let project: Project = match decode(value) {
            Ok(project) => project,
            Err(result) => return Ok(result),
        };

        let mut output = format_project(&project, DetailLevel::Detailed);
        let status = project.status.as_deref().unwrap_or("unknown");
        if let Some(hint) = status_hint(status, project.error.as_deref()) {
            output.push_str("\n\n");
            output.push_str(&hint);
        }

        Ok(text(output))
    }

    #[tool(
        description = "Update an existing project: adjust silence removal pace, enable removal of filler words and bad takes, or insert custom B-roll clips at specific timestamps. Only the supplied fields change. Changes require re-exporting the project to take effect; magic zooms and B-rolls can only be set at creation. Rate limit: 100 requests/hour."
    )]
    pub async fn submagic_update_project(
        &self,
        Parameters(req): Parameters<UpdateProjectRequest>,
    ) -> Result<CallToolResult, McpError> {
        if let Err(err) = req.validate() {
            return Ok(rejected(err));
        }

        let Some(body) = req.to_body() else {
            return Ok(text(
                "No updates provided. Please specify at least one field to update:\n\
                 - remove_silence_pace\n\
                 - remove_bad_takes\n\
                 - custom_broll_items"
                    .to_string(),
            ));
        };

        let path = format!("projects/{}", req.project_id);
        let value = match self
            .api
            .request(Method::PUT, &path, Some(&body), None)
            .await
        {
            Ok(value) => value,
            Err(failure) => return Ok(failed(failure)),
        };
        let project: Project = match decode(value) {
            Ok(project) => project,
            Err(result) => return Ok(result),
        };

        let mut output = format!(
            "# Project Updated Successfully\n\n\
             **Project ID:** {}\n\
             **Status:** {}\n\n\
             ## Updates Applied:\n",
            req.project_id,
            project.status.as_deref().unwrap_or("updated")
        );
        if let Some(pace) = &req.remove_silence_pace {
            output.push_str(&format!(
                "- **Silence Removal:** {}\n",
                pace_description(pace)
            ));
        }
        if let Some(remove_bad_takes) = req.remove_bad_takes {
            if remove_bad_takes {
                output.push_str(
                    "- **Bad Takes Removal:** Enabled (AI processing filler words - takes 1-2 min)\n",
                );
            } else {
                output.push_str("- **Bad Takes Removal:** Disabled\n");
            }
        }
        if let Some(items) = &req.custom_broll_items {
            output.push_str(&format!(
                "- **Custom B-rolls:** {} clip(s) inserted\n",
                items.len()
            ));
            for (index, item) in items.iter().enumerate() {
                output.push_str(&format!(
                    "  - Clip {}: {}s to {}s ({:.1}s duration)\n",
                    index + 1,
                    item.start_time,
                    item.end_time,
                    item.end_time - item.start_time
                ));
            }
        }
        output.push_str(&format!(
            "\n## Next Steps\n\
             1. **Check status:** Use `submagic_get_project(\"{id}\")` to verify completion\n\
             2. **Re-export:** Run `submagic_export_project(\"{id}\")` to apply changes\n\n\
             **Important:** Changes won't appear in the video until you re-export!\n",
            id = req.project_id
        ));

        Ok(text(output))
    }

    #[tool(
        description = "Export a completed project video, optionally overriding fps (1-60) and resolution (100-4000 px per side). The export runs asynchronously; poll with submagic_get_project until the download URL appears. The project must have status \"completed\" first. Rate limit: 500 requests/hour."
    )]
    pub async fn submagic_export_project(
        &self,
        Parameters(req): Parameters<ExportProjectRequest>,
    ) -> Result<CallToolResult, McpError> {
        if let Err(err) = req.validate() {
            return Ok(rejected(err));
        }

        let body = req.to_body();
        let path = format!("projects/{}/export", req.project_id);
        let value = match self
            .api
            .request(Method::POST, &path, Some(&body), None)
            .await
        {
            Ok(value) => value,
            Err(failure) => return Ok(failed(failure)),
        };
        let project: Project = match decode(value) {
            Ok(project) => project,
            Err(result) => return Ok(result),
        };

        let dimension = |value: Option<u32>| {
            value
                .map(|v| v.to_string())
                .unwrap_or_else(|| "Project default".to_string())
        };
        let output = format!(
            "# Export Started Successfully\n\n\
             **Project ID:** {}\n\
             **Status:** {}\n\n\
             ## Export Settings\n\
             - **FPS:** {}\n\
             - **Width:** {}\n\
             - **Height:** {}\n\
             - **Webhook:** {}\n\n\
             ## Next Steps\n\
             1. The export process is asynchronous and takes a few minutes\n\
             2. Monitor progress with: `submagic_get_project(\"{}\")`\n\
             3. Once complete, the project will carry the download URL\n",
            req.project_id,
            project.status.as_deref().unwrap_or("exporting"),
            dimension(req.fps),
            dimension(req.width),
            dimension(req.height),
            req.webhook_url.as_deref().unwrap_or("None"),
            req.project_id
        );

        Ok(text(output))
    }

    #[tool(
        description = "Automatically generate viral short-form clips from a YouTube video. AI picks the most engaging moments and produces 9:16 captioned clips between min_clip_length and max_clip_length seconds (e.g. 15-30 for TikTok, up to 60 for Reels/Shorts). Takes 5-15 minutes; poll with submagic_get_project. Rate limit: 500 requests/hour."
    )]
    pub async fn submagic_create_magic_clips(
        &self,
        Parameters(req): Parameters<CreateMagicClipsRequest>,
    ) -> Result<CallToolResult, McpError> {
        if let Err(err) = req.validate() {
            return Ok(rejected(err));
        }

        let body = req.to_body();
        let value = match self
            .api
            .request(Method::POST, "projects/magic-clips", Some(&body), None)
            .await
        {
            Ok(value) => value,
            Err(failure) => return Ok(failed(failure)),
        };
        let project: Project = match decode(value) {
            Ok(project) => project,
            Err(result) => return Ok(result),
        };

        let id = project.any_id().unwrap_or("unknown");
        let output = format!(
            "# Magic Clips Generation Started\n\n\
             **Project ID:** `{id}`\n\
             **Title:** {}\n\
             **Source:** {}\n\n\
             ## Configuration\n\
             - **Clip Length:** {min}s to {max}s\n\
             - **Language:** {}\n\
             - **Theme:** {}\n\
             - **Webhook:** {}\n\n\
             **Platform Fit:** {}\n\n\
             **Status:** {}\n\n\
             ## Next Steps\n\
             1. Wait 5-15 minutes for AI analysis and clip generation\n\
             2. Check status with: `submagic_get_project(\"{id}\")`\n\
             3. Once complete, the response will include individual clip download URLs\n\
             4. Each clip will be {min}-{max} seconds long\n",
            req.title,
            req.youtube_url,
            req.language,
            if req.user_theme_id.is_some() {
                "Custom branded theme"
            } else {
                "Default template"
            },
            if req.webhook_url.is_some() {
                "Configured"
            } else {
                "None"
            },
            platform_hint(req.max_clip_length),
            project.status.as_deref().unwrap_or("processing"),
            min = req.min_clip_length,
            max = req.max_clip_length,
        );

        Ok(text(output))
    }
}

#[tool_handler]
impl ServerHandler for SubmagicServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Submagic turns raw videos into caption-styled social media content.\n\n\
                 Typical workflow:\n\
                 1. submagic_list_languages / submagic_list_templates to pick settings\n\
                 2. submagic_create_project with a public video URL\n\
                 3. Poll submagic_get_project every 30-60 seconds until \"completed\"\n\
                 4. submagic_update_project for fine-tuning, then submagic_export_project\n\n\
                 submagic_create_magic_clips instead cuts a long YouTube video into \
                 short-form clips. All tools return text; errors come back as readable \
                 explanations with suggestions, never as exceptions."
                    .to_string(),
            ),
            ..Default::default()
        }
    }
}
