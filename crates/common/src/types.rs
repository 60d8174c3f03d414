use serde::{Deserialize, Serialize};

/// Render lifecycle stages the hook is invoked for.
///
/// The render pipeline passes the stage as a plain string, so any value
/// outside the known set is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RenderEvent {
    PreRender,
    PostRender,
    Error,
    Other(String),
}

impl RenderEvent {
    pub fn as_str(&self) -> &str {
        match self {
            RenderEvent::PreRender => "prerender",
            RenderEvent::PostRender => "postrender",
            RenderEvent::Error => "error",
            RenderEvent::Other(name) => name,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, RenderEvent::Error)
    }
}

impl From<&str> for RenderEvent {
    fn from(value: &str) -> Self {
        match value {
            "prerender" => RenderEvent::PreRender,
            "postrender" => RenderEvent::PostRender,
            "error" => RenderEvent::Error,
            other => RenderEvent::Other(other.to_string()),
        }
    }
}

impl From<String> for RenderEvent {
    fn from(value: String) -> Self {
        match value.as_str() {
            "prerender" | "postrender" | "error" => RenderEvent::from(value.as_str()),
            _ => RenderEvent::Other(value),
        }
    }
}

impl From<RenderEvent> for String {
    fn from(event: RenderEvent) -> Self {
        match event {
            RenderEvent::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for RenderEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// After Effects template reference carried by a render job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub composition: Option<String>,
    pub src: Option<String>,
}

/// Per-invocation overrides attached to the job by the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionOverrides {
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
    pub text: Option<String>,
}

/// A render job as handed over by the render pipeline. Read-only here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderJob {
    pub uid: Option<String>,
    pub template: Option<Template>,
    pub output: Option<String>,
    pub error: Option<String>,
    pub action: Option<ActionOverrides>,
}

impl RenderJob {
    pub fn uid(&self) -> Option<&str> {
        present(&self.uid)
    }

    pub fn composition(&self) -> Option<&str> {
        self.template.as_ref().and_then(|t| present(&t.composition))
    }

    pub fn template_src(&self) -> Option<&str> {
        self.template.as_ref().and_then(|t| present(&t.src))
    }

    pub fn output(&self) -> Option<&str> {
        present(&self.output)
    }

    pub fn error(&self) -> Option<&str> {
        present(&self.error)
    }

    pub fn override_bot_token(&self) -> Option<&str> {
        self.action.as_ref().and_then(|a| present(&a.bot_token))
    }

    pub fn override_chat_id(&self) -> Option<&str> {
        self.action.as_ref().and_then(|a| present(&a.chat_id))
    }

    pub fn override_text(&self) -> Option<&str> {
        self.action.as_ref().and_then(|a| present(&a.text))
    }
}

/// Render pipeline settings. Accepted by the hook but not consulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderSettings(pub serde_json::Map<String, serde_json::Value>);

/// Bot token and chat id pair used when a job carries no overrides.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
}

impl Credentials {
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            bot_token: Some(bot_token.into()),
            chat_id: Some(chat_id.into()),
        }
    }

    pub fn bot_token(&self) -> Option<&str> {
        present(&self.bot_token)
    }

    pub fn chat_id(&self) -> Option<&str> {
        present(&self.chat_id)
    }
}

// Keeps the bot token out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("bot_token", &self.bot_token().map(|_| "<redacted>"))
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

/// Empty strings count as absent, matching how the pipeline fills optional fields.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_parsing() {
        assert_eq!(RenderEvent::from("prerender"), RenderEvent::PreRender);
        assert_eq!(RenderEvent::from("postrender"), RenderEvent::PostRender);
        assert_eq!(RenderEvent::from("error"), RenderEvent::Error);
        assert_eq!(
            RenderEvent::from("Error"),
            RenderEvent::Other("Error".to_string())
        );
        assert_eq!(RenderEvent::from("cleanup".to_string()).as_str(), "cleanup");
    }

    #[test]
    fn test_job_deserializes_pipeline_json() {
        let job: RenderJob = serde_json::from_value(serde_json::json!({
            "uid": "J1",
            "state": "queued",
            "template": { "src": "file:///tmp/proj.aep", "composition": "main" },
            "output": "/out/final.mp4",
            "action": { "botToken": "123:abc", "chatId": "-100", "text": "hi" }
        }))
        .unwrap();

        assert_eq!(job.uid(), Some("J1"));
        assert_eq!(job.composition(), Some("main"));
        assert_eq!(job.override_bot_token(), Some("123:abc"));
        assert_eq!(job.override_chat_id(), Some("-100"));
        assert_eq!(job.override_text(), Some("hi"));
        assert_eq!(job.error(), None);
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let job = RenderJob {
            uid: Some(String::new()),
            output: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(job.uid(), None);
        assert_eq!(job.output(), None);

        let creds = Credentials {
            bot_token: Some(String::new()),
            chat_id: Some("42".into()),
        };
        assert_eq!(creds.bot_token(), None);
        assert_eq!(creds.chat_id(), Some("42"));
    }

    #[test]
    fn test_credentials_debug_hides_token() {
        let creds = Credentials::new("secret-token", "42");
        let rendered = format!("{:?}", creds);
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("42"));
    }
}
