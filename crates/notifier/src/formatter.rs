//! Message formatter — turns a render job and lifecycle event into Telegram text.
//!
//! Output uses Telegram's legacy `Markdown` dialect: `*bold*` labels and
//! `` `code` `` values. Field values are embedded as-is, without escaping.

use render_common::types::{RenderEvent, RenderJob};

/// Header line for a lifecycle event.
pub fn header(event: &RenderEvent) -> &'static str {
    match event {
        RenderEvent::PreRender => "🚀 *Render Started*",
        RenderEvent::PostRender => "✅ *Render Finished*",
        RenderEvent::Error => "❌ *Render Failed*",
        RenderEvent::Other(_) => "ℹ️ *Render Update*",
    }
}

/// Last `/`-separated segment of a path, or the whole path when that segment is empty.
pub fn display_name(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => path,
    }
}

/// Build the full message body. Pure and total.
pub fn format_message(job: &RenderJob, event: &RenderEvent, extra_text: &str) -> String {
    let mut details: Vec<(&str, &str)> = Vec::with_capacity(5);

    if let Some(uid) = job.uid() {
        details.push(("Job ID", uid));
    }
    if let Some(composition) = job.composition() {
        details.push(("Composition", composition));
    }
    if let Some(src) = job.template_src() {
        details.push(("Project", display_name(src)));
    }
    if let Some(output) = job.output() {
        details.push(("Output", display_name(output)));
    }
    if event.is_error() {
        if let Some(error) = job.error() {
            details.push(("Error", error));
        }
    }

    let mut lines = vec![
        header(event).to_string(),
        String::new(),
        "*Job Details:*".to_string(),
    ];
    lines.extend(
        details
            .into_iter()
            .map(|(label, value)| format!("• *{}:* `{}`", label, value)),
    );

    if !extra_text.is_empty() {
        lines.push(String::new());
        lines.push(extra_text.to_string());
    }

    lines.join("\n")
}
