//! Report presentation
//!
//! Renderers turn a [`PlanReport`] into text for a particular surface. The
//! calculator never formats output itself, so any renderer can be swapped in.

mod html;
mod json;
mod text;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use text::TextRenderer;

use crate::error::Result;
use crate::models::PlanReport;

/// Converts a report to an output format
pub trait ReportRenderer: Send + Sync {
    fn render(&self, report: &PlanReport) -> Result<String>;

    /// MIME type of the rendered output
    fn content_type(&self) -> &'static str;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Html => "html",
            Self::Json => "json",
        }
    }

    pub fn renderer(&self) -> Box<dyn ReportRenderer> {
        match self {
            Self::Text => Box::new(TextRenderer),
            Self::Html => Box::new(HtmlRenderer),
            Self::Json => Box::new(JsonRenderer::pretty()),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "plain" => Ok(Self::Text),
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            _ => Err(format!(
                "Unknown output format: {}. Available: text, html, json",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Render a report in the given format
pub fn render(report: &PlanReport, format: OutputFormat) -> Result<String> {
    format.renderer().render(report)
}
