//! JSON renderer

use crate::error::Result;
use crate::models::PlanReport;

use super::ReportRenderer;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pretty: bool,
}

impl JsonRenderer {
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &PlanReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }
}
