//! Rendering of decoded entities for display.

use serde::Serialize;

use crate::error::Result;

/// Text format for rendered entities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Render any entity graph as YAML or pretty-printed JSON.
///
/// # Examples
/// ```
/// use webtrust_response::models::Vulnerability;
/// use webtrust_response::output::{render, OutputFormat};
///
/// let vuln = Vulnerability { severity: "low".to_string(), number_found: "1".to_string() };
/// let yaml = render(&vuln, OutputFormat::Yaml).unwrap();
/// assert!(yaml.contains("severity: low"));
/// ```
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Yaml => serde_yaml_ng::to_string(value)?,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(value)?;
            json.push('\n');
            json
        }
    };
    Ok(text)
}
