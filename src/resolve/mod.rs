//! Whole-spec channel resolution: maps each linked channel to its linker.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::linker;
use crate::spec::ComponentSpec;

/// Outcome of resolving one linked feature channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelResolution {
    /// Channel name from the spec.
    pub channel: String,
    /// Feature markup string of the channel.
    pub fml: String,
    /// Name of the selected linker variant, if one matched.
    pub linker: Option<String>,
    /// Selection failure rendered as a diagnostic, if no variant matched.
    pub error: Option<String>,
}

/// Result of resolving every linked channel in a component spec.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolutionReport {
    /// The component whose channels were resolved.
    pub component: String,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Per-channel resolution results, in spec order.
    pub channels: Vec<ChannelResolution>,
}

impl ResolutionReport {
    /// Returns `true` if every channel resolved to a linker.
    #[must_use]
    pub fn fully_resolved(&self) -> bool {
        self.channels.iter().all(|c| c.linker.is_some())
    }

    /// Returns channel names that could not be resolved.
    #[must_use]
    pub fn unresolved(&self) -> Vec<&str> {
        self.channels
            .iter()
            .filter(|c| c.linker.is_none())
            .map(|c| c.channel.as_str())
            .collect()
    }
}

/// Resolves every linked channel of `spec` against the linker registry.
///
/// Selection is a pure query, so a failing channel is recorded in the report
/// rather than aborting the remaining channels.
#[must_use]
pub fn resolve_channels(spec: &ComponentSpec) -> ResolutionReport {
    let channels = spec
        .linked_features
        .iter()
        .map(|channel| match linker::select(channel, spec) {
            Ok(name) => ChannelResolution {
                channel: channel.name.clone(),
                fml: channel.fml.clone(),
                linker: Some(name.to_string()),
                error: None,
            },
            Err(err) => ChannelResolution {
                channel: channel.name.clone(),
                fml: channel.fml.clone(),
                linker: None,
                error: Some(err.to_string()),
            },
        })
        .collect();

    ResolutionReport { component: spec.name.clone(), generated_at: Utc::now(), channels }
}

/// Formats a `ResolutionReport` as a human-readable report.
#[must_use]
pub fn format_report(report: &ResolutionReport) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Component: {}", report.component));
    lines.push(String::new());
    for resolution in &report.channels {
        if let Some(linker) = &resolution.linker {
            lines.push(format!("  [OK]   {} ({}) -> {linker}", resolution.channel, resolution.fml));
        } else {
            lines.push(format!("  [FAIL] {} ({})", resolution.channel, resolution.fml));
            if let Some(error) = &resolution.error {
                lines.push(format!("         {error}"));
            }
        }
    }
    lines.push(String::new());
    let overall = if report.fully_resolved() { "RESOLVED" } else { "UNRESOLVED" };
    lines.push(format!("Result: {overall}"));

    lines.join("\n")
}
