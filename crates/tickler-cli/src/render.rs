//! Terminal rendering for task views.

use std::io::IsTerminal;

use tickler_core::TaskView;

// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";

#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Enable ANSI color codes.
    pub color: bool,
}

impl RenderConfig {
    /// Color only when allowed and stdout is a terminal.
    pub fn detect(allowed: bool) -> Self {
        Self {
            color: allowed
                && std::io::stdout().is_terminal()
                && std::env::var_os("NO_COLOR").is_none(),
        }
    }
}

/// `[id] text`, colored by priority, with the value appended when present.
pub fn render_task(view: &TaskView, config: RenderConfig) -> String {
    let body = format!("[{}] {}", view.id, view.text);
    let value = view.value.map(|v| format!(" ({v:.2})"));

    if !config.color {
        return format!("{body}{}", value.unwrap_or_default());
    }

    let mut out = format!("\x1b[{}m{body}{RESET}", view.color);
    if let Some(value) = value {
        out.push_str(&format!("{DIM}{value}{RESET}"));
    }
    out
}
