//! AppleScript snippets and the `osascript` runner.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::ControlError;
use crate::model::constants::OSASCRIPT_PATH;
use crate::model::AppearanceMode;

/// Runs one script and returns its trimmed standard output.
pub trait ScriptRunner: Send + Sync {
    fn run(&self, script: &str) -> Result<String, ControlError>;
}

/// Runs scripts through `osascript -e`, waiting for the process to exit.
#[derive(Debug, Clone)]
pub struct OsaScript {
    program: PathBuf,
}

impl OsaScript {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for OsaScript {
    fn default() -> Self {
        Self::new(OSASCRIPT_PATH)
    }
}

impl ScriptRunner for OsaScript {
    fn run(&self, script: &str) -> Result<String, ControlError> {
        let output = Command::new(&self.program)
            .arg("-e")
            .arg(script)
            .stdin(Stdio::null())
            .output()
            .map_err(|err| {
                ControlError::script(format!("{}: {err}", self.program.display()))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ControlError::script(format!(
                "{} exited with {}: {}",
                self.program.display(),
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Query the system appearance; prints `true` in dark mode.
pub const QUERY_DARK_MODE_SCRIPT: &str =
    "tell app \"System Events\" to tell appearance preferences to get dark mode";

/// Switch the system appearance.
pub fn system_appearance_script(mode: AppearanceMode) -> String {
    format!(
        "tell app \"System Events\" to tell appearance preferences to set dark mode to {}",
        mode.as_script_bool()
    )
}

/// Font applied to Terminal tabs alongside the colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalStyle {
    pub font_name: String,
    pub font_size: u32,
}

/// Recolor every tab of every Terminal window.
///
/// Dark mode is white on black, light mode black on white; the cursor follows
/// the text color. Windows that refuse the change are skipped.
pub fn terminal_colors_script(mode: AppearanceMode, style: &TerminalStyle) -> String {
    const BLACK: &str = "{0, 0, 0}";
    const WHITE: &str = "{65535, 65535, 65535}";

    let (background, text) = if mode.is_dark() {
        (BLACK, WHITE)
    } else {
        (WHITE, BLACK)
    };

    format!(
        r#"tell application "Terminal"
    set bgColor to {background}
    set txtColor to {text}
    set cursorColor to {text}
    repeat with w in windows
        try
            repeat with t in tabs of w
                set background color of current settings of t to bgColor
                set normal text color of current settings of t to txtColor
                set cursor color of current settings of t to cursorColor
                set font name of current settings of t to "{font}"
                set font size of current settings of t to {size}
            end repeat
        end try
    end repeat
end tell"#,
        font = escape_applescript(&style.font_name),
        size = style.font_size,
    )
}

/// Parse the output of [`QUERY_DARK_MODE_SCRIPT`].
pub fn parse_dark_mode(output: &str) -> Option<AppearanceMode> {
    match output.trim() {
        "true" => Some(AppearanceMode::Dark),
        "false" => Some(AppearanceMode::Light),
        _ => None,
    }
}

fn escape_applescript(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> TerminalStyle {
        TerminalStyle {
            font_name: "SF Mono Regular".into(),
            font_size: 13,
        }
    }

    #[test]
    fn system_script_sets_boolean() {
        assert!(system_appearance_script(AppearanceMode::Dark).ends_with("set dark mode to true"));
        assert!(system_appearance_script(AppearanceMode::Light).ends_with("set dark mode to false"));
    }

    #[test]
    fn terminal_script_dark_is_white_on_black() {
        let script = terminal_colors_script(AppearanceMode::Dark, &style());
        assert!(script.contains("set bgColor to {0, 0, 0}"));
        assert!(script.contains("set txtColor to {65535, 65535, 65535}"));
        assert!(script.contains("set cursorColor to {65535, 65535, 65535}"));
    }

    #[test]
    fn terminal_script_light_is_black_on_white() {
        let script = terminal_colors_script(AppearanceMode::Light, &style());
        assert!(script.contains("set bgColor to {65535, 65535, 65535}"));
        assert!(script.contains("set txtColor to {0, 0, 0}"));
    }

    #[test]
    fn terminal_script_carries_font() {
        let script = terminal_colors_script(AppearanceMode::Light, &style());
        assert!(script.contains("to \"SF Mono Regular\""));
        assert!(script.contains("font size of current settings of t to 13"));
    }

    #[test]
    fn terminal_script_escapes_font_name() {
        let style = TerminalStyle {
            font_name: "Evil\" end tell".into(),
            font_size: 12,
        };
        let script = terminal_colors_script(AppearanceMode::Dark, &style);
        assert!(script.contains("to \"Evil\\\" end tell\""));
    }

    #[test]
    fn dark_mode_output_parsing() {
        assert_eq!(parse_dark_mode("true\n"), Some(AppearanceMode::Dark));
        assert_eq!(parse_dark_mode("  false "), Some(AppearanceMode::Light));
        assert_eq!(parse_dark_mode(""), None);
        assert_eq!(parse_dark_mode("execution error"), None);
    }

    #[test]
    fn missing_interpreter_is_a_script_error() {
        let runner = OsaScript::new("/nonexistent/osascript");
        assert!(matches!(
            runner.run(QUERY_DARK_MODE_SCRIPT),
            Err(ControlError::Script { .. })
        ));
    }
}
