//! Editor settings file patching.
//!
//! One key of the editor's `settings.json` is replaced; every other key is
//! kept. The file is read as JSON with comments and trailing commas, the
//! dialect the editor itself accepts; comments do not survive the rewrite.
//! A file that exists but cannot be parsed as an object is never rewritten.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::error::ControlError;
use crate::model::constants::{EDITOR_DARK_THEME, EDITOR_LIGHT_THEME, EDITOR_THEME_KEY};
use crate::model::AppearanceMode;

/// The editor's user settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSettings {
    path: PathBuf,
}

impl EditorSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Theme name written for a mode.
    pub fn theme_for(mode: AppearanceMode) -> &'static str {
        if mode.is_dark() {
            EDITOR_DARK_THEME
        } else {
            EDITOR_LIGHT_THEME
        }
    }

    /// Write the theme matching `mode`.
    pub fn apply(&self, mode: AppearanceMode) -> Result<(), ControlError> {
        self.set_string(EDITOR_THEME_KEY, Self::theme_for(mode))
    }

    /// Replace one string key, creating the file and its directory if needed.
    pub fn set_string(&self, key: &str, value: &str) -> Result<(), ControlError> {
        let mut settings = self.load()?;
        settings.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                ControlError::filesystem(format!("{}: {err}", parent.display()))
            })?;
        }

        // Map is BTreeMap-backed, so keys come out sorted
        let json = serde_json::to_string_pretty(&Value::Object(settings))?;
        fs::write(&self.path, json)
            .map_err(|err| ControlError::filesystem(format!("{}: {err}", self.path.display())))
    }

    fn load(&self) -> Result<Map<String, Value>, ControlError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => {
                return Err(ControlError::filesystem(format!(
                    "{}: {err}",
                    self.path.display()
                )))
            }
        };

        let plain = strip_jsonc(&contents);
        if plain.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&plain)? {
            Value::Object(map) => Ok(map),
            other => Err(ControlError::json(format!(
                "{}: expected an object, found {}",
                self.path.display(),
                json_kind(&other)
            ))),
        }
    }
}

/// Reduce JSONC to plain JSON: drop `//` and `/* */` comments and trailing
/// commas before `}` or `]`. String contents are never touched.
fn strip_jsonc(input: &str) -> String {
    strip_trailing_commas(&strip_comments(input))
}

fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => out.extend(chars.next()),
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match (c, chars.peek()) {
            ('"', _) => {
                in_string = true;
                out.push(c);
            }
            ('/', Some('/')) => {
                // newline stays
                while chars.peek().is_some_and(|&next| next != '\n') {
                    chars.next();
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for next in chars.by_ref() {
                    if prev == '*' && next == '/' {
                        break;
                    }
                    if next == '\n' {
                        out.push('\n');
                    }
                    prev = next;
                }
                out.push(' ');
            }
            _ => out.push(c),
        }
    }
    out
}

fn strip_trailing_commas(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut in_string = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        i += 1;
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(&escaped) = chars.get(i) {
                        out.push(escaped);
                        i += 1;
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        if c == ',' {
            let closes = chars[i..]
                .iter()
                .find(|next| !next.is_whitespace())
                .is_some_and(|&next| next == '}' || next == ']');
            if closes {
                continue;
            }
        }
        if c == '"' {
            in_string = true;
        }
        out.push(c);
    }
    out
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
