use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use serde::Serialize;
use serde_json::value::RawValue;
use crate::trace::TraceError;
/// One sample value, kept as the exact JSON number text it was read as.
#[derive(Clone, Debug, Serialize)]
#[serde(transparent)]
pub struct Token(Box<RawValue>);
impl Token {
    /// Accepts `text` only when it is a single JSON number literal. Only the
    /// grammar is checked, so literals outside f64 range are kept.
    pub fn parse(text: &str) -> Option<Self> {
        let raw = RawValue::from_string(text.to_owned()).ok()?;
        matches!(raw.get().as_bytes().first(), Some(b'-' | b'0'..=b'9')).then_some(Token(raw))
    }
    pub fn as_str(&self) -> &str {
        self.0.get()
    }
}
/// Ordered, non-empty column of samples read from one input file.
#[derive(Clone, Debug)]
pub struct TokenColumn {
    pub tokens: Vec<Token>,
    pub blank_lines: usize,
}
impl TokenColumn {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }
    /// Reads one value per line. Blank lines are skipped; anything else must
    /// be a JSON number. `path` is only used for error reporting.
    pub fn from_reader<R: BufRead>(reader: R, path: &Path) -> Result<Self, TraceError> {
        let mut tokens = Vec::new();
        let mut blank_lines = 0;
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| TraceError::io(path, e))?;
            // 去掉 UTF-8 BOM
            let line = match index {
                0 => line.strip_prefix('\u{feff}').unwrap_or(&line),
                _ => &line,
            };
            let text = line.trim();
            if text.is_empty() {
                blank_lines += 1;
                continue;
            }
            let token = Token::parse(text).ok_or_else(|| TraceError::InvalidToken {
                path: path.to_path_buf(),
                line: index + 1,
                token: text.to_owned(),
            })?;
            tokens.push(token);
        }
        if tokens.is_empty() {
            return Err(TraceError::EmptyInput {
                path: path.to_path_buf(),
            });
        }
        Ok(Self {
            tokens,
            blank_lines,
        })
    }
}
/// Opens `path` and reads it as a [`TokenColumn`]. The handle is closed on return.
pub fn read_column(path: &Path) -> Result<TokenColumn, TraceError> {
    let file = File::open(path).map_err(|e| TraceError::io(path, e))?;
    let column = TokenColumn::from_reader(BufReader::new(file), path)?;
    log::debug!(
        "read {} values from {} ({} blank lines skipped)",
        column.len(),
        path.display(),
        column.blank_lines
    );
    Ok(column)
}
