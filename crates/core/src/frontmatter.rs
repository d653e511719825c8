use serde_json::{Map, Value as JsonValue};
use thiserror::Error;

/// Front matter split out of a content document.
#[derive(Debug)]
pub struct Frontmatter {
    /// Front-matter fields, normalized into JSON values.
    pub fields: Map<String, JsonValue>,
    /// Byte offset inside the original document where the body begins.
    pub body_start: usize,
}

impl Frontmatter {
    fn none() -> Self {
        Self {
            fields: Map::new(),
            body_start: 0,
        }
    }
}

/// Errors emitted while locating or parsing a front-matter block.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    /// An opening `---` fence was never closed.
    #[error("unterminated front-matter block: expected closing '---'")]
    Unterminated,
    /// The block is not valid YAML.
    #[error("front-matter parse error: {0}")]
    Parse(String),
    /// The block parsed, but its top level is not a mapping.
    #[error("front matter must be a YAML mapping at the top level")]
    NotAMapping,
}

/// A line of input together with its byte span.
struct Line<'a> {
    text: &'a str,
    start: usize,
    /// Offset of the first byte after the line's terminator.
    end: usize,
}

struct LineCursor<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> LineCursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }

    fn next_line(&mut self) -> Option<Line<'a>> {
        if self.offset >= self.input.len() {
            return None;
        }
        let start = self.offset;
        let rest = &self.input[start..];
        let (text, end) = match rest.find('\n') {
            Some(pos) => (&rest[..pos], start + pos + 1),
            None => (rest, self.input.len()),
        };
        self.offset = end;
        Some(Line { text, start, end })
    }
}

/// Extracts the YAML front-matter block from a content document.
///
/// Leading BOM and blank lines are tolerated; the first significant line
/// must be a `---` fence for a block to exist at all. A document without a
/// block yields an empty field map and `body_start == 0`.
pub fn extract_frontmatter(input: &str) -> Result<Frontmatter, FrontmatterError> {
    let (text, bom_len) = strip_bom(input);
    let mut cursor = LineCursor::new(text);

    let opening = loop {
        match cursor.next_line() {
            Some(line) if line.text.trim().is_empty() => continue,
            Some(line) => break line,
            None => return Ok(Frontmatter::none()),
        }
    };
    if !is_fence(opening.text) {
        return Ok(Frontmatter::none());
    }

    let block_start = opening.end;
    loop {
        match cursor.next_line() {
            Some(line) if is_fence(line.text) => {
                let fields = parse_block(&text[block_start..line.start])?;
                return Ok(Frontmatter {
                    fields,
                    body_start: bom_len + line.end,
                });
            }
            Some(_) => continue,
            None => return Err(FrontmatterError::Unterminated),
        }
    }
}

fn parse_block(block: &str) -> Result<Map<String, JsonValue>, FrontmatterError> {
    if block.trim().is_empty() {
        return Ok(Map::new());
    }

    let yaml: serde_yaml::Value =
        serde_yaml::from_str(block).map_err(|err| FrontmatterError::Parse(err.to_string()))?;
    let json =
        serde_json::to_value(yaml).map_err(|err| FrontmatterError::Parse(err.to_string()))?;

    match json {
        JsonValue::Null => Ok(Map::new()),
        JsonValue::Object(fields) => Ok(fields),
        _ => Err(FrontmatterError::NotAMapping),
    }
}

fn strip_bom(input: &str) -> (&str, usize) {
    match input.strip_prefix('\u{feff}') {
        Some(stripped) => (stripped, '\u{feff}'.len_utf8()),
        None => (input, 0),
    }
}

fn is_fence(line: &str) -> bool {
    line.trim_end_matches('\r') == "---"
}
