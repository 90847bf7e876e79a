use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::types::{EnumDefinition, FieldDefinition, FieldKind, ModelDefinition, SchemaTable};

/// `model Post {`, `enum Role {`, `datasource db {`
#[allow(clippy::expect_used)]
static BLOCK_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z]+)\s+([A-Za-z_][A-Za-z0-9_]*)\s*\{").expect("block header regex")
});

#[allow(clippy::expect_used)]
static PRIMARY_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"@id\b").expect("primary key regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Enum,
    Model,
    Other,
}

struct RawBlock<'a> {
    kind: BlockKind,
    name: &'a str,
    body: Vec<&'a str>,
}

/// Split the document into top-level blocks
///
/// A block opens on a `<keyword> <Name> {` line and closes on the first line
/// starting with `}`. Text after `{` on the header line belongs to the body,
/// and a `}` there closes the block on the same line (`enum Role { A B }`,
/// `model Empty {}`). Lines outside blocks are ignored.
fn scan_blocks(content: &str) -> Vec<RawBlock<'_>> {
    let mut blocks = Vec::new();
    let mut current: Option<RawBlock<'_>> = None;

    for raw in content.lines() {
        let line = raw.trim();
        if current.is_some() {
            if line.starts_with('}') {
                if let Some(done) = current.take() {
                    blocks.push(done);
                }
            } else if let Some(block) = current.as_mut() {
                block.body.push(line);
            }
            continue;
        }
        if let Some(caps) = BLOCK_HEADER.captures(line) {
            let (Some(keyword), Some(name)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            let kind = match keyword.as_str() {
                "enum" => BlockKind::Enum,
                "model" => BlockKind::Model,
                _ => BlockKind::Other,
            };
            let mut block = RawBlock {
                kind,
                name: name.as_str(),
                body: Vec::new(),
            };
            let rest = &line[caps.get(0).map_or(line.len(), |m| m.end())..];
            let (inline, closed) = match rest.find('}') {
                Some(end) => (&rest[..end], true),
                None => (rest, false),
            };
            push_inline(&mut block, inline.trim());
            if closed {
                blocks.push(block);
            } else {
                current = Some(block);
            }
        }
    }
    if let Some(unterminated) = current {
        debug!(block = unterminated.name, "schema block not closed before end of file");
        blocks.push(unterminated);
    }
    blocks
}

/// Body text sharing the header line
///
/// Enum members on one line are whitespace separated, so each becomes its own
/// body line; a model keeps the text as a single field line.
fn push_inline<'a>(block: &mut RawBlock<'a>, inline: &'a str) {
    if inline.is_empty() || inline.starts_with("//") {
        return;
    }
    match block.kind {
        BlockKind::Enum => block.body.extend(inline.split_whitespace()),
        _ => block.body.push(inline),
    }
}

fn is_skippable(line: &str) -> bool {
    line.is_empty() || line.starts_with("//") || line.starts_with("@@")
}

fn parse_enum(name: &str, body: &[&str]) -> EnumDefinition {
    let members = body
        .iter()
        .filter(|line| !is_skippable(line))
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect();
    EnumDefinition {
        name: name.to_string(),
        members,
    }
}

/// Text inside `@default(...)`, honouring nested parentheses and quotes
pub(crate) fn extract_default(line: &str) -> Option<String> {
    const MARKER: &str = "@default(";
    let start = line.find(MARKER)? + MARKER.len();
    let rest = &line[start..];

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (idx, c) in rest.char_indices() {
        if in_string {
            match c {
                '\\' if !escaped => escaped = true,
                '"' if !escaped => in_string = false,
                _ => escaped = false,
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '(' => depth += 1,
            ')' if depth == 0 => return Some(rest[..idx].to_string()),
            ')' => depth -= 1,
            _ => {}
        }
    }
    None
}

fn parse_field(line: &str, enums: &IndexMap<String, EnumDefinition>) -> Option<FieldDefinition> {
    let mut tokens = line.split_whitespace();
    let name = tokens.next()?;
    let raw_type = tokens.next()?;

    let required = !raw_type.ends_with('?');
    let declared_type = raw_type.strip_suffix('?').unwrap_or(raw_type).to_string();
    let kind = FieldKind::classify(&declared_type, enums);

    Some(FieldDefinition {
        name: name.to_string(),
        declared_type,
        required,
        is_primary_key: PRIMARY_KEY.is_match(line),
        default_expression: extract_default(line),
        kind,
    })
}

fn parse_model(name: &str, body: &[&str], enums: &IndexMap<String, EnumDefinition>) -> ModelDefinition {
    let fields = body
        .iter()
        .filter(|line| !is_skippable(line))
        .filter_map(|line| parse_field(line, enums))
        .collect();
    ModelDefinition {
        name: name.to_string(),
        fields,
    }
}

/// Parse Prisma schema text into enum and model tables
///
/// Enums are collected in a first pass so that model fields referring to an
/// enum declared later in the file are still classified as enums. Unknown
/// types are never an error; they classify as relations.
pub fn parse_schema(content: &str) -> SchemaTable {
    let blocks = scan_blocks(content);

    let mut enums = IndexMap::new();
    for block in blocks.iter().filter(|b| b.kind == BlockKind::Enum) {
        enums.insert(block.name.to_string(), parse_enum(block.name, &block.body));
    }

    let mut models = IndexMap::new();
    for block in blocks.iter().filter(|b| b.kind == BlockKind::Model) {
        let model = parse_model(block.name, &block.body, &enums);
        debug!(model = %model.name, fields = model.fields.len(), "parsed model");
        models.insert(block.name.to_string(), model);
    }

    SchemaTable { enums, models }
}
