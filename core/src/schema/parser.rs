//! # Schema Parser
//!
//! Line-oriented reader for Prisma schema files. Block headers and field lines
//! are matched with regexes; attribute argument lists are read by a small
//! recursive-descent cursor since they nest (`@default(dbgenerated("..."))`).

use crate::error::{AppError, AppResult};
use crate::schema::ast::{
    Attribute, AttributeArg, ConfigBlock, Declaration, EnumDecl, Field, Model, Property, Schema,
    Value,
};
use regex::Regex;
use std::sync::OnceLock;

fn block_re() -> &'static Regex {
    static BLOCK_RE: OnceLock<Regex> = OnceLock::new();
    BLOCK_RE.get_or_init(|| {
        Regex::new(r"^(model|view|type|enum|datasource|generator)\s+(\w+)\s*\{\s*(\})?$")
            .expect("Invalid regex")
    })
}

fn field_re() -> &'static Regex {
    static FIELD_RE: OnceLock<Regex> = OnceLock::new();
    FIELD_RE.get_or_init(|| {
        Regex::new(
            r#"^(\w+)\s+([A-Za-z_][\w.]*|Unsupported\("(?:[^"\\]|\\.)*"\))(\[\])?(\?)?(?:\s+(.*))?$"#,
        )
        .expect("Invalid regex")
    })
}

fn assignment_re() -> &'static Regex {
    static ASSIGN_RE: OnceLock<Regex> = OnceLock::new();
    ASSIGN_RE.get_or_init(|| Regex::new(r"^(\w+)\s*=\s*(.+)$").expect("Invalid regex"))
}

/// Parses the full text of a schema file.
///
/// # Errors
///
/// Returns `AppError::SchemaSyntax` with the 1-based line of the first
/// construct that could not be read.
pub fn parse_schema(source: &str) -> AppResult<Schema> {
    let lines: Vec<&str> = source.lines().collect();
    let mut list = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line_no = i + 1;
        let line = lines[i].trim();
        i += 1;

        if line.is_empty() {
            continue;
        }
        if let Some(comment) = comment_text(line) {
            list.push(Declaration::Comment(comment));
            continue;
        }

        let header = strip_trailing_comment(line);
        let caps = block_re().captures(header).ok_or_else(|| AppError::SchemaSyntax {
            line: line_no,
            message: format!("expected a block declaration, found `{}`", line),
        })?;
        let keyword = caps[1].to_string();
        let name = caps[2].to_string();

        // Collect body lines up to the closing brace
        let mut body: Vec<(usize, &str)> = Vec::new();
        if caps.get(3).is_none() {
            loop {
                let Some(raw) = lines.get(i) else {
                    return Err(AppError::SchemaSyntax {
                        line: line_no,
                        message: format!("unterminated block `{}`", name),
                    });
                };
                i += 1;
                if strip_trailing_comment(raw.trim()) == "}" {
                    break;
                }
                body.push((i, raw.trim()));
            }
        }

        let decl = match keyword.as_str() {
            "model" => Declaration::Model(parse_model(name, &body)?),
            "view" => Declaration::View(parse_model(name, &body)?),
            "type" => Declaration::CompositeType(parse_model(name, &body)?),
            "enum" => Declaration::Enum(parse_enum(name, &body)),
            _ => Declaration::Config(parse_config(keyword, name, &body)?),
        };
        list.push(decl);
    }

    Ok(Schema { list })
}

/// Text of a `//` or `///` comment line.
fn comment_text(line: &str) -> Option<String> {
    line.strip_prefix("//")
        .map(|rest| rest.trim_start_matches('/').trim().to_string())
}

fn parse_model(name: String, body: &[(usize, &str)]) -> AppResult<Model> {
    let mut properties = Vec::new();

    for &(line_no, line) in body {
        if line.is_empty() {
            continue;
        }
        if let Some(comment) = comment_text(line) {
            properties.push(Property::Comment(comment));
            continue;
        }

        let code = strip_trailing_comment(line);
        if let Some(rest) = code.strip_prefix("@@") {
            let mut cursor = Cursor::new(rest, line_no);
            properties.push(Property::BlockAttribute(cursor.attribute_body()?));
            cursor.expect_end()?;
            continue;
        }

        let caps = field_re().captures(code).ok_or_else(|| AppError::SchemaSyntax {
            line: line_no,
            message: format!("malformed field `{}`", code),
        })?;
        let attributes = match caps.get(5) {
            Some(rest) => Cursor::new(rest.as_str(), line_no).field_attributes()?,
            None => Vec::new(),
        };

        properties.push(Property::Field(Field {
            name: caps[1].to_string(),
            field_type: caps[2].to_string(),
            list: caps.get(3).is_some(),
            optional: caps.get(4).is_some(),
            attributes,
        }));
    }

    Ok(Model { name, properties })
}

fn parse_enum(name: String, body: &[(usize, &str)]) -> EnumDecl {
    let values = body
        .iter()
        .map(|(_, line)| strip_trailing_comment(line))
        .filter(|line| !line.is_empty() && !line.starts_with('@'))
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect();
    EnumDecl { name, values }
}

fn parse_config(kind: String, name: String, body: &[(usize, &str)]) -> AppResult<ConfigBlock> {
    let mut assignments = Vec::new();
    for &(line_no, line) in body {
        let code = strip_trailing_comment(line);
        if code.is_empty() {
            continue;
        }
        let caps = assignment_re()
            .captures(code)
            .ok_or_else(|| AppError::SchemaSyntax {
                line: line_no,
                message: format!("expected `key = value` in {} block, found `{}`", kind, code),
            })?;
        assignments.push((caps[1].to_string(), caps[2].trim().to_string()));
    }
    Ok(ConfigBlock {
        kind,
        name,
        assignments,
    })
}

/// Removes a trailing `// comment`, ignoring `//` inside string literals.
fn strip_trailing_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    let mut in_string = false;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if in_string => i += 1,
            b'"' => in_string = !in_string,
            b'/' if !in_string && bytes.get(i + 1) == Some(&b'/') => return line[..i].trim_end(),
            _ => {}
        }
        i += 1;
    }
    line.trim_end()
}

/// Character cursor over the attribute part of a single line.
struct Cursor {
    chars: Vec<char>,
    pos: usize,
    line: usize,
}

impl Cursor {
    fn new(text: &str, line: usize) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
            line,
        }
    }

    fn error(&self, message: impl Into<String>) -> AppError {
        AppError::SchemaSyntax {
            line: self.line,
            message: message.into(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, c: char) -> AppResult<()> {
        self.skip_ws();
        if self.eat(c) {
            Ok(())
        } else {
            Err(self.error(format!("expected `{}`", c)))
        }
    }

    fn expect_end(&mut self) -> AppResult<()> {
        self.skip_ws();
        match self.peek() {
            None => Ok(()),
            Some(c) => Err(self.error(format!("unexpected `{}` after attribute", c))),
        }
    }

    /// Identifier, allowing dots for namespaced names (`db.VarChar`).
    fn ident(&mut self) -> Option<String> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '.')
        {
            self.pos += 1;
        }
        (self.pos > start).then(|| self.chars[start..self.pos].iter().collect())
    }

    /// Sequence of `@name(args)` items after a field type.
    fn field_attributes(&mut self) -> AppResult<Vec<Attribute>> {
        let mut attributes = Vec::new();
        loop {
            self.skip_ws();
            if self.peek().is_none() {
                return Ok(attributes);
            }
            if !self.eat('@') {
                return Err(self.error("expected an attribute starting with `@`"));
            }
            attributes.push(self.attribute_body()?);
        }
    }

    /// `name` or `name(args)`, the `@` already consumed.
    fn attribute_body(&mut self) -> AppResult<Attribute> {
        let name = self
            .ident()
            .ok_or_else(|| self.error("expected attribute name"))?;
        let args = if self.eat('(') {
            self.arguments(')')?
        } else {
            Vec::new()
        };
        Ok(Attribute { name, args })
    }

    /// Comma separated, optionally named arguments up to `close`.
    fn arguments(&mut self, close: char) -> AppResult<Vec<AttributeArg>> {
        let mut args = Vec::new();
        loop {
            self.skip_ws();
            if self.eat(close) {
                return Ok(args);
            }

            let checkpoint = self.pos;
            let key = match self.ident() {
                Some(ident) => {
                    self.skip_ws();
                    if self.eat(':') {
                        Some(ident)
                    } else {
                        self.pos = checkpoint;
                        None
                    }
                }
                None => None,
            };

            let value = self.value()?;
            args.push(AttributeArg { key, value });

            self.skip_ws();
            if !self.eat(',') {
                self.expect(close)?;
                return Ok(args);
            }
        }
    }

    fn value(&mut self) -> AppResult<Value> {
        self.skip_ws();
        match self.peek() {
            Some('"') => self.string().map(Value::Str),
            Some('[') => {
                self.pos += 1;
                let items = self.arguments(']')?;
                Ok(Value::Array(items.into_iter().map(|arg| arg.value).collect()))
            }
            Some(c) if c.is_ascii_digit() || c == '-' => {
                let start = self.pos;
                self.pos += 1;
                while self
                    .peek()
                    .is_some_and(|c| c.is_ascii_digit() || c == '.' || c == 'e')
                {
                    self.pos += 1;
                }
                Ok(Value::Literal(self.chars[start..self.pos].iter().collect()))
            }
            Some(_) => {
                let ident = self.ident().ok_or_else(|| self.error("expected a value"))?;
                if self.eat('(') {
                    let params = self
                        .arguments(')')?
                        .into_iter()
                        .map(|arg| arg.value)
                        .collect();
                    return Ok(Value::Function {
                        name: ident,
                        params,
                    });
                }
                match ident.as_str() {
                    "true" | "false" => Ok(Value::Literal(ident)),
                    _ => Ok(Value::Ident(ident)),
                }
            }
            None => Err(self.error("unexpected end of line in attribute arguments")),
        }
    }

    fn string(&mut self) -> AppResult<String> {
        self.pos += 1;
        let mut out = String::new();
        loop {
            match self.peek() {
                Some('"') => {
                    self.pos += 1;
                    return Ok(out);
                }
                Some('\\') => {
                    self.pos += 1;
                    if let Some(escaped) = self.peek() {
                        out.push(escaped);
                        self.pos += 1;
                    }
                }
                Some(c) => {
                    out.push(c);
                    self.pos += 1;
                }
                None => return Err(self.error("unterminated string")),
            }
        }
    }
}
