//! SDL manifest parsing (`dub.sdl`)
//!
//! Line-oriented parser for the subset of SDLang that DUB manifests use:
//!
//! ```text
//! name "myproject"
//! targetType "executable"
//! stringImportPaths "views" "data"
//! dependency "cerealed" version="~master"
//! configuration "unittest" {
//!     versions "testVersion"
//!     dflags "-foo" "-bar"
//! }
//! ```
//!
//! The output tree has the same shape as the JSON form: dependencies become
//! an ordered `dependencies` object, configuration blocks an ordered
//! `configurations` array of objects carrying a `name` entry.

use crate::{Error, Result, Value};

/// List-valued manifest keys. A single value under these keys still
/// produces an array, matching the JSON form.
const LIST_KEYS: [&str; 3] = ["stringImportPaths", "versions", "dflags"];

#[derive(Debug, PartialEq)]
enum Token {
    Ident(String),
    Str(String),
    /// `key="value"` attribute
    Attr(String, String),
    OpenBrace,
    CloseBrace,
}

/// Parse a `dub.sdl` document into a manifest value tree.
pub fn parse(content: &str) -> Result<Value> {
    let mut parser = Parser::default();
    for (idx, line) in content.lines().enumerate() {
        parser.line(idx + 1, line)?;
    }
    parser.finish(content.lines().count())
}

#[derive(Default)]
struct Parser {
    root: Vec<(String, Value)>,
    dependencies: Vec<(String, Value)>,
    configurations: Vec<Value>,
    /// Open `configuration "name" { ... }` block, if any.
    block: Option<(String, Vec<(String, Value)>)>,
}

impl Parser {
    fn line(&mut self, number: usize, raw: &str) -> Result<()> {
        let mut tokens = tokenize(number, raw)?;
        if tokens.is_empty() {
            return Ok(());
        }

        // A block may close and nothing else is allowed on that line.
        if tokens[0] == Token::CloseBrace {
            if tokens.len() > 1 {
                return Err(Error::sdl(number, "unexpected tokens after '}'"));
            }
            return self.close_block(number);
        }

        let Token::Ident(key) = tokens.remove(0) else {
            return Err(Error::sdl(number, "expected a tag name"));
        };

        match key.as_str() {
            "dependency" => self.dependency(number, tokens),
            "configuration" => self.configuration(number, tokens),
            _ => self.field(number, &key, tokens),
        }
    }

    fn dependency(&mut self, number: usize, tokens: Vec<Token>) -> Result<()> {
        let mut tokens = tokens.into_iter();
        let Some(Token::Str(name)) = tokens.next() else {
            return Err(Error::sdl(number, "dependency requires a quoted package name"));
        };
        // `version="..."` is the only attribute we read; a dependency
        // declared without one (e.g. path-based) has no resolvable
        // constraint and the empty string is dropped downstream.
        let mut constraint = String::new();
        for token in tokens {
            match token {
                Token::Attr(attr, value) if attr == "version" => constraint = value,
                Token::Attr(_, _) => {}
                _ => return Err(Error::sdl(number, "unexpected token in dependency tag")),
            }
        }
        self.dependencies.push((name, Value::Str(constraint)));
        Ok(())
    }

    fn configuration(&mut self, number: usize, tokens: Vec<Token>) -> Result<()> {
        if self.block.is_some() {
            return Err(Error::sdl(number, "configuration blocks cannot nest"));
        }
        let mut tokens = tokens.into_iter();
        let Some(Token::Str(name)) = tokens.next() else {
            return Err(Error::sdl(number, "configuration requires a quoted name"));
        };
        match (tokens.next(), tokens.next()) {
            (Some(Token::OpenBrace), None) => {
                self.block = Some((name, Vec::new()));
                Ok(())
            }
            _ => Err(Error::sdl(number, "expected '{' after configuration name")),
        }
    }

    fn field(&mut self, number: usize, key: &str, tokens: Vec<Token>) -> Result<()> {
        let mut values = Vec::with_capacity(tokens.len());
        for token in tokens {
            match token {
                Token::Str(s) => values.push(Value::Str(s)),
                _ => return Err(Error::sdl(number, format!("expected quoted values for '{key}'"))),
            }
        }
        let value = if LIST_KEYS.contains(&key) || values.len() != 1 {
            Value::Array(values)
        } else {
            values.remove(0)
        };
        let target = match &mut self.block {
            Some((_, entries)) => entries,
            None => &mut self.root,
        };
        target.push((key.to_string(), value));
        Ok(())
    }

    fn close_block(&mut self, number: usize) -> Result<()> {
        let Some((name, mut entries)) = self.block.take() else {
            return Err(Error::sdl(number, "unmatched '}'"));
        };
        entries.insert(0, ("name".to_string(), Value::Str(name)));
        self.configurations.push(Value::Object(entries));
        Ok(())
    }

    fn finish(mut self, last_line: usize) -> Result<Value> {
        if let Some((name, _)) = &self.block {
            return Err(Error::sdl(last_line, format!("unclosed configuration '{name}'")));
        }
        if !self.dependencies.is_empty() {
            self.root
                .push(("dependencies".to_string(), Value::Object(self.dependencies)));
        }
        if !self.configurations.is_empty() {
            self.root
                .push(("configurations".to_string(), Value::Array(self.configurations)));
        }
        Ok(Value::Object(self.root))
    }
}

fn tokenize(number: usize, line: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = line.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            _ if c.is_whitespace() => {
                chars.next();
            }
            '#' => break,
            '/' => {
                chars.next();
                if chars.next() == Some('/') {
                    break;
                }
                return Err(Error::sdl(number, "unexpected '/'"));
            }
            '{' => {
                chars.next();
                tokens.push(Token::OpenBrace);
            }
            '}' => {
                chars.next();
                tokens.push(Token::CloseBrace);
            }
            '"' => {
                chars.next();
                tokens.push(Token::Str(quoted(number, &mut chars)?));
            }
            _ if c.is_alphanumeric() || c == '_' || c == '-' => {
                let mut ident = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_alphanumeric() || c == '_' || c == '-' {
                        ident.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                if chars.peek() == Some(&'=') {
                    chars.next();
                    if chars.next() != Some('"') {
                        return Err(Error::sdl(number, format!("expected quoted value after '{ident}='")));
                    }
                    tokens.push(Token::Attr(ident, quoted(number, &mut chars)?));
                } else {
                    tokens.push(Token::Ident(ident));
                }
            }
            _ => return Err(Error::sdl(number, format!("unexpected character '{c}'"))),
        }
    }

    Ok(tokens)
}

/// Read a quoted string body; the opening quote has been consumed.
fn quoted(number: usize, chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Result<String> {
    let mut out = String::new();
    loop {
        match chars.next() {
            Some('"') => return Ok(out),
            Some('\\') => match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some(c) => out.push(c),
                None => return Err(Error::sdl(number, "unterminated escape in string")),
            },
            Some(c) => out.push(c),
            None => return Err(Error::sdl(number, "unterminated string")),
        }
    }
}
