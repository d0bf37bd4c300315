use super::code::{Command, Kind};
use super::lex::{lex, Lexeme};
use super::token::Token;
use super::tree::TreeBuilder;
use super::Location;
use std::mem;

/// Parses source text into the command sequence the machine runs.
/// The grammar has no invalid input, so parsing cannot fail.
pub fn parse(source: &str) -> Vec<Command> {
    Parser::parse(lex(source))
}

enum Mode {
    /// Counting syllables and dots after a complete head.
    Body,
    /// A long lead is waiting for its tail.
    Suffix,
    /// Tree punctuation has begun, syllables and dots no longer count.
    Tree,
}

struct Parser {
    commands: Vec<Command>,
    mode: Mode,
    kind: Option<Kind>,
    hangul_count: usize,
    dot_count: usize,
    location: Location,
    builder: TreeBuilder,
    raw: String,
}

impl Parser {
    fn parse(lexemes: Vec<Lexeme>) -> Vec<Command> {
        let mut parser = Parser {
            commands: Vec::new(),
            mode: Mode::Body,
            kind: None,
            hangul_count: 0,
            dot_count: 0,
            location: (1, 0),
            builder: TreeBuilder::default(),
            raw: String::new(),
        };
        for lexeme in lexemes {
            match parser.mode {
                Mode::Suffix => parser.suffix(lexeme),
                Mode::Body | Mode::Tree => parser.body(lexeme),
            }
        }
        parser.flush();
        parser.commands
    }

    fn body(&mut self, lexeme: Lexeme) {
        match lexeme.token {
            Token::Head(kind) => self.open(kind, lexeme.location),
            Token::Syllable(c) => {
                if matches!(self.mode, Mode::Body) && self.kind.is_some() {
                    self.hangul_count += 1;
                    self.raw.push(c);
                }
            }
            Token::Dot(c) => {
                if matches!(self.mode, Mode::Body) && self.kind.is_some() {
                    self.dot_count += Token::dot_weight(c);
                    self.raw.push(c);
                }
            }
            Token::Question => {
                self.builder.question();
                self.raw.push('?');
                self.mode = Mode::Tree;
            }
            Token::Bang => {
                self.builder.bang();
                self.raw.push('!');
                self.mode = Mode::Tree;
            }
            Token::Heart(code) => {
                self.builder.heart(code);
                self.raw.push(Token::heart_char(code));
                self.mode = Mode::Tree;
            }
        }
    }

    fn suffix(&mut self, lexeme: Lexeme) {
        let c = match lexeme.token {
            Token::Head(kind) => kind.lead(),
            Token::Syllable(c) => c,
            // dots and tree punctuation wait until the tail arrives
            _ => return,
        };
        self.hangul_count += 1;
        self.raw.push(c);
        if let Some(kind) = self.kind {
            if let Some(resolved) = kind.resolve(c) {
                self.kind = Some(resolved);
                self.dot_count = 0;
                self.mode = Mode::Body;
            }
        }
    }

    fn open(&mut self, kind: Kind, location: Location) {
        self.flush();
        self.kind = Some(kind);
        self.hangul_count = 1;
        self.dot_count = 0;
        self.location = location;
        self.raw.clear();
        self.raw.push(kind.lead());
        self.mode = if kind.is_long() {
            Mode::Suffix
        } else {
            Mode::Body
        };
    }

    fn flush(&mut self) {
        // tree punctuation ahead of the first head stays in the builder
        // and lands on the first command
        if let Some(kind) = self.kind.take() {
            let builder = mem::take(&mut self.builder);
            self.commands.push(Command::new(
                kind,
                self.hangul_count,
                self.dot_count,
                self.location,
                builder.finish(),
                mem::take(&mut self.raw),
            ));
        }
    }
}
