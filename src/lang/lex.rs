use super::code::Kind;
use super::token::*;
use super::Location;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lexeme {
    pub token: Token,
    pub location: Location,
}

/// Scans source text into positioned tokens.
/// Whitespace and characters outside the language are dropped.
pub fn lex(s: &str) -> Vec<Lexeme> {
    // A long lead only opens a command when its tail group still has a
    // tail strictly later in the source. One pass records the last
    // position of each group, the next pass classifies.
    let mut max_tail = [0usize; 3];
    for (i, c) in s.chars().enumerate() {
        if let Some(group) = tail_group(c) {
            max_tail[group] = i;
        }
    }
    let mut lexemes: Vec<Lexeme> = Vec::new();
    let mut line = 1;
    let mut line_start = 0;
    for (i, c) in s.chars().enumerate() {
        if c == '\n' {
            line += 1;
            line_start = i + 1;
            continue;
        }
        if c.is_whitespace() {
            continue;
        }
        if let Some(token) = classify(c, i, &max_tail) {
            lexemes.push(Lexeme {
                token,
                location: (line, i - line_start),
            });
        }
    }
    lexemes
}

fn classify(c: char, at: usize, max_tail: &[usize; 3]) -> Option<Token> {
    if let Some(index) = HEADS.chars().position(|h| h == c) {
        if index >= 6 && max_tail[index - 6] <= at {
            // no tail left for this lead, it reads as a plain syllable
            return Some(Token::Syllable(c));
        }
        return Some(Token::Head(Kind::from_lead(index)));
    }
    if DOTS.contains(c) {
        return Some(Token::Dot(c));
    }
    if c == '?' {
        return Some(Token::Question);
    }
    if c == '!' {
        return Some(Token::Bang);
    }
    if let Some(code) = Token::heart_code(c) {
        return Some(Token::Heart(code));
    }
    if is_hangul_syllable(c) {
        return Some(Token::Syllable(c));
    }
    None
}
