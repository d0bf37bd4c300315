use super::code::Kind;

/// Command heads, in kind order 0 through 8.
pub const HEADS: &str = "형항핫흣흡흑혀하흐";

/// Tails that resolve a long-form head, grouped by lead.
pub const TAILS: &str = "엉앙앗읏읍윽";

/// Dot marks accepted after a complete head.
pub const DOTS: &str = ".…⋯⋮";

/// Heart marks, in signal code order 2 through 13.
pub const HEARTS: [char; 12] = [
    '♥', '❤', '💕', '💖', '💗', '💘', '💙', '💚', '💛', '💜', '💝', '♡',
];

/// True for any precomposed Hangul syllable.
pub fn is_hangul_syllable(c: char) -> bool {
    ('\u{AC00}'..='\u{D7A3}').contains(&c)
}

/// Tail group index for the disambiguation table.
pub fn tail_group(c: char) -> Option<usize> {
    match TAILS.chars().position(|t| t == c) {
        Some(0) => Some(0),
        Some(1) | Some(2) => Some(1),
        Some(_) => Some(2),
        None => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Head(Kind),
    Syllable(char),
    Dot(char),
    Question,
    Bang,
    Heart(u8),
}

impl Token {
    /// How much a dot mark adds to the dot count.
    pub fn dot_weight(c: char) -> usize {
        if c == '.' {
            1
        } else {
            3
        }
    }

    pub fn heart_code(c: char) -> Option<u8> {
        HEARTS.iter().position(|&h| h == c).map(|i| i as u8 + 2)
    }

    pub fn heart_char(code: u8) -> char {
        HEARTS[code as usize - 2]
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Token::Head(kind) => write!(f, "{}", kind.lead()),
            Token::Syllable(c) => write!(f, "{}", c),
            Token::Dot(c) => write!(f, "{}", c),
            Token::Question => write!(f, "?"),
            Token::Bang => write!(f, "!"),
            Token::Heart(code) => write!(f, "{}", Token::heart_char(*code)),
        }
    }
}
