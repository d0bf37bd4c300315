use super::tree::Tree;
use super::Location;

// 0 형 혀엉  push hangul * dots onto the active stack
// 1 항 하앙  pop hangul values, push the sum onto stack dots
// 2 핫 하앗  pop hangul values, push the product onto stack dots
// 3 흣 흐읏  pop hangul values, restore them, push the negated sum onto stack dots
// 4 흡 흐읍  pop hangul values, push back reciprocals, push their product onto stack dots
// 5 흑 흐윽  pop one value, copy it onto stack dots hangul times, switch to stack dots
// 6-8       long leads left unresolved at end of input, execute like 5
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Hyeong,
    Hang,
    Hat,
    Heut,
    Heup,
    Heuk,
    Hyeo,
    Ha,
    Heu,
}

impl Kind {
    pub(crate) fn from_lead(index: usize) -> Kind {
        const KINDS: [Kind; 9] = [
            Kind::Hyeong,
            Kind::Hang,
            Kind::Hat,
            Kind::Heut,
            Kind::Heup,
            Kind::Heuk,
            Kind::Hyeo,
            Kind::Ha,
            Kind::Heu,
        ];
        KINDS[index]
    }

    pub fn lead(self) -> char {
        match self {
            Kind::Hyeong => '형',
            Kind::Hang => '항',
            Kind::Hat => '핫',
            Kind::Heut => '흣',
            Kind::Heup => '흡',
            Kind::Heuk => '흑',
            Kind::Hyeo => '혀',
            Kind::Ha => '하',
            Kind::Heu => '흐',
        }
    }

    pub fn is_long(self) -> bool {
        matches!(self, Kind::Hyeo | Kind::Ha | Kind::Heu)
    }

    /// The short kind a long lead becomes when its tail arrives.
    pub(crate) fn resolve(self, tail: char) -> Option<Kind> {
        match (self, tail) {
            (Kind::Hyeo, '엉') => Some(Kind::Hyeong),
            (Kind::Ha, '앙') => Some(Kind::Hang),
            (Kind::Ha, '앗') => Some(Kind::Hat),
            (Kind::Heu, '읏') => Some(Kind::Heut),
            (Kind::Heu, '읍') => Some(Kind::Heup),
            (Kind::Heu, '윽') => Some(Kind::Heuk),
            _ => None,
        }
    }
}

/// One parsed command with its attached decision tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    kind: Kind,
    hangul_count: usize,
    dot_count: usize,
    location: Location,
    tree: Tree,
    raw: String,
}

impl Command {
    pub fn new(
        kind: Kind,
        hangul_count: usize,
        dot_count: usize,
        location: Location,
        tree: Tree,
        raw: String,
    ) -> Command {
        Command {
            kind,
            hangul_count,
            dot_count,
            location,
            tree,
            raw,
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn hangul_count(&self) -> usize {
        self.hangul_count
    }

    pub fn dot_count(&self) -> usize {
        self.dot_count
    }

    pub fn area_count(&self) -> usize {
        self.hangul_count * self.dot_count
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}
