use std::fmt;

/// A manipulator command.
///
/// The alphabet is closed: exactly these six commands exist, each written
/// as a single Cyrillic character on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `Л` - move one cell left.
    Left,
    /// `П` - move one cell right.
    Right,
    /// `В` - move one cell up.
    Up,
    /// `Н` - move one cell down.
    Down,
    /// `О` - pick up the sample under the manipulator.
    Pick,
    /// `Б` - drop the held sample.
    Drop,
}

impl Command {
    /// All commands in wire order.
    pub const ALPHABET: [Command; 6] = [
        Command::Left,
        Command::Right,
        Command::Up,
        Command::Down,
        Command::Pick,
        Command::Drop,
    ];

    /// Decodes a single character, returning `None` for anything outside
    /// the alphabet.
    pub const fn from_char(c: char) -> Option<Command> {
        match c {
            'Л' => Some(Command::Left),
            'П' => Some(Command::Right),
            'В' => Some(Command::Up),
            'Н' => Some(Command::Down),
            'О' => Some(Command::Pick),
            'Б' => Some(Command::Drop),
            _ => None,
        }
    }

    /// The wire character for this command.
    pub const fn as_char(self) -> char {
        match self {
            Command::Left => 'Л',
            Command::Right => 'П',
            Command::Up => 'В',
            Command::Down => 'Н',
            Command::Pick => 'О',
            Command::Drop => 'Б',
        }
    }

    /// True if `c` is one of the six wire characters.
    pub const fn is_wire_char(c: char) -> bool {
        Command::from_char(c).is_some()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Filters a raw user-entered string down to the command alphabet.
///
/// Every character outside the alphabet is silently dropped; characters in
/// the alphabet are kept in their original order. This never fails - bad
/// input degrades to fewer commands, an empty string to an empty sequence.
/// Callers that want to warn the user about dropped characters can compare
/// `raw.chars().count()` against the returned length.
pub fn parse(raw: &str) -> Vec<Command> {
    raw.chars().filter_map(Command::from_char).collect()
}
