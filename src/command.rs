use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// One line of a workload file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Insert `bit` so that it ends up at position `index`.
    Insert { index: u64, bit: bool },
    /// Count the occurrences of `bit` in the prefix ending at `index`.
    Rank { bit: bool, index: u64 },
}

impl Command {
    pub fn index(&self) -> u64 {
        match *self {
            Command::Insert { index, .. } | Command::Rank { index, .. } => {
                index
            }
        }
    }

    pub fn bit(&self) -> bool {
        match *self {
            Command::Insert { bit, .. } | Command::Rank { bit, .. } => bit,
        }
    }

    pub fn is_insert(&self) -> bool {
        match self {
            Command::Insert { .. } => true,
            Command::Rank { .. } => false,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Command::Insert { index, bit } => {
                write!(f, "insert {} {}", index, bit as u8)
            }
            Command::Rank { bit, index } => {
                write!(f, "rank {} {}", bit as u8, index)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    Empty,
    UnknownOp(String),
    MissingToken(&'static str),
    BadBit(String),
    BadIndex(String),
    Trailing(String),
}

impl fmt::Display for ParseCommandError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseCommandError::Empty => write!(f, "empty command line"),
            ParseCommandError::UnknownOp(op) => {
                write!(f, "unknown operation {:?}", op)
            }
            ParseCommandError::MissingToken(what) => {
                write!(f, "missing {}", what)
            }
            ParseCommandError::BadBit(tok) => {
                write!(f, "expected 0 or 1, found {:?}", tok)
            }
            ParseCommandError::BadIndex(tok) => {
                write!(f, "invalid index {:?}", tok)
            }
            ParseCommandError::Trailing(tok) => {
                write!(f, "unexpected trailing token {:?}", tok)
            }
        }
    }
}

impl Error for ParseCommandError {}

fn parse_bit(tok: Option<&str>) -> Result<bool, ParseCommandError> {
    match tok {
        Some("0") => Ok(false),
        Some("1") => Ok(true),
        Some(other) => Err(ParseCommandError::BadBit(other.to_owned())),
        None => Err(ParseCommandError::MissingToken("bit")),
    }
}

fn parse_index(tok: Option<&str>) -> Result<u64, ParseCommandError> {
    let tok = tok.ok_or(ParseCommandError::MissingToken("index"))?;
    tok.parse()
        .map_err(|_| ParseCommandError::BadIndex(tok.to_owned()))
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let command = match tokens.next() {
            Some("insert") => {
                let index = parse_index(tokens.next())?;
                let bit = parse_bit(tokens.next())?;
                Command::Insert { index, bit }
            }
            Some("rank") => {
                let bit = parse_bit(tokens.next())?;
                let index = parse_index(tokens.next())?;
                Command::Rank { bit, index }
            }
            Some(op) => return Err(ParseCommandError::UnknownOp(op.to_owned())),
            None => return Err(ParseCommandError::Empty),
        };

        match tokens.next() {
            Some(tok) => Err(ParseCommandError::Trailing(tok.to_owned())),
            None => Ok(command),
        }
    }
}
