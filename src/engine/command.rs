//! Commands understood by the interactive session. Only the line terminator is
//! stripped: square identifiers reach the board exactly as typed.

#[derive(Debug, PartialEq, Eq)]
pub(super) enum Command {
    /// `<from>|<to>`, e.g. `e2|e4`.
    Move {
        from: String,
        to: String,
    },
    /// `moves <square>`: list legal destinations of the piece on the square.
    Moves {
        square: String,
    },
    Eval,
    Check,
    /// Empty line: print the move log and end the session.
    Finish,
    Malformed(String),
}

impl Command {
    pub(super) fn parse(input: &str) -> Self {
        let input = input.trim_end_matches(['\n', '\r']);
        match input {
            "" => return Self::Finish,
            "eval" => return Self::Eval,
            "check" => return Self::Check,
            _ => (),
        }
        if let Some(square) = input.strip_prefix("moves ") {
            return Self::Moves {
                square: square.to_string(),
            };
        }
        match input.split('|').collect::<Vec<_>>().as_slice() {
            [from, to] => Self::Move {
                from: (*from).to_string(),
                to: (*to).to_string(),
            },
            _ => Self::Malformed(input.to_string()),
        }
    }
}
