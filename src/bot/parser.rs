//! Input line parsing.

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Lower-cased command token.
    pub name: String,

    /// Remaining whitespace-separated tokens.
    pub args: Vec<String>,
}

/// Splits a line into a command and its arguments.
///
/// Returns `None` for a line that holds nothing but whitespace.
pub fn parse_input(line: &str) -> Option<Command> {
    let mut tokens = line.split_whitespace();
    let name = tokens.next()?.to_lowercase();
    let args = tokens.map(String::from).collect();
    Some(Command { name, args })
}
