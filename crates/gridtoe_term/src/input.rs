//! Line-based player input.

use gridtoe::Position;

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Click a cell.
    Click(Position),
    /// Start a new game with the same settings.
    Restart,
    /// Leave the game.
    Quit,
    /// Blank or unreadable line.
    Ignored,
}

/// Parses `row col`, `r`/`restart`, `q`/`quit`. Rows and columns may be
/// separated by spaces or a comma.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim().to_lowercase();
    match line.as_str() {
        "q" | "quit" | "exit" => return Command::Quit,
        "r" | "restart" | "reset" => return Command::Restart,
        _ => {}
    }
    let mut parts = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .map(str::parse::<usize>);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(row)), Some(Ok(col)), None) => Command::Click(Position::new(row, col)),
        _ => Command::Ignored,
    }
}
