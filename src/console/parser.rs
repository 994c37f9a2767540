//! Console command parser
//!
//! One command per line; a bare move like "e2e4" is shorthand for "move e2e4".

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Command {
    Move(String),
    Moves(String),
    Board,
    Fen,
    Json,
    Hint,
    Status,
    New,
    Help,
    Quit,
    Unknown(String),
}

fn looks_like_lan(token: &str) -> bool {
    let b = token.as_bytes();
    (b.len() == 4 || b.len() == 5)
        && (b'a'..=b'h').contains(&b[0])
        && (b'1'..=b'8').contains(&b[1])
        && (b'a'..=b'h').contains(&b[2])
        && (b'1'..=b'8').contains(&b[3])
}

/// Parse a console command from a string (simple tokenizer)
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Unknown("".to_string());
    }

    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let head = parts[0].to_ascii_lowercase();
    match head.as_str() {
        "move" | "m" => match parts.get(1) {
            Some(mv) => Command::Move(mv.to_ascii_lowercase()),
            None => Command::Unknown(trimmed.to_string()),
        },
        "moves" => match parts.get(1) {
            Some(sq) => Command::Moves(sq.to_ascii_lowercase()),
            None => Command::Unknown(trimmed.to_string()),
        },
        "board" | "show" | "d" => Command::Board,
        "fen" => Command::Fen,
        "json" => Command::Json,
        "hint" => Command::Hint,
        "status" => Command::Status,
        "new" => Command::New,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other if parts.len() == 1 && looks_like_lan(other) => Command::Move(other.to_string()),
        _ => Command::Unknown(trimmed.to_string()),
    }
}
