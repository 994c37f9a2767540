//! External UCI engine (Stockfish, Lc0) used for move suggestions.
//!
//! The engine only ever sees `to_fen` output and answers with a long
//! algebraic move, which callers feed back through `Board::apply_lan`.

use std::env;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use log::{debug, warn};

use super::BridgeError;
use crate::board::Board;
use crate::notation::to_fen;

/// Thinking time per suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Level {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Level {
    pub fn movetime_ms(self) -> u64 {
        match self {
            Level::Easy => 200,
            Level::Medium => 500,
            Level::Hard => 2000,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum EngineReply {
    Id { key: String, value: String },
    UciOk,
    ReadyOk,
    /// `mv` is `None` for "bestmove (none)" / "bestmove 0000".
    BestMove { mv: Option<String>, ponder: Option<String> },
    Info(String),
    Option(String),
    Unknown(String),
}

/// Parse one line of engine output (simple tokenizer)
pub fn parse_engine_line(line: &str) -> EngineReply {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let Some(&head) = parts.first() else {
        return EngineReply::Unknown(String::new());
    };
    match head {
        "uciok" => EngineReply::UciOk,
        "readyok" => EngineReply::ReadyOk,
        "id" if parts.len() >= 2 => EngineReply::Id {
            key: parts[1].to_string(),
            value: parts[2..].join(" "),
        },
        "bestmove" => {
            let mv = parts
                .get(1)
                .filter(|m| **m != "(none)" && **m != "0000")
                .map(|m| m.to_string());
            let mut ponder = None;
            if let Some(i) = parts.iter().position(|&s| s == "ponder") {
                ponder = parts.get(i + 1).map(|m| m.to_string());
            }
            EngineReply::BestMove { mv, ponder }
        }
        "info" => EngineReply::Info(parts[1..].join(" ")),
        "option" => EngineReply::Option(parts[1..].join(" ")),
        _ => EngineReply::Unknown(trimmed.to_string()),
    }
}

pub struct UciEngineProcess {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
    name: Option<String>,
}

impl UciEngineProcess {
    /// Start the binary and complete the uci/isready handshake.
    pub fn spawn(path: &Path) -> Result<Self, BridgeError> {
        let mut child = Command::new(path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;
        let (Some(stdin), Some(stdout)) = (child.stdin.take(), child.stdout.take()) else {
            let _ = child.kill();
            return Err(BridgeError::EngineClosed);
        };
        let mut engine = Self {
            child,
            stdin,
            stdout: BufReader::new(stdout),
            name: None,
        };

        engine.send("uci")?;
        loop {
            match engine.read_reply()? {
                EngineReply::UciOk => break,
                EngineReply::Id { key, value } if key == "name" => engine.name = Some(value),
                _ => {}
            }
        }
        engine.sync()?;
        debug!("engine ready: {:?}", engine.name);
        Ok(engine)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn send(&mut self, line: &str) -> Result<(), BridgeError> {
        debug!("engine <- {}", line);
        writeln!(self.stdin, "{}", line)?;
        self.stdin.flush()?;
        Ok(())
    }

    fn read_reply(&mut self) -> Result<EngineReply, BridgeError> {
        let mut buf = String::new();
        if self.stdout.read_line(&mut buf)? == 0 {
            return Err(BridgeError::EngineClosed);
        }
        Ok(parse_engine_line(&buf))
    }

    fn sync(&mut self) -> Result<(), BridgeError> {
        self.send("isready")?;
        while self.read_reply()? != EngineReply::ReadyOk {}
        Ok(())
    }

    /// Ask for the best move in `fen` with a fixed thinking time.
    pub fn best_move(
        &mut self,
        fen: &str,
        movetime_ms: u64,
    ) -> Result<Option<String>, BridgeError> {
        self.send("ucinewgame")?;
        self.sync()?;
        self.send(&format!("position fen {}", fen))?;
        self.send(&format!("go movetime {}", movetime_ms))?;
        loop {
            if let EngineReply::BestMove { mv, .. } = self.read_reply()? {
                return Ok(mv);
            }
        }
    }

    pub fn quit(mut self) -> Result<(), BridgeError> {
        self.send("quit")?;
        self.child.wait()?;
        Ok(())
    }
}

impl Drop for UciEngineProcess {
    fn drop(&mut self) {
        // no-op when quit() already reaped the child
        if let Ok(None) = self.child.try_wait() {
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}

fn engine_base_name(name: &str) -> Option<&'static str> {
    match name.trim().to_ascii_lowercase().as_str() {
        "stockfish" | "sf" => Some("stockfish"),
        "lc0" | "leela" | "leelachesszero" => Some("lc0"),
        _ => None,
    }
}

/// Resolve a known engine name to a binary: PATH first, then the usual
/// local folders, then any `stockfish*` build inside `./stockfish`.
pub fn locate_engine(name: &str) -> Option<PathBuf> {
    let base = engine_base_name(name)?;
    let exe = format!("{}{}", base, env::consts::EXE_SUFFIX);

    if let Some(paths) = env::var_os("PATH") {
        for dir in env::split_paths(&paths) {
            let candidate = dir.join(&exe);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }

    let root = env::current_dir().ok()?;
    for dir in ["", "bin", "engines", "stockfish"] {
        let candidate = root.join(dir).join(&exe);
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    let variants = root.join("stockfish");
    let entries = std::fs::read_dir(&variants).ok()?;
    entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .find(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .map(|n| {
                    let n = n.to_ascii_lowercase();
                    let suffix = env::consts::EXE_SUFFIX;
                    n.starts_with(base) && (suffix.is_empty() || n.ends_with(suffix))
                })
                .unwrap_or(false)
        })
}

/// An existing file path is taken as is; anything else goes through
/// `locate_engine`.
pub fn resolve_engine(engine: &str) -> Result<PathBuf, BridgeError> {
    let direct = PathBuf::from(engine);
    if direct.is_file() {
        return Ok(direct);
    }
    locate_engine(engine).ok_or_else(|| BridgeError::EngineNotFound(engine.to_string()))
}

/// Best move for the side on move, as LAN. `engine` is a path or a known
/// engine name. A missing engine is `Ok(None)`: the game goes on without it.
pub fn suggest_move(
    board: &Board,
    level: Level,
    engine: &str,
) -> Result<Option<String>, BridgeError> {
    let path = match resolve_engine(engine) {
        Ok(path) => path,
        Err(e) => {
            warn!("{}", e);
            return Ok(None);
        }
    };
    let mut process = UciEngineProcess::spawn(&path)?;
    debug!(
        "{} thinking for {} ms",
        process.name().unwrap_or("engine"),
        level.movetime_ms()
    );
    let mv = process.best_move(&to_fen(board), level.movetime_ms())?;
    process.quit()?;
    Ok(mv)
}
