//! Line-oriented game loop for both variants

use super::parser::{parse_command, Command};
use super::render::render_shadows;
use crate::board::{Board, Status};
use crate::bridge::{suggest_move, Level};
use crate::notation::{move_to_lan, parse_lan, parse_square, square_name, to_fen};
use crate::shadows::{EnemyTurn, MoveOutcome, Outcome, ShadowsGame, ShadowsParams, Team};
use std::io::{self, BufRead, Write};

/// A game front end fed one command at a time.
pub trait Console {
    fn handle_command(&mut self, cmd: Command) -> Vec<String>;
    fn is_running(&self) -> bool;
}

const CLASSICAL_HELP: &[&str] = &[
    "commands:",
    "  e2e4 | move e2e4   play a move",
    "  moves e2           legal destinations of the piece on e2",
    "  board              show the board",
    "  fen                position in FEN",
    "  json               full snapshot as JSON",
    "  hint               ask the configured UCI engine",
    "  status             side to move and game status",
    "  new                restart",
    "  quit",
];

const SHADOWS_HELP: &[&str] = &[
    "commands:",
    "  e7e5 | move e7e5   move or attack (row 1 is the top of the grid)",
    "  moves e7           reachable cells of your piece on e7",
    "  board              show the board through the fog",
    "  status             hit points and turn count",
    "  new                restart",
    "  quit",
    "legend: UPPER = yours, lower = enemy, @ = boss, # = fog",
];

pub struct ClassicalConsole {
    board: Board,
    engine: Option<String>,
    level: Level,
    running: bool,
}

impl ClassicalConsole {
    pub fn new(engine: Option<String>, level: Level) -> Self {
        Self {
            board: Board::new(),
            engine,
            level,
            running: true,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    fn status_line(&mut self) -> String {
        let turn = self.board.turn();
        match self.board.status() {
            Status::Checkmate => format!("checkmate, {} wins", turn.opponent()),
            Status::Check => format!("{} to move, in check", turn),
            _ if self.board.is_stalemate(turn) => "stalemate, draw".to_string(),
            _ => format!("{} to move", turn),
        }
    }

    fn play(&mut self, lan: &str) -> Vec<String> {
        let mut res = Vec::new();
        if self.board.status() == Status::Checkmate {
            res.push("game over, type new to restart".to_string());
            return res;
        }
        match parse_lan(lan) {
            Ok((from, to)) => {
                if self.board.attempt_move(from, to) {
                    res.push(format!("ok {}", move_to_lan(from, to)));
                    res.push(self.status_line());
                } else {
                    res.push(format!("illegal move {}", lan));
                }
            }
            Err(e) => res.push(format!("error: {}", e)),
        }
        res
    }
}

impl Console for ClassicalConsole {
    fn handle_command(&mut self, cmd: Command) -> Vec<String> {
        let mut res = Vec::new();
        match cmd {
            Command::Move(lan) => res = self.play(&lan),
            Command::Moves(sq) => match parse_square(&sq) {
                Ok(pos) => {
                    let dests: Vec<String> = self
                        .board
                        .legal_moves(pos)
                        .into_iter()
                        .map(square_name)
                        .collect();
                    res.push(format!("{}: {}", sq, dests.join(" ")));
                }
                Err(e) => res.push(format!("error: {}", e)),
            },
            Command::Board => res.extend(self.board.to_string().lines().map(str::to_string)),
            Command::Fen => res.push(to_fen(&self.board)),
            Command::Json => match serde_json::to_string(&self.board.snapshot()) {
                Ok(json) => res.push(json),
                Err(e) => res.push(format!("error: {}", e)),
            },
            Command::Hint => match &self.engine {
                None => res.push("no engine configured (use --engine)".to_string()),
                Some(engine) => match suggest_move(&self.board, self.level, engine) {
                    Ok(Some(mv)) => res.push(format!("hint {}", mv)),
                    Ok(None) => res.push("engine unavailable".to_string()),
                    Err(e) => res.push(format!("error: {}", e)),
                },
            },
            Command::Status => {
                res.push(self.status_line());
                res.push(format!("{} moves played", self.board.history().len()));
            }
            Command::New => {
                self.board = Board::new();
                res.push("new game".to_string());
            }
            Command::Help => res.extend(CLASSICAL_HELP.iter().map(|s| s.to_string())),
            Command::Quit => self.running = false,
            Command::Unknown(s) => res.push(format!("unknown command: {}", s)),
        }
        res
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

pub struct ShadowsConsole {
    game: ShadowsGame,
    params: ShadowsParams,
    running: bool,
}

impl ShadowsConsole {
    pub fn new(params: ShadowsParams) -> Self {
        Self {
            game: ShadowsGame::new(params.clone()),
            params,
            running: true,
        }
    }

    pub fn game(&self) -> &ShadowsGame {
        &self.game
    }

    fn describe_player(outcome: &MoveOutcome) -> String {
        match outcome {
            MoveOutcome::Moved { from, to } => format!("you move {}", move_to_lan(*from, *to)),
            MoveOutcome::Killed { to, victim, .. } => {
                format!("you slay the {} on {}", victim.display_name(), square_name(*to))
            }
            MoveOutcome::Struck { remaining_hp, .. } => {
                format!("you strike, {} hp left", remaining_hp)
            }
            MoveOutcome::Blocked => "you cannot go there".to_string(),
        }
    }

    fn describe_enemy(turn: &EnemyTurn, res: &mut Vec<String>) {
        match &turn.action {
            None => res.push("the enemy hesitates".to_string()),
            Some((mv, MoveOutcome::Killed { victim, .. })) => res.push(format!(
                "the enemy slays your {} on {}",
                victim.display_name(),
                square_name(mv.to)
            )),
            Some((mv, MoveOutcome::Struck { remaining_hp, .. })) => res.push(format!(
                "the enemy strikes {}, {} hp left",
                square_name(mv.to),
                remaining_hp
            )),
            Some(_) => res.push("something moves in the fog".to_string()),
        }
        if turn.summoned.is_some() {
            res.push("the boss summons a shadow".to_string());
        }
    }

    fn outcome_line(&self) -> Option<String> {
        match self.game.outcome() {
            Outcome::Ongoing => None,
            Outcome::Victory => Some("the Fallen King is destroyed, you win".to_string()),
            Outcome::Defeat => Some("your king has fallen, you lose".to_string()),
        }
    }

    fn play(&mut self, lan: &str) -> Vec<String> {
        let mut res = Vec::new();
        if let Some(line) = self.outcome_line() {
            res.push(line);
            return res;
        }
        let (from, to) = match parse_lan(lan) {
            Ok(mv) => mv,
            Err(e) => {
                res.push(format!("error: {}", e));
                return res;
            }
        };
        let outcome = self.game.player_move(from, to);
        res.push(Self::describe_player(&outcome));
        if !outcome.is_success() {
            return res;
        }
        if self.game.outcome() == Outcome::Ongoing {
            let reply = self.game.enemy_turn();
            Self::describe_enemy(&reply, &mut res);
        }
        if let Some(line) = self.outcome_line() {
            res.push(line);
        }
        res
    }
}

impl Console for ShadowsConsole {
    fn handle_command(&mut self, cmd: Command) -> Vec<String> {
        let mut res = Vec::new();
        match cmd {
            Command::Move(lan) => res = self.play(&lan),
            Command::Moves(sq) => match parse_square(&sq) {
                Ok(pos) => {
                    let board = self.game.board();
                    match board.piece_at(pos.x as i32, pos.y as i32) {
                        Some(p) if p.team == Team::Player => {
                            let dests: Vec<String> =
                                board.candidate_moves(p.id).into_iter().map(square_name).collect();
                            res.push(format!("{}: {}", sq, dests.join(" ")));
                        }
                        _ => res.push(format!("no piece of yours on {}", sq)),
                    }
                }
                Err(e) => res.push(format!("error: {}", e)),
            },
            Command::Board => res.extend(render_shadows(self.game.board_mut(), Team::Player)),
            Command::Status => {
                let board = self.game.board();
                for p in board.pieces_of(Team::Player) {
                    res.push(format!(
                        "{} {} {} hp",
                        p.display_name(),
                        square_name(p.position),
                        p.hp
                    ));
                }
                res.push(format!("enemy turns: {}", self.game.enemy_turns()));
                if let Some(line) = self.outcome_line() {
                    res.push(line);
                }
            }
            Command::New => {
                self.game = ShadowsGame::new(self.params.clone());
                res.push("new game".to_string());
            }
            Command::Help => res.extend(SHADOWS_HELP.iter().map(|s| s.to_string())),
            Command::Quit => self.running = false,
            Command::Fen | Command::Json | Command::Hint => {
                res.push("not available in shadows mode".to_string())
            }
            Command::Unknown(s) => res.push(format!("unknown command: {}", s)),
        }
        res
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

pub fn run_console<C: Console>(console: &mut C) -> io::Result<()> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    let mut buf = String::new();

    while console.is_running() {
        write!(writer, "> ")?;
        writer.flush()?;
        buf.clear();
        let n = reader.read_line(&mut buf)?;
        if n == 0 {
            // EOF reached
            break;
        }
        let line = buf.trim();
        if line.is_empty() {
            continue;
        }

        for r in process_line(line, console) {
            writeln!(writer, "{}", r)?;
        }
        writer.flush()?;
    }

    Ok(())
}

pub fn process_line<C: Console>(line: &str, console: &mut C) -> Vec<String> {
    let cmd = parse_command(line);
    console.handle_command(cmd)
}
