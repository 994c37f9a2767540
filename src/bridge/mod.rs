//! Collaborators outside the rules core: an independent legality oracle and
//! an external UCI engine. Both only see the board through FEN.

pub mod engine;
pub mod oracle;

use thiserror::Error;

pub use engine::{
    locate_engine, parse_engine_line, resolve_engine, suggest_move, EngineReply, Level,
    UciEngineProcess,
};
pub use oracle::RulesOracle;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("FEN rejected by rules oracle: {0}")]
    InvalidFen(String),
    #[error("position rejected by rules oracle: {0}")]
    InvalidPosition(String),
    #[error("engine not found: {0}")]
    EngineNotFound(String),
    #[error("engine closed its output")]
    EngineClosed,
    #[error("engine i/o: {0}")]
    Io(#[from] std::io::Error),
}
