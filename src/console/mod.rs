pub mod parser;
pub mod render;
pub mod r#loop;

use clap::ValueEnum;

pub use parser::{parse_command, Command};
pub use r#loop::{process_line, run_console, ClassicalConsole, Console, ShadowsConsole};
pub use render::render_shadows;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Standard rules, optional engine hints.
    #[default]
    Classical,
    /// RPG variant against the boss AI.
    Shadows,
}
