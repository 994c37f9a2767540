//! Shadows parameters and per-piece statistics
//!
//! Controls combat numbers, summoning odds and AI randomness.

use crate::piece::PieceKind;

/// Hit points, damage and display name of one piece type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceStats {
    pub hp: i32,
    pub damage: i32,
    pub name: &'static str,
}

impl PieceStats {
    pub const fn new(hp: i32, damage: i32, name: &'static str) -> Self {
        Self { hp, damage, name }
    }
}

/// Stats for a regular piece of `kind`.
pub fn stats_for(kind: PieceKind) -> PieceStats {
    match kind {
        PieceKind::Pawn => PieceStats::new(20, 10, "Hollow"),
        PieceKind::Knight => PieceStats::new(40, 20, "Knight"),
        PieceKind::Bishop => PieceStats::new(30, 25, "Sorcerer"),
        PieceKind::Rook => PieceStats::new(60, 15, "Tower"),
        PieceKind::Queen => PieceStats::new(80, 30, "Queen"),
        PieceKind::King => PieceStats::new(100, 40, "King"),
    }
}

/// The enemy king when it is the boss: three times a king's hit points.
pub const BOSS_STATS: PieceStats = PieceStats::new(300, 50, "Fallen King");

/// Session parameters for a Shadows game
#[derive(Debug, Clone)]
pub struct ShadowsParams {
    /// Chance per enemy turn that the boss summons a minion, in [0, 1]
    pub summon_chance: f64,

    /// Fixed RNG seed for the boss AI (None = seeded from the OS)
    pub seed: Option<u64>,

    /// Install the trail hook: a moving boss leaves a minion behind
    pub shadow_trail: bool,
}

impl Default for ShadowsParams {
    fn default() -> Self {
        Self {
            summon_chance: 0.30,
            seed: None,
            shadow_trail: false,
        }
    }
}

impl ShadowsParams {
    /// Create new params with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set summon probability (clamped to [0, 1])
    pub fn summon_chance(mut self, chance: f64) -> Self {
        self.summon_chance = if chance.is_nan() { 0.0 } else { chance.clamp(0.0, 1.0) };
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn shadow_trail(mut self, enabled: bool) -> Self {
        self.shadow_trail = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = ShadowsParams::new();
        assert_eq!(params.summon_chance, 0.30);
        assert_eq!(params.seed, None);
        assert!(!params.shadow_trail);
    }

    #[test]
    fn summon_chance_is_clamped() {
        assert_eq!(ShadowsParams::new().summon_chance(3.0).summon_chance, 1.0);
        assert_eq!(ShadowsParams::new().summon_chance(-1.0).summon_chance, 0.0);
        assert_eq!(ShadowsParams::new().summon_chance(f64::NAN).summon_chance, 0.0);
    }

    #[test]
    fn boss_outclasses_king() {
        assert_eq!(BOSS_STATS.hp, 3 * stats_for(PieceKind::King).hp);
    }
}
