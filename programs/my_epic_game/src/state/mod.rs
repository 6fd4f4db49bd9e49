pub mod boss;
pub mod character;
pub mod game;
pub mod owner_index;
pub mod roster;

pub use boss::*;
pub use character::*;
pub use game::*;
pub use owner_index::*;
pub use roster::*;

/// Result of applying damage to a health pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageOutcome {
    /// Damage actually removed, never more than the HP that was left.
    pub dealt: u64,
    pub hp_after: u64,
    /// True only on the call that took HP from positive to 0.
    pub died: bool,
}

impl DamageOutcome {
    pub(crate) fn apply(current_hp: &mut u64, amount: u64) -> Self {
        let before = *current_hp;
        let after = before.saturating_sub(amount);
        *current_hp = after;
        Self {
            dealt: before - after,
            hp_after: after,
            died: before > 0 && after == 0,
        }
    }
}
