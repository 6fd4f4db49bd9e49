use anchor_lang::prelude::*;

use super::DamageOutcome;

/// A minted, owned character. Stats other than `current_hp` are read from the
/// template at `template_index`.
/// Seeds: [b"character", instance_id.to_le_bytes()]
#[account]
#[derive(Debug, PartialEq, Eq, InitSpace)]
pub struct Character {
    pub instance_id: u64,
    pub template_index: u8,
    pub owner: Pubkey,
    pub current_hp: u64,
    pub bump: u8,
}

impl Character {
    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    pub fn apply_damage(&mut self, amount: u64) -> DamageOutcome {
        DamageOutcome::apply(&mut self.current_hp, amount)
    }
}

/// Instance joined with its template, returned by `get_character`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct CharacterView {
    pub instance_id: u64,
    pub template_index: u8,
    pub owner: Pubkey,
    pub name: String,
    pub image_uri: String,
    pub current_hp: u64,
    pub max_hp: u64,
    pub attack: u64,
}
