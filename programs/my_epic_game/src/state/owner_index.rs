use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::GameError;

/// Characters currently held by one owner.
/// Seeds: [b"owner", owner.key()]
#[account]
#[derive(Debug, InitSpace)]
pub struct OwnerIndex {
    pub owner: Pubkey,
    #[max_len(MAX_OWNED_CHARACTERS)]
    pub instance_ids: Vec<u64>,
    pub bump: u8,
}

impl OwnerIndex {
    /// Binds a freshly created (zeroed) index to its owner. No-op on an
    /// index that is already bound.
    pub fn bind(&mut self, owner: Pubkey, bump: u8) {
        if self.owner == Pubkey::default() {
            self.owner = owner;
            self.instance_ids = Vec::new();
            self.bump = bump;
        }
    }

    pub fn contains(&self, instance_id: u64) -> bool {
        self.instance_ids.contains(&instance_id)
    }

    pub fn ensure_room(&self, limit: u16) -> Result<()> {
        require!(
            self.instance_ids.len() < limit as usize,
            GameError::OwnerLimitReached
        );
        Ok(())
    }

    pub fn insert(&mut self, instance_id: u64, limit: u16) -> Result<()> {
        self.ensure_room(limit)?;
        self.instance_ids.push(instance_id);
        Ok(())
    }

    pub fn remove(&mut self, instance_id: u64) -> Result<()> {
        let pos = self
            .instance_ids
            .iter()
            .position(|id| *id == instance_id)
            .ok_or(GameError::CharacterNotFound)?;
        self.instance_ids.remove(pos);
        Ok(())
    }
}
