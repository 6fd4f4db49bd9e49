use anchor_lang::prelude::*;

use super::{Boss, Character, CharacterTemplate, CharacterView, OwnerIndex};
use crate::constants::*;
use crate::errors::GameError;
use crate::events::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct GameLimits {
    /// Instances creatable across the deployment's lifetime.
    pub mint_cap: u64,
    /// Instances a single owner may hold at once.
    pub max_characters_per_owner: u16,
}

impl GameLimits {
    pub fn new(mint_cap: u64, max_characters_per_owner: u16) -> Result<Self> {
        require!(mint_cap > 0, GameError::InvalidMintCap);
        require!(
            max_characters_per_owner > 0
                && max_characters_per_owner as usize <= MAX_OWNED_CHARACTERS,
            GameError::InvalidOwnerLimit
        );
        Ok(Self {
            mint_cap,
            max_characters_per_owner,
        })
    }
}

/// Deployment singleton: roster, boss and registry counters.
/// Seeds: [b"game"]
#[account]
#[derive(Debug, PartialEq, Eq, InitSpace)]
pub struct Game {
    pub authority: Pubkey,
    #[max_len(MAX_TEMPLATES)]
    pub roster: Vec<CharacterTemplate>,
    pub boss: Boss,
    pub limits: GameLimits,
    pub next_instance_id: u64,
    pub event_seq: u64,
    pub bump: u8,
}

impl Game {
    pub fn initialize(
        &mut self,
        authority: Pubkey,
        roster: Vec<CharacterTemplate>,
        boss: Boss,
        limits: GameLimits,
        bump: u8,
        log: &mut impl EventSink,
    ) -> Result<()> {
        self.authority = authority;
        self.roster = roster;
        self.boss = boss;
        self.limits = limits;
        self.next_instance_id = FIRST_INSTANCE_ID;
        self.event_seq = 0;
        self.bump = bump;

        let seq = self.reserve_seq()?;
        self.event_seq = seq;
        log.record(GameEvent::Initialized(GameInitialized {
            seq,
            authority,
            roster_size: self.roster.len() as u8,
            boss_hp: self.boss.max_hp,
            boss_attack: self.boss.attack_damage,
            mint_cap: limits.mint_cap,
            max_characters_per_owner: limits.max_characters_per_owner,
        }));
        Ok(())
    }

    pub fn template(&self, template_index: u8) -> Result<&CharacterTemplate> {
        self.roster
            .get(template_index as usize)
            .ok_or_else(|| GameError::TemplateNotFound.into())
    }

    pub fn total_minted(&self) -> u64 {
        self.next_instance_id.saturating_sub(FIRST_INSTANCE_ID)
    }

    /// Sequence number the next event will carry. Callers store it back into
    /// `event_seq` only once the operation can no longer fail.
    pub(crate) fn reserve_seq(&self) -> Result<u64> {
        self.event_seq
            .checked_add(1)
            .ok_or_else(|| GameError::MathOverflow.into())
    }

    /// Creates the next character instance for `owner`. The returned record
    /// is written into the freshly initialized `Character` account.
    pub fn mint_character(
        &mut self,
        owner_index: &mut OwnerIndex,
        owner: Pubkey,
        template_index: u8,
        bump: u8,
        log: &mut impl EventSink,
    ) -> Result<Character> {
        let hp = self.template(template_index)?.base_hp;
        require!(
            self.total_minted() < self.limits.mint_cap,
            GameError::MintCapReached
        );
        owner_index.ensure_room(self.limits.max_characters_per_owner)?;

        let instance_id = self.next_instance_id;
        let next_instance_id = instance_id
            .checked_add(1)
            .ok_or(GameError::MathOverflow)?;
        let seq = self.reserve_seq()?;

        self.next_instance_id = next_instance_id;
        self.event_seq = seq;
        owner_index.instance_ids.push(instance_id);

        log.record(GameEvent::Minted(CharacterMinted {
            seq,
            instance_id,
            template_index,
            owner,
            hp,
            total_minted: self.total_minted(),
        }));

        Ok(Character {
            instance_id,
            template_index,
            owner,
            current_hp: hp,
            bump,
        })
    }

    pub fn transfer_character(
        &mut self,
        character: &mut Character,
        from: &mut OwnerIndex,
        to: &mut OwnerIndex,
        caller: &Pubkey,
        new_owner: Pubkey,
        log: &mut impl EventSink,
    ) -> Result<()> {
        require!(character.owner == *caller, GameError::NotCharacterOwner);
        require!(new_owner != *caller, GameError::TransferToSelf);
        require!(
            from.contains(character.instance_id),
            GameError::CharacterNotFound
        );
        to.ensure_room(self.limits.max_characters_per_owner)?;
        let seq = self.reserve_seq()?;

        from.remove(character.instance_id)?;
        to.instance_ids.push(character.instance_id);
        character.owner = new_owner;
        self.event_seq = seq;

        log.record(GameEvent::Transferred(CharacterTransferred {
            seq,
            instance_id: character.instance_id,
            from: *caller,
            to: new_owner,
        }));
        Ok(())
    }

    pub fn view_character(&self, character: &Character) -> Result<CharacterView> {
        let template = self.template(character.template_index)?;
        Ok(CharacterView {
            instance_id: character.instance_id,
            template_index: character.template_index,
            owner: character.owner,
            name: template.name.clone(),
            image_uri: template.image_uri.clone(),
            current_hp: character.current_hp,
            max_hp: template.base_hp,
            attack: template.base_attack,
        })
    }
}
