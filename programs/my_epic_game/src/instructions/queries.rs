use anchor_lang::prelude::*;

use super::attack_boss::load_character;
use crate::constants::*;
use crate::errors::GameError;
use crate::state::{Boss, CharacterTemplate, CharacterView, Game, OwnerIndex};

// Read-only instructions; results travel back as return data.

#[derive(Accounts)]
pub struct ReadGame<'info> {
    #[account(seeds = [GAME_SEED], bump = game.bump)]
    pub game: Account<'info, Game>,
}

#[derive(Accounts)]
#[instruction(instance_id: u64)]
pub struct ReadCharacter<'info> {
    #[account(seeds = [GAME_SEED], bump = game.bump)]
    pub game: Account<'info, Game>,
    /// CHECK: loaded in the handler so a missing instance reports CharacterNotFound
    #[account(seeds = [CHARACTER_SEED, &instance_id.to_le_bytes()], bump)]
    pub character: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct ReadOwner<'info> {
    /// CHECK: an owner that never minted has no index and holds nothing
    #[account(seeds = [OWNER_SEED, owner.as_ref()], bump)]
    pub owner_index: UncheckedAccount<'info>,
}

pub fn get_template(ctx: Context<ReadGame>, template_index: u8) -> Result<CharacterTemplate> {
    ctx.accounts.game.template(template_index).cloned()
}

pub fn get_boss(ctx: Context<ReadGame>) -> Result<Boss> {
    Ok(ctx.accounts.game.boss.clone())
}

pub fn get_character(ctx: Context<ReadCharacter>, instance_id: u64) -> Result<CharacterView> {
    let info = ctx.accounts.character.to_account_info();
    let character = load_character(&info, instance_id)?.ok_or(GameError::CharacterNotFound)?;
    ctx.accounts.game.view_character(&character)
}

pub fn get_owned_characters(ctx: Context<ReadOwner>, _owner: Pubkey) -> Result<Vec<u64>> {
    read_owned_characters(&ctx.accounts.owner_index.to_account_info())
}

/// An owner that never minted has no index account and holds nothing.
pub(crate) fn read_owned_characters(info: &AccountInfo) -> Result<Vec<u64>> {
    if info.data_is_empty() || info.owner != &crate::ID {
        return Ok(Vec::new());
    }
    let mut data: &[u8] = &info.try_borrow_data()?;
    let index = OwnerIndex::try_deserialize(&mut data)?;
    Ok(index.instance_ids)
}
