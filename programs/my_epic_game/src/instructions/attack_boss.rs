use anchor_lang::prelude::*;

use crate::combat;
use crate::constants::*;
use crate::events::ProgramLog;
use crate::state::{Character, Game};

#[derive(Accounts)]
#[instruction(instance_id: u64)]
pub struct AttackBoss<'info> {
    #[account(mut, seeds = [GAME_SEED], bump = game.bump)]
    pub game: Account<'info, Game>,
    /// CHECK: loaded in the handler so a missing instance reports CharacterNotFound
    #[account(mut, seeds = [CHARACTER_SEED, &instance_id.to_le_bytes()], bump)]
    pub character: UncheckedAccount<'info>,
    pub player: Signer<'info>,
}

/// Reads a character account, or `None` if the address holds no character
/// owned by this program (never minted, or delegated away).
pub(crate) fn read_character(info: &AccountInfo) -> Result<Option<Character>> {
    if info.data_is_empty() || info.owner != &crate::ID {
        return Ok(None);
    }
    let mut data: &[u8] = &info.try_borrow_data()?;
    Ok(Some(Character::try_deserialize(&mut data)?))
}

/// Reads the character PDA for `instance_id`, or `None` if it was never minted.
pub(crate) fn load_character(info: &AccountInfo, instance_id: u64) -> Result<Option<Character>> {
    Ok(read_character(info)?.filter(|character| character.instance_id == instance_id))
}

pub(crate) fn store_character(info: &AccountInfo, character: &Character) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data;
    character.try_serialize(&mut writer)
}

pub fn handler(ctx: Context<AttackBoss>, instance_id: u64) -> Result<()> {
    let info = ctx.accounts.character.to_account_info();
    let mut character = load_character(&info, instance_id)?;

    combat::resolve_attack(
        &mut ctx.accounts.game,
        character.as_mut(),
        &ctx.accounts.player.key(),
        &mut ProgramLog,
    )?;

    if let Some(character) = &character {
        store_character(&info, character)?;
    }
    Ok(())
}
