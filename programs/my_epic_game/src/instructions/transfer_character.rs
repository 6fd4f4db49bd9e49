use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::GameError;
use crate::events::ProgramLog;
use crate::state::{Character, Game, OwnerIndex};

#[derive(Accounts)]
#[instruction(instance_id: u64, new_owner: Pubkey)]
pub struct TransferCharacter<'info> {
    #[account(mut, seeds = [GAME_SEED], bump = game.bump)]
    pub game: Account<'info, Game>,
    #[account(
        mut,
        seeds = [CHARACTER_SEED, &instance_id.to_le_bytes()],
        bump = character.bump,
        constraint = character.owner == owner.key() @ GameError::NotCharacterOwner,
        constraint = new_owner != owner.key() @ GameError::TransferToSelf,
    )]
    pub character: Account<'info, Character>,
    // empty for a caller that never minted
    #[account(
        init_if_needed,
        payer = owner,
        space = ANCHOR_DISCRIMINATOR + OwnerIndex::INIT_SPACE,
        seeds = [OWNER_SEED, owner.key().as_ref()],
        bump,
    )]
    pub from_index: Account<'info, OwnerIndex>,
    #[account(
        init_if_needed,
        payer = owner,
        space = ANCHOR_DISCRIMINATOR + OwnerIndex::INIT_SPACE,
        seeds = [OWNER_SEED, new_owner.as_ref()],
        bump,
    )]
    pub to_index: Account<'info, OwnerIndex>,
    #[account(mut)]
    pub owner: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<TransferCharacter>, instance_id: u64, new_owner: Pubkey) -> Result<()> {
    let accounts = ctx.accounts;
    let owner = accounts.owner.key();

    accounts.from_index.bind(owner, ctx.bumps.from_index);
    accounts.to_index.bind(new_owner, ctx.bumps.to_index);
    accounts.game.transfer_character(
        &mut accounts.character,
        &mut accounts.from_index,
        &mut accounts.to_index,
        &owner,
        new_owner,
        &mut ProgramLog,
    )?;

    msg!("Character #{} transferred {} -> {}", instance_id, owner, new_owner);
    Ok(())
}
