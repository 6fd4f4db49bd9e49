use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::ProgramLog;
use crate::state::{Character, Game, OwnerIndex};

#[derive(Accounts)]
pub struct MintCharacter<'info> {
    #[account(mut, seeds = [GAME_SEED], bump = game.bump)]
    pub game: Account<'info, Game>,
    #[account(
        init,
        payer = owner,
        space = ANCHOR_DISCRIMINATOR + Character::INIT_SPACE,
        seeds = [CHARACTER_SEED, &game.next_instance_id.to_le_bytes()],
        bump,
    )]
    pub character: Account<'info, Character>,
    #[account(
        init_if_needed,
        payer = owner,
        space = ANCHOR_DISCRIMINATOR + OwnerIndex::INIT_SPACE,
        seeds = [OWNER_SEED, owner.key().as_ref()],
        bump,
    )]
    pub owner_index: Account<'info, OwnerIndex>,
    #[account(mut)]
    pub owner: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<MintCharacter>, template_index: u8) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let owner_index = &mut ctx.accounts.owner_index;
    owner_index.bind(owner, ctx.bumps.owner_index);

    let character = ctx.accounts.game.mint_character(
        owner_index,
        owner,
        template_index,
        ctx.bumps.character,
        &mut ProgramLog,
    )?;
    msg!(
        "Character #{} minted for {} from template {} (hp: {}) | {}/{} minted",
        character.instance_id,
        owner,
        template_index,
        character.current_hp,
        ctx.accounts.game.total_minted(),
        ctx.accounts.game.limits.mint_cap
    );
    ctx.accounts.character.set_inner(character);
    Ok(())
}
