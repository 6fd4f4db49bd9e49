use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::ProgramLog;
use crate::state::{build_roster, Boss, Game, GameLimits};

#[derive(Accounts)]
pub struct InitializeGame<'info> {
    #[account(
        init,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + Game::INIT_SPACE,
        seeds = [GAME_SEED],
        bump,
    )]
    pub game: Account<'info, Game>,
    #[account(mut)]
    pub authority: Signer<'info>,
    pub system_program: Program<'info, System>,
}

#[allow(clippy::too_many_arguments)]
pub fn handler(
    ctx: Context<InitializeGame>,
    character_names: Vec<String>,
    character_image_uris: Vec<String>,
    character_hp: Vec<u64>,
    character_attack: Vec<u64>,
    boss_name: String,
    boss_image_uri: String,
    boss_hp: u64,
    boss_attack: u64,
    mint_cap: u64,
    max_characters_per_owner: u16,
) -> Result<()> {
    let roster = build_roster(
        character_names,
        character_image_uris,
        character_hp,
        character_attack,
    )?;
    let boss = Boss::new(boss_name, boss_image_uri, boss_hp, boss_attack)?;
    let limits = GameLimits::new(mint_cap, max_characters_per_owner)?;

    let game = &mut ctx.accounts.game;
    game.initialize(
        ctx.accounts.authority.key(),
        roster,
        boss,
        limits,
        ctx.bumps.game,
        &mut ProgramLog,
    )?;

    for template in &game.roster {
        msg!(
            "Template #{} {} (hp: {}, atk: {})",
            template.template_index,
            template.name,
            template.base_hp,
            template.base_attack
        );
    }
    msg!(
        "Game initialized by {} | boss {} (hp: {}, atk: {}) | mint cap {} | {} per owner",
        game.authority,
        game.boss.name,
        game.boss.max_hp,
        game.boss.attack_damage,
        game.limits.mint_cap,
        game.limits.max_characters_per_owner
    );
    Ok(())
}
