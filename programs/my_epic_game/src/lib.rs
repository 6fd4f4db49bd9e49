pub mod combat;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;
use ephemeral_rollups_sdk::anchor::ephemeral;

pub use constants::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("8LBbatyEa2mkcxWasBN3AbC94E7JjoSDnEDuiLSVce26");

#[ephemeral]
#[program]
pub mod my_epic_game {
    use super::*;

    /// Create the game: roster, boss and limits. Runs once on the base layer.
    #[allow(clippy::too_many_arguments)]
    pub fn initialize_game(
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
        instructions::initialize_game::handler(
            ctx,
            character_names,
            character_image_uris,
            character_hp,
            character_attack,
            boss_name,
            boss_image_uri,
            boss_hp,
            boss_attack,
            mint_cap,
            max_characters_per_owner,
        )
    }

    /// Mint the next character instance from a roster template.
    pub fn mint_character(ctx: Context<MintCharacter>, template_index: u8) -> Result<()> {
        instructions::mint_character::handler(ctx, template_index)
    }

    /// Attack the boss with an owned character. Runs on base layer or ER.
    pub fn attack_boss(ctx: Context<AttackBoss>, instance_id: u64) -> Result<()> {
        instructions::attack_boss::handler(ctx, instance_id)
    }

    /// Hand a character to another wallet.
    pub fn transfer_character(
        ctx: Context<TransferCharacter>,
        instance_id: u64,
        new_owner: Pubkey,
    ) -> Result<()> {
        instructions::transfer_character::handler(ctx, instance_id, new_owner)
    }

    /// Return a roster template.
    pub fn get_template(ctx: Context<ReadGame>, template_index: u8) -> Result<CharacterTemplate> {
        instructions::queries::get_template(ctx, template_index)
    }

    /// Return the boss record.
    pub fn get_boss(ctx: Context<ReadGame>) -> Result<Boss> {
        instructions::queries::get_boss(ctx)
    }

    /// Return a character joined with its template.
    pub fn get_character(ctx: Context<ReadCharacter>, instance_id: u64) -> Result<CharacterView> {
        instructions::queries::get_character(ctx, instance_id)
    }

    /// Return the instance ids an owner holds.
    pub fn get_owned_characters(ctx: Context<ReadOwner>, owner: Pubkey) -> Result<Vec<u64>> {
        instructions::queries::get_owned_characters(ctx, owner)
    }

    /// Delegate the game account (boss state) to an Ephemeral Rollup.
    pub fn delegate_game(ctx: Context<DelegateGameCtx>) -> Result<()> {
        instructions::delegation::delegate_game(ctx)
    }

    /// Delegate a character account to an Ephemeral Rollup.
    pub fn delegate_character(ctx: Context<DelegateCharacterCtx>, instance_id: u64) -> Result<()> {
        instructions::delegation::delegate_character(ctx, instance_id)
    }

    /// Commit the game and the delegated characters passed as remaining
    /// accounts to the base layer (keeps delegation active). Runs on ER.
    pub fn commit_game<'info>(ctx: Context<'_, '_, '_, 'info, CommitGame<'info>>) -> Result<()> {
        instructions::delegation::commit_game(ctx)
    }

    /// Commit and undelegate the game and the listed characters. Runs on ER.
    pub fn end_session<'info>(ctx: Context<'_, '_, '_, 'info, CommitGame<'info>>) -> Result<()> {
        instructions::delegation::end_session(ctx)
    }
}
