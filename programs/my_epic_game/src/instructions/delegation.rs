use anchor_lang::prelude::*;
use ephemeral_rollups_sdk::anchor::{commit, delegate};
use ephemeral_rollups_sdk::cpi::DelegateConfig;
use ephemeral_rollups_sdk::ephem::{commit_accounts, commit_and_undelegate_accounts};

use super::attack_boss::read_character;
use crate::constants::*;
use crate::errors::GameError;
use crate::state::Game;

// ─── Ephemeral Rollup Sessions ───────────────────────────────────────────────
// Combat can run on an ephemeral rollup: the game account (boss state) and the
// fighting characters are delegated, then committed back to the base layer.

#[delegate]
#[derive(Accounts)]
pub struct DelegateGameCtx<'info> {
    pub payer: Signer<'info>,
    /// CHECK: Game PDA to delegate
    #[account(mut, del, seeds = [GAME_SEED], bump)]
    pub game: AccountInfo<'info>,
}

#[delegate]
#[derive(Accounts)]
#[instruction(instance_id: u64)]
pub struct DelegateCharacterCtx<'info> {
    pub payer: Signer<'info>,
    /// CHECK: Character PDA to delegate
    #[account(mut, del, seeds = [CHARACTER_SEED, &instance_id.to_le_bytes()], bump)]
    pub character: AccountInfo<'info>,
}

#[commit]
#[derive(Accounts)]
pub struct CommitGame<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    #[account(mut, seeds = [GAME_SEED], bump = game.bump)]
    pub game: Account<'info, Game>,
}

pub fn delegate_game(ctx: Context<DelegateGameCtx>) -> Result<()> {
    ctx.accounts.delegate_game(
        &ctx.accounts.payer,
        &[GAME_SEED],
        DelegateConfig {
            validator: ctx.remaining_accounts.first().map(|a| a.key()),
            ..Default::default()
        },
    )?;
    msg!("Game delegated to ER");
    Ok(())
}

pub fn delegate_character(ctx: Context<DelegateCharacterCtx>, instance_id: u64) -> Result<()> {
    ctx.accounts.delegate_character(
        &ctx.accounts.payer,
        &[CHARACTER_SEED, &instance_id.to_le_bytes()],
        DelegateConfig {
            validator: ctx.remaining_accounts.first().map(|a| a.key()),
            ..Default::default()
        },
    )?;
    msg!("Character #{} delegated to ER", instance_id);
    Ok(())
}

/// Checks that every remaining account is a minted character so the game and
/// the characters that fought against it reach the base layer in one commit.
pub(crate) fn session_characters<'a, 'info>(
    accounts: &'a [AccountInfo<'info>],
) -> Result<Vec<&'a AccountInfo<'info>>> {
    accounts
        .iter()
        .map(|info| -> Result<&'a AccountInfo<'info>> {
            let character = read_character(info)?.ok_or(GameError::CharacterNotFound)?;
            msg!("Committing character #{} (hp: {})", character.instance_id, character.current_hp);
            Ok(info)
        })
        .collect()
}

/// Commit ER state back to base layer (keeps delegation active). Delegated
/// characters are passed as remaining accounts and committed with the game.
pub fn commit_game<'info>(ctx: Context<'_, '_, '_, 'info, CommitGame<'info>>) -> Result<()> {
    let game_info = ctx.accounts.game.to_account_info();
    let mut accounts = vec![&game_info];
    accounts.extend(session_characters(ctx.remaining_accounts)?);

    commit_accounts(
        &ctx.accounts.payer,
        accounts,
        &ctx.accounts.magic_context,
        &ctx.accounts.magic_program,
    )?;
    msg!(
        "Game committed to base layer (boss hp: {}/{}) with {} characters",
        ctx.accounts.game.boss.current_hp,
        ctx.accounts.game.boss.max_hp,
        ctx.remaining_accounts.len()
    );
    Ok(())
}

/// Commit and undelegate - returns the game and the listed characters to the
/// base layer.
pub fn end_session<'info>(ctx: Context<'_, '_, '_, 'info, CommitGame<'info>>) -> Result<()> {
    let game_info = ctx.accounts.game.to_account_info();
    let mut accounts = vec![&game_info];
    accounts.extend(session_characters(ctx.remaining_accounts)?);

    commit_and_undelegate_accounts(
        &ctx.accounts.payer,
        accounts,
        &ctx.accounts.magic_context,
        &ctx.accounts.magic_program,
    )?;
    msg!(
        "Session ended, game and {} characters undelegated",
        ctx.remaining_accounts.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::attack_boss::tests::{character_data, sample_character};

    #[test]
    fn session_accepts_minted_characters() {
        let (key, owner) = (Pubkey::new_from_array([1; 32]), crate::ID);
        let mut lamports = 1_000;
        let mut data = character_data(&sample_character(3));
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);

        let accepted = session_characters(std::slice::from_ref(&info)).unwrap();
        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0].key, &key);
    }

    #[test]
    fn session_rejects_foreign_accounts() {
        let (key, delegation_program) = (
            Pubkey::new_from_array([1; 32]),
            Pubkey::new_from_array([9; 32]),
        );
        let mut lamports = 1_000;
        let mut data = character_data(&sample_character(3));
        let info = AccountInfo::new(
            &key,
            false,
            true,
            &mut lamports,
            &mut data,
            &delegation_program,
            false,
            0,
        );

        let err = session_characters(std::slice::from_ref(&info)).unwrap_err();
        assert_eq!(err, GameError::CharacterNotFound.into());
    }
}
