use anchor_lang::prelude::*;

#[error_code]
pub enum GameError {
    // --- configuration ---
    #[msg("Roster must contain at least one character")]
    EmptyRoster,
    #[msg("Roster exceeds the maximum number of templates")]
    RosterTooLarge,
    #[msg("Character names, images, hp and attack lists differ in length")]
    RosterLengthMismatch,
    #[msg("Name must be 1-32 bytes")]
    InvalidName,
    #[msg("Image URI must be 1-128 bytes")]
    InvalidImageUri,
    #[msg("Character hp and attack must be greater than 0")]
    InvalidTemplateStats,
    #[msg("Boss hp and attack must be greater than 0")]
    InvalidBossStats,
    #[msg("Mint cap must be greater than 0")]
    InvalidMintCap,
    #[msg("Per-owner character limit must be 1-64")]
    InvalidOwnerLimit,

    // --- lookup ---
    #[msg("Character template not found")]
    TemplateNotFound,
    #[msg("Character not found")]
    CharacterNotFound,

    // --- authorization ---
    #[msg("Signer does not own this character")]
    NotCharacterOwner,

    // --- combat ---
    #[msg("Character is dead")]
    CharacterDead,
    #[msg("Boss has already been defeated")]
    BossDefeated,

    // --- capacity ---
    #[msg("Mint cap reached")]
    MintCapReached,
    #[msg("Owner already holds the maximum number of characters")]
    OwnerLimitReached,

    // --- ownership ---
    #[msg("Cannot transfer a character to its current owner")]
    TransferToSelf,

    // --- math ---
    #[msg("Math overflow")]
    MathOverflow,
}
