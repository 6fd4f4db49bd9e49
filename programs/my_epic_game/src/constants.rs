use anchor_lang::prelude::*;

// ===== PDA SEEDS =====
#[constant]
pub const GAME_SEED: &[u8] = b"game";
#[constant]
pub const CHARACTER_SEED: &[u8] = b"character";
#[constant]
pub const OWNER_SEED: &[u8] = b"owner";

// ===== ROSTER BOUNDS =====
pub const MAX_TEMPLATES: usize = 8;
pub const MAX_NAME_LEN: usize = 32;
pub const MAX_IMAGE_URI_LEN: usize = 128;

// ===== REGISTRY =====
pub const FIRST_INSTANCE_ID: u64 = 1;
/// Upper bound for `max_characters_per_owner`; sizes the OwnerIndex account.
pub const MAX_OWNED_CHARACTERS: usize = 64;

pub const ANCHOR_DISCRIMINATOR: usize = 8;
