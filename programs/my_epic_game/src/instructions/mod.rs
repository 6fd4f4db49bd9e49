#![allow(ambiguous_glob_reexports)]

pub mod attack_boss;
pub mod delegation;
pub mod initialize_game;
pub mod mint_character;
pub mod queries;
pub mod transfer_character;

pub use attack_boss::*;
pub use delegation::*;
pub use initialize_game::*;
pub use mint_character::*;
pub use queries::*;
pub use transfer_character::*;
