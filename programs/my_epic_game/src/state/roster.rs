use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::GameError;

/// Immutable blueprint a character is minted from.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct CharacterTemplate {
    pub template_index: u8,
    #[max_len(MAX_NAME_LEN)]
    pub name: String,
    #[max_len(MAX_IMAGE_URI_LEN)]
    pub image_uri: String,
    pub base_hp: u64,
    pub base_attack: u64,
}

pub(crate) fn validate_name(name: &str) -> Result<()> {
    require!(
        !name.is_empty() && name.len() <= MAX_NAME_LEN,
        GameError::InvalidName
    );
    Ok(())
}

pub(crate) fn validate_image_uri(uri: &str) -> Result<()> {
    require!(
        !uri.is_empty() && uri.len() <= MAX_IMAGE_URI_LEN,
        GameError::InvalidImageUri
    );
    Ok(())
}

/// Zips the positional deployment lists into validated templates.
pub fn build_roster(
    names: Vec<String>,
    image_uris: Vec<String>,
    hp: Vec<u64>,
    attack: Vec<u64>,
) -> Result<Vec<CharacterTemplate>> {
    require!(!names.is_empty(), GameError::EmptyRoster);
    require!(names.len() <= MAX_TEMPLATES, GameError::RosterTooLarge);
    require!(
        image_uris.len() == names.len() && hp.len() == names.len() && attack.len() == names.len(),
        GameError::RosterLengthMismatch
    );

    names
        .into_iter()
        .zip(image_uris)
        .zip(hp.into_iter().zip(attack))
        .enumerate()
        .map(|(i, ((name, image_uri), (base_hp, base_attack)))| -> Result<CharacterTemplate> {
            validate_name(&name)?;
            validate_image_uri(&image_uri)?;
            require!(base_hp > 0 && base_attack > 0, GameError::InvalidTemplateStats);
            Ok(CharacterTemplate {
                template_index: i as u8,
                name,
                image_uri,
                base_hp,
                base_attack,
            })
        })
        .collect()
}
