use anchor_lang::prelude::*;

use super::roster::{validate_image_uri, validate_name};
use super::DamageOutcome;
use crate::constants::*;
use crate::errors::GameError;

/// The single adversary shared by every battle of a deployment.
/// Lives inside the `Game` account; once `current_hp` reaches 0 it stays there.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct Boss {
    #[max_len(MAX_NAME_LEN)]
    pub name: String,
    #[max_len(MAX_IMAGE_URI_LEN)]
    pub image_uri: String,
    pub max_hp: u64,
    pub current_hp: u64,
    pub attack_damage: u64,
    /// Instance that landed the final blow.
    pub defeated_by: Option<u64>,
}

impl Boss {
    pub fn new(name: String, image_uri: String, hp: u64, attack_damage: u64) -> Result<Self> {
        validate_name(&name)?;
        validate_image_uri(&image_uri)?;
        require!(hp > 0 && attack_damage > 0, GameError::InvalidBossStats);

        Ok(Self {
            name,
            image_uri,
            max_hp: hp,
            current_hp: hp,
            attack_damage,
            defeated_by: None,
        })
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    pub fn apply_damage(&mut self, amount: u64) -> DamageOutcome {
        DamageOutcome::apply(&mut self.current_hp, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn umbridge() -> Boss {
        Boss::new("Dolores Umbridge".into(), "https://boss".into(), 10_000, 50).unwrap()
    }

    #[test]
    fn starts_at_full_health() {
        let boss = umbridge();
        assert_eq!(boss.current_hp, boss.max_hp);
        assert!(boss.is_alive());
        assert_eq!(boss.defeated_by, None);
    }

    #[test]
    fn rejects_zero_stats() {
        let err = Boss::new("B".into(), "https://b".into(), 0, 50).unwrap_err();
        assert_eq!(err, GameError::InvalidBossStats.into());
        let err = Boss::new("B".into(), "https://b".into(), 100, 0).unwrap_err();
        assert_eq!(err, GameError::InvalidBossStats.into());
    }

    #[test]
    fn damage_after_defeat_is_noop() {
        let mut boss = umbridge();
        let kill = boss.apply_damage(20_000);
        assert!(kill.died);
        assert_eq!(kill.dealt, 10_000);
        assert!(!boss.is_alive());

        let again = boss.apply_damage(150);
        assert_eq!(again, DamageOutcome { dealt: 0, hp_after: 0, died: false });
        assert_eq!(boss.current_hp, 0);
    }
}
