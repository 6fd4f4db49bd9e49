use anchor_lang::prelude::*;

use crate::errors::GameError;
use crate::events::{AttackResolved, EventSink, GameEvent};
use crate::state::{Character, DamageOutcome, Game};

/// Resolves one attack exchange between `character` and the boss.
///
/// The character strikes first with its template's base attack. The boss
/// retaliates with its fixed attack damage only if it survives the strike,
/// so a killing blow is never answered. Every precondition is checked before
/// either party is touched; a rejected attack leaves both records unchanged.
///
/// `character` is `None` when the requested instance does not exist.
pub fn resolve_attack(
    game: &mut Game,
    character: Option<&mut Character>,
    caller: &Pubkey,
    log: &mut impl EventSink,
) -> Result<AttackResolved> {
    let character = character.ok_or(GameError::CharacterNotFound)?;
    require!(character.owner == *caller, GameError::NotCharacterOwner);
    require!(character.is_alive(), GameError::CharacterDead);
    require!(game.boss.is_alive(), GameError::BossDefeated);

    let attack = game.template(character.template_index)?.base_attack;
    let seq = game.reserve_seq()?;

    let strike = game.boss.apply_damage(attack);
    let retaliation = if strike.died {
        game.boss.defeated_by = Some(character.instance_id);
        DamageOutcome {
            dealt: 0,
            hp_after: character.current_hp,
            died: false,
        }
    } else {
        character.apply_damage(game.boss.attack_damage)
    };
    game.event_seq = seq;

    if strike.died {
        msg!(
            "BOSS DEFEATED: {} by character #{} ({})",
            game.boss.name,
            character.instance_id,
            character.owner
        );
    } else {
        msg!(
            "HIT: #{} -> {} for {} dmg (hp: {}/{}) | counter {} dmg (hp: {})",
            character.instance_id,
            game.boss.name,
            strike.dealt,
            strike.hp_after,
            game.boss.max_hp,
            retaliation.dealt,
            retaliation.hp_after
        );
    }
    if retaliation.died {
        msg!("KILL: {} -> #{}", game.boss.name, character.instance_id);
    }

    let event = AttackResolved {
        seq,
        instance_id: character.instance_id,
        attacker: character.owner,
        damage_to_boss: strike.dealt,
        boss_hp_after: strike.hp_after,
        damage_to_attacker: retaliation.dealt,
        attacker_hp_after: retaliation.hp_after,
        boss_defeated: strike.died,
        attacker_died: retaliation.died,
    };
    log.record(GameEvent::AttackResolved(event.clone()));
    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::game::tests::{deployed_game, empty_index, key};
    use crate::state::{Boss, OwnerIndex};

    struct Arena {
        game: Game,
        index: OwnerIndex,
        log: Vec<GameEvent>,
    }

    impl Arena {
        fn new(boss_hp: u64) -> Self {
            let mut game = deployed_game(10_000, 50);
            game.boss = Boss::new("Dolores Umbridge".into(), "https://boss".into(), boss_hp, 50)
                .unwrap();
            Self {
                game,
                index: empty_index(),
                log: Vec::new(),
            }
        }

        fn mint(&mut self, owner: Pubkey, template_index: u8) -> Character {
            self.game
                .mint_character(&mut self.index, owner, template_index, 0, &mut self.log)
                .unwrap()
        }

        fn attack(&mut self, character: &mut Character, caller: Pubkey) -> Result<AttackResolved> {
            resolve_attack(&mut self.game, Some(character), &caller, &mut self.log)
        }
    }

    #[test]
    fn example_exchange() {
        let mut arena = Arena::new(10_000);
        let mut a = arena.mint(key(1), 0);
        let _b = arena.mint(key(1), 1);
        let _c = arena.mint(key(1), 2);

        let out = arena.attack(&mut a, key(1)).unwrap();

        assert_eq!(arena.game.boss.current_hp, 9_850);
        assert_eq!(a.current_hp, 150);
        assert_eq!(out.damage_to_boss, 150);
        assert_eq!(out.damage_to_attacker, 50);
        assert!(!out.boss_defeated);
        assert!(!out.attacker_died);
        assert_eq!(arena.log.last(), Some(&GameEvent::AttackResolved(out)));
    }

    #[test]
    fn unknown_instance_is_not_found() {
        let mut arena = Arena::new(10_000);
        let err = resolve_attack(&mut arena.game, None, &key(1), &mut arena.log).unwrap_err();
        assert_eq!(err, GameError::CharacterNotFound.into());
    }

    #[test]
    fn non_owner_is_rejected_without_mutation() {
        let mut arena = Arena::new(10_000);
        let mut hero = arena.mint(key(1), 0);
        let (game_before, hero_before, events) = (arena.game.clone(), hero.clone(), arena.log.len());

        let err = arena.attack(&mut hero, key(2)).unwrap_err();

        assert_eq!(err, GameError::NotCharacterOwner.into());
        assert_eq!(arena.game, game_before);
        assert_eq!(hero, hero_before);
        assert_eq!(arena.log.len(), events);
    }

    #[test]
    fn dead_character_cannot_attack() {
        let mut arena = Arena::new(10_000);
        let mut hero = arena.mint(key(1), 0);
        for _ in 0..4 {
            arena.attack(&mut hero, key(1)).unwrap();
        }
        assert!(!hero.is_alive());
        match arena.log.last() {
            Some(GameEvent::AttackResolved(e)) => {
                assert!(e.attacker_died);
                assert_eq!(e.attacker_hp_after, 0);
            }
            other => panic!("unexpected event: {other:?}"),
        }

        let boss_hp = arena.game.boss.current_hp;
        let err = arena.attack(&mut hero, key(1)).unwrap_err();
        assert_eq!(err, GameError::CharacterDead.into());
        assert_eq!(arena.game.boss.current_hp, boss_hp);
    }

    #[test]
    fn owner_check_precedes_liveness_check() {
        let mut arena = Arena::new(10_000);
        let mut hero = arena.mint(key(1), 0);
        hero.current_hp = 0;
        let err = arena.attack(&mut hero, key(2)).unwrap_err();
        assert_eq!(err, GameError::NotCharacterOwner.into());
    }

    #[test]
    fn killing_blow_is_not_answered() {
        let mut arena = Arena::new(300);
        let mut hero = arena.mint(key(1), 1);

        arena.attack(&mut hero, key(1)).unwrap();
        assert_eq!(hero.current_hp, 200);
        assert_eq!(arena.game.boss.current_hp, 150);

        let out = arena.attack(&mut hero, key(1)).unwrap();
        assert!(out.boss_defeated);
        assert_eq!(out.boss_hp_after, 0);
        assert_eq!(out.damage_to_attacker, 0);
        assert_eq!(out.attacker_hp_after, 200);
        assert_eq!(hero.current_hp, 200);
        assert_eq!(arena.game.boss.defeated_by, Some(hero.instance_id));
    }

    #[test]
    fn overkill_reports_applied_damage() {
        let mut arena = Arena::new(100);
        let mut hero = arena.mint(key(1), 0);
        let out = arena.attack(&mut hero, key(1)).unwrap();
        assert_eq!(out.damage_to_boss, 100);
        assert_eq!(out.boss_hp_after, 0);
    }

    #[test]
    fn defeated_boss_rejects_every_attack() {
        let mut arena = Arena::new(150);
        let mut first = arena.mint(key(1), 0);
        let mut second = arena.mint(key(2), 2);
        arena.attack(&mut first, key(1)).unwrap();

        let game_before = arena.game.clone();
        let events = arena.log.len();
        for (hero, owner) in [(&mut first, key(1)), (&mut second, key(2))] {
            let before = hero.clone();
            let err = arena.attack(hero, owner).unwrap_err();
            assert_eq!(err, GameError::BossDefeated.into());
            assert_eq!(*hero, before);
        }
        assert_eq!(arena.game, game_before);
        assert_eq!(arena.log.len(), events);
    }

    #[test]
    fn hp_stays_in_bounds_over_a_full_fight() {
        let mut arena = Arena::new(10_000);
        let owners = [key(1), key(2), key(3)];
        let mut party: Vec<(Character, Pubkey)> = owners
            .iter()
            .enumerate()
            .map(|(i, owner)| (arena.mint(*owner, i as u8), *owner))
            .collect();

        let mut rounds = 0;
        while arena.game.boss.is_alive() && party.iter().any(|(c, _)| c.is_alive()) {
            for (hero, owner) in party.iter_mut() {
                let max_hp = arena.game.template(hero.template_index).unwrap().base_hp;
                if hero.is_alive() {
                    arena.attack(hero, *owner).unwrap();
                } else {
                    let err = arena.attack(hero, *owner).unwrap_err();
                    assert_eq!(err, GameError::CharacterDead.into());
                    assert_eq!(hero.current_hp, 0);
                }
                assert!(hero.current_hp <= max_hp);
                assert!(arena.game.boss.current_hp <= arena.game.boss.max_hp);
            }
            rounds += 1;
            assert!(rounds < 100);
        }

        // 200/250/200 hp against 50 dmg retaliation: 4 + 5 + 4 strikes of 150
        assert_eq!(arena.game.boss.current_hp, 10_000 - 13 * 150);
        assert!(party.iter().all(|(c, _)| !c.is_alive()));
    }

    #[test]
    fn event_sequence_is_gapless() {
        let mut arena = Arena::new(10_000);
        let mut hero = arena.mint(key(1), 0);
        arena.attack(&mut hero, key(1)).unwrap();
        let err = arena.attack(&mut hero, key(2)).unwrap_err();
        assert_eq!(err, GameError::NotCharacterOwner.into());
        arena.attack(&mut hero, key(1)).unwrap();

        let seqs: Vec<u64> = arena.log.iter().map(GameEvent::seq).collect();
        let first = seqs[0];
        let expected: Vec<u64> = (first..first + seqs.len() as u64).collect();
        assert_eq!(seqs, expected);
        assert_eq!(*seqs.last().unwrap(), arena.game.event_seq);
    }
}
