use anchor_lang::prelude::*;

// ─── Event Records ───────────────────────────────────────────────────────────
// Every record carries `seq` from `Game::event_seq`: gapless, in commit order.

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameInitialized {
    pub seq: u64,
    pub authority: Pubkey,
    pub roster_size: u8,
    pub boss_hp: u64,
    pub boss_attack: u64,
    pub mint_cap: u64,
    pub max_characters_per_owner: u16,
}

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterMinted {
    pub seq: u64,
    pub instance_id: u64,
    pub template_index: u8,
    pub owner: Pubkey,
    pub hp: u64,
    pub total_minted: u64,
}

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackResolved {
    pub seq: u64,
    pub instance_id: u64,
    pub attacker: Pubkey,
    pub damage_to_boss: u64,
    pub boss_hp_after: u64,
    pub damage_to_attacker: u64,
    pub attacker_hp_after: u64,
    pub boss_defeated: bool,
    pub attacker_died: bool,
}

#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterTransferred {
    pub seq: u64,
    pub instance_id: u64,
    pub from: Pubkey,
    pub to: Pubkey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Initialized(GameInitialized),
    Minted(CharacterMinted),
    AttackResolved(AttackResolved),
    Transferred(CharacterTransferred),
}

impl GameEvent {
    pub fn seq(&self) -> u64 {
        match self {
            GameEvent::Initialized(e) => e.seq,
            GameEvent::Minted(e) => e.seq,
            GameEvent::AttackResolved(e) => e.seq,
            GameEvent::Transferred(e) => e.seq,
        }
    }
}

// ─── Sinks ───────────────────────────────────────────────────────────────────

/// Append-only destination for game events.
pub trait EventSink {
    fn record(&mut self, event: GameEvent);
}

/// Writes events to the transaction log.
pub struct ProgramLog;

impl EventSink for ProgramLog {
    fn record(&mut self, event: GameEvent) {
        match event {
            GameEvent::Initialized(e) => emit!(e),
            GameEvent::Minted(e) => emit!(e),
            GameEvent::AttackResolved(e) => emit!(e),
            GameEvent::Transferred(e) => emit!(e),
        }
    }
}

impl EventSink for Vec<GameEvent> {
    fn record(&mut self, event: GameEvent) {
        self.push(event);
    }
}
