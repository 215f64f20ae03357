//! The orchestrating state machine.
//!
//! `GameEngine` owns all piles and cards, advances through the lifecycle
//! one step per host tick, applies validated moves, resolves tricks, and
//! redistributes cards between hands. The host drives it with
//! [`EngineEvent`]s and reads it back through query methods or a
//! [`Snapshot`](super::view::Snapshot).
//!
//! ## Lifecycle
//!
//! ```text
//! New -> Play -> FoundationsReady -> Pause -> NewHand -+-> Play
//!                                                      `-> Win
//! ```
//!
//! `Pause` is a held state: it advances only on `SignalEndRound`. `Win`
//! is terminal. At most one state-machine step and one move application
//! happen per `update` call.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::cards::{standard_deck, Card, Suit};
use crate::core::rng::clock_seed;
use crate::core::{GameRng, PlayerId, PlayerMap};
use crate::table::{PileId, Table};

use super::event::{EngineEvent, MoveProposal};
use super::moves::{self, MoveIntent};
use super::trick::{determine_winning_turn, TrickContext, TrickRecord};
use super::view::Snapshot;

/// Lifecycle phase of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Piles reset and shuffled; the next tick deals.
    New,
    /// Players choose and commit cards.
    Play,
    /// Both foundations occupied; the next tick resolves the trick.
    FoundationsReady,
    /// Trick result on display, held until the host signals end of round.
    Pause,
    /// Winnings drained and hands refilled on the next tick.
    NewHand,
    /// Terminal; the overall outcome is available.
    Win,
}

/// Final result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Winner(PlayerId),
    Tie,
}

impl GameOutcome {
    /// Classify from player 1's won-pile total.
    ///
    /// The deck carries exactly 120 points, so strictly more than 60 wins
    /// and exactly 60 is the only possible tie.
    #[must_use]
    pub fn from_player1_points(points: u32) -> Self {
        match points.cmp(&60) {
            Ordering::Greater => GameOutcome::Winner(PlayerId::P1),
            Ordering::Equal => GameOutcome::Tie,
            Ordering::Less => GameOutcome::Winner(PlayerId::P0),
        }
    }
}

/// The rules engine: every pile, every card, and the lifecycle state.
#[derive(Clone, Debug)]
pub struct GameEngine {
    status: GameStatus,
    table: Table,
    rng: GameRng,
    briscola_suit: Option<Suit>,
    first_mover: PlayerId,
    mover_advantage: PlayerId,
    win_turn: Option<PlayerId>,
    pending_move: Option<MoveProposal>,
    reveal_requests: PlayerMap<bool>,
    end_round: bool,
    tricks: Vector<TrickRecord>,
}

impl GameEngine {
    /// Create an engine with a fresh shuffled game ready to deal.
    ///
    /// `None` seeds the shuffle from the high-resolution clock; pass a
    /// seed to reproduce a deal exactly.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let mut engine = Self {
            status: GameStatus::New,
            table: Table::new(),
            rng: GameRng::new(0),
            briscola_suit: None,
            first_mover: PlayerId::P0,
            mover_advantage: PlayerId::P0,
            win_turn: None,
            pending_move: None,
            reveal_requests: PlayerMap::with_value(false),
            end_round: false,
            tricks: Vector::new(),
        };
        engine.reset(seed);
        engine
    }

    // === Host boundary ===

    /// Accept one discrete input event.
    pub fn handle_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::ProposeMove(proposal) => {
                if self.status == GameStatus::Play {
                    self.pending_move = Some(proposal);
                }
            }
            EngineEvent::ToggleHandFaceUp(player) => {
                self.reveal_requests[player] = true;
            }
            EngineEvent::RequestNewGame { seed } => self.reset(seed),
            EngineEvent::SignalEndRound => self.end_round = true,
        }
    }

    /// Run one state-machine step. Called once per host frame.
    pub fn update(&mut self) {
        match self.status {
            GameStatus::New => self.step_new(),
            GameStatus::Play => self.step_play(),
            GameStatus::FoundationsReady => self.step_foundations_ready(),
            GameStatus::Pause => self.step_pause(),
            GameStatus::NewHand => self.step_new_hand(),
            GameStatus::Win => {}
        }
    }

    // === Queries ===

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The trump suit, fixed at deal time.
    #[must_use]
    pub fn briscola_suit(&self) -> Option<Suit> {
        self.briscola_suit
    }

    /// Winner of the current trick, once resolved.
    #[must_use]
    pub fn win_turn(&self) -> Option<PlayerId> {
        self.win_turn
    }

    /// Who leads the current trick.
    #[must_use]
    pub fn first_mover(&self) -> PlayerId {
        self.first_mover
    }

    /// Holder of the different-suit tie-break authority.
    #[must_use]
    pub fn mover_advantage(&self) -> PlayerId {
        self.mover_advantage
    }

    /// The seed this game was dealt from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// A player's won-pile point total.
    #[must_use]
    pub fn points(&self, player: PlayerId) -> u32 {
        self.table[PileId::won_pile(player)]
            .cards()
            .iter()
            .map(Card::points)
            .sum()
    }

    /// The overall result, available once the game reaches `Win`.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.status == GameStatus::Win {
            Some(GameOutcome::from_player1_points(self.points(PlayerId::P1)))
        } else {
            None
        }
    }

    /// Resolved tricks, oldest first.
    #[must_use]
    pub fn tricks(&self) -> &Vector<TrickRecord> {
        &self.tricks
    }

    /// Capture a serializable snapshot for the renderer.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }

    /// Resolve a hand slot to the proposal a double-click means: play its
    /// face-up card onto the owner's empty foundation.
    #[must_use]
    pub fn quick_play(&self, slot: PileId) -> Option<MoveProposal> {
        let player = slot.hand_owner()?;
        let card = self.table[slot].top_card()?;
        if !card.is_face_up() {
            return None;
        }
        let foundation = PileId::foundation(player);
        if !self.table[foundation].is_empty() {
            return None;
        }
        Some(MoveProposal::single(slot, foundation))
    }

    // === State steps ===

    /// Reset everything and rebuild the shuffled stock.
    ///
    /// `first_mover` survives the reset: the last trick winner of the
    /// previous game leads the first trick of the next one.
    fn reset(&mut self, seed: Option<u64>) {
        for id in PileId::ALL {
            self.table[id].clear();
        }

        self.rng.reseed(seed.unwrap_or_else(clock_seed));
        self.status = GameStatus::New;
        self.briscola_suit = None;
        self.mover_advantage = PlayerId::P0;
        self.win_turn = None;
        self.pending_move = None;
        self.reveal_requests = PlayerMap::with_value(false);
        self.end_round = false;
        self.tricks = Vector::new();

        self.table[PileId::Stock].add(standard_deck());
        self.table[PileId::Stock].shuffle(&mut self.rng);
        self.table.debug_audit();
    }

    /// Deal: one face-down card to each of the six hand slots, then one
    /// face-up card to the briscola display, fixing the trump suit.
    fn step_new(&mut self) {
        for player in PlayerId::ALL {
            for slot in PileId::hand_slots(player) {
                self.table.transfer(PileId::Stock, slot, 1);
                if let Some(card) = self.table[slot].top_card_mut() {
                    card.set_face_down();
                }
            }
        }

        self.table.transfer(PileId::Stock, PileId::BriscolaDisplay, 1);
        if let Some(card) = self.table[PileId::BriscolaDisplay].top_card_mut() {
            card.set_face_up();
        }
        self.briscola_suit = self.table[PileId::BriscolaDisplay].top_card().map(Card::suit);

        self.status = GameStatus::Play;
    }

    fn step_play(&mut self) {
        self.end_round = false;

        // A player who has committed to the trick no longer sees their
        // remaining hand.
        for player in PlayerId::ALL {
            if !self.table[PileId::foundation(player)].is_empty() {
                self.set_hand_face(player, false);
            }
        }

        // Reveal requests, honored only when the player may act: they
        // lead, or their opponent has already committed.
        for player in PlayerId::ALL {
            if std::mem::take(&mut self.reveal_requests[player]) && self.may_reveal(player) {
                self.set_hand_face(player, true);
            }
        }

        // Advantage holder for different-suit resolution. Recomputed
        // every tick, so at resolution time it names the trick leader.
        self.mover_advantage = if self.table[PileId::Foundation0].is_empty()
            && !self.table[PileId::Foundation1].is_empty()
        {
            PlayerId::P1
        } else {
            PlayerId::P0
        };

        // At most one move application per tick; illegal proposals are
        // dropped without effect.
        if let Some(proposal) = self.pending_move.take() {
            if let Some(intent) = moves::classify(&self.table, proposal) {
                self.apply_intent(intent, proposal.amount);
            }
        }

        if !self.table[PileId::Foundation0].is_empty()
            && !self.table[PileId::Foundation1].is_empty()
        {
            self.status = GameStatus::FoundationsReady;
        }
    }

    fn step_foundations_ready(&mut self) {
        self.win_turn = None;

        let Some(briscola_suit) = self.briscola_suit else {
            return;
        };

        let ctx = TrickContext {
            foundation0: self.table[PileId::Foundation0].top_card().cloned(),
            foundation1: self.table[PileId::Foundation1].top_card().cloned(),
            briscola_suit,
            mover_advantage: self.mover_advantage,
        };
        self.win_turn = determine_winning_turn(&ctx);

        if let (Some(winner), Some(card0), Some(card1)) =
            (self.win_turn, ctx.foundation0, ctx.foundation1)
        {
            self.tricks.push_back(TrickRecord {
                card0,
                card1,
                winner,
            });
        }

        self.status = GameStatus::Pause;
    }

    fn step_pause(&mut self) {
        // Hands stay hidden while the trick result is on display, so
        // nobody peeks before the next deal.
        for player in PlayerId::ALL {
            self.set_hand_face(player, false);
        }

        if self.end_round {
            self.end_round = false;
            self.status = GameStatus::NewHand;
        }
    }

    /// Drain the trick into the winner's pile and refill the hands.
    fn step_new_hand(&mut self) {
        let winner = match self.win_turn {
            Some(PlayerId::P1) => PlayerId::P1,
            _ => PlayerId::P0,
        };
        self.first_mover = winner;

        let won = PileId::won_pile(winner);
        let foundation0 = self.table[PileId::Foundation0].len();
        self.table.transfer(PileId::Foundation0, won, foundation0);
        let foundation1 = self.table[PileId::Foundation1].len();
        self.table.transfer(PileId::Foundation1, won, foundation1);
        if let Some(card) = self.table[won].top_card_mut() {
            card.set_face_down();
        }

        // With more than one stock card, both players refill from the
        // stock. With exactly one, the trick winner takes it and the
        // loser takes the trump-reveal card, emptying both sources.
        let stock_len = self.table[PileId::Stock].len();
        if stock_len > 1 {
            self.refill_from(PileId::Stock, PileId::hand_slots(PlayerId::P0));
            self.refill_from(PileId::Stock, PileId::hand_slots(PlayerId::P1));
        } else if stock_len == 1 && !self.table[PileId::BriscolaDisplay].is_empty() {
            self.refill_from(PileId::Stock, PileId::hand_slots(winner));
            self.refill_from(
                PileId::BriscolaDisplay,
                PileId::hand_slots(winner.opponent()),
            );
        }

        let hands_empty = PlayerId::ALL.iter().all(|&player| {
            PileId::hand_slots(player)
                .iter()
                .all(|&slot| self.table[slot].is_empty())
        });
        self.status = if hands_empty {
            GameStatus::Win
        } else {
            GameStatus::Play
        };
    }

    // === Helpers ===

    fn apply_intent(&mut self, intent: MoveIntent, amount: usize) {
        match intent {
            MoveIntent::PlayToFoundation { player, slot } => {
                self.table.transfer(slot, PileId::foundation(player), amount);
            }
            MoveIntent::DealFromStock { slot } => {
                self.table.transfer(PileId::Stock, slot, amount);
            }
            MoveIntent::DealFromBriscola { slot } => {
                self.table.transfer(PileId::BriscolaDisplay, slot, amount);
            }
        }
    }

    fn may_reveal(&self, player: PlayerId) -> bool {
        self.first_mover == player
            || !self.table[PileId::foundation(player.opponent())].is_empty()
    }

    fn set_hand_face(&mut self, player: PlayerId, face_up: bool) {
        for slot in PileId::hand_slots(player) {
            if let Some(card) = self.table[slot].top_card_mut() {
                if face_up {
                    card.set_face_up();
                } else {
                    card.set_face_down();
                }
            }
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::DECK_SIZE;

    fn dealt_engine(seed: u64) -> GameEngine {
        let mut engine = GameEngine::new(Some(seed));
        engine.update();
        engine
    }

    #[test]
    fn test_new_game_shape() {
        let engine = GameEngine::new(Some(42));

        assert_eq!(engine.status(), GameStatus::New);
        assert_eq!(engine.table()[PileId::Stock].len(), DECK_SIZE);
        assert_eq!(engine.seed(), 42);
        assert!(engine.briscola_suit().is_none());
    }

    #[test]
    fn test_deal_shape() {
        let engine = dealt_engine(42);

        assert_eq!(engine.status(), GameStatus::Play);
        assert_eq!(engine.table()[PileId::Stock].len(), 33);
        assert_eq!(engine.table()[PileId::BriscolaDisplay].len(), 1);

        for player in PlayerId::ALL {
            for slot in PileId::hand_slots(player) {
                let pile = &engine.table()[slot];
                assert_eq!(pile.len(), 1);
                assert!(!pile.top_card().unwrap().is_face_up());
            }
        }

        let trump_card = engine.table()[PileId::BriscolaDisplay].top_card().unwrap();
        assert!(trump_card.is_face_up());
        assert_eq!(engine.briscola_suit(), Some(trump_card.suit()));

        assert!(engine.table().is_consistent());
    }

    #[test]
    fn test_deal_is_deterministic() {
        let engine1 = dealt_engine(12345);
        let engine2 = dealt_engine(12345);

        for id in PileId::ALL {
            assert_eq!(engine1.table()[id].cards(), engine2.table()[id].cards());
        }
        assert_eq!(engine1.briscola_suit(), engine2.briscola_suit());
    }

    #[test]
    fn test_reveal_gated_on_lead() {
        let mut engine = dealt_engine(42);

        // Player 0 leads the first trick of a fresh process.
        engine.handle_event(EngineEvent::ToggleHandFaceUp(PlayerId::P1));
        engine.update();
        for slot in PileId::hand_slots(PlayerId::P1) {
            assert!(!engine.table()[slot].top_card().unwrap().is_face_up());
        }

        engine.handle_event(EngineEvent::ToggleHandFaceUp(PlayerId::P0));
        engine.update();
        for slot in PileId::hand_slots(PlayerId::P0) {
            assert!(engine.table()[slot].top_card().unwrap().is_face_up());
        }
    }

    #[test]
    fn test_illegal_proposal_is_dropped() {
        let mut engine = dealt_engine(42);
        let before = engine.snapshot();

        // Hand is face down, so the play is illegal.
        engine.handle_event(EngineEvent::ProposeMove(MoveProposal::single(
            PileId::Hand0Slot1,
            PileId::Foundation0,
        )));
        engine.update();

        assert_eq!(engine.snapshot().piles, before.piles);
        assert_eq!(engine.status(), GameStatus::Play);
    }

    #[test]
    fn test_play_commits_card_and_hides_hand() {
        let mut engine = dealt_engine(42);

        engine.handle_event(EngineEvent::ToggleHandFaceUp(PlayerId::P0));
        engine.update();
        engine.handle_event(EngineEvent::ProposeMove(MoveProposal::single(
            PileId::Hand0Slot2,
            PileId::Foundation0,
        )));
        engine.update();

        assert_eq!(engine.table()[PileId::Foundation0].len(), 1);
        assert!(engine.table()[PileId::Hand0Slot2].is_empty());

        // Next tick hides player 0's remaining cards.
        engine.update();
        for slot in [PileId::Hand0Slot1, PileId::Hand0Slot3] {
            assert!(!engine.table()[slot].top_card().unwrap().is_face_up());
        }
    }

    #[test]
    fn test_proposals_ignored_outside_play() {
        let mut engine = GameEngine::new(Some(42));

        engine.handle_event(EngineEvent::ProposeMove(MoveProposal::single(
            PileId::Stock,
            PileId::Hand0Slot1,
        )));
        assert_eq!(engine.pending_move, None);
    }

    #[test]
    fn test_outcome_thresholds() {
        assert_eq!(
            GameOutcome::from_player1_points(61),
            GameOutcome::Winner(PlayerId::P1)
        );
        assert_eq!(GameOutcome::from_player1_points(60), GameOutcome::Tie);
        assert_eq!(
            GameOutcome::from_player1_points(59),
            GameOutcome::Winner(PlayerId::P0)
        );
        assert_eq!(
            GameOutcome::from_player1_points(0),
            GameOutcome::Winner(PlayerId::P0)
        );
        assert_eq!(
            GameOutcome::from_player1_points(120),
            GameOutcome::Winner(PlayerId::P1)
        );
    }

    #[test]
    fn test_outcome_only_at_win() {
        let engine = dealt_engine(42);
        assert_eq!(engine.outcome(), None);
    }

    #[test]
    fn test_quick_play() {
        let mut engine = dealt_engine(42);

        // Face down: no quick play.
        assert_eq!(engine.quick_play(PileId::Hand0Slot1), None);

        engine.handle_event(EngineEvent::ToggleHandFaceUp(PlayerId::P0));
        engine.update();

        assert_eq!(
            engine.quick_play(PileId::Hand0Slot1),
            Some(MoveProposal::single(PileId::Hand0Slot1, PileId::Foundation0))
        );

        // Non-hand piles never quick-play.
        assert_eq!(engine.quick_play(PileId::Stock), None);
    }

    #[test]
    fn test_new_game_resets_but_keeps_first_mover() {
        let mut engine = dealt_engine(42);
        engine.handle_event(EngineEvent::RequestNewGame { seed: Some(7) });

        assert_eq!(engine.status(), GameStatus::New);
        assert_eq!(engine.seed(), 7);
        assert_eq!(engine.table()[PileId::Stock].len(), DECK_SIZE);
        assert_eq!(engine.first_mover(), PlayerId::P0);
        assert!(engine.tricks().is_empty());
    }
}
