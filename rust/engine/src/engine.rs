use std::cmp::Ordering;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::deck::Deck;
use crate::errors::GameError;
use crate::events::{TableEvent, Transition};
use crate::game::{GamePhase, GameRound, Outcome, RoundSnapshot, Winner};
use crate::hand::{assess_strength, evaluate, HandResult};
use crate::history::{HandRecord, ShowdownInfo, Street};
use crate::player::{Participant, PlayerAction, Seat, MAX_STACK, STARTING_STACK};
use crate::rules::{validate_action, RoundRules, ValidatedAction};

const DEFAULT_SEED: u64 = 0xA1A2_A3A4;

/// What the scripted side gets to see when it is asked for a decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentView {
    pub phase: GamePhase,
    /// Strength of the opponent's hole cards plus the board so far.
    pub hand: HandResult,
    pub to_call: u32,
    pub stack: u32,
}

/// The betting engine: sole owner of the chip stacks and the current [`GameRound`].
///
/// Play is a strict alternation. [`Engine::apply_player_action`] commits the
/// human's move and leaves an opponent turn pending; the caller then waits as long
/// as it likes and hands the opponent's decision to [`Engine::advance_opponent_turn`].
/// Every rejected call returns an error and leaves the state exactly as it was.
///
/// # Examples
///
/// ```
/// use headsup_engine::engine::Engine;
/// use headsup_engine::game::GamePhase;
/// use headsup_engine::player::PlayerAction;
///
/// let mut engine = Engine::new(Some(12345));
/// let started = engine.start_hand().unwrap();
/// assert_eq!(started.snapshot.pot, 30);
///
/// let after_call = engine.apply_player_action(PlayerAction::Call).unwrap();
/// assert!(after_call.snapshot.awaiting_opponent);
///
/// let after_check = engine.advance_opponent_turn(PlayerAction::Check).unwrap();
/// assert_eq!(after_check.snapshot.phase, GamePhase::Flop);
/// ```
#[derive(Debug)]
pub struct Engine {
    rng: ChaCha20Rng,
    seed: u64,
    rules: RoundRules,
    player: Participant,
    opponent: Participant,
    round: GameRound,
    hands_started: u32,
    awaiting_opponent: bool,
    history: Option<HandRecord>,
}

impl Engine {
    /// Default table: 1000 chips each, blinds 10/20, player holds the first button.
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_rules(seed, STARTING_STACK, STARTING_STACK, RoundRules::default())
    }

    /// Table with explicit stacks and rules. Stacks above [`MAX_STACK`] are clamped to it.
    pub fn with_rules(
        seed: Option<u64>,
        player_chips: u32,
        opponent_chips: u32,
        rules: RoundRules,
    ) -> Self {
        let seed = seed.unwrap_or(DEFAULT_SEED);
        if player_chips > MAX_STACK || opponent_chips > MAX_STACK {
            warn!(player_chips, opponent_chips, max = MAX_STACK, "starting stack clamped");
        }
        let player_chips = player_chips.min(MAX_STACK);
        let opponent_chips = opponent_chips.min(MAX_STACK);
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            seed,
            rules,
            player: Participant::new(player_chips),
            opponent: Participant::new(opponent_chips),
            round: GameRound::waiting(Seat::Player),
            hands_started: 0,
            awaiting_opponent: false,
            history: None,
        }
    }

    /// Chooses who deals the first hand; later hands alternate from there.
    pub fn with_first_dealer(mut self, dealer: Seat) -> Self {
        self.round.dealer = dealer;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn rules(&self) -> &RoundRules {
        &self.rules
    }
    pub fn round(&self) -> &GameRound {
        &self.round
    }
    pub fn hands_started(&self) -> u32 {
        self.hands_started
    }
    pub fn awaiting_opponent(&self) -> bool {
        self.awaiting_opponent
    }
    pub fn history(&self) -> Option<&HandRecord> {
        self.history.as_ref()
    }

    pub fn participant(&self, seat: Seat) -> &Participant {
        match seat {
            Seat::Player => &self.player,
            Seat::Opponent => &self.opponent,
        }
    }

    fn participant_mut(&mut self, seat: Seat) -> &mut Participant {
        match seat {
            Seat::Player => &mut self.player,
            Seat::Opponent => &mut self.opponent,
        }
    }

    /// Both stacks plus the pot. Constant across a hand except for an odd split chip.
    pub fn total_chips(&self) -> u64 {
        u64::from(self.player.chips()) + u64::from(self.opponent.chips()) + u64::from(self.round.pot)
    }

    /// Whether both seats could post their blinds for the next hand.
    pub fn can_start_hand(&self) -> bool {
        let dealer = self.next_dealer();
        self.participant(dealer).chips() >= self.rules.small_blind
            && self.participant(dealer.other()).chips() >= self.rules.big_blind
    }

    fn next_dealer(&self) -> Seat {
        if self.hands_started == 0 {
            self.round.dealer
        } else {
            self.round.dealer.other()
        }
    }

    /// Shuffles a fresh deck, deals two hole cards to each seat and posts the blinds.
    ///
    /// The dealer posts the small blind and the other seat the big blind. From the
    /// second hand on the dealer button moves to the other seat first.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidAction`] while a hand is still being played
    /// - [`GameError::InsufficientChips`] if either seat cannot post its blind;
    ///   the button does not move in that case
    pub fn start_hand(&mut self) -> Result<Transition, GameError> {
        if self.round.phase.is_betting() || self.round.phase == GamePhase::Showdown {
            return Err(GameError::invalid("hand already in progress"));
        }
        let dealer = self.next_dealer();
        let big_blind_seat = dealer.other();
        let RoundRules {
            small_blind,
            big_blind,
            ..
        } = self.rules;
        ensure_covers(self.participant(dealer), small_blind)?;
        ensure_covers(self.participant(big_blind_seat), big_blind)?;

        let mut deck = Deck::new().shuffled(&mut self.rng);
        let player_hole = deck.deal(2)?;
        let opponent_hole = deck.deal(2)?;

        self.player.reset_street();
        self.opponent.reset_street();
        self.participant_mut(dealer).bet(small_blind)?;
        self.participant_mut(big_blind_seat).bet(big_blind)?;

        self.round = GameRound {
            phase: GamePhase::Preflop,
            deck,
            player_hole,
            opponent_hole,
            community: Vec::with_capacity(5),
            pot: small_blind + big_blind,
            current_bet: big_blind,
            dealer,
            outcome: None,
        };
        self.hands_started += 1;
        self.awaiting_opponent = false;
        self.history = Some(HandRecord::new(self.hands_started, self.seed, dealer));
        debug!(hand = self.hands_started, dealer = %dealer, "hand started");

        Ok(self.transition(vec![TableEvent::HandStarted { dealer }]))
    }

    /// Applies the human's action. After anything but a fold the opponent is on turn.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidAction`] outside a betting street, while the opponent's
    ///   turn is pending, or when checking into a bet
    /// - [`GameError::InsufficientChips`] when a call or raise exceeds the stack
    pub fn apply_player_action(&mut self, action: PlayerAction) -> Result<Transition, GameError> {
        let street = self.betting_street()?;
        if self.awaiting_opponent {
            return Err(GameError::invalid("waiting for the opponent to act"));
        }
        let to_call = self.round.current_bet.saturating_sub(self.player.street_bet());
        let validated = validate_action(self.player.chips(), to_call, action.clone())
            .inspect_err(|e| debug!(error = %e, ?action, "player action rejected"))?;

        let mut events = Vec::new();
        match validated {
            ValidatedAction::Fold => self.finish_by_fold(Seat::Player, &mut events),
            ValidatedAction::Check => {
                events.push(TableEvent::Checked { seat: Seat::Player });
                self.awaiting_opponent = true;
            }
            ValidatedAction::Call(amount) => {
                self.commit(Seat::Player, amount)?;
                events.push(TableEvent::Called {
                    seat: Seat::Player,
                    amount,
                });
                self.awaiting_opponent = true;
            }
            ValidatedAction::Raise { total, increment } => {
                self.commit(Seat::Player, total)?;
                self.round.current_bet += increment;
                events.push(TableEvent::Raised {
                    seat: Seat::Player,
                    amount: total,
                });
                self.awaiting_opponent = true;
            }
        }
        self.record(Seat::Player, street, action);
        Ok(self.transition(events))
    }

    /// Applies the opponent's decision for the pending turn.
    ///
    /// A call or check that leaves both street bets level closes the street and
    /// deals the next one (or resolves the showdown after the river). Under the
    /// default [`RoundRules`] a street only closes once the matched bets are non-zero.
    ///
    /// # Errors
    ///
    /// Same rejections as [`Engine::apply_player_action`], plus
    /// [`GameError::InvalidAction`] when no opponent turn is pending.
    pub fn advance_opponent_turn(&mut self, action: PlayerAction) -> Result<Transition, GameError> {
        let street = self.betting_street()?;
        if !self.awaiting_opponent {
            return Err(GameError::invalid("no opponent turn pending"));
        }
        let to_call = self
            .round
            .current_bet
            .saturating_sub(self.opponent.street_bet());
        let validated = validate_action(self.opponent.chips(), to_call, action.clone())
            .inspect_err(|e| debug!(error = %e, ?action, "opponent action rejected"))?;

        let mut events = Vec::new();
        self.awaiting_opponent = false;
        self.record(Seat::Opponent, street, action);
        match validated {
            ValidatedAction::Fold => self.finish_by_fold(Seat::Opponent, &mut events),
            ValidatedAction::Raise { total, increment } => {
                self.commit(Seat::Opponent, total)?;
                self.round.current_bet += increment;
                events.push(TableEvent::Raised {
                    seat: Seat::Opponent,
                    amount: total,
                });
            }
            ValidatedAction::Check | ValidatedAction::Call(0) => {
                events.push(TableEvent::Checked {
                    seat: Seat::Opponent,
                });
                self.close_street_if_matched(&mut events)?;
            }
            ValidatedAction::Call(amount) => {
                self.commit(Seat::Opponent, amount)?;
                events.push(TableEvent::Called {
                    seat: Seat::Opponent,
                    amount,
                });
                self.close_street_if_matched(&mut events)?;
            }
        }
        Ok(self.transition(events))
    }

    /// Decision input for the scripted opponent.
    pub fn opponent_view(&self) -> OpponentView {
        OpponentView {
            phase: self.round.phase,
            hand: assess_strength(&self.round.visible_cards(Seat::Opponent)),
            to_call: self
                .round
                .current_bet
                .saturating_sub(self.opponent.street_bet()),
            stack: self.opponent.chips(),
        }
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        let round = &self.round;
        RoundSnapshot {
            phase: round.phase,
            pot: round.pot,
            current_bet: round.current_bet,
            player_chips: self.player.chips(),
            opponent_chips: self.opponent.chips(),
            player_bet: self.player.street_bet(),
            opponent_bet: self.opponent.street_bet(),
            player_hole: round.player_hole.clone(),
            opponent_hole: round
                .phase
                .reveals_hands()
                .then(|| round.opponent_hole.clone()),
            community: round.community.clone(),
            dealer: round.dealer,
            deck_remaining: round.deck_remaining(),
            awaiting_opponent: self.awaiting_opponent,
            outcome: if round.phase == GamePhase::Finished {
                round.outcome.clone()
            } else {
                None
            },
        }
    }

    fn transition(&self, events: Vec<TableEvent>) -> Transition {
        Transition {
            snapshot: self.snapshot(),
            events,
        }
    }

    fn betting_street(&self) -> Result<Street, GameError> {
        self.round.phase.street().ok_or_else(|| {
            GameError::invalid(format!("no betting during {}", self.round.phase.as_str()))
        })
    }

    fn record(&mut self, seat: Seat, street: Street, action: PlayerAction) {
        if let Some(history) = self.history.as_mut() {
            history.record(seat, street, action);
        }
    }

    /// Moves chips from a stack into the pot; on error nothing changes.
    fn commit(&mut self, seat: Seat, amount: u32) -> Result<(), GameError> {
        let pot = self
            .round
            .pot
            .checked_add(amount)
            .ok_or_else(|| GameError::invalid("pot would exceed the chip limit"))?;
        self.participant_mut(seat).bet(amount)?;
        self.round.pot = pot;
        Ok(())
    }

    fn reset_bets(&mut self) {
        self.player.reset_street();
        self.opponent.reset_street();
        self.round.current_bet = 0;
    }

    fn close_street_if_matched(&mut self, events: &mut Vec<TableEvent>) -> Result<(), GameError> {
        let (player_bet, opponent_bet) = (self.player.street_bet(), self.opponent.street_bet());
        let live = player_bet > 0 && opponent_bet > 0;
        if player_bet == opponent_bet && (live || self.rules.advance_on_checked_street) {
            self.advance_phase(events)
        } else {
            trace!(player_bet, opponent_bet, "street stays open");
            Ok(())
        }
    }

    fn advance_phase(&mut self, events: &mut Vec<TableEvent>) -> Result<(), GameError> {
        let (next, street, count) = match self.round.phase {
            GamePhase::Preflop => (GamePhase::Flop, Street::Flop, 3),
            GamePhase::Flop => (GamePhase::Turn, Street::Turn, 1),
            GamePhase::Turn => (GamePhase::River, Street::River, 1),
            GamePhase::River => {
                self.round.phase = GamePhase::Showdown;
                self.reset_bets();
                self.resolve_showdown(events);
                return Ok(());
            }
            other => {
                return Err(GameError::invalid(format!(
                    "cannot advance from {}",
                    other.as_str()
                )))
            }
        };
        let cards = self.round.deck.deal(count)?;
        self.round.community.extend_from_slice(&cards);
        self.round.phase = next;
        self.reset_bets();
        if let Some(history) = self.history.as_mut() {
            history.board = self.round.community.clone();
        }
        debug!(phase = next.as_str(), remaining = self.round.deck_remaining(), "street dealt");
        events.push(TableEvent::StreetDealt { street, cards });
        Ok(())
    }

    fn resolve_showdown(&mut self, events: &mut Vec<TableEvent>) {
        let player_hand = evaluate(&self.round.visible_cards(Seat::Player));
        let opponent_hand = evaluate(&self.round.visible_cards(Seat::Opponent));
        let (p, o) = (player_hand.ranking, opponent_hand.ranking);
        let pot = std::mem::take(&mut self.round.pot);

        let (winner, winning, losing) = match p.cmp(&o) {
            Ordering::Greater => {
                self.player.add_chips(pot);
                events.push(TableEvent::ShowdownWon {
                    winner: Seat::Player,
                    winning: p,
                    losing: o,
                });
                (Winner::Player, p, o)
            }
            Ordering::Less => {
                self.opponent.add_chips(pot);
                events.push(TableEvent::ShowdownWon {
                    winner: Seat::Opponent,
                    winning: o,
                    losing: p,
                });
                (Winner::Opponent, o, p)
            }
            Ordering::Equal => {
                // floor split; an odd chip is not awarded to anyone
                let share = pot / 2;
                self.player.add_chips(share);
                self.opponent.add_chips(share);
                if pot % 2 == 1 {
                    debug!(pot, "odd chip left unawarded on split");
                }
                events.push(TableEvent::PotSplit { ranking: p });
                (Winner::Tie, p, o)
            }
        };

        self.round.phase = GamePhase::Finished;
        self.round.outcome = Some(Outcome {
            winner,
            winning_hand: Some(winning.name().to_string()),
            losing_hand: Some(losing.name().to_string()),
        });
        if let Some(history) = self.history.as_mut() {
            history.showdown = Some(ShowdownInfo {
                winner,
                player_hand: p.name().to_string(),
                opponent_hand: o.name().to_string(),
            });
            history.result = Some(format!("showdown pot={} winner={}", pot, winner));
        }
        debug!(winner = %winner, player = %p, opponent = %o, pot, "showdown resolved");
    }

    fn finish_by_fold(&mut self, folder: Seat, events: &mut Vec<TableEvent>) {
        let seat = folder.other();
        let winner = Winner::from(seat);
        let pot = std::mem::take(&mut self.round.pot);
        self.participant_mut(seat).add_chips(pot);
        self.round.phase = GamePhase::Finished;
        self.awaiting_opponent = false;
        self.round.outcome = Some(Outcome {
            winner,
            winning_hand: None,
            losing_hand: None,
        });
        if let Some(history) = self.history.as_mut() {
            history.result = Some(format!("{} folded, {} wins {}", folder, winner, pot));
        }
        debug!(folder = %folder, pot, "hand ended by fold");
        events.push(TableEvent::Folded { seat: folder });
    }
}

fn ensure_covers(participant: &Participant, amount: u32) -> Result<(), GameError> {
    if participant.chips() < amount {
        return Err(GameError::InsufficientChips {
            needed: amount,
            available: participant.chips(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn cards(list: &[&str]) -> Vec<Card> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    /// Puts a started engine on the river with chosen cards and pot.
    fn rig_river(engine: &mut Engine, player: &[&str], opponent: &[&str], board: &[&str], pot: u32) {
        engine.round.phase = GamePhase::River;
        engine.round.player_hole = cards(player);
        engine.round.opponent_hole = cards(opponent);
        engine.round.community = cards(board);
        engine.round.pot = pot;
        engine.round.current_bet = 0;
        engine.player.reset_street();
        engine.opponent.reset_street();
        engine.awaiting_opponent = false;
    }

    #[test]
    fn equal_rankings_split_the_pot() {
        let mut engine = Engine::new(Some(7));
        engine.start_hand().unwrap();
        rig_river(
            &mut engine,
            &["Ah", "3c"],
            &["Kd", "4s"],
            &["Qs", "Qd", "9c", "7h", "2d"],
            100,
        );
        let before = (engine.player.chips(), engine.opponent.chips());
        let mut events = Vec::new();
        engine.resolve_showdown(&mut events);

        assert_eq!(engine.player.chips(), before.0 + 50);
        assert_eq!(engine.opponent.chips(), before.1 + 50);
        assert_eq!(engine.round.pot, 0);
        assert_eq!(engine.round.phase, GamePhase::Finished);
        let outcome = engine.snapshot().outcome.unwrap();
        assert_eq!(outcome.winner, Winner::Tie);
        assert_eq!(events.last().unwrap().to_string(), "It's a tie! Pot is split.");
    }

    #[test]
    fn odd_chip_is_dropped_on_split() {
        let mut engine = Engine::new(Some(7));
        engine.start_hand().unwrap();
        rig_river(
            &mut engine,
            &["Ah", "3c"],
            &["Kd", "4s"],
            &["Qs", "Qd", "9c", "7h", "2d"],
            101,
        );
        let total_before = engine.total_chips();
        engine.resolve_showdown(&mut Vec::new());
        assert_eq!(engine.total_chips(), total_before - 1);
    }

    #[test]
    fn kickers_do_not_break_ties() {
        let mut engine = Engine::new(Some(9));
        engine.start_hand().unwrap();
        // aces against kings, one pair each
        rig_river(
            &mut engine,
            &["Ah", "Ac"],
            &["Kd", "Ks"],
            &["Qs", "Jd", "9c", "7h", "2d"],
            60,
        );
        engine.resolve_showdown(&mut Vec::new());
        assert_eq!(engine.snapshot().outcome.unwrap().winner, Winner::Tie);
    }

    #[test]
    fn higher_ranking_takes_the_pot_through_a_called_river() {
        let mut engine = Engine::new(Some(3));
        engine.start_hand().unwrap();
        rig_river(
            &mut engine,
            &["9h", "9c"],
            &["Kd", "4s"],
            &["9s", "Qd", "2c", "7h", "3d"],
            40,
        );
        let player_before = engine.player.chips();

        engine.apply_player_action(PlayerAction::Raise(20)).unwrap();
        let done = engine.advance_opponent_turn(PlayerAction::Call).unwrap();

        let snap = done.snapshot;
        assert_eq!(snap.phase, GamePhase::Finished);
        assert_eq!(snap.player_chips, player_before - 20 + 80);
        assert_eq!(snap.pot, 0);
        let outcome = snap.outcome.unwrap();
        assert_eq!(outcome.winner, Winner::Player);
        assert_eq!(outcome.winning_hand.as_deref(), Some("Three of a Kind"));
        assert_eq!(outcome.losing_hand.as_deref(), Some("High Card"));
        assert_eq!(
            done.events.last().unwrap().to_string(),
            "You win! Three of a Kind beats High Card"
        );
        assert!(snap.opponent_hole.is_some());
        assert_eq!(
            engine.history().unwrap().result.as_deref(),
            Some("showdown pot=80 winner=player")
        );
    }

    #[test]
    fn checked_street_closes_when_enabled() {
        let rules = RoundRules {
            advance_on_checked_street: true,
            ..RoundRules::default()
        };
        let mut engine = Engine::with_rules(Some(11), 1000, 1000, rules);
        engine.start_hand().unwrap();
        engine.apply_player_action(PlayerAction::Call).unwrap();
        engine.advance_opponent_turn(PlayerAction::Check).unwrap();
        assert_eq!(engine.round.phase, GamePhase::Flop);

        engine.apply_player_action(PlayerAction::Check).unwrap();
        let t = engine.advance_opponent_turn(PlayerAction::Check).unwrap();
        assert_eq!(t.snapshot.phase, GamePhase::Turn);
        assert_eq!(t.snapshot.community.len(), 4);
    }

    #[test]
    fn oversized_stacks_are_clamped() {
        let engine = Engine::with_rules(Some(1), u32::MAX, 3_000_000_000, RoundRules::default());
        assert_eq!(engine.player.chips(), MAX_STACK);
        assert_eq!(engine.opponent.chips(), MAX_STACK);
        assert_eq!(engine.total_chips(), 2 * u64::from(MAX_STACK));
    }

    #[test]
    fn whole_stack_raise_at_the_limit_keeps_chips_conserved() {
        let mut engine = Engine::with_rules(Some(1), u32::MAX, u32::MAX, RoundRules::default());
        engine.start_hand().unwrap();
        let total = engine.total_chips();

        // player is the dealer: 10 posted, so the rest of the stack can go in
        let rest = engine.player.chips();
        engine.apply_player_action(PlayerAction::Raise(rest - 10)).unwrap();
        assert_eq!(engine.player.chips(), 0);
        assert_eq!(engine.total_chips(), total);

        engine.advance_opponent_turn(PlayerAction::Fold).unwrap();
        assert_eq!(engine.player.chips(), MAX_STACK + 20);
        assert_eq!(engine.opponent.chips(), MAX_STACK - 20);
        assert_eq!(engine.total_chips(), total);
    }

    #[test]
    fn pot_overflow_is_refused_without_change() {
        let mut engine = Engine::new(Some(2));
        engine.start_hand().unwrap();
        engine.round.pot = u32::MAX - 5;
        let before = engine.snapshot();
        let err = engine.apply_player_action(PlayerAction::Call).unwrap_err();
        assert!(matches!(err, GameError::InvalidAction(_)));
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn history_tracks_actions_by_street() {
        let mut engine = Engine::new(Some(5));
        engine.start_hand().unwrap();
        engine.apply_player_action(PlayerAction::Call).unwrap();
        engine.advance_opponent_turn(PlayerAction::Check).unwrap();
        let history = engine.history().unwrap();
        assert_eq!(history.hand_id, "hand-000001");
        assert_eq!(history.actions.len(), 2);
        assert_eq!(history.actions[0].seat, Seat::Player);
        assert!(history.actions.iter().all(|a| a.street == Street::Preflop));
        assert_eq!(history.board.len(), 3);
    }
}
