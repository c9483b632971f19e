//! The deduction game controller.

use std::collections::BTreeMap;

use im::Vector;
use tracing::{debug, info, warn};

use crate::board::{GridBoard, GridPosition, RoomId, Tile, Topology};
use crate::cards::{build_deck, deal_remainder, draw_solution, RoomName, Solution, Suspect, Weapon};
use crate::core::{
    Accusation, ActionOutcome, GameConfig, GameEvent, GameResult, GameRng, IgnoreReason, LogEntry, Phase,
    PlayerId, PlayerMap, RandomSource, Suggestion, TurnState, MAX_PLAYERS, MIN_PLAYERS,
};
use crate::error::{Error, Result};
use crate::players::{Notebook, Player};
use crate::rules::{resolve_accusation, resolve_suggestion};

/// A running game.
///
/// Owns the board, the seated players, the hidden solution and the turn
/// state. Every action takes `&mut self`, runs to completion and returns an
/// [`ActionOutcome`]; actions that are not allowed right now come back as
/// `ActionOutcome::Ignored` and leave the game untouched.
#[derive(Clone, Debug)]
pub struct CluedoGame<R: RandomSource = GameRng> {
    pub(super) board: GridBoard,
    pub(super) players: PlayerMap<Player<GridPosition>>,
    pub(super) solution: Solution,
    pub(super) turn: TurnState,
    pub(super) weapon_rooms: BTreeMap<Weapon, RoomName>,
    pub(super) suspect_rooms: BTreeMap<Suspect, RoomName>,
    pub(super) log: Vector<LogEntry>,
    pub(super) rng: R,
}

/// Builder for [`CluedoGame`].
///
/// ```
/// use rust_cluedo::cards::Suspect;
/// use rust_cluedo::games::cluedo::CluedoGameBuilder;
///
/// let game = CluedoGameBuilder::new()
///     .seat("Alice", Suspect::Scarlett)
///     .seat("Bob", Suspect::Mustard)
///     .seat("Carol", Suspect::White)
///     .seed(7)
///     .build()
///     .unwrap();
///
/// assert_eq!(game.player_count(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CluedoGameBuilder {
    config: GameConfig,
}

impl CluedoGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn seat(mut self, name: impl Into<String>, token: Suspect) -> Self {
        self.config = self.config.with_seat(name, token);
        self
    }

    pub fn home_base(mut self, name: impl Into<String>) -> Self {
        self.config = self.config.with_home_base(name);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config = self.config.with_seed(seed);
        self
    }

    pub fn layout(mut self, layout: crate::board::BoardLayout) -> Self {
        self.config = self.config.with_layout(layout);
        self
    }

    /// Build with a `GameRng` seeded from the configuration.
    pub fn build(self) -> Result<CluedoGame<GameRng>> {
        let rng = GameRng::new(self.config.seed);
        self.build_with_rng(rng)
    }

    /// Build with a caller-supplied random source.
    pub fn build_with_rng<R: RandomSource>(self, mut rng: R) -> Result<CluedoGame<R>> {
        let config = self.config;
        let count = config.player_count();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(Error::InvalidPlayerCount {
                count,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }
        for (i, seat) in config.seats.iter().enumerate() {
            if config.seats[..i].iter().any(|other| other.token == seat.token) {
                return Err(Error::DuplicateToken {
                    token: seat.token.to_string(),
                });
            }
        }

        let mut board = config.layout_or_reference().build(&config.home_base)?;

        let mut seated = Vec::with_capacity(count);
        for (i, seat) in config.seats.iter().enumerate() {
            let start = board
                .start_of(seat.token)
                .ok_or_else(|| Error::layout(format!("no start cell for {}", seat.token)))?;
            seated.push(Player::new(PlayerId::new(i as u8), seat.name.clone(), seat.token, start));
        }
        let mut players = PlayerMap::from_vec(seated);

        let mut deck = build_deck(&mut rng);
        let solution = draw_solution(&mut deck)?;
        deal_remainder(deck, players.values_mut().map(|p| p.hand_mut()))?;

        for player in players.values() {
            board.place_player(player)?;
        }

        let first = PlayerId::new(0);
        let mut game = CluedoGame {
            board,
            players,
            solution,
            turn: TurnState::new(first),
            weapon_rooms: BTreeMap::new(),
            suspect_rooms: BTreeMap::new(),
            log: Vector::new(),
            rng,
        };
        info!(players = count, home_base = %config.home_base, "game started");
        game.record(GameEvent::GameStarted { players: count });
        Ok(game)
    }
}

impl CluedoGame<GameRng> {
    /// Build a game from configuration with the default RNG.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        CluedoGameBuilder::from_config(config.clone()).build()
    }
}

impl<R: RandomSource> CluedoGame<R> {
    /// Build a game from configuration with a caller-supplied random source.
    pub fn with_rng(config: &GameConfig, rng: R) -> Result<Self> {
        CluedoGameBuilder::from_config(config.clone()).build_with_rng(rng)
    }

    // === Reads ===

    #[must_use]
    pub fn board(&self) -> &GridBoard {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player<GridPosition>> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player<GridPosition>> {
        self.players.get(id)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// A player's notebook, for UI code to annotate.
    pub fn notebook_mut(&mut self, id: PlayerId) -> Option<&mut Notebook> {
        self.players.get_mut(id).map(|p| p.notebook_mut())
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.turn.current
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.turn.phase
    }

    #[must_use]
    pub fn steps_remaining(&self) -> u8 {
        self.turn.steps_remaining
    }

    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.turn.result
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.turn.is_over()
    }

    /// The shared event log, oldest first.
    #[must_use]
    pub fn log(&self) -> &Vector<LogEntry> {
        &self.log
    }

    /// The room a weapon was last suggested in.
    #[must_use]
    pub fn weapon_location(&self, weapon: Weapon) -> Option<RoomName> {
        self.weapon_rooms.get(&weapon).copied()
    }

    /// The room an unseated suspect was last suggested in. Seated suspects
    /// are tracked by their player's position instead.
    #[must_use]
    pub fn suspect_location(&self, suspect: Suspect) -> Option<RoomName> {
        self.suspect_rooms.get(&suspect).copied()
    }

    /// Players not yet eliminated, in seating order.
    #[must_use]
    pub fn active_players(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|(_, p)| !p.is_eliminated())
            .map(|(id, _)| id)
            .collect()
    }

    /// Where the current player may step next. Empty outside `Moving`.
    #[must_use]
    pub fn legal_destinations(&self) -> Vec<GridPosition> {
        if self.turn.phase != Phase::Moving || self.is_over() {
            return Vec::new();
        }
        self.board.neighbors(self.current_position())
    }

    /// The random source, e.g. to queue scripted die faces.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    // === Actions ===

    /// Roll two dice and start moving.
    pub fn roll(&mut self) -> ActionOutcome {
        if let Some(reason) = self.check_phase(Phase::WaitRoll) {
            return self.ignore(reason);
        }

        let dice = (self.rng.roll_die(), self.rng.roll_die());
        let steps = dice.0 + dice.1;
        self.turn.phase = Phase::Moving;
        self.turn.steps_remaining = steps;
        self.turn.last_roll = Some(dice);

        info!(player = %self.turn.current, dice = ?dice, steps, "rolled");
        self.record(GameEvent::Rolled { dice, steps });
        ActionOutcome::Rolled { dice, steps }
    }

    /// Take one step towards `target`.
    ///
    /// Entering a room ends movement. Spending the last step on a corridor
    /// passes the turn.
    pub fn move_to(&mut self, target: GridPosition) -> ActionOutcome {
        if let Some(reason) = self.check_phase(Phase::Moving) {
            return self.ignore(reason);
        }
        let current = self.turn.current;
        let from = self.current_position();
        if self.turn.steps_remaining == 0 || !self.board.is_legal_destination(from, target) {
            return self.ignore(IgnoreReason::IllegalDestination { from, to: target });
        }

        let dirty = match self.board.move_player(&mut self.players[current], target) {
            Ok(dirty) => dirty,
            Err(err) => {
                warn!(player = %current, %target, error = %err, "board rejected a legal step");
                return self.ignore(IgnoreReason::IllegalDestination { from, to: target });
            }
        };
        self.turn.steps_remaining -= 1;
        self.record(GameEvent::Moved { from, to: target });

        let entered = match self.board.tile_at(target) {
            Ok(Tile::Room { room, .. }) => Some(*room),
            _ => None,
        };

        let mut next_player = None;
        if let Some(room) = entered {
            self.turn.steps_remaining = 0;
            self.turn.phase = Phase::InRoom;
            let name = self.room_name(room);
            info!(player = %current, room = %name, "entered room");
            self.record(GameEvent::EnteredRoom { room: name });
        } else if self.turn.steps_remaining == 0 {
            next_player = Some(self.advance_turn());
        }

        ActionOutcome::Moved {
            to: target,
            steps_remaining: self.turn.steps_remaining,
            entered,
            next_player,
            dirty,
        }
    }

    /// Suggest a suspect and weapon in the room the current player stands in.
    ///
    /// The suggested suspect is summoned into the room: a seated token moves
    /// onto the suggester's cell, an unseated one is recorded by room.
    pub fn suggest(&mut self, suspect: Suspect, weapon: Weapon, room: RoomName) -> ActionOutcome {
        if let Some(reason) = self.check_phase(Phase::InRoom) {
            return self.ignore(reason);
        }
        let Some(here) = self.current_room() else {
            return self.ignore(IgnoreReason::NotInRoom);
        };
        if self.board.is_home_base(here) {
            return self.ignore(IgnoreReason::InHomeBase);
        }
        if self.board.room(here).and_then(|r| r.card()) != Some(room) {
            return self.ignore(IgnoreReason::WrongRoom { named: room });
        }

        let current = self.turn.current;
        let suggestion = Suggestion::new(suspect, weapon, room);
        let disproof = resolve_suggestion(&self.players, current, &suggestion, &mut self.rng);

        self.summon(suspect, room);
        self.weapon_rooms.insert(weapon, room);
        self.turn.phase = Phase::TurnOver;

        info!(player = %current, %suspect, %weapon, %room, disproved = disproof.is_some(), "suggestion");
        self.record(GameEvent::Suggested(suggestion));
        match disproof {
            Some(d) => self.record(GameEvent::Disproved { by: d.by }),
            None => self.record(GameEvent::NotDisproved),
        }

        ActionOutcome::Suggested { suggestion, disproof }
    }

    /// Accuse from the home base. Wrong accusations eliminate the accuser.
    pub fn accuse(&mut self, suspect: Suspect, weapon: Weapon, room: RoomName) -> ActionOutcome {
        if let Some(reason) = self.check_phase(Phase::InRoom) {
            return self.ignore(reason);
        }
        match self.current_room() {
            None => return self.ignore(IgnoreReason::NotInRoom),
            Some(here) if !self.board.is_home_base(here) => return self.ignore(IgnoreReason::NotInHomeBase),
            Some(_) => {}
        }

        let current = self.turn.current;
        let accusation = Accusation::new(suspect, weapon, room);
        let correct = resolve_accusation(&accusation, &self.solution);
        self.record(GameEvent::Accused { accusation, correct });

        if correct {
            let result = GameResult::Winner(current);
            self.turn.result = Some(result);
            info!(player = %current, "correct accusation, game won");
            self.record(GameEvent::Won(result));
            return ActionOutcome::AccusationCorrect { winner: current };
        }

        self.players[current].set_eliminated(true);
        info!(player = %current, "wrong accusation, player eliminated");
        self.record(GameEvent::Eliminated);

        let active = self.active_players();
        if let [survivor] = active.as_slice() {
            let survivor = *survivor;
            let result = GameResult::LastStanding(survivor);
            self.turn.pass_to(survivor);
            self.turn.result = Some(result);
            info!(player = %survivor, "last player standing wins");
            self.record(GameEvent::Won(result));
            return ActionOutcome::AccusationWrong {
                eliminated: current,
                next_player: survivor,
                result: Some(result),
            };
        }

        let next_player = self.advance_turn();
        ActionOutcome::AccusationWrong {
            eliminated: current,
            next_player,
            result: None,
        }
    }

    /// Hand the turn to the next active player.
    pub fn end_turn(&mut self) -> ActionOutcome {
        if self.is_over() {
            return self.ignore(IgnoreReason::GameOver);
        }
        let next_player = self.advance_turn();
        ActionOutcome::TurnEnded { next_player }
    }

    // === Internals ===

    fn current_position(&self) -> GridPosition {
        self.players[self.turn.current].position()
    }

    fn current_room(&self) -> Option<RoomId> {
        self.board.tile_at(self.current_position()).ok()?.room_id()
    }

    fn room_name(&self, room: RoomId) -> String {
        self.board
            .room(room)
            .map(|r| r.name().to_string())
            .unwrap_or_else(|| format!("room {}", room.index()))
    }

    fn check_phase(&self, expected: Phase) -> Option<IgnoreReason> {
        if self.is_over() {
            Some(IgnoreReason::GameOver)
        } else if self.turn.phase != expected {
            Some(IgnoreReason::WrongPhase { phase: self.turn.phase })
        } else {
            None
        }
    }

    /// Next seat after the current one that is still in the game.
    pub(super) fn next_active(&self, from: PlayerId) -> PlayerId {
        self.players
            .seats_after(from)
            .find(|&seat| !self.players[seat].is_eliminated())
            .unwrap_or(from)
    }

    fn advance_turn(&mut self) -> PlayerId {
        let next_player = self.next_active(self.turn.current);
        self.record(GameEvent::TurnEnded { next_player });
        self.turn.pass_to(next_player);
        debug!(player = %next_player, turn = self.turn.turn, "turn passed");
        next_player
    }

    /// Bring `suspect` into the current player's room, by token or by record.
    fn summon(&mut self, suspect: Suspect, room: RoomName) {
        let current = self.turn.current;
        let holder = self.players.iter().find(|(_, p)| p.token() == suspect).map(|(id, _)| id);
        let summoned = match holder {
            Some(id) if id == current => return,
            Some(id) => id,
            None => {
                self.suspect_rooms.insert(suspect, room);
                return;
            }
        };
        let to = self.current_position();
        if let Err(err) = self.board.move_player(&mut self.players[summoned], to) {
            warn!(player = %summoned, error = %err, "could not summon suspect token");
        }
    }

    fn ignore(&self, reason: IgnoreReason) -> ActionOutcome {
        debug!(player = %self.turn.current, %reason, "action ignored");
        ActionOutcome::Ignored(reason)
    }

    pub(super) fn record(&mut self, event: GameEvent) {
        self.log.push_back(LogEntry {
            turn: self.turn.turn,
            player: self.turn.current,
            event,
        });
    }
}
