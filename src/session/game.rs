//! The game session: roster, turn order, markets, and action dispatch.
//!
//! `GameSession` owns all authoritative state of one match. It is a plain
//! single-threaded value; callers that share it across threads wrap it in
//! a mutex (see `SessionRegistry`).
//!
//! ## Lifecycle
//!
//! `Waiting` (roster assembly) -> `Active` (after `start_game`) -> `Ended`
//! (after a hosted visitor satisfies the win condition). Gameplay actions
//! are only accepted while `Active`.
//!
//! ## Randomness
//!
//! Every shuffle and dice roll goes through the session's own
//! `RandomSource`, so a seeded `GameRng` or a `ConstantSource` reproduces
//! a match exactly.

use chrono::{DateTime, Utc};
use im::Vector;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use super::account::{HostReport, PlayerAccount};
use crate::cards::{DishInstance, DishKind, StoreInstance, StoreKind};
use crate::core::action::{Action, ActionRecord};
use crate::core::config::SessionConfig;
use crate::core::error::{ActionError, SessionError};
use crate::core::ids::{PlayerId, PlayerOrdinal, SessionId};
use crate::core::rng::{shuffle, GameRng, RandomSource};
use crate::core::status::GameStatus;
use crate::market::Market;
use crate::rules::{hosting_cost, is_winner};

/// One match.
#[derive(Clone, Debug)]
pub struct GameSession<R = GameRng> {
    id: SessionId,
    status: GameStatus,
    config: SessionConfig,
    required_players: usize,
    turn_order: Vec<PlayerId>,
    players: FxHashMap<PlayerId, PlayerAccount>,
    ordinals: FxHashMap<PlayerId, PlayerOrdinal>,
    next_ordinal: PlayerOrdinal,
    current_turn: usize,
    turn_number: u32,
    turn_sequence: u32,
    created_at: DateTime<Utc>,
    winner_index: Option<usize>,
    market: Market,
    history: Vector<ActionRecord>,
    rng: R,
}

impl GameSession<GameRng> {
    /// Create a session with the standard rules and an entropy-seeded RNG.
    #[must_use]
    pub fn new(id: SessionId, required_players: usize) -> Self {
        Self::with_rng(
            id,
            required_players,
            SessionConfig::default(),
            GameRng::from_entropy(),
        )
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Create a session with explicit rules and random source.
    pub fn with_rng(id: SessionId, required_players: usize, config: SessionConfig, rng: R) -> Self {
        let market = Market::empty(&config);
        Self {
            id,
            status: GameStatus::Waiting,
            config,
            required_players,
            turn_order: Vec::with_capacity(required_players),
            players: FxHashMap::default(),
            ordinals: FxHashMap::default(),
            next_ordinal: PlayerOrdinal::FIRST,
            current_turn: 0,
            turn_number: 0,
            turn_sequence: 0,
            created_at: Utc::now(),
            winner_index: None,
            market,
            history: Vector::new(),
            rng,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn required_players(&self) -> usize {
        self.required_players
    }

    /// Player ids in turn order.
    #[must_use]
    pub fn turn_order(&self) -> &[PlayerId] {
        &self.turn_order
    }

    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&PlayerAccount> {
        self.players.get(id)
    }

    /// Accounts in turn order.
    pub fn players(&self) -> impl Iterator<Item = &PlayerAccount> {
        self.turn_order.iter().filter_map(|id| self.players.get(id))
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.turn_order.len()
    }

    #[must_use]
    pub fn contains_player(&self, id: &PlayerId) -> bool {
        self.players.contains_key(id)
    }

    /// Join ordinal of a player.
    #[must_use]
    pub fn ordinal(&self, id: &PlayerId) -> Option<PlayerOrdinal> {
        self.ordinals.get(id).copied()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.turn_order.len() >= self.required_players
    }

    #[must_use]
    pub fn is_ready_to_start(&self) -> bool {
        self.status == GameStatus::Waiting && self.turn_order.len() == self.required_players
    }

    /// Index into the turn order of the player whose turn it is.
    #[must_use]
    pub fn current_turn_index(&self) -> usize {
        self.current_turn
    }

    #[must_use]
    pub fn current_player_id(&self) -> Option<&PlayerId> {
        self.turn_order.get(self.current_turn)
    }

    #[must_use]
    pub fn current_player(&self) -> Option<&PlayerAccount> {
        self.current_player_id().and_then(|id| self.players.get(id))
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Turn-order position of the player who won.
    #[must_use]
    pub fn winner_index(&self) -> Option<usize> {
        self.winner_index
    }

    /// The player currently at the winning turn-order position.
    ///
    /// This follows the position, not the player: removing a player after
    /// the game ended can shift it.
    #[must_use]
    pub fn winner(&self) -> Option<&PlayerId> {
        self.winner_index.and_then(|index| self.turn_order.get(index))
    }

    #[must_use]
    pub fn market(&self) -> &Market {
        &self.market
    }

    /// Every accepted gameplay action, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    // === Roster ===

    /// Add a player to the roster.
    ///
    /// Fails if the id already joined or the roster is full.
    pub fn add_player(
        &mut self,
        id: PlayerId,
        name: impl Into<String>,
        avatar: Option<String>,
    ) -> Result<PlayerOrdinal, SessionError> {
        if self.players.contains_key(&id) {
            return Err(SessionError::DuplicatePlayer(id));
        }
        if self.is_full() {
            return Err(SessionError::RosterFull(self.required_players));
        }

        let ordinal = self.next_ordinal;
        self.next_ordinal = ordinal.next();
        let account = PlayerAccount::new(id.clone(), name, avatar, &self.config);

        info!(session = %self.id, player = %id, %ordinal, "player joined");
        self.turn_order.push(id.clone());
        self.ordinals.insert(id.clone(), ordinal);
        self.players.insert(id, account);
        Ok(ordinal)
    }

    /// Remove a player from the roster and return their account.
    ///
    /// If the turn pointer falls outside the shrunken turn order it resets
    /// to the first position.
    pub fn remove_player(&mut self, id: &PlayerId) -> Result<PlayerAccount, SessionError> {
        let account = self
            .players
            .remove(id)
            .ok_or_else(|| SessionError::UnknownPlayer(id.clone()))?;
        self.ordinals.remove(id);
        self.turn_order.retain(|other| other != id);
        if self.current_turn >= self.turn_order.len() {
            self.current_turn = 0;
        }

        info!(session = %self.id, player = %id, remaining = self.turn_order.len(), "player left");
        Ok(account)
    }

    /// Start the game.
    ///
    /// Requires `Waiting` and a complete roster. Shuffles the turn order,
    /// pays each player their position index as compensation, and deals
    /// the markets.
    pub fn start_game(&mut self) -> Result<(), SessionError> {
        if self.status != GameStatus::Waiting {
            return Err(SessionError::NotWaiting(self.status));
        }
        if self.turn_order.len() != self.required_players {
            return Err(SessionError::RosterIncomplete {
                required: self.required_players,
                joined: self.turn_order.len(),
            });
        }

        shuffle(&mut self.turn_order, &mut self.rng);
        for (position, id) in self.turn_order.iter().enumerate() {
            if let Some(account) = self.players.get_mut(id) {
                account.add_money(position as i64);
            }
        }
        self.market = Market::deal(&self.config, &mut self.rng);

        self.status = GameStatus::Active;
        self.turn_number = 1;
        self.turn_sequence = 0;
        self.current_turn = 0;

        info!(session = %self.id, players = self.turn_order.len(), "game started");
        Ok(())
    }

    /// Pass the turn to the next player. No-op with an empty roster.
    pub fn next_turn(&mut self) {
        if self.turn_order.is_empty() {
            return;
        }
        self.current_turn = (self.current_turn + 1) % self.turn_order.len();
        self.turn_number += 1;
        self.turn_sequence = 0;
    }

    // === Actions ===

    /// Validate `action` against status and turn ownership, apply it, and
    /// record it in the history.
    pub fn apply(&mut self, player: &PlayerId, action: Action) -> Result<(), ActionError> {
        self.require_active()?;
        if self.current_key()? != *player {
            return Err(ActionError::NotYourTurn(player.clone()));
        }

        let turn = self.turn_number;
        let sequence = self.turn_sequence;
        match action {
            Action::BuyDish { dish } => self.sell_dish_card_to_current_player(dish)?,
            Action::RemoveDish { discard_index } => {
                self.current_player_remove_dish_card(discard_index)?;
            }
            Action::BuyStore { slot_index } => {
                self.sell_store_card_to_current_player(slot_index)?;
            }
            Action::BuildStore { owned_index } => {
                self.current_player_build_store(owned_index)?;
            }
            Action::HostVisitor { slot_index } => {
                self.assign_visitor_to_current_player(slot_index)?;
            }
        }

        self.history
            .push_back(ActionRecord::new(player.clone(), action, turn, sequence));
        if !action.ends_turn() {
            self.turn_sequence += 1;
        }
        Ok(())
    }

    /// Sell the store card in market `slot` to the current player.
    pub fn sell_store_card_to_current_player(
        &mut self,
        slot: usize,
    ) -> Result<StoreInstance, ActionError> {
        self.require_active()?;
        let key = self.current_key()?;
        let store = *self.market.stores.get(slot)?;
        let account = self.players.get_mut(&key).ok_or(ActionError::NoPlayers)?;

        let cost = account.acquire_store_card(store)?;
        self.market.stores.take(slot)?;

        debug!(session = %self.id, player = %key, slot, store = %store.kind(), cost, "store bought");
        Ok(store)
    }

    /// Build the current player's owned store at `index`.
    pub fn current_player_build_store(&mut self, index: usize) -> Result<StoreKind, ActionError> {
        self.require_active()?;
        let key = self.current_key()?;
        let account = self.players.get_mut(&key).ok_or(ActionError::NoPlayers)?;
        account.build_store(index)
    }

    /// Host the visitor in market `slot` for the current player.
    ///
    /// Charges the slot's hosting cost, escrows the subsidy onto cheaper
    /// slots, pays out the host, retires the visitor, checks the win
    /// condition, and passes the turn.
    pub fn assign_visitor_to_current_player(
        &mut self,
        slot: usize,
    ) -> Result<HostReport, ActionError> {
        self.require_active()?;
        let key = self.current_key()?;
        let visitor = self.market.visitors.get(slot)?;
        let account = self.players.get_mut(&key).ok_or(ActionError::NoPlayers)?;

        let cost = hosting_cost(slot);
        if cost > 0 {
            account.remove_money(cost)?;
            self.market.visitors.subsidize_below(slot);
        }

        let extra = self.market.visitors.escrow_at(slot);
        let report = account.host_visitor(visitor, extra, &mut self.rng);
        let won = is_winner(account.money(), account.stores_built(), &self.config);
        let money = account.money();
        self.market.visitors.retire(slot, &mut self.rng)?;

        debug!(
            session = %self.id,
            player = %key,
            slot,
            visitor = %visitor,
            cost,
            earned = report.total(),
            money,
            "visitor hosted"
        );

        if won {
            self.end_game();
        }
        self.next_turn();
        Ok(report)
    }

    /// Sell a new dish card of `kind` to the current player.
    pub fn sell_dish_card_to_current_player(&mut self, kind: DishKind) -> Result<(), ActionError> {
        self.require_active()?;
        let key = self.current_key()?;
        let account = self.players.get_mut(&key).ok_or(ActionError::NoPlayers)?;

        account.remove_money(kind.definition().build_cost)?;
        account.add_dish_card(DishInstance::new(kind));

        debug!(session = %self.id, player = %key, dish = %kind, "dish bought");
        Ok(())
    }

    /// Remove a dish from the current player's discard pile.
    pub fn current_player_remove_dish_card(
        &mut self,
        index: usize,
    ) -> Result<DishInstance, ActionError> {
        self.require_active()?;
        let key = self.current_key()?;
        let account = self.players.get_mut(&key).ok_or(ActionError::NoPlayers)?;
        account.remove_dish_card_from_discard_pile(index)
    }

    // === Internals ===

    fn require_active(&self) -> Result<(), ActionError> {
        if self.status == GameStatus::Active {
            Ok(())
        } else {
            Err(ActionError::NotActive(self.status))
        }
    }

    fn current_key(&self) -> Result<PlayerId, ActionError> {
        self.current_player_id().cloned().ok_or(ActionError::NoPlayers)
    }

    fn end_game(&mut self) {
        self.status = GameStatus::Ended;
        self.winner_index = Some(self.current_turn);
        info!(
            session = %self.id,
            winner = ?self.current_player_id(),
            turn = self.turn_number,
            "game ended"
        );
    }
}
