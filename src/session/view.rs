//! Client-facing snapshots of a session.
//!
//! Views are plain serde documents built from a borrowed session. Players
//! are keyed by join ordinal; raw player ids only appear in the
//! server-side `PlayerSummary`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::account::PlayerAccount;
use super::game::GameSession;
use crate::cards::{DishInstance, DishKind, StoreInstance, StoreKind, VisitorKind};
use crate::core::ids::{PlayerId, SessionId};
use crate::core::rng::RandomSource;
use crate::core::status::GameStatus;

/// A store card as seen by clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreView {
    #[serde(rename = "type")]
    pub kind: StoreKind,
    pub card_id: String,
    pub is_completed: bool,
}

impl From<&StoreInstance> for StoreView {
    fn from(store: &StoreInstance) -> Self {
        Self {
            kind: store.kind(),
            card_id: store.card_id().to_string(),
            is_completed: store.is_built(),
        }
    }
}

/// A dish card as seen by clients.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishView {
    #[serde(rename = "type")]
    pub kind: DishKind,
}

impl From<&DishInstance> for DishView {
    fn from(dish: &DishInstance) -> Self {
        Self { kind: dish.kind() }
    }
}

/// Everything clients see about one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub name: String,
    pub avatar: Option<String>,
    pub num_of_store_built: usize,
    pub store_cards: Vec<StoreView>,
    pub dish_cards: Vec<DishView>,
    pub money: i64,
    pub dish_cards_draw_pile_length: usize,
    pub dish_cards_discard_pile_length: usize,
    pub dish_cards_discard_pile: Vec<DishView>,
    /// Store id to accumulated per-type bonus, for every store type.
    pub extra_store_earnings: BTreeMap<String, i64>,
}

impl From<&PlayerAccount> for PlayerView {
    fn from(account: &PlayerAccount) -> Self {
        Self {
            name: account.name().to_string(),
            avatar: account.avatar().map(str::to_string),
            num_of_store_built: account.stores_built(),
            store_cards: account.stores().iter().map(StoreView::from).collect(),
            dish_cards: account.dishes().iter().map(DishView::from).collect(),
            money: account.money(),
            dish_cards_draw_pile_length: account.dish_draw_pile().len(),
            dish_cards_discard_pile_length: account.dish_discard_pile().len(),
            dish_cards_discard_pile: account.dish_discard_pile().iter().map(DishView::from).collect(),
            extra_store_earnings: StoreKind::ALL
                .into_iter()
                .map(|kind| (kind.id().to_string(), account.store_bonus(kind)))
                .collect(),
        }
    }
}

/// Shared visitor market.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorMarketView {
    pub visible: Vec<VisitorKind>,
    pub discard_pile: Vec<VisitorKind>,
    pub extra_money: Vec<i64>,
    pub draw_pile_count: usize,
}

/// Shared store market. Empty slots are `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreMarketView {
    pub visible: Vec<Option<StoreView>>,
    pub draw_pile_count: usize,
}

/// Full game state broadcast to every connected party.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub id: SessionId,
    pub status: GameStatus,
    pub required_players: usize,
    /// Join ordinal to player.
    pub players: BTreeMap<u32, PlayerView>,
    /// Join ordinals in turn order.
    pub player_order: Vec<u32>,
    pub current_player_index: usize,
    pub npc_doggos: VisitorMarketView,
    pub store_market: StoreMarketView,
    pub turn_number: u32,
    /// Unix seconds.
    pub created_at: i64,
    pub winner_index: Option<usize>,
}

/// Name and avatar of a player in the waiting room.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitingRoomEntry {
    pub name: String,
    pub avatar: Option<String>,
}

/// Roster broadcast while the session is waiting, keyed by join ordinal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WaitingRoomView {
    pub players: BTreeMap<u32, WaitingRoomEntry>,
}

/// Server-side diagnostic summary of one account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub name: String,
    pub avatar: Option<String>,
    pub money: i64,
    pub store_card_count: usize,
    pub dish_card_count: usize,
    pub dish_cards_draw_pile_count: usize,
    pub dish_cards_discard_pile_count: usize,
}

impl From<&PlayerAccount> for PlayerSummary {
    fn from(account: &PlayerAccount) -> Self {
        Self {
            id: account.id().clone(),
            name: account.name().to_string(),
            avatar: account.avatar().map(str::to_string),
            money: account.money(),
            store_card_count: account.stores().len(),
            dish_card_count: account.dishes().len(),
            dish_cards_draw_pile_count: account.dish_draw_pile().len(),
            dish_cards_discard_pile_count: account.dish_discard_pile().len(),
        }
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Snapshot the full game state.
    #[must_use]
    pub fn view(&self) -> SessionView {
        let ordinal_of = |id: &PlayerId| self.ordinal(id).map(|ordinal| ordinal.0);
        let visitors = &self.market().visitors;
        let stores = &self.market().stores;

        SessionView {
            id: self.id().clone(),
            status: self.status(),
            required_players: self.required_players(),
            players: self
                .players()
                .filter_map(|account| Some((ordinal_of(account.id())?, PlayerView::from(account))))
                .collect(),
            player_order: self.turn_order().iter().filter_map(ordinal_of).collect(),
            current_player_index: self.current_turn_index(),
            npc_doggos: VisitorMarketView {
                visible: visitors.visible().to_vec(),
                discard_pile: visitors.discard_pile().to_vec(),
                extra_money: visitors.escrow().to_vec(),
                draw_pile_count: visitors.draw_pile().len(),
            },
            store_market: StoreMarketView {
                visible: stores
                    .slots()
                    .iter()
                    .map(|slot| slot.as_ref().map(StoreView::from))
                    .collect(),
                draw_pile_count: stores.draw_len(),
            },
            turn_number: self.turn_number(),
            created_at: self.created_at().timestamp(),
            winner_index: self.winner_index(),
        }
    }

    /// Snapshot the waiting-room roster.
    #[must_use]
    pub fn waiting_room(&self) -> WaitingRoomView {
        WaitingRoomView {
            players: self
                .players()
                .filter_map(|account| {
                    let ordinal = self.ordinal(account.id())?;
                    Some((
                        ordinal.0,
                        WaitingRoomEntry {
                            name: account.name().to_string(),
                            avatar: account.avatar().map(str::to_string),
                        },
                    ))
                })
                .collect(),
        }
    }

    /// Diagnostic summaries in turn order.
    #[must_use]
    pub fn summaries(&self) -> Vec<PlayerSummary> {
        self.players().map(PlayerSummary::from).collect()
    }
}
