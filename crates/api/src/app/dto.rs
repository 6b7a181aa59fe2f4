//! Wire models. Field names follow the public API contract (camelCase).

use serde::{Deserialize, Serialize};

use coinshop_ledger::{CoinHistory, InventoryItem};

use crate::app::services::AccountInfo;

#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendCoinRequest {
    #[serde(default)]
    pub to_user: String,
    #[serde(default)]
    pub amount: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoResponse {
    pub coins: i64,
    pub inventory: Vec<Item>,
    pub coin_history: CoinHistoryView,
}

#[derive(Debug, Serialize)]
pub struct Item {
    #[serde(rename = "type")]
    pub kind: String,
    pub quantity: i64,
}

#[derive(Debug, Serialize)]
pub struct CoinHistoryView {
    pub received: Vec<ReceivedEntry>,
    pub sent: Vec<SentEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivedEntry {
    pub from_user: String,
    pub amount: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentEntry {
    pub to_user: String,
    pub amount: i64,
}

pub fn info_to_response(info: AccountInfo) -> InfoResponse {
    InfoResponse {
        coins: info.coins,
        inventory: info.inventory.into_iter().map(item_to_wire).collect(),
        coin_history: history_to_wire(info.history),
    }
}

fn item_to_wire(item: InventoryItem) -> Item {
    Item {
        kind: item.name,
        quantity: item.quantity,
    }
}

fn history_to_wire(history: CoinHistory) -> CoinHistoryView {
    CoinHistoryView {
        received: history
            .received
            .into_iter()
            .map(|r| ReceivedEntry {
                from_user: r.from_user,
                amount: r.amount,
            })
            .collect(),
        sent: history
            .sent
            .into_iter()
            .map(|s| SentEntry {
                to_user: s.to_user,
                amount: s.amount,
            })
            .collect(),
    }
}
