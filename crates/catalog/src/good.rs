use serde::{Deserialize, Serialize};

use coinshop_core::GoodId;

/// A catalog entry: immutable reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Good {
    pub id: GoodId,
    pub name: String,
    /// Unit price in coins; always positive.
    pub price: i64,
}
