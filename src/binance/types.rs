use std::fmt;

use serde::Deserialize;

/// Depth payload as Binance emits it, on both the REST endpoint and the
/// partial-book stream. Prices and quantities stay decimal strings.
#[derive(Debug, Deserialize)]
pub struct DepthSnapshot {
    #[serde(rename = "lastUpdateId")]
    pub last_update_id: u64,
    pub bids: Vec<[String; 2]>, // [price, qty]
    pub asks: Vec<[String; 2]>,
}

/// One (price, amount) level of the normalized book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceLevel {
    pub price: String,
    pub amount: String,
}

/// Normalized snapshot, the shape both transports log. Level ordering is
/// whatever the exchange sent, best price first.
#[derive(Debug, PartialEq, Eq)]
pub struct OrderBook {
    pub last_update_id: u64,
    pub bids: Vec<PriceLevel>,
    pub asks: Vec<PriceLevel>,
}

impl From<DepthSnapshot> for OrderBook {
    fn from(raw: DepthSnapshot) -> Self {
        Self {
            last_update_id: raw.last_update_id,
            bids: raw.bids.into_iter().map(price_level).collect(),
            asks: raw.asks.into_iter().map(price_level).collect(),
        }
    }
}

fn price_level([price, amount]: [String; 2]) -> PriceLevel {
    PriceLevel { price, amount }
}

impl fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.price, self.amount)
    }
}

impl fmt::Display for OrderBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lastUpdateId={} bids=[", self.last_update_id)?;
        fmt_levels(f, &self.bids)?;
        write!(f, "] asks=[")?;
        fmt_levels(f, &self.asks)?;
        write!(f, "]")
    }
}

fn fmt_levels(f: &mut fmt::Formatter<'_>, levels: &[PriceLevel]) -> fmt::Result {
    for (i, level) in levels.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{level}")?;
    }
    Ok(())
}
