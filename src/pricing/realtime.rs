//! Realtime messaging pricing.

use crate::models::{RealtimeUsage, ServiceCosts};
use crate::money::Money;

pub const INCLUDED_CONNECTIONS: f64 = 500.0;
pub const CONNECTION_BLOCK: f64 = 1000.0;
pub const CONNECTION_BLOCK_PRICE: f64 = 10.0;
pub const INCLUDED_MESSAGES: f64 = 5_000_000.0;
pub const MESSAGE_BLOCK: f64 = 1_000_000.0;
pub const MESSAGE_BLOCK_PRICE: f64 = 2.5;
/// Largest message the primary provider accepts.
pub const MAX_MESSAGE_SIZE: &str = "3MB";

pub fn supabase(usage: &RealtimeUsage) -> Money {
    let extra_connections = (usage.concurrent_connections - INCLUDED_CONNECTIONS).max(0.0)
        / CONNECTION_BLOCK
        * CONNECTION_BLOCK_PRICE;
    let extra_messages = (usage.messages_per_month - INCLUDED_MESSAGES).max(0.0) / MESSAGE_BLOCK
        * MESSAGE_BLOCK_PRICE;
    Money::from_amount(extra_connections + extra_messages)
}

/// Messages are modelled as an even split of database reads and writes.
pub fn firebase(usage: &RealtimeUsage) -> Money {
    let reads = (usage.messages_per_month * 0.5) / 100_000.0 * 0.06;
    let writes = (usage.messages_per_month * 0.5) / 100_000.0 * 0.18;
    Money::from_amount(reads + writes)
}

pub fn aws(usage: &RealtimeUsage) -> Money {
    let operations = (usage.messages_per_month / 1_000_000.0) * 4.0;
    let connections = usage.concurrent_connections * 0.002;
    Money::from_amount(operations + connections)
}

pub fn costs(usage: &RealtimeUsage) -> ServiceCosts {
    ServiceCosts {
        supabase: supabase(usage),
        firebase: firebase(usage),
        aws: aws(usage),
    }
}
