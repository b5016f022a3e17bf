//! Quick Start Example
//!
//! Resolves a shipping quote for a handful of orders. Each order goes through
//! a pipeline that stops at the first missing or invalid piece of data.

use std::collections::HashMap;

use returns::prelude::*;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Debug)]
struct Order {
    id: u32,
    region: &'static str,
    weight: &'static str,
}

fn rates() -> HashMap<&'static str, u32> {
    HashMap::from([("eu", 4), ("us", 6)])
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let orders = [
        Order { id: 1, region: "eu", weight: "3" },
        Order { id: 2, region: "mars", weight: "1" },
        Order { id: 3, region: "us", weight: "heavy" },
    ];

    let rates = rates();
    let rate_for = absence_to_presence(|region: &str| rates.get(region).copied());
    let parse_weight = fault_to_outcome(|raw: &str| raw.parse::<u32>());

    let quote = pipeline(|order: &Order| {
        let rate = rate_for(order.region)
            .map_value(Outcome::Success)
            .value_or(Outcome::Failure(format!("no rate for region {}", order.region)))
            .unwrap();
        let weight = parse_weight(order.weight)
            .alt(|err| format!("bad weight {:?}: {}", order.weight, err))
            .unwrap();
        Outcome::<u32, String>::Success(rate * weight)
    });

    for order in &orders {
        match quote(order) {
            Outcome::Success(cents) => info!("✅ Order {}: {} cents", order.id, cents),
            Outcome::Failure(reason) => info!("❌ Order {}: {}", order.id, reason),
        }
    }

    let quoted = orders
        .iter()
        .filter(|order| is_successful(&quote(*order)))
        .count();
    info!("📊 {} of {} orders quoted", quoted, orders.len());

    Ok(())
}
