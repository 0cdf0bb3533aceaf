//! Demonstrates the tracing output of requisites validation
//!
//! Run with: cargo run --example tracing_demo --features tracing

use requisites::testing::samples;
use requisites::{validate, PartnerKind};

fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Starting tracing demo");

    // Accepted submissions are logged at TRACE
    for kind in PartnerKind::ALL {
        if let Err(e) = validate(kind, samples::for_kind(kind)) {
            tracing::error!(%kind, "sample rejected: {}", e);
        }
    }

    // Rejected submissions are logged at DEBUG with the reason
    let broken = samples::with(samples::legal_entity(), "kpp", "7707ab001");
    match validate(PartnerKind::Ooo, broken) {
        Ok(_) => tracing::error!("broken sample accepted"),
        Err(e) => tracing::info!(field = ?e.field(), "rejected as expected"),
    }
}
