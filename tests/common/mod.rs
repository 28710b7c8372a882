#![allow(dead_code)]

use rust_decimal::Decimal;

use investpro_core::app::AppCore;
use investpro_core::ledger::WalletLedger;
use investpro_core::market::MarketSimulator;
use investpro_core::session::MemorySession;

/// Core with the demo ledger fixtures and an in-memory session slot
pub fn demo_core() -> AppCore<MemorySession> {
    AppCore::new(MemorySession::new())
}

/// Core with an empty ledger at the given opening balance and a seeded
/// market simulator, for deterministic tests
pub fn core_with_balance(opening: Decimal) -> AppCore<MemorySession> {
    AppCore::with_parts(
        MemorySession::new(),
        WalletLedger::new(opening),
        MarketSimulator::with_seed(42),
    )
}

/// Check the derived-count invariant: unread_count must equal the number of
/// notifications with read == false
pub fn assert_unread_consistent(core: &AppCore<MemorySession>) {
    let actual = core.notifications().iter().filter(|n| !n.read).count();
    assert_eq!(
        core.unread_count(),
        actual,
        "unread_count out of sync with notification list"
    );
}
