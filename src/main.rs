use std::time::Duration;

use anyhow::{Context, Result};
use rust_decimal::Decimal;

use investpro_core::ledger::format_currency;
use investpro_core::models::TransactionKind;
use investpro_core::{AppCore, FileSession, MarketTicker, SharedCore};

/// Scripted demo driver standing in for the presentation layer: restores or
/// opens a session, runs a few wallet operations, and lets the market ticker
/// run briefly before tearing it down.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let backend = FileSession::new(std::env::temp_dir());
    let mut core = AppCore::new(backend);

    let user = match core.restore_session().context("Failed to read session slot")? {
        Some(user) => {
            println!("Restored session for {}", user.name);
            user
        }
        None => {
            let user = core
                .login("demo@investpro.io", "hunter2")
                .context("Failed to establish session")?;
            println!("Logged in as {}", user.name);
            user
        }
    };
    println!("Account created {}", user.created_at.format("%Y-%m-%d"));
    println!("Opening balance: {}", format_currency(core.balance()));

    core.apply_transaction(
        TransactionKind::Deposit,
        Decimal::new(250_00, 2),
        "paypal",
        "",
    )
    .context("Deposit rejected")?;

    // Deliberately overdraw to show the failure path
    if let Err(e) = core.apply_transaction(
        TransactionKind::Withdrawal,
        Decimal::new(1_000_000_00, 2),
        "bank",
        "",
    ) {
        println!("Withdrawal rejected: {e}");
    }

    println!("Balance after wallet ops: {}", format_currency(core.balance()));

    // Hand the core to the shared handle and let the market simulation tick
    // for a moment (demo period, not the 15s production one)
    let shared = SharedCore::new(core);
    let ticker = MarketTicker::spawn(shared.clone_handle(), Duration::from_millis(50));
    tokio::time::sleep(Duration::from_millis(400)).await;
    ticker.stop();

    let core = shared.read().await;
    println!(
        "{} notifications ({} unread):",
        core.notifications().len(),
        core.unread_count()
    );
    for notification in core.notifications() {
        println!(
            "  [{:?}] {} - {}",
            notification.priority, notification.title, notification.message
        );
    }

    Ok(())
}
