pub mod app;
pub mod error;
pub mod ledger;
pub mod market;
pub mod models;
pub mod notifications;
pub mod router;
pub mod session;
pub mod shared;

pub use app::AppCore;
pub use error::{CoreError, Result};
pub use ledger::WalletLedger;
pub use market::{MarketSimulator, MarketTicker};
pub use notifications::{NotificationCenter, NotificationSettings};
pub use router::{DashboardTab, View, ViewRouter};
pub use session::{FileSession, MemorySession, SessionBackend, SessionStore};
pub use shared::SharedCore;
