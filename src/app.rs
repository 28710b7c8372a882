use rust_decimal::Decimal;

use crate::error::{CoreError, Result};
use crate::ledger::WalletLedger;
use crate::market::MarketSimulator;
use crate::models::{Notification, NotificationKind, Priority, Transaction, TransactionKind, User};
use crate::notifications::{NotificationCenter, NotificationSettings};
use crate::router::{DashboardTab, View, ViewRouter};
use crate::session::{SessionBackend, SessionStore};

/// Application core: the session store, wallet ledger, notification center
/// and view router behind one command API.
///
/// The presentation layer invokes commands and reads snapshots; all state
/// transitions run synchronously in the calling context. Ledger outcomes are
/// translated into the notifications the user sees, so a rejected withdrawal
/// yields exactly one high-priority failure notification and a successful
/// operation exactly one medium-priority summary.
pub struct AppCore<S: SessionBackend> {
    session: SessionStore<S>,
    ledger: WalletLedger,
    notifications: NotificationCenter,
    market: MarketSimulator,
    router: ViewRouter,
}

impl<S: SessionBackend> AppCore<S> {
    /// Core booted with the demo ledger fixtures
    pub fn new(backend: S) -> Self {
        Self::with_parts(backend, WalletLedger::with_demo_data(), MarketSimulator::new())
    }

    /// Core with explicit ledger and simulator, for tests and custom wiring
    pub fn with_parts(backend: S, ledger: WalletLedger, market: MarketSimulator) -> Self {
        Self {
            session: SessionStore::new(backend),
            ledger,
            notifications: NotificationCenter::new(),
            market,
            router: ViewRouter::new(),
        }
    }

    // --- session commands ---

    /// Simulated login: always succeeds, persists the fabricated user,
    /// routes to the dashboard and greets
    pub fn login(&mut self, email: &str, password: &str) -> Result<User> {
        let user = self.session.login(email, password)?.clone();
        self.enter_dashboard(&user);
        Ok(user)
    }

    /// Simulated signup with the supplied profile details
    pub fn signup(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        phone: Option<String>,
    ) -> Result<User> {
        let user = self.session.signup(name, email, password, phone)?.clone();
        self.enter_dashboard(&user);
        Ok(user)
    }

    /// Cold-start restore from the durable slot; routes to the dashboard
    /// when a session exists
    pub fn restore_session(&mut self) -> Result<Option<User>> {
        let user = self.session.restore()?.cloned();
        if let Some(ref user) = user {
            self.enter_dashboard(user);
        }
        Ok(user)
    }

    /// Clear the session and return to the landing page
    pub fn logout(&mut self) -> Result<()> {
        self.session.logout()?;
        self.router.goto(View::Landing);
        Ok(())
    }

    fn enter_dashboard(&mut self, user: &User) {
        self.router.goto(View::Dashboard);
        self.notifications.push(
            NotificationKind::System,
            format!("Welcome {}!", user.name),
            "Your InvestPro account is now active. Start exploring our investment plans!",
            Priority::Medium,
        );
    }

    // --- wallet commands ---

    /// Apply a wallet operation and notify on the outcome.
    ///
    /// On success the recorded transaction comes back and a medium-priority
    /// completion notification is pushed. Insufficient funds leaves the
    /// ledger untouched and pushes one high-priority failure notification.
    pub fn apply_transaction(
        &mut self,
        kind: TransactionKind,
        amount: Decimal,
        method: &str,
        note: &str,
    ) -> Result<Transaction> {
        match self.ledger.apply(kind, amount, method, note) {
            Ok(transaction) => {
                let verb = match kind {
                    TransactionKind::Deposit => "added to",
                    TransactionKind::Withdrawal => "withdrawn from",
                    TransactionKind::Investment => "invested from",
                };
                self.notifications.push(
                    NotificationKind::Transaction,
                    format!("{} Completed", kind.label()),
                    format!(
                        "${:.2} {} your account via {}",
                        amount, verb, transaction.method
                    ),
                    Priority::Medium,
                );
                Ok(transaction)
            }
            Err(e @ CoreError::InsufficientFunds { .. }) => {
                self.notifications.push(
                    NotificationKind::Transaction,
                    "Transaction Failed",
                    format!(
                        "{} of ${:.2} failed due to insufficient balance",
                        kind.label(),
                        amount
                    ),
                    Priority::High,
                );
                Err(e)
            }
            Err(e) => {
                eprintln!("Warning: Ignoring wallet operation: {e}");
                Err(e)
            }
        }
    }

    // --- plan and misc commands ---

    /// Record a plan selection. No real enrollment happens; the user just
    /// gets the confirmation notification.
    pub fn select_plan(&mut self, plan_name: &str) {
        self.notifications.push(
            NotificationKind::System,
            "Plan Selected",
            format!(
                "You've selected the {plan_name}. Our investment team will contact you within 24 hours."
            ),
            Priority::Medium,
        );
    }

    /// Simulated refresh of the transaction history
    pub fn refresh_transactions(&mut self) {
        self.notifications.push(
            NotificationKind::System,
            "Data Refreshed",
            "Your transaction history and account balance have been updated",
            Priority::Low,
        );
    }

    // --- notification commands ---

    pub fn mark_read(&mut self, id: &str) {
        self.notifications.mark_read(id);
    }

    pub fn mark_all_read(&mut self) {
        self.notifications.mark_all_read();
    }

    pub fn set_notification_settings(&mut self, settings: NotificationSettings) {
        self.notifications.set_settings(settings);
    }

    /// One tick of the market simulation, gated by the market-updates toggle
    pub fn market_tick(&mut self) {
        if !self.notifications.settings().market_updates {
            return;
        }
        if let Some(event) = self.market.sample() {
            self.notifications.push(
                NotificationKind::Market,
                event.title(),
                event.message(),
                event.priority(),
            );
        }
    }

    // --- navigation commands ---

    pub fn set_view(&mut self, view: View) {
        self.router.goto(view);
    }

    pub fn set_dashboard_tab(&mut self, tab: DashboardTab) {
        self.router.set_tab(tab);
    }

    // --- snapshots ---

    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    pub fn balance(&self) -> Decimal {
        self.ledger.balance()
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    pub fn total_by_kind(&self, kind: TransactionKind) -> Decimal {
        self.ledger.total_by_kind(kind)
    }

    pub fn notifications(&self) -> &[Notification] {
        self.notifications.notifications()
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.unread_count()
    }

    pub fn notification_settings(&self) -> NotificationSettings {
        self.notifications.settings()
    }

    pub fn current_view(&self) -> View {
        self.router.view()
    }

    pub fn dashboard_tab(&self) -> DashboardTab {
        self.router.dashboard_tab()
    }
}
