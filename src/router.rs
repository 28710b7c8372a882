/// Top-level views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    Login,
    Signup,
    Dashboard,
}

/// Views nested inside the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Dashboard,
    Plans,
    Wallet,
    Portfolio,
    Transactions,
}

/// Finite selector over named views. Owns no data, only the active-view
/// pointer; transitions happen on explicit navigation or session changes
/// (login success routes to the dashboard, logout back to landing) and have
/// no other side effects.
pub struct ViewRouter {
    view: View,
    tab: DashboardTab,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self {
            view: View::Landing,
            tab: DashboardTab::Dashboard,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn dashboard_tab(&self) -> DashboardTab {
        self.tab
    }

    /// Navigate to a top-level view. Entering the dashboard resets the tab.
    pub fn goto(&mut self, view: View) {
        if view == View::Dashboard && self.view != View::Dashboard {
            self.tab = DashboardTab::Dashboard;
        }
        self.view = view;
    }

    /// Switch tabs inside the dashboard; ignored elsewhere
    pub fn set_tab(&mut self, tab: DashboardTab) {
        if self.view == View::Dashboard {
            self.tab = tab;
        } else {
            eprintln!("Warning: Ignoring tab change outside the dashboard");
        }
    }
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new()
    }
}
