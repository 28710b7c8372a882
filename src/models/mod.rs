pub mod notification;
pub mod transaction;
pub mod user;

pub use notification::{Notification, NotificationKind, Priority};
pub use transaction::{Transaction, TransactionKind};
pub use user::User;
