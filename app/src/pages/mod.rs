mod auth;
mod checkout;
mod dashboard;
mod home;
mod owner;
mod placeholder;
mod shop;

pub use auth::{Auth, AuthMode};
pub use checkout::Checkout;
pub use dashboard::Dashboard;
pub use home::Home;
pub use owner::OwnerDashboard;
pub use placeholder::Placeholder;
pub use shop::Shop;
