mod auth;
mod calendar;
mod generator;
mod history;
mod layout;
mod privacy;

pub use auth::{AuthCallbackPage, AuthErrorPage, LoginPage};
pub use calendar::CalendarPage;
pub use generator::GeneratorPage;
pub use history::HistoryPage;
pub use layout::ProtectedLayout;
pub use privacy::PrivacyPage;
pub(crate) use privacy::PRIVACY_PATH;
