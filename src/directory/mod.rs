//! The user directory: a one-shot remote fetch, paginated display, per-user
//! detail view and local (session-scoped) deletion.

mod delete_endpoint;
mod detail_endpoint;
mod domain;
mod fetch;
mod store;
mod users_page;

pub use delete_endpoint::delete_user_endpoint;
pub use detail_endpoint::get_user_detail;
pub use domain::{Address, Company, Geo, User, UserId};
pub use fetch::{DEFAULT_USERS_URL, UserFetcher};
pub use store::UserDirectory;
pub use users_page::get_users_page;
