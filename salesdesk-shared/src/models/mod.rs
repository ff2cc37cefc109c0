//! # Models
//!
//! Wire-level records and the role vocabulary shared by the Salesdesk apps.

pub mod auth;
pub mod privileges;
pub mod user;

pub use auth::AuthData;
pub use privileges::{PRIVILEGE_ROLE_RULES, PrivilegesResponse, Role, derive_roles};
pub use user::UserInfo;
