//! Well-known role name constants.
//!
//! These must match the seed data in `20250801000002_create_roles_table.sql`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

/// Email domain that grants the admin role at registration time.
pub const ADMIN_EMAIL_SUFFIX: &str = "@admin.com";
