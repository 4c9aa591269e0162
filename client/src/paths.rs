//! Route paths shared by the router, session navigation, and route guards.

#[cfg(test)]
#[path = "paths_test.rs"]
mod paths_test;

use crate::net::types::Role;

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const ADMIN_HOME: &str = "/admin";
pub const ADMIN_APPROVALS: &str = "/admin/approvals";
pub const STYLER_HOME: &str = "/styler";
pub const PARTNER_HOME: &str = "/partner";
pub const OCCASIONS: &str = "/occasions";
pub const PROFILE: &str = "/profile";

pub const ADMIN_ROLES: &[Role] = &[Role::Admin];
pub const SHOPPER_ROLES: &[Role] = &[Role::Styler, Role::Partner];
pub const PARTNER_ROLES: &[Role] = &[Role::Partner];

/// Roles admitted to a protected path; `None` for public paths.
pub fn roles_for(path: &str) -> Option<&'static [Role]> {
    match path {
        ADMIN_HOME | ADMIN_APPROVALS => Some(ADMIN_ROLES),
        STYLER_HOME | OCCASIONS => Some(SHOPPER_ROLES),
        PARTNER_HOME => Some(PARTNER_ROLES),
        PROFILE => Some(Role::ALL),
        _ => None,
    }
}
