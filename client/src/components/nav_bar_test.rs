use super::*;

#[test]
fn every_link_is_reachable_by_its_role() {
    for role in Role::ALL {
        for (path, label) in nav_links(*role) {
            let roles = paths::roles_for(path).unwrap_or_default();
            assert!(roles.contains(role), "{role:?} cannot open {label} ({path})");
        }
    }
}

#[test]
fn admin_sees_approvals() {
    assert!(nav_links(Role::Admin).iter().any(|(path, _)| *path == paths::ADMIN_APPROVALS));
}

#[test]
fn only_partner_sees_catalog() {
    assert!(nav_links(Role::Partner).iter().any(|(path, _)| *path == paths::PARTNER_HOME));
    assert!(!nav_links(Role::Styler).iter().any(|(path, _)| *path == paths::PARTNER_HOME));
}
