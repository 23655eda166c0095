//! Auth-failure handling for role-gated admin pages.
//!
//! Token issuance and session storage belong to the surrounding shell; the
//! only piece in scope here is what happens when a page-entry API call comes
//! back unauthorized: the stored credential is cleared and the user is sent
//! to the login route for their role. Never retried.

use tracing::warn;

use sevadash_core::Error;

/// Admin role gating a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    SuperAdmin,
    DepartmentAdmin,
}

/// Login route for a role.
pub fn login_route(role: Role) -> &'static str {
    match role {
        Role::SuperAdmin => "/admin/login",
        Role::DepartmentAdmin => "/department/login",
    }
}

/// Wherever the shell keeps its credential.
pub trait CredentialStore {
    fn clear(&mut self);
}

/// Handle a fatal page-entry failure: clear the credential and return the
/// login route to redirect to. Returns `None` for non-auth errors, which are
/// banner material instead.
pub fn handle_auth_failure(
    error: &Error,
    credentials: &mut dyn CredentialStore,
    role: Role,
) -> Option<&'static str> {
    if !error.is_fatal_for_page() {
        return None;
    }
    warn!(
        subsystem = "client",
        component = "auth",
        error = %error,
        "Authentication failed, clearing credential"
    );
    credentials.clear();
    Some(login_route(role))
}
