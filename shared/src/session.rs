//! Session flag and the placeholder credential check.
//!
//! The municipality portal is display-gated by a single boolean persisted in
//! localStorage. The fixed credential pair is a development placeholder, not
//! an authentication system; a real collaborator would replace
//! [`verify_credentials`] wholesale.

/// localStorage key holding the session flag.
pub const STORAGE_AUTH_KEY: &str = "isAuthenticated";

/// Value stored under [`STORAGE_AUTH_KEY`] when a session is active.
pub const STORAGE_AUTH_VALUE: &str = "true";

const USERNAME: &str = "admin";
const PASSWORD: &str = "admin123";

/// Username is compared trimmed and case-insensitively; the password must
/// match exactly.
pub fn verify_credentials(username: &str, password: &str) -> bool {
    username.trim().eq_ignore_ascii_case(USERNAME) && password == PASSWORD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_fixed_pair() {
        assert!(verify_credentials("admin", "admin123"));
    }

    #[test]
    fn username_is_trimmed_and_case_insensitive() {
        assert!(verify_credentials("  Admin  ", "admin123"));
        assert!(verify_credentials("ADMIN", "admin123"));
    }

    #[test]
    fn password_is_exact() {
        assert!(!verify_credentials("admin", "Admin123"));
        assert!(!verify_credentials("admin", " admin123"));
        assert!(!verify_credentials("admin", "admin1234"));
    }

    #[test]
    fn rejects_everything_else() {
        assert!(!verify_credentials("", ""));
        assert!(!verify_credentials("root", "admin123"));
        assert!(!verify_credentials("admin", ""));
    }
}
