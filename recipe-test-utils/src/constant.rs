pub static TEST_USER_EMAIL: &str = "user1@gmail.com";
pub static TEST_USER_TWO_EMAIL: &str = "user@gmail.com";

/// Placeholder stored for fixture users; it is not a valid Argon2 hash, so fixture users
/// cannot log in with a password. Create users through the user service when a login is
/// needed.
pub static TEST_PASSWORD_HASH: &str = "fixture-password-hash";
