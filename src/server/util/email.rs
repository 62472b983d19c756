/// Normalize an email address for storage and lookup.
///
/// Surrounding whitespace is trimmed and the domain part is lowercased; the local part is
/// kept as entered since mail servers may treat it case-sensitively. Validation is left to
/// `CreateUserDto`, an input without `@` is only trimmed.
pub fn normalize_email(email: &str) -> String {
    let email = email.trim();

    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }
}
