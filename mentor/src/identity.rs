//! Visitor naming for the greeting turn.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

/// Display name from an email address: the local part with its first letter
/// uppercased. `priya.s@example.com` becomes `Priya.s`.
///
/// Returns `None` when there is no usable local part.
#[must_use]
pub fn display_name_from_email(email: &str) -> Option<String> {
    let local = email.trim().split('@').next().unwrap_or_default();
    let mut chars = local.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}
