//! Password strength policy.
//!
//! Each rule is checked and reported on its own, so a form can show one
//! indicator per rule while the password is typed.

mod rules;

pub use rules::{MIN_LENGTH, PasswordPolicy, PasswordValidationResult, SYMBOLS, StrengthRule};
