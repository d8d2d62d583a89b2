//! Password strength rules.

/// Minimum password length in UTF-16 code units.
pub const MIN_LENGTH: usize = 8;

/// Characters accepted by the symbol rule.
pub const SYMBOLS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', ',', '.', '?', '"', ':', '{', '}', '|', '<',
    '>',
];

/// One of the three independent password strength rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthRule {
    /// At least [`MIN_LENGTH`] UTF-16 code units.
    Length,
    /// At least one ASCII uppercase letter.
    Uppercase,
    /// At least one character from [`SYMBOLS`].
    Symbol,
}

impl StrengthRule {
    /// All rules, in display order.
    pub const ALL: [Self; 3] = [Self::Length, Self::Uppercase, Self::Symbol];

    /// Get the requirement text shown next to the indicator.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Length => "At least 8 characters",
            Self::Uppercase => "Contains uppercase letter",
            Self::Symbol => "Contains symbol",
        }
    }

    /// Check a single rule against a password.
    #[must_use]
    pub fn check(&self, password: &str) -> bool {
        match self {
            Self::Length => password.encode_utf16().count() >= MIN_LENGTH,
            Self::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Self::Symbol => password.contains(SYMBOLS),
        }
    }
}

impl std::fmt::Display for StrengthRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which strength rules a password satisfies.
///
/// Recomputed from scratch on every password change; carries no history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordValidationResult {
    /// The password is long enough.
    pub length: bool,
    /// The password contains an uppercase letter.
    pub uppercase: bool,
    /// The password contains a symbol.
    pub symbol: bool,
}

impl PasswordValidationResult {
    /// Returns true if every rule is satisfied.
    #[must_use]
    pub const fn is_satisfied(&self) -> bool {
        self.length && self.uppercase && self.symbol
    }

    /// Get the outcome of a single rule.
    #[must_use]
    pub const fn get(&self, rule: StrengthRule) -> bool {
        match rule {
            StrengthRule::Length => self.length,
            StrengthRule::Uppercase => self.uppercase,
            StrengthRule::Symbol => self.symbol,
        }
    }

    /// Iterate over `(rule, satisfied)` pairs in display order.
    pub fn rules(&self) -> impl Iterator<Item = (StrengthRule, bool)> + '_ {
        StrengthRule::ALL.into_iter().map(|rule| (rule, self.get(rule)))
    }

    /// Iterate over the rules that are not satisfied.
    pub fn unmet(&self) -> impl Iterator<Item = StrengthRule> + '_ {
        self.rules()
            .filter_map(|(rule, satisfied)| (!satisfied).then_some(rule))
    }
}

/// Evaluates passwords against the strength rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordPolicy;

impl PasswordPolicy {
    /// Classify a password against every rule.
    ///
    /// Any string, including the empty one, produces a result.
    #[must_use]
    pub fn evaluate(password: &str) -> PasswordValidationResult {
        PasswordValidationResult {
            length: StrengthRule::Length.check(password),
            uppercase: StrengthRule::Uppercase.check(password),
            symbol: StrengthRule::Symbol.check(password),
        }
    }

    /// Returns true if an evaluation passes the registration gate.
    #[must_use]
    pub const fn is_satisfied(result: &PasswordValidationResult) -> bool {
        result.is_satisfied()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::redundant_clone,
    clippy::manual_string_new,
    clippy::needless_collect,
    clippy::fn_params_excessive_bools
)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_password() {
        let result = PasswordPolicy::evaluate("");
        assert_eq!(result, PasswordValidationResult::default());
        assert!(!PasswordPolicy::is_satisfied(&result));
    }

    #[test]
    fn test_length_boundary() {
        assert!(!PasswordPolicy::evaluate("abcdefg").length);
        assert!(PasswordPolicy::evaluate("abcdefgh").length);
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // 7 units, 14 bytes
        assert!(!PasswordPolicy::evaluate("ééééééé").length);
        assert!(PasswordPolicy::evaluate("éééééééé").length);
        // Astral characters take two units each
        assert!(!PasswordPolicy::evaluate("😀😀😀").length);
        assert!(PasswordPolicy::evaluate("😀😀😀😀").length);
        assert!(PasswordPolicy::evaluate("Abc😀😀😀").length);
    }

    #[test]
    fn test_uppercase_is_ascii_only() {
        assert!(PasswordPolicy::evaluate("abcZ").uppercase);
        assert!(!PasswordPolicy::evaluate("abc").uppercase);
        assert!(!PasswordPolicy::evaluate("ÄÖÜ").uppercase);
    }

    #[test]
    fn test_every_symbol_counts() {
        for symbol in SYMBOLS {
            let password = format!("abc{symbol}");
            assert!(
                PasswordPolicy::evaluate(&password).symbol,
                "{symbol} should count as a symbol"
            );
        }
    }

    #[test]
    fn test_characters_outside_symbol_set() {
        for password in ["abc-def", "abc_def", "abc+def", "abc def", "abc~", "[x]", "a;b", "'"] {
            assert!(
                !PasswordPolicy::evaluate(password).symbol,
                "{password:?} should not count as a symbol"
            );
        }
    }

    #[test]
    fn test_strong_password() {
        let result = PasswordPolicy::evaluate("Abc12345!");
        assert!(result.length && result.uppercase && result.symbol);
        assert!(PasswordPolicy::is_satisfied(&result));
        assert_eq!(result.unmet().count(), 0);
    }

    #[test]
    fn test_default_account_password_is_strong() {
        assert!(PasswordPolicy::evaluate("Demo@123").is_satisfied());
    }

    #[test]
    fn test_rules_in_display_order() {
        let result = PasswordPolicy::evaluate("ABC");
        let rules: Vec<_> = result.rules().collect();
        assert_eq!(
            rules,
            vec![
                (StrengthRule::Length, false),
                (StrengthRule::Uppercase, true),
                (StrengthRule::Symbol, false),
            ]
        );
        let unmet: Vec<_> = result.unmet().collect();
        assert_eq!(unmet, vec![StrengthRule::Length, StrengthRule::Symbol]);
    }

    #[test]
    fn test_rule_labels() {
        assert_eq!(StrengthRule::Length.label(), "At least 8 characters");
        assert_eq!(StrengthRule::Uppercase.label(), "Contains uppercase letter");
        assert_eq!(StrengthRule::Symbol.to_string(), "Contains symbol");
    }

    #[test]
    fn test_is_satisfied_truth_table() {
        for bits in 0u8..8 {
            let result = PasswordValidationResult {
                length: bits & 1 != 0,
                uppercase: bits & 2 != 0,
                symbol: bits & 4 != 0,
            };
            assert_eq!(PasswordPolicy::is_satisfied(&result), bits == 7);
        }
    }

    proptest! {
        #[test]
        fn prop_length_flag(password in "\\PC{0,16}") {
            let result = PasswordPolicy::evaluate(&password);
            prop_assert_eq!(result.length, password.encode_utf16().count() >= MIN_LENGTH);
        }

        #[test]
        fn prop_uppercase_flag(password in "\\PC{0,16}") {
            let result = PasswordPolicy::evaluate(&password);
            let has_upper = password.chars().any(|c| ('A'..='Z').contains(&c));
            prop_assert_eq!(result.uppercase, has_upper);
        }

        #[test]
        fn prop_symbol_flag(password in "\\PC{0,16}") {
            let result = PasswordPolicy::evaluate(&password);
            let has_symbol = password.chars().any(|c| SYMBOLS.contains(&c));
            prop_assert_eq!(result.symbol, has_symbol);
        }

        #[test]
        fn prop_satisfied_iff_all_flags(password in "\\PC{0,16}") {
            let result = PasswordPolicy::evaluate(&password);
            prop_assert_eq!(
                PasswordPolicy::is_satisfied(&result),
                result.length && result.uppercase && result.symbol
            );
        }
    }
}
