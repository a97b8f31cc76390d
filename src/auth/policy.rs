//! Privilege-tier capability mapping.
//!
//! Levels observed in production are 1 (read-only), 2 (editor), and
//! 3 (administrator). The mapping is total over `i32`: anything outside the
//! known tiers is non-privileged.

/// True when the tier may perform mutating operations.
#[must_use]
pub const fn can_mutate(privilege_level: i32) -> bool {
    matches!(privilege_level, 2 | 3)
}

/// True only for the administrator tier.
#[must_use]
pub const fn is_admin_only(privilege_level: i32) -> bool {
    privilege_level == 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_mutate_truth_table() {
        assert!(!can_mutate(1));
        assert!(can_mutate(2));
        assert!(can_mutate(3));
        assert!(!can_mutate(0));
        assert!(!can_mutate(-1));
        assert!(!can_mutate(99));
    }

    #[test]
    fn is_admin_only_truth_table() {
        assert!(!is_admin_only(1));
        assert!(!is_admin_only(2));
        assert!(is_admin_only(3));
        assert!(!is_admin_only(99));
    }
}
