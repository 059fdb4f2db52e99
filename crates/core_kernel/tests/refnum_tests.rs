//! Property tests for reference-number generation

use core_kernel::refnum;
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    #[test]
    fn claim_numbers_always_match_pattern(_seed in 0u32..256) {
        let number = refnum::claim_number();
        prop_assert!(number.starts_with("CLM-"));
        let suffix = &number[4..];
        prop_assert_eq!(suffix.len(), 8);
        prop_assert!(suffix.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn policy_numbers_embed_the_type_code(code in "[A-Z]{4,8}") {
        let number = refnum::policy_number(&code);
        let expected_prefix = format!("POL-{code}-");
        prop_assert!(number.starts_with(&expected_prefix));
        prop_assert_eq!(number.len(), expected_prefix.len() + 6);
    }
}

#[test]
fn test_collisions_are_rare_in_practice() {
    let mut seen = HashSet::new();
    for _ in 0..1000 {
        assert!(seen.insert(refnum::claim_number()));
    }
}
