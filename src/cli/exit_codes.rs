//! exit codes for condex commands
//!
//! these follow the grep convention: 0 = yes/success, 1 = no, 2 = the
//! input itself was unusable. scripts can branch on the distinction.

/// command completed successfully; for `eval`, the condition held
pub const SUCCESS: i32 = 0;

/// the condition evaluated to false (or no fuzzy match was found)
pub const CONDITION_FALSE: i32 = 1;

/// malformed input (bad JSON, unusable arguments)
pub const INVALID_INPUT: i32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let codes = [SUCCESS, CONDITION_FALSE, INVALID_INPUT];
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
