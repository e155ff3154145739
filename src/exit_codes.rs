//! Exit code constants for the leafgen CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, malformed variables)
//! - 2: Template failure (unknown template key)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or malformed variable input.
pub const USER_ERROR: i32 = 1;

/// Template failure: the requested template key is not in the library.
pub const TEMPLATE_FAILURE: i32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, TEMPLATE_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
