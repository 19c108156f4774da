/// Error code registry for objkit
///
/// Error codes are organized by category:
/// - 1000-1999: Input errors
/// - 2000-2999: Transform errors
/// - 3000-3999: Configuration errors
pub struct ErrorCode;

impl ErrorCode {
    // Input errors (1000-1999)
    pub const INPUT_NOT_AN_OBJECT: u16 = 1001;
    pub const INPUT_SEQUENCE_ITEM_NOT_AN_OBJECT: u16 = 1002;

    // Transform errors (2000-2999)
    pub const TRANSFORM_FAILED: u16 = 2001;

    // Configuration errors (3000-3999)
    pub const CONFIG_PARSE_ERROR: u16 = 3001;
}

/// Get a human-readable description of an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        // Input errors
        1001 => "Argument is not an object",
        1002 => "Sequence item is not an object",

        // Transform errors
        2001 => "Value transform failed",

        // Configuration errors
        3001 => "Failed to parse configuration",

        _ => "Unknown error code",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_is_described() {
        let codes = [
            ErrorCode::INPUT_NOT_AN_OBJECT,
            ErrorCode::INPUT_SEQUENCE_ITEM_NOT_AN_OBJECT,
            ErrorCode::TRANSFORM_FAILED,
            ErrorCode::CONFIG_PARSE_ERROR,
        ];
        for code in codes {
            assert_ne!(describe_error_code(code), "Unknown error code", "code {code}");
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(describe_error_code(9999), "Unknown error code");
        // range bases are not codes of their own
        for base in [1000, 2000, 3000] {
            assert_eq!(describe_error_code(base), "Unknown error code");
        }
    }
}
