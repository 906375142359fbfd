/// Error code registry for the utilities
///
/// Error codes are organized by category:
/// - 1000-1999: Input stream errors
/// - 2000-2999: Validation errors
/// - 3000-3999: Domain errors
/// - 4000-4999: Configuration errors
pub struct ErrorCode;

impl ErrorCode {
    // Input stream errors (1000-1999)
    pub const INPUT_GENERIC: u16 = 1000;
    pub const INPUT_CLOSED: u16 = 1001;
    pub const INPUT_READ_FAILED: u16 = 1002;
    pub const INPUT_ATTEMPTS_EXHAUSTED: u16 = 1003;

    // Validation errors (2000-2999)
    pub const VALIDATION_GENERIC: u16 = 2000;
    pub const VALIDATION_EMPTY_FIELD: u16 = 2001;
    pub const VALIDATION_INVALID_DATE: u16 = 2002;
    pub const VALIDATION_INVALID_NUMBER: u16 = 2003;

    // Domain errors (3000-3999)
    pub const DOMAIN_GENERIC: u16 = 3000;
    pub const DOMAIN_DIVIDE_BY_ZERO: u16 = 3001;
    pub const DOMAIN_UNKNOWN_OPERATION: u16 = 3002;
    pub const DOMAIN_USER_NOT_FOUND: u16 = 3003;

    // Configuration errors (4000-4999)
    pub const CONFIG_GENERIC: u16 = 4000;
    pub const CONFIG_NOT_FOUND: u16 = 4001;
    pub const CONFIG_PARSE_ERROR: u16 = 4002;
    pub const CONFIG_INVALID_VALUE: u16 = 4003;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        1000 => "Generic input error",
        1001 => "Input stream closed",
        1002 => "Failed to read from input stream",
        1003 => "Too many invalid answers to a prompt",

        2000 => "Generic validation error",
        2001 => "Required field is empty",
        2002 => "Date does not match YYYY-MM-DD",
        2003 => "Value is not a valid number",

        3000 => "Generic domain error",
        3001 => "Division by zero",
        3002 => "Unknown arithmetic operation",
        3003 => "Patient has no matching visits",

        4000 => "Generic configuration error",
        4001 => "Configuration file not found",
        4002 => "Failed to parse configuration",
        4003 => "Invalid value in configuration",

        _ => "Unknown error code",
    }
}
