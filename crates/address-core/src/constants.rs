/// Address parsing constants

/// Path of the remote parse endpoint, appended to the configured base URL
pub const REMOTE_PARSE_PATH: &str = "/api/addresses/parse";

/// Minimum number of recognized fields for a parse to count as successful
/// Used by the CLI summary and by form callers deciding whether to auto-fill
pub const RECOGNITION_SUCCESS_THRESHOLD: usize = 4;
