// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names and defaults

// Port Configuration
pub const QNA_API_PORT: &str = "QNA_API_PORT";
pub const PORT: &str = "PORT"; // Legacy
pub const QNA_API_HOST: &str = "QNA_API_HOST";

// CORS Configuration
pub const QNA_CORS_ORIGIN: &str = "QNA_CORS_ORIGIN";
pub const CORS_ORIGIN: &str = "CORS_ORIGIN"; // Legacy

// Database Configuration
pub const QNA_DATABASE_PATH: &str = "QNA_DATABASE_PATH";
pub const QNA_DB_MAX_CONNECTIONS: &str = "QNA_DB_MAX_CONNECTIONS";

// Timeouts
pub const QNA_QUERY_TIMEOUT_SECS: &str = "QNA_QUERY_TIMEOUT_SECS";
pub const QNA_REQUEST_TIMEOUT_SECS: &str = "QNA_REQUEST_TIMEOUT_SECS";

// Defaults
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Directory name under the user's home holding the database
pub const QNA_DIR_NAME: &str = ".qna";
pub const DATABASE_FILE_NAME: &str = "qna.db";
