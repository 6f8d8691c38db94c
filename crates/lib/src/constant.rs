use std::time::Duration;

// Node endpoints
pub const DEFAULT_TEST_NODE_URL: &str = "http://127.0.0.1:3000";
pub const TEST_NODE_URL_ENV: &str = "XPX_TEST_NODE_URL";
pub const BASE_URL_ENV: &str = "XPX_BASE_URL";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 90;

// Mock server
pub const MOCK_SERVER_LIFETIME: Duration = Duration::from_secs(5 * 60);
pub const MOCK_SERVER_HOST: [u8; 4] = [127, 0, 0, 1];
pub const MOCK_SERVER_WAKE_INTERVAL: Duration = Duration::from_millis(50);

// Mock router wire text
pub const BODY_PARAM: &str = "body";
pub const BODY_IS_EMPTY: &str = "body is empty";
pub const BAD_PARAMS_PREFIX: &str = "bad params - ";
pub const PARAMS_VALIDATE_ERROR_PREFIX: &str = "error during params validate - ";
pub const NOT_FOUND_SUFFIX: &str = "not found in mock routers";
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
pub const TEXT_PLAIN_UTF8: &str = "text/plain; charset=utf-8";

// Uint64 encoding
pub const UINT64_HEX_WIDTH: usize = 16;
