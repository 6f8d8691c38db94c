use reqwest::StatusCode;
use xpx_sdk::SdkError;

/// Raw status and body of a request made outside the SDK client
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RawResponse {
    pub async fn read(response: reqwest::Response) -> anyhow::Result<Self> {
        let status = response.status();
        let body = response.text().await?;
        Ok(Self { status, body })
    }

    pub fn assert_ok(&self, expected_body: &str) {
        assert_eq!(self.status, StatusCode::OK, "unexpected status, body: {}", self.body);
        assert_eq!(self.body, expected_body);
    }

    pub fn assert_bad_request(&self) -> &str {
        assert_eq!(self.status, StatusCode::BAD_REQUEST, "unexpected status, body: {}", self.body);
        &self.body
    }
}

/// Fails the test unless the client call succeeded; returns the body
pub fn validate_resp<T>(result: Result<T, SdkError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("Expected a 200 response, got: {e}"),
    }
}

/// Fails the test unless the client call was rejected with `status`; returns the error text
pub fn expect_status<T: std::fmt::Debug>(result: Result<T, SdkError>, status: u16) -> String {
    match result {
        Err(SdkError::HttpStatus { status: actual, body }) => {
            assert_eq!(actual, status, "unexpected status, body: {body}");
            body
        }
        other => panic!("Expected HTTP {status}, got: {other:?}"),
    }
}
