//! Authentication API client methods

use super::{ClientError, WorksheetClient};
use reqwest::Method;
use worksheet_core::{Credentials, LoginResponse, RegisteredUser};

impl WorksheetClient {
    /// Create an account. The response carries no token; follow with [`login`](Self::login).
    pub async fn register(&self, credentials: &Credentials) -> Result<RegisteredUser, ClientError> {
        let request = self
            .request(Method::POST, "/auth/register")
            .json(credentials);
        self.execute(request).await
    }

    /// Exchange credentials for an access token
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ClientError> {
        let request = self.request(Method::POST, "/auth/login").json(credentials);
        self.execute(request).await
    }
}
