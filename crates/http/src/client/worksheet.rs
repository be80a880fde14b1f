//! Profile and worksheet generation client methods

use super::{ClientError, WorksheetClient};
use reqwest::Method;
use worksheet_core::{UserProfile, WorksheetRequest, WorksheetResult};

impl WorksheetClient {
    /// Fetch the signed-in user's profile
    pub async fn fetch_me(&self) -> Result<UserProfile, ClientError> {
        let request = self.request(Method::GET, "/me");
        self.execute(request).await
    }

    /// Generate a worksheet, spending credits server-side
    pub async fn generate_worksheet(
        &self,
        worksheet: &WorksheetRequest,
    ) -> Result<WorksheetResult, ClientError> {
        let request = self
            .request(Method::POST, "/worksheet/generate")
            .json(worksheet);
        self.execute(request).await
    }
}
