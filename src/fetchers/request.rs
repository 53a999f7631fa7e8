use crate::error::MealPlanError;
use reqwest::Client;
use std::time::Duration;

pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(timeout: Option<Duration>) -> Result<Self, MealPlanError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (compatible; MealplanBot/0.3)")
            .build()?;

        Ok(Self { client })
    }

    /// GET `url` and return its body; non-2xx responses are errors.
    pub async fn fetch(&self, url: &str) -> Result<String, MealPlanError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let html = response.text().await?;
        Ok(html)
    }
}
