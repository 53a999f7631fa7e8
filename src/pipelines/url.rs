use crate::error::MealPlanError;
use crate::fetchers::RequestFetcher;
use crate::pipelines::build_meal_plan_message;
use log::info;
use std::time::Duration;

/// Fetch a meal plan page and build its message
///
/// This pipeline:
/// 1. Fetches the page using RequestFetcher
/// 2. Extracts the meal blocks of the active day
/// 3. Normalizes and renders every usable block
///
/// # Arguments
/// * `url` - Address of the meal plan page
/// * `show_allergies` - Keep the additive/allergen codes in descriptions
/// * `timeout` - Request timeout, 30 seconds when `None`
///
/// # Returns
/// * `Ok(String)` - The message body, empty when there are no meals today
/// * `Err(...)` - If the page could not be fetched or has an unexpected layout
pub async fn process(
    url: &str,
    show_allergies: bool,
    timeout: Option<Duration>,
) -> Result<String, MealPlanError> {
    let fetcher = RequestFetcher::new(timeout)?;
    let markup = fetcher.fetch(url).await?;
    info!("Fetched {} bytes from {}", markup.len(), url);

    build_meal_plan_message(&markup, show_allergies)
}
