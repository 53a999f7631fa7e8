pub mod url;

use log::{debug, warn};
use scraper::Html;

use crate::error::MealPlanError;
use crate::extractors::{Extractor, SpeiseplanExtractor};
use crate::formatter::to_meal;
use crate::model::MealPlan;

/// Extract and normalize every meal block of a meal plan page.
///
/// Blocks that cannot be converted are logged and listed in
/// [`MealPlan::skipped`]; only a missing meal plan container is an error.
pub fn parse_meal_plan(markup: &str, show_allergies: bool) -> Result<MealPlan, MealPlanError> {
    let document = Html::parse_document(markup);
    let entries = SpeiseplanExtractor.extract(&document)?;

    let mut plan = MealPlan::default();
    for (index, entry) in entries.iter().enumerate() {
        match to_meal(entry, show_allergies) {
            Ok(meal) => plan.meals.push(meal),
            Err(e) => {
                warn!("Skipping meal block {}: {}", index + 1, e);
                plan.skipped.push((index, e));
            }
        }
    }

    debug!(
        "Converted {} of {} meal blocks",
        plan.meals.len(),
        entries.len()
    );
    Ok(plan)
}

/// Build the message body for a meal plan page.
///
/// Returns an empty string when the page has no usable meals.
pub fn build_meal_plan_message(
    markup: &str,
    show_allergies: bool,
) -> Result<String, MealPlanError> {
    Ok(parse_meal_plan(markup, show_allergies)?.to_message())
}
