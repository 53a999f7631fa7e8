pub mod config;
pub mod delivery;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod formatter;
pub mod model;
pub mod pipelines;

use log::{error, info};

pub use config::BotConfig;
pub use delivery::{ConsoleSender, DeliveryOptions, MessageSender, Recipient, WebhookSender};
pub use error::{error_chain, EntryError, MealPlanError};
pub use formatter::icon_legend;
pub use model::{Meal, MealPlan, Price};
pub use pipelines::{build_meal_plan_message, parse_meal_plan};

/// Fetch the meal plan page at `url` and build the message for it.
///
/// # Example
/// ```no_run
/// # async fn run() -> Result<(), mealplan_bot::MealPlanError> {
/// let message = mealplan_bot::fetch_meal_plan("https://example.com/speiseplan", false).await?;
/// println!("{message}");
/// # Ok(())
/// # }
/// ```
pub async fn fetch_meal_plan(url: &str, show_allergies: bool) -> Result<String, MealPlanError> {
    pipelines::url::process(url, show_allergies, None).await
}

/// Outcome of [`run`] when nothing went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The plan was handed to the sender
    Sent,
    /// No target group is configured; the plan was only built
    NotSent,
    /// There are no meals today; nothing was sent
    Empty,
}

/// One complete run: fetch, format, and deliver to the target group.
pub async fn run(
    config: &BotConfig,
    sender: &dyn MessageSender,
) -> Result<RunOutcome, MealPlanError> {
    let url = config
        .page_url
        .as_deref()
        .ok_or(MealPlanError::MissingConfig("PAGE_URL"))?;

    let message = pipelines::url::process(url, config.show_allergies, Some(config.timeout())).await?;
    if message.is_empty() {
        info!("No meals on the plan today");
        return Ok(RunOutcome::Empty);
    }

    let Some(group) = config.target_group_id.as_deref() else {
        info!("TARGET_GROUP_ID not set, not sending the meal plan");
        return Ok(RunOutcome::NotSent);
    };

    sender
        .send(
            &Recipient::group(group),
            &message,
            &config.delivery.plan_options(),
        )
        .await?;
    info!("Sent meal plan to group via {}", sender.sender_name());
    Ok(RunOutcome::Sent)
}

/// Log a failed run and, when an error contact is configured, send it the details.
///
/// Never fails: a problem while reporting is only logged.
pub async fn report_failure(config: &BotConfig, sender: &dyn MessageSender, err: &MealPlanError) {
    let details = error_chain(err);
    error!("Meal plan run failed: {details}");

    let Some(contact) = config.error_contact.as_deref() else {
        return;
    };
    let recipient = Recipient::contact(contact);
    if let Err(report_err) = sender
        .send(&recipient, &details, &config.delivery.error_options())
        .await
    {
        error!(
            "Could not report failure to {}: {}",
            recipient,
            error_chain(&report_err)
        );
    }
}
