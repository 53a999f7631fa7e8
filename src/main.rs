use env_logger::Env;
use log::{debug, error, warn};
use std::env;

use mealplan_bot::{
    error_chain, icon_legend, report_failure, run, BotConfig, ConsoleSender, MealPlanError,
    MessageSender, WebhookSender,
};

const USAGE: &str = "Usage: mealplan-bot [--dry-run] [--show-allergies] [--legend]";

#[tokio::main]
async fn main() {
    // A missing .env file is fine, the variables may come from the environment
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut dry_run = false;
    let mut show_allergies = false;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--dry-run" => dry_run = true,
            "--show-allergies" => show_allergies = true,
            "--legend" => {
                println!("{}", icon_legend());
                return;
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                return;
            }
            other => warn!("Ignoring unknown argument {other:?}. {USAGE}"),
        }
    }

    let mut config = match BotConfig::load() {
        Ok(config) => config,
        Err(e) => {
            let fallback = BotConfig::fallback_from_env();
            let err = MealPlanError::from(e);
            match make_sender(&fallback, dry_run) {
                Ok(sender) => report_failure(&fallback, sender.as_ref(), &err).await,
                Err(sender_err) => {
                    error!("Could not create a sender: {}", error_chain(&sender_err));
                    report_failure(&fallback, &ConsoleSender, &err).await;
                }
            }
            return;
        }
    };
    config.show_allergies |= show_allergies;
    if dry_run {
        config.target_group_id.get_or_insert_with(|| "dry-run".to_string());
    }

    let sender = match make_sender(&config, dry_run) {
        Ok(sender) => sender,
        Err(e) => {
            report_failure(&config, &ConsoleSender, &e).await;
            return;
        }
    };

    match run(&config, sender.as_ref()).await {
        Ok(outcome) => debug!("Run finished: {outcome:?}"),
        Err(e) => report_failure(&config, sender.as_ref(), &e).await,
    }
}

fn make_sender(config: &BotConfig, dry_run: bool) -> Result<Box<dyn MessageSender>, MealPlanError> {
    if dry_run {
        return Ok(Box::new(ConsoleSender));
    }
    match WebhookSender::from_config(&config.delivery, config.timeout())? {
        Some(webhook) => Ok(Box::new(webhook)),
        None => {
            if config.target_group_id.is_some() {
                warn!("No delivery gateway configured, printing the meal plan instead");
            }
            Ok(Box::new(ConsoleSender))
        }
    }
}
