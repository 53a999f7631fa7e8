use async_trait::async_trait;
use log::debug;
use std::io::Write;

use crate::delivery::{DeliveryOptions, MessageSender, Recipient};
use crate::error::MealPlanError;

/// Prints messages to stdout instead of sending them.
pub struct ConsoleSender;

#[async_trait]
impl MessageSender for ConsoleSender {
    fn sender_name(&self) -> &str {
        "console"
    }

    async fn send(
        &self,
        recipient: &Recipient,
        body: &str,
        _options: &DeliveryOptions,
    ) -> Result<(), MealPlanError> {
        debug!("Printing message for {} instead of sending", recipient);
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{body}")
            .and_then(|_| stdout.flush())
            .map_err(|e| MealPlanError::DeliveryError(format!("stdout: {e}")))
    }
}
