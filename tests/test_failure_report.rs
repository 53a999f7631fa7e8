use mealplan_bot::config::DeliveryConfig;
use mealplan_bot::{report_failure, BotConfig, MealPlanError, WebhookSender};

fn config_with_contact(contact: Option<&str>) -> BotConfig {
    BotConfig {
        error_contact: contact.map(String::from),
        delivery: DeliveryConfig {
            error_delay_seconds: 0,
            retry_wait_seconds: 0,
            ..DeliveryConfig::default()
        },
        ..BotConfig::default()
    }
}

#[tokio::test]
async fn test_failure_is_sent_to_error_contact() {
    let mut server = mockito::Server::new_async().await;
    let gateway = server
        .mock("POST", "/messages")
        .match_header("connection", "close")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "recipient": "+491701234567",
            "kind": "contact",
            "message": "Unexpected page structure: no div.contents_aktiv element on the page",
        })))
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let sender = WebhookSender::with_base_url(server.url(), None);
    let err = MealPlanError::StructureError("no div.contents_aktiv element on the page".to_string());
    report_failure(&config_with_contact(Some(" +491701234567 ")), &sender, &err).await;

    gateway.assert_async().await;
}

#[tokio::test]
async fn test_no_contact_only_logs() {
    let mut server = mockito::Server::new_async().await;
    let gateway = server
        .mock("POST", "/messages")
        .expect(0)
        .create_async()
        .await;

    let sender = WebhookSender::with_base_url(server.url(), None);
    let err = MealPlanError::MissingConfig("PAGE_URL");
    report_failure(&config_with_contact(None), &sender, &err).await;

    gateway.assert_async().await;
}

#[tokio::test]
async fn test_failing_report_is_swallowed() {
    let mut server = mockito::Server::new_async().await;
    let gateway = server
        .mock("POST", "/messages")
        .with_status(500)
        .expect(2)
        .create_async()
        .await;

    let sender = WebhookSender::with_base_url(server.url(), None);
    let err = MealPlanError::DeliveryError("gateway answered 500".to_string());
    // must return normally
    report_failure(&config_with_contact(Some("+4917")), &sender, &err).await;

    gateway.assert_async().await;
}
