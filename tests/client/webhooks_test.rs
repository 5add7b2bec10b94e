//! `/webhooks` wire format against the fake API.

use resend_provider::client::{CreateWebhookRequest, UpdateWebhookRequest};
use resend_provider::{create_client, EventType, WebhookStatus};
use serde_json::json;

use crate::common::FakeResend;

#[tokio::test]
async fn create_get_update_remove() {
    let fake = FakeResend::start().await;
    let client = create_client(&fake.config(), None).expect("client should build");

    let created = client
        .webhooks()
        .create(&CreateWebhookRequest {
            endpoint: "https://example.com/hook".to_owned(),
            events: vec![EventType::EmailSent, EventType::DomainCreated],
        })
        .await
        .expect("create should succeed");
    assert!(created.signing_secret.expose().starts_with("whsec_"));
    assert_eq!(
        fake.requests()[0].body,
        json!({
            "endpoint": "https://example.com/hook",
            "events": ["email.sent", "domain.created"],
        })
    );

    let fetched = client
        .webhooks()
        .get(&created.id)
        .await
        .expect("get should succeed");
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.status, WebhookStatus::Enabled);
    assert_eq!(
        fetched.events,
        vec![EventType::EmailSent, EventType::DomainCreated]
    );
    assert_eq!(fetched.signing_secret, created.signing_secret);

    let updated = client
        .webhooks()
        .update(
            &created.id,
            &UpdateWebhookRequest {
                endpoint: "https://example.com/other".to_owned(),
                events: vec![EventType::ContactDeleted],
                status: WebhookStatus::Disabled,
            },
        )
        .await
        .expect("update should succeed");
    assert_eq!(updated.id, created.id);

    let patch = fake
        .requests()
        .into_iter()
        .find(|r| r.method == "PATCH")
        .expect("a PATCH should be recorded");
    assert_eq!(patch.path, format!("/webhooks/{}", created.id));
    assert_eq!(
        patch.body,
        json!({
            "endpoint": "https://example.com/other",
            "events": ["contact.deleted"],
            "status": "disabled",
        })
    );

    let listed = client.webhooks().list().await.expect("list should succeed");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].endpoint, "https://example.com/other");

    client
        .webhooks()
        .remove(&created.id)
        .await
        .expect("remove should succeed");
    assert!(fake.webhook(&created.id).is_none());
}

#[tokio::test]
async fn get_missing_webhook_is_not_found() {
    let fake = FakeResend::start().await;
    let client = create_client(&fake.config(), None).expect("client should build");

    let err = client
        .webhooks()
        .get("wh_missing")
        .await
        .expect_err("get should fail");
    assert_eq!(err.name, "not_found");
    assert_eq!(err.status_code, Some(404));
    assert_eq!(err.message, "Webhook not found");
}
