use axum::http::StatusCode;

mod helpers;

#[tokio::test]
async fn test_partial_submit_success_resets_form() -> anyhow::Result<()> {
    let gateway = helpers::TestGateway::succeed();
    let app = helpers::create_test_app(gateway.clone());

    let (resp, html) = helpers::post_contact(
        app,
        &[
            ("name", "Jane"),
            ("email", "jane@example.com"),
            ("message", "Hello"),
        ],
        true,
    )
    .await?;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(html.contains("Message sent successfully!"));
    assert!(html.contains("toast-success"));
    assert!(!html.contains("jane@example.com"));
    assert!(!html.contains("<html"), "fragment only");
    assert_eq!(gateway.calls(), 1);

    Ok(())
}

#[tokio::test]
async fn test_partial_submit_missing_fields() -> anyhow::Result<()> {
    let gateway = helpers::TestGateway::succeed();
    let app = helpers::create_test_app(gateway.clone());

    let (_, html) = helpers::post_contact(
        app,
        &[("name", "Jane"), ("email", "jane@example.com")],
        true,
    )
    .await?;

    assert!(html.contains("Please fill in all fields"));
    assert!(html.contains("toast-error"));
    assert!(html.contains(r#"value="Jane""#));
    assert_eq!(gateway.calls(), 0);

    Ok(())
}

#[tokio::test]
async fn test_partial_submit_invalid_email() -> anyhow::Result<()> {
    let gateway = helpers::TestGateway::succeed();
    let app = helpers::create_test_app(gateway.clone());

    let (_, html) = helpers::post_contact(
        app,
        &[
            ("name", "Jane"),
            ("email", "not-an-email"),
            ("message", "Hello"),
        ],
        true,
    )
    .await?;

    assert!(html.contains("Please enter a valid email address"));
    assert!(html.contains(r#"value="not-an-email""#));
    assert_eq!(gateway.calls(), 0);

    Ok(())
}

#[tokio::test]
async fn test_gateway_failure_keeps_values() -> anyhow::Result<()> {
    let gateway = helpers::TestGateway::fail();
    let app = helpers::create_test_app(gateway.clone());

    let (resp, html) = helpers::post_contact(
        app,
        &[
            ("name", "Jane"),
            ("email", "jane@example.com"),
            ("message", "Hello there"),
        ],
        true,
    )
    .await?;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(html.contains("Failed to send message. Please try again."));
    assert!(html.contains(r#"value="jane@example.com""#));
    assert!(html.contains("Hello there</textarea>"));
    assert!(!html.contains("disabled"), "form is idle again");
    assert_eq!(gateway.calls(), 1);

    Ok(())
}

#[tokio::test]
async fn test_full_page_fallback_without_script() -> anyhow::Result<()> {
    let gateway = helpers::TestGateway::succeed();
    let app = helpers::create_test_app(gateway.clone());

    let (resp, html) = helpers::post_contact(
        app,
        &[
            ("name", "Jane"),
            ("email", "jane@example.com"),
            ("message", "Hello"),
        ],
        false,
    )
    .await?;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(html.contains("<html"));
    assert!(html.contains("Fox 2 IT Solutions"));
    assert!(html.contains("Message sent successfully!"));
    assert_eq!(gateway.calls(), 1);

    Ok(())
}

#[tokio::test]
async fn test_submitted_values_are_escaped() -> anyhow::Result<()> {
    let gateway = helpers::TestGateway::succeed();
    let app = helpers::create_test_app(gateway);

    let (_, html) = helpers::post_contact(
        app,
        &[("name", "<script>alert(1)</script>"), ("email", "x")],
        true,
    )
    .await?;

    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("Please fill in all fields"));

    Ok(())
}

#[tokio::test]
async fn test_get_contact_redirects_to_section() -> anyhow::Result<()> {
    let app = helpers::create_test_app(helpers::TestGateway::succeed());

    let (resp, _) = helpers::get(app, "/contact").await?;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/#contact");

    Ok(())
}
