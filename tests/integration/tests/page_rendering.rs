//! Rendering of posted contexts.

use serde_json::json;

use crate::common::TestEnv;

#[tokio::test]
async fn test_login_page() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let (status, html) = env
        .render(
            "acme",
            &json!({
                "pageId": "login.ftl",
                "realm": {
                    "name": "acme",
                    "displayName": "Acme",
                    "password": true,
                    "rememberMe": true,
                    "loginWithEmailAllowed": true,
                    "registrationEmailAsUsername": true
                },
                "url": { "loginAction": "/realms/acme/login-actions/authenticate?session_code=abc" },
                "login": { "username": "alice" }
            }),
        )
        .await?;

    assert!(status.is_success());
    assert!(html.contains("<title>Sign in to Acme</title>"));
    assert!(html.contains("action=\"/realms/acme/login-actions/authenticate?session_code=abc\""));
    assert!(html.contains(">Email</label>"));
    assert!(html.contains("value=\"alice\""));
    assert!(html.contains("id=\"rememberMe\""));
    Ok(())
}

#[tokio::test]
async fn test_social_providers_layout() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let provider = |alias: &str| json!({ "alias": alias, "loginUrl": format!("/broker/{alias}/login") });
    let context = |aliases: &[&str]| {
        json!({
            "pageId": "login.ftl",
            "realm": { "name": "acme", "password": true },
            "social": { "providers": aliases.iter().copied().map(&provider).collect::<Vec<_>>() }
        })
    };

    let (_, html) = env
        .render("acme", &context(&["google", "facebook", "instagram", "linkedin"]))
        .await?;
    assert!(html.contains("kcFormSocialAccountListGridClass"));

    let (_, html) = env
        .render("acme", &context(&["google", "facebook", "instagram"]))
        .await?;
    assert!(html.contains("id=\"kc-social-providers\""));
    assert!(!html.contains("kcFormSocialAccountListGridClass"));
    Ok(())
}

#[tokio::test]
async fn test_username_hidden_error_next_to_password() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let (_, html) = env
        .render(
            "acme",
            &json!({
                "pageId": "login.ftl",
                "realm": { "name": "acme", "password": true },
                "usernameHidden": true,
                "messagesPerField": { "password": "Invalid password." }
            }),
        )
        .await?;

    assert!(!html.contains("id=\"username\""));
    let password = html.find("id=\"password\"").expect("password input");
    let error = html.find("id=\"input-error\"").expect("error message");
    assert!(password < error);
    Ok(())
}

#[tokio::test]
async fn test_unknown_page_uses_default_renderer() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let (status, html) = env
        .render(
            "acme",
            &json!({
                "pageId": "logout-confirm.ftl",
                "realm": { "name": "acme" },
                "message": { "type": "info", "summary": "Do you want to log out?" }
            }),
        )
        .await?;

    assert!(status.is_success());
    assert!(html.contains("data-page-id=\"logout-confirm.ftl\""));
    assert!(html.contains("Do you want to log out?"));
    Ok(())
}

#[tokio::test]
async fn test_missing_page_id_is_rejected() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let (status, _) = env.render("acme", &json!({ "realm": { "name": "acme" } })).await?;
    assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
    Ok(())
}
