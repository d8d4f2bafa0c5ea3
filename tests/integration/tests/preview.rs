//! Preview routes and bundled resources.

use kc_theme_server::ServerConfig;

use crate::common::TestEnv;

#[tokio::test]
async fn test_preview_index_lists_stories() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let pages: serde_json::Value = env
        .client
        .get(format!("{}/preview", env.base_url))
        .send()
        .await?
        .json()
        .await?;

    let login = pages
        .as_array()
        .and_then(|pages| pages.iter().find(|p| p["page_id"] == "login.ftl"))
        .expect("login page listed");
    assert!(login["stories"]
        .as_array()
        .is_some_and(|s| s.iter().any(|story| story == "with-social-providers")));
    Ok(())
}

#[tokio::test]
async fn test_every_preview_story_renders() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let pages: serde_json::Value = env
        .client
        .get(format!("{}/preview", env.base_url))
        .send()
        .await?
        .json()
        .await?;

    for page in pages.as_array().into_iter().flatten() {
        let page_id = page["page_id"].as_str().unwrap_or_default();
        for story in page["stories"].as_array().into_iter().flatten() {
            let story = story.as_str().unwrap_or_default();
            let response = env.client.get(env.preview_url(page_id, story)).send().await?;
            assert!(
                response.status().is_success(),
                "{page_id}?story={story} returned {}",
                response.status()
            );
        }
    }
    Ok(())
}

#[tokio::test]
async fn test_social_story_icons_are_served() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let html = env
        .client
        .get(env.preview_url("login.ftl", "with-social-providers"))
        .send()
        .await?
        .text()
        .await?;
    assert!(html.contains("src=\"/resources/img/google.svg\""));

    let response = env
        .client
        .get(format!("{}/resources/img/google.svg", env.base_url))
        .send()
        .await?;
    assert!(response.status().is_success());
    assert!(response.text().await?.contains("<svg"));
    Ok(())
}

#[tokio::test]
async fn test_preview_can_be_disabled() -> anyhow::Result<()> {
    let env = TestEnv::with_config(ServerConfig {
        preview_enabled: false,
        ..ServerConfig::for_testing()
    })
    .await?;

    let response = env
        .client
        .get(env.preview_url("login.ftl", "default"))
        .send()
        .await?;
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    Ok(())
}
