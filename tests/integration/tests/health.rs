//! Health and server info endpoint tests.

use crate::common::TestEnv;

#[tokio::test]
async fn test_health_endpoints() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let health: serde_json::Value = env
        .client
        .get(format!("{}/health", env.base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(health["status"], "healthy");

    for path in ["/health/live", "/health/ready"] {
        let response = env
            .client
            .get(format!("{}{}", env.base_url, path))
            .send()
            .await?;
        assert!(response.status().is_success(), "{path} should be healthy");
    }
    Ok(())
}

#[tokio::test]
async fn test_server_info() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let info: serde_json::Value = env.client.get(&env.base_url).send().await?.json().await?;
    assert_eq!(info["name"], "Keycloak Rust login theme");
    assert!(info["version"].is_string());
    Ok(())
}
