//! Tests for the planner module.

use std::{sync::Arc, time::Duration};

use super::*;
use crate::{
    error::ContentError,
    models::Platform,
    review::Finding,
    testing::{bilibili_brief, sample_plan, sample_plan_json, StubTransport},
};

/// Helper function to create a planner backed by a stub transport
fn create_test_planner(transport: Arc<StubTransport>) -> ContentPlanner {
    ContentPlannerBuilder::new()
        .with_api_key(Some("sk-test"))
        .with_transport(transport)
        .build()
        .expect("Failed to create planner")
}

#[tokio::test]
async fn test_plan_content_end_to_end() {
    let transport = StubTransport::with_plan(&sample_plan_json());
    let planner = create_test_planner(transport.clone());

    let plan = planner
        .plan_content(&bilibili_brief())
        .await
        .expect("Failed to plan content");

    assert_eq!(plan, sample_plan());
    assert_eq!(plan.topics.len(), 4);
    assert!(plan.topics.iter().all(|t| t.shots.len() >= 3));
    assert_eq!(transport.calls(), 1);

    let (_, _, request) = transport.last_request();
    let (_, expected_prompt) = planner.prompt_for(&bilibili_brief()).unwrap();
    assert_eq!(request.messages[1].content, expected_prompt);
    assert!(expected_prompt.contains(Platform::Bilibili.guidance()));
}

#[tokio::test]
async fn test_invalid_briefs_never_reach_the_model() {
    let transport = StubTransport::with_plan(&sample_plan_json());
    let planner = create_test_planner(transport.clone());

    let invalid = [
        PlanContent {
            platform: Some("tiktok".to_string()),
            ..bilibili_brief()
        },
        PlanContent {
            idea: "AI".to_string(),
            ..bilibili_brief()
        },
        PlanContent {
            goal: "涨".to_string(),
            ..bilibili_brief()
        },
        PlanContent {
            audience: String::new(),
            ..bilibili_brief()
        },
    ];

    for params in &invalid {
        let err = planner.plan_content(params).await.unwrap_err();
        assert!(
            matches!(err, ContentError::Validation { .. }),
            "{params:?} gave {err:?}"
        );
    }
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_missing_credential_fails_without_network() {
    let transport = StubTransport::with_plan(&sample_plan_json());
    let planner = ContentPlannerBuilder::new()
        .with_api_key(None::<String>)
        .with_transport(transport.clone())
        .build()
        .expect("Failed to create planner");

    let err = planner.plan_content(&bilibili_brief()).await.unwrap_err();
    assert!(matches!(err, ContentError::Configuration { .. }));
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_model_failures_propagate_unchanged() {
    let planner = create_test_planner(StubTransport::new(500, "boom"));
    let err = planner.plan_content(&bilibili_brief()).await.unwrap_err();
    assert_eq!(err.body(), Some("boom"));

    let planner = create_test_planner(StubTransport::with_content("not json"));
    let err = planner.plan_content(&bilibili_brief()).await.unwrap_err();
    assert_eq!(err.kind(), "malformed_output");
}

#[tokio::test]
async fn test_plans_with_findings_are_still_returned() {
    let mut value = sample_plan_json();
    value["topics"].as_array_mut().unwrap().truncate(1);
    let planner = create_test_planner(StubTransport::with_plan(&value));

    let plan = planner
        .plan_content(&bilibili_brief())
        .await
        .expect("Failed to plan content");
    assert_eq!(plan.topics.len(), 1);
}

#[tokio::test]
async fn test_plan_and_review_returns_findings() {
    let mut value = sample_plan_json();
    value["topics"].as_array_mut().unwrap().truncate(1);
    let transport = StubTransport::with_plan(&value);
    let planner = create_test_planner(transport.clone());

    let (plan, findings) = planner
        .plan_and_review(&bilibili_brief())
        .await
        .expect("Failed to plan content");

    assert_eq!(plan.topics.len(), 1);
    assert!(findings.contains(&Finding::TooFewTopics { count: 1 }));
    assert_eq!(transport.calls(), 1);

    let (_, findings) = create_test_planner(StubTransport::with_plan(&sample_plan_json()))
        .plan_and_review(&bilibili_brief())
        .await
        .expect("Failed to plan content");
    assert!(findings.is_empty());
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let transport = StubTransport::with_plan(&sample_plan_json());
    let planner = create_test_planner(transport.clone());

    let brief = bilibili_brief();
    let (first, second) = tokio::join!(planner.plan_content(&brief), planner.plan_content(&brief));
    assert_eq!(first.unwrap(), second.unwrap());
    assert_eq!(transport.calls(), 2);
}

#[test]
fn test_builder_overrides() {
    let planner = ContentPlannerBuilder::new()
        .with_api_key(Some("sk-test"))
        .with_model(Some("gpt-4o"))
        .with_api_url(Some("http://localhost:8080/v1/chat/completions"))
        .with_timeout(Duration::from_secs(5))
        .with_transport(StubTransport::new(200, ""))
        .build()
        .expect("Failed to create planner");

    let config = planner.client().config();
    assert_eq!(config.model, "gpt-4o");
    assert_eq!(config.api_url, "http://localhost:8080/v1/chat/completions");
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.api_key.as_deref(), Some("sk-test"));
}

#[test]
fn test_builder_keeps_defaults_for_none() {
    let planner = ContentPlannerBuilder::new()
        .with_model(None::<String>)
        .with_api_url(None::<String>)
        .with_transport(StubTransport::new(200, ""))
        .build()
        .expect("Failed to create planner");

    let config = planner.client().config();
    assert_eq!(config.model, crate::client::DEFAULT_MODEL);
    assert_eq!(config.api_url, crate::client::DEFAULT_API_URL);
    assert_eq!(config.api_key, None);
}

#[test]
fn test_builder_rejects_zero_timeout() {
    let result = ContentPlannerBuilder::new()
        .with_timeout(Duration::ZERO)
        .with_transport(StubTransport::new(200, ""))
        .build();
    assert!(matches!(result, Err(ContentError::Configuration { .. })));
}

#[test]
fn test_prompt_for_validates_first() {
    let planner = create_test_planner(StubTransport::new(200, ""));
    let err = planner
        .prompt_for(&PlanContent {
            platform: Some("weibo".to_string()),
            ..bilibili_brief()
        })
        .unwrap_err();
    assert_eq!(err.kind(), "validation");
}
