//! Shared fixtures for unit tests.

use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::{
    client::{ChatRequest, ChatTransport, ModelConfig, RawResponse},
    error::Result,
    models::Plan,
    params::PlanContent,
};

/// The bilibili brief used across tests.
pub fn bilibili_brief() -> PlanContent {
    PlanContent {
        platform: Some("bilibili".to_string()),
        idea: "一个AI自动剪辑脚本".to_string(),
        goal: "吸引独立开发者关注".to_string(),
        audience: "独立开发者".to_string(),
        style: None,
    }
}

fn topic(title: &str, angle: &str, seconds: [u32; 4]) -> Value {
    json!({
        "title": title,
        "angle": angle,
        "script": {
            "hook": { "text": "剪一条视频只要三分钟", "focus": "结果对比" },
            "body": [
                { "text": "以前手动剪辑要两小时", "emphasis": "强调时间成本" },
                { "text": "脚本自动识别高光片段", "emphasis": "展示识别过程" },
                { "text": "一键导出带字幕成片", "emphasis": "突出成片质量" }
            ],
            "outro": { "text": "源码已开源, 欢迎来玩", "callToAction": "一键三连并在评论区提需求" }
        },
        "shots": [
            { "order": 1, "type": "talking", "description": "口播抛出结果", "approximateSeconds": seconds[0] },
            { "order": 2, "type": "screen", "description": "录屏展示旧流程", "approximateSeconds": seconds[1] },
            { "order": 3, "type": "broll", "description": "脚本运行过程", "approximateSeconds": seconds[2] },
            { "order": 4, "type": "text", "description": "字幕卡总结三步", "approximateSeconds": seconds[3] }
        ]
    })
}

/// A fully conformant plan exactly as a model would return it.
pub fn sample_plan_json() -> Value {
    json!({
        "project": {
            "name": "AI 自动剪辑脚本",
            "audience": "想做视频但没时间剪辑的独立开发者",
            "pain": "剪辑耗时太长, 没法稳定更新",
            "visibleResult": "两小时的剪辑缩短到三分钟, 前后对比录屏",
            "aiRole": "AI 负责识别高光片段并生成字幕, 人只做最后确认"
        },
        "platformGuide": {
            "name": "B站",
            "duration": "3-10分钟",
            "ratio": "16:9 横屏",
            "styleTips": ["结构清晰", "适度讲原理", "结尾小结"],
            "mustHave": ["项目名", "前后对比", "开源地址"]
        },
        "topics": [
            topic("两小时到三分钟", "efficiency", [20, 60, 90, 30]),
            topic("我用它剪了一个月", "experiment", [20, 80, 100, 40]),
            topic("一个周末做出来的剪辑脚本", "story", [30, 90, 120, 40]),
            topic("三步跑起来", "tutorial", [20, 70, 80, 30])
        ]
    })
}

/// [`sample_plan_json`] as a typed plan.
pub fn sample_plan() -> Plan {
    serde_json::from_value(sample_plan_json()).expect("fixture must deserialize")
}

/// Transport double that returns a canned response and records requests.
pub(crate) struct StubTransport {
    status: u16,
    body: String,
    delay: Option<Duration>,
    calls: AtomicUsize,
    requests: Mutex<Vec<(String, String, ChatRequest)>>,
}

impl StubTransport {
    pub(crate) fn new(status: u16, body: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            status,
            body: body.into(),
            delay: None,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// 200 response whose first choice carries `content`.
    pub(crate) fn with_content(content: &str) -> Arc<Self> {
        let body = json!({ "choices": [{ "message": { "role": "assistant", "content": content } }] });
        Self::new(200, body.to_string())
    }

    pub(crate) fn with_plan(plan: &Value) -> Arc<Self> {
        Self::with_content(&plan.to_string())
    }

    pub(crate) fn delayed(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            status: 200,
            body: String::new(),
            delay: Some(delay),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_request(&self) -> (String, String, ChatRequest) {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request recorded")
    }
}

#[async_trait]
impl ChatTransport for StubTransport {
    async fn send(&self, url: &str, api_key: &str, request: &ChatRequest) -> Result<RawResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push((
            url.to_string(),
            api_key.to_string(),
            request.clone(),
        ));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(RawResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

pub(crate) fn test_config() -> ModelConfig {
    ModelConfig {
        api_key: Some("sk-test".to_string()),
        ..ModelConfig::default()
    }
}
