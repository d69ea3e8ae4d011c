//! Supported short-video platforms and their editorial guidance.

use std::{fmt, ops::RangeInclusive, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Type-safe enumeration of the supported platforms.
///
/// Wire tags are camelCase (`youtubeShorts`), matching what callers send.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash, Default,
)]
#[serde(rename_all = "camelCase")]
pub enum Platform {
    /// 抖音
    #[default]
    Douyin,
    /// B站
    Bilibili,
    /// 小红书
    Xiaohongshu,
    /// YouTube Shorts
    YoutubeShorts,
    /// 快手
    Kuaishou,
}

impl Platform {
    /// Every supported platform, primary first.
    pub const ALL: [Platform; 5] = [
        Platform::Douyin,
        Platform::Bilibili,
        Platform::Xiaohongshu,
        Platform::YoutubeShorts,
        Platform::Kuaishou,
    ];

    /// Wire tag used by callers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Douyin => "douyin",
            Platform::Bilibili => "bilibili",
            Platform::Xiaohongshu => "xiaohongshu",
            Platform::YoutubeShorts => "youtubeShorts",
            Platform::Kuaishou => "kuaishou",
        }
    }

    /// Name audiences know the platform by.
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Douyin => "抖音",
            Platform::Bilibili => "B站",
            Platform::Xiaohongshu => "小红书",
            Platform::YoutubeShorts => "YouTube Shorts",
            Platform::Kuaishou => "快手",
        }
    }

    /// Editorial guidance embedded into the generation prompt: duration,
    /// framing, pacing and tone for one piece of content.
    pub fn guidance(&self) -> &'static str {
        match self {
            Platform::Douyin => {
                "平台: 抖音。核心要求: 30-90秒竖屏, 前3秒给出强结果或强对比, 大字幕+快节奏, 强调效率提升、爽点和具体结果数字。"
            }
            Platform::Bilibili => {
                "平台: B站。核心要求: 3-10分钟为主, 可以适度讲原理和踩坑故事, 需要有清晰结构和小结, 标题和封面突出项目名和结果。"
            }
            Platform::Xiaohongshu => {
                "平台: 小红书。核心要求: 30-120秒竖屏短视频或图文, 标题偏「经验分享/避坑指南」, 强调步骤清单和可收藏性, 兼顾情绪表达。"
            }
            Platform::YoutubeShorts => {
                "平台: YouTube Shorts。核心要求: 15-60秒极短竖屏, 1秒内给出视觉冲击或强信息, 结构极简, 只讲一个记忆点, 可以考虑中英文。"
            }
            Platform::Kuaishou => {
                "平台: 快手。核心要求: 30-90秒竖屏, 语言口语化接地气, 多用真实场景录屏+人像, 强故事感, 少堆术语。"
            }
        }
    }

    /// Recommended total length of one piece of content, in seconds.
    pub fn recommended_seconds(&self) -> RangeInclusive<u32> {
        match self {
            Platform::Douyin | Platform::Kuaishou => 30..=90,
            Platform::Bilibili => 180..=600,
            Platform::Xiaohongshu => 30..=120,
            Platform::YoutubeShorts => 15..=60,
        }
    }
}

/// Guidance for a raw platform tag.
///
/// Unknown tags fall back to the last platform's guidance so prompt
/// construction never fails on an unexpected value.
pub fn guidance_for_tag(tag: &str) -> &'static str {
    tag.parse::<Platform>()
        .unwrap_or(Platform::Kuaishou)
        .guidance()
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid platform: {s} (expected one of: {})",
                    Platform::ALL.map(|p| p.as_str()).join(", ")
                )
            })
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
