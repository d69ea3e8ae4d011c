//! The content plan returned to callers.
//!
//! Field names are camelCase on the wire and in the JSON schema derived from
//! these types; the schema is what model output is validated against, so
//! these structs are the single definition of the output contract.

use std::{fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Number;

/// A complete content plan: project card, platform guide and topics.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub project: ProjectCard,
    pub platform_guide: PlatformGuide,
    pub topics: Vec<Topic>,
}

/// One-glance description of the project being promoted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    /// Project name that viewers understand at a glance
    pub name: String,
    /// Target audience, as specific as possible
    pub audience: String,
    /// Core pain point the project solves
    pub pain: String,
    /// What the viewer can actually see on screen as the result
    pub visible_result: String,
    /// Role and value of AI in the project
    pub ai_role: String,
}

/// Platform-specific production guidance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlatformGuide {
    pub name: String,
    /// Suggested duration range for one piece
    pub duration: String,
    /// Suggested aspect ratio
    pub ratio: String,
    pub style_tips: Vec<String>,
    /// Elements every piece must contain
    pub must_have: Vec<String>,
}

/// A single content topic with its script and shot list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub title: String,
    /// Free-text angle label, usually one of efficiency/experiment/story/tutorial
    pub angle: String,
    pub script: Script,
    pub shots: Vec<Shot>,
}

impl Topic {
    /// Canonical angle this topic's label refers to, if any.
    pub fn canonical_angle(&self) -> Option<Angle> {
        let label = self.angle.to_lowercase();
        Angle::ALL
            .into_iter()
            .find(|angle| label.contains(angle.as_str()))
    }

    /// Sum of the suggested durations of every shot.
    pub fn total_seconds(&self) -> f64 {
        self.shots.iter().map(Shot::seconds).sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    pub hook: Hook,
    /// One entry per independent information point
    pub body: Vec<StepPoint>,
    pub outro: Outro,
}

/// Opening line, meant to be spoken within about three seconds.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Hook {
    pub text: String,
    pub focus: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StepPoint {
    /// What the viewer hears
    pub text: String,
    /// Note for the creator on what to stress
    pub emphasis: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Outro {
    pub text: String,
    pub call_to_action: String,
}

/// One shot in a topic's storyboard.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Shot {
    /// Position in the shot sequence, starting at 1
    #[serde(deserialize_with = "whole_number")]
    pub order: u32,
    #[serde(rename = "type")]
    pub kind: ShotType,
    pub description: String,
    /// Suggested duration, kept exactly as written (`20` stays `20`)
    pub approximate_seconds: Number,
}

impl Shot {
    /// Suggested duration in seconds as a float.
    pub fn seconds(&self) -> f64 {
        self.approximate_seconds.as_f64().unwrap_or_default()
    }
}

/// Accepts any JSON number with no fractional part that fits a `u32`, so
/// `1.0` reads the same as `1`, matching what the JSON schema calls an integer.
fn whole_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;
    number
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .or_else(|| {
            number
                .as_f64()
                .filter(|n| n.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(n))
                .map(|n| n as u32)
        })
        .ok_or_else(|| de::Error::custom(format!("expected a whole number, got {number}")))
}

/// Kind of footage a shot calls for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ShotType {
    /// Screen recording
    Screen,
    /// Creator on camera
    Talking,
    /// Supporting footage
    Broll,
    /// Full-screen text card
    Text,
}

impl ShotType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShotType::Screen => "screen",
            ShotType::Talking => "talking",
            ShotType::Broll => "broll",
            ShotType::Text => "text",
        }
    }
}

impl fmt::Display for ShotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The four canonical topic angles a plan is asked to cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Angle {
    /// Before/after comparison of time or steps
    Efficiency,
    /// Real usage and measured results
    Experiment,
    /// From idea to finished product
    Story,
    /// At most three steps to try it yourself
    Tutorial,
}

impl Angle {
    pub const ALL: [Angle; 4] = [
        Angle::Efficiency,
        Angle::Experiment,
        Angle::Story,
        Angle::Tutorial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Angle::Efficiency => "efficiency",
            Angle::Experiment => "experiment",
            Angle::Story => "story",
            Angle::Tutorial => "tutorial",
        }
    }
}

impl FromStr for Angle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "efficiency" => Ok(Angle::Efficiency),
            "experiment" => Ok(Angle::Experiment),
            "story" => Ok(Angle::Story),
            "tutorial" => Ok(Angle::Tutorial),
            _ => Err(format!("Invalid angle: {s}")),
        }
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.project.name)?;
        writeln!(f)?;
        writeln!(f, "{}", self.project)?;
        writeln!(f, "{}", self.platform_guide)?;

        for (index, topic) in self.topics.iter().enumerate() {
            writeln!(f, "## Topic {}: {}", index + 1, topic.title)?;
            writeln!(f)?;
            writeln!(f, "{topic}")?;
        }

        Ok(())
    }
}

impl fmt::Display for ProjectCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "**Audience:** {}", self.audience)?;
        writeln!(f, "**Pain:** {}", self.pain)?;
        writeln!(f, "**Visible result:** {}", self.visible_result)?;
        writeln!(f, "**AI role:** {}", self.ai_role)
    }
}

impl fmt::Display for PlatformGuide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Platform: {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "**Duration:** {}", self.duration)?;
        writeln!(f, "**Ratio:** {}", self.ratio)?;

        if !self.style_tips.is_empty() {
            writeln!(f)?;
            writeln!(f, "### Style tips")?;
            for tip in &self.style_tips {
                writeln!(f, "- {tip}")?;
            }
        }

        if !self.must_have.is_empty() {
            writeln!(f)?;
            writeln!(f, "### Must have")?;
            for item in &self.must_have {
                writeln!(f, "- {item}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "**Angle:** {}", self.angle)?;
        writeln!(f)?;
        writeln!(f, "### Script")?;
        writeln!(
            f,
            "- **Hook:** {} _({})_",
            self.script.hook.text, self.script.hook.focus
        )?;
        for point in &self.script.body {
            writeln!(f, "- {} _({})_", point.text, point.emphasis)?;
        }
        writeln!(
            f,
            "- **Outro:** {} _({})_",
            self.script.outro.text, self.script.outro.call_to_action
        )?;

        if !self.shots.is_empty() {
            writeln!(f)?;
            writeln!(f, "### Shots ({}s total)", self.total_seconds())?;
            for shot in &self.shots {
                writeln!(f, "{shot}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Shot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. `{}` {} ({}s)",
            self.order, self.kind, self.description, self.approximate_seconds
        )
    }
}
