//! Best-effort quality review of an accepted plan.
//!
//! The prompt asks for at least four topics, all four canonical angles,
//! contiguous shot numbering and a total duration inside the platform's
//! range. None of that is part of the schema, so a plan that misses them is
//! still returned; the findings here are advisory only.

use std::{fmt, ops::RangeInclusive};

use crate::models::{Angle, Plan, Platform};

/// Minimum number of topics a plan is asked for.
pub const MIN_TOPICS: usize = 4;

/// A content-quality expectation the plan does not meet.
#[derive(Debug, Clone, PartialEq)]
pub enum Finding {
    TooFewTopics { count: usize },
    MissingAngles { missing: Vec<Angle> },
    NoShots { topic: String },
    ShotOrderGap { topic: String, expected: u32, found: u32 },
    DurationOutOfRange {
        topic: String,
        total: f64,
        range: RangeInclusive<u32>,
    },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::TooFewTopics { count } => {
                write!(f, "only {count} topics, expected at least {MIN_TOPICS}")
            }
            Finding::MissingAngles { missing } => {
                let names: Vec<_> = missing.iter().map(Angle::as_str).collect();
                write!(f, "angles not covered: {}", names.join(", "))
            }
            Finding::NoShots { topic } => write!(f, "topic '{topic}' has no shots"),
            Finding::ShotOrderGap {
                topic,
                expected,
                found,
            } => write!(
                f,
                "topic '{topic}' shot order expected {expected}, found {found}"
            ),
            Finding::DurationOutOfRange {
                topic,
                total,
                range,
            } => write!(
                f,
                "topic '{topic}' runs {total}s, outside {}-{}s",
                range.start(),
                range.end()
            ),
        }
    }
}

/// Reviews a plan against the platform it was generated for.
pub fn review(plan: &Plan, platform: Platform) -> Vec<Finding> {
    let mut findings = Vec::new();

    if plan.topics.len() < MIN_TOPICS {
        findings.push(Finding::TooFewTopics {
            count: plan.topics.len(),
        });
    }

    let covered: Vec<Angle> = plan
        .topics
        .iter()
        .filter_map(|t| t.canonical_angle())
        .collect();
    let missing: Vec<Angle> = Angle::ALL
        .into_iter()
        .filter(|angle| !covered.contains(angle))
        .collect();
    if !missing.is_empty() {
        findings.push(Finding::MissingAngles { missing });
    }

    let range = platform.recommended_seconds();
    for topic in &plan.topics {
        if topic.shots.is_empty() {
            findings.push(Finding::NoShots {
                topic: topic.title.clone(),
            });
            continue;
        }

        // First gap only.
        if let Some((expected, shot)) = (1u32..)
            .zip(&topic.shots)
            .find(|(expected, shot)| shot.order != *expected)
        {
            findings.push(Finding::ShotOrderGap {
                topic: topic.title.clone(),
                expected,
                found: shot.order,
            });
        }

        let total = topic.total_seconds();
        if total < f64::from(*range.start()) || total > f64::from(*range.end()) {
            findings.push(Finding::DurationOutOfRange {
                topic: topic.title.clone(),
                total,
                range: range.clone(),
            });
        }
    }

    findings
}
