//! Correlation between sprint meeting load and delivered story points.

use serde::{Deserialize, Serialize};

const MIN_SAMPLES: usize = 3;

/// Meeting load and delivery for one sprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintSnapshot {
    pub sprint_id: String,
    pub total_meeting_hours: f64,
    pub completed_points: f64,
}

impl SprintSnapshot {
    pub fn new(sprint_id: &str, total_meeting_hours: f64, completed_points: f64) -> Self {
        Self {
            sprint_id: sprint_id.into(),
            total_meeting_hours,
            completed_points,
        }
    }
}

/// Pearson correlation of meeting hours against completed points.
///
/// Returns 0 for fewer than three sprints and when either series is constant.
///
/// # Examples
///
/// ```
/// use meetcost_analytics::correlation::{pearson, SprintSnapshot};
///
/// let sprints = vec![
///     SprintSnapshot::new("s1", 10.0, 40.0),
///     SprintSnapshot::new("s2", 20.0, 30.0),
///     SprintSnapshot::new("s3", 30.0, 20.0),
/// ];
/// assert!((pearson(&sprints) + 1.0).abs() < 1e-12);
/// assert_eq!(pearson(&sprints[..2]), 0.0);
/// ```
pub fn pearson(sprints: &[SprintSnapshot]) -> f64 {
    if sprints.len() < MIN_SAMPLES {
        return 0.0;
    }
    let n = sprints.len() as f64;
    let mean_x = sprints.iter().map(|s| s.total_meeting_hours).sum::<f64>() / n;
    let mean_y = sprints.iter().map(|s| s.completed_points).sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut variance_x = 0.0;
    let mut variance_y = 0.0;
    for sprint in sprints {
        let dx = sprint.total_meeting_hours - mean_x;
        let dy = sprint.completed_points - mean_y;
        covariance += dx * dy;
        variance_x += dx * dx;
        variance_y += dy * dy;
    }

    let denominator = (variance_x * variance_y).sqrt();
    if denominator == 0.0 || !denominator.is_finite() {
        return 0.0;
    }
    (covariance / denominator).clamp(-1.0, 1.0)
}

/// Plain-language reading of a correlation coefficient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VelocityInsight {
    pub correlation: f64,
    pub interpretation: String,
    pub recommendation: String,
}

/// Describe the strength and direction of `correlation`.
///
/// |r| ≥ 0.7 is strong, ≥ 0.4 moderate, ≥ 0.2 weak, anything smaller is
/// treated as no meaningful relationship.
pub fn interpret(correlation: f64) -> VelocityInsight {
    let magnitude = correlation.abs();
    let strength = if magnitude >= 0.7 {
        "strong"
    } else if magnitude >= 0.4 {
        "moderate"
    } else if magnitude >= 0.2 {
        "weak"
    } else {
        ""
    };

    let (interpretation, recommendation) = if strength.is_empty() {
        (
            "No meaningful relationship between meeting hours and delivered story points.".to_string(),
            "Meeting load does not appear to drive velocity; judge meetings on their own outcomes.".to_string(),
        )
    } else if correlation < 0.0 {
        (
            format!("{strength} negative correlation: sprints with more meeting hours deliver fewer story points."),
            "Cut or shorten recurring meetings during sprints and protect focus time.".to_string(),
        )
    } else {
        (
            format!("{strength} positive correlation: sprints with more meeting hours deliver more story points."),
            "Current meetings seem to support delivery; keep them focused and time-boxed.".to_string(),
        )
    };

    VelocityInsight {
        correlation,
        interpretation: capitalize(&interpretation),
        recommendation,
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Built-in sprint history used until real sprint data is connected.
pub fn sample_sprints() -> Vec<SprintSnapshot> {
    vec![
        SprintSnapshot::new("sprint-1", 42.0, 34.0),
        SprintSnapshot::new("sprint-2", 38.0, 36.0),
        SprintSnapshot::new("sprint-3", 55.0, 27.0),
        SprintSnapshot::new("sprint-4", 61.0, 25.0),
        SprintSnapshot::new("sprint-5", 35.0, 39.0),
        SprintSnapshot::new("sprint-6", 48.0, 31.0),
    ]
}
