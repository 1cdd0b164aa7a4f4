//! Fixed analysis timing and the cosmetic step-by-step progress shown while it runs.
//!
//! None of this reflects real work. Step boundaries are derived from elapsed
//! time only, and the step durations add up to [`ANALYSIS_DELAY`].

use std::time::Duration;

use serde::Serialize;

/// Time between choosing a role and navigating to the results.
pub const ANALYSIS_DELAY: Duration = Duration::from_millis(5_000);

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnalysisStep {
    pub message: &'static str,
    pub subtext: &'static str,
    #[serde(rename = "duration_ms", serialize_with = "serialize_millis")]
    pub duration: Duration,
}

pub const ANALYSIS_STEPS: [AnalysisStep; 3] = [
    AnalysisStep {
        message: "Parsing your CV...",
        subtext: "Extracting skills, experience, and projects",
        duration: Duration::from_millis(1_500),
    },
    AnalysisStep {
        message: "Comparing with industry standards...",
        subtext: "Analyzing against 10,000+ job postings",
        duration: Duration::from_millis(1_500),
    },
    AnalysisStep {
        message: "Generating your personalized roadmap...",
        subtext: "Creating learning path and project ideas",
        duration: Duration::from_millis(2_000),
    },
];

/// Log lines shown under the steps. Fixed, like everything else here.
pub const ANALYSIS_LOG: [&str; 3] = [
    "Skills extracted: 12 technical skills identified",
    "Projects analyzed: 4 portfolio projects found",
    "Experience level: Intermediate",
];

pub const FINISHING_LOG: &str = "Preparing your personalized report...";

/// Index of the step from which the finishing line is shown.
const FINISHING_FROM_STEP: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Completed,
    Current,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisProgress {
    /// Equals `ANALYSIS_STEPS.len()` once every step has completed.
    pub current_step: usize,
    pub statuses: Vec<StepStatus>,
    pub finishing: bool,
}

/// Progress after `elapsed` time in the analyzing state.
pub fn progress_at(elapsed: Duration) -> AnalysisProgress {
    let mut boundary = Duration::ZERO;
    let mut current_step = ANALYSIS_STEPS.len();
    for (index, step) in ANALYSIS_STEPS.iter().enumerate() {
        boundary += step.duration;
        if elapsed < boundary {
            current_step = index;
            break;
        }
    }

    let statuses = (0..ANALYSIS_STEPS.len())
        .map(|index| match index.cmp(&current_step) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Current,
            std::cmp::Ordering::Greater => StepStatus::Pending,
        })
        .collect();

    AnalysisProgress {
        current_step,
        statuses,
        finishing: current_step >= FINISHING_FROM_STEP,
    }
}

fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_millis() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_durations_sum_to_analysis_delay() {
        let total: Duration = ANALYSIS_STEPS.iter().map(|s| s.duration).sum();
        assert_eq!(total, ANALYSIS_DELAY);
    }

    #[test]
    fn test_progress_starts_on_first_step() {
        let progress = progress_at(Duration::ZERO);
        assert_eq!(progress.current_step, 0);
        assert_eq!(
            progress.statuses,
            vec![StepStatus::Current, StepStatus::Pending, StepStatus::Pending]
        );
        assert!(!progress.finishing);
    }

    #[test]
    fn test_progress_advances_on_step_boundaries() {
        assert_eq!(progress_at(Duration::from_millis(1_499)).current_step, 0);
        assert_eq!(progress_at(Duration::from_millis(1_500)).current_step, 1);
        assert_eq!(progress_at(Duration::from_millis(2_999)).current_step, 1);
        assert_eq!(progress_at(Duration::from_millis(3_000)).current_step, 2);
    }

    #[test]
    fn test_finishing_line_appears_on_last_step() {
        assert!(!progress_at(Duration::from_millis(2_999)).finishing);
        assert!(progress_at(Duration::from_millis(3_000)).finishing);
    }

    #[test]
    fn test_all_steps_complete_after_delay() {
        let progress = progress_at(ANALYSIS_DELAY);
        assert_eq!(progress.current_step, ANALYSIS_STEPS.len());
        assert!(progress
            .statuses
            .iter()
            .all(|s| *s == StepStatus::Completed));
        assert!(progress.finishing);
    }

    #[test]
    fn test_step_serializes_duration_in_millis() {
        let json = serde_json::to_value(ANALYSIS_STEPS[2]).unwrap();
        assert_eq!(json["duration_ms"], 2000);
    }
}
