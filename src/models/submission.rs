//! Submission model

use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::constants::languages;
use crate::error::{ModelError, ModelResult};
use crate::models::{Problem, SubmissionType, Timestamp};
use crate::utils::time::{date_string, format_milliseconds};
use crate::utils::validation::{validate_execution_time, validate_score};

/// A student's code submission for a problem
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    #[validate(length(min = 1, message = "Problem id must not be empty"))]
    pub problem_id: String,
    #[validate(length(min = 1, message = "User id must not be empty"))]
    pub user_id: String,
    /// Raw source text
    pub code: String,
    pub language: Language,
    pub timestamp: Timestamp,
    /// Stored as the sibling `type` and `result` fields
    #[serde(flatten)]
    pub grading: Grading,
}

/// Grading mode together with the result it produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "result")]
pub enum Grading {
    /// Self-assigned score, 0-100
    #[serde(rename = "Self Graded")]
    SelfGraded(f64),
    /// One result per test case, in test case order
    #[serde(rename = "CompCS API")]
    CompCsApi(Vec<TestCaseResult>),
}

impl Default for Grading {
    fn default() -> Self {
        Grading::SelfGraded(0.0)
    }
}

impl Grading {
    /// The grading mode this result belongs to
    pub fn submission_type(&self) -> SubmissionType {
        match self {
            Self::SelfGraded(_) => SubmissionType::SelfGraded,
            Self::CompCsApi(_) => SubmissionType::CompCsApi,
        }
    }

    pub fn score(&self) -> Option<f64> {
        match self {
            Self::SelfGraded(score) => Some(*score),
            Self::CompCsApi(_) => None,
        }
    }

    pub fn case_results(&self) -> Option<&[TestCaseResult]> {
        match self {
            Self::SelfGraded(_) => None,
            Self::CompCsApi(results) => Some(results),
        }
    }
}

impl Validate for Grading {
    fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            Self::SelfGraded(score) => {
                let mut errors = ValidationErrors::new();
                if let Err(e) = validate_score(*score) {
                    errors.add("result", e);
                }
                if errors.is_empty() { Ok(()) } else { Err(errors) }
            }
            Self::CompCsApi(results) => results.iter().try_for_each(|r| r.validate()),
        }
    }
}

/// Outcome of running a submission against one test case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseResult {
    pub status: ExecutionStatus,
    /// Milliseconds
    pub execution_time: f64,
}

impl Validate for TestCaseResult {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Err(e) = validate_execution_time(self.execution_time) {
            errors.add("executionTime", e);
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl std::fmt::Display for TestCaseResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.status, format_milliseconds(self.execution_time))
    }
}

/// Execution status reported for a test case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExecutionStatus {
    #[serde(rename = "AC")]
    Accepted,
    #[serde(rename = "WA")]
    WrongAnswer,
    #[serde(rename = "TLE")]
    TimeLimitExceeded,
    #[serde(rename = "MLE")]
    MemoryLimitExceeded,
    #[serde(rename = "RTE")]
    RuntimeError,
    #[default]
    Pending,
}

impl ExecutionStatus {
    /// Get status as its stored string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "AC",
            Self::WrongAnswer => "WA",
            Self::TimeLimitExceeded => "TLE",
            Self::MemoryLimitExceeded => "MLE",
            Self::RuntimeError => "RTE",
            Self::Pending => "Pending",
        }
    }

    /// Parse status from its stored string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "AC" => Some(Self::Accepted),
            "WA" => Some(Self::WrongAnswer),
            "TLE" => Some(Self::TimeLimitExceeded),
            "MLE" => Some(Self::MemoryLimitExceeded),
            "RTE" => Some(Self::RuntimeError),
            "Pending" => Some(Self::Pending),
            _ => None,
        }
    }

    /// Check if judging of this case is complete
    pub fn is_final(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl std::fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Source language of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "cpp")]
    Cpp,
    #[serde(rename = "java")]
    Java,
    #[serde(rename = "py")]
    Python,
}

impl Language {
    /// Get language as its stored tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpp => languages::CPP,
            Self::Java => languages::JAVA,
            Self::Python => languages::PYTHON,
        }
    }

    /// Parse language from its stored tag
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            languages::CPP => Some(Self::Cpp),
            languages::JAVA => Some(Self::Java),
            languages::PYTHON => Some(Self::Python),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Cpp => "C++",
            Self::Java => "Java",
            Self::Python => "Python",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Submission {
    /// Grading mode, derived from the result variant
    pub fn submission_type(&self) -> SubmissionType {
        self.grading.submission_type()
    }

    /// Submission time as a short date, e.g. "Mon Jan 15 2024"
    pub fn timestamp_string(&self) -> String {
        self.timestamp_string_in(&Utc.fix())
    }

    pub fn timestamp_string_in(&self, offset: &FixedOffset) -> String {
        date_string(self.timestamp.to_date(), offset)
    }

    /// Overall status of the submission.
    ///
    /// Not computed from the grading result yet: always `Accepted`.
    pub fn status(&self) -> ExecutionStatus {
        ExecutionStatus::Accepted
    }

    /// Points earned on `problem`.
    ///
    /// Not computed from the grading result yet: always full points.
    pub fn earned_points(&self, problem: &Problem) -> u32 {
        problem.points
    }

    /// Check that the grading mode matches the problem it was submitted for
    pub fn check_against(&self, problem: &Problem) -> ModelResult<()> {
        if self.problem_id != problem.id {
            return Err(ModelError::InvariantViolation(format!(
                "submission {} targets problem {}, not {}",
                self.id, self.problem_id, problem.id
            )));
        }
        if self.submission_type() != problem.submission_type {
            return Err(ModelError::InvariantViolation(format!(
                "submission {} is {} but problem {} is {}",
                self.id,
                self.submission_type(),
                problem.id,
                problem.submission_type
            )));
        }
        Ok(())
    }

    /// Validate every field of a submission read from the store
    pub fn validate_stored(&self) -> ModelResult<()> {
        self.validate()?;
        self.timestamp.validate()?;
        self.grading.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Solution;
    use serde_json::json;

    fn self_graded(score: f64) -> Submission {
        Submission {
            id: "sub-1".to_string(),
            problem_id: "p1".to_string(),
            user_id: "u1".to_string(),
            code: "print(1)".to_string(),
            language: Language::Python,
            timestamp: Timestamp::new(1_705_276_800, 0),
            grading: Grading::SelfGraded(score),
        }
    }

    fn problem(points: u32, submission_type: SubmissionType) -> Problem {
        Problem {
            id: "p1".to_string(),
            post_id: "post-1".to_string(),
            name: "Two Sum".to_string(),
            body: String::new(),
            source: String::new(),
            points,
            difficulty: "Easy".to_string(),
            hints: Vec::new(),
            solution: Solution::Url {
                url: "https://example.com".to_string(),
            },
            submission_type,
        }
    }

    #[test]
    fn test_grading_shape_self_graded() {
        let value = serde_json::to_value(self_graded(87.0)).unwrap();
        assert_eq!(value["type"], json!("Self Graded"));
        assert_eq!(value["result"], json!(87.0));
        assert_eq!(value["language"], json!("py"));
        assert_eq!(value["problemId"], json!("p1"));
    }

    #[test]
    fn test_grading_shape_case_results() {
        let stored = json!({
            "id": "sub-2",
            "type": "CompCS API",
            "problemId": "p1",
            "userId": "u1",
            "code": "int main() {}",
            "language": "cpp",
            "timestamp": {"seconds": 1, "nanoseconds": 0},
            "result": [
                {"status": "AC", "executionTime": 12},
                {"status": "TLE", "executionTime": 2000.5}
            ]
        });
        let submission: Submission = serde_json::from_value(stored).unwrap();
        assert_eq!(submission.submission_type(), SubmissionType::CompCsApi);
        let results = submission.grading.case_results().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].status, ExecutionStatus::Accepted);
        assert_eq!(results[1].status, ExecutionStatus::TimeLimitExceeded);
        assert_eq!(results[1].execution_time, 2000.5);
        assert_eq!(submission.grading.score(), None);
    }

    #[test]
    fn test_mismatched_result_shape_is_rejected() {
        let stored = json!({
            "id": "sub-3",
            "type": "Self Graded",
            "problemId": "p1",
            "userId": "u1",
            "code": "",
            "language": "java",
            "timestamp": {"seconds": 1, "nanoseconds": 0},
            "result": [{"status": "AC", "executionTime": 1}]
        });
        assert!(serde_json::from_value::<Submission>(stored).is_err());
    }

    #[test]
    fn test_execution_status_strings() {
        let all = [
            ExecutionStatus::Accepted,
            ExecutionStatus::WrongAnswer,
            ExecutionStatus::TimeLimitExceeded,
            ExecutionStatus::MemoryLimitExceeded,
            ExecutionStatus::RuntimeError,
            ExecutionStatus::Pending,
        ];
        for status in all {
            assert_eq!(serde_json::to_value(status).unwrap(), json!(status.as_str()));
            assert_eq!(ExecutionStatus::from_str(status.as_str()), Some(status));
        }
        assert!(!ExecutionStatus::Pending.is_final());
        assert!(ExecutionStatus::WrongAnswer.is_final());
        assert!(ExecutionStatus::Accepted.is_accepted());
    }

    #[test]
    fn test_language_tags() {
        for tag in languages::ALL {
            let language = Language::from_str(tag).unwrap();
            assert_eq!(serde_json::to_value(language).unwrap(), json!(tag));
        }
        assert_eq!(Language::from_str("python"), None);
        assert_eq!(Language::Cpp.display_name(), "C++");
    }

    #[test]
    fn test_timestamp_string() {
        assert_eq!(self_graded(50.0).timestamp_string(), "Mon Jan 15 2024");
    }

    #[test]
    fn test_grading_stubs() {
        let submission = Submission {
            grading: Grading::CompCsApi(vec![TestCaseResult {
                status: ExecutionStatus::WrongAnswer,
                execution_time: 3.0,
            }]),
            ..self_graded(0.0)
        };
        let problem = problem(25, SubmissionType::CompCsApi);
        assert_eq!(submission.status(), ExecutionStatus::Accepted);
        assert_eq!(submission.earned_points(&problem), 25);
        assert_eq!(self_graded(0.0).earned_points(&problem), 25);
    }

    #[test]
    fn test_check_against_problem() {
        assert!(self_graded(90.0)
            .check_against(&problem(10, SubmissionType::SelfGraded))
            .is_ok());
        assert!(matches!(
            self_graded(90.0).check_against(&problem(10, SubmissionType::CompCsApi)),
            Err(ModelError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_validate_stored() {
        assert!(self_graded(100.0).validate_stored().is_ok());
        assert!(self_graded(101.0).validate_stored().is_err());

        let negative_time = Submission {
            grading: Grading::CompCsApi(vec![TestCaseResult {
                status: ExecutionStatus::Accepted,
                execution_time: -1.0,
            }]),
            ..self_graded(0.0)
        };
        assert!(matches!(
            negative_time.validate_stored(),
            Err(ModelError::Validation(_))
        ));
    }

    #[test]
    fn test_case_result_display() {
        let result = TestCaseResult {
            status: ExecutionStatus::Accepted,
            execution_time: 1500.0,
        };
        assert_eq!(result.to_string(), "AC (1.50s)");
    }
}
