//! Problem model

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::submission_types;

/// A gradable exercise embedded in a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    #[validate(length(min = 1, message = "Problem id must not be empty"))]
    pub id: String,
    /// Back-reference to the owning post
    pub post_id: String,
    pub name: String,
    /// Markdown
    pub body: String,
    /// Where the problem comes from (contest, textbook, ...)
    pub source: String,
    pub points: u32,
    /// Free-form label, e.g. "Easy"
    pub difficulty: String,
    /// Kept in display order
    pub hints: Vec<Hint>,
    pub solution: Solution,
    pub submission_type: SubmissionType,
}

/// An optional, point-penalized reveal attached to a problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    /// Points lost for revealing the hint
    pub penalty: u32,
    /// Publicly visible hint name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Markdown
    pub body: String,
}

/// Reference solution: either a link or inline markdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Solution {
    #[serde(rename = "URL")]
    Url { url: String },
    #[serde(rename = "MARKDOWN")]
    Markdown { body: String },
}

/// How submissions for a problem are graded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SubmissionType {
    /// Student assigns their own 0-100 score
    #[default]
    #[serde(rename = "Self Graded")]
    SelfGraded,
    /// Graded by the external judge API, one result per test case
    #[serde(rename = "CompCS API")]
    CompCsApi,
}

impl SubmissionType {
    /// Get submission type as its stored string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SelfGraded => submission_types::SELF_GRADED,
            Self::CompCsApi => submission_types::COMPCS_API,
        }
    }

    /// Parse submission type from its stored string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            submission_types::SELF_GRADED => Some(Self::SelfGraded),
            submission_types::COMPCS_API => Some(Self::CompCsApi),
            _ => None,
        }
    }
}

impl std::fmt::Display for SubmissionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_solution_is_tagged() {
        let url = Solution::Url {
            url: "https://usaco.guide".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&url).unwrap(),
            json!({"type": "URL", "url": "https://usaco.guide"})
        );

        let markdown: Solution =
            serde_json::from_value(json!({"type": "MARKDOWN", "body": "Use BFS."})).unwrap();
        assert_eq!(
            markdown,
            Solution::Markdown {
                body: "Use BFS.".to_string()
            }
        );

        assert!(serde_json::from_value::<Solution>(json!({"type": "PDF", "url": "x"})).is_err());
    }

    #[test]
    fn test_submission_type_strings() {
        assert_eq!(
            serde_json::to_value(SubmissionType::SelfGraded).unwrap(),
            json!("Self Graded")
        );
        assert_eq!(
            serde_json::to_value(SubmissionType::CompCsApi).unwrap(),
            json!("CompCS API")
        );
        for s in submission_types::ALL {
            assert_eq!(SubmissionType::from_str(s).unwrap().as_str(), *s);
        }
        assert_eq!(SubmissionType::from_str("Auto"), None);
    }

    #[test]
    fn test_hint_name_is_optional() {
        let hint: Hint = serde_json::from_value(json!({"penalty": 2, "body": "Sort first."})).unwrap();
        assert_eq!(hint.name, None);
        assert_eq!(
            serde_json::to_value(&hint).unwrap(),
            json!({"penalty": 2, "body": "Sort first."})
        );
    }

    #[test]
    fn test_problem_id_required() {
        let problem = Problem {
            id: "p1".to_string(),
            post_id: "post".to_string(),
            name: "Two Sum".to_string(),
            body: String::new(),
            source: "Classic".to_string(),
            points: 10,
            difficulty: "Easy".to_string(),
            hints: vec![
                Hint {
                    penalty: 2,
                    name: None,
                    body: "a".to_string(),
                },
                Hint {
                    penalty: 3,
                    name: Some("Big hint".to_string()),
                    body: "b".to_string(),
                },
            ],
            solution: Solution::Markdown {
                body: String::new(),
            },
            submission_type: SubmissionType::SelfGraded,
        };
        assert!(problem.validate().is_ok());

        let anonymous = Problem {
            id: String::new(),
            ..problem
        };
        assert!(anonymous.validate().is_err());
    }
}
