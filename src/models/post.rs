//! Post model

use std::collections::HashMap;

use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{ModelError, ModelResult};
use crate::models::{Problem, Timestamp};
use crate::utils::time::date_string;

/// An announcement, or an assignment when it embeds problems
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Assigned by the store; never part of the stored payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub timestamp: Timestamp,
    /// Only meaningful for assignments
    pub due_timestamp: Option<Timestamp>,
    /// Markdown
    pub body: String,
    pub is_pinned: bool,
    pub is_published: bool,
    /// Problem id to problem
    pub problems: HashMap<String, Problem>,
}

impl Post {
    pub fn is_announcement(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn is_assignment(&self) -> bool {
        !self.problems.is_empty()
    }

    /// "Due on ..." for an assignment with a due date, otherwise "Posted on ..."
    pub fn timestamp_string(&self) -> String {
        self.timestamp_string_in(&Utc.fix())
    }

    pub fn timestamp_string_in(&self, offset: &FixedOffset) -> String {
        match self.due_date_string_in(offset) {
            Some(due) if self.is_assignment() => format!("Due on {}", due),
            _ => format!("Posted on {}", self.date_string_in(offset)),
        }
    }

    /// Creation date, e.g. "Mon Jan 15 2024"
    pub fn date_string(&self) -> String {
        self.date_string_in(&Utc.fix())
    }

    pub fn date_string_in(&self, offset: &FixedOffset) -> String {
        date_string(self.timestamp.to_date(), offset)
    }

    pub fn due_date_string(&self) -> Option<String> {
        self.due_date_string_in(&Utc.fix())
    }

    pub fn due_date_string_in(&self, offset: &FixedOffset) -> Option<String> {
        self.due_timestamp
            .map(|due| date_string(due.to_date(), offset))
    }

    /// Sum of points over all embedded problems
    pub fn total_points(&self) -> u64 {
        self.problems.values().map(|p| u64::from(p.points)).sum()
    }

    /// Validate a post read from the store, including its embedded problems
    pub fn validate_stored(&self) -> ModelResult<()> {
        self.timestamp.validate()?;
        if let Some(due) = &self.due_timestamp {
            due.validate()?;
        }
        for (key, problem) in &self.problems {
            problem.validate()?;
            if key != &problem.id {
                return Err(ModelError::InvariantViolation(format!(
                    "problem stored under key {} has id {}",
                    key, problem.id
                )));
            }
            if let Some(post_id) = &self.id {
                if &problem.post_id != post_id {
                    return Err(ModelError::InvariantViolation(format!(
                        "problem {} belongs to post {}, not {}",
                        problem.id, problem.post_id, post_id
                    )));
                }
            }
        }
        Ok(())
    }
}
