//! Domain models
//!
//! Posts own their problems by value; submissions refer to a problem by id.

pub mod post;
pub mod problem;
pub mod submission;
pub mod timestamp;

pub use post::*;
pub use problem::*;
pub use submission::*;
pub use timestamp::*;
