//! Entity models and DTOs, one module per table family.

pub mod announcement;
pub mod character;
pub mod cut;
pub mod file;
pub mod movie;
pub mod script;
pub mod session;
pub mod shorts;
pub mod storyboard;
pub mod user;
pub mod webtoon;
