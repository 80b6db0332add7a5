//! HTTP request handlers, one module per resource.

pub mod announcement;
pub mod auth;
pub mod character;
pub mod character_folder;
pub mod character_sheet;
pub mod cut;
pub mod dev;
pub mod episode;
pub mod episode_script;
pub mod file;
pub mod generate;
pub mod health;
pub mod movie;
pub mod shorts;
pub mod storyboard;
pub mod storyboard_cut;
pub mod webtoon;
