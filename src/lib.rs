//! Headless engine behind the SkillKwiz assessment site.
//!
//! The crate owns everything the site does besides drawing pixels: the sign-in
//! and registration flows for employees and employers, assessment scheduling,
//! the animated home page widgets, the static content catalog, and the blog
//! article PDF export.

pub mod config;
pub mod content;
pub mod error;
pub mod export;
pub mod flows;
pub mod telemetry;
pub mod widgets;
