// MindWell - Rule-based mental fitness chatbot
// Library exports

pub mod cli; // Terminal front end
pub mod config;
pub mod crisis;
pub mod errors;
pub mod questionnaire; // PHQ-9 data and scoring
pub mod router; // Response rule engine
pub mod sentiment;
pub mod session;

pub use errors::{MindwellError, Result};
