// Crisis detection
// Highest-priority response tier

mod detector;

pub use detector::{CrisisDetector, CrisisRule, CRISIS_RESPONSE};
