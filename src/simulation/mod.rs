mod compare;
mod descent_time;

pub use compare::{Candidate, CompareDescent, Comparison, DescentResult, DEFAULT_DISPLAY_SCALE};
pub use descent_time::{
    Descent, DescentTime, IntegrationParams, DEFAULT_GRAVITY, DEFAULT_STEP_COUNT, VELOCITY_FLOOR,
};
