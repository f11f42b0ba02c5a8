/// Tokens spawned per connector. One batch per run, no ongoing emitter.
pub const FLOW_BATCH_SIZE: usize = 10;

/// Token speed in world units per frame tick. Movement is applied once per
/// frame without time scaling, so the stream pace follows the frame rate.
pub const FLOW_BASE_SPEED: f32 = 2.0;
pub const FLOW_SPEED_JITTER: f32 = 1.0;

/// Global wrap rule shared by every connector: a token past its own limit
/// is sent back to the restart coordinate, but only once it has also passed
/// the guard. Both are fixed world-x values, not derived per connector.
pub const FLOW_WRAP_GUARD_X: f32 = -50.0;
pub const FLOW_RESTART_X: f32 = -250.0;

/// Tokens ride above their connector anchor with a little vertical and
/// lateral scatter so the stream reads as a swarm rather than a bead chain.
pub const FLOW_RIDE_HEIGHT: f32 = 40.0;
pub const FLOW_SCATTER: f32 = 20.0;

pub const FLOW_TOKEN_RADIUS: f32 = 3.0;
