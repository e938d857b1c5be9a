pub mod celebration;
pub mod evade;
pub mod geom;
pub mod layout;
pub mod rng;

pub use celebration::{burst, HeartSpec, HEART_COUNT};
pub use evade::{
    evade_seed, place_away, required_distance, seed_base_from_millis, EvadeConfig, EVADE_MARGIN,
};
pub use geom::{center_distance, point_distance, Pos, Rect, Size};
pub use layout::{clamp_to_viewport, initial_no_position, yes_position_in_card};
