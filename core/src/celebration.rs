use crate::rng::rand_range;

pub const HEART_COUNT: u32 = 28;
pub const HEART_SIZE_MIN: f32 = 12.0;
pub const HEART_SIZE_MAX: f32 = 34.0;
pub const HEART_LEFT_CENTER_PCT: f32 = 50.0;
pub const HEART_LEFT_SPREAD_PCT: f32 = 30.0;
pub const HEART_TOP_MIN_PCT: f32 = 60.0;
pub const HEART_TOP_MAX_PCT: f32 = 80.0;
pub const HEART_OPACITY_MIN: f32 = 0.7;
pub const HEART_OPACITY_MAX: f32 = 1.0;
pub const HEART_START_ROT_DEG: f32 = 20.0;
pub const HEART_END_ROT_DEG: f32 = 40.0;
pub const HEART_DURATION_MIN_MS: f32 = 1800.0;
pub const HEART_DURATION_MAX_MS: f32 = 4200.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeartSpec {
    pub size: f32,
    pub left_pct: f32,
    pub top_pct: f32,
    pub opacity: f32,
    pub start_rot_deg: f32,
    pub end_rot_deg: f32,
    pub duration_ms: f32,
}

pub fn burst(seed: u32, count: u32) -> Vec<HeartSpec> {
    let mut hearts = Vec::with_capacity(count as usize);
    for id in 0..count {
        let salt = id * 8;
        hearts.push(HeartSpec {
            size: rand_range(seed, salt, HEART_SIZE_MIN, HEART_SIZE_MAX),
            left_pct: rand_range(
                seed,
                salt + 1,
                HEART_LEFT_CENTER_PCT - HEART_LEFT_SPREAD_PCT,
                HEART_LEFT_CENTER_PCT + HEART_LEFT_SPREAD_PCT,
            ),
            top_pct: rand_range(seed, salt + 2, HEART_TOP_MIN_PCT, HEART_TOP_MAX_PCT),
            opacity: rand_range(seed, salt + 3, HEART_OPACITY_MIN, HEART_OPACITY_MAX),
            start_rot_deg: rand_range(seed, salt + 4, -HEART_START_ROT_DEG, HEART_START_ROT_DEG),
            end_rot_deg: rand_range(seed, salt + 5, -HEART_END_ROT_DEG, HEART_END_ROT_DEG),
            duration_ms: rand_range(seed, salt + 6, HEART_DURATION_MIN_MS, HEART_DURATION_MAX_MS),
        });
    }
    hearts
}
