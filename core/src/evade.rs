use crate::geom::{center_distance, point_distance, Pos, Rect, Size};
use crate::rng::{rand_range, rand_unit};

pub const EVADE_MARGIN: f32 = 28.0;
pub const EVADE_GAP: f32 = 20.0;
pub const EVADE_MIN_JUMP: f32 = 160.0;
pub const EVADE_ATTEMPTS: u32 = 80;
pub const REQUIRED_DIST_FLOOR: f32 = 140.0;
pub const LAST_DIST_WEIGHT: f32 = 0.6;
pub const SIDE_BONUS: f32 = 50.0;

pub const NEAR_ZONE_FRAC: f32 = 0.32;
pub const FAR_ZONE_FRAC: f32 = 0.68;
pub const ZONE_SPLIT_LOW: f32 = 0.46;
pub const ZONE_SPLIT_HIGH: f32 = 0.92;

const NUDGE_SALT: u32 = 0xD06E;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvadeConfig {
    pub margin: f32,
    pub gap: f32,
    pub min_jump: f32,
    pub attempts: u32,
    pub required_dist_floor: f32,
    pub last_dist_weight: f32,
    pub side_bonus: f32,
    pub near_zone_frac: f32,
    pub far_zone_frac: f32,
    pub zone_split_low: f32,
    pub zone_split_high: f32,
}

impl Default for EvadeConfig {
    fn default() -> Self {
        Self {
            margin: EVADE_MARGIN,
            gap: EVADE_GAP,
            min_jump: EVADE_MIN_JUMP,
            attempts: EVADE_ATTEMPTS,
            required_dist_floor: REQUIRED_DIST_FLOOR,
            last_dist_weight: LAST_DIST_WEIGHT,
            side_bonus: SIDE_BONUS,
            near_zone_frac: NEAR_ZONE_FRAC,
            far_zone_frac: FAR_ZONE_FRAC,
            zone_split_low: ZONE_SPLIT_LOW,
            zone_split_high: ZONE_SPLIT_HIGH,
        }
    }
}

/// Low 32 bits of an epoch-milliseconds timestamp. A plain f32/f64 `as u32`
/// cast saturates at u32::MAX for today's timestamps, which would collapse
/// every time-derived seed to the same constant.
pub fn seed_base_from_millis(millis: f64) -> u32 {
    millis as u64 as u32
}

pub fn evade_seed(base: u32, nonce: u32) -> u32 {
    base ^ nonce.wrapping_mul(0x9E37_79B9) ^ 0x0DD5_EED5
}

pub fn required_distance(yes: &Rect, no: Size, config: &EvadeConfig) -> f32 {
    ((yes.width + no.width) * 0.5 + config.gap).max(config.required_dist_floor)
}

fn axis_range(dim: f32, size: f32, margin: f32) -> (f32, f32) {
    let min = margin;
    let mut max = dim - size - margin;
    if max < min {
        max = min;
    }
    (min, max)
}

/// Picks the next position for the evading control, given both controls'
/// current rectangles. Always returns a position inside the margin-bounded
/// viewport; distance constraints are best effort, resolved through an
/// ordered fallback chain (random trials, corners, best scored trial, nudge).
pub fn place_away(
    seed: u32,
    yes: Rect,
    current: Rect,
    last: Option<Pos>,
    viewport: Size,
    config: &EvadeConfig,
) -> Pos {
    let no = current.size();
    let (min_left, max_left) = axis_range(viewport.width, no.width, config.margin);
    let (min_top, max_top) = axis_range(viewport.height, no.height, config.margin);

    let required = required_distance(&yes, no, config);
    let (yes_cx, _) = yes.center();
    let prefer_right = yes_cx < viewport.width * 0.5;

    let near_end = (viewport.width * config.near_zone_frac).clamp(min_left, max_left);
    let far_start = (viewport.width * config.far_zone_frac).clamp(min_left, max_left);

    let mut best: Option<(Pos, f32)> = None;
    for attempt in 0..config.attempts {
        let salt = attempt * 3;
        let zone = rand_unit(seed, salt);
        let left = if zone < config.zone_split_low {
            rand_range(seed, salt + 1, min_left, near_end)
        } else if zone < config.zone_split_high {
            rand_range(seed, salt + 1, far_start, max_left)
        } else {
            rand_range(seed, salt + 1, min_left, max_left)
        };
        let top = rand_range(seed, salt + 2, min_top, max_top);
        let candidate = Pos { left, top };
        let candidate_rect = Rect::from_pos_size(candidate, no);
        let dist_to_yes = center_distance(&candidate_rect, &yes);
        let dist_to_last = last.map(|prev| {
            point_distance(left, top, prev.left, prev.top)
        });
        let jump_ok = match dist_to_last {
            Some(dist) => dist >= config.min_jump,
            None => true,
        };
        if dist_to_yes >= required && jump_ok {
            return Pos {
                left: left.clamp(min_left, max_left),
                top: top.clamp(min_top, max_top),
            };
        }
        let (cx, _) = candidate_rect.center();
        let on_preferred = (cx > viewport.width * 0.5) == prefer_right;
        let mut score = dist_to_yes + config.last_dist_weight * dist_to_last.unwrap_or(0.0);
        if on_preferred {
            score += config.side_bonus;
        }
        let should_replace = match best {
            None => true,
            Some((_, best_score)) => score > best_score,
        };
        if should_replace {
            best = Some((candidate, score));
        }
    }

    let corners = [
        Pos { left: min_left, top: min_top },
        Pos { left: max_left, top: min_top },
        Pos { left: min_left, top: max_top },
        Pos { left: max_left, top: max_top },
    ];
    for corner in corners {
        let rect = Rect::from_pos_size(corner, no);
        if center_distance(&rect, &yes) >= required {
            return corner;
        }
    }

    if let Some((pos, _)) = best {
        return Pos {
            left: pos.left.clamp(min_left, max_left),
            top: pos.top.clamp(min_top, max_top),
        };
    }

    // No trials were run and no corner is far enough: shove the control a
    // fraction of min_jump away from where it sits and make sure it does not
    // land on the affirmative control.
    let dx = if rand_unit(seed, NUDGE_SALT) < 0.5 {
        -config.min_jump * 0.5
    } else {
        config.min_jump * 0.5
    };
    let dy = if rand_unit(seed, NUDGE_SALT + 1) < 0.5 {
        -config.min_jump / 3.0
    } else {
        config.min_jump / 3.0
    };
    let mut nudged = Pos {
        left: (current.left + dx).clamp(min_left, max_left),
        top: (current.top + dy).clamp(min_top, max_top),
    };
    let nudged_rect = Rect::from_pos_size(nudged, no);
    if nudged_rect.overlaps(&yes) {
        let (ncx, _) = nudged_rect.center();
        let slid = if ncx <= yes_cx {
            yes.left - config.gap - no.width
        } else {
            yes.left + yes.width + config.gap
        };
        nudged.left = slid.clamp(min_left, max_left);
    }
    nudged
}
