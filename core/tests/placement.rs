use iyada_core::{
    clamp_to_viewport, evade_seed, initial_no_position, place_away, required_distance,
    seed_base_from_millis, yes_position_in_card, EvadeConfig, Pos, Rect, Size,
};

fn no_size() -> Size {
    Size {
        width: 100.0,
        height: 44.0,
    }
}

fn no_rect_at(pos: Pos) -> Rect {
    Rect::from_pos_size(pos, no_size())
}

fn bounds(viewport: Size, no: Size, margin: f32) -> (f32, f32, f32, f32) {
    let max_left = (viewport.width - no.width - margin).max(margin);
    let max_top = (viewport.height - no.height - margin).max(margin);
    (margin, max_left, margin, max_top)
}

fn assert_in_bounds(pos: Pos, viewport: Size, no: Size, margin: f32) {
    let (min_left, max_left, min_top, max_top) = bounds(viewport, no, margin);
    assert!(
        pos.left >= min_left && pos.left <= max_left,
        "left {} outside [{}, {}] for viewport {}x{}",
        pos.left,
        min_left,
        max_left,
        viewport.width,
        viewport.height
    );
    assert!(
        pos.top >= min_top && pos.top <= max_top,
        "top {} outside [{}, {}] for viewport {}x{}",
        pos.top,
        min_top,
        max_top,
        viewport.width,
        viewport.height
    );
}

#[test]
fn placements_stay_in_bounds_across_sequences() {
    let config = EvadeConfig::default();
    let viewports = [
        Size { width: 1280.0, height: 800.0 },
        Size { width: 1920.0, height: 1080.0 },
        Size { width: 640.0, height: 480.0 },
        Size { width: 360.0, height: 640.0 },
    ];
    for viewport in viewports {
        let yes = Rect::new(viewport.width * 0.1, viewport.height * 0.4, 120.0, 48.0);
        let mut current = Pos {
            left: viewport.width * 0.5,
            top: viewport.height * 0.5,
        };
        let mut last = None;
        for nonce in 0..50u32 {
            let seed = evade_seed(0xABCD, nonce);
            let pos = place_away(seed, yes, no_rect_at(current), last, viewport, &config);
            assert_in_bounds(pos, viewport, no_size(), config.margin);
            last = Some(pos);
            current = pos;
        }
    }
}

#[test]
fn separation_holds_when_satisfiable() {
    let config = EvadeConfig::default();
    let viewport = Size {
        width: 1280.0,
        height: 800.0,
    };
    let yes = Rect::new(100.0, 300.0, 120.0, 48.0);
    let required = required_distance(&yes, no_size(), &config);
    let (yes_cx, yes_cy) = yes.center();
    let mut current = Pos {
        left: 900.0,
        top: 400.0,
    };
    let mut last = None;
    for nonce in 0..30u32 {
        let seed = evade_seed(0x5EED, nonce);
        let pos = place_away(seed, yes, no_rect_at(current), last, viewport, &config);
        let cx = pos.left + no_size().width * 0.5;
        let cy = pos.top + no_size().height * 0.5;
        let dist = ((cx - yes_cx).powi(2) + (cy - yes_cy).powi(2)).sqrt();
        assert!(
            dist >= required,
            "placement {} too close: {} < {}",
            nonce,
            dist,
            required
        );
        last = Some(pos);
        current = pos;
    }
}

#[test]
fn jump_exceeds_min_jump_with_room() {
    let config = EvadeConfig::default();
    let viewport = Size {
        width: 1920.0,
        height: 1080.0,
    };
    let yes = Rect::new(200.0, 500.0, 120.0, 48.0);
    let mut current = Pos {
        left: 1400.0,
        top: 520.0,
    };
    let mut last: Option<Pos> = None;
    for nonce in 0..30u32 {
        let seed = evade_seed(0xB0B, nonce);
        let pos = place_away(seed, yes, no_rect_at(current), last, viewport, &config);
        if let Some(prev) = last {
            let dist = ((pos.left - prev.left).powi(2) + (pos.top - prev.top).powi(2)).sqrt();
            assert!(
                dist >= config.min_jump,
                "jump {} too small: {} < {}",
                nonce,
                dist,
                config.min_jump
            );
        }
        last = Some(pos);
        current = pos;
    }
}

#[test]
fn first_placement_ignores_jump_constraint() {
    // An unsatisfiable min_jump must not matter when there is no prior position.
    let config = EvadeConfig {
        min_jump: 1.0e9,
        ..EvadeConfig::default()
    };
    let viewport = Size {
        width: 1280.0,
        height: 800.0,
    };
    let yes = Rect::new(100.0, 300.0, 120.0, 48.0);
    let current = no_rect_at(Pos {
        left: 900.0,
        top: 340.0,
    });
    let required = required_distance(&yes, no_size(), &config);
    let (yes_cx, yes_cy) = yes.center();
    for nonce in 0..10u32 {
        let pos = place_away(evade_seed(0xF00, nonce), yes, current, None, viewport, &config);
        let cx = pos.left + no_size().width * 0.5;
        let cy = pos.top + no_size().height * 0.5;
        let dist = ((cx - yes_cx).powi(2) + (cy - yes_cy).powi(2)).sqrt();
        assert!(dist >= required);
    }
}

#[test]
fn same_seed_gives_same_placement() {
    let config = EvadeConfig::default();
    let viewport = Size {
        width: 1280.0,
        height: 800.0,
    };
    let yes = Rect::new(100.0, 300.0, 120.0, 48.0);
    let current = no_rect_at(Pos {
        left: 600.0,
        top: 400.0,
    });
    let last = Some(Pos {
        left: 600.0,
        top: 400.0,
    });
    let a = place_away(0x1234, yes, current, last, viewport, &config);
    let b = place_away(0x1234, yes, current, last, viewport, &config);
    assert_eq!(a, b);
}

#[test]
fn concrete_scenario_1280x800() {
    let config = EvadeConfig::default();
    let viewport = Size {
        width: 1280.0,
        height: 800.0,
    };
    let yes = Rect::new(100.0, 300.0, 120.0, 48.0);
    let current = no_rect_at(Pos {
        left: 920.0,
        top: 320.0,
    });
    let pos = place_away(evade_seed(0xCAFE, 1), yes, current, None, viewport, &config);
    assert!(pos.left >= 28.0 && pos.left <= 1280.0 - 100.0 - 28.0);
    assert!(pos.top >= 28.0 && pos.top <= 800.0 - 44.0 - 28.0);
    let cx = pos.left + 50.0;
    let cy = pos.top + 22.0;
    let dist = ((cx - 160.0).powi(2) + (cy - 324.0).powi(2)).sqrt();
    assert!(dist >= 140.0, "distance {} below required 140", dist);
}

#[test]
fn corners_take_over_when_trials_are_exhausted() {
    // Zero trial budget forces the corner fallback; with the affirmative
    // control centered, the first margin-aligned corner already qualifies.
    let config = EvadeConfig {
        attempts: 0,
        ..EvadeConfig::default()
    };
    let viewport = Size {
        width: 400.0,
        height: 300.0,
    };
    let yes = Rect::new(140.0, 126.0, 120.0, 48.0);
    let current = no_rect_at(Pos {
        left: 150.0,
        top: 200.0,
    });
    let pos = place_away(0x77, yes, current, None, viewport, &config);
    let max_left = 400.0 - 100.0 - 28.0;
    let max_top = 300.0 - 44.0 - 28.0;
    let corners = [
        Pos { left: 28.0, top: 28.0 },
        Pos { left: max_left, top: 28.0 },
        Pos { left: 28.0, top: max_top },
        Pos { left: max_left, top: max_top },
    ];
    assert!(corners.contains(&pos), "{:?} is not a corner", pos);
}

#[test]
fn terminates_on_degenerate_viewport() {
    let config = EvadeConfig::default();
    let viewport = Size {
        width: 10.0,
        height: 10.0,
    };
    let yes = Rect::new(0.0, 0.0, 120.0, 48.0);
    let current = no_rect_at(Pos { left: 0.0, top: 0.0 });
    let pos = place_away(0x99, yes, current, None, viewport, &config);
    // Both axis ranges collapse to the margin.
    assert_eq!(pos, Pos { left: 28.0, top: 28.0 });
}

#[test]
fn nudge_slides_off_the_affirmative_control() {
    // No trials, no qualifying corner, no recorded candidate: the nudge path
    // must still land in bounds and clear of the affirmative control.
    let config = EvadeConfig {
        attempts: 0,
        required_dist_floor: 1.0e9,
        ..EvadeConfig::default()
    };
    let viewport = Size {
        width: 600.0,
        height: 300.0,
    };
    let yes = Rect::new(240.0, 100.0, 120.0, 48.0);
    let current = no_rect_at(Pos {
        left: 290.0,
        top: 120.0,
    });
    for seed in 0..16u32 {
        let pos = place_away(seed, yes, current, None, viewport, &config);
        assert_in_bounds(pos, viewport, no_size(), config.margin);
        let rect = no_rect_at(pos);
        assert!(!rect.overlaps(&yes), "{:?} overlaps affirmative control", pos);
    }
}

#[test]
fn seed_base_varies_with_time() {
    // Epoch milliseconds exceed u32::MAX, so the base must truncate rather
    // than saturate, and successive timestamps must keep producing fresh
    // seeds.
    let earlier = 1_756_000_000_000.0;
    let later = earlier + 86_400_000.0;
    let base_earlier = seed_base_from_millis(earlier);
    let base_later = seed_base_from_millis(later);
    assert_ne!(base_earlier, u32::MAX);
    assert_ne!(base_earlier, base_later);
    assert_ne!(
        seed_base_from_millis(earlier + 1.0),
        base_earlier
    );
    assert_ne!(evade_seed(base_earlier, 1), evade_seed(base_later, 1));
}

#[test]
fn zone_tunables_steer_sampling() {
    // Splitting the zone choice entirely into the far zone confines every
    // trial to [far_zone_frac * width, max_left].
    let config = EvadeConfig {
        zone_split_low: 0.0,
        zone_split_high: 1.0,
        far_zone_frac: 0.6,
        ..EvadeConfig::default()
    };
    let viewport = Size {
        width: 1920.0,
        height: 1080.0,
    };
    let yes = Rect::new(100.0, 500.0, 120.0, 48.0);
    let current = no_rect_at(Pos {
        left: 1400.0,
        top: 520.0,
    });
    for seed in 0..10u32 {
        let pos = place_away(seed, yes, current, None, viewport, &config);
        assert!(
            pos.left >= viewport.width * config.far_zone_frac,
            "left {} landed outside the far zone",
            pos.left
        );
    }
}

#[test]
fn required_distance_applies_floor() {
    let config = EvadeConfig::default();
    let yes = Rect::new(0.0, 0.0, 120.0, 48.0);
    assert_eq!(required_distance(&yes, no_size(), &config), 140.0);
    let wide = Rect::new(0.0, 0.0, 400.0, 48.0);
    assert_eq!(required_distance(&wide, no_size(), &config), 270.0);
}

#[test]
fn clamp_keeps_margins_and_degenerates_gracefully() {
    let no = no_size();
    let viewport = Size {
        width: 800.0,
        height: 600.0,
    };
    let clamped = clamp_to_viewport(Pos { left: -40.0, top: 900.0 }, no, viewport, 28.0);
    assert_eq!(clamped, Pos { left: 28.0, top: 600.0 - 44.0 - 28.0 });

    let tiny = Size {
        width: 20.0,
        height: 20.0,
    };
    let degenerate = clamp_to_viewport(Pos { left: 500.0, top: 500.0 }, no, tiny, 28.0);
    assert_eq!(degenerate, Pos { left: 28.0, top: 28.0 });
}

#[test]
fn initial_layout_respects_margins() {
    let card = Size {
        width: 420.0,
        height: 120.0,
    };
    let yes_size = Size {
        width: 120.0,
        height: 48.0,
    };
    let yes_pos = yes_position_in_card(card, yes_size);
    assert_eq!(yes_pos, Pos { left: 50.0, top: 36.0 });

    let viewport = Size {
        width: 1280.0,
        height: 800.0,
    };
    let yes = Rect::new(180.0, 360.0, 120.0, 48.0);
    let no_pos = initial_no_position(&yes, no_size(), viewport, 28.0);
    assert_eq!(no_pos.left, (1280.0f32 * 0.72).floor());
    assert_eq!(no_pos.top, 362.0);
    assert_in_bounds(no_pos, viewport, no_size(), 28.0);
}
