// tests/draw_plan.rs
use approx::assert_relative_eq;
use glam::Vec3;
use hangul_scribe::{
    DrawPhase, DrawPlan, Glyph, GlyphCatalog, MotionConfig, MotionState, MotionStateMachine,
    Segment, StringLayoutEngine, VowelOrientation, robot_frame,
};

fn seg(sy: f32, sz: f32, ey: f32, ez: f32) -> Segment {
    Segment::new(Vec3::new(0.0, sy, sz), Vec3::new(0.0, ey, ez))
}

/// ㄱ as a top bar plus a right-hand drop, ㅏ as a stem plus a tick — the
/// shapes the reference catalog uses, reduced to two strokes each.
fn setup_catalog() -> GlyphCatalog {
    let mut catalog = GlyphCatalog::new();
    catalog.insert(
        'ㄱ',
        Glyph::consonant(vec![
            seg(-0.05, 0.05, 0.05, 0.05),
            seg(0.05, 0.05, 0.05, -0.05),
        ]),
    );
    catalog.insert(
        'ㅏ',
        Glyph::vowel(
            vec![seg(0.02, 0.05, 0.02, -0.05), seg(0.02, 0.0, 0.06, 0.0)],
            VowelOrientation::Horizontal,
        ),
    );
    catalog
}

#[test]
fn test_draw_ga_end_to_end() {
    let catalog = setup_catalog();
    let engine = StringLayoutEngine::new(&catalog);

    // "가" = ㄱ + ㅏ (horizontal vowel, no trail).
    let plan = engine.plan("가").unwrap();
    assert!(plan.warnings.is_empty());
    assert_eq!(plan.syllable_strokes, vec![4]);
    assert_eq!(plan.stroke_count(), 4);

    // Composition: ㄱ scaled by the horizontal-vowel branch (y x0.6,
    // z x0.8 + 0.02), ㅏ appended unscaled. Layout: grid offset (0, 0) for
    // character 0, then the global 0.7 scale on y and z.
    assert_relative_eq!(plan.segments[0].start.y, -0.05 * 0.6 * 0.7);
    assert_relative_eq!(plan.segments[0].start.z, (0.05 * 0.8 + 0.02) * 0.7);
    assert_relative_eq!(plan.segments[1].end.z, (-0.05 * 0.8 + 0.02) * 0.7);
    assert_relative_eq!(plan.segments[2].start.y, 0.02 * 0.7);
    assert_relative_eq!(plan.segments[2].start.z, 0.05 * 0.7);

    // Drive the state machine with a position feed that converges on each
    // stroke's transformed endpoints, origin [0,0,0], draw_scale 1.5.
    let machine = MotionStateMachine::new(MotionConfig::default());
    assert_relative_eq!(machine.config().draw_scale, 1.5);
    let mut state = MotionState::new();
    let mut stroke = 0;

    while stroke < plan.stroke_count() {
        let segment = plan.segments[stroke];
        let start = robot_frame(segment.start);
        let end = robot_frame(segment.end);

        // Far away: approach emits the standoff point, 0.05 up the local
        // x (pen) axis from the start.
        let tick = machine.tick(&plan, &mut state, stroke, Some(start + Vec3::X * 0.2));
        assert_eq!(
            tick.target,
            Some(robot_frame(segment.start + Vec3::X * 0.05))
        );
        assert!(!tick.stroke_complete);
        assert_eq!(state.phase, DrawPhase::Approach);

        // Within 0.05 of the start: hand off to align.
        machine.tick(&plan, &mut state, stroke, Some(start + Vec3::X * 0.03));
        assert_eq!(state.phase, DrawPhase::Align);

        // On the start point: align emits it exactly and hands off to draw.
        let tick = machine.tick(&plan, &mut state, stroke, Some(start));
        assert_eq!(tick.target, Some(start));
        assert_eq!(state.phase, DrawPhase::Draw);

        // At the end point the interpolated target clamps to the end and
        // the stroke reports complete; the driver advances the index.
        let tick = machine.tick(&plan, &mut state, stroke, Some(end));
        assert!(tick.stroke_complete, "stroke {stroke} did not complete");
        assert!(tick.target.unwrap().distance(end) < 1e-6);
        stroke += 1;
    }

    // Index == stroke count: plan complete, no target, no ticks consumed.
    let tick = machine.tick(&plan, &mut state, stroke, Some(Vec3::ZERO));
    assert!(tick.plan_complete);
    assert_eq!(tick.target, None);
}

#[test]
fn test_draw_fraction_is_monotonic() {
    // One straight stroke, drawn with a position feed that approaches the
    // end monotonically: the interpolation fraction never decreases and
    // stays clamped to [0, 1].
    let stroke = seg(0.0, 0.0, 0.1, 0.0);
    let plan = DrawPlan {
        segments: vec![stroke],
        syllable_strokes: vec![1],
        warnings: Vec::new(),
    };
    let machine = MotionStateMachine::new(MotionConfig {
        draw_scale: 1.5,
        ..MotionConfig::default()
    });
    let mut state = MotionState::new();
    let start = robot_frame(stroke.start);
    let end = robot_frame(stroke.end);
    let span = start.distance(end);

    machine.tick(&plan, &mut state, 0, Some(start));
    machine.tick(&plan, &mut state, 0, Some(start));
    assert_eq!(state.phase, DrawPhase::Draw);

    let mut last_fraction = 0.0f32;
    for step in 0..=10 {
        let ee = start.lerp(end, step as f32 / 10.0);
        let tick = machine.tick(&plan, &mut state, 0, Some(ee));
        let fraction = tick.target.unwrap().distance(start) / span;
        assert!(fraction >= last_fraction - 1e-6, "fraction regressed at step {step}");
        assert!((0.0..=1.0 + 1e-6).contains(&fraction));
        last_fraction = fraction;
    }
    assert_relative_eq!(last_fraction, 1.0, epsilon = 1e-5);
}

#[test]
fn test_two_syllables_share_one_plan_in_order() {
    let catalog = setup_catalog();
    let engine = StringLayoutEngine::new(&catalog);
    let plan = engine.plan("가가").unwrap();

    // Strokes stay in per-character authoring order; character 1 sits one
    // cell to the right before the global scale.
    assert_eq!(plan.syllable_strokes, vec![4, 4]);
    let cell = engine.config().cell_size;
    let scale = engine.config().global_scale;
    assert_relative_eq!(
        plan.segments[4].start.y,
        (-0.05 * 0.6 + cell) * scale
    );
    assert_relative_eq!(plan.segments[4].start.z, plan.segments[0].start.z);
}
