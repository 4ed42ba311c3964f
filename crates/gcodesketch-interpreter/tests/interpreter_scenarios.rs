//! End-to-end interpreter scenarios

use gcodesketch_core::{ArcError, InterpretError, Point3D};
use gcodesketch_interpreter::{parse_line, Command, Interpreter, MotionCategory, MoveKind};

fn p(x: f64, y: f64, z: f64) -> Point3D {
    Point3D::new(x, y, z)
}

#[test]
fn test_rapid_then_cut_polylines() {
    let mut interp = Interpreter::new();
    interp.apply_line("G0 X0 Y0 Z0").unwrap();
    interp.apply_line("G1 X10 Y0 Z0").unwrap();

    assert_eq!(interp.rapid_polyline(), &[p(0.0, 0.0, 0.0)]);
    assert_eq!(
        interp.cut_polyline(),
        &[p(0.0, 0.0, 0.0), p(10.0, 0.0, 0.0)]
    );
}

#[test]
fn test_infeasible_arc_from_origin() {
    let mut interp = Interpreter::new();
    let err = interp.apply_line("G2 X0 Y10 Z0 R5").unwrap_err();
    assert!(matches!(
        err,
        InterpretError::Geometry(ArcError::RadiusTooSmall { .. })
    ));
    assert!(interp.path().is_empty());

    let err = interp.apply_line("G2 X0 Y10 Z0 R4").unwrap_err();
    assert!(matches!(
        err,
        InterpretError::Geometry(ArcError::RadiusTooSmall { .. })
    ));
}

#[test]
fn test_three_commands_three_undos() {
    let mut interp = Interpreter::new();
    interp.apply_line("G0 X5 Y5 Z0").unwrap();
    interp.apply_line("G1 X15 Y5 Z0").unwrap();
    interp.apply_line("G3 X25 Y5 Z0 R7").unwrap();

    assert!(interp.undo());
    assert!(interp.undo());
    assert!(interp.undo());
    assert!(!interp.undo());

    assert!(interp.rapid_polyline().is_empty());
    assert!(interp.cut_polyline().is_empty());
    assert_eq!(interp.current_position(), Point3D::ORIGIN);
}

#[test]
fn test_each_undo_restores_previous_state() {
    let lines = [
        "G0 X0 Y0 Z2",
        "G0 X5 Y0 Z2",
        "G1 X5 Y0 Z0",
        "G2 X15 Y0 Z0 R5.5",
        "G3 X25 Y0 Z0 R9",
        "G1 X25 Y10 Z0",
        "G0 X25 Y10 Z5",
        "G0 X0 Y0 Z5",
        "G1 X0 Y0 Z0",
    ];
    let mut interp = Interpreter::new();
    let mut states = vec![interp.snapshot()];
    for line in lines {
        interp.apply_line(line).unwrap();
        states.push(interp.snapshot());
    }

    states.pop();
    while let Some(expected) = states.pop() {
        assert!(interp.undo());
        assert_eq!(interp.snapshot(), expected);
    }
    assert!(!interp.undo());
}

#[test]
fn test_continuity_across_category_switches() {
    let mut interp = Interpreter::new();
    let lines = [
        "G0 X2 Y2 Z0",
        "G1 X8 Y2 Z0",
        "G0 X8 Y9 Z0",
        "G2 X14 Y9 Z0 R4",
        "G0 X0 Y0 Z0",
        "G3 X6 Y0 Z0 R3.5",
    ];
    for line in lines {
        let before = interp.current_position();
        let command = parse_line(line).unwrap();
        let category = MotionCategory::from(command.kind);
        let applied = interp.apply(command).unwrap();

        // Every line switches category, so each stroke carries its own join
        let polyline = interp.path().polyline(category);
        let stroke_start = polyline[polyline.len() - applied.points_appended];
        assert_eq!(stroke_start, before, "stroke for {line} does not join");
        assert_eq!(polyline.last(), Some(&interp.current_position()));
    }
}

#[test]
fn test_arc_stroke_follows_rapid_without_duplicate_join() {
    let mut interp = Interpreter::new();
    interp.apply_line("G0 X10 Y0 Z0").unwrap();
    let applied = interp.apply_line("G2 X20 Y0 Z0 R6").unwrap();

    assert_eq!(applied.points_appended, 21);
    let cut = interp.cut_polyline();
    assert_eq!(cut[0], p(10.0, 0.0, 0.0));
    assert_ne!(cut[1], cut[0]);
    assert_eq!(cut[20], p(20.0, 0.0, 0.0));
}

#[test]
fn test_parser_outputs() {
    assert_eq!(
        parse_line("G1 X10 Y20 Z0").unwrap(),
        Command::linear(p(10.0, 20.0, 0.0))
    );
    let arc = parse_line("G2 X10 Y0 Z0 R5").unwrap();
    assert_eq!(arc.kind, MoveKind::ArcClockwise);
    assert_eq!(arc.target, p(10.0, 0.0, 0.0));
    assert_eq!(arc.radius, Some(5.0));
}

#[test]
fn test_half_circle_radius_from_range_hint_is_rejected_but_upper_bound_works() {
    let mut interp = Interpreter::new();
    let target = p(12.0, 0.0, 0.0);
    let range = interp.radius_range_to(&target);
    assert_eq!(range.min, 6.0);
    assert_eq!(range.max, 12.0);

    let at_min = Command::arc(target, range.min, true);
    assert!(interp.apply(at_min).is_err());
    let at_max = Command::arc(target, range.max, true);
    assert!(interp.apply(at_max).is_ok());
}

#[test]
fn test_clear_starts_new_drawing() {
    let mut interp = Interpreter::new();
    interp
        .replay(["G0 X1 Y1 Z0", "G1 X4 Y1 Z0", "G1 X4 Y4 Z0"])
        .unwrap();
    interp.clear();
    assert!(interp.snapshot().rapid.is_empty());
    assert!(interp.snapshot().cut.is_empty());
    assert!(!interp.undo());

    interp.apply_line("G1 X3 Y0 Z0").unwrap();
    assert_eq!(
        interp.cut_polyline(),
        &[Point3D::ORIGIN, p(3.0, 0.0, 0.0)]
    );
}
