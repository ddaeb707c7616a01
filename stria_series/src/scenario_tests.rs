// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Line, PathEl, Point, Rect};
use peniko::Brush;
use stria_core::{
    AnimationPolicy, CycleError, ElementId, ElementRole, InvalidPoint, PointKey, SeriesId, Shape,
    SplitPolicy, SurfaceOp, SurfaceRecorder,
};

use crate::{
    AxisOrientation, CartesianFrame, Chart, ChartContext, ChartError, LineSeries, OhlcPoint,
    OhlcSeries, OhlcStyle, PathStyle, Series, SeriesCycle, StackMode, StackedAreaSeries, XyPoint,
};

const EPS: f64 = 1e-9;

/// 100x100 plot; one X unit and one Y unit are 10 and 5 surface units wide.
fn frame() -> CartesianFrame {
    CartesianFrame::new(Rect::new(0.0, 0.0, 100.0, 100.0), (0.0, 10.0), (0.0, 20.0))
}

fn fixed_chart() -> Chart {
    Chart::new(frame()).with_auto_fit(false)
}

fn point_id(series: u32, key: u64, role: ElementRole) -> ElementId {
    ElementId::for_point(SeriesId(series), PointKey(key), role)
}

fn figure_id(series: u32, position: usize, role: ElementRole) -> ElementId {
    ElementId::for_figure(SeriesId(series), position, role)
}

fn line_of(surface: &SurfaceRecorder, id: ElementId) -> Line {
    match surface.get(id).map(|e| e.current()) {
        Some(Shape::Line(l)) => *l,
        other => panic!("expected a line for {id:?}, got {other:?}"),
    }
}

fn assert_close(actual: Line, expected: Line) {
    let near = |a: Point, b: Point| (a - b).hypot() < EPS;
    assert!(
        near(actual.p0, expected.p0) && near(actual.p1, expected.p1),
        "{actual:?} != {expected:?}"
    );
}

fn stacked_trio(mode: StackMode) -> Chart {
    let mut chart = Chart::new(frame());
    let data = [[1.0, 2.0, 3.0], [2.0, 2.0, 2.0], [3.0, 1.0, 1.0]];
    for (i, values) in data.iter().enumerate() {
        let s = StackedAreaSeries::new(SeriesId(i as u32 + 1), XyPoint::indexed(values))
            .with_stack_mode(mode);
        chart.push(s).unwrap();
    }
    chart
}

#[test]
fn stacked_values_accumulate_in_draw_order() {
    let chart = stacked_trio(StackMode::Values);
    let stacks = chart.stack_groups();
    let top = stacks[2].as_ref().unwrap().offset_at(0.0).unwrap();
    assert_eq!(top.baseline, 3.0);
    assert_eq!(top.top, 6.0);
}

#[test]
fn stacked_percentages_reach_one() {
    let chart = stacked_trio(StackMode::Percentage);
    let stacks = chart.stack_groups();
    let expect = [(0.0, 1.0 / 6.0), (1.0 / 6.0, 3.0 / 6.0), (3.0 / 6.0, 1.0)];
    for (stack, (b, t)) in stacks.iter().zip(expect) {
        let o = stack.as_ref().unwrap().offset_at(0.0).unwrap();
        assert!((o.baseline - b).abs() < EPS, "baseline {} != {b}", o.baseline);
        assert!((o.top - t).abs() < EPS, "top {} != {t}", o.top);
    }
}

#[test]
fn first_member_mode_applies_to_the_group() {
    let mut chart = Chart::new(frame());
    chart
        .push(
            StackedAreaSeries::new(SeriesId(1), XyPoint::indexed(&[1.0]))
                .with_stack_mode(StackMode::Percentage),
        )
        .unwrap();
    chart
        .push(StackedAreaSeries::new(SeriesId(2), XyPoint::indexed(&[3.0])))
        .unwrap();
    let stacks = chart.stack_groups();
    let o = stacks[1].as_ref().unwrap().offset_at(0.0).unwrap();
    assert!((o.top - 1.0).abs() < EPS);
}

#[test]
fn stacked_areas_fit_the_axis_to_their_tops() {
    let mut chart = stacked_trio(StackMode::Values);
    let mut surface = SurfaceRecorder::new();
    let report = chart.update(&mut surface);
    assert!(report.is_ok());
    let (_, max) = chart.frame().axis_limits(AxisOrientation::Y, 0);
    assert_eq!(max, 6.0, "series 3 tops out at 1+2+3");
}

#[test]
fn ohlc_bar_geometry_and_color() {
    let mut chart = fixed_chart();
    chart
        .push(OhlcSeries::new(
            SeriesId(1),
            vec![OhlcPoint::new(0, 0.0, 10.0, 12.0, 7.0, 8.0)],
        ))
        .unwrap();
    let mut surface = SurfaceRecorder::new();
    assert!(chart.update(&mut surface).is_ok());

    // y(v) = 100 - 5v; one X unit is 10 wide, so each tick is (10 - 1.2) / 2.
    let hl = line_of(&surface, point_id(1, 0, ElementRole::HighLow));
    assert_close(hl, Line::new((0.0, 40.0), (0.0, 65.0)));
    let open = line_of(&surface, point_id(1, 0, ElementRole::OpenTick));
    assert_close(open, Line::new((-4.4, 50.0), (0.0, 50.0)));
    let close = line_of(&surface, point_id(1, 0, ElementRole::CloseTick));
    assert_close(close, Line::new((0.0, 60.0), (4.4, 60.0)));

    let stroke = surface
        .get(point_id(1, 0, ElementRole::HighLow))
        .and_then(|e| e.style.stroke.clone())
        .unwrap();
    assert_eq!(stroke.brush, OhlcStyle::default().decrease);
    assert_eq!(stroke.stroke_width, 2.5);
}

#[test]
fn ohlc_color_follows_each_point() {
    let mut s = OhlcSeries::new(
        SeriesId(1),
        vec![
            OhlcPoint::new(0, 0.0, 1.0, 3.0, 0.5, 2.0),
            OhlcPoint::new(1, 1.0, 2.0, 3.0, 0.5, 1.0),
            OhlcPoint::new(2, 2.0, 1.5, 3.0, 0.5, 1.5),
        ],
    );
    let f = frame();
    let mut surface = SurfaceRecorder::new();
    s.update(&SeriesCycle::new(&f, 0, 1), &mut surface).unwrap();
    fn assert_bar_brush(surface: &SurfaceRecorder, key: u64, expected: &Brush) {
        for role in [
            ElementRole::HighLow,
            ElementRole::OpenTick,
            ElementRole::CloseTick,
        ] {
            let brush = surface
                .get(point_id(1, key, role))
                .and_then(|e| e.style.stroke.clone())
                .map(|st| st.brush);
            assert_eq!(brush.as_ref(), Some(expected), "point {key}, {role:?}");
        }
    }
    let style = OhlcStyle::default();
    assert_bar_brush(&surface, 0, &style.increase);
    assert_bar_brush(&surface, 1, &style.decrease);
    // An unchanged close is not an increase.
    assert_bar_brush(&surface, 2, &style.decrease);

    // Flip the direction of point 0: every segment of the reused bar is restyled.
    s.set_points(vec![OhlcPoint::new(0, 0.0, 2.0, 3.0, 0.5, 1.0)]);
    s.update(&SeriesCycle::new(&f, 0, 1), &mut surface).unwrap();
    assert_bar_brush(&surface, 0, &style.decrease);
}

#[test]
fn undrawable_points_are_rejected_before_any_surface_call() {
    let f = frame();
    let cycle = SeriesCycle::new(&f, 0, 1);
    let mut surface = SurfaceRecorder::new();

    let mut bars = OhlcSeries::new(SeriesId(1), Vec::new());
    bars.on_update_start().unwrap();
    let err = bars
        .get_or_create_point_view(
            &OhlcPoint::new(0, 1.0, 10.0, f64::NAN, 7.0, 8.0),
            "",
            &cycle,
            &mut surface,
        )
        .map(|_| ())
        .unwrap_err();
    assert_eq!(
        err,
        CycleError::InvalidDataPoint {
            index: 0,
            reason: InvalidPoint::NonFiniteValue,
        }
    );
    assert!(surface.is_empty());
    assert!(surface.log().is_empty());
    assert!(bars.view(PointKey(0)).is_none());

    let mut line = LineSeries::new(SeriesId(2), Vec::new());
    line.on_update_start(&cycle).unwrap();
    line.get_or_create_point_view(&XyPoint::new(0, 0.0, 1.0), "", &cycle, &mut surface)
        .unwrap();
    surface.take_log();
    let err = line
        .get_or_create_point_view(&XyPoint::new(1, f64::INFINITY, 1.0), "", &cycle, &mut surface)
        .map(|_| ())
        .unwrap_err();
    assert_eq!(
        err,
        CycleError::InvalidDataPoint {
            index: 1,
            reason: InvalidPoint::NonFiniteX,
        }
    );
    assert!(surface.log().is_empty());
    assert!(line.view(PointKey(1)).is_none());
}

#[test]
fn unchanged_data_only_reattaches() {
    let mut chart = fixed_chart();
    chart
        .push(LineSeries::new(SeriesId(1), XyPoint::indexed(&[1.0, 2.0, 3.0])))
        .unwrap();
    let mut surface = SurfaceRecorder::new();
    let first = chart.update(&mut surface);
    assert_eq!(first.updated[0].1.created, 3);
    let added = surface.take_log();
    assert_eq!(added.len(), 4, "three markers and one stroke");
    assert!(added.iter().all(|op| matches!(op, SurfaceOp::Add(_))));

    for _ in 0..3 {
        let report = chart.update(&mut surface);
        let summary = report.updated[0].1;
        assert_eq!((summary.created, summary.reused, summary.released), (0, 3, 0));
        let log = surface.take_log();
        assert_eq!(log.len(), 4);
        assert!(log.iter().all(|op| matches!(op, SurfaceOp::Ensure(_))));
    }
}

#[test]
fn cleared_surface_gets_every_element_back() {
    let mut chart = fixed_chart();
    chart
        .push(OhlcSeries::new(
            SeriesId(1),
            OhlcPoint::indexed(&[(1.0, 2.0, 0.5, 1.5), (1.5, 2.5, 1.0, 2.0)]),
        ))
        .unwrap();
    let mut surface = SurfaceRecorder::new();
    chart.update(&mut surface);
    let before = surface.len();
    surface.clear();
    surface.take_log();
    chart.update(&mut surface);
    assert_eq!(surface.len(), before);
    let log = surface.take_log();
    assert_eq!(log.len(), 6);
    assert!(log.iter().all(|op| matches!(op, SurfaceOp::Reattach(_))));
}

#[test]
fn vanished_points_are_released_at_cycle_end() {
    let mut s = OhlcSeries::new(
        SeriesId(1),
        OhlcPoint::indexed(&[(1.0, 2.0, 0.5, 1.5); 4]),
    );
    let f = frame();
    let mut surface = SurfaceRecorder::new();
    s.update(&SeriesCycle::new(&f, 0, 1), &mut surface).unwrap();
    surface.take_log();

    let kept: Vec<OhlcPoint> = s
        .points()
        .iter()
        .copied()
        .filter(|p| p.key.0 % 2 == 1)
        .collect();
    s.set_points(kept);
    let summary = s.update(&SeriesCycle::new(&f, 0, 1), &mut surface).unwrap();
    assert_eq!(summary.released, 2);
    assert!(s.view(PointKey(0)).is_none());
    assert!(s.view(PointKey(1)).is_some());
    assert_eq!(surface.len(), 6);

    let log = surface.take_log();
    let removed: Vec<u64> = log
        .iter()
        .filter_map(|op| match op {
            SurfaceOp::Remove(id) => Some(id.key),
            _ => None,
        })
        .collect();
    assert_eq!(removed, vec![0, 0, 0, 2, 2, 2]);
    let first_remove = log
        .iter()
        .position(|op| matches!(op, SurfaceOp::Remove(_)))
        .unwrap();
    assert!(
        log[..first_remove]
            .iter()
            .all(|op| matches!(op, SurfaceOp::Ensure(_))),
        "removal happens after every surviving view was refreshed"
    );
}

#[test]
fn invalid_data_aborts_only_its_series() {
    let mut chart = fixed_chart();
    chart
        .push(LineSeries::new(SeriesId(1), XyPoint::indexed(&[1.0, 2.0])))
        .unwrap();
    chart
        .push(LineSeries::new(SeriesId(2), XyPoint::indexed(&[3.0, 4.0])))
        .unwrap();
    let mut surface = SurfaceRecorder::new();
    assert!(chart.update(&mut surface).is_ok());
    let marker = point_id(2, 1, ElementRole::Marker);
    let before = surface.get(marker).cloned();
    surface.take_log();

    if let Some(Series::Line(s)) = chart.series_mut(SeriesId(2)) {
        s.set_points(vec![XyPoint::new(0, 0.0, 5.0), XyPoint::new(1, f64::NAN, 6.0)]);
    }
    let report = chart.update(&mut surface);
    assert_eq!(
        report.failed,
        vec![(
            SeriesId(2),
            CycleError::InvalidDataPoint {
                index: 1,
                reason: InvalidPoint::NonFiniteX,
            }
        )]
    );
    assert_eq!(report.updated.len(), 1);
    assert!(
        surface.log().iter().all(|op| match op {
            SurfaceOp::Add(id)
            | SurfaceOp::Remove(id)
            | SurfaceOp::Ensure(id)
            | SurfaceOp::Reattach(id) => id.series == SeriesId(1),
        }),
        "the aborted series must not touch the surface"
    );
    assert_eq!(surface.get(marker).cloned(), before);
}

#[test]
fn duplicate_keys_abort_the_cycle() {
    let mut s = LineSeries::new(
        SeriesId(1),
        vec![XyPoint::new(7, 0.0, 1.0), XyPoint::new(7, 1.0, 2.0)],
    );
    let f = frame();
    let mut surface = SurfaceRecorder::new();
    let err = s.update(&SeriesCycle::new(&f, 0, 1), &mut surface).unwrap_err();
    assert_eq!(
        err,
        CycleError::InvalidDataPoint {
            index: 1,
            reason: InvalidPoint::DuplicateKey(7),
        }
    );
    assert!(surface.is_empty());
    // The aborted cycle never opened, so the next one starts cleanly.
    s.set_points(XyPoint::indexed(&[1.0, 2.0]));
    assert!(s.update(&SeriesCycle::new(&f, 0, 1), &mut surface).is_ok());
}

#[test]
fn stacked_points_sharing_an_x_are_rejected() {
    let mut s = StackedAreaSeries::new(
        SeriesId(1),
        vec![
            XyPoint::new(0, 0.0, 1.0),
            XyPoint::missing(1, 1.0),
            XyPoint::new(2, 1.0, 2.0),
            XyPoint::new(3, 0.0, 3.0),
        ],
    );
    let f = frame();
    let mut surface = SurfaceRecorder::new();
    let err = s.update(&SeriesCycle::new(&f, 0, 1), &mut surface).unwrap_err();
    assert_eq!(
        err,
        CycleError::InvalidDataPoint {
            index: 3,
            reason: InvalidPoint::DuplicateX,
        }
    );
    assert!(surface.is_empty());
}

#[test]
fn invalid_series_leave_their_stack_group() {
    let mut chart = stacked_trio(StackMode::Values).with_auto_fit(false);
    let mut surface = SurfaceRecorder::new();
    assert!(chart.update(&mut surface).is_ok());
    let area = figure_id(1, 0, ElementRole::Area);
    let before = surface.get(area).cloned();

    if let Some(Series::StackedArea(s)) = chart.series_mut(SeriesId(1)) {
        s.set_points(vec![XyPoint::new(0, 0.0, 1.0), XyPoint::new(0, 1.0, 2.0)]);
    }
    let report = chart.update(&mut surface);
    assert_eq!(
        report.failed,
        vec![(
            SeriesId(1),
            CycleError::InvalidDataPoint {
                index: 1,
                reason: InvalidPoint::DuplicateKey(0),
            }
        )]
    );
    assert_eq!(report.updated.len(), 2);
    assert_eq!(surface.get(area).cloned(), before);
    let Some(Shape::Path(p)) = surface
        .get(figure_id(2, 0, ElementRole::Area))
        .map(|e| e.current())
    else {
        panic!("expected an area path");
    };
    // Series 2 now rests on the axis (y = 0 -> 100).
    assert_eq!(p.elements()[0], PathEl::MoveTo(Point::new(0.0, 100.0)));
}

#[test]
fn invalid_series_do_not_fit_the_axes() {
    let mut chart = Chart::new(frame());
    chart
        .push(LineSeries::new(SeriesId(1), XyPoint::indexed(&[1.0, 2.0])))
        .unwrap();
    chart
        .push(LineSeries::new(
            SeriesId(2),
            vec![XyPoint::new(0, 0.0, 50.0), XyPoint::new(0, 1.0, 60.0)],
        ))
        .unwrap();
    let mut surface = SurfaceRecorder::new();
    let report = chart.update(&mut surface);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(chart.frame().axis_limits(AxisOrientation::Y, 0), (1.0, 2.0));
}

#[test]
fn turning_labels_off_removes_them() {
    let mut s = OhlcSeries::new(SeriesId(1), OhlcPoint::indexed(&[(1.0, 2.0, 0.5, 1.5)]))
        .with_style(OhlcStyle::default().with_data_labels(true));
    let f = frame();
    let mut surface = SurfaceRecorder::new();
    s.update(&SeriesCycle::new(&f, 0, 1), &mut surface).unwrap();
    let label = point_id(1, 0, ElementRole::Label);
    match surface.get(label).map(|e| e.current()) {
        Some(Shape::Label(l)) => assert_eq!(l.text, "O: 1, H: 2, L: 0.5, C: 1.5"),
        other => panic!("expected a label, got {other:?}"),
    }
    assert!(s.view(PointKey(0)).unwrap().label.is_some());

    s.style_mut().data_labels = false;
    surface.take_log();
    s.update(&SeriesCycle::new(&f, 0, 1), &mut surface).unwrap();
    assert!(surface.get(label).is_none());
    assert!(s.view(PointKey(0)).unwrap().label.is_none());
    assert!(surface.log().contains(&SurfaceOp::Remove(label)));
}

#[test]
fn missing_values_split_figures() {
    let mut s = LineSeries::new(
        SeriesId(1),
        XyPoint::indexed(&[1.0, f64::NAN, 3.0, 4.0]),
    );
    let f = frame();
    let mut surface = SurfaceRecorder::new();
    let summary = s.update(&SeriesCycle::new(&f, 0, 1), &mut surface).unwrap();
    assert_eq!(summary.figures, 2);
    assert!(surface.get(figure_id(1, 0, ElementRole::Stroke)).is_some());
    assert!(surface.get(figure_id(1, 1, ElementRole::Stroke)).is_some());
    assert!(
        s.view(PointKey(1)).unwrap().marker.is_none(),
        "a gap keeps its view but draws no marker"
    );

    s.set_points(XyPoint::indexed(&[1.0, 2.0, 3.0, 4.0]));
    surface.take_log();
    let summary = s.update(&SeriesCycle::new(&f, 0, 1), &mut surface).unwrap();
    assert_eq!(summary.figures, 1);
    assert!(surface.get(figure_id(1, 1, ElementRole::Stroke)).is_none());
    assert!(
        surface
            .log()
            .contains(&SurfaceOp::Remove(figure_id(1, 1, ElementRole::Stroke)))
    );
    assert!(
        surface
            .log()
            .contains(&SurfaceOp::Ensure(figure_id(1, 0, ElementRole::Stroke)))
    );
}

#[test]
fn wide_x_steps_split_when_configured() {
    let points = vec![
        XyPoint::new(0, 0.0, 1.0),
        XyPoint::new(1, 1.0, 1.0),
        XyPoint::new(2, 5.0, 1.0),
        XyPoint::new(3, 6.0, 1.0),
    ];
    let f = frame();
    let mut surface = SurfaceRecorder::new();

    let mut plain = LineSeries::new(SeriesId(1), points.clone());
    let summary = plain.update(&SeriesCycle::new(&f, 0, 2), &mut surface).unwrap();
    assert_eq!(summary.figures, 1);

    let mut gapped = LineSeries::new(SeriesId(2), points).with_style(
        PathStyle::line().with_split_policy(SplitPolicy {
            max_x_gap: Some(2.0),
        }),
    );
    let summary = gapped.update(&SeriesCycle::new(&f, 1, 2), &mut surface).unwrap();
    assert_eq!(summary.figures, 2);
}

#[test]
fn unsorted_points_are_drawn_in_x_order() {
    let mut s = LineSeries::new(
        SeriesId(1),
        vec![XyPoint::new(0, 2.0, 1.0), XyPoint::new(1, 0.0, 1.0)],
    )
    .with_style(PathStyle::line().with_smoothness(0.0));
    let f = frame();
    let mut surface = SurfaceRecorder::new();
    s.update(&SeriesCycle::new(&f, 0, 1), &mut surface).unwrap();
    let Some(Shape::Path(p)) = surface
        .get(figure_id(1, 0, ElementRole::Stroke))
        .map(|e| e.current())
    else {
        panic!("expected a stroke path");
    };
    let xs: Vec<f64> = p
        .elements()
        .iter()
        .filter_map(|el| el.end_point())
        .map(|pt| pt.x)
        .collect();
    assert_eq!(xs, vec![0.0, 20.0]);
}

#[test]
fn splitter_indices_survive_compaction() {
    let mut s = LineSeries::new(
        SeriesId(1),
        XyPoint::indexed(&[1.0, f64::NAN, 2.0, f64::NAN, 3.0]),
    )
    .with_splitter_limit(5);
    let f = frame();
    let mut surface = SurfaceRecorder::new();
    for _ in 0..10 {
        let summary = s.update(&SeriesCycle::new(&f, 0, 1), &mut surface).unwrap();
        assert_eq!(summary.figures, 3);
        let indices = s.splitter().indices();
        assert_eq!(indices.len(), 3);
        assert!(indices.windows(2).all(|w| w[0] < w[1]), "{indices:?}");
        assert!(s.splitter().collector() < 5);
    }
    assert_eq!(surface.len(), 3 + 3, "three markers and three strokes");
}

#[test]
fn stacked_series_draw_first_on_top() {
    let mut chart = stacked_trio(StackMode::Values);
    chart
        .push(LineSeries::new(SeriesId(9), XyPoint::indexed(&[1.0, 2.0, 3.0])))
        .unwrap();
    let mut surface = SurfaceRecorder::new();
    chart.update(&mut surface);
    let z = |id| surface.get(id).map(|e| e.style.z_index).unwrap();
    // Four siblings: stacked series use count - index, the line uses its index.
    assert_eq!(z(figure_id(1, 0, ElementRole::Area)), 4);
    assert_eq!(z(figure_id(2, 0, ElementRole::Area)), 3);
    assert_eq!(z(figure_id(3, 0, ElementRole::Area)), 2);
    assert_eq!(z(figure_id(9, 0, ElementRole::Stroke)), 3);
    assert_eq!(z(point_id(9, 0, ElementRole::Marker)), 3);
}

#[test]
fn stacked_figures_run_back_along_their_baseline() {
    let mut chart = stacked_trio(StackMode::Values).with_auto_fit(false);
    let mut surface = SurfaceRecorder::new();
    chart.update(&mut surface);
    let Some(Shape::Path(p)) = surface
        .get(figure_id(2, 0, ElementRole::Area))
        .map(|e| e.current())
    else {
        panic!("expected an area path");
    };
    // Series 2 starts at the top of series 1 (y = 1 -> 95), not at the axis.
    assert_eq!(p.elements()[0], PathEl::MoveTo(Point::new(0.0, 95.0)));
}

#[test]
fn moved_points_animate_unless_disabled() {
    let mut s = LineSeries::new(SeriesId(1), XyPoint::indexed(&[1.0]));
    let mut f = frame();
    let mut surface = SurfaceRecorder::new();
    s.update(&SeriesCycle::new(&f, 0, 1), &mut surface).unwrap();
    let marker = point_id(1, 0, ElementRole::Marker);
    assert!(
        surface.get(marker).unwrap().shape.is_instant(),
        "new views appear without animating"
    );

    s.set_points(XyPoint::indexed(&[2.0]));
    s.update(&SeriesCycle::new(&f, 0, 1), &mut surface).unwrap();
    let t = &surface.get(marker).unwrap().shape;
    assert_eq!(t.duration, AnimationPolicy::DEFAULT_SPEED);
    assert_ne!(t.from, t.to);

    f.set_animations(AnimationPolicy::disabled());
    s.set_points(XyPoint::indexed(&[3.0]));
    s.update(&SeriesCycle::new(&f, 0, 1), &mut surface).unwrap();
    let t = &surface.get(marker).unwrap().shape;
    assert!(t.is_instant());
    assert_eq!(t.from, t.to);
}

#[test]
fn removing_a_series_detaches_its_elements() {
    let mut chart = fixed_chart();
    chart
        .push(LineSeries::new(SeriesId(1), XyPoint::indexed(&[1.0, 2.0])))
        .unwrap();
    let mut surface = SurfaceRecorder::new();
    chart.update(&mut surface);
    assert!(!surface.is_empty());
    assert!(chart.remove(SeriesId(1), &mut surface).is_some());
    assert!(surface.is_empty());
    assert!(chart.series().is_empty());
}

#[test]
fn duplicate_series_ids_are_rejected() {
    let mut chart = fixed_chart();
    chart
        .push(LineSeries::new(SeriesId(1), Vec::new()))
        .unwrap();
    let err = chart
        .push(OhlcSeries::new(SeriesId(1), Vec::new()))
        .unwrap_err();
    assert_eq!(err, ChartError::DuplicateSeries(SeriesId(1)));
}
