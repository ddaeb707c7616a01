// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared machinery of series drawn as path figures.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::{Circle, Point};
use peniko::Brush;
use peniko::color::palette::css;
use stria_core::{
    AnimationPolicy, CycleError, DATA_LABELS, DrawSurface, Element, ElementId, ElementRole,
    ElementStyle, Label, PointKey, Recycler, SeriesId, Shape, SplitPolicy, SplitterTracker,
    StrokeStyle, ZOrderRule,
};

use super::{CycleSummary, SeriesCycle, remove_all, sync_element, x_order};
use crate::frame::AxisOrientation;
use crate::geometry::PathFigureState;
use crate::point::{XyPoint, validate_points};

/// Appearance of a line or area series.
#[derive(Clone, Debug, PartialEq)]
pub struct PathStyle {
    /// Stroke along the figure tops; no stroke element is drawn when absent or zero-width.
    pub stroke: Option<StrokeStyle>,
    /// Fill of the area under (or between) the figure tops; `None` draws a plain line.
    pub fill: Option<Brush>,
    /// Curve smoothness in `[0, 1]`.
    pub smoothness: f64,
    /// Marker diameter; markers are not drawn when zero.
    pub marker_size: f64,
    /// Marker fill.
    pub marker_fill: Brush,
    /// Whether each point carries a data label.
    pub data_labels: bool,
    /// Data label paint.
    pub label_fill: Brush,
    /// Whether the series is shown.
    pub visible: bool,
    /// Gap detection.
    pub split_policy: SplitPolicy,
}

impl PathStyle {
    /// Line defaults: smoothness 0.7, 8px markers, 2px stroke, no fill.
    pub fn line() -> Self {
        Self {
            stroke: Some(StrokeStyle::solid(css::STEEL_BLUE, 2.0)),
            fill: None,
            smoothness: 0.7,
            marker_size: 8.0,
            marker_fill: Brush::Solid(css::WHITE),
            data_labels: false,
            label_fill: Brush::Solid(css::DIM_GRAY),
            visible: true,
            split_policy: SplitPolicy::default(),
        }
    }

    /// Stacked-area defaults: smoothness 0.7, no markers, zero-width stroke, filled.
    pub fn stacked_area() -> Self {
        Self {
            stroke: Some(StrokeStyle::solid(css::STEEL_BLUE, 0.0)),
            fill: Some(Brush::Solid(css::STEEL_BLUE.with_alpha(0.6))),
            smoothness: 0.7,
            marker_size: 0.0,
            marker_fill: Brush::Solid(css::WHITE),
            data_labels: false,
            label_fill: Brush::Solid(peniko::Color::from_rgb8(229, 229, 229)),
            visible: true,
            split_policy: SplitPolicy::default(),
        }
    }

    /// Sets the stroke.
    pub fn with_stroke(mut self, stroke: Option<StrokeStyle>) -> Self {
        self.stroke = stroke;
        self
    }

    /// Sets the fill.
    pub fn with_fill(mut self, fill: Option<Brush>) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the smoothness, clamped to `[0, 1]`.
    pub fn with_smoothness(mut self, smoothness: f64) -> Self {
        self.smoothness = smoothness.clamp(0.0, 1.0);
        self
    }

    /// Sets the marker diameter.
    pub fn with_marker_size(mut self, size: f64) -> Self {
        self.marker_size = size.max(0.0);
        self
    }

    /// Turns data labels on or off.
    pub fn with_data_labels(mut self, on: bool) -> Self {
        self.data_labels = on;
        self
    }

    /// Sets the data label paint.
    pub fn with_label_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.label_fill = fill.into();
        self
    }

    /// Shows or hides the series.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Sets gap detection.
    pub fn with_split_policy(mut self, policy: SplitPolicy) -> Self {
        self.split_policy = policy;
        self
    }

    fn drawn_stroke(&self) -> Option<&StrokeStyle> {
        self.stroke.as_ref().filter(|s| s.stroke_width > 0.0)
    }
}

/// Elements owned by one data point of a line or area series.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct XyView {
    /// Marker at the point; absent for gaps and when markers are off.
    pub marker: Option<Element>,
    /// Data label; absent for gaps and when labels are off.
    pub label: Option<Element>,
}

impl XyView {
    /// Every element of the view.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.marker.iter().chain(self.label.iter())
    }
}

/// Elements owned by one path figure, reused by position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FigureView {
    /// Filled area.
    pub area: Option<Element>,
    /// Stroke along the tops.
    pub stroke: Option<Element>,
}

impl FigureView {
    /// Every element of the figure.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.area.iter().chain(self.stroke.iter())
    }
}

/// Per-series cycle state shared by line and stacked-area series.
#[derive(Debug, Default)]
pub(crate) struct PathSeriesState {
    pub(crate) recycler: Recycler<XyView>,
    pub(crate) splitter: SplitterTracker,
    pub(crate) figures: Vec<FigureView>,
    building: Vec<PathFigureState>,
    prev_x: Option<f64>,
    anchor_y: f64,
    created: usize,
    reused: usize,
}

impl PathSeriesState {
    pub(crate) fn with_splitter(splitter: SplitterTracker) -> Self {
        Self {
            splitter,
            ..Self::default()
        }
    }

    /// Opens a cycle; `anchor_y` is where unstacked figures rest, in surface units.
    pub(crate) fn begin(&mut self, anchor_y: f64) -> Result<(), CycleError> {
        self.recycler.begin_cycle()?;
        self.splitter.begin_cycle();
        self.building.clear();
        self.prev_x = None;
        self.anchor_y = anchor_y;
        self.created = 0;
        self.reused = 0;
        Ok(())
    }

    /// Number of points fed since the cycle opened.
    pub(crate) fn fed(&self) -> usize {
        self.created + self.reused
    }

    /// Feeds one point to the splitter and the open figure.
    ///
    /// `vertex` is `(top, baseline)` in surface units, or `None` for a gap.
    fn trace_figure(&mut self, x: f64, vertex: Option<(Point, Option<Point>)>, policy: SplitPolicy) {
        let Some((top, baseline)) = vertex else {
            self.splitter.split();
            self.prev_x = None;
            return;
        };
        if let Some(prev) = self.prev_x
            && policy.is_gap(prev, x)
        {
            tracing::trace!(prev, x, "x gap splits the figure");
            self.splitter.split();
        }
        if self.splitter.point().is_some() {
            self.building.push(PathFigureState::new(self.anchor_y));
        }
        if let Some(figure) = self.building.last_mut() {
            figure.vertices.push(top);
            if let Some(b) = baseline {
                figure.baselines.push(b);
            }
        }
        self.prev_x = Some(x);
    }

    /// Acquires the view of one point and extends the open figure.
    pub(crate) fn point_view(
        &mut self,
        series: SeriesId,
        key: PointKey,
        x: f64,
        vertex: Option<(Point, Option<Point>)>,
        label: &str,
        style: &PathStyle,
        z_index: i32,
        policy: AnimationPolicy,
        surface: &mut dyn DrawSurface,
    ) -> Result<&XyView, CycleError> {
        if !self.recycler.in_cycle() {
            return Err(CycleError::NoActiveCycle);
        }
        self.trace_figure(x, vertex, style.split_policy);

        let acquired = self.recycler.acquire(key, XyView::default)?;
        if acquired.is_new {
            self.created += 1;
        } else {
            self.reused += 1;
        }
        let view = acquired.view;
        let top = vertex.map(|(top, _)| top);

        let marker = top.filter(|_| style.marker_size > 0.0).map(|center| {
            let mut s = ElementStyle::filled(style.marker_fill.clone(), z_index)
                .with_visible(style.visible);
            s.stroke = style.drawn_stroke().cloned();
            (Shape::Marker(Circle::new(center, style.marker_size / 2.0)), s)
        });
        sync_element(
            &mut view.marker,
            ElementId::for_point(series, key, ElementRole::Marker),
            marker,
            policy,
            surface,
        );

        let label = top.filter(|_| style.data_labels).map(|anchor| {
            (
                Shape::Label(Label {
                    text: label.into(),
                    anchor,
                }),
                ElementStyle::filled(style.label_fill.clone(), z_index.saturating_add(DATA_LABELS))
                    .with_visible(style.visible),
            )
        });
        sync_element(
            &mut view.label,
            ElementId::for_point(series, key, ElementRole::Label),
            label,
            policy,
            surface,
        );
        Ok(view)
    }

    /// Draws the figures built this cycle, drops stale figures and releases stale views.
    pub(crate) fn end(
        &mut self,
        series: SeriesId,
        style: &PathStyle,
        z_index: i32,
        policy: AnimationPolicy,
        surface: &mut dyn DrawSurface,
    ) -> Result<CycleSummary, CycleError> {
        let released = self.recycler.end_cycle()?;
        for (_, view) in &released {
            remove_all(view.elements(), surface);
        }

        let stale = self.splitter.end_cycle();
        let building = core::mem::take(&mut self.building);
        for (position, figure) in building.iter().enumerate() {
            if position == self.figures.len() {
                self.figures.push(FigureView::default());
            }
            let view = &mut self.figures[position];

            let area = style.fill.as_ref().map(|fill| {
                (
                    Shape::Path(figure.area_path(style.smoothness)),
                    ElementStyle::filled(fill.clone(), z_index).with_visible(style.visible),
                )
            });
            sync_element(
                &mut view.area,
                ElementId::for_figure(series, position, ElementRole::Area),
                area,
                policy,
                surface,
            );

            let stroke = style.drawn_stroke().map(|stroke| {
                (
                    Shape::Path(figure.stroke_path(style.smoothness)),
                    ElementStyle::stroked(stroke.clone(), z_index).with_visible(style.visible),
                )
            });
            sync_element(
                &mut view.stroke,
                ElementId::for_figure(series, position, ElementRole::Stroke),
                stroke,
                policy,
                surface,
            );
        }
        let keep = building.len().min(self.figures.len());
        if keep < self.figures.len() {
            tracing::trace!(series = series.0, ?stale, "removing stale figures");
            for view in self.figures.drain(keep..) {
                remove_all(view.elements(), surface);
            }
        }

        let summary = CycleSummary {
            created: self.created,
            reused: self.reused,
            released: released.len(),
            figures: building.len(),
        };
        tracing::debug!(
            series = series.0,
            created = summary.created,
            reused = summary.reused,
            released = summary.released,
            figures = summary.figures,
            "path series updated"
        );
        Ok(summary)
    }

    /// Detaches every element and forgets every view and figure.
    pub(crate) fn release_all(&mut self, surface: &mut dyn DrawSurface) {
        for (_, view) in self.recycler.drain() {
            remove_all(view.elements(), surface);
        }
        for view in self.figures.drain(..) {
            remove_all(view.elements(), surface);
        }
        self.splitter.begin_cycle();
        self.splitter.end_cycle();
        self.building.clear();
    }
}

/// What distinguishes one kind of path series from another: defaults, draw order and where
/// each point lands.
pub trait PathKind: Debug + Default {
    /// How the series derives its z-index.
    const Z_ORDER: ZOrderRule;

    /// Style of a freshly created series.
    fn default_style() -> PathStyle;

    /// Data label text used unless the series overrides it.
    fn default_label(point: &XyPoint) -> String;

    /// Checks the whole data set before a cycle starts.
    fn validate(points: &[XyPoint]) -> Result<(), CycleError> {
        validate_points(points, |p| p.key, XyPoint::validate)
    }

    /// Y value, in data units, that unstacked figures rest on this cycle.
    fn anchor(&self, points: &[XyPoint], cycle: &SeriesCycle<'_>, y_axis: usize) -> f64;

    /// Prepares per-cycle state once the cycle is open.
    fn prepare(&mut self, _points: &[XyPoint], _cycle: &SeriesCycle<'_>) {}

    /// `(top, baseline)` of a point in surface units, or `None` for a gap.
    fn vertex(
        &self,
        point: &XyPoint,
        cycle: &SeriesCycle<'_>,
        axes: (usize, usize),
    ) -> Option<(Point, Option<Point>)>;

    /// Drops per-cycle state.
    fn finish(&mut self) {}
}

/// A series drawn as path figures through its points, parameterized by its [`PathKind`].
#[derive(Debug)]
pub struct PathSeries<K> {
    id: SeriesId,
    points: Vec<XyPoint>,
    style: PathStyle,
    axes: (usize, usize),
    label_point: fn(&XyPoint) -> String,
    state: PathSeriesState,
    pub(crate) kind: K,
}

impl<K: PathKind> PathSeries<K> {
    /// Creates a series on the first X and Y axes, with the kind's default style.
    pub fn new(id: SeriesId, points: Vec<XyPoint>) -> Self {
        Self {
            id,
            points,
            style: K::default_style(),
            axes: (0, 0),
            label_point: K::default_label,
            state: PathSeriesState::default(),
            kind: K::default(),
        }
    }

    /// Sets the style.
    pub fn with_style(mut self, style: PathStyle) -> Self {
        self.style = style;
        self
    }

    /// Plots the series against the given X and Y axes.
    pub fn with_axes(mut self, x: usize, y: usize) -> Self {
        self.axes = (x, y);
        self
    }

    /// Sets the function producing data label text.
    pub fn with_label_point(mut self, f: fn(&XyPoint) -> String) -> Self {
        self.label_point = f;
        self
    }

    /// Compacts figure indices when the splitter collector reaches `limit - 1`.
    pub fn with_splitter_limit(mut self, limit: u64) -> Self {
        self.state = PathSeriesState::with_splitter(SplitterTracker::with_limit(limit));
        self
    }

    /// The series id.
    pub fn id(&self) -> SeriesId {
        self.id
    }

    /// `(x axis, y axis)`.
    pub fn axes(&self) -> (usize, usize) {
        self.axes
    }

    /// The data.
    pub fn points(&self) -> &[XyPoint] {
        &self.points
    }

    /// Replaces the data; takes effect on the next cycle.
    pub fn set_points(&mut self, points: Vec<XyPoint>) {
        self.points = points;
    }

    /// The style.
    pub fn style(&self) -> &PathStyle {
        &self.style
    }

    /// Mutable style; reapplied to every view on the next cycle.
    pub fn style_mut(&mut self) -> &mut PathStyle {
        &mut self.style
    }

    /// Splitter state, for inspection.
    pub fn splitter(&self) -> &SplitterTracker {
        &self.state.splitter
    }

    /// The view of a point, if it survived the last cycle.
    pub fn view(&self, key: PointKey) -> Option<&XyView> {
        self.state.recycler.get(key)
    }

    /// Checks every point; an error means the cycle must not start.
    pub fn validate(&self) -> Result<(), CycleError> {
        K::validate(&self.points)
    }

    /// Opens a cycle.
    pub fn on_update_start(&mut self, cycle: &SeriesCycle<'_>) -> Result<(), CycleError> {
        let ya = self.axes.1;
        let anchor = self.kind.anchor(&self.points, cycle, ya);
        self.state
            .begin(cycle.chart.to_surface(anchor, AxisOrientation::Y, ya))?;
        self.kind.prepare(&self.points, cycle);
        Ok(())
    }

    /// Returns the view of `point`, creating it if the point is new.
    ///
    /// Points must be fed in ascending X order, as figures are built as they arrive. A point
    /// that cannot be drawn is rejected before anything is touched; its index is its position
    /// in this cycle's feed.
    pub fn get_or_create_point_view(
        &mut self,
        point: &XyPoint,
        label: &str,
        cycle: &SeriesCycle<'_>,
        surface: &mut dyn DrawSurface,
    ) -> Result<&XyView, CycleError> {
        let index = self.state.fed();
        point
            .validate()
            .map_err(|reason| CycleError::InvalidDataPoint { index, reason })?;
        let vertex = self.kind.vertex(point, cycle, self.axes);
        self.state.point_view(
            self.id,
            point.key,
            point.x,
            vertex,
            label,
            &self.style,
            cycle.z_index(K::Z_ORDER),
            cycle.animations(),
            surface,
        )
    }

    /// Draws the figures and releases views of points that disappeared.
    pub fn on_update_end(
        &mut self,
        cycle: &SeriesCycle<'_>,
        surface: &mut dyn DrawSurface,
    ) -> Result<CycleSummary, CycleError> {
        self.kind.finish();
        self.state.end(
            self.id,
            &self.style,
            cycle.z_index(K::Z_ORDER),
            cycle.animations(),
            surface,
        )
    }

    /// Runs a full cycle. Invalid data aborts before anything is touched.
    pub fn update(
        &mut self,
        cycle: &SeriesCycle<'_>,
        surface: &mut dyn DrawSurface,
    ) -> Result<CycleSummary, CycleError> {
        self.validate()?;
        self.on_update_start(cycle)?;
        let points = core::mem::take(&mut self.points);
        let result = x_order(points.iter().map(|p| p.x))
            .into_iter()
            .try_for_each(|i| {
                let p = &points[i];
                let label = (self.label_point)(p);
                self.get_or_create_point_view(p, &label, cycle, surface)
                    .map(|_| ())
            });
        self.points = points;
        result?;
        self.on_update_end(cycle, surface)
    }

    /// Detaches every element.
    pub fn release_all(&mut self, surface: &mut dyn DrawSurface) {
        self.state.release_all(surface);
    }
}
