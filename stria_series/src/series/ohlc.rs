// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Open/high/low/close bars.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use peniko::{Brush, Color};
use stria_core::{
    CycleError, DATA_LABELS, Dashes, DrawSurface, Element, ElementId, ElementRole, ElementStyle,
    Label, PointKey, Recycler, SeriesId, Shape, StrokeStyle, ZOrderRule,
};

use super::{CycleSummary, SeriesCycle, remove_all, sync_element};
use crate::frame::AxisOrientation;
use crate::geometry::{OhlcGeometry, ohlc_tick_length};
use crate::point::{Limits, OhlcPoint, validate_points};

/// Appearance of an OHLC series.
#[derive(Clone, Debug, PartialEq)]
pub struct OhlcStyle {
    /// Width of every segment.
    pub stroke_width: f64,
    /// Dash pattern; `None` draws solid segments.
    pub dashes: Option<Dashes>,
    /// Upper bound on the bar width, in surface units.
    pub max_column_width: f64,
    /// Paint of bars that closed above their open.
    pub increase: Brush,
    /// Paint of every other bar.
    pub decrease: Brush,
    /// Whether each bar carries a data label.
    pub data_labels: bool,
    /// Data label paint.
    pub label_fill: Brush,
    /// Whether the series is shown.
    pub visible: bool,
}

impl Default for OhlcStyle {
    fn default() -> Self {
        Self {
            stroke_width: 2.5,
            dashes: None,
            max_column_width: 35.0,
            increase: Brush::Solid(Color::from_rgb8(76, 174, 80)),
            decrease: Brush::Solid(Color::from_rgb8(238, 83, 80)),
            data_labels: false,
            label_fill: Brush::Solid(Color::from_rgb8(229, 229, 229)),
            visible: true,
        }
    }
}

impl OhlcStyle {
    /// Sets the segment width.
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    /// Sets the dash pattern.
    pub fn with_dashes(mut self, dashes: Option<Dashes>) -> Self {
        self.dashes = dashes;
        self
    }

    /// Sets the maximum bar width.
    pub fn with_max_column_width(mut self, width: f64) -> Self {
        self.max_column_width = width;
        self
    }

    /// Sets the increase and decrease paints.
    pub fn with_brushes(mut self, increase: impl Into<Brush>, decrease: impl Into<Brush>) -> Self {
        self.increase = increase.into();
        self.decrease = decrease.into();
        self
    }

    /// Turns data labels on or off.
    pub fn with_data_labels(mut self, on: bool) -> Self {
        self.data_labels = on;
        self
    }

    /// Shows or hides the series.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    fn segment_style(&self, point: &OhlcPoint, z_index: i32) -> ElementStyle {
        let brush = if point.is_increase() {
            &self.increase
        } else {
            &self.decrease
        };
        let stroke =
            StrokeStyle::solid(brush.clone(), self.stroke_width).with_dashes(self.dashes.clone());
        ElementStyle::stroked(stroke, z_index).with_visible(self.visible)
    }
}

/// Elements owned by one OHLC bar.
#[derive(Clone, Debug, PartialEq)]
pub struct OhlcView {
    /// High to low.
    pub high_low: Element,
    /// Open tick, left of the bar.
    pub open: Element,
    /// Close tick, right of the bar.
    pub close: Element,
    /// Data label above the high, when labels are on.
    pub label: Option<Element>,
}

impl OhlcView {
    /// Every element of the view.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        [&self.high_low, &self.open, &self.close]
            .into_iter()
            .chain(self.label.iter())
    }
}

fn default_label(p: &OhlcPoint) -> String {
    format!("O: {}, H: {}, L: {}, C: {}", p.open, p.high, p.low, p.close)
}

/// A financial series drawing one bar per point.
#[derive(Debug)]
pub struct OhlcSeries {
    id: SeriesId,
    points: Vec<OhlcPoint>,
    style: OhlcStyle,
    axes: (usize, usize),
    label_point: fn(&OhlcPoint) -> String,
    recycler: Recycler<OhlcView>,
    created: usize,
    reused: usize,
}

impl OhlcSeries {
    /// Creates a series on the first X and Y axes, with the default [`OhlcStyle`].
    pub fn new(id: SeriesId, points: Vec<OhlcPoint>) -> Self {
        Self {
            id,
            points,
            style: OhlcStyle::default(),
            axes: (0, 0),
            label_point: default_label,
            recycler: Recycler::new(),
            created: 0,
            reused: 0,
        }
    }

    /// Sets the style.
    pub fn with_style(mut self, style: OhlcStyle) -> Self {
        self.style = style;
        self
    }

    /// Plots the series against the given X and Y axes.
    pub fn with_axes(mut self, x: usize, y: usize) -> Self {
        self.axes = (x, y);
        self
    }

    /// Sets the function producing data label text.
    pub fn with_label_point(mut self, f: fn(&OhlcPoint) -> String) -> Self {
        self.label_point = f;
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
    pub fn points(&self) -> &[OhlcPoint] {
        &self.points
    }

    /// Replaces the data; takes effect on the next cycle.
    pub fn set_points(&mut self, points: Vec<OhlcPoint>) {
        self.points = points;
    }

    /// The style.
    pub fn style(&self) -> &OhlcStyle {
        &self.style
    }

    /// Mutable style; reapplied to every bar on the next cycle.
    pub fn style_mut(&mut self) -> &mut OhlcStyle {
        &mut self.style
    }

    /// The view of a point, if it survived the last cycle.
    pub fn view(&self, key: PointKey) -> Option<&OhlcView> {
        self.recycler.get(key)
    }

    /// Data extent. X is padded by half a unit on each side so edge bars fit.
    pub fn limits(&self) -> Option<Limits> {
        let l = Limits::scan(
            self.points
                .iter()
                .flat_map(|p| [(p.x, p.low), (p.x, p.high)]),
        )?;
        Some(Limits {
            x: (l.x.0 - 0.5, l.x.1 + 0.5),
            y: l.y,
        })
    }

    /// Checks every point; an error means the cycle must not start.
    pub fn validate(&self) -> Result<(), CycleError> {
        validate_points(&self.points, |p| p.key, OhlcPoint::validate)
    }

    /// Opens a cycle.
    pub fn on_update_start(&mut self) -> Result<(), CycleError> {
        self.recycler.begin_cycle()?;
        self.created = 0;
        self.reused = 0;
        Ok(())
    }

    /// Returns the bar of `point`, creating it if the point is new.
    ///
    /// Geometry and style are reapplied every cycle; the color follows the point's direction.
    /// A point that cannot be drawn is rejected before anything is touched; its index is its
    /// position in this cycle's feed.
    pub fn get_or_create_point_view(
        &mut self,
        point: &OhlcPoint,
        label: &str,
        cycle: &SeriesCycle<'_>,
        surface: &mut dyn DrawSurface,
    ) -> Result<&OhlcView, CycleError> {
        let index = self.created + self.reused;
        point
            .validate()
            .map_err(|reason| CycleError::InvalidDataPoint { index, reason })?;
        let (xa, ya) = self.axes;
        let chart = cycle.chart;
        let y = |v: f64| chart.to_surface(v, AxisOrientation::Y, ya);
        let x = chart.to_surface(point.x, AxisOrientation::X, xa);
        let tick = ohlc_tick_length(
            chart.unit_width(AxisOrientation::X, xa),
            self.style.max_column_width,
        );
        let geometry = OhlcGeometry::new(
            x,
            y(point.high),
            y(point.low),
            y(point.open),
            y(point.close),
            tick,
        );
        let z_index = cycle.z_index(ZOrderRule::AddOrder);
        let style = self.style.segment_style(point, z_index);
        let policy = cycle.animations();
        let series = self.id;
        let key = point.key;
        let id = |role| ElementId::for_point(series, key, role);

        let acquired = self.recycler.acquire(key, || OhlcView {
            high_low: Element::new(
                id(ElementRole::HighLow),
                Shape::Line(geometry.high_low),
                style.clone(),
            ),
            open: Element::new(
                id(ElementRole::OpenTick),
                Shape::Line(geometry.open),
                style.clone(),
            ),
            close: Element::new(
                id(ElementRole::CloseTick),
                Shape::Line(geometry.close),
                style.clone(),
            ),
            label: None,
        })?;
        let view = acquired.view;
        if acquired.is_new {
            self.created += 1;
            tracing::trace!(series = series.0, key = key.0, "new ohlc bar");
            surface.add(&view.high_low);
            surface.add(&view.open);
            surface.add(&view.close);
        } else {
            self.reused += 1;
            for (el, line) in [
                (&mut view.high_low, geometry.high_low),
                (&mut view.open, geometry.open),
                (&mut view.close, geometry.close),
            ] {
                el.retarget(Shape::Line(line), false, policy);
                el.style = style.clone();
                surface.ensure_attached(el);
            }
        }

        let label = self.style.data_labels.then(|| {
            (
                Shape::Label(Label {
                    text: label.into(),
                    anchor: Point::new(x, geometry.high_low.p0.y),
                }),
                ElementStyle::filled(self.style.label_fill.clone(), z_index.saturating_add(DATA_LABELS))
                    .with_visible(self.style.visible),
            )
        });
        sync_element(
            &mut view.label,
            id(ElementRole::Label),
            label,
            policy,
            surface,
        );
        Ok(view)
    }

    /// Releases the bars of points that disappeared.
    pub fn on_update_end(&mut self, surface: &mut dyn DrawSurface) -> Result<CycleSummary, CycleError> {
        let released = self.recycler.end_cycle()?;
        for (_, view) in &released {
            remove_all(view.elements(), surface);
        }
        let summary = CycleSummary {
            created: self.created,
            reused: self.reused,
            released: released.len(),
            figures: 0,
        };
        tracing::debug!(
            series = self.id.0,
            created = summary.created,
            reused = summary.reused,
            released = summary.released,
            "ohlc series updated"
        );
        Ok(summary)
    }

    /// Runs a full cycle. Invalid data aborts before anything is touched.
    pub fn update(
        &mut self,
        cycle: &SeriesCycle<'_>,
        surface: &mut dyn DrawSurface,
    ) -> Result<CycleSummary, CycleError> {
        self.validate()?;
        self.on_update_start()?;
        let points = core::mem::take(&mut self.points);
        let result = points.iter().try_for_each(|p| {
            let label = (self.label_point)(p);
            self.get_or_create_point_view(p, &label, cycle, surface)
                .map(|_| ())
        });
        self.points = points;
        result?;
        self.on_update_end(surface)
    }

    /// Detaches every element.
    pub fn release_all(&mut self, surface: &mut dyn DrawSurface) {
        for (_, view) in self.recycler.drain() {
            remove_all(view.elements(), surface);
        }
    }
}
