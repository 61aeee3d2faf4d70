//! Scanline Polygon Rasterizer
//!
//! Based on "Concave Polygon Scan Conversion" by Paul Heckbert,
//!   Graphics Gems, Academic Press, 1990
//!
//! Scanline `y` is at `y + 0.5` in continuous coordinates. For each
//!   scanline, edges touching the vertices between the previous scanline
//!   and this one enter or leave the active list, the active list is sorted
//!   by x and consecutive pairs of edges bound the spans inside the shape.
//!
//!     use mapraster::{Shape, Scanline, RasterizerScanline, Rasterize};
//!
//!     let shape = Shape::with_lines(vec![vec![(2.0,2.0), (2.0,5.0), (5.0,5.0), (5.0,2.0)]]);
//!     let mut ras = RasterizerScanline::new();
//!     ras.add_shape(&shape);
//!
//!     let mut sl = Scanline::new();
//!     let mut rows = vec![];
//!     if ras.rewind_scanlines() {
//!         while ras.sweep_scanline(&mut sl) {
//!             rows.push((sl.y, sl.spans[0].x1, sl.spans[0].x2));
//!         }
//!     }
//!     assert_eq!(rows, vec![(2,2,4), (3,2,4), (4,2,4)]);
//!

use crate::edge::EdgeId;
use crate::edge::EdgeTable;
use crate::geometry::Shape;
use crate::scan::Scanline;
use crate::nint;
use crate::Rasterize;

use std::cmp::Ordering;

/// Aliased scanline rasterizer for polygons with any number of rings
#[derive(Debug,Default)]
pub struct RasterizerScanline {
    table: Option<EdgeTable>,
    /// Edges crossing the current scanline
    active: Vec<EdgeId>,
    /// Next edge to examine in scanline order
    next_edge: usize,
    scan_y: i64,
    /// Last scanline of the sweep
    end_y: i64,
    done: bool,
    offset_x: i64,
    offset_y: i64,
    /// Visible rows, after the offset is applied
    clip_y: Option<(i64, i64)>,
}

impl Rasterize for RasterizerScanline {
    fn reset(&mut self) {
        self.table = None;
        self.active.clear();
        self.next_edge = 0;
        self.done = true;
    }
    /// Prepare a sweep over the rows of the shape inside the clip box
    ///
    /// Every sweep starts from the edge table as built, so a shape may be
    ///   swept any number of times
    fn rewind_scanlines(&mut self) -> bool {
        self.active.clear();
        self.next_edge = 0;
        self.done = true;
        let (y1, y2) = match self.clip_y {
            Some((y1, y2)) => (y1.saturating_sub(self.offset_y), y2.saturating_sub(self.offset_y)),
            None => (i64::MIN, i64::MAX),
        };
        let rows = match self.table.as_mut() {
            Some(t) => t.sort(y1, y2),
            None => return false,
        };
        match rows {
            Some((first, last)) => {
                log::trace!("SWEEP: rows {} .. {}", first, last);
                self.scan_y = first;
                self.end_y = last;
                self.done = false;
                true
            },
            None => false,
        }
    }
    fn sweep_scanline(&mut self, sl: &mut Scanline) -> bool {
        while ! self.done && self.table.is_some() {
            let y = self.scan_y;
            sl.reset_spans();
            self.admit(y);
            self.sort_active();
            self.emit(sl);
            self.advance();
            match y.checked_add(1) {
                Some(n) if n <= self.end_y => self.scan_y = n,
                _ => self.done = true,
            }
            if sl.num_spans() != 0 {
                sl.finalize(y.saturating_add(self.offset_y));
                return true;
            }
        }
        false
    }
}

impl RasterizerScanline {
    pub fn new() -> Self {
        Self::default()
    }
    /// Shift all spans by (`dx`,`dy`) pixels
    pub fn offset(&mut self, dx: i64, dy: i64) {
        self.offset_x = dx;
        self.offset_y = dy;
    }
    /// Only produce scanlines `y1` to `y2`, inclusive
    ///
    /// Rows are those of the spans, with the offset applied
    pub fn clip_box(&mut self, y1: i64, y2: i64) {
        self.clip_y = Some((y1.min(y2), y1.max(y2)));
    }
    /// Replace the current shape
    ///
    /// Shapes without rings or points produce no scanlines
    pub fn add_shape(&mut self, shape: &Shape) {
        self.reset();
        self.table = EdgeTable::new(shape);
    }
    /// Number of edges crossing the current scanline
    pub fn num_active(&self) -> usize {
        self.active.len()
    }
    /// Examine the vertices between the previous scanline and `y`
    ///
    /// For vertex `i`, the edge arriving from the previous vertex and the
    ///   edge leaving toward the next vertex either end here (retire) or
    ///   begin here (admit). The leaving edge is retired one scanline later
    ///   than the arriving one.
    ///
    /// An admitted edge starts at the x of its lower end point, stepped
    ///   down to `y` when the sweep began below its first scanline.
    fn admit(&mut self, y: i64) {
        let table = match self.table.as_mut() {
            Some(t) => t,
            None => return,
        };
        let mut entered = vec![];
        let active = &mut self.active;
        let retire = |active: &mut Vec<EdgeId>, id: EdgeId| {
            if let Some(m) = active.iter().position(|a| *a == id) {
                log::trace!("SCANLINE {}: retire {:?}", y, id);
                active.swap_remove(m);
            }
        };
        while self.next_edge < table.sorted().len() {
            let i = table.sorted()[self.next_edge];
            if table.edge(i).s > y {
                break;
            }
            let prev = table.prev(i);
            if table.edge(prev).s <= y {
                retire(active, prev);
            } else {
                log::trace!("SCANLINE {}: admit {:?}", y, prev);
                active.push(prev);
                entered.push(prev);
            }
            let next = table.next(i);
            if table.edge(next).s < y {
                retire(active, i);
            } else if table.edge(next).s > y {
                log::trace!("SCANLINE {}: admit {:?}", y, i);
                active.push(i);
                entered.push(i);
            }
            self.next_edge += 1;
        }
        let yf = y as f64;
        for id in entered {
            let e = table.edge_mut(id);
            e.x = if yf > e.y0 { e.x0 + (yf - e.y0) * e.dx } else { e.x0 };
        }
    }
    fn sort_active(&mut self) {
        if let Some(table) = &self.table {
            self.active.sort_by(|a, b| {
                table.edge(*a).x.partial_cmp(&table.edge(*b).x).unwrap_or(Ordering::Equal)
            });
        }
    }
    /// Pair sorted edges into spans; j -> j+1 is inside, j+1 -> j+2 is outside
    fn emit(&self, sl: &mut Scanline) {
        let table = match &self.table {
            Some(t) => t,
            None => return,
        };
        if self.active.len() % 2 == 1 {
            log::debug!("SCANLINE {}: odd number of active edges ({})",
                        self.scan_y, self.active.len());
        }
        for pair in self.active.chunks_exact(2) {
            let xl = table.edge(pair[0]).x;
            let xr = table.edge(pair[1]).x;
            if xl != xr {
                sl.add_span(nint(xl).saturating_add(self.offset_x),
                            ((xr - 0.5) as i64).saturating_add(self.offset_x));
            }
        }
    }
    /// Step the x-intersections to the next scanline
    fn advance(&mut self) {
        if let Some(table) = self.table.as_mut() {
            for id in &self.active {
                let e = table.edge_mut(*id);
                e.x += e.dx;
            }
        }
    }
}
