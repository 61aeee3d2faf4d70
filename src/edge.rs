//! Edge Table
//!
//! One edge per ring vertex `i`, running from point `i` to point `i+1`
//!   (wrapping to the first point of the ring). Edges are identified by
//!   their ring and their position within the ring, so neighbors never
//!   cross ring boundaries.
//!
//! The scanline order is built for the rows of one sweep. Vertices above
//!   the first row share a single bucket in front, vertices below the last
//!   row a single bucket at the end, so the histogram never grows beyond
//!   the rows actually swept.

use std::convert::TryFrom;
use crate::geometry::Shape;
use crate::nint;

/// Ring and vertex index of an edge
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct EdgeId {
    /// Ring (line) of the shape
    pub line: usize,
    /// Vertex index within the ring
    pub index: usize,
}

impl EdgeId {
    pub fn new(line: usize, index: usize) -> Self {
        Self { line, index }
    }
}

/// Polygon edge
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Edge {
    /// x coordinate of the intersection with the current scanline
    pub x: f64,
    /// Lower end point, y rounded to its scanline
    pub x0: f64,
    pub y0: f64,
    /// Change in x with respect to y, 0 for horizontal edges
    pub dx: f64,
    /// Ring and vertex of the edge
    pub id: EdgeId,
    /// Scanline of vertex `id`, round(y) of the unoriented start point
    pub s: i64,
}

/// All edges of a shape, bucket sorted by scanline
#[derive(Debug,Default,Clone)]
pub struct EdgeTable {
    /// Edges, ring after ring
    edges: Vec<Edge>,
    /// Position in `edges` of the first edge of each ring
    starts: Vec<usize>,
    /// Number of edges in each ring
    counts: Vec<usize>,
    /// Edges ordered by `s`, filled by `sort`
    sorted: Vec<EdgeId>,
    /// First scanline
    pub ymin: i64,
    /// Last scanline
    pub ymax: i64,
}

impl EdgeTable {
    /// Build the edge table for a shape
    ///
    /// Returns None if the shape has no rings or no points
    pub fn new(shape: &Shape) -> Option<Self> {
        let n = shape.num_points();
        if shape.num_lines() == 0 || n == 0 {
            return None;
        }
        let mut edges = Vec::with_capacity(n);
        let mut starts = Vec::with_capacity(shape.num_lines());
        let mut counts = Vec::with_capacity(shape.num_lines());
        let mut ymin = i64::MAX;
        let mut ymax = i64::MIN;

        for (l, line) in shape.lines.iter().enumerate() {
            let pts = &line.points;
            starts.push(edges.len());
            counts.push(pts.len());
            for i in 0 .. pts.len() {
                let j = if i + 1 < pts.len() { i + 1 } else { 0 };
                let (p1, p2) = if pts[i].y < pts[j].y {
                    (pts[i], pts[j])
                } else {
                    (pts[j], pts[i])
                };
                let dx = if p2.y == p1.y { 0.0 } else { (p2.x - p1.x) / (p2.y - p1.y) };
                let s = nint(pts[i].y);
                ymin = ymin.min(s);
                ymax = ymax.max(s);
                edges.push(Edge { x: p1.x, x0: p1.x, y0: p1.y.round(), dx, id: EdgeId::new(l, i), s });
            }
        }
        log::trace!("EDGE TABLE: {} edges in {} lines, y {} .. {}",
                    edges.len(), starts.len(), ymin, ymax);
        Some(Self { edges, starts, counts, sorted: vec![], ymin, ymax })
    }
    /// Order the edges for a sweep over rows `y1` to `y2`
    ///
    /// Returns the rows the shape covers within `y1 ..= y2`, None if it
    ///   covers none of them
    pub fn sort(&mut self, y1: i64, y2: i64) -> Option<(i64, i64)> {
        let lo = y1.max(self.ymin);
        let hi = y2.min(self.ymax);
        if lo > hi {
            self.sorted.clear();
            return None;
        }
        self.sorted = match hi.checked_sub(lo).and_then(|r| usize::try_from(r).ok()) {
            Some(r) if r < MAX_BUCKETS => bucket_sort(&self.edges, lo, r),
            _ => {
                let mut ids : Vec<_> = self.edges.iter().map(|e| (e.s, e.id)).collect();
                ids.sort_by_key(|&(s, _)| s);
                ids.into_iter().map(|(_, id)| id).collect()
            }
        };
        Some((lo, hi))
    }
    /// Number of edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
    fn flat(&self, id: EdgeId) -> usize {
        self.starts[id.line] + id.index
    }
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[self.flat(id)]
    }
    pub fn edge_mut(&mut self, id: EdgeId) -> &mut Edge {
        let k = self.flat(id);
        &mut self.edges[k]
    }
    /// Edge ending at the start vertex of `id`
    pub fn prev(&self, id: EdgeId) -> EdgeId {
        let n = self.counts[id.line];
        EdgeId::new(id.line, (id.index + n - 1) % n)
    }
    /// Edge starting at the end vertex of `id`
    pub fn next(&self, id: EdgeId) -> EdgeId {
        let n = self.counts[id.line];
        EdgeId::new(id.line, (id.index + 1) % n)
    }
    /// Edges ordered by scanline `s`, ties in ring order
    pub fn sorted(&self) -> &[EdgeId] {
        &self.sorted
    }
}

/// Sweeps taller than this are ordered with a comparison sort
const MAX_BUCKETS: usize = 1 << 16;

/// Histogram sort of the edges by `s` over rows `lo ..= lo + rows`
fn bucket_sort(edges: &[Edge], lo: i64, rows: usize) -> Vec<EdgeId> {
    // One bucket before and one after the swept rows
    let n = rows + 3;
    let bucket = |s: i64| -> usize {
        if s < lo {
            0
        } else {
            match s.checked_sub(lo).and_then(|d| usize::try_from(d).ok()) {
                Some(k) if k <= rows => k + 1,
                _ => n - 1,
            }
        }
    };
    let mut hist = vec![0usize; n + 1];
    for e in edges {
        hist[bucket(e.s) + 1] += 1;
    }
    for i in 0 .. n {
        hist[i+1] += hist[i];
    }
    let mut out = vec![EdgeId::default(); edges.len()];
    for e in edges {
        let k = bucket(e.s);
        out[hist[k]] = e.id;
        hist[k] += 1;
    }
    out
}
