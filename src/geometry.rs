//! Geometry Model
//!
//! Shapes are collections of rings ("lines"), each a sequence of points in
//!   device pixel space. Rings are closed implicitly when filled; the first
//!   point is never repeated at the end.
//!
//!     let mut shape = mapraster::Shape::new();
//!     shape.move_to(2.0, 2.0);
//!     shape.line_to(2.0, 5.0);
//!     shape.line_to(5.0, 5.0);
//!     shape.line_to(5.0, 2.0);
//!     assert_eq!(shape.num_lines(), 1);
//!     assert_eq!(shape.num_points(), 4);
//!

#[cfg(feature = "serialization")]
use serde::{Serialize, Deserialize};

/// Coordinate value of a PEN-UP marker in a symbol point list
///
/// A point with both coordinates equal to `PEN_UP` starts a new sub-path
pub const PEN_UP : f64 = -99.0;

/// Point in device pixel space
#[derive(Debug,Default,Copy,Clone,PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    /// PEN-UP marker
    pub fn pen_up() -> Self {
        Self::new(PEN_UP, PEN_UP)
    }
    /// Is this point a PEN-UP marker
    pub fn is_pen_up(&self) -> bool {
        self.x == PEN_UP && self.y == PEN_UP
    }
}

impl From<(f64,f64)> for Point {
    fn from(p: (f64, f64)) -> Self {
        Point::new(p.0, p.1)
    }
}

/// Rectangle
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Rectangle<T: std::cmp::PartialOrd + Copy> {
    /// Minimum x value
    pub x1: T,
    /// Minimum y value
    pub y1: T,
    /// Maximum x value
    pub x2: T,
    /// Maximum y value
    pub y2: T,
}
impl<T> Rectangle<T> where T: std::cmp::PartialOrd + Copy {
    /// Create a new Rectangle
    ///
    /// Values are sorted before storing
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        let (x1, x2) = if x1 > x2 { (x2,x1) } else { (x1,x2) };
        let (y1, y2) = if y1 > y2 { (y2,y1) } else { (y1,y2) };
        Self { x1,y1,x2,y2 }
    }
    /// Expand if the point (x,y) is outside
    pub fn expand(&mut self, x: T, y: T) {
        if x < self.x1 { self.x1 = x; }
        if x > self.x2 { self.x2 = x; }
        if y < self.y1 { self.y1 = y; }
        if y > self.y2 { self.y2 = y; }
    }
    /// Expand if the rectangle is outside
    pub fn expand_rect(&mut self, r: &Rectangle<T>) {
        self.expand(r.x1, r.y1);
        self.expand(r.x2, r.y2);
    }
    /// Point (x,y) lies inside or on the border
    pub fn contains(&self, x: T, y: T) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }
}

/// Bounding box of a set of points, PEN-UP markers are skipped
pub fn bounding_rect(pts: &[Point]) -> Option<Rectangle<f64>> {
    let mut iter = pts.iter().filter(|p| ! p.is_pen_up());
    let p0 = iter.next()?;
    let mut r = Rectangle::new(p0.x, p0.y, p0.x, p0.y);
    for p in iter {
        r.expand(p.x, p.y);
    }
    Some(r)
}

/// Orientation of a ring as seen on screen (y axis pointing down)
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum PathOrientation {
    Clockwise,
    CounterClockwise
}

/// Ring of points, the "line" of a shape
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Line {
    pub points: Vec<Point>,
}

impl Line {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    /// Twice the signed area of the implicitly closed ring
    ///
    /// Positive for rings which are clockwise on screen
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        let mut area = 0.0;
        for (i,p1) in self.points.iter().enumerate() {
            let p2 = self.points[(i+1) % n];
            area += p1.x * p2.y - p1.y * p2.x;
        }
        area
    }
    /// Orientation, None for rings with no area
    pub fn orientation(&self) -> Option<PathOrientation> {
        let area = self.signed_area();
        if area > 0.0 {
            Some(PathOrientation::Clockwise)
        } else if area < 0.0 {
            Some(PathOrientation::CounterClockwise)
        } else {
            None
        }
    }
    /// Reverse the point order
    pub fn invert(&mut self) {
        self.points.reverse();
    }
    pub fn bounding_rect(&self) -> Option<Rectangle<f64>> {
        bounding_rect(&self.points)
    }
}

impl From<Vec<Point>> for Line {
    fn from(points: Vec<Point>) -> Self {
        Line::new(points)
    }
}
impl From<Vec<(f64,f64)>> for Line {
    fn from(points: Vec<(f64,f64)>) -> Self {
        Line::new(points.into_iter().map(Point::from).collect())
    }
}

/// Polygon or polyline made of one or more rings
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Shape {
    pub lines: Vec<Line>,
}

impl Shape {
    pub fn new() -> Self {
        Self { lines: vec![] }
    }
    /// Create a shape from a set of rings
    pub fn with_lines<L: Into<Line>>(lines: Vec<L>) -> Self {
        Self { lines: lines.into_iter().map(|l| l.into()).collect() }
    }
    /// Add a ring
    pub fn add_line<L: Into<Line>>(&mut self, line: L) {
        self.lines.push(line.into());
    }
    /// Start a new ring at (`x`,`y`)
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.lines.push(Line::new(vec![Point::new(x,y)]));
    }
    /// Add a point to the current ring, starting one if needed
    pub fn line_to(&mut self, x: f64, y: f64) {
        match self.lines.last_mut() {
            Some(line) => line.points.push(Point::new(x,y)),
            None => self.move_to(x,y),
        }
    }
    pub fn num_lines(&self) -> usize {
        self.lines.len()
    }
    /// Total number of points over all rings
    pub fn num_points(&self) -> usize {
        self.lines.iter().map(|l| l.len()).sum()
    }
    /// Nothing to draw
    pub fn is_empty(&self) -> bool {
        self.num_points() == 0
    }
    pub fn bounding_rect(&self) -> Option<Rectangle<f64>> {
        let mut out : Option<Rectangle<f64>> = None;
        for r in self.lines.iter().filter_map(|l| l.bounding_rect()) {
            match out.as_mut() {
                Some(o) => o.expand_rect(&r),
                None => out = Some(r),
            }
        }
        out
    }
    /// Shift every point by (`dx`,`dy`)
    pub fn translate(&mut self, dx: f64, dy: f64) {
        for p in self.lines.iter_mut().flat_map(|l| l.points.iter_mut()) {
            p.x += dx;
            p.y += dy;
        }
    }
    /// Orient the first ring as `dir` and all others in the opposite direction
    ///
    /// Rings without area are left alone
    pub fn arrange_orientations(&mut self, dir: PathOrientation) {
        let inner = match dir {
            PathOrientation::Clockwise => PathOrientation::CounterClockwise,
            PathOrientation::CounterClockwise => PathOrientation::Clockwise,
        };
        for (i, line) in self.lines.iter_mut().enumerate() {
            let want = if i == 0 { dir } else { inner };
            if let Some(o) = line.orientation() {
                if o != want {
                    line.invert();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64, y: f64, s: f64) -> Line {
        Line::from(vec![(x,y), (x+s,y), (x+s,y+s), (x,y+s)])
    }

    #[test]
    fn orientation() {
        let mut l = square(0.0, 0.0, 10.0);
        assert_eq!(l.signed_area(), 200.0);
        assert_eq!(l.orientation(), Some(PathOrientation::Clockwise));
        l.invert();
        assert_eq!(l.orientation(), Some(PathOrientation::CounterClockwise));
        let flat = Line::from(vec![(0.0,0.0), (5.0,0.0)]);
        assert_eq!(flat.orientation(), None);
    }

    #[test]
    fn arrange() {
        let mut s = Shape::with_lines(vec![square(0.0,0.0,10.0), square(2.0,2.0,3.0)]);
        s.lines[0].invert();
        s.arrange_orientations(PathOrientation::Clockwise);
        assert_eq!(s.lines[0].orientation(), Some(PathOrientation::Clockwise));
        assert_eq!(s.lines[1].orientation(), Some(PathOrientation::CounterClockwise));
    }

    #[test]
    fn bounds_skip_pen_up() {
        let pts = vec![Point::new(1.0,2.0), Point::pen_up(), Point::new(4.0,-1.0)];
        let r = bounding_rect(&pts).unwrap();
        assert_eq!(r, Rectangle::new(1.0, -1.0, 4.0, 2.0));
        assert!(bounding_rect(&[Point::pen_up()]).is_none());
    }

    #[test]
    fn builder() {
        let mut s = Shape::new();
        s.line_to(1.0, 1.0);
        s.line_to(2.0, 1.0);
        s.move_to(5.0, 5.0);
        assert_eq!(s.num_lines(), 2);
        assert_eq!(s.num_points(), 3);
        s.translate(1.0, -1.0);
        assert_eq!(s.lines[1].points[0], Point::new(6.0, 4.0));
        assert_eq!(s.bounding_rect(), Some(Rectangle::new(2.0, 0.0, 6.0, 4.0)));
    }
}
