//! Scanlines

/// Horizontal run of pixels from `x1` to `x2`, inclusive
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Span {
    pub x1: i64,
    pub x2: i64,
}

impl Span {
    /// Number of pixels covered, the end points may be in either order
    pub fn len(&self) -> i64 {
        (self.x2 - self.x1).abs() + 1
    }
}

/// Spans of a single row
#[derive(Debug,Default)]
pub struct Scanline {
    pub spans: Vec<Span>,
    pub y: i64,
}

impl Scanline {
    pub fn new() -> Self {
        Self { y: 0, spans: vec![] }
    }
    pub fn reset_spans(&mut self) {
        self.spans.clear();
    }
    pub fn finalize(&mut self, y: i64) {
        self.y = y;
    }
    pub fn num_spans(&self) -> usize {
        self.spans.len()
    }
    pub fn add_span(&mut self, x1: i64, x2: i64) {
        log::trace!("ADD_SPAN: {} -> {}", x1, x2);
        self.spans.push(Span { x1, x2 });
    }
}
