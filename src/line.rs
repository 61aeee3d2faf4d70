//! Bresenham Lines

/// Pixels of a line from (`x1`,`y1`) to (`x2`,`y2`), both end points included
///
///     use mapraster::BresenhamLine;
///
///     let pts : Vec<_> = BresenhamLine::new(0,0, 3,1).collect();
///     assert_eq!(pts, vec![(0,0), (1,0), (2,1), (3,1)]);
///
#[derive(Debug,Clone)]
pub struct BresenhamLine {
    x: i64,
    y: i64,
    /// Line is primarily vertical
    ver: bool,
    /// Number of pixels still to produce
    len: i64,
    xinc: i64,
    yinc: i64,
    /// Distance along the minor axis times 2, scaled by the major axis
    err: i64,
    dmajor: i64,
    dminor: i64,
}

impl BresenhamLine {
    /// Line between two pixels
    ///
    /// Lengths beyond `i64::MAX / 2` pixels saturate; callers clip long
    ///   lines to the image first
    pub fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        let dx = x2.saturating_sub(x1).saturating_abs().min(i64::MAX / 2);
        let dy = y2.saturating_sub(y1).saturating_abs().min(i64::MAX / 2);
        let ver = dy > dx;
        let (dmajor, dminor) = if ver { (dy, dx) } else { (dx, dy) };
        let xinc = if x2 >= x1 { 1 } else { -1 };
        let yinc = if y2 >= y1 { 1 } else { -1 };
        Self { x: x1, y: y1, ver, len: dmajor + 1,
               xinc, yinc, err: 2 * dminor - dmajor, dmajor, dminor }
    }
    /// Number of pixels remaining
    pub fn remaining(&self) -> usize {
        self.len.max(0) as usize
    }
}

impl Iterator for BresenhamLine {
    type Item = (i64, i64);
    fn next(&mut self) -> Option<Self::Item> {
        if self.len <= 0 {
            return None;
        }
        let out = (self.x, self.y);
        self.len -= 1;
        if self.len == 0 {
            return Some(out);
        }
        if self.err > 0 {
            if self.ver { self.x += self.xinc } else { self.y += self.yinc }
            self.err -= 2 * self.dmajor;
        }
        if self.ver { self.y += self.yinc } else { self.x += self.xinc }
        self.err += 2 * self.dminor;
        Some(out)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl ExactSizeIterator for BresenhamLine {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_point() {
        let p : Vec<_> = BresenhamLine::new(4,5, 4,5).collect();
        assert_eq!(p, vec![(4,5)]);
    }

    #[test]
    fn axis_aligned() {
        let p : Vec<_> = BresenhamLine::new(3,1, 0,1).collect();
        assert_eq!(p, vec![(3,1), (2,1), (1,1), (0,1)]);
        let p : Vec<_> = BresenhamLine::new(0,0, 0,-2).collect();
        assert_eq!(p, vec![(0,0), (0,-1), (0,-2)]);
    }

    #[test]
    fn diagonal() {
        let p : Vec<_> = BresenhamLine::new(0,3, 3,0).collect();
        assert_eq!(p, vec![(0,3), (1,2), (2,1), (3,0)]);
    }

    #[test]
    fn extreme_ends() {
        let mut p = BresenhamLine::new(i64::MIN, 5, i64::MAX, 5);
        assert_eq!(p.next(), Some((i64::MIN, 5)));
        assert_eq!(p.next(), Some((i64::MIN + 1, 5)));
        assert!(p.remaining() > 0);
    }

    #[test]
    fn all_octants_are_connected() {
        let ends = [(7,2), (2,7), (-2,7), (-7,2), (-7,-2), (-2,-7), (2,-7), (7,-2)];
        for &(x2,y2) in ends.iter() {
            let p : Vec<_> = BresenhamLine::new(0,0, x2,y2).collect();
            assert_eq!(p[0], (0,0));
            assert_eq!(*p.last().unwrap(), (x2,y2));
            assert_eq!(p.len() as i64, x2.abs().max(y2.abs()) + 1);
            for w in p.windows(2) {
                assert!((w[0].0 - w[1].0).abs() <= 1);
                assert!((w[0].1 - w[1].1).abs() <= 1);
            }
        }
    }
}
