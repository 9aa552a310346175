use layout21::raw::{Int, Point, Rect};

/// Creates a `w` x `h` rectangle with its lower-left corner at the origin.
pub fn rect(w: Int, h: Int) -> Rect {
    Rect {
        p0: Point::new(0, 0),
        p1: Point::new(w, h),
    }
}

/// Edge accessors and pure placement operations for [`Rect`].
///
/// All `with_*` methods move the rectangle without changing its size;
/// the anchored edge lands exactly on the requested coordinate.
pub trait RectExt {
    fn xmin(&self) -> Int;
    fn xmax(&self) -> Int;
    fn ymin(&self) -> Int;
    fn ymax(&self) -> Int;
    fn width(&self) -> Int;
    fn height(&self) -> Int;
    fn xcenter(&self) -> Int;
    fn ycenter(&self) -> Int;

    fn with_xmin(&self, x: Int) -> Rect;
    fn with_xmax(&self, x: Int) -> Rect;
    fn with_ymin(&self, y: Int) -> Rect;
    fn with_ymax(&self, y: Int) -> Rect;
    fn with_xcenter(&self, x: Int) -> Rect;
    fn with_ycenter(&self, y: Int) -> Rect;
    fn with_center(&self, x: Int, y: Int) -> Rect;

    fn translated(&self, dx: Int, dy: Int) -> Rect;
    /// Expands by `dx` on the left and right, `dy` on the bottom and top.
    fn grow_xy(&self, dx: Int, dy: Int) -> Rect;
    fn grow(&self, d: Int) -> Rect;
    fn shrink(&self, d: Int) -> Rect;
    fn union(&self, other: &Rect) -> Rect;
}

impl RectExt for Rect {
    fn xmin(&self) -> Int {
        self.p0.x
    }
    fn xmax(&self) -> Int {
        self.p1.x
    }
    fn ymin(&self) -> Int {
        self.p0.y
    }
    fn ymax(&self) -> Int {
        self.p1.y
    }
    fn width(&self) -> Int {
        self.p1.x - self.p0.x
    }
    fn height(&self) -> Int {
        self.p1.y - self.p0.y
    }
    fn xcenter(&self) -> Int {
        (self.p0.x + self.p1.x) / 2
    }
    fn ycenter(&self) -> Int {
        (self.p0.y + self.p1.y) / 2
    }

    fn with_xmin(&self, x: Int) -> Rect {
        self.translated(x - self.xmin(), 0)
    }
    fn with_xmax(&self, x: Int) -> Rect {
        self.translated(x - self.xmax(), 0)
    }
    fn with_ymin(&self, y: Int) -> Rect {
        self.translated(0, y - self.ymin())
    }
    fn with_ymax(&self, y: Int) -> Rect {
        self.translated(0, y - self.ymax())
    }
    fn with_xcenter(&self, x: Int) -> Rect {
        self.translated(x - self.xcenter(), 0)
    }
    fn with_ycenter(&self, y: Int) -> Rect {
        self.translated(0, y - self.ycenter())
    }
    fn with_center(&self, x: Int, y: Int) -> Rect {
        self.translated(x - self.xcenter(), y - self.ycenter())
    }

    fn translated(&self, dx: Int, dy: Int) -> Rect {
        Rect {
            p0: Point::new(self.p0.x + dx, self.p0.y + dy),
            p1: Point::new(self.p1.x + dx, self.p1.y + dy),
        }
    }
    fn grow_xy(&self, dx: Int, dy: Int) -> Rect {
        Rect {
            p0: Point::new(self.p0.x - dx, self.p0.y - dy),
            p1: Point::new(self.p1.x + dx, self.p1.y + dy),
        }
    }
    fn grow(&self, d: Int) -> Rect {
        self.grow_xy(d, d)
    }
    fn shrink(&self, d: Int) -> Rect {
        self.grow(-d)
    }
    fn union(&self, other: &Rect) -> Rect {
        Rect {
            p0: Point::new(self.p0.x.min(other.p0.x), self.p0.y.min(other.p0.y)),
            p1: Point::new(self.p1.x.max(other.p1.x), self.p1.y.max(other.p1.y)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchors_preserve_size() {
        let r = rect(420, 310);
        for anchored in [
            r.with_xmin(-75),
            r.with_xmax(13),
            r.with_ymin(990),
            r.with_ymax(-4),
            r.with_center(55, -210),
        ] {
            assert_eq!(anchored.width(), 420);
            assert_eq!(anchored.height(), 310);
        }
        assert_eq!(r.with_xmax(13).xmax(), 13);
        assert_eq!(r.with_ymin(990).ymin(), 990);
        assert_eq!(r.with_center(56, -210).xcenter(), 56);
    }

    #[test]
    fn test_grow_shrink() {
        let r = rect(1000, 600).grow(160);
        assert_eq!(r.xmin(), -160);
        assert_eq!(r.ymax(), 760);
        assert_eq!(r.shrink(160), rect(1000, 600));
    }

    #[test]
    fn test_union() {
        let a = rect(100, 100);
        let b = rect(50, 50).translated(200, -20);
        let u = a.union(&b);
        assert_eq!(u.xmin(), 0);
        assert_eq!(u.ymin(), -20);
        assert_eq!(u.xmax(), 250);
        assert_eq!(u.ymax(), 100);
    }
}
