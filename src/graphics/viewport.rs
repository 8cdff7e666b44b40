//! Scrolling window over world coordinates.
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

/// A `width` x `height` window centered on a world position. Drawing code
/// passes world coordinates through [`translate_x`](Self::translate_x) and
/// [`translate_y`](Self::translate_y) to get buffer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    center: Point,
    size: Size,
    top_left: Point,
}

impl Viewport {
    /// New viewport centered on the world origin.
    pub fn new(width: u32, height: u32) -> Self {
        let mut viewport = Self {
            center: Point::zero(),
            size: Size::new(width, height),
            top_left: Point::zero(),
        };
        viewport.update_center(0, 0);
        viewport
    }

    pub fn update_center(&mut self, x: i32, y: i32) {
        self.center = Point::new(x, y);
        self.top_left = Point::new(
            x - (self.size.width >> 1) as i32,
            y - (self.size.height >> 1) as i32,
        );
    }

    pub fn translate_x(&self, x: i32) -> i32 {
        x - self.top_left.x
    }

    pub fn translate_y(&self, y: i32) -> i32 {
        y - self.top_left.y
    }

    pub fn translate(&self, world: Point) -> Point {
        world - self.top_left
    }

    /// World x of the left edge.
    pub fn x(&self) -> i32 {
        self.top_left.x
    }

    /// World y of the top edge.
    pub fn y(&self) -> i32 {
        self.top_left.y
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// The visible area in world coordinates.
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(self.top_left, self.size)
    }

    /// Whether a world-space box with upper-left `(x, y)` overlaps the window.
    pub fn is_visible(&self, x: i32, y: i32, width: u32, height: u32) -> bool {
        let area = Rectangle::new(Point::new(x, y), Size::new(width, height));
        let overlap = self.bounds().intersection(&area).size;
        overlap.width > 0 && overlap.height > 0
    }
}
