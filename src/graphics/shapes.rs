//! Rasterized primitives on [`PixelBuffer`].
//!
//! Rectangles take inclusive corner coordinates in any order. Every primitive
//! accepts coordinates outside the buffer and clips per pixel.
use super::color::Color;
use super::pixel_buffer::PixelBuffer;

impl PixelBuffer {
    /// Bresenham line between two inclusive endpoints.
    ///
    /// The endpoints are put in a canonical order first, so swapping them
    /// plots the same pixel set. Axis-aligned lines take a span fast path.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        self.set_color(color);
        if y0 == y1 {
            self.horizontal_span(x0, x1, y0);
            return;
        }
        if x0 == x1 {
            self.vertical_span(x0, y0, y1);
            return;
        }

        let ((x0, y0), (x1, y1)) = if (x0, y0) <= (x1, y1) {
            ((x0, y0), (x1, y1))
        } else {
            ((x1, y1), (x0, y0))
        };
        let dist_x = (x1 - x0).abs();
        let dist_y = (y1 - y0).abs();
        let step_y = if y0 < y1 { 1 } else { -1 };
        let mut err = if dist_x > dist_y { dist_x } else { -dist_y } / 2;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.plot_at(x, y);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = err;
            if e2 > -dist_x {
                err -= dist_y;
                x += 1;
            }
            if e2 < dist_y {
                err += dist_x;
                y += step_y;
            }
        }
    }

    /// Xiaolin Wu antialiased line. Each step paints the two pixels
    /// straddling the ideal line with complementary coverage.
    pub fn line_antialiased(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        if x0 == x1 || y0 == y1 {
            self.line(x0, y0, x1, y1, color);
            return;
        }

        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        let (mut x0, mut y0, mut x1, mut y1) = if steep { (y0, x0, y1, x1) } else { (x0, y0, x1, y1) };
        if x0 > x1 {
            core::mem::swap(&mut x0, &mut x1);
            core::mem::swap(&mut y0, &mut y1);
        }

        // 16.16 fixed point keeps both endpoints exact
        let run = (x1 - x0) as i64;
        let rise = ((y1 - y0) as i64) << 16;
        for x in x0..=x1 {
            let inter = ((y0 as i64) << 16) + rise * (x - x0) as i64 / run;
            let y = (inter >> 16) as i32;
            let frac = inter & 0xFFFF;
            let near = (((0x1_0000 - frac) * 255) >> 16) as u8;
            let far = ((frac * 255) >> 16) as u8;
            if steep {
                self.covered_point(y, x, color, near);
                self.covered_point(y + 1, x, color, far);
            } else {
                self.covered_point(x, y, color, near);
                self.covered_point(x, y + 1, color, far);
            }
        }
    }

    /// Bresenham walk with a cross-shaped brush of arm length
    /// `thickness - 1` stamped at every step. Turns and diagonals overdraw;
    /// translucent colors show the overlap.
    pub fn thick_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, thickness: u32, color: Color) {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx - dy;
        let (mut x, mut y) = (x0, y0);

        self.set_color(color);
        loop {
            self.plot_at(x, y);
            for i in 1..thickness as i32 {
                self.plot_at(x, y + i);
                self.plot_at(x, y - i);
                self.plot_at(x + i, y);
                self.plot_at(x - i, y);
            }
            if x == x1 && y == y1 {
                break;
            }
            let e2 = err << 1;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }

    pub fn rectangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let (x0, x1) = ordered(x0, x1);
        let (y0, y1) = ordered(y0, y1);
        self.line(x0, y0, x1, y0, color);
        if y1 > y0 {
            self.line(x0, y1, x1, y1, color);
        }
        if y1 - y0 > 1 {
            self.line(x0, y0 + 1, x0, y1 - 1, color);
            if x1 > x0 {
                self.line(x1, y0 + 1, x1, y1 - 1, color);
            }
        }
    }

    /// Column-by-column fill covering `(|x1-x0|+1) * (|y1-y0|+1)` pixels.
    pub fn filled_rectangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let (x0, x1) = ordered(x0, x1);
        let left = x0.max(0);
        let right = x1.min(self.width() as i32 - 1);
        self.set_color(color);
        for x in left..=right {
            self.vertical_span(x, y0, y1);
        }
    }

    /// Outline with midpoint-circle corners. The radius is clamped to half
    /// of the shorter side.
    pub fn rounded_rectangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, radius: u32, color: Color) {
        let c = Corners::new(x0, y0, x1, y1, radius);
        let r = c.radius;
        if r == 0 {
            self.rectangle(c.x0, c.y0, c.x1, c.y1, color);
            return;
        }

        self.line(c.left, c.y0, c.right, c.y0, color);
        self.line(c.left, c.y1, c.right, c.y1, color);
        self.line(c.x0, c.top, c.x0, c.bottom, color);
        self.line(c.x1, c.top, c.x1, c.bottom, color);

        self.set_color(color);
        let centers = c.centers();
        for (x, y) in outline_offsets(r) {
            self.plot_octants(&centers, x, y);
        }
    }

    /// Filled variant of [`rounded_rectangle`](Self::rounded_rectangle).
    /// Every pixel is brushed once, so translucent colors blend evenly.
    pub fn filled_rounded_rectangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, radius: u32, color: Color) {
        let c = Corners::new(x0, y0, x1, y1, radius);

        self.filled_rectangle(c.left, c.y0, c.right, c.y1, color);
        self.set_color(color);
        corner_columns(c.radius, |dx, reach| {
            self.vertical_span(c.right + dx, c.top - reach, c.bottom + reach);
            self.vertical_span(c.left - dx, c.top - reach, c.bottom + reach);
        });
    }

    /// Midpoint circle outline. Radii beyond [`MAX_RADIUS`] are clamped.
    pub fn circle(&mut self, xc: i32, yc: i32, radius: u32, color: Color) {
        let r = clamp_radius(radius);
        self.set_color(color);
        if r == 0 {
            self.plot_at(xc, yc);
            return;
        }
        self.plot_at(xc, yc.saturating_add(r));
        self.plot_at(xc, yc.saturating_sub(r));
        self.plot_at(xc.saturating_add(r), yc);
        self.plot_at(xc.saturating_sub(r), yc);

        let center = ArcCenters { left: xc, right: xc, top: yc, bottom: yc };
        for (x, y) in outline_offsets(r) {
            self.plot_octants(&center, x, y);
        }
    }

    /// Solid disc. With `antialias` the rim pixels get fractional coverage;
    /// without it a pixel is in when its center lies within `radius`.
    /// Only the part of the bounding box inside the buffer is visited.
    pub fn filled_circle(&mut self, xc: i32, yc: i32, radius: u32, color: Color, antialias: bool) {
        let r = clamp_radius(radius);
        let r2 = r as i64 * r as i64;
        let rf = r as f32;
        let inner = if rf > 0.5 { (rf - 0.5) * (rf - 0.5) } else { 0.25 };

        self.each_in_box(xc, yc, r + 1, color, |buf, x, y, d2| {
            if !antialias {
                if d2 <= r2 {
                    buf.plot_at(x, y);
                }
            } else if d2 as f32 <= inner {
                buf.plot_at(x, y);
            } else {
                let cov = rf + 0.5 - libm::sqrtf(d2 as f32);
                buf.covered_point(x, y, color, coverage(cov));
            }
        });
    }

    /// Antialiased annulus with outer radius `radius` and a band
    /// `thickness` pixels wide.
    pub fn ring(&mut self, xc: i32, yc: i32, radius: u32, thickness: u32, color: Color) {
        if thickness == 0 {
            return;
        }
        let r = clamp_radius(radius);
        let outer = r as f32;
        let inner = (r as u32).saturating_sub(thickness) as f32;

        self.each_in_box(xc, yc, r + 1, color, |buf, x, y, d2| {
            let d = libm::sqrtf(d2 as f32);
            let out_cov = (outer + 0.5 - d).clamp(0.0, 1.0);
            let in_cov = if inner > 0.0 { (d - inner + 0.5).clamp(0.0, 1.0) } else { 1.0 };
            buf.covered_point(x, y, color, coverage(out_cov.min(in_cov)));
        });
    }

    /// Plot the arc offset `(x, y)` into all four quadrants around `c`, and
    /// its transpose unless it sits on the diagonal. Both offsets must be
    /// positive.
    fn plot_octants(&mut self, c: &ArcCenters, x: i32, y: i32) {
        self.plot_quadrants(c, x, y);
        if x != y {
            self.plot_quadrants(c, y, x);
        }
    }

    fn plot_quadrants(&mut self, c: &ArcCenters, dx: i32, dy: i32) {
        let (east, west) = (c.right.saturating_add(dx), c.left.saturating_sub(dx));
        let (south, north) = (c.bottom.saturating_add(dy), c.top.saturating_sub(dy));
        self.plot_at(east, south);
        self.plot_at(west, south);
        self.plot_at(east, north);
        self.plot_at(west, north);
    }

    /// Visit every in-buffer pixel of the square of half-size `reach`
    /// around `(xc, yc)` with its squared center distance. The brush is set
    /// to `color` first.
    fn each_in_box<F>(&mut self, xc: i32, yc: i32, reach: i32, color: Color, mut f: F)
    where
        F: FnMut(&mut PixelBuffer, i32, i32, i64),
    {
        let x_min = xc.saturating_sub(reach).max(0);
        let x_max = xc.saturating_add(reach).min(self.width() as i32 - 1);
        let y_min = yc.saturating_sub(reach).max(0);
        let y_max = yc.saturating_add(reach).min(self.height() as i32 - 1);

        for x in x_min..=x_max {
            let dx = (x - xc) as i64;
            for y in y_min..=y_max {
                let dy = (y - yc) as i64;
                self.set_color(color);
                f(self, x, y, dx * dx + dy * dy);
            }
        }
    }

    /// Draw `color` with its alpha scaled by `cov`; zero coverage is skipped.
    fn covered_point(&mut self, x: i32, y: i32, color: Color, cov: u8) {
        match cov {
            0 => {}
            255 => self.point(x, y, color),
            c => self.point(x, y, color.combine_alpha(c)),
        }
    }
}

fn ordered(a: i32, b: i32) -> (i32, i32) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Fractional coverage to an alpha byte, truncating.
fn coverage(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0) as u8
}

/// Normalized rounded-rectangle geometry: the outer box plus the centers of
/// the four corner arcs.
struct Corners {
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    radius: i32,
    left: i32,
    right: i32,
    top: i32,
    bottom: i32,
}

impl Corners {
    fn new(x0: i32, y0: i32, x1: i32, y1: i32, radius: u32) -> Self {
        let (x0, x1) = ordered(x0, x1);
        let (y0, y1) = ordered(y0, y1);
        let half = |lo: i32, hi: i32| ((hi as i64 - lo as i64) >> 1) as i32;
        let radius = clamp_radius(radius).min(half(x0, x1)).min(half(y0, y1));
        Self {
            x0,
            y0,
            x1,
            y1,
            radius,
            left: x0 + radius,
            right: x1 - radius,
            top: y0 + radius,
            bottom: y1 - radius,
        }
    }

    fn centers(&self) -> ArcCenters {
        ArcCenters { left: self.left, right: self.right, top: self.top, bottom: self.bottom }
    }
}

/// Arc centers: `right`/`bottom` anchor the east and south quadrants,
/// `left`/`top` the west and north ones. A circle has all four equal.
struct ArcCenters {
    left: i32,
    right: i32,
    top: i32,
    bottom: i32,
}

/// Largest radius the arc and disc primitives accept. Keeps the midpoint
/// error terms and `radius + 1` reaches inside `i32`.
pub const MAX_RADIUS: u32 = (i32::MAX / 4) as u32;

fn clamp_radius(radius: u32) -> i32 {
    radius.min(MAX_RADIUS) as i32
}

/// Call `f(dx, reach)` once for every column offset `1..=r` of a quarter
/// disc of radius `r`, where `reach` is the largest row offset the midpoint
/// arc covers in that column.
///
/// The first octant gives one point per column up to the diagonal; past it a
/// column is final once the arc leaves its row. The one or two columns where
/// the halves meet take the larger of both.
fn corner_columns(r: i32, mut f: impl FnMut(i32, i32)) {
    let (x_end, y_end) = MidpointArc::new(r).last().unwrap_or((0, 0));
    let mut seam = [0i32; 2];
    let mut pending: Option<(i32, i32)> = None;

    for (x, y) in MidpointArc::new(r) {
        if x < y_end {
            f(x, y);
        } else {
            seam[(x - y_end) as usize] = seam[(x - y_end) as usize].max(y);
        }

        if y <= x_end {
            seam[(y - y_end) as usize] = seam[(y - y_end) as usize].max(x);
        } else {
            // x only grows, so the newest point in a row reaches furthest
            if let Some((col, reach)) = pending.filter(|&(col, _)| col != y) {
                f(col, reach);
            }
            pending = Some((y, x));
        }
    }
    if let Some((col, reach)) = pending {
        f(col, reach);
    }
    for col in y_end.max(1)..=x_end {
        f(col, seam[(col - y_end) as usize]);
    }
}

/// Arc offsets that `plot_octants` turns into an outline with every pixel
/// plotted once. `(r, 0)` repeats a cardinal point, and a final point past
/// the diagonal mirrors the one before it.
fn outline_offsets(r: i32) -> impl Iterator<Item = (i32, i32)> {
    MidpointArc::new(r).filter(|&(x, y)| y > 0 && x <= y)
}

/// First-octant offsets of the midpoint circle algorithm, excluding the
/// starting point `(0, r)`. `radius` must not exceed [`MAX_RADIUS`].
struct MidpointArc {
    f: i32,
    ddf_x: i32,
    ddf_y: i32,
    x: i32,
    y: i32,
}

impl MidpointArc {
    fn new(radius: i32) -> Self {
        Self { f: 1 - radius, ddf_x: 0, ddf_y: -2 * radius, x: 0, y: radius }
    }
}

impl Iterator for MidpointArc {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.x >= self.y {
            return None;
        }
        if self.f >= 0 {
            self.y -= 1;
            self.ddf_y += 2;
            self.f += self.ddf_y;
        }
        self.x += 1;
        self.ddf_x += 2;
        self.f += self.ddf_x + 1;
        Some((self.x, self.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn lit(buf: &PixelBuffer) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for x in 0..buf.width() as i32 {
            for y in 0..buf.height() as i32 {
                if buf.pixel(x, y).map_or(false, |c| c.alpha() != 0) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn lines_are_symmetric() {
        let cases = [(0, 0, 9, 4), (1, 8, 7, 0), (2, 2, 3, 9), (0, 5, 9, 6), (3, 3, 8, 8)];
        for (x0, y0, x1, y1) in cases {
            let mut a = PixelBuffer::new(10, 10).unwrap();
            let mut b = PixelBuffer::new(10, 10).unwrap();
            a.line(x0, y0, x1, y1, Color::RED);
            b.line(x1, y1, x0, y0, Color::RED);
            assert_eq!(lit(&a), lit(&b), "{:?}", (x0, y0, x1, y1));
        }
    }

    #[test]
    fn line_has_no_gaps() {
        let mut buf = PixelBuffer::new(20, 20).unwrap();
        buf.line(1, 2, 17, 9, Color::RED);
        let pts = lit(&buf);
        assert_eq!(pts.len(), 17);
        for x in 1..=17 {
            assert_eq!(pts.iter().filter(|p| p.0 == x).count(), 1);
        }
        assert!(pts.contains(&(1, 2)) && pts.contains(&(17, 9)));
    }

    #[test]
    fn axis_aligned_lines_clip() {
        let mut buf = PixelBuffer::new(5, 5).unwrap();
        buf.line(-3, 2, 10, 2, Color::RED);
        buf.line(1, -4, 1, 1, Color::RED);
        assert_eq!(lit(&buf).len(), 5 + 2);
    }

    #[test]
    fn antialiased_coverage_is_complementary() {
        let mut buf = PixelBuffer::new(12, 12).unwrap();
        buf.line_antialiased(0, 0, 10, 3, Color::WHITE);
        for x in 1..10 {
            let total: u32 = (0..12).filter_map(|y| buf.pixel(x, y)).map(|c| c.alpha() as u32).sum();
            assert!((253..=255).contains(&total), "column {} sums to {}", x, total);
        }
        assert_eq!(buf.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(buf.pixel(10, 3), Some(Color::WHITE));
    }

    #[test]
    fn antialiased_steep_line_is_transposed() {
        let mut buf = PixelBuffer::new(12, 12).unwrap();
        buf.line_antialiased(2, 0, 4, 10, Color::WHITE);
        for y in 1..10 {
            let total: u32 = (0..12).filter_map(|x| buf.pixel(x, y)).map(|c| c.alpha() as u32).sum();
            assert!((253..=255).contains(&total), "row {} sums to {}", y, total);
        }
    }

    #[test]
    fn thick_line_stamps_cross() {
        let mut buf = PixelBuffer::new(10, 10).unwrap();
        buf.thick_line(5, 5, 5, 5, 2, Color::RED);
        let pts = lit(&buf);
        assert_eq!(pts.len(), 5);
        assert!(pts.contains(&(5, 4)) && pts.contains(&(6, 5)));
    }

    #[test]
    fn filled_rectangle_exact_count() {
        let mut buf = PixelBuffer::new(20, 20).unwrap();
        buf.filled_rectangle(12, 9, 3, 2, Color::GREEN);
        let pts = lit(&buf);
        assert_eq!(pts.len(), 10 * 8);
        assert!(pts.iter().all(|&(x, y)| buf.pixel(x, y) == Some(Color::GREEN)));
    }

    #[test]
    fn rectangle_outline_draws_each_pixel_once() {
        let mut buf = PixelBuffer::new(10, 10).unwrap();
        buf.clear(Color::BLACK);
        let half = Color::WHITE.set_alpha(128);
        buf.rectangle(1, 1, 6, 4, half);
        let once = half.blend_over(Color::BLACK);
        let hits: Vec<_> = (0..10)
            .flat_map(|x| (0..10).map(move |y| (x, y)))
            .filter(|&(x, y)| buf.pixel(x, y) != Some(Color::BLACK))
            .collect();
        assert_eq!(hits.len(), 2 * 6 + 2 * 2);
        assert!(hits.iter().all(|&(x, y)| buf.pixel(x, y) == Some(once)));
    }

    #[test]
    fn rounded_radius_is_clamped() {
        let mut a = PixelBuffer::new(20, 20).unwrap();
        let mut b = PixelBuffer::new(20, 20).unwrap();
        a.filled_rounded_rectangle(2, 2, 12, 8, 100, Color::RED);
        b.filled_rounded_rectangle(2, 2, 12, 8, 3, Color::RED);
        assert_eq!(lit(&a), lit(&b));
        // corners are cut, the middle row is full width
        assert_eq!(a.pixel(2, 2), Some(Color::TRANSPARENT));
        assert!((2..=12).all(|x| a.pixel(x, 5) == Some(Color::RED)));
    }

    #[test]
    fn rounded_outline_stays_in_box() {
        let mut buf = PixelBuffer::new(30, 30).unwrap();
        buf.rounded_rectangle(20, 25, 5, 3, 6, Color::RED);
        let pts = lit(&buf);
        assert!(pts.iter().all(|&(x, y)| (5..=20).contains(&x) && (3..=25).contains(&y)));
        assert!(pts.contains(&(12, 3)) && pts.contains(&(5, 14)));
        assert!(!pts.contains(&(5, 3)));
    }

    #[test]
    fn circle_outline_is_on_radius() {
        let mut buf = PixelBuffer::new(30, 30).unwrap();
        buf.circle(15, 15, 10, Color::RED);
        for (x, y) in lit(&buf) {
            let d = libm::sqrtf(((x - 15) * (x - 15) + (y - 15) * (y - 15)) as f32);
            assert!((d - 10.0).abs() < 1.0, "({}, {}) at {}", x, y, d);
        }
    }

    #[test]
    fn filled_circle_interior_and_rim() {
        let mut buf = PixelBuffer::new(40, 40).unwrap();
        buf.filled_circle(20, 20, 8, Color::RED, true);
        assert_eq!(buf.pixel(20, 20), Some(Color::RED));
        assert_eq!(buf.pixel(27, 20), Some(Color::RED));
        let rim = buf.pixel(28, 20).unwrap();
        assert!(rim.alpha() > 0 && rim.alpha() < 255);
        assert_eq!(buf.pixel(29, 20), Some(Color::TRANSPARENT));
        assert_eq!(buf.pixel(27, 27), Some(Color::TRANSPARENT));
    }

    #[test]
    fn filled_circle_clips_to_buffer() {
        let mut buf = PixelBuffer::new(10, 6).unwrap();
        buf.filled_circle(-2, 3, 5, Color::BLUE, false);
        buf.filled_circle(9, 5, 50, Color::BLUE, false);
        assert!(buf.pixels().iter().all(|&c| c == Color::BLUE));
    }

    #[test]
    fn ring_leaves_center_empty() {
        let mut buf = PixelBuffer::new(40, 40).unwrap();
        buf.ring(20, 20, 10, 3, Color::RED);
        assert_eq!(buf.pixel(20, 20), Some(Color::TRANSPARENT));
        assert_eq!(buf.pixel(29, 20), Some(Color::RED));
        assert_eq!(buf.pixel(20, 12), Some(Color::RED));
        assert_eq!(buf.pixel(20, 25), Some(Color::TRANSPARENT));
    }

    /// Every non-black pixel must hold `color` blended onto black exactly once.
    fn blended_once(buf: &PixelBuffer, color: Color) -> Vec<(i32, i32)> {
        let once = color.blend_over(Color::BLACK);
        let hits: Vec<_> = (0..buf.width() as i32)
            .flat_map(|x| (0..buf.height() as i32).map(move |y| (x, y)))
            .filter(|&(x, y)| buf.pixel(x, y) != Some(Color::BLACK))
            .collect();
        for &(x, y) in &hits {
            assert_eq!(buf.pixel(x, y), Some(once), "({}, {})", x, y);
        }
        hits
    }

    #[test]
    fn translucent_rounded_fill_blends_once() {
        let half = Color::WHITE.set_alpha(128);
        let mut buf = PixelBuffer::new(40, 40).unwrap();
        buf.clear(Color::BLACK);
        buf.filled_rounded_rectangle(2, 2, 30, 30, 8, half);

        let hits = blended_once(&buf, half);
        assert!(hits.contains(&(16, 16)));
        assert!((9..=12).all(|y| hits.contains(&(2, y))));
        assert!(!hits.contains(&(2, 2)) && !hits.contains(&(30, 30)));

        // the outline never leaves the fill
        let mut outline = PixelBuffer::new(40, 40).unwrap();
        outline.rounded_rectangle(2, 2, 30, 30, 8, Color::RED);
        for p in lit(&outline) {
            assert!(hits.contains(&p), "{:?}", p);
        }
    }

    #[test]
    fn small_rounded_corners_blend_once() {
        let half = Color::WHITE.set_alpha(128);
        for radius in 0..=6 {
            let mut buf = PixelBuffer::new(16, 16).unwrap();
            buf.clear(Color::BLACK);
            buf.filled_rounded_rectangle(1, 1, 13, 12, radius, half);
            assert!(!blended_once(&buf, half).is_empty());

            buf.clear(Color::BLACK);
            buf.rounded_rectangle(1, 1, 13, 12, radius, half);
            assert!(!blended_once(&buf, half).is_empty());
        }
    }

    #[test]
    fn translucent_outlines_blend_once() {
        let half = Color::WHITE.set_alpha(128);
        let mut buf = PixelBuffer::new(41, 41).unwrap();
        buf.clear(Color::BLACK);
        buf.circle(20, 20, 10, half);
        let hits = blended_once(&buf, half);
        for p in [(13, 13), (13, 27), (27, 13), (27, 27), (20, 10), (30, 20)] {
            assert!(hits.contains(&p), "{:?}", p);
        }

        buf.clear(Color::BLACK);
        buf.rounded_rectangle(3, 3, 37, 30, 9, half);
        let hits = blended_once(&buf, half);
        assert!(hits.contains(&(20, 3)) && hits.contains(&(3, 16)));
    }

    #[test]
    fn zero_radius_circle_is_a_point() {
        let mut buf = PixelBuffer::new(6, 6).unwrap();
        buf.circle(3, 3, 0, Color::RED);
        assert_eq!(lit(&buf), [(3, 3)]);
    }

    #[test]
    fn huge_radii_are_clamped() {
        let mut buf = PixelBuffer::new(10, 10).unwrap();
        buf.ring(5, 5, i32::MAX as u32, 3, Color::RED);
        buf.ring(5, 5, u32::MAX, 3, Color::RED);
        buf.circle(i32::MAX - 2, 0, 10, Color::RED);
        buf.circle(i32::MIN + 2, i32::MAX, 10, Color::RED);
        assert!(lit(&buf).is_empty());

        let r = clamp_radius(u32::MAX);
        assert_eq!(r as u32, MAX_RADIUS);
        let start: Vec<_> = MidpointArc::new(r).take(3).collect();
        assert_eq!(start, [(1, r), (2, r), (3, r)]);

        buf.filled_rounded_rectangle(i32::MIN, i32::MIN, i32::MAX, i32::MAX, 4, Color::RED);
        assert_eq!(lit(&buf).len(), 100);
    }
}
