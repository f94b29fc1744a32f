use raylib::prelude::*;

pub fn heart(d: &mut impl RaylibDraw, center: Vector2, size: f32, color: Color) {
    let r = size * 0.27;
    d.draw_circle_v(Vector2::new(center.x - size * 0.23, center.y - size * 0.12), r, color);
    d.draw_circle_v(Vector2::new(center.x + size * 0.23, center.y - size * 0.12), r, color);
    d.draw_triangle(
        Vector2::new(center.x - size * 0.49, center.y - size * 0.04),
        Vector2::new(center.x, center.y + size * 0.45),
        Vector2::new(center.x + size * 0.49, center.y - size * 0.04),
        color,
    );
}

pub fn sparkle(d: &mut impl RaylibDraw, center: Vector2, size: f32, color: Color) {
    d.draw_poly(center, 4, size * 0.5, 0.0, color);
    d.draw_poly(center, 4, size * 0.28, 45.0, color);
}

pub fn play(d: &mut impl RaylibDraw, center: Vector2, size: f32, color: Color) {
    d.draw_triangle(
        Vector2::new(center.x - size * 0.3, center.y - size * 0.4),
        Vector2::new(center.x - size * 0.3, center.y + size * 0.4),
        Vector2::new(center.x + size * 0.4, center.y),
        color,
    );
}

pub fn pause(d: &mut impl RaylibDraw, center: Vector2, size: f32, color: Color) {
    let w = size * 0.22;
    let h = size * 0.8;
    d.draw_rectangle_rec(Rectangle::new(center.x - size * 0.3, center.y - h * 0.5, w, h), color);
    d.draw_rectangle_rec(Rectangle::new(center.x + size * 0.08, center.y - h * 0.5, w, h), color);
}

/// `direction` is -1 for a left chevron, 1 for a right one.
pub fn chevron(d: &mut impl RaylibDraw, center: Vector2, size: f32, direction: f32, color: Color) {
    let tip = Vector2::new(center.x + direction * size * 0.2, center.y);
    let back = center.x - direction * size * 0.2;
    d.draw_line_ex(Vector2::new(back, center.y - size * 0.4), tip, 3.0, color);
    d.draw_line_ex(Vector2::new(back, center.y + size * 0.4), tip, 3.0, color);
}

/// Circular arrow; `clockwise` picks the arrowhead side.
pub fn rotate(d: &mut impl RaylibDraw, center: Vector2, size: f32, clockwise: bool, color: Color) {
    let r = size * 0.38;
    d.draw_ring(center, r - 1.5, r + 1.0, 60.0, 330.0, 24, color);
    // Arrowhead at the open end of the ring
    let (angle, spin) = if clockwise { (330.0_f32, 0.0) } else { (60.0_f32, 180.0) };
    let rad = angle.to_radians();
    let tip = Vector2::new(center.x + rad.cos() * r, center.y + rad.sin() * r);
    d.draw_poly(tip, 3, size * 0.16, angle + 90.0 + spin, color);
}

pub fn magnifier(d: &mut impl RaylibDraw, center: Vector2, size: f32, plus: bool, color: Color) {
    let r = size * 0.3;
    let lens = Vector2::new(center.x - size * 0.08, center.y - size * 0.08);
    d.draw_ring(lens, r - 1.5, r + 0.5, 0.0, 360.0, 32, color);
    let handle = r * 0.75;
    d.draw_line_ex(
        Vector2::new(lens.x + handle, lens.y + handle),
        Vector2::new(center.x + size * 0.45, center.y + size * 0.45),
        2.5,
        color,
    );
    let bar = r * 0.55;
    d.draw_line_ex(Vector2::new(lens.x - bar, lens.y), Vector2::new(lens.x + bar, lens.y), 2.0, color);
    if plus {
        d.draw_line_ex(Vector2::new(lens.x, lens.y - bar), Vector2::new(lens.x, lens.y + bar), 2.0, color);
    }
}

pub fn close(d: &mut impl RaylibDraw, center: Vector2, size: f32, color: Color) {
    let h = size * 0.35;
    d.draw_line_ex(Vector2::new(center.x - h, center.y - h), Vector2::new(center.x + h, center.y + h), 3.0, color);
    d.draw_line_ex(Vector2::new(center.x - h, center.y + h), Vector2::new(center.x + h, center.y - h), 3.0, color);
}
