pub mod frame;

use bracket_geometry::prelude::Point;
use bracket_terminal::prelude::*;

use crate::map::{CellClass, HEIGHT, Map, WIDTH};

pub use self::frame::{DirtyCell, Frame, Glyph};

pub const MAP_ORIGIN: Point = Point { x: 0, y: 1 };
const TOP_STATUS_ROW: i32 = 0;
const BOTTOM_STATUS_ROW: i32 = MAP_ORIGIN.y + HEIGHT;
const LOG_PANEL_START: i32 = BOTTOM_STATUS_ROW + 2;
const LOG_VISIBLE_ENTRIES: usize = 5;

fn glyph_color(glyph: Glyph) -> RGB {
    match glyph {
        Glyph::Terrain(CellClass::NotWalkable) => RGB::from_u8(60, 60, 60),
        Glyph::Terrain(CellClass::Corridor) => RGB::from_u8(150, 150, 150),
        Glyph::Terrain(CellClass::Room(_)) => RGB::from_u8(200, 200, 200),
        Glyph::Stairs => RGB::named(LIGHT_CYAN),
        Glyph::Amulet => RGB::named(GOLD),
        Glyph::Enemy { alerted: true } => RGB::named(RED),
        Glyph::Enemy { alerted: false } => RGB::from_u8(140, 60, 60),
        Glyph::Player => RGB::named(YELLOW),
    }
}

fn put(ctx: &mut BTerm, point: Point, glyph: Glyph) {
    ctx.set(
        MAP_ORIGIN.x + point.x,
        MAP_ORIGIN.y + point.y,
        glyph_color(glyph),
        RGB::named(BLACK),
        to_cp437(glyph.symbol()),
    );
}

pub fn draw_map(ctx: &mut BTerm, map: &Map) {
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let point = Point::new(x, y);
            put(ctx, point, Glyph::Terrain(map.class_at(point)));
        }
    }
}

pub fn draw_cells(ctx: &mut BTerm, cells: &[DirtyCell]) {
    for cell in cells {
        put(ctx, cell.point, cell.glyph);
    }
}

fn draw_status_line(ctx: &mut BTerm, row: i32, color: RGB, text: &str) {
    let width = WIDTH as usize;
    ctx.print_color(0, row, color, RGB::named(BLACK), format!("{text:<width$}"));
}

pub fn draw_log(ctx: &mut BTerm, log: &[String], start_y: i32) {
    let (width, _) = ctx.get_char_size();
    let height = LOG_VISIBLE_ENTRIES as i32 + 2;
    ctx.draw_box(
        0,
        start_y,
        width as i32 - 1,
        height,
        RGB::named(DARK_GRAY),
        RGB::named(BLACK),
    );
    ctx.print_color(
        2,
        start_y,
        RGB::named(WHITE),
        RGB::named(BLACK),
        " Event Log ",
    );
    for (row, entry) in log.iter().take(LOG_VISIBLE_ENTRIES).enumerate() {
        ctx.print(2, start_y + 1 + row as i32, entry);
    }
}

/// Paints one tick's snapshot. The console keeps its contents between calls,
/// so only a floor change clears and repaints the whole grid.
pub fn draw_frame(ctx: &mut BTerm, map: &Map, frame: &Frame, log: &[String]) {
    if frame.full_redraw {
        ctx.cls();
        draw_map(ctx, map);
    }
    draw_cells(ctx, &frame.cells);
    draw_status_line(ctx, TOP_STATUS_ROW, RGB::named(WHITE), &frame.top_status);
    draw_status_line(
        ctx,
        BOTTOM_STATUS_ROW,
        RGB::named(LIGHT_GREEN),
        &frame.bottom_status,
    );
    draw_log(ctx, log, LOG_PANEL_START);
}
