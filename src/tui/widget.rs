//! Rendering of the menu strip.
//!
//! Horizontal layout, one row:
//!
//! ```text
//! [prompt][input................][<][ item ][ item ][ item ][>]
//! ```
//!
//! Vertical layout (`-l n`), the input row plus `n` item rows. Only the
//! page holding the selection is drawn; the arrows point at neighbor pages.

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::widgets::Widget;

use crate::item::{CellMeasure, Measure};
use crate::menu::Menu;
use crate::theme::Theme;

pub struct MenuWidget<'a> {
    pub menu: &'a Menu,
    pub theme: &'a Theme,
    /// Anchor the strip to the bottom edge instead of the top.
    pub bottom: bool,
}

/// The rows the menu occupies inside the full terminal area.
fn strip_rect(menu: &Menu, area: Rect, bottom: bool) -> Rect {
    let height = menu.strip_height().min(area.height);
    let y = if bottom {
        area.y + area.height - height
    } else {
        area.y
    };
    Rect::new(area.x, y, area.width, height)
}

/// Where the hardware cursor belongs inside the input column.
pub fn cursor_position(menu: &Menu, area: Rect, bottom: bool) -> Option<Position> {
    let strip = strip_rect(menu, area, bottom);
    if strip.height == 0 || strip.width == 0 {
        return None;
    }
    let geom = menu.geometry();
    let input = menu.input();
    let typed = CellMeasure.width(&input.text()[..input.cursor()]);
    let x = (geom.promptw + geom.padding)
        .saturating_add(typed)
        .min(strip.width - 1);
    Some(Position::new(strip.x + x, strip.y))
}

impl Widget for MenuWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Self { menu, theme, bottom } = self;
        let strip = strip_rect(menu, area, bottom);
        if strip.height == 0 || strip.width == 0 {
            return;
        }
        buf.set_style(strip, theme.normal);

        let geom = menu.geometry();
        let pad = geom.padding;

        if geom.promptw > 0 {
            let width = geom.promptw.min(strip.width);
            buf.set_style(Rect::new(strip.x, strip.y, width, 1), theme.prompt);
            if width > pad {
                buf.set_stringn(
                    strip.x + pad,
                    strip.y,
                    menu.prompt(),
                    usize::from(width - pad),
                    theme.prompt,
                );
            }
        }

        // The input column: fixed width horizontally, the rest of the top
        // row in the vertical layout.
        let input_x = geom.promptw.min(strip.width);
        let input_w = if geom.lines > 0 {
            strip.width - input_x
        } else {
            geom.inputw.min(strip.width - input_x)
        };
        if input_w > pad {
            buf.set_stringn(
                strip.x + input_x + pad,
                strip.y,
                menu.input().text(),
                usize::from(input_w - pad),
                theme.normal,
            );
        }

        if geom.lines > 0 {
            render_list(menu, theme, strip, buf);
        } else {
            render_row(menu, theme, strip, buf);
        }
    }
}

fn render_row(menu: &Menu, theme: &Theme, strip: Rect, buf: &mut Buffer) {
    let Some((index, page)) = menu.current_page() else {
        return;
    };
    let geom = menu.geometry();
    let pad = geom.padding;
    let base = (geom.promptw + geom.inputw).min(strip.width);
    let right_edge = strip.width.saturating_sub(geom.right_arrow);

    if index > 0 && base + pad < strip.width {
        buf.set_string(strip.x + base + pad, strip.y, "<", theme.normal);
    }

    let mut x = base.saturating_add(geom.left_arrow);
    for pos in page.first..=page.last {
        if x >= right_edge {
            break;
        }
        let item = menu.store().get(menu.matches().get(pos));
        let width = item.width().saturating_add(2 * pad);
        let cell_w = width.min(right_edge - x);
        let style = if menu.selection() == Some(pos) {
            theme.selection
        } else {
            theme.normal
        };
        buf.set_style(Rect::new(strip.x + x, strip.y, cell_w, 1), style);
        if cell_w > pad {
            buf.set_stringn(
                strip.x + x + pad,
                strip.y,
                item.text(),
                usize::from(cell_w - pad),
                style,
            );
        }
        x = x.saturating_add(width);
    }

    if index + 1 < menu.pages().len() && right_edge + pad < strip.width {
        buf.set_string(strip.x + right_edge + pad, strip.y, ">", theme.normal);
    }
}

fn render_list(menu: &Menu, theme: &Theme, strip: Rect, buf: &mut Buffer) {
    let Some((_, page)) = menu.current_page() else {
        return;
    };
    let geom = menu.geometry();
    let pad = geom.padding;
    let x = geom.promptw.min(strip.width);
    let width = strip.width - x;

    for (row, pos) in (page.first..=page.last).enumerate() {
        let y = strip.y + 1 + row as u16;
        if y >= strip.bottom() {
            break;
        }
        let item = menu.store().get(menu.matches().get(pos));
        let style = if menu.selection() == Some(pos) {
            theme.selection
        } else {
            theme.normal
        };
        buf.set_style(Rect::new(strip.x + x, y, width, 1), style);
        if width > pad {
            buf.set_stringn(
                strip.x + x + pad,
                y,
                item.text(),
                usize::from(width - pad),
                style,
            );
        }
    }
}
