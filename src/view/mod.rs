//! View module - rendering the editor with softbuffer and fontdue
//!
//! Draw order, back to front: text area (search highlights, selection,
//! text, caret), search bar, status bar, menu bar, open dropdown.

pub mod frame;
pub mod geometry;

pub use frame::{Frame, TextPainter};

use std::collections::HashMap;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{anyhow, bail, Context as _, Result};
use fontdue::{Font, FontSettings, LineMetrics, Metrics};
use softbuffer::Surface;
use winit::window::Window;

use quill::editable::TextBuffer;
use quill::keymap::{Command, Keymap};
use quill::menu::{MenuItem, MENUS};
use quill::model::{menu_bar_height, AppModel, BAR_PADDING_PX, MENU_BAR_PADDING_PX, TEXT_AREA_PADDING_PX};
use quill::util::char_col_to_visual_col;

use geometry::{
    expand_tabs, menu_title_rects, status_bar_rect, visual_col_to_x, DropdownLayout, Rect,
    SearchBarLayout, CASE_TOGGLE_LABEL, SEARCH_LABEL,
};

pub type GlyphCacheKey = (char, u32);

pub type GlyphCache = HashMap<GlyphCacheKey, (Metrics, Vec<u8>)>;

/// ARGB colors of the light notepad look
mod colors {
    pub const BACKGROUND: u32 = 0xFFFFFFFF;
    pub const TEXT: u32 = 0xFF1E1E1E;
    pub const MUTED_TEXT: u32 = 0xFF6E6E6E;
    pub const ERROR_TEXT: u32 = 0xFFC42B1C;
    pub const CARET: u32 = 0xFF000000;
    pub const CARET_UNFOCUSED: u32 = 0xFFA0A0A0;
    /// Translucent so search matches stay visible under a selection
    pub const SELECTION: u32 = 0x9966B3FF;
    /// Search matches: yellow behind black text
    pub const SEARCH_HIGHLIGHT: u32 = 0xFFFFFF00;
    pub const BORDER: u32 = 0xFFD0D0D0;

    pub const MENU_BAR: u32 = 0xFFF0F0F0;
    pub const MENU_TITLE_HOVER: u32 = 0xFFE0E0E0;
    pub const MENU_TITLE_OPEN: u32 = 0xFFCCE4F7;
    pub const DROPDOWN: u32 = 0xFFFAFAFA;
    pub const DROPDOWN_BORDER: u32 = 0xFFA0A0A0;
    pub const DROPDOWN_HOVER: u32 = 0xFF91C9F7;

    pub const SEARCH_BAR: u32 = 0xFFF3F3F3;
    pub const FIELD: u32 = 0xFFFFFFFF;
    pub const FIELD_BORDER: u32 = 0xFF7A7A7A;
    pub const FIELD_FOCUSED_BORDER: u32 = 0xFF0078D7;

    pub const STATUS_BAR: u32 = 0xFFE8E8E8;
}

/// Monospace fonts tried in order when no font is configured
const FONT_CANDIDATES: &[&str] = &[
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu-sans-mono-fonts/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/liberation-mono/LiberationMono-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSansMono-Regular.ttf",
    // macOS
    "/System/Library/Fonts/Menlo.ttc",
    "/System/Library/Fonts/Monaco.ttf",
    "/Library/Fonts/Courier New.ttf",
    // Windows
    "C:\\Windows\\Fonts\\consola.ttf",
    "C:\\Windows\\Fonts\\cour.ttf",
];

/// Load the configured font, or the first monospace font found on the system
pub fn load_font(configured: Option<&Path>) -> Result<Font> {
    if let Some(path) = configured {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read font {}", path.display()))?;
        return parse_font(bytes, path);
    }

    for candidate in FONT_CANDIDATES.iter().map(PathBuf::from) {
        if let Ok(bytes) = std::fs::read(&candidate) {
            tracing::debug!("Using font {}", candidate.display());
            return parse_font(bytes, &candidate);
        }
    }

    bail!("No monospace font found. Set font_path in the config file or pass --font <FILE>.")
}

fn parse_font(bytes: Vec<u8>, path: &Path) -> Result<Font> {
    Font::from_bytes(bytes, FontSettings::default())
        .map_err(|e| anyhow!("Failed to load font {}: {}", path.display(), e))
}

#[inline]
fn non_zero(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value).unwrap_or(NonZeroU32::MIN)
}

pub struct Renderer {
    font: Font,
    surface: Surface<Rc<Window>, Rc<Window>>,
    width: u32,
    height: u32,
    font_size: f32,
    line_metrics: LineMetrics,
    glyph_cache: GlyphCache,
    char_width: f32,
}

impl Renderer {
    /// Create a renderer for `window`. `font_size` is in logical pixels and
    /// is scaled by the window's scale factor.
    pub fn new(
        window: Rc<Window>,
        context: &softbuffer::Context<Rc<Window>>,
        font: Font,
        font_size: f32,
    ) -> Result<Self> {
        let scale_factor = window.scale_factor();
        let size = window.inner_size();

        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow!("Failed to create surface: {}", e))?;
        surface
            .resize(non_zero(size.width), non_zero(size.height))
            .map_err(|e| anyhow!("Failed to resize surface: {}", e))?;

        let font_size = font_size * scale_factor as f32;
        let line_metrics = font
            .horizontal_line_metrics(font_size)
            .ok_or_else(|| anyhow!("Font is missing horizontal line metrics"))?;
        let char_width = font.metrics('M', font_size).advance_width;

        Ok(Self {
            font,
            surface,
            width: size.width,
            height: size.height,
            font_size,
            line_metrics,
            glyph_cache: HashMap::new(),
            char_width,
        })
    }

    pub fn char_width(&self) -> f32 {
        self.char_width
    }

    pub fn line_height(&self) -> usize {
        self.line_metrics.new_line_size.ceil() as usize
    }

    /// Draw the whole window. `hover` is the mouse position, if inside.
    pub fn render(
        &mut self,
        model: &AppModel,
        keymap: &Keymap,
        hover: Option<(f64, f64)>,
    ) -> Result<()> {
        let (width, height) = model.window_size;
        if width == 0 || height == 0 {
            return Ok(());
        }
        if self.width != width || self.height != height {
            self.width = width;
            self.height = height;
            self.surface
                .resize(non_zero(width), non_zero(height))
                .map_err(|e| anyhow!("Failed to resize surface: {}", e))?;
        }

        let line_height = self.line_height();
        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow!("Failed to get surface buffer: {}", e))?;

        {
            let mut frame = Frame::new(&mut buffer, width as usize, height as usize);
            let mut painter = TextPainter::new(
                &self.font,
                &mut self.glyph_cache,
                self.font_size,
                self.line_metrics.ascent,
                self.char_width,
                line_height,
            );
            let hover = hover.map(|(x, y)| (x as f32, y as f32));

            frame.clear(colors::BACKGROUND);
            render_text_area(&mut frame, &mut painter, model);
            render_search_bar(&mut frame, &mut painter, model);
            render_status_bar(&mut frame, &mut painter, model);
            render_menu_bar(&mut frame, &mut painter, model, hover);
            render_dropdown(&mut frame, &mut painter, model, keymap, hover);
        }

        buffer
            .present()
            .map_err(|e| anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }
}

fn render_text_area(frame: &mut Frame, painter: &mut TextPainter, model: &AppModel) {
    let top = model.text_area_top();
    let bottom = model.text_area_bottom();
    let line_height = model.line_height as f32;
    let vp = model.viewport;
    let editable = &model.document.editable;
    let buffer = &editable.buffer;
    let selection = editable.selection();
    let (sel_start, sel_end) = (selection.start(), selection.end());

    frame.set_clip(Rect::new(0.0, top, frame.width() as f32, bottom - top));

    let end_line = (vp.top_line + vp.visible_lines + 1).min(buffer.line_count());
    for line in vp.top_line..end_line {
        let y = top + (line - vp.top_line) as f32 * line_height;
        let text = buffer.line(line).unwrap_or_default();
        let line_len = text.chars().count();
        let line_start = buffer.position_to_offset(line, 0);

        let first = model
            .search_highlights
            .partition_point(|m| m.end() <= line_start);
        for m in &model.search_highlights[first..] {
            if m.start >= line_start + line_len {
                break;
            }
            let start_col = m.start.saturating_sub(line_start);
            let end_col = (m.end() - line_start).min(line_len);
            fill_columns(frame, model, &text, y, start_col, end_col, colors::SEARCH_HIGHLIGHT);
        }

        if !selection.is_empty() && line >= sel_start.line && line <= sel_end.line {
            let start_col = if line == sel_start.line {
                sel_start.column
            } else {
                0
            };
            // A selected line break shows as one extra column
            let end_col = if line == sel_end.line {
                sel_end.column
            } else {
                line_len + 1
            };
            fill_columns(frame, model, &text, y, start_col, end_col, colors::SELECTION);
        }

        let expanded = expand_tabs(&text, model.config.tab_width);
        let visible: String = expanded
            .chars()
            .skip(vp.left_column)
            .take(vp.visible_columns + 1)
            .collect();
        painter.draw(frame, TEXT_AREA_PADDING_PX, y, &visible, colors::TEXT);
    }

    let cursor = editable.cursor();
    if cursor.line >= vp.top_line && cursor.line < end_line {
        let text = buffer.line(cursor.line).unwrap_or_default();
        let visual = char_col_to_visual_col(&text, cursor.column, model.config.tab_width);
        if visual >= vp.left_column {
            let search_focused = model.ui.search.as_ref().is_some_and(|s| s.focused);
            let color = if search_focused {
                colors::CARET_UNFOCUSED
            } else {
                colors::CARET
            };
            let x = visual_col_to_x(visual, model);
            let y = top + (cursor.line - vp.top_line) as f32 * line_height;
            frame.fill_rect(Rect::new(x, y, 2.0, line_height), color);
        }
    }

    frame.clear_clip();
}

/// Fill the background behind character columns `start_col..end_col` of a
/// line. Colors with alpha below 0xFF are blended.
fn fill_columns(
    frame: &mut Frame,
    model: &AppModel,
    text: &str,
    y: f32,
    start_col: usize,
    end_col: usize,
    color: u32,
) {
    if end_col <= start_col {
        return;
    }
    let tab_width = model.config.tab_width;
    let past_end = end_col.saturating_sub(text.chars().count());
    let start_visual = char_col_to_visual_col(text, start_col, tab_width);
    let end_visual = char_col_to_visual_col(text, end_col, tab_width) + past_end;

    let x0 = visual_col_to_x(start_visual, model).max(TEXT_AREA_PADDING_PX);
    let x1 = visual_col_to_x(end_visual, model);
    if x1 > x0 {
        frame.blend_rect(Rect::new(x0, y, x1 - x0, model.line_height as f32), color);
    }
}

fn render_search_bar(frame: &mut Frame, painter: &mut TextPainter, model: &AppModel) {
    let (Some(layout), Some(search)) = (SearchBarLayout::new(model), model.ui.search.as_ref())
    else {
        return;
    };
    let cw = painter.char_width();
    let text_y = layout.rect.y + BAR_PADDING_PX;

    frame.fill_rect(layout.rect, colors::SEARCH_BAR);
    frame.fill_rect(Rect::new(0.0, layout.rect.y, layout.rect.width, 1.0), colors::BORDER);
    painter.draw(frame, TEXT_AREA_PADDING_PX, text_y, SEARCH_LABEL, colors::TEXT);

    frame.fill_rect(layout.field, colors::FIELD);
    let border = if search.focused {
        colors::FIELD_FOCUSED_BORDER
    } else {
        colors::FIELD_BORDER
    };
    frame.draw_border(layout.field, border);

    // Scroll the term so the caret stays inside the field
    let field_columns = ((layout.field.width / cw) as usize).saturating_sub(1).max(1);
    let caret_col = search.input.cursor().column;
    let scroll = (caret_col + 1).saturating_sub(field_columns);
    let shown: String = search
        .term()
        .chars()
        .skip(scroll)
        .take(field_columns)
        .collect();
    let text_x = layout.field.x + cw / 2.0;

    frame.set_clip(layout.field);
    painter.draw(frame, text_x, text_y, &shown, colors::TEXT);
    if search.focused {
        let x = text_x + (caret_col - scroll) as f32 * cw;
        frame.fill_rect(
            Rect::new(x, text_y, 2.0, painter.line_height() as f32),
            colors::CARET,
        );
    }
    frame.clear_clip();

    let mark = if search.case_sensitive { "x" } else { " " };
    let toggle = format!("[{}] {}", mark, CASE_TOGGLE_LABEL);
    painter.draw(frame, layout.case_toggle.x, text_y, &toggle, colors::TEXT);

    if let Some(outcome) = &search.last_outcome {
        let color = if outcome.is_failure() {
            colors::ERROR_TEXT
        } else {
            colors::MUTED_TEXT
        };
        painter.draw(frame, layout.status_x, text_y, &outcome.status_text(), color);
    }
}

fn render_status_bar(frame: &mut Frame, painter: &mut TextPainter, model: &AppModel) {
    let rect = status_bar_rect(model);
    frame.fill_rect(rect, colors::STATUS_BAR);
    frame.fill_rect(Rect::new(rect.x, rect.y, rect.width, 1.0), colors::BORDER);
    painter.draw(
        frame,
        TEXT_AREA_PADDING_PX,
        rect.y + BAR_PADDING_PX,
        &model.status_text(),
        colors::TEXT,
    );
}

fn render_menu_bar(
    frame: &mut Frame,
    painter: &mut TextPainter,
    model: &AppModel,
    hover: Option<(f32, f32)>,
) {
    let height = menu_bar_height(model.line_height);
    let width = frame.width() as f32;
    frame.fill_rect(Rect::new(0.0, 0.0, width, height), colors::MENU_BAR);
    frame.fill_rect(Rect::new(0.0, height - 1.0, width, 1.0), colors::BORDER);

    let titles = menu_title_rects(model.char_width, model.line_height);
    for (index, (menu, rect)) in MENUS.iter().zip(&titles).enumerate() {
        if model.ui.open_menu == Some(index) {
            frame.fill_rect(*rect, colors::MENU_TITLE_OPEN);
        } else if hover.is_some_and(|(x, y)| rect.contains(x, y)) {
            frame.fill_rect(*rect, colors::MENU_TITLE_HOVER);
        }
        painter.draw(
            frame,
            rect.x + model.char_width,
            MENU_BAR_PADDING_PX,
            menu.title,
            colors::TEXT,
        );
    }
}

fn render_dropdown(
    frame: &mut Frame,
    painter: &mut TextPainter,
    model: &AppModel,
    keymap: &Keymap,
    hover: Option<(f32, f32)>,
) {
    let Some(menu_index) = model.ui.open_menu else {
        return;
    };
    let Some(layout) = DropdownLayout::new(menu_index, keymap, model.char_width, model.line_height)
    else {
        return;
    };
    let cw = model.char_width;
    let hovered = hover.and_then(|(x, y)| layout.item_at(x, y));
    let current_encoding = Command::set_encoding(model.document.encoding);

    frame.fill_rect(layout.rect, colors::DROPDOWN);
    frame.draw_border(layout.rect, colors::DROPDOWN_BORDER);

    for (index, row) in layout.rows.iter().enumerate() {
        let rect = row.rect;
        match row.item {
            MenuItem::Separator => {
                let y = rect.y + rect.height / 2.0;
                frame.fill_rect(
                    Rect::new(rect.x + cw / 2.0, y, rect.width - cw, 1.0),
                    colors::BORDER,
                );
            }
            MenuItem::Action { label, command } => {
                if hovered == Some(index) {
                    frame.fill_rect(
                        Rect::new(rect.x + 1.0, rect.y, rect.width - 2.0, rect.height),
                        colors::DROPDOWN_HOVER,
                    );
                }
                let text_y = rect.y + MENU_BAR_PADDING_PX;

                // Radio marker on the active write encoding
                if current_encoding == Some(*command) {
                    let size = (cw * 0.5).max(3.0);
                    let line_height = painter.line_height() as f32;
                    frame.fill_rect(
                        Rect::new(
                            rect.x + (2.0 * cw - size) / 2.0,
                            text_y + (line_height - size) / 2.0,
                            size,
                            size,
                        ),
                        colors::TEXT,
                    );
                }

                painter.draw(frame, rect.x + layout.label_offset, text_y, label, colors::TEXT);

                if let Some(accelerator) = &row.accelerator {
                    let x = rect.right() - (accelerator.chars().count() + 1) as f32 * cw;
                    painter.draw(frame, x, text_y, accelerator, colors::MUTED_TEXT);
                }
            }
        }
    }
}
