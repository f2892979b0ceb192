//! Application model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod document;
pub mod ui;

pub use document::{Document, APP_TITLE};
pub use ui::{PendingAction, SearchBarState, UiState};

use crate::config::EditorConfig;
use crate::editable::TextBuffer;
use crate::search::Match;
use crate::util::char_col_to_visual_col;

/// Vertical padding above and below menu titles (pixels)
pub const MENU_BAR_PADDING_PX: f32 = 4.0;
/// Vertical padding inside the status and search bars (pixels)
pub const BAR_PADDING_PX: f32 = 3.0;
/// Left margin before text content (pixels)
pub const TEXT_AREA_PADDING_PX: f32 = 6.0;

#[inline]
pub fn menu_bar_height(line_height: usize) -> f32 {
    line_height as f32 + 2.0 * MENU_BAR_PADDING_PX
}

#[inline]
pub fn bar_height(line_height: usize) -> f32 {
    line_height as f32 + 2.0 * BAR_PADDING_PX
}

/// Visible window onto the document, in lines and visual columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub top_line: usize,
    pub left_column: usize,
    pub visible_lines: usize,
    pub visible_columns: usize,
}

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    /// The single open document
    pub document: Document,
    /// UI state (status line, search bar, menus)
    pub ui: UiState,
    pub config: EditorConfig,
    /// Matches of the last search; cleared by any edit
    pub search_highlights: Vec<Match>,
    pub viewport: Viewport,
    /// Window dimensions
    pub window_size: (u32, u32),
    /// Line height in pixels
    pub line_height: usize,
    /// Character width in pixels (monospace)
    pub char_width: f32,
}

impl AppModel {
    /// Create a model with an empty document sized to the window
    pub fn new(config: EditorConfig, window_width: u32, window_height: u32) -> Self {
        let document = Document::new(config.default_encoding, config.max_undo_groups);
        let mut model = Self {
            document,
            ui: UiState::with_status("Ready"),
            config,
            search_highlights: Vec::new(),
            viewport: Viewport {
                top_line: 0,
                left_column: 0,
                visible_lines: 0,
                visible_columns: 0,
            },
            window_size: (window_width, window_height),
            // Corrected by the renderer with actual font metrics
            line_height: 20,
            char_width: 10.0,
        };
        model.recompute_viewport();
        model
    }

    /// Apply font metrics measured by the renderer
    pub fn set_char_metrics(&mut self, line_height: usize, char_width: f32) {
        self.line_height = line_height.max(1);
        self.char_width = char_width.max(1.0);
        self.recompute_viewport();
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
        self.recompute_viewport();
    }

    /// Y coordinate where the text area begins
    pub fn text_area_top(&self) -> f32 {
        menu_bar_height(self.line_height)
    }

    /// Y coordinate where the text area ends (search bar or status bar below)
    pub fn text_area_bottom(&self) -> f32 {
        let mut bottom = self.window_size.1 as f32 - bar_height(self.line_height);
        if self.ui.search_open() {
            bottom -= bar_height(self.line_height);
        }
        bottom.max(self.text_area_top())
    }

    /// Recompute visible lines/columns after a resize, font or layout change
    pub fn recompute_viewport(&mut self) {
        let text_height = self.text_area_bottom() - self.text_area_top();
        let text_width = self.window_size.0 as f32 - TEXT_AREA_PADDING_PX;
        self.viewport.visible_lines = (text_height / self.line_height as f32).floor().max(1.0) as usize;
        self.viewport.visible_columns = (text_width / self.char_width).floor().max(1.0) as usize;
        self.ensure_cursor_visible();
    }

    /// Lines moved by PageUp/PageDown
    pub fn page_lines(&self) -> usize {
        self.viewport.visible_lines.saturating_sub(1).max(1)
    }

    /// Scroll so the caret is inside the viewport
    pub fn ensure_cursor_visible(&mut self) {
        let cursor = *self.document.editable.cursor();
        let vp = &mut self.viewport;

        if cursor.line < vp.top_line {
            vp.top_line = cursor.line;
        } else if cursor.line >= vp.top_line + vp.visible_lines {
            vp.top_line = cursor.line + 1 - vp.visible_lines;
        }

        let line_text = self
            .document
            .editable
            .buffer
            .line(cursor.line)
            .unwrap_or_default();
        let visual = char_col_to_visual_col(&line_text, cursor.column, self.config.tab_width);
        if visual < vp.left_column {
            vp.left_column = visual;
        } else if visual >= vp.left_column + vp.visible_columns {
            vp.left_column = visual + 1 - vp.visible_columns;
        }
    }

    /// Scroll vertically by `delta` lines without moving the caret
    pub fn scroll_lines(&mut self, delta: i32) {
        let max_top = self
            .document
            .line_count()
            .saturating_sub(self.viewport.visible_lines);
        let top = self.viewport.top_line as i64 + delta as i64;
        self.viewport.top_line = top.clamp(0, max_top as i64) as usize;
    }

    pub fn clear_highlights(&mut self) {
        self.search_highlights.clear();
    }

    pub fn title(&self) -> String {
        self.document.title()
    }

    /// `Ready | Line: L, Column: C`, then the last status message
    pub fn status_text(&self) -> String {
        let cursor = self.document.editable.cursor();
        let position = format!(
            "Ready | Line: {}, Column: {}",
            cursor.line + 1,
            cursor.column + 1
        );
        if self.ui.status_message.is_empty() || self.ui.status_message == "Ready" {
            position
        } else {
            format!("{} | {}", position, self.ui.status_message)
        }
    }
}
