//! Centralized geometry helpers for rendering and hit-testing
//!
//! Single source of truth for where the menu bar, dropdowns, text area,
//! search bar and status bar sit, shared by the renderer and the mouse
//! handling in the runtime.
//!
//! All functions here are pure and can be tested without a window.

use std::borrow::Cow;

use quill::editable::TextBuffer;
use quill::keymap::Keymap;
use quill::menu::{self, MenuItem, MENUS};
use quill::model::{bar_height, menu_bar_height, AppModel, BAR_PADDING_PX, TEXT_AREA_PADDING_PX};
use quill::util::visual_col_to_char_col;

/// Left margin before the first menu title (pixels)
const MENU_BAR_LEFT_PX: f32 = 4.0;
/// Height of a separator row in a dropdown (pixels)
const SEPARATOR_HEIGHT_PX: f32 = 7.0;
/// Columns reserved left of a dropdown label for the encoding marker
const DROPDOWN_MARKER_COLUMNS: usize = 2;
/// Gap between a dropdown label and its accelerator, in columns
const ACCELERATOR_GAP_COLUMNS: usize = 4;
/// Width of the search term field, in columns
const SEARCH_FIELD_COLUMNS: usize = 32;

pub const SEARCH_LABEL: &str = "Find:";
pub const CASE_TOGGLE_LABEL: &str = "Match case";

/// Axis-aligned rectangle in window pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

// ============================================================================
// Tab Expansion
// ============================================================================

/// Expand tab characters to spaces for display.
///
/// Returns `Cow::Borrowed` if no tabs are present.
pub fn expand_tabs(text: &str, tab_width: usize) -> Cow<'_, str> {
    if !text.contains('\t') {
        return Cow::Borrowed(text);
    }

    let tab_width = tab_width.max(1);
    let mut result = String::with_capacity(text.len() * 2);
    let mut visual_col = 0;

    for ch in text.chars() {
        if ch == '\t' {
            let spaces = tab_width - (visual_col % tab_width);
            result.extend(std::iter::repeat(' ').take(spaces));
            visual_col += spaces;
        } else {
            result.push(ch);
            visual_col += 1;
        }
    }

    Cow::Owned(result)
}

// ============================================================================
// Menu Bar
// ============================================================================

/// Rectangles of the menu titles, in `MENUS` order
pub fn menu_title_rects(char_width: f32, line_height: usize) -> Vec<Rect> {
    let height = menu_bar_height(line_height);
    let mut x = MENU_BAR_LEFT_PX;
    MENUS
        .iter()
        .map(|menu| {
            let width = (menu.title.chars().count() + 2) as f32 * char_width;
            let rect = Rect::new(x, 0.0, width, height);
            x += width;
            rect
        })
        .collect()
}

/// One row of an open dropdown
#[derive(Debug, Clone)]
pub struct DropdownRow {
    pub rect: Rect,
    pub item: &'static MenuItem,
    pub accelerator: Option<String>,
}

/// Layout of the open dropdown below its menu title
#[derive(Debug, Clone)]
pub struct DropdownLayout {
    pub rect: Rect,
    pub rows: Vec<DropdownRow>,
    /// Column where labels start, relative to `rect.x`
    pub label_offset: f32,
}

impl DropdownLayout {
    pub fn new(
        menu_index: usize,
        keymap: &Keymap,
        char_width: f32,
        line_height: usize,
    ) -> Option<Self> {
        let menu = MENUS.get(menu_index)?;
        let title = *menu_title_rects(char_width, line_height).get(menu_index)?;

        let accelerators: Vec<Option<String>> = menu
            .items
            .iter()
            .map(|item| menu::accelerator(keymap, item))
            .collect();
        let label_columns = menu
            .items
            .iter()
            .map(|item| item.label().chars().count())
            .max()
            .unwrap_or(0);
        let accelerator_columns = accelerators
            .iter()
            .flatten()
            .map(|a| a.chars().count())
            .max()
            .map_or(0, |n| n + ACCELERATOR_GAP_COLUMNS);

        let columns = DROPDOWN_MARKER_COLUMNS + label_columns + accelerator_columns + 1;
        let width = columns as f32 * char_width;
        let row_height = menu_bar_height(line_height);

        let mut y = title.bottom() + BAR_PADDING_PX;
        let rows = menu
            .items
            .iter()
            .zip(accelerators)
            .map(|(item, accelerator)| {
                let height = match item {
                    MenuItem::Action { .. } => row_height,
                    MenuItem::Separator => SEPARATOR_HEIGHT_PX,
                };
                let rect = Rect::new(title.x, y, width, height);
                y += height;
                DropdownRow {
                    rect,
                    item,
                    accelerator,
                }
            })
            .collect();

        let rect = Rect::new(
            title.x,
            title.bottom(),
            width,
            y + BAR_PADDING_PX - title.bottom(),
        );

        Some(Self {
            rect,
            rows,
            label_offset: DROPDOWN_MARKER_COLUMNS as f32 * char_width,
        })
    }

    /// Index of the action row under the point; separators never match
    pub fn item_at(&self, x: f32, y: f32) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.rect.contains(x, y))
            .filter(|&i| matches!(self.rows[i].item, MenuItem::Action { .. }))
    }
}

// ============================================================================
// Search Bar and Status Bar
// ============================================================================

/// Layout of the search bar between the text area and the status bar
#[derive(Debug, Clone, Copy)]
pub struct SearchBarLayout {
    pub rect: Rect,
    pub field: Rect,
    pub case_toggle: Rect,
    /// X where the outcome text starts
    pub status_x: f32,
}

impl SearchBarLayout {
    /// `None` while the search bar is closed
    pub fn new(model: &AppModel) -> Option<Self> {
        model.ui.search.as_ref()?;

        let cw = model.char_width;
        let height = bar_height(model.line_height);
        let rect = Rect::new(0.0, model.text_area_bottom(), model.window_size.0 as f32, height);

        let field_x = TEXT_AREA_PADDING_PX + (SEARCH_LABEL.len() + 1) as f32 * cw;
        let field = Rect::new(
            field_x,
            rect.y + 1.0,
            SEARCH_FIELD_COLUMNS as f32 * cw,
            height - 2.0,
        );
        // "[x] Match case"
        let toggle_columns = CASE_TOGGLE_LABEL.len() + 4;
        let case_toggle = Rect::new(
            field.right() + 2.0 * cw,
            rect.y,
            toggle_columns as f32 * cw,
            height,
        );

        Some(Self {
            rect,
            field,
            case_toggle,
            status_x: case_toggle.right() + 2.0 * cw,
        })
    }
}

/// Status bar along the bottom edge
pub fn status_bar_rect(model: &AppModel) -> Rect {
    let height = bar_height(model.line_height);
    let (width, window_height) = model.window_size;
    Rect::new(
        0.0,
        (window_height as f32 - height).max(0.0),
        width as f32,
        height,
    )
}

// ============================================================================
// Text Area
// ============================================================================

/// Window X of a visual column in the text area
#[inline]
pub fn visual_col_to_x(visual_col: usize, model: &AppModel) -> f32 {
    let offset = visual_col as f32 - model.viewport.left_column as f32;
    TEXT_AREA_PADDING_PX + offset * model.char_width
}

/// Convert pixel coordinates to a document (line, column).
///
/// Points above or below the text area clamp to the first or last visible
/// row, so dragging past the edges keeps extending the selection.
pub fn pixel_to_cursor(x: f64, y: f64, model: &AppModel) -> (usize, usize) {
    let top = model.text_area_top() as f64;
    let line_height = model.line_height.max(1) as f64;

    let row = ((y - top) / line_height).floor().max(0.0) as usize;
    let row = row.min(model.viewport.visible_lines.saturating_sub(1));
    let last_line = model.document.line_count().saturating_sub(1);
    let line = (model.viewport.top_line + row).min(last_line);

    let text_x = (x - TEXT_AREA_PADDING_PX as f64).max(0.0);
    let visual_col = model.viewport.left_column + (text_x / model.char_width as f64).round() as usize;

    let line_text = model
        .document
        .editable
        .buffer
        .line(line)
        .unwrap_or_default();
    let column = visual_col_to_char_col(&line_text, visual_col, model.config.tab_width);

    (line, column)
}

// ============================================================================
// Hit Testing
// ============================================================================

/// What the mouse is over, highest priority first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// An action row of the open dropdown
    MenuItem { menu: usize, item: usize },
    /// Inside the open dropdown, on a separator or padding
    Dropdown,
    MenuTitle(usize),
    /// Empty part of the menu bar
    MenuBar,
    SearchField,
    SearchCaseToggle,
    /// Elsewhere on the search bar
    SearchBar,
    StatusBar,
    TextArea,
}

pub fn hit_test(model: &AppModel, keymap: &Keymap, x: f64, y: f64) -> HitTarget {
    let (px, py) = (x as f32, y as f32);

    if let Some(menu_index) = model.ui.open_menu {
        if let Some(dropdown) =
            DropdownLayout::new(menu_index, keymap, model.char_width, model.line_height)
        {
            if dropdown.rect.contains(px, py) {
                return match dropdown.item_at(px, py) {
                    Some(item) => HitTarget::MenuItem {
                        menu: menu_index,
                        item,
                    },
                    None => HitTarget::Dropdown,
                };
            }
        }
    }

    if py < menu_bar_height(model.line_height) {
        return menu_title_rects(model.char_width, model.line_height)
            .iter()
            .position(|r| r.contains(px, py))
            .map_or(HitTarget::MenuBar, HitTarget::MenuTitle);
    }

    if status_bar_rect(model).contains(px, py) || py >= model.window_size.1 as f32 {
        return HitTarget::StatusBar;
    }

    if let Some(search) = SearchBarLayout::new(model) {
        if search.rect.contains(px, py) {
            if search.field.contains(px, py) {
                return HitTarget::SearchField;
            }
            if search.case_toggle.contains(px, py) {
                return HitTarget::SearchCaseToggle;
            }
            return HitTarget::SearchBar;
        }
    }

    HitTarget::TextArea
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill::config::EditorConfig;
    use quill::keymap::default_bindings;
    use quill::model::SearchBarState;

    fn test_model(text: &str) -> AppModel {
        let mut model = AppModel::new(EditorConfig::default(), 800, 600);
        model.set_char_metrics(20, 10.0);
        model.document.editable.set_content(text);
        model
    }

    fn keymap() -> Keymap {
        Keymap::with_bindings(default_bindings())
    }

    #[test]
    fn test_expand_tabs() {
        assert!(matches!(expand_tabs("abc", 4), Cow::Borrowed("abc")));
        assert_eq!(expand_tabs("a\tb", 4), "a   b");
        assert_eq!(expand_tabs("\t\tx", 2), "    x");
    }

    #[test]
    fn test_menu_titles_are_contiguous() {
        let rects = menu_title_rects(10.0, 20);
        assert_eq!(rects.len(), MENUS.len());
        for pair in rects.windows(2) {
            assert_eq!(pair[0].right(), pair[1].x);
        }
        // "File" plus one column on each side
        assert_eq!(rects[0].width, 60.0);
    }

    #[test]
    fn test_pixel_to_cursor_first_line() {
        let model = test_model("hello\nworld");
        let top = model.text_area_top() as f64;
        let x = TEXT_AREA_PADDING_PX as f64 + 2.0 * 10.0;
        assert_eq!(pixel_to_cursor(x, top + 1.0, &model), (0, 2));
        assert_eq!(pixel_to_cursor(x, top + 21.0, &model), (1, 2));
    }

    #[test]
    fn test_pixel_to_cursor_clamps() {
        let model = test_model("ab\ncd");
        let top = model.text_area_top() as f64;
        // Far right of the last line
        assert_eq!(pixel_to_cursor(700.0, top + 500.0, &model), (1, 2));
        // Above the text area
        assert_eq!(pixel_to_cursor(0.0, 0.0, &model), (0, 0));
    }

    #[test]
    fn test_pixel_to_cursor_inside_tab() {
        let model = test_model("\tx");
        let top = model.text_area_top() as f64;
        let x = TEXT_AREA_PADDING_PX as f64 + 4.0 * 10.0;
        assert_eq!(pixel_to_cursor(x, top + 1.0, &model), (0, 1));
    }

    #[test]
    fn test_hit_test_regions() {
        let mut model = test_model("text");
        let keymap = keymap();

        let file = menu_title_rects(10.0, 20)[0];
        assert_eq!(
            hit_test(&model, &keymap, (file.x + 5.0) as f64, 5.0),
            HitTarget::MenuTitle(0)
        );
        assert_eq!(hit_test(&model, &keymap, 790.0, 5.0), HitTarget::MenuBar);
        assert_eq!(hit_test(&model, &keymap, 100.0, 300.0), HitTarget::TextArea);
        assert_eq!(hit_test(&model, &keymap, 100.0, 595.0), HitTarget::StatusBar);

        model.ui.search = Some(SearchBarState::new());
        model.recompute_viewport();
        let search = SearchBarLayout::new(&model).unwrap();
        let y = (search.rect.y + 2.0) as f64;
        assert_eq!(
            hit_test(&model, &keymap, (search.field.x + 1.0) as f64, y),
            HitTarget::SearchField
        );
        assert_eq!(
            hit_test(&model, &keymap, (search.case_toggle.x + 1.0) as f64, y),
            HitTarget::SearchCaseToggle
        );
    }

    #[test]
    fn test_hit_test_dropdown_rows() {
        let mut model = test_model("");
        let keymap = keymap();
        model.ui.open_menu = Some(0);

        let dropdown = DropdownLayout::new(0, &keymap, 10.0, 20).unwrap();
        let new_row = dropdown.rows[0].rect;
        assert_eq!(
            hit_test(&model, &keymap, (new_row.x + 5.0) as f64, (new_row.y + 2.0) as f64),
            HitTarget::MenuItem { menu: 0, item: 0 }
        );

        // Row 4 of the File menu is a separator
        let separator = dropdown.rows[4].rect;
        assert_eq!(
            hit_test(&model, &keymap, (separator.x + 5.0) as f64, (separator.y + 1.0) as f64),
            HitTarget::Dropdown
        );
    }

    #[test]
    fn test_dropdown_fits_accelerators() {
        let keymap = keymap();
        let dropdown = DropdownLayout::new(0, &keymap, 10.0, 20).unwrap();
        let widest = dropdown
            .rows
            .iter()
            .filter_map(|r| r.accelerator.as_ref())
            .map(|a| a.len())
            .max()
            .unwrap();
        assert!(dropdown.rect.width >= (widest + "Save As...".len()) as f32 * 10.0);
    }
}
