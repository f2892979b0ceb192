//! Text layout helpers shared by the model and the renderer

use std::path::Path;

/// Convert a visual column (screen position) to a character column.
/// Tabs advance to the next multiple of `tab_width`.
pub fn visual_col_to_char_col(text: &str, visual_col: usize, tab_width: usize) -> usize {
    let tab_width = tab_width.max(1);
    let mut current_visual = 0;
    let mut char_col = 0;

    for ch in text.chars() {
        if current_visual >= visual_col {
            return char_col;
        }
        current_visual += advance(ch, current_visual, tab_width);
        char_col += 1;
    }

    char_col
}

/// Convert a character column to a visual column (screen position).
pub fn char_col_to_visual_col(text: &str, char_col: usize, tab_width: usize) -> usize {
    let tab_width = tab_width.max(1);
    text.chars()
        .take(char_col)
        .fold(0, |visual, ch| visual + advance(ch, visual, tab_width))
}

fn advance(ch: char, visual: usize, tab_width: usize) -> usize {
    if ch == '\t' {
        tab_width - (visual % tab_width)
    } else {
        1
    }
}

/// Get the filename from a path for display in messages
pub fn filename_for_display(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_expansion() {
        assert_eq!(char_col_to_visual_col("\tab", 1, 4), 4);
        assert_eq!(char_col_to_visual_col("a\tb", 2, 4), 4);
        assert_eq!(char_col_to_visual_col("a\tb", 3, 8), 9);
        assert_eq!(visual_col_to_char_col("\tab", 4, 4), 1);
        assert_eq!(visual_col_to_char_col("\tab", 2, 4), 1);
        assert_eq!(visual_col_to_char_col("ab", 10, 4), 2);
    }

    #[test]
    fn test_filename_for_display() {
        assert_eq!(filename_for_display(Path::new("/a/b/notes.txt")), "notes.txt");
    }
}
