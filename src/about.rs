//! Static texts for the Help menu

/// Version shown in the Information dialog
pub const APP_VERSION: &str = "2.0";

/// Default target of Help > User Manual (overridable via `manual_url` in config)
pub const DEFAULT_MANUAL_URL: &str = "https://github.com/quill-editor/quill#readme";

pub const INFO_TITLE: &str = "Information";
pub const MEMBERS_TITLE: &str = "Group Members";

/// Body of the Information dialog
pub fn info_text() -> String {
    format!(
        "Advanced Text Editor\n\
         Version: {APP_VERSION}\n\
         \n\
         Features:\n\
         - Open and edit many kinds of text files\n\
         - Reads UTF-8, Latin-1, UTF-16 and Windows-1252\n\
         - Save and Save As with an automatic .bak backup\n\
         - Search with match highlighting\n\
         - Unlimited undo/redo\n\
         - Errors are reported and logged to log/editor_errors.log\n\
         \n\
         \u{a9} 2025 - All rights reserved"
    )
}

/// Body of the Members dialog
pub const MEMBERS_TEXT: &str = "Work group:\n\
    \n\
    Built as a course project for Algorithms, Section C (2025).\n\
    \n\
    Thanks to everyone who tested it and reported bugs.";
