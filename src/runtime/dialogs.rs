//! Native dialogs via rfd
//!
//! All dialogs are synchronous and block the event loop until answered.

use std::path::PathBuf;

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult};

use quill::commands::MessageLevel;
use quill::messages::PromptChoice;
use quill::model::PendingAction;

const FILE_FILTERS: &[(&str, &[&str])] = &[
    ("Text files", &["txt"]),
    ("Python files", &["py"]),
    ("C++ files", &["cpp"]),
    ("C# files", &["cs"]),
    ("All files", &["*"]),
];

pub const UNSAVED_CHANGES_TITLE: &str = "Unsaved Changes";
pub const ENCODING_CHANGE_TITLE: &str = "Change Encoding";
/// The text is kept as is; only the encoding used by the next save changes.
pub const ENCODING_CHANGE_TEXT: &str = "The document has unsaved changes.\n\
     If it contains characters the new encoding cannot represent, saving will fail.\n\
     Do you want to continue?";

fn file_dialog() -> FileDialog {
    FILE_FILTERS
        .iter()
        .fold(FileDialog::new(), |dialog, (name, extensions)| {
            dialog.add_filter(*name, *extensions)
        })
}

/// `None` when cancelled
pub fn pick_open_file() -> Option<PathBuf> {
    file_dialog().set_title("Open").pick_file()
}

/// `None` when cancelled
pub fn pick_save_file(suggested_name: &str) -> Option<PathBuf> {
    file_dialog()
        .set_title("Save As")
        .set_file_name(suggested_name)
        .save_file()
}

/// Yes saves first, No discards, anything else cancels
pub fn ask_unsaved_changes(action: PendingAction) -> PromptChoice {
    let result = MessageDialog::new()
        .set_level(rfd::MessageLevel::Warning)
        .set_title(UNSAVED_CHANGES_TITLE)
        .set_description(action.prompt_text())
        .set_buttons(MessageButtons::YesNoCancel)
        .show();

    match result {
        MessageDialogResult::Yes => PromptChoice::Save,
        MessageDialogResult::No => PromptChoice::Discard,
        _ => PromptChoice::Cancel,
    }
}

pub fn confirm_encoding_change() -> bool {
    let result = MessageDialog::new()
        .set_level(rfd::MessageLevel::Warning)
        .set_title(ENCODING_CHANGE_TITLE)
        .set_description(ENCODING_CHANGE_TEXT)
        .set_buttons(MessageButtons::YesNo)
        .show();
    matches!(result, MessageDialogResult::Yes)
}

pub fn show_message(level: MessageLevel, title: &str, body: &str) {
    let level = match level {
        MessageLevel::Info => rfd::MessageLevel::Info,
        MessageLevel::Warning => rfd::MessageLevel::Warning,
        MessageLevel::Error => rfd::MessageLevel::Error,
    };
    MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(body)
        .set_buttons(MessageButtons::Ok)
        .show();
}
