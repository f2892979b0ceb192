//! Reading and writing documents on disk
//!
//! Opening tries every candidate encoding in order (see [`crate::encoding`]).
//! Saving encodes first, copies any existing file to `<path>.bak`, then
//! overwrites the target.

use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::encoding::{decode_with_fallback, TextEncoding};

/// Why a file could not be opened or saved
#[derive(Debug)]
pub enum FileError {
    /// File does not exist
    NotFound,
    /// Permission denied to read or write the file
    PermissionDenied,
    /// Path is a directory, not a file
    IsDirectory,
    /// No candidate encoding accepted the bytes
    Decode,
    /// The text has characters the target encoding cannot represent
    Unencodable { encoding: TextEncoding },
    /// Other I/O error
    Io(io::Error),
}

impl FileError {
    pub fn from_io(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Io(err),
        }
    }

    /// Title for the message box shown to the user
    pub fn title(&self) -> &'static str {
        match self {
            Self::Decode => "Encoding Error",
            Self::PermissionDenied => "Permission Error",
            _ => "Error",
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self, filename: &str) -> String {
        match self {
            Self::NotFound => format!("File not found: {}", filename),
            Self::PermissionDenied => format!(
                "You don't have permission to access {}.\n\
                 Try saving in another folder or with a different name.",
                filename
            ),
            Self::IsDirectory => format!("Cannot open directory: {}", filename),
            Self::Decode => format!(
                "Could not read {} with the supported encodings (utf-8, latin-1, utf-16, cp1252).\n\
                 The file might be corrupted or use an unsupported encoding.",
                filename
            ),
            Self::Unencodable { encoding } => format!(
                "{} contains characters that cannot be written as {}.\n\
                 Choose another encoding from the Encoding menu and save again.",
                filename, encoding
            ),
            Self::Io(err) => format!("Error accessing {}: {}", filename, err),
        }
    }
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "file not found"),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::IsDirectory => write!(f, "is a directory"),
            Self::Decode => write!(f, "no supported encoding could decode the file"),
            Self::Unencodable { encoding } => {
                write!(f, "text is not representable in {}", encoding)
            }
            Self::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// A successfully decoded file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFile {
    pub content: String,
    pub encoding: TextEncoding,
}

/// Outcome of a successful save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    /// Backup written before overwriting, if the file existed and the copy worked
    pub backup: Option<PathBuf>,
    pub bytes_written: usize,
}

/// Read `path` and decode it with the first candidate encoding that accepts
/// the bytes.
pub fn open_document(path: &Path) -> Result<LoadedFile, FileError> {
    if path.is_dir() {
        return Err(FileError::IsDirectory);
    }

    let bytes = fs::read(path).map_err(FileError::from_io)?;
    let (content, encoding) = decode_with_fallback(&bytes).ok_or(FileError::Decode)?;

    tracing::info!(
        "File opened: {} with encoding {} ({} bytes)",
        path.display(),
        encoding,
        bytes.len()
    );
    Ok(LoadedFile { content, encoding })
}

/// `<path>.bak`, keeping the original extension (`notes.txt` -> `notes.txt.bak`)
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".bak");
    PathBuf::from(name)
}

/// Copy the current file byte-for-byte to its backup path
fn create_backup(path: &Path) -> io::Result<PathBuf> {
    let backup = backup_path(path);
    fs::copy(path, &backup)?;
    Ok(backup)
}

/// Encode `content` and write it to `path`.
///
/// An existing file is first copied to `<path>.bak`. A failed backup is
/// logged and the save continues. Nothing is touched on disk when the text
/// cannot be encoded.
pub fn save_document(
    path: &Path,
    content: &str,
    encoding: TextEncoding,
) -> Result<SaveReport, FileError> {
    if path.is_dir() {
        return Err(FileError::IsDirectory);
    }

    let bytes = encoding
        .encode(content)
        .ok_or(FileError::Unencodable { encoding })?;

    let backup = if path.is_file() {
        match create_backup(path) {
            Ok(backup) => {
                tracing::debug!("Backup written to {}", backup.display());
                Some(backup)
            }
            Err(e) => {
                tracing::warn!("Could not create backup of {}: {}", path.display(), e);
                None
            }
        }
    } else {
        None
    };

    let mut file = fs::File::create(path).map_err(FileError::from_io)?;
    file.write_all(&bytes).map_err(FileError::from_io)?;
    file.flush().map_err(FileError::from_io)?;

    tracing::info!("File saved: {} ({})", path.display(), encoding);
    Ok(SaveReport {
        backup,
        bytes_written: bytes.len(),
    })
}
