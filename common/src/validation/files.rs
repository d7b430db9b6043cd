//! Client-side checks applied to every file before it is accepted into a
//! wizard field.

use std::fmt;

pub const MIB: u64 = 1024 * 1024;
pub const ALLOWED_MIME_TYPES: &[&str] = &["application/pdf", "image/jpeg", "image/jpg", "image/png"];

/// A selected file: descriptor fields plus the platform handle (`web_sys::File`
/// in the browser, `()` in tests) that is eventually sent in the multipart body.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile<F> {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
    pub handle: F,
}

impl UploadedFile<()> {
    pub fn descriptor(name: &str, size_bytes: u64, mime_type: &str) -> Self {
        Self {
            name: name.to_string(),
            size_bytes,
            mime_type: mime_type.to_string(),
            handle: (),
        }
    }
}

impl<F> UploadedFile<F> {
    pub fn icon(&self) -> FileIcon {
        FileIcon::for_mime(&self.mime_type)
    }

    pub fn human_size(&self) -> String {
        format_file_size(self.size_bytes)
    }
}

/// Limits of one upload surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSlot {
    pub max_bytes: u64,
    pub multiple: bool,
}

impl FileSlot {
    /// Primary documents: a single file up to 10 MB.
    pub const fn document() -> Self {
        Self {
            max_bytes: 10 * MIB,
            multiple: false,
        }
    }

    /// Secondary documents: several files up to 5 MB each.
    pub const fn secondary() -> Self {
        Self {
            max_bytes: 5 * MIB,
            multiple: true,
        }
    }

    pub fn max_label(&self) -> String {
        format!("{}MB", self.max_bytes / MIB)
    }

    pub fn check<F>(&self, file: &UploadedFile<F>) -> Result<(), FileRejection> {
        if file.size_bytes > self.max_bytes {
            return Err(FileRejection::TooLarge {
                name: file.name.clone(),
                max_label: self.max_label(),
            });
        }
        if !ALLOWED_MIME_TYPES.contains(&file.mime_type.as_str()) {
            return Err(FileRejection::UnsupportedType {
                name: file.name.clone(),
            });
        }
        Ok(())
    }
}

/// A file refused by [`FileSlot::check`]. `Display` is the blocking alert text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileRejection {
    TooLarge { name: String, max_label: String },
    UnsupportedType { name: String },
}

impl fmt::Display for FileRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileRejection::TooLarge { name, max_label } => {
                write!(f, "File {name} is too large. Maximum size is {max_label}.")
            }
            FileRejection::UnsupportedType { name } => write!(
                f,
                "File {name} is not a supported format. Please use PDF, JPG, or PNG."
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileIcon {
    Pdf,
    Image,
    Other,
}

impl FileIcon {
    pub fn for_mime(mime: &str) -> Self {
        if mime == "application/pdf" {
            FileIcon::Pdf
        } else if mime.starts_with("image/") {
            FileIcon::Image
        } else {
            FileIcon::Other
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            FileIcon::Pdf => "fas fa-file-pdf",
            FileIcon::Image => "fas fa-file-image",
            FileIcon::Other => "fas fa-file-alt",
        }
    }
}

/// `0 Bytes`, `1.5 KB`, `2 MB`: base 1024, at most two decimals.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut unit = 0;
    let mut scaled = bytes as f64;
    while scaled >= 1024.0 && unit < UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }
    let fixed = format!("{scaled:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_document_is_rejected_with_its_name() {
        let file = UploadedFile::descriptor("license.pdf", 10 * MIB + 1, "application/pdf");
        let err = FileSlot::document().check(&file).unwrap_err();
        assert_eq!(
            err.to_string(),
            "File license.pdf is too large. Maximum size is 10MB."
        );
    }

    #[test]
    fn secondary_slot_caps_at_five_megabytes() {
        let file = UploadedFile::descriptor("scan.png", 6 * MIB, "image/png");
        assert!(FileSlot::document().check(&file).is_ok());
        assert!(matches!(
            FileSlot::secondary().check(&file),
            Err(FileRejection::TooLarge { .. })
        ));
    }

    #[test]
    fn mime_allow_list() {
        let doc = UploadedFile::descriptor("notes.docx", 10, "application/msword");
        assert_eq!(
            FileSlot::document().check(&doc),
            Err(FileRejection::UnsupportedType {
                name: "notes.docx".into()
            })
        );
        let jpg = UploadedFile::descriptor("a.jpg", 10, "image/jpeg");
        assert!(FileSlot::document().check(&jpg).is_ok());
    }

    #[test]
    fn sizes_are_human_readable() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(1000), "1000 Bytes");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(2 * MIB), "2 MB");
        assert_eq!(format_file_size(1_234_567), "1.18 MB");
    }

    #[test]
    fn icons() {
        assert_eq!(FileIcon::for_mime("application/pdf"), FileIcon::Pdf);
        assert_eq!(FileIcon::for_mime("image/png").class(), "fas fa-file-image");
        assert_eq!(FileIcon::for_mime("text/plain"), FileIcon::Other);
    }
}
