use common::validation::UploadedFile;
use web_sys::{File, FileList};

/// Wraps every file of a picker or drop into an [`UploadedFile`].
pub fn uploaded_files(list: Option<FileList>) -> Vec<UploadedFile<File>> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| UploadedFile {
            name: file.name(),
            size_bytes: file.size() as u64,
            mime_type: file.type_(),
            handle: file,
        })
        .collect()
}

/// DOM id of a wizard field, unique per flow.
pub fn field_id(flow: &str, name: &str) -> String {
    format!("{flow}-{name}")
}
