use common::error::ApiError;
use common::model::registration::RegistrationReceipt;
use common::validation::UploadedFile;
use common::wizard::UniquenessQuery;
use web_sys::File;

pub enum Msg {
    Input {
        name: &'static str,
        value: String,
    },
    Toggle {
        name: &'static str,
        checked: bool,
    },
    Blur(&'static str),
    UniquenessChecked {
        query: UniquenessQuery,
        result: Result<bool, ApiError>,
    },
    FilesSelected {
        name: &'static str,
        files: Vec<UploadedFile<File>>,
    },
    RemoveFile {
        name: &'static str,
        index: usize,
    },
    /// Upload field currently under a drag, if any.
    DragOver(Option<&'static str>),
    Next,
    Previous,
    JumpTo(usize),
    Submit,
    Submitted(Result<RegistrationReceipt, ApiError>),
    TogglePasswordVisibility,
    /// Ctrl/Cmd+Enter.
    Shortcut,
}
