use common::error::ApiError;
use common::model::verification::{VerificationReply, VerificationSource};
use common::scanner::ScanTicket;
use web_sys::MediaStream;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Manual,
    Scanner,
}

pub enum Msg {
    SelectTab(Tab),
    BatchInput(String),
    SubmitManual,
    StartScanner,
    CameraReady(ScanTicket, MediaStream),
    CameraFailed(ScanTicket, String),
    /// The simulated scan delay has passed; decode and verify.
    ScanElapsed(ScanTicket),
    Verified {
        source: VerificationSource,
        entered: String,
        outcome: Result<VerificationReply, ApiError>,
    },
}
