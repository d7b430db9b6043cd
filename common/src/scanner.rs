//! QR decoding behind a trait so a real decoder can replace the simulated one.

use once_cell::sync::Lazy;
use regex::Regex;

/// Payload the simulated camera "sees".
pub const SIMULATED_QR_PAYLOAD: &str = "PHARMALEDGER-PCM5112025-DOLO paracetamol 500 mg";
pub const FALLBACK_BATCH_CODE: &str = "PCM5112025";

static BATCH_IN_PAYLOAD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-([A-Z0-9]{8,})").expect("valid batch regex"));

pub trait QrDecoder {
    /// Decodes one camera frame into the raw QR payload.
    fn decode(&self, frame: &[u8]) -> Option<String>;
}

/// Ignores the frame and always reads [`SIMULATED_QR_PAYLOAD`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedDecoder;

impl QrDecoder for SimulatedDecoder {
    fn decode(&self, _frame: &[u8]) -> Option<String> {
        Some(SIMULATED_QR_PAYLOAD.to_string())
    }
}

/// First `-XXXXXXXX` run of 8+ upper-case alphanumerics, or the fallback code.
pub fn batch_code_from_payload(payload: &str) -> String {
    BATCH_IN_PAYLOAD_RE
        .captures(payload)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| FALLBACK_BATCH_CODE.to_string())
}

/// Decodes a frame and extracts the batch code in one go.
pub fn scan_batch_code<D: QrDecoder + ?Sized>(decoder: &D, frame: &[u8]) -> String {
    match decoder.decode(frame) {
        Some(payload) => batch_code_from_payload(&payload),
        None => {
            log::warn!("QR decoder returned nothing, using fallback batch code");
            FALLBACK_BATCH_CODE.to_string()
        }
    }
}

/// Identifies one scan attempt. Messages carrying an older ticket are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanTicket(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ScanPhase {
    #[default]
    Idle,
    OpeningCamera(ScanTicket),
    Scanning(ScanTicket),
}

/// Lifecycle of the simulated scan: camera request, then a fixed delay,
/// then decode. Cancelling invalidates every outstanding ticket.
#[derive(Debug, Default)]
pub struct ScanSession {
    issued: u32,
    phase: ScanPhase,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.phase != ScanPhase::Idle
    }

    pub fn is_scanning(&self) -> bool {
        matches!(self.phase, ScanPhase::Scanning(_))
    }

    /// Begins a camera request; `None` while another attempt is running.
    pub fn start(&mut self) -> Option<ScanTicket> {
        if self.is_active() {
            return None;
        }
        self.issued = self.issued.wrapping_add(1);
        let ticket = ScanTicket(self.issued);
        self.phase = ScanPhase::OpeningCamera(ticket);
        Some(ticket)
    }

    /// The camera stream arrived. `false` means the stream belongs to an
    /// abandoned attempt and must be released.
    pub fn camera_ready(&mut self, ticket: ScanTicket) -> bool {
        if self.phase != ScanPhase::OpeningCamera(ticket) {
            return false;
        }
        self.phase = ScanPhase::Scanning(ticket);
        true
    }

    /// The camera request failed. `false` when the attempt was already abandoned.
    pub fn camera_failed(&mut self, ticket: ScanTicket) -> bool {
        if self.phase != ScanPhase::OpeningCamera(ticket) {
            return false;
        }
        self.phase = ScanPhase::Idle;
        true
    }

    /// The scan delay passed. `true` only for the running attempt, which ends.
    pub fn elapsed(&mut self, ticket: ScanTicket) -> bool {
        if self.phase != ScanPhase::Scanning(ticket) {
            return false;
        }
        self.phase = ScanPhase::Idle;
        true
    }

    /// Abandons the current attempt. Returns whether one was running.
    pub fn cancel(&mut self) -> bool {
        let was_active = self.is_active();
        self.phase = ScanPhase::Idle;
        was_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Blind;

    impl QrDecoder for Blind {
        fn decode(&self, _frame: &[u8]) -> Option<String> {
            None
        }
    }

    #[test]
    fn simulated_payload_yields_pcm_batch() {
        assert_eq!(scan_batch_code(&SimulatedDecoder, &[]), "PCM5112025");
    }

    #[test]
    fn extracts_first_long_run() {
        assert_eq!(batch_code_from_payload("LOT-AB12CD34EF-X"), "AB12CD34EF");
        assert_eq!(batch_code_from_payload("LOT-SHORT1"), FALLBACK_BATCH_CODE);
    }

    #[test]
    fn empty_decode_falls_back() {
        assert_eq!(scan_batch_code(&Blind, b"frame"), FALLBACK_BATCH_CODE);
    }

    #[test]
    fn scan_runs_from_camera_to_decode() {
        let mut session = ScanSession::new();
        let ticket = session.start().unwrap();
        assert!(session.start().is_none());
        assert!(session.camera_ready(ticket));
        assert!(session.is_scanning());
        assert!(session.elapsed(ticket));
        assert!(!session.is_active());
    }

    #[test]
    fn camera_arriving_after_cancel_is_stale() {
        let mut session = ScanSession::new();
        let ticket = session.start().unwrap();
        assert!(session.cancel());
        assert!(!session.camera_ready(ticket));
        assert!(!session.elapsed(ticket));
        assert!(!session.is_active());
    }

    #[test]
    fn old_timer_does_not_end_a_new_scan() {
        let mut session = ScanSession::new();
        let first = session.start().unwrap();
        assert!(session.camera_ready(first));
        session.cancel();
        let second = session.start().unwrap();
        assert!(session.camera_ready(second));
        assert!(!session.elapsed(first));
        assert!(session.is_scanning());
        assert!(session.elapsed(second));
    }

    #[test]
    fn failure_only_counts_for_the_pending_request() {
        let mut session = ScanSession::new();
        let ticket = session.start().unwrap();
        session.cancel();
        assert!(!session.camera_failed(ticket));
        let next = session.start().unwrap();
        assert!(session.camera_failed(next));
        assert!(!session.is_active());
    }

    #[test]
    fn cancel_when_idle_reports_nothing() {
        let mut session = ScanSession::new();
        assert!(!session.cancel());
    }
}
