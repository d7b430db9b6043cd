use std::rc::Rc;

use common::config::SiteConfig;
use common::model::verification::{ResultPanel, VerificationSource};
use common::scanner::{QrDecoder, ScanSession, SimulatedDecoder};
use web_sys::MediaStream;
use yew::NodeRef;

use crate::transport::{self, Api};

use super::camera;
use super::messages::Tab;
use super::props::VerificationProps;

pub struct VerificationWidget {
    pub config: Rc<SiteConfig>,
    pub api: Rc<Api>,
    pub decoder: Box<dyn QrDecoder>,
    pub tab: Tab,
    pub batch_input: String,
    /// Which path holds the request slot; the trigger is disabled meanwhile.
    pub busy: Option<VerificationSource>,
    pub panel: Option<ResultPanel>,
    pub scan: ScanSession,
    pub camera: Option<MediaStream>,
    pub video_ref: NodeRef,
    pub result_ref: NodeRef,
    pub reveal_result: bool,
}

impl VerificationWidget {
    pub fn new(props: &VerificationProps) -> Self {
        Self {
            config: props.config.clone(),
            api: transport::api_client(&props.config),
            decoder: Box::new(SimulatedDecoder),
            tab: Tab::Manual,
            batch_input: String::new(),
            busy: None,
            panel: None,
            scan: ScanSession::new(),
            camera: None,
            video_ref: NodeRef::default(),
            result_ref: NodeRef::default(),
            reveal_result: false,
        }
    }

    /// Stops the camera and abandons a scan that has not reached the
    /// verification request yet.
    pub fn release_camera(&mut self) {
        if let Some(stream) = self.camera.take() {
            camera::stop(&stream, &self.video_ref);
        }
        if self.scan.cancel() && self.busy == Some(VerificationSource::Scan) {
            self.busy = None;
        }
    }
}
