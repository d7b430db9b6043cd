use std::rc::Rc;

use common::wizard::{Flow, Wizard};
use web_sys::File;
use yew::NodeRef;

use crate::browser::WindowListener;
use crate::storage::LocalStorage;
use crate::transport::{self, Api};

use super::props::RegistrationProps;

pub struct RegistrationWizard {
    pub wizard: Wizard<File>,
    pub api: Rc<Api>,
    pub storage: LocalStorage,
    pub password_visible: bool,
    pub drag_target: Option<&'static str>,
    /// Client-side reference shown when the server returns no registration id.
    pub reference: Option<String>,
    pub form_ref: NodeRef,
    pub shortcut: Option<WindowListener>,
}

impl RegistrationWizard {
    pub fn new(props: &RegistrationProps) -> Self {
        Self {
            wizard: Wizard::for_flow(props.flow),
            api: transport::api_client(&props.config),
            storage: LocalStorage::open(),
            password_visible: false,
            drag_target: None,
            reference: None,
            form_ref: NodeRef::default(),
            shortcut: None,
        }
    }

    pub fn flow(&self) -> Flow {
        self.wizard.spec().flow
    }
}
