use std::rc::Rc;

use common::config::SiteConfig;
use yew::Properties;

#[derive(Properties, PartialEq)]
pub struct VerificationProps {
    pub config: Rc<SiteConfig>,
}
