use std::rc::Rc;

use common::config::SiteConfig;
use common::wizard::Flow;
use yew::Properties;

#[derive(Properties, PartialEq)]
pub struct RegistrationProps {
    pub flow: Flow,
    pub config: Rc<SiteConfig>,
}
