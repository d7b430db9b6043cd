//! Contact form stub: no request is sent. After a short simulated delay the
//! form resets and a confirmation is shown for `SiteConfig::toast_ms`.

use std::rc::Rc;

use common::config::SiteConfig;
use gloo_timers::future::TimeoutFuture;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::platform::spawn_local;
use yew::prelude::*;

pub const CONTACT_SUCCESS_MESSAGE: &str =
    "Message sent successfully! We will get back to you soon.";

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub config: Rc<SiteConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

pub enum Msg {
    Input(ContactField, String),
    Submit,
    Sent,
    ClearNotice(u32),
}

#[derive(Default)]
struct ContactDraft {
    name: String,
    email: String,
    subject: String,
    message: String,
}

/// Confirmation banner. Each showing gets a new id so that only the timer
/// started by the latest send can hide it.
#[derive(Debug, Default)]
struct Notice {
    shown: u32,
    visible: bool,
}

impl Notice {
    fn show(&mut self) -> u32 {
        self.shown = self.shown.wrapping_add(1);
        self.visible = true;
        self.shown
    }

    fn clear(&mut self, id: u32) -> bool {
        if !self.visible || id != self.shown {
            return false;
        }
        self.visible = false;
        true
    }
}

pub struct ContactForm {
    draft: ContactDraft,
    sending: bool,
    notice: Notice,
}

impl Component for ContactForm {
    type Message = Msg;
    type Properties = ContactFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            draft: ContactDraft::default(),
            sending: false,
            notice: Notice::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Input(field, value) => {
                let slot = match field {
                    ContactField::Name => &mut self.draft.name,
                    ContactField::Email => &mut self.draft.email,
                    ContactField::Subject => &mut self.draft.subject,
                    ContactField::Message => &mut self.draft.message,
                };
                *slot = value;
                false
            }
            Msg::Submit => {
                if self.sending {
                    return false;
                }
                self.sending = true;
                let delay = ctx.props().config.contact_delay_ms;
                let link = ctx.link().clone();
                spawn_local(async move {
                    TimeoutFuture::new(delay).await;
                    link.send_message(Msg::Sent);
                });
                true
            }
            Msg::Sent => {
                log::info!("Contact message from {} accepted", self.draft.email);
                self.sending = false;
                let id = self.notice.show();
                self.draft = ContactDraft::default();
                let lifetime = ctx.props().config.toast_ms;
                let link = ctx.link().clone();
                spawn_local(async move {
                    TimeoutFuture::new(lifetime).await;
                    link.send_message(Msg::ClearNotice(id));
                });
                true
            }
            Msg::ClearNotice(id) => self.notice.clear(id),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let input = |field: ContactField| {
            link.callback(move |e: InputEvent| {
                Msg::Input(field, e.target_unchecked_into::<HtmlInputElement>().value())
            })
        };
        let on_message = link.callback(|e: InputEvent| {
            Msg::Input(
                ContactField::Message,
                e.target_unchecked_into::<HtmlTextAreaElement>().value(),
            )
        });
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        html! {
            <form id="contact-form" class="contact-form" {onsubmit}>
                <div class="form-group">
                    <input type="text" name="name" placeholder="Your Name" required=true
                        value={self.draft.name.clone()} oninput={input(ContactField::Name)} />
                </div>
                <div class="form-group">
                    <input type="email" name="email" placeholder="Your Email" required=true
                        value={self.draft.email.clone()} oninput={input(ContactField::Email)} />
                </div>
                <div class="form-group">
                    <input type="text" name="subject" placeholder="Subject" required=true
                        value={self.draft.subject.clone()} oninput={input(ContactField::Subject)} />
                </div>
                <div class="form-group">
                    <textarea name="message" rows="5" placeholder="Your Message" required=true
                        value={self.draft.message.clone()} oninput={on_message}></textarea>
                </div>
                <button type="submit" class="btn btn-primary" disabled={self.sending}>
                    if self.sending {
                        <i class="fas fa-spinner fa-spin"></i>{ " Sending..." }
                    } else {
                        { "Send Message" }
                    }
                </button>
                if self.notice.visible {
                    <div class="form-message success">{ CONTACT_SUCCESS_MESSAGE }</div>
                }
            </form>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earlier_timer_leaves_newer_notice_visible() {
        let mut notice = Notice::default();
        let first = notice.show();
        let second = notice.show();
        assert!(!notice.clear(first));
        assert!(notice.visible);
        assert!(notice.clear(second));
        assert!(!notice.visible);
    }

    #[test]
    fn clearing_twice_reports_no_change() {
        let mut notice = Notice::default();
        let id = notice.show();
        assert!(notice.clear(id));
        assert!(!notice.clear(id));
    }
}
