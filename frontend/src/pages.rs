//! Page bodies. Static copy lives here; every interactive part is a component.

use std::rc::Rc;

use common::config::SiteConfig;
use common::wizard::Flow;
use yew::prelude::*;

use crate::components::registration::RegistrationWizard;
use crate::components::verification::VerificationWidget;
use crate::components::widgets::{ContactForm, Reveal, StatsCounter};

struct Feature {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "fas fa-link",
        title: "Blockchain Ledger",
        text: "Every batch is recorded from the factory floor to the pharmacy shelf.",
    },
    Feature {
        icon: "fas fa-qrcode",
        title: "Instant Verification",
        text: "Scan the QR code or type the batch number to check a pack in seconds.",
    },
    Feature {
        icon: "fas fa-industry",
        title: "Manufacturer Onboarding",
        text: "Licensed manufacturers register batches with verified credentials.",
    },
    Feature {
        icon: "fas fa-clinic-medical",
        title: "Pharmacy Network",
        text: "Registered pharmacies confirm every pack they receive and dispense.",
    },
];

struct Stat {
    target: u64,
    suffix: &'static str,
    label: &'static str,
    icon: &'static str,
}

const STATS: &[Stat] = &[
    Stat { target: 50000, suffix: "+", label: "Medicines Verified", icon: "fas fa-pills" },
    Stat { target: 1200, suffix: "+", label: "Partner Pharmacies", icon: "fas fa-clinic-medical" },
    Stat { target: 350, suffix: "+", label: "Manufacturers", icon: "fas fa-industry" },
    Stat { target: 99, suffix: "%", label: "Detection Accuracy", icon: "fas fa-shield-alt" },
];

pub fn home(config: &Rc<SiteConfig>) -> Html {
    html! {
        <>
            <section id="home" class="hero">
                <div class="container">
                    <h1>{ "Verify Before You Consume" }</h1>
                    <p>
                        { "PharmaLedger tracks every medicine batch on a tamper-proof ledger so patients can tell genuine packs from counterfeits." }
                    </p>
                    <div class="hero-actions">
                        <a href="#verify" class="btn btn-primary">
                            <i class="fas fa-search"></i>{ " Verify Medicine" }
                        </a>
                        <a href="#register" class="btn btn-secondary">{ "Join the Network" }</a>
                    </div>
                </div>
            </section>

            <section id="verify" class="verify-section">
                <div class="container">
                    <div class="section-header">
                        <h2>{ "Verify Your Medicine" }</h2>
                        <p>{ "Enter the batch number printed on the pack or scan its QR code." }</p>
                    </div>
                    <VerificationWidget config={config.clone()} />
                </div>
            </section>

            <section id="features" class="features-section">
                <div class="container">
                    <div class="section-header"><h2>{ "How It Works" }</h2></div>
                    <div class="features-grid">
                        { for FEATURES.iter().map(|feature| html! {
                            <Reveal class={classes!("feature-card")}>
                                <div class="feature-icon"><i class={feature.icon}></i></div>
                                <h3>{ feature.title }</h3>
                                <p>{ feature.text }</p>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section id="stats" class="stats-section">
                <div class="container stats-grid">
                    { for STATS.iter().map(|stat| html! {
                        <StatsCounter
                            config={config.clone()}
                            target={stat.target}
                            suffix={stat.suffix}
                            label={stat.label}
                            icon={Some(AttrValue::Static(stat.icon))}
                        />
                    }) }
                </div>
            </section>

            <section id="register" class="register-section">
                <div class="container">
                    <div class="section-header"><h2>{ "Join PharmaLedger" }</h2></div>
                    <div class="stakeholder-grid">
                        <Reveal class={classes!("stakeholder-card")}>
                            <i class="fas fa-industry"></i>
                            <h3>{ "Manufacturers" }</h3>
                            <p>{ "Register your company and licenses to publish batches." }</p>
                            <a href="/manufacturer-registration" class="btn btn-primary">
                                { "Register as Manufacturer" }
                            </a>
                        </Reveal>
                        <Reveal class={classes!("stakeholder-card")}>
                            <i class="fas fa-clinic-medical"></i>
                            <h3>{ "Pharmacies" }</h3>
                            <p>{ "Verify stock on arrival and earn the PharmaLedger badge." }</p>
                            <a href="/pharmacy-registration" class="btn btn-primary">
                                { "Register as Pharmacy" }
                            </a>
                        </Reveal>
                    </div>
                </div>
            </section>

            <section id="contact" class="contact-section">
                <div class="container">
                    <div class="section-header">
                        <h2>{ "Contact Us" }</h2>
                        <p>{ "Questions about onboarding or a suspicious pack? Write to us." }</p>
                    </div>
                    <ContactForm config={config.clone()} />
                </div>
            </section>
        </>
    }
}

pub fn registration(config: &Rc<SiteConfig>, flow: Flow) -> Html {
    html! {
        <section class="registration-section">
            <div class="container">
                <RegistrationWizard {flow} config={config.clone()} />
            </div>
        </section>
    }
}

pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="container">
                <p>{ "© 2025 PharmaLedger. Securing the medicine supply chain." }</p>
            </div>
        </footer>
    }
}
