//! Markup for the registration wizard: progress markers, the active step's
//! fields, the review summary, navigation buttons and the success panel.

use common::validation::{FileSlot, PasswordStrength};
use common::wizard::{
    CharCounter, CounterTone, FieldKind, FieldSpec, FieldStatus, Flow, Phase, PrimaryAction,
    StepMarker,
};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::widgets::LoadingOverlay;

use super::helpers;
use super::messages::Msg;
use super::state::RegistrationWizard;

pub fn view(component: &RegistrationWizard, ctx: &Context<RegistrationWizard>) -> Html {
    let wizard = &component.wizard;
    if wizard.phase() == Phase::Submitted {
        return success_view(component);
    }
    let spec = wizard.spec();
    let step = wizard.step_spec();
    let onsubmit = ctx.link().callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });
    html! {
        <div class="registration-container">
            <div class="registration-header">
                <h1>{ spec.title }</h1>
                <p>{ format!("Step {} of {}", wizard.current_step(), wizard.total_steps()) }</p>
            </div>
            { progress_view(component, ctx) }
            <form
                id={format!("{}-registration-form", spec.flow.as_str())}
                class="registration-form"
                ref={component.form_ref.clone()}
                novalidate=true
                {onsubmit}
            >
                <div class="form-step active" data-step={wizard.current_step().to_string()}>
                    <h2 class="step-title">{ step.title }</h2>
                    if wizard.is_final_step() {
                        { review_view(component) }
                    }
                    { for step.fields.iter().map(|field| field_view(component, ctx, field)) }
                </div>
                { actions_view(component, ctx) }
            </form>
            <LoadingOverlay
                visible={wizard.phase() == Phase::Submitting}
                message="Submitting your registration..."
            />
        </div>
    }
}

fn progress_view(component: &RegistrationWizard, ctx: &Context<RegistrationWizard>) -> Html {
    let wizard = &component.wizard;
    let markers = wizard.spec().steps.iter().enumerate().map(|(i, step)| {
        let index = i + 1;
        let marker = wizard.step_marker(index);
        let clickable = wizard.can_jump_to(index);
        let class = classes!(
            "progress-step",
            match marker {
                StepMarker::Active => Some("active"),
                StepMarker::Completed => Some("completed"),
                StepMarker::Upcoming => None,
            },
            clickable.then_some("clickable")
        );
        let onclick = clickable.then(|| ctx.link().callback(move |_: MouseEvent| Msg::JumpTo(index)));
        html! {
            <div {class} {onclick}>
                <div class="step-number">
                    if marker == StepMarker::Completed {
                        <i class="fas fa-check"></i>
                    } else {
                        { index.to_string() }
                    }
                </div>
                <div class="step-label">{ step.title }</div>
            </div>
        }
    });
    html! {
        <div class="progress-bar">{ for markers }</div>
    }
}

fn field_view(
    component: &RegistrationWizard,
    ctx: &Context<RegistrationWizard>,
    field: &'static FieldSpec,
) -> Html {
    let wizard = &component.wizard;
    let name = field.name;
    let id = helpers::field_id(wizard.spec().flow.as_str(), name);
    let status = wizard.status(name);
    let class = classes!(
        "form-group",
        status.is_invalid().then_some("error"),
        matches!(status, FieldStatus::Valid).then_some("success")
    );
    let control = control_view(component, ctx, field, &id);
    let label = if field.kind == FieldKind::Checkbox {
        html! {}
    } else {
        html! {
            <label for={id.clone()}>
                { field.label }
                if field.is_required() {
                    <span class="required">{ " *" }</span>
                }
            </label>
        }
    };
    html! {
        <div {class}>
            { label }
            { control }
            if wizard.is_checking(name) {
                <span class="field-checking">
                    <i class="fas fa-spinner fa-spin"></i>{ " Checking..." }
                </span>
            }
            if let Some(error) = status.error() {
                <span class="error-message">{ error.to_string() }</span>
            }
        </div>
    }
}

fn control_view(
    component: &RegistrationWizard,
    ctx: &Context<RegistrationWizard>,
    field: &'static FieldSpec,
    id: &str,
) -> Html {
    let link = ctx.link();
    let wizard = &component.wizard;
    let name = field.name;
    let disabled = wizard.is_disabled(name) || wizard.phase() != Phase::Editing;
    let onblur = link.callback(move |_: FocusEvent| Msg::Blur(name));
    let oninput = link.callback(move |e: InputEvent| Msg::Input {
        name,
        value: e.target_unchecked_into::<HtmlInputElement>().value(),
    });

    match field.kind {
        FieldKind::Text | FieldKind::Email | FieldKind::Tel | FieldKind::Url | FieldKind::Date => {
            let input_type = match field.kind {
                FieldKind::Email => "email",
                FieldKind::Tel => "tel",
                FieldKind::Url => "url",
                FieldKind::Date => "date",
                _ => "text",
            };
            html! {
                <input
                    type={input_type}
                    id={id.to_string()}
                    {name}
                    value={wizard.text(name).to_string()}
                    placeholder={field.placeholder}
                    {disabled}
                    {oninput}
                    {onblur}
                />
            }
        }
        FieldKind::Password => password_view(component, ctx, field, id),
        FieldKind::TextArea(counter) => {
            let oninput = link.callback(move |e: InputEvent| Msg::Input {
                name,
                value: e.target_unchecked_into::<HtmlTextAreaElement>().value(),
            });
            html! {
                <>
                    <textarea
                        id={id.to_string()}
                        {name}
                        rows="4"
                        value={wizard.text(name).to_string()}
                        placeholder={field.placeholder}
                        {disabled}
                        {oninput}
                        {onblur}
                    ></textarea>
                    if let Some(counter) = counter {
                        { counter_view(counter, wizard.char_count(name)) }
                    }
                </>
            }
        }
        FieldKind::Select(options) => {
            let onchange = link.callback(move |e: Event| Msg::Input {
                name,
                value: e.target_unchecked_into::<HtmlSelectElement>().value(),
            });
            let current = wizard.text(name);
            html! {
                <select id={id.to_string()} {name} {disabled} {onchange} {onblur}>
                    <option value="" selected={current.is_empty()}>
                        { format!("Select {}", field.label) }
                    </option>
                    { for options.iter().map(|option| html! {
                        <option value={option.value} selected={current == option.value}>
                            { option.label }
                        </option>
                    }) }
                </select>
            }
        }
        FieldKind::Checkbox => {
            let onchange = link.callback(move |e: Event| Msg::Toggle {
                name,
                checked: e.target_unchecked_into::<HtmlInputElement>().checked(),
            });
            html! {
                <label class="checkbox-label" for={id.to_string()}>
                    <input
                        type="checkbox"
                        id={id.to_string()}
                        {name}
                        checked={wizard.checked(name)}
                        {disabled}
                        {onchange}
                    />
                    <span>{ field.label }</span>
                    if field.is_required() {
                        <span class="required">{ " *" }</span>
                    }
                </label>
            }
        }
        FieldKind::File(slot) => file_view(component, ctx, field, slot, id),
    }
}

fn counter_view(counter: CharCounter, count: usize) -> Html {
    let tone = match counter.tone(count) {
        CounterTone::Normal => None,
        CounterTone::Warning => Some("warning"),
        CounterTone::Danger => Some("danger"),
    };
    html! {
        <div class={classes!("char-counter", tone)}>
            { format!("{count}/{}", counter.limit) }
        </div>
    }
}

fn password_view(
    component: &RegistrationWizard,
    ctx: &Context<RegistrationWizard>,
    field: &'static FieldSpec,
    id: &str,
) -> Html {
    let link = ctx.link();
    let wizard = &component.wizard;
    let name = field.name;
    let visible = component.password_visible;
    let oninput = link.callback(move |e: InputEvent| Msg::Input {
        name,
        value: e.target_unchecked_into::<HtmlInputElement>().value(),
    });
    let onblur = link.callback(move |_: FocusEvent| Msg::Blur(name));
    let feedback = match wizard.spec().password_pair {
        Some((_, confirm)) if confirm == name => match_view(wizard.passwords_match()),
        _ if name == "password" => strength_view(wizard.password_strength()),
        _ => html! {},
    };
    html! {
        <>
            <div class="password-input">
                <input
                    type={if visible { "text" } else { "password" }}
                    id={id.to_string()}
                    {name}
                    value={wizard.text(name).to_string()}
                    placeholder={field.placeholder}
                    disabled={wizard.phase() != Phase::Editing}
                    {oninput}
                    {onblur}
                />
                <button
                    type="button"
                    class="password-toggle"
                    aria-label={if visible { "Hide password" } else { "Show password" }}
                    onclick={link.callback(|_| Msg::TogglePasswordVisibility)}
                >
                    <i class={if visible { "fas fa-eye-slash" } else { "fas fa-eye" }}></i>
                </button>
            </div>
            { feedback }
        </>
    }
}

fn strength_view(strength: Option<PasswordStrength>) -> Html {
    let Some(strength) = strength else {
        return html! {};
    };
    html! {
        <div class={classes!("password-strength", strength.level())}>
            <div class="strength-bar">
                <div
                    class="strength-fill"
                    style={format!(
                        "width: {}%; background-color: {};",
                        strength.percent(),
                        strength.color()
                    )}
                ></div>
            </div>
            <span class="strength-text" style={format!("color: {};", strength.color())}>
                { strength.label() }
            </span>
            if !strength.missing.is_empty() {
                <ul class="strength-missing">
                    { for strength.missing.iter().map(|missing| html! { <li>{ *missing }</li> }) }
                </ul>
            }
        </div>
    }
}

fn match_view(matches: Option<bool>) -> Html {
    match matches {
        Some(true) => html! {
            <span class="password-match success">
                <i class="fas fa-check"></i>{ " Passwords match" }
            </span>
        },
        Some(false) => html! {
            <span class="password-match error">
                <i class="fas fa-times"></i>{ " Passwords do not match" }
            </span>
        },
        None => html! {},
    }
}

fn file_view(
    component: &RegistrationWizard,
    ctx: &Context<RegistrationWizard>,
    field: &'static FieldSpec,
    slot: FileSlot,
    id: &str,
) -> Html {
    let link = ctx.link();
    let name = field.name;
    let files = component.wizard.files(name);
    let dragging = component.drag_target == Some(name);

    let onchange = link.callback(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let files = helpers::uploaded_files(input.files());
        // Clear so picking the same file again still fires `change`.
        input.set_value("");
        Msg::FilesSelected { name, files }
    });
    let ondragover = link.callback(move |e: DragEvent| {
        e.prevent_default();
        Msg::DragOver(Some(name))
    });
    let ondragleave = link.callback(|_: DragEvent| Msg::DragOver(None));
    let ondrop = link.callback(move |e: DragEvent| {
        e.prevent_default();
        let files = helpers::uploaded_files(e.data_transfer().and_then(|t| t.files()));
        Msg::FilesSelected { name, files }
    });

    let hint = if slot.multiple {
        format!("PDF, JPG, PNG (max {} each)", slot.max_label())
    } else {
        format!("PDF, JPG, PNG (max {})", slot.max_label())
    };
    html! {
        <>
            <label
                for={id.to_string()}
                class={classes!("file-upload-area", dragging.then_some("dragover"))}
                {ondragover}
                {ondragleave}
                {ondrop}
            >
                <i class="fas fa-cloud-upload-alt"></i>
                <p>{ "Click to upload or drag and drop" }</p>
                <small>{ hint }</small>
                <input
                    type="file"
                    id={id.to_string()}
                    {name}
                    accept=".pdf,.jpg,.jpeg,.png"
                    multiple={slot.multiple}
                    style="display: none;"
                    disabled={component.wizard.phase() != Phase::Editing}
                    {onchange}
                />
            </label>
            if !files.is_empty() {
                <div class="file-preview">
                    { for files.iter().enumerate().map(|(index, file)| html! {
                        <div class="file-item">
                            <i class={file.icon().class()}></i>
                            <span class="file-name">{ file.name.clone() }</span>
                            <span class="file-size">{ file.human_size() }</span>
                            <button
                                type="button"
                                class="remove-file"
                                aria-label="Remove file"
                                onclick={link.callback(move |_| Msg::RemoveFile { name, index })}
                            >
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }) }
                </div>
            }
        </>
    }
}

fn review_view(component: &RegistrationWizard) -> Html {
    html! {
        <div class="review-summary">
            { for component.wizard.review().iter().map(|section| html! {
                <div class="review-section">
                    <h3>{ section.title }</h3>
                    { for section.items.iter().map(|item| html! {
                        <div class="review-item">
                            <span class="review-label">{ item.label }</span>
                            <span class="review-value">{ item.value.clone() }</span>
                        </div>
                    }) }
                </div>
            }) }
        </div>
    }
}

fn actions_view(component: &RegistrationWizard, ctx: &Context<RegistrationWizard>) -> Html {
    let wizard = &component.wizard;
    let link = ctx.link();
    let submitting = wizard.phase() == Phase::Submitting;
    let primary = match wizard.primary_action() {
        PrimaryAction::Next => html! {
            <button
                type="button"
                id="next-btn"
                class="btn btn-primary"
                onclick={link.callback(|_| Msg::Next)}
            >
                { "Next " }<i class="fas fa-arrow-right"></i>
            </button>
        },
        PrimaryAction::Submit => html! {
            <button type="submit" id="submit-btn" class="btn btn-primary" disabled={submitting}>
                if submitting {
                    <i class="fas fa-spinner fa-spin"></i>{ " Submitting..." }
                } else {
                    <i class="fas fa-paper-plane"></i>{ " Submit Registration" }
                }
            </button>
        },
    };
    html! {
        <div class="form-navigation">
            if wizard.current_step() > 1 {
                <button
                    type="button"
                    id="prev-btn"
                    class="btn btn-secondary"
                    disabled={submitting}
                    onclick={link.callback(|_| Msg::Previous)}
                >
                    <i class="fas fa-arrow-left"></i>{ " Previous" }
                </button>
            }
            { primary }
        </div>
    }
}

fn success_view(component: &RegistrationWizard) -> Html {
    let receipt = component.wizard.receipt();
    let (heading, message) = match component.flow() {
        Flow::Manufacturer => (
            "Registration Successful!",
            "You will receive a confirmation mail in 2-3 business days, after verification of credentials."
                .to_string(),
        ),
        Flow::Pharmacy => (
            "Registration Submitted!",
            receipt
                .and_then(|r| r.message.clone())
                .unwrap_or_else(|| {
                    "Your pharmacy registration has been submitted for verification.".to_string()
                }),
        ),
    };
    let registration_id = receipt
        .and_then(|r| r.registration_id.clone())
        .or_else(|| component.reference.clone());
    html! {
        <div class="registration-success">
            <div class="success-icon"><i class="fas fa-check-circle"></i></div>
            <h2>{ heading }</h2>
            <p>{ message }</p>
            if let Some(id) = registration_id {
                <p class="registration-id">{ "Registration ID: " }<strong>{ id }</strong></p>
            }
            <a href="/" class="btn btn-primary"><i class="fas fa-home"></i>{ " Back to Home" }</a>
        </div>
    }
}
