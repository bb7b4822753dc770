use gloo_net::http::Request;
use std::rc::Rc;
use tracing::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::content;
use super::notifications::Notifier;
use crate::config::UiConfig;
use crate::error::SubmitError;
use crate::state::contact::{
    submit_contact, ContactForm, ContactMessage, FormAction, FormState, SimulatedSubmitter,
    Submitter,
};
use crate::state::validation::ContactField;

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Posts the message as JSON to a configured endpoint.
struct HttpSubmitter {
    endpoint: String,
}

impl Submitter for HttpSubmitter {
    async fn submit(&self, message: &ContactMessage) -> Result<(), SubmitError> {
        let request = Request::post(&self.endpoint)
            .json(message)
            .map_err(|err| SubmitError::Request(err.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|err| SubmitError::Network(err.to_string()))?;

        if !response.ok() {
            return Err(SubmitError::Status(response.status()));
        }
        Ok(())
    }
}

enum ContactTransport {
    Simulated(SimulatedSubmitter),
    Http(HttpSubmitter),
}

impl ContactTransport {
    fn from_config(config: &UiConfig) -> Self {
        match &config.contact_endpoint {
            Some(endpoint) => Self::Http(HttpSubmitter {
                endpoint: endpoint.clone(),
            }),
            None => Self::Simulated(SimulatedSubmitter {
                latency_ms: config.submit_latency_ms,
            }),
        }
    }
}

impl Submitter for ContactTransport {
    async fn submit(&self, message: &ContactMessage) -> Result<(), SubmitError> {
        match self {
            Self::Simulated(submitter) => submitter.submit(message).await,
            Self::Http(submitter) => submitter.submit(message).await,
        }
    }
}

/// The rendered form as seen by the submission flow: values captured at
/// submit time, decorations sent through the reducer.
struct RenderedForm {
    values: ContactMessage,
    dispatcher: UseReducerDispatcher<FormState>,
}

impl ContactForm for RenderedForm {
    fn values(&self) -> ContactMessage {
        self.values.clone()
    }

    fn apply(&self, action: FormAction) {
        self.dispatcher.dispatch(action);
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub notifier: Notifier,
    pub config: Rc<UiConfig>,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let form = use_reducer(FormState::default);

    let onsubmit = {
        let form = form.clone();
        let notifier = props.notifier.clone();
        let config = props.config.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if form.submitting {
                return;
            }

            let rendered = RenderedForm {
                values: form.values.clone(),
                dispatcher: form.dispatcher(),
            };
            let transport = ContactTransport::from_config(&config);
            let notifier = notifier.clone();
            spawn_local(async move {
                let outcome = submit_contact(&rendered, &transport, &notifier).await;
                info!(outcome = ?outcome, "contact form handled");
            });
        })
    };

    let field_group = |field: ContactField, label: &'static str, control: Html| {
        let visual = form.visual(field);
        html! {
            <div class={classes!("form-group", visual.class())}>
                { control }
                <label for={field.name()}>{ label }</label>
                if let Some(message) = visual.message() {
                    <div class="form-message error">{ message }</div>
                }
            </div>
        }
    };

    let on_input = |field: ContactField| {
        let dispatcher = form.dispatcher();
        Callback::from(move |event: InputEvent| {
            let value = match event.target_dyn_into::<HtmlInputElement>() {
                Some(input) => input.value(),
                None => event
                    .target_dyn_into::<HtmlTextAreaElement>()
                    .map(|area| area.value())
                    .unwrap_or_default(),
            };
            dispatcher.dispatch(FormAction::Input(field, value));
        })
    };

    let on_blur = |field: ContactField| {
        let dispatcher = form.dispatcher();
        Callback::from(move |_: FocusEvent| dispatcher.dispatch(FormAction::Blur(field)))
    };

    let text_input = |field: ContactField, kind: &'static str| {
        html! {
            <input
                type={kind}
                id={field.name()}
                name={field.name()}
                value={form.values.value(field).to_string()}
                oninput={on_input(field)}
                onblur={on_blur(field)}
            />
        }
    };

    let message_area = html! {
        <textarea
            id={ContactField::Message.name()}
            name={ContactField::Message.name()}
            rows="5"
            value={form.values.message.clone()}
            oninput={on_input(ContactField::Message)}
            onblur={on_blur(ContactField::Message)}
        />
    };

    html! {
        <section id="contact" class="contact">
            <div class="container">
                <h2 class="section-title">{ "Get In Touch" }</h2>
                <div class="contact-content">
                    <div class="contact-info">
                        { for content::CONTACT_DETAILS.iter().map(|(icon, label, value)| html! {
                            <div class="contact-item">
                                <i class={*icon}></i>
                                <div>
                                    <h4>{ *label }</h4>
                                    <p>{ *value }</p>
                                </div>
                            </div>
                        }) }
                    </div>
                    <form id="contact-form" class="contact-form" novalidate={true} onsubmit={onsubmit}>
                        { field_group(ContactField::Name, "Your Name", text_input(ContactField::Name, "text")) }
                        { field_group(ContactField::Email, "Your Email", text_input(ContactField::Email, "email")) }
                        { field_group(ContactField::Subject, "Subject", text_input(ContactField::Subject, "text")) }
                        { field_group(ContactField::Message, "Your Message", message_area) }
                        <button type="submit" class="btn btn-primary" disabled={form.submitting}>
                            if form.submitting {
                                <i class="fas fa-spinner fa-spin"></i>
                            } else {
                                <i class="fas fa-paper-plane"></i>
                            }
                            { " " }{ form.submit_label() }
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
