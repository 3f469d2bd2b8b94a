//! Create/update dialog rendered from an entity's form schema.

use admin::draft::input_text;
use admin::schema::{FieldKind, FieldSpec, FieldValue};
use admin::{Entity, EntityFormController, FormMode, SubmissionGateway};
use dioxus::prelude::*;

use crate::modal_overlay::ModalOverlay;
use crate::notifications::use_toaster;
use crate::session::use_api;

const INPUT_CLASS: &str = "w-full bg-white border border-neutral-300 rounded px-3 py-2 text-sm text-neutral-800 outline-none mt-1.5 focus:border-primary-500";

/// Dialog for the record held by `controller`. Hidden while the controller is closed.
///
/// `on_saved` runs once after a successful write, before the dialog closes.
#[component]
pub fn EntityFormModal<E: Entity>(
    controller: Signal<EntityFormController<E>>,
    on_saved: EventHandler<()>,
) -> Element {
    let mut controller = controller;
    let api = use_api();
    let toaster = use_toaster();

    let (open, busy, creating) = {
        let form = controller.read();
        (form.is_open(), form.is_busy(), form.mode() == FormMode::Create)
    };
    if !open {
        return rsx! {};
    }

    let title = if creating {
        format!("New {}", E::KIND)
    } else {
        format!("Edit {}", E::KIND)
    };

    let confirm = move |_| {
        let mut notifier = toaster;
        let submission = match controller.write().begin_submit(&mut notifier) {
            Ok(submission) => submission,
            Err(e) => {
                tracing::debug!("{} submit refused: {e}", E::KIND);
                return;
            }
        };
        let gateway = SubmissionGateway::new(api.clone());
        spawn(async move {
            let result = gateway
                .submit::<E>(submission.mode(), submission.payload().clone())
                .await;
            let mut notifier = toaster;
            controller
                .write()
                .finish_submit(submission, result, &mut notifier, || on_saved.call(()));
        });
    };

    rsx! {
        ModalOverlay {
            title,
            on_close: move |_| controller.write().close(),
            div {
                class: "px-6 pb-6 pt-4",
                for spec in E::schema().fields() {
                    div {
                        key: "{spec.name}",
                        class: "mb-4",
                        if spec.kind != FieldKind::Bool {
                            label {
                                r#for: "field-{spec.name}",
                                class: "text-sm font-medium text-neutral-700",
                                "{spec.label}"
                                if spec.is_required(creating) {
                                    span { class: "text-red-600 ml-0.5", "*" }
                                }
                            }
                        }
                        {field_input(spec, controller)}
                    }
                }
                div {
                    class: "flex justify-end gap-2 mt-5",
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| controller.write().close(),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: busy,
                        onclick: confirm,
                        if busy { "Saving..." } else if creating { "Create" } else { "Save" }
                    }
                }
            }
        }
    }
}

fn field_input<E: Entity>(
    spec: &'static FieldSpec,
    mut controller: Signal<EntityFormController<E>>,
) -> Element {
    let id = format!("field-{}", spec.name);
    let name = spec.name;
    let current = controller.read().value(name).cloned();
    let text = current.as_ref().map(input_text).unwrap_or_default();

    match spec.kind {
        FieldKind::Bool => {
            let checked = current.and_then(|v| v.as_bool()).unwrap_or(false);
            rsx! {
                label {
                    class: "flex items-center gap-2 text-sm text-neutral-700",
                    input {
                        id,
                        r#type: "checkbox",
                        checked,
                        onchange: move |evt: FormEvent| {
                            controller.write().set(name, Some(FieldValue::Bool(evt.checked())));
                        },
                    }
                    "{spec.label}"
                }
            }
        }
        FieldKind::LongText => rsx! {
            textarea {
                id,
                class: INPUT_CLASS,
                rows: 3,
                value: text,
                oninput: move |evt: FormEvent| controller.write().set_input(name, &evt.value()),
            }
        },
        FieldKind::Choice(options) => rsx! {
            select {
                id,
                class: INPUT_CLASS,
                value: text,
                onchange: move |evt: FormEvent| controller.write().set_input(name, &evt.value()),
                option { value: "", "Select..." }
                for choice in options {
                    option { key: "{choice}", value: "{choice}", "{choice}" }
                }
            }
        },
        kind => {
            let input_type = match kind {
                FieldKind::Password => "password",
                FieldKind::Number => "number",
                FieldKind::Date => "date",
                _ => "text",
            };
            rsx! {
                input {
                    id,
                    class: INPUT_CLASS,
                    r#type: input_type,
                    value: text,
                    oninput: move |evt: FormEvent| controller.write().set_input(name, &evt.value()),
                }
            }
        }
    }
}
