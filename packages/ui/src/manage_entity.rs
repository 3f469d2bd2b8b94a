//! Generic management table: list, create, edit and delete for one entity type.

use admin::gateway::interpret;
use admin::{Entity, EntityFormController, EntityService, Notifier, RecordId, SubmissionGateway};
use dioxus::prelude::*;

use crate::entity_form::EntityFormModal;
use crate::icons::{FaPen, FaPlus, FaRotateRight, FaTrash};
use crate::notifications::use_toaster;
use crate::session::use_api;
use crate::{Icon, Loading};

/// One table column: a header and how to render a record's cell.
#[derive(Clone, PartialEq)]
pub struct Column<E> {
    pub label: &'static str,
    pub cell: fn(&E) -> String,
}

impl<E> Column<E> {
    pub const fn new(label: &'static str, cell: fn(&E) -> String) -> Self {
        Self { label, cell }
    }
}

/// Stable list key: the record id, or its position while it has none.
pub fn row_key(id: Option<RecordId>, index: usize) -> String {
    match id {
        Some(id) => id.to_string(),
        None => format!("new-{index}"),
    }
}

#[component]
pub fn ManageEntityView<E: Entity>(title: String, columns: Vec<Column<E>>) -> Element {
    let kind = E::KIND;
    let api = use_api();
    let toaster = use_toaster();
    let mut controller = use_signal(EntityFormController::<E>::new);

    let mut records = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { interpret(EntityService::<E>::list(&api).await) }
        }
    });

    let delete = move |record: E| {
        let Some(id) = record.id() else {
            return;
        };
        let gateway = SubmissionGateway::new(api.clone());
        spawn(async move {
            let mut notifier = toaster;
            match gateway.delete::<E>(id).await {
                Ok(()) => {
                    notifier.success(&format!("Deleted {} {id}", E::KIND));
                    records.restart();
                }
                Err(e) => notifier.error(&format!("Could not delete {}", E::KIND), e.message()),
            }
        });
    };

    let body = match &*records.read() {
        None => rsx! { Loading {} },
        Some(Err(e)) => rsx! {
            div { class: "p-4 text-sm text-red-600", "Could not load {title}: {e}" }
        },
        Some(Ok(rows)) if rows.is_empty() => rsx! {
            div { class: "p-4 text-sm text-neutral-500", "Nothing here yet." }
        },
        Some(Ok(rows)) => {
            let rows: Vec<(String, E)> = rows
                .iter()
                .enumerate()
                .map(|(index, record)| (row_key(record.id(), index), record.clone()))
                .collect();
            rsx! {
                table {
                    class: "admin-table",
                    thead {
                        tr {
                            for column in columns.iter() {
                                th { key: "{column.label}", "{column.label}" }
                            }
                            th { class: "w-24" }
                        }
                    }
                    tbody {
                        for (row_key, record) in rows {
                            tr {
                                key: "{row_key}",
                                for column in columns.iter() {
                                    td { {(column.cell)(&record)} }
                                }
                                td {
                                    class: "admin-table-actions",
                                    button {
                                        title: "Edit",
                                        onclick: {
                                            let record = record.clone();
                                            move |_| controller.write().open(Some(&record))
                                        },
                                        Icon { icon: FaPen, width: 14, height: 14 }
                                    }
                                    button {
                                        title: "Delete",
                                        onclick: {
                                            let record = record.clone();
                                            let delete = delete.clone();
                                            move |_| delete(record.clone())
                                        },
                                        Icon { icon: FaTrash, width: 14, height: 14 }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "admin-page",
            div {
                class: "admin-page-header",
                h1 { "{title}" }
                div {
                    class: "flex gap-2",
                    button {
                        class: "btn btn-outline",
                        title: "Reload",
                        onclick: move |_| records.restart(),
                        Icon { icon: FaRotateRight, width: 14, height: 14 }
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| controller.write().open(None),
                        Icon { icon: FaPlus, width: 14, height: 14 }
                        " New {kind}"
                    }
                }
            }
            {body}
            EntityFormModal::<E> {
                controller,
                on_saved: move |_| records.restart(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_keys_stay_unique() {
        let ids = [Some(4), None, Some(0), None];
        let keys: Vec<String> = ids.iter().enumerate().map(|(i, id)| row_key(*id, i)).collect();
        assert_eq!(keys, ["4", "new-1", "0", "new-3"]);

        let mut deduped = keys.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), keys.len());
    }
}
