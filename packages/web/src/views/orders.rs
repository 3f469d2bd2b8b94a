use admin::gateway::interpret;
use admin::{Order, SubmissionResult};
use api::RestClient;
use dioxus::prelude::*;
use ui::{use_api, use_session, Loading};

use crate::Route;

#[component]
pub fn Orders() -> Element {
    let api = use_api();
    let session = use_session();

    let orders = use_resource(move || {
        let api = api.clone();
        let signed_in = session.read().is_authenticated();
        async move { load_orders(&api, signed_in).await }
    });

    if !session.read().is_authenticated() {
        return rsx! {
            div {
                class: "p-8 text-center text-neutral-600",
                p { "Sign in to see your orders." }
                Link { class: "btn btn-primary", to: Route::Auth {}, "Sign in" }
            }
        };
    }

    rsx! {
        div {
            class: "admin-page",
            h1 { "Your orders" }
            {match &*orders.read() {
                None | Some(None) => rsx! { Loading {} },
                Some(Some(Err(e))) => rsx! { p { class: "text-red-600 text-sm", "{e}" } },
                Some(Some(Ok(orders))) if orders.is_empty() => rsx! {
                    p { class: "text-neutral-500 text-sm", "No orders yet." }
                },
                Some(Some(Ok(orders))) => rsx! {
                    table {
                        class: "admin-table",
                        thead {
                            tr {
                                th { "#" }
                                th { "Placed" }
                                th { "Status" }
                                th { "Total" }
                            }
                        }
                        tbody {
                            for (index, order) in orders.iter().enumerate() {
                                tr {
                                    key: "{index}",
                                    td { {order.id.map(|id| id.to_string()).unwrap_or_default()} }
                                    td { {order.created_at.as_deref().map(short_date).unwrap_or("-")} }
                                    td { {order.status.clone().unwrap_or_default()} }
                                    td { {format!("{:.2}", order.total_price)} }
                                }
                            }
                        }
                    }
                },
            }}
        }
    }
}

/// The signed-in user's orders. Nothing is requested without a session.
async fn load_orders(api: &RestClient, signed_in: bool) -> Option<SubmissionResult<Vec<Order>>> {
    if !signed_in {
        return None;
    }
    Some(interpret(api.list_orders().await))
}

/// `2024-05-01T10:00:00Z` → `2024-05-01`.
pub(crate) fn short_date(value: &str) -> &str {
    value.get(..10).unwrap_or(value)
}
