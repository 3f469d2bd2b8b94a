//! Storefront landing page: active banners and categories.

use admin::gateway::interpret;
use admin::{Category, EntityService, RecordId, Slider};
use dioxus::prelude::*;
use ui::{row_key, use_api, Loading};

#[component]
pub fn Home() -> Element {
    let api = use_api();

    let sliders = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                let mut sliders: Vec<Slider> = interpret(EntityService::<Slider>::list(&api).await)
                    .unwrap_or_default()
                    .into_iter()
                    .filter(|s| s.active)
                    .collect();
                sliders.sort_by_key(|s| s.position);
                sliders
            }
        }
    });

    let categories = use_resource(move || {
        let api = api.clone();
        async move {
            interpret(EntityService::<Category>::list(&api).await)
                .unwrap_or_default()
                .into_iter()
                .filter(|c| c.active)
                .collect::<Vec<Category>>()
        }
    });

    rsx! {
        div {
            class: "home",
            {match sliders() {
                None => rsx! { Loading {} },
                Some(sliders) => rsx! {
                    div {
                        class: "home-banners",
                        for (key, slider) in keyed(sliders, |s| s.id) {
                            a {
                                key: "{key}",
                                class: "home-banner",
                                href: slider.link.clone().unwrap_or_else(|| "#".to_string()),
                                img { src: "{slider.image_url}", alt: "{slider.title}" }
                            }
                        }
                    }
                },
            }}
            h2 { class: "home-heading", "Categories" }
            if let Some(categories) = categories() {
                ul {
                    class: "home-categories",
                    for (key, category) in keyed(categories, |c| c.id) {
                        li {
                            key: "{key}",
                            span { class: "font-medium", "{category.name}" }
                            if let Some(description) = category.description {
                                span { class: "text-neutral-500 text-sm", "{description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Pairs each record with its list key.
fn keyed<T>(records: Vec<T>, id: impl Fn(&T) -> Option<RecordId>) -> Vec<(String, T)> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| (row_key(id(&record), index), record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banners_with_same_title_get_distinct_keys() {
        let banner = |id| Slider {
            id,
            title: "Summer sale".into(),
            ..Slider::default()
        };
        let keys: Vec<String> = keyed(vec![banner(Some(3)), banner(Some(8)), banner(None)], |s| s.id)
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(keys, ["3", "8", "new-2"]);
    }
}
