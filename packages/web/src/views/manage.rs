//! Admin management pages, one table per entity.

use admin::{Category, Slider, User, Voucher};
use dioxus::prelude::*;
use ui::{Column, ManageEntityView};

use super::orders::short_date;

fn yes_no(flag: bool) -> String {
    let text = if flag { "Yes" } else { "No" };
    text.to_string()
}

fn or_dash(value: Option<&str>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or("-").to_string()
}

#[component]
pub fn ManageUsers() -> Element {
    let columns: Vec<Column<User>> = vec![
        Column::new("Name", |u: &User| u.name.clone()),
        Column::new("Email", |u: &User| u.email.clone()),
        Column::new("Phone", |u: &User| or_dash(u.phone.as_deref())),
        Column::new("Role", |u: &User| or_dash(u.role.as_deref())),
        Column::new("Enabled", |u: &User| yes_no(u.enabled)),
    ];
    rsx! {
        ManageEntityView::<User> { title: "Users", columns }
    }
}

#[component]
pub fn ManageSliders() -> Element {
    let columns: Vec<Column<Slider>> = vec![
        Column::new("Position", |s: &Slider| s.position.to_string()),
        Column::new("Title", |s: &Slider| s.title.clone()),
        Column::new("Image", |s: &Slider| s.image_url.clone()),
        Column::new("Link", |s: &Slider| or_dash(s.link.as_deref())),
        Column::new("Active", |s: &Slider| yes_no(s.active)),
    ];
    rsx! {
        ManageEntityView::<Slider> { title: "Sliders", columns }
    }
}

#[component]
pub fn ManageCategories() -> Element {
    let columns: Vec<Column<Category>> = vec![
        Column::new("Name", |c: &Category| c.name.clone()),
        Column::new("Description", |c: &Category| or_dash(c.description.as_deref())),
        Column::new("Active", |c: &Category| yes_no(c.active)),
    ];
    rsx! {
        ManageEntityView::<Category> { title: "Categories", columns }
    }
}

#[component]
pub fn ManageVouchers() -> Element {
    let columns: Vec<Column<Voucher>> = vec![
        Column::new("Code", |v: &Voucher| v.voucher_code.clone()),
        Column::new("Value", |v: &Voucher| v.voucher_value.to_string()),
        Column::new("Starts", |v: &Voucher| or_dash(v.start_date.as_deref().map(short_date))),
        Column::new("Ends", |v: &Voucher| or_dash(v.end_date.as_deref().map(short_date))),
        Column::new("Active", |v: &Voucher| yes_no(v.active)),
    ];
    rsx! {
        ManageEntityView::<Voucher> { title: "Vouchers", columns }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_helpers() {
        assert_eq!(yes_no(true), "Yes");
        assert_eq!(or_dash(Some("")), "-");
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("0901")), "0901");
        assert_eq!(short_date("2025-01-31T17:00:00.000Z"), "2025-01-31");
        assert_eq!(short_date("soon"), "soon");
    }
}
