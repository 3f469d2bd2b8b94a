//! Entities editable from the admin pages and their field schemas.

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{Category, RecordId, Slider, User, Voucher};
use crate::schema::{email_shape, FieldSpec, FormSchema};

/// A record type that can be listed, created, edited and deleted.
pub trait Entity: Clone + Debug + PartialEq + Serialize + DeserializeOwned + 'static {
    /// Human-readable singular name, used in notifications and logs.
    const KIND: &'static str;
    /// Path segment of the REST resource, e.g. `"vouchers"`.
    const RESOURCE: &'static str;

    fn schema() -> &'static FormSchema;

    fn id(&self) -> Option<RecordId>;
}

static VOUCHER_SCHEMA: FormSchema = FormSchema::new(&[
    FieldSpec::text("voucherCode", "Voucher code").required("Please enter the voucher code"),
    FieldSpec::number("voucherValue", "Discount (%)")
        .required("Please enter the discount")
        .min(0.0),
    FieldSpec::date("startDate", "Start date").required("Please choose a start date"),
    FieldSpec::date("endDate", "End date").required("Please choose an end date"),
    FieldSpec::boolean("active", "Active").required("Please choose whether the voucher is active"),
    FieldSpec::long_text("description", "Description"),
]);

static USER_SCHEMA: FormSchema = FormSchema::new(&[
    FieldSpec::text("name", "Name").required("Please enter a name"),
    FieldSpec::text("email", "Email")
        .required("Please enter an email")
        .validator(email_shape),
    FieldSpec::password("password", "Password").required_on_create("Please enter a password"),
    FieldSpec::text("phone", "Phone"),
    FieldSpec::text("address", "Address"),
    FieldSpec::choice("role", "Role", &["USER", "ADMIN"]).required("Please choose a role"),
    FieldSpec::boolean("enabled", "Enabled"),
]);

static SLIDER_SCHEMA: FormSchema = FormSchema::new(&[
    FieldSpec::text("title", "Title").required("Please enter a title"),
    FieldSpec::text("imageUrl", "Image URL").required("Please enter an image URL"),
    FieldSpec::text("link", "Link"),
    FieldSpec::number("position", "Position").min(0.0),
    FieldSpec::boolean("active", "Active").required("Please choose whether the slider is active"),
]);

static CATEGORY_SCHEMA: FormSchema = FormSchema::new(&[
    FieldSpec::text("name", "Name").required("Please enter a category name"),
    FieldSpec::long_text("description", "Description"),
    FieldSpec::boolean("active", "Active"),
]);

impl Entity for Voucher {
    const KIND: &'static str = "voucher";
    const RESOURCE: &'static str = "vouchers";

    fn schema() -> &'static FormSchema {
        &VOUCHER_SCHEMA
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }
}

impl Entity for User {
    const KIND: &'static str = "user";
    const RESOURCE: &'static str = "users";

    fn schema() -> &'static FormSchema {
        &USER_SCHEMA
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }
}

impl Entity for Slider {
    const KIND: &'static str = "slider";
    const RESOURCE: &'static str = "sliders";

    fn schema() -> &'static FormSchema {
        &SLIDER_SCHEMA
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }
}

impl Entity for Category {
    const KIND: &'static str = "category";
    const RESOURCE: &'static str = "categories";

    fn schema() -> &'static FormSchema {
        &CATEGORY_SCHEMA
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }
}
