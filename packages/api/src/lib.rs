//! # API crate — REST client for the storefront backend
//!
//! [`RestClient`] talks to the Spring backend under `/api/v1` and implements the
//! service seams of the `admin` crate, so the form controller, the gateway and the
//! bootstrap sequencer run against it unchanged.
//!
//! | Endpoint | Method |
//! |----------|--------|
//! | `GET /auth/account` | [`admin::AccountService::fetch_account`] |
//! | `POST /auth/login` | [`RestClient::login`] |
//! | `POST /auth/logout` | [`RestClient::logout`] |
//! | `POST /auth/register` | [`RestClient::register`] |
//! | `POST /auth/forgot` | [`RestClient::forgot_password`] |
//! | `GET/POST/PUT /{resource}`, `DELETE /{resource}/{id}` | [`admin::EntityService`] |
//! | `GET /orders` | [`RestClient::list_orders`] |
//!
//! Every request carries the stored bearer token when there is one.

mod client;
mod token;

pub use client::{decode, RestClient, API_PREFIX};
pub use token::{TokenStore, TOKEN_KEY};

pub use admin::models::{
    Account, ApiResponse, Category, Order, RecordId, RegisterRequest, Slider, User, Voucher,
};
