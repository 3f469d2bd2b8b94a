mod home;
pub use home::Home;

mod orders;
pub use orders::Orders;

mod auth;
pub use auth::Auth;

mod forgot;
pub use forgot::Forgot;

mod dashboard;
pub use dashboard::Dashboard;

mod manage;
pub use manage::{ManageCategories, ManageSliders, ManageUsers, ManageVouchers};

mod not_found;
pub use not_found::NotFound;
