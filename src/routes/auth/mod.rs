mod handler;
mod model;

pub use handler::{index, login, login_form, logout, main_page};
pub use model::{INVALID_LOGIN_ID, LoginForm};
