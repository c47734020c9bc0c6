//! Auth Pages
//!
//! Login, register and logout markup. Messages are escaped by
//! `platform::html::message_block`.

use platform::html::{Nav, document, message_block};

pub const INCORRECT_CREDENTIALS_MESSAGE: &str = "Incorrect username or password.";
pub const LOGGED_OUT_MESSAGE: &str = "Logged out successfully!";
pub const LOGOUT_FAILED_MESSAGE: &str = "There was an error logging you out. Please try again.";

fn credentials_form(action: &str, submit: &str) -> String {
    format!(
        r#"<form method="post" action="{action}">
<div class="form-group"><label for="username">Username</label>
<input type="text" id="username" name="username" required autocomplete="username"></div>
<div class="form-group"><label for="password">Password</label>
<input type="password" id="password" name="password" required></div>
<button type="submit" class="btn">{submit}</button>
</form>"#
    )
}

/// GET/POST /login
pub fn render_login_page(message: Option<&str>) -> String {
    let body = format!(
        r#"<div class="card">
<h1>Login</h1>
{message}
{form}
<p class="link">Don't have an account? <a href="/register">Register</a></p>
</div>"#,
        message = message_block(message, "error"),
        form = credentials_form("/login", "Login"),
    );

    document("Login", Nav::Guest, &body)
}

/// GET/POST /register
pub fn render_register_page(message: Option<&str>) -> String {
    let body = format!(
        r#"<div class="card">
<h1>Register</h1>
{message}
{form}
<p class="link">Already have an account? <a href="/login">Login</a></p>
</div>"#,
        message = message_block(message, "error"),
        form = credentials_form("/register", "Register"),
    );

    document("Register", Nav::Guest, &body)
}

/// GET /logout
pub fn render_logout_page(message: &str) -> String {
    let body = format!(
        r#"<div class="card">
<h1>Logout</h1>
{message}
<p class="link"><a href="/login">Log in again</a></p>
</div>"#,
        message = message_block(Some(message), "notice"),
    );

    document("Logout", Nav::Guest, &body)
}
