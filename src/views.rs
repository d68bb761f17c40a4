//! Minimal server-rendered pages for the browser flow. The interesting
//! surface is the JSON API; these exist so login, registration, and the home
//! page work without a separate front-end build.

use html_escape::encode_text;

fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
         <body>\n{body}\n</body>\n</html>\n"
    )
}

fn error_line(error: Option<&str>) -> String {
    match error {
        Some(message) => format!("<p class=\"error\">{}</p>\n", encode_text(message)),
        None => String::new(),
    }
}

pub fn home(username: &str) -> String {
    let body = format!(
        "<h1>Welcome, {}!</h1>\n\
         <p><a href=\"/pantry\">Pantry</a> | <a href=\"/logout\">Log out</a></p>",
        encode_text(username)
    );
    page("Larder", &body)
}

pub fn login(error: Option<&str>) -> String {
    let body = format!(
        "<h1>Log in</h1>\n{}\
         <form method=\"post\" action=\"/login\">\n\
         <label>Username <input name=\"username\"></label>\n\
         <label>Password <input name=\"password\" type=\"password\"></label>\n\
         <button type=\"submit\">Log in</button>\n\
         </form>\n\
         <p>No account? <a href=\"/register\">Register</a></p>",
        error_line(error)
    );
    page("Log in", &body)
}

pub fn register() -> String {
    let body = "<h1>Register</h1>\n\
         <form method=\"post\" action=\"/register\">\n\
         <label>Username <input name=\"username\"></label>\n\
         <label>Password <input name=\"password\" type=\"password\"></label>\n\
         <button type=\"submit\">Create account</button>\n\
         </form>\n\
         <p>Already registered? <a href=\"/login\">Log in</a></p>";
    page("Register", body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_escapes_the_username() {
        let html = home("<script>alert(1)</script>");
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn login_renders_the_error_when_present() {
        assert!(login(Some("Wrong password. Please try again."))
            .contains("Wrong password. Please try again."));
        assert!(!login(None).contains("class=\"error\""));
    }
}
