//! HTML Page Shell
//!
//! Shared layout for the server-rendered pages. Every value interpolated into
//! markup must go through [`escape`].

/// Navigation variant shown in the page header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    /// Login / Register links
    Guest,
    /// Discover / Logout links
    Member,
}

/// Escape text for use in HTML element content and quoted attributes
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render an optional status message block
pub fn message_block(message: Option<&str>, class: &str) -> String {
    message
        .map(|m| format!(r#"<div class="{class}">{}</div>"#, escape(m)))
        .unwrap_or_default()
}

/// Wrap `body` in the full document: head, style, navigation
///
/// `title` is escaped here; `body` is expected to be already-built markup.
pub fn document(title: &str, nav: Nav, body: &str) -> String {
    let nav_links = match nav {
        Nav::Guest => r#"<a href="/login">Login</a><a href="/register">Register</a>"#,
        Nav::Member => r#"<a href="/discover">Discover</a><a href="/logout">Logout</a>"#,
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en"><head>
<meta charset="utf-8"><meta name="viewport" content="width=device-width,initial-scale=1">
<title>{title}</title>
<style>{style}</style>
</head><body>
<nav>{nav_links}</nav>
<main>
{body}
</main>
</body></html>"#,
        title = escape(title),
        style = base_style(),
    )
}

fn base_style() -> &'static str {
    r#"
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body {
        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
        background: #f5f5f5; color: #333;
    }
    nav { background: #222; padding: 12px 24px; }
    nav a { color: #fff; margin-right: 16px; text-decoration: none; }
    main { max-width: 960px; margin: 32px auto; padding: 0 20px; }
    .card {
        background: #fff; border-radius: 16px; padding: 32px;
        max-width: 400px; margin: 0 auto; box-shadow: 0 4px 24px rgba(0,0,0,0.08);
    }
    h1 { margin-bottom: 16px; }
    .form-group { margin-bottom: 16px; }
    .form-group label { display: block; font-size: 14px; margin-bottom: 6px; }
    .form-group input {
        width: 100%; padding: 12px; border: 1px solid #ddd; border-radius: 8px;
    }
    .btn {
        width: 100%; padding: 12px; border: none; border-radius: 8px;
        background: #2563eb; color: #fff; font-size: 16px; cursor: pointer;
    }
    .error { background: #fee2e2; color: #991b1b; padding: 12px; border-radius: 8px; margin-bottom: 16px; }
    .notice { background: #e0f2fe; color: #075985; padding: 12px; border-radius: 8px; margin-bottom: 16px; }
    .link { margin-top: 16px; text-align: center; font-size: 14px; }
    .events { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 16px; }
    .event { background: #fff; border-radius: 12px; padding: 16px; box-shadow: 0 2px 12px rgba(0,0,0,0.06); }
    .event img { width: 100%; border-radius: 8px; margin-bottom: 8px; }
    .event .meta { color: #666; font-size: 14px; margin: 4px 0; }
    "#
}
