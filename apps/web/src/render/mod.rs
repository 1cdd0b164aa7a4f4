//! Server-rendered HTML for the landing page, the wizard steps, and the results page.
//!
//! Pages are plain strings built from small helpers. Every piece of text that
//! can come from a request goes through [`escape_html`].

pub mod landing;
pub mod results;
pub mod wizard;

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #0f172a; color: #e2e8f0; }
main { max-width: 72rem; margin: 0 auto; padding: 3rem 1.5rem; }
a { color: #c084fc; }
h1, h2, h3 { color: #fff; }
.gradient-text { background: linear-gradient(90deg, #0ea5e9, #a855f7); -webkit-background-clip: text; color: transparent; }
.muted { color: #94a3b8; }
.card { background: #1e293b; border: 1px solid #334155; border-radius: 1rem; padding: 1.5rem; margin-bottom: 1rem; }
.grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); gap: 1rem; }
.chip { display: inline-block; padding: 0.15rem 0.6rem; margin: 0.15rem; border-radius: 0.5rem; background: #334155; font-size: 0.85rem; }
.button { display: inline-block; padding: 0.8rem 2rem; border: 0; border-radius: 0.5rem; background: linear-gradient(90deg, #0ea5e9, #9333ea); color: #fff; font-weight: 600; text-decoration: none; cursor: pointer; }
.steps { display: flex; justify-content: space-between; max-width: 48rem; margin: 0 auto 3rem; }
.step { text-align: center; flex: 1; }
.dot { display: inline-flex; width: 2.5rem; height: 2.5rem; border-radius: 50%; align-items: center; justify-content: center; background: #334155; }
.dot.current { background: linear-gradient(90deg, #0ea5e9, #9333ea); }
.dot.done { background: #22c55e; }
.ok { color: #4ade80; } .warn { color: #facc15; } .bad { color: #f87171; }
.pending { opacity: 0.4; }
.terminal { font-family: ui-monospace, monospace; }
"#;

/// Escape HTML special characters.
///
/// Replaces: & < > " '
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Wraps a page body in the shared document shell.
/// `refresh_secs` adds a meta refresh so the browser polls the page.
pub fn layout(title: &str, body: &str, refresh_secs: Option<u32>) -> String {
    let refresh = refresh_secs
        .map(|s| format!(r#"<meta http-equiv="refresh" content="{s}">"#))
        .unwrap_or_default();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
{refresh}
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<main>
{body}
</main>
</body>
</html>"#,
        title = escape_html(title),
    )
}

/// Renders each item as an escaped chip.
pub fn chips<S: AsRef<str>>(items: &[S], class: &str) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                r#"<span class="chip {class}">{}</span>"#,
                escape_html(item.as_ref())
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_replaces_all_specials() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_layout_escapes_title_and_adds_refresh() {
        let page = layout("<Results>", "<p>body</p>", Some(1));
        assert!(page.contains("<title>&lt;Results&gt;</title>"));
        assert!(page.contains(r#"content="1""#));
        assert!(page.contains("<p>body</p>"));
    }

    #[test]
    fn test_layout_without_refresh() {
        assert!(!layout("Home", "", None).contains("http-equiv"));
    }

    #[test]
    fn test_chips_escape_items() {
        let html = chips(&["C++", "<script>"], "ok");
        assert!(html.contains(r#"<span class="chip ok">C++</span>"#));
        assert!(html.contains("&lt;script&gt;"));
    }
}
