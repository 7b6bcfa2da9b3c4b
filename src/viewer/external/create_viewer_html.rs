use crate::delivery::strategy::NativeTagKind;
use crate::viewer::ViewSettings;

use super::BrowserPresenter;

const SHELL_STYLE: &str = r#"
        body {
            margin: 0;
            background: #1e1e1e;
            color: #ffffff;
            font-family: sans-serif;
            display: flex;
            flex-direction: column;
            height: 100vh;
        }
        header {
            display: flex;
            justify-content: space-between;
            align-items: center;
            padding: 8px 16px;
            border-bottom: 1px solid #444;
        }
        header a { color: #8ab4f8; margin-left: 12px; }
        .viewer { flex: 1; width: 100%; border: 0; }
        .fallback { padding: 24px; text-align: center; }
"#;

impl BrowserPresenter {
    /// Page embedding the PDF in an iframe.
    pub(super) fn create_inline_html(&self, url: &str, title: &str, settings: &ViewSettings) -> String {
        let title = escape_html(title);
        let src = escape_html(&format!("{}{}", url, settings.url_fragment()));
        let href = escape_html(url);

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>{style}
        .viewer {{ transform: rotate({rotation}deg); }}
    </style>
</head>
<body>
    <header>
        <strong>{title}</strong>
        <span><a href="{href}" download>Download</a><a href="{href}" target="_blank" rel="noopener noreferrer">Open</a></span>
    </header>
    <iframe class="viewer" src="{src}" title="{title}"></iframe>
</body>
</html>
"#,
            title = title,
            style = SHELL_STYLE,
            rotation = settings.rotation,
            href = href,
            src = src,
        )
    }

    /// Page using the browser's native PDF element, with a manual link as content fallback.
    pub(super) fn create_native_html(&self, url: &str, title: &str, tag: NativeTagKind) -> String {
        let title = escape_html(title);
        let href = escape_html(url);

        let element = match tag {
            NativeTagKind::Object => format!(
                r#"<object class="viewer" data="{href}" type="application/pdf">
        <div class="fallback">This browser cannot display the PDF. <a href="{href}" download>Download it</a>.</div>
    </object>"#,
                href = href
            ),
            NativeTagKind::Embed => format!(
                r#"<embed class="viewer" src="{href}" type="application/pdf">
    <noembed><div class="fallback"><a href="{href}" download>Download the PDF</a></div></noembed>"#,
                href = href
            ),
        };

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>{style}</style>
</head>
<body>
    <header>
        <strong>{title}</strong>
        <span><a href="{href}" download>Download</a><a href="{href}" target="_blank" rel="noopener noreferrer">Open</a></span>
    </header>
    {element}
</body>
</html>
"#,
            title = title,
            style = SHELL_STYLE,
            href = href,
            element = element,
        )
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
