//! HTML rendering of shell screens.

use std::fmt::Write;
use toolbox_shell::screen::{Block, Card, Control, TabLabel};
use toolbox_shell::{Action, Screen, ViewId, LOGIN_PATH};

/// Path the sign-out form posts to.
pub const LOGOUT_PATH: &str = "/logout";

const STYLE: &str = r#"
body { margin: 0; font-family: -apple-system, "PingFang SC", "Microsoft YaHei", sans-serif; background: #f5f6fa; color: #222; }
header { display: flex; justify-content: space-between; align-items: center; padding: 12px 24px; background: #1f2d3d; color: #fff; }
header h1 { margin: 0; font-size: 20px; }
main { max-width: 1080px; margin: 24px auto; padding: 0 24px; }
.btn { display: inline-block; padding: 6px 14px; border-radius: 4px; border: 1px solid #d0d4dc; background: #fff; color: #222; text-decoration: none; cursor: pointer; font-size: 14px; }
.btn-primary { background: #1677ff; border-color: #1677ff; color: #fff; }
.btn-danger { background: #ff4d4f; border-color: #ff4d4f; color: #fff; }
form.inline { display: inline; margin: 0; }
.login { max-width: 360px; margin: 80px auto; background: #fff; padding: 32px; border-radius: 8px; box-shadow: 0 2px 12px rgba(0,0,0,.08); }
.login label { display: block; margin: 12px 0 4px; }
.login input { width: 100%; box-sizing: border-box; padding: 8px; }
.login .btn { width: 100%; margin-top: 20px; }
.error { color: #ff4d4f; margin-top: 12px; }
.tabs { display: flex; gap: 8px; margin-bottom: 16px; }
.tabs .active { border-bottom: 2px solid #1677ff; }
.cards { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 16px; margin-bottom: 24px; }
.card { display: block; background: #fff; border-radius: 8px; padding: 16px; color: inherit; text-decoration: none; box-shadow: 0 1px 4px rgba(0,0,0,.06); }
.card h4 { margin: 0 0 8px; }
.card .note { color: #888; font-size: 12px; }
.card .controls { margin-top: 12px; display: flex; gap: 8px; }
.tag { display: inline-block; padding: 0 8px; border-radius: 4px; font-size: 12px; }
.tag-blue { background: #e6f4ff; color: #1677ff; }
.tag-green { background: #f6ffed; color: #389e0d; }
.tag-orange { background: #fff7e6; color: #d46b08; }
.accent-blue { border-top: 4px solid #1890ff; }
.accent-green { border-top: 4px solid #52c41a; }
.accent-orange { border-top: 4px solid #fa8c16; }
.placeholder { text-align: center; padding: 80px 0; }
"#;

/// Full HTML document for `screen`.
pub fn page(screen: &Screen) -> String {
    let mut body = String::new();
    for block in &screen.blocks {
        block_html(&mut body, block);
    }

    let mut header = String::new();
    for control in &screen.header {
        control_html(&mut header, control);
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"zh-CN\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>{style}</style>\n</head>\n\
         <body data-view=\"{view}\">\n<header><h1>{title}</h1><nav>{header}</nav></header>\n\
         <main>{body}</main>\n</body>\n</html>\n",
        title = escape(&screen.title),
        style = STYLE,
        view = screen.view,
        header = header,
        body = body,
    )
}

fn block_html(out: &mut String, block: &Block) {
    match block {
        Block::Heading { text } => {
            let _ = write!(out, "<h2>{}</h2>", escape(text));
        }
        Block::LoginForm { title, error } => {
            let _ = write!(
                out,
                "<form class=\"login\" method=\"post\" action=\"{action}\">\
                 <h2>{title}</h2>\
                 <label for=\"username\">用户名</label>\
                 <input id=\"username\" name=\"username\" autocomplete=\"username\" required>\
                 <label for=\"password\">密码</label>\
                 <input id=\"password\" name=\"password\" type=\"password\" autocomplete=\"current-password\" required>\
                 <button class=\"btn btn-primary\" type=\"submit\">{title}</button>",
                action = LOGIN_PATH,
                title = escape(title),
            );
            if let Some(error) = error {
                let _ = write!(out, "<div class=\"error\" role=\"alert\">{}</div>", escape(error));
            }
            out.push_str("</form>");
        }
        Block::Placeholder {
            title,
            subtitle,
            controls,
        } => {
            let _ = write!(
                out,
                "<section class=\"placeholder\"><h2>{}</h2><p>{}</p>",
                escape(title),
                escape(subtitle)
            );
            for control in controls {
                control_html(out, control);
            }
            out.push_str("</section>");
        }
        Block::Tabs { tabs, active } => {
            out.push_str("<nav class=\"tabs\">");
            for tab in tabs {
                tab_html(out, tab, tab.tab == *active);
            }
            out.push_str("</nav>");
        }
        Block::CardGroup { title, cards } => {
            out.push_str("<section>");
            if let Some(title) = title {
                let _ = write!(out, "<h3>{}</h3>", escape(title));
            }
            out.push_str("<div class=\"cards\">");
            for card in cards {
                card_html(out, card);
            }
            out.push_str("</div></section>");
        }
    }
}

fn tab_html(out: &mut String, tab: &TabLabel, active: bool) {
    let class = if active { "btn active" } else { "btn" };
    match href(&tab.action) {
        Some(href) => {
            let _ = write!(
                out,
                "<a class=\"{}\" href=\"{}\">{}</a>",
                class,
                escape(&href),
                escape(&tab.label)
            );
        }
        None => {
            let _ = write!(out, "<span class=\"{}\">{}</span>", class, escape(&tab.label));
        }
    }
}

fn card_html(out: &mut String, card: &Card) {
    let class = match card.accent {
        Some(tone) => format!("card accent-{}", tone.as_str()),
        None => "card".to_string(),
    };
    let link = card.on_select.as_ref().and_then(href);
    let (open, close) = match &link {
        Some(href) => (
            format!(
                "<a class=\"{}\" id=\"{}\" href=\"{}\">",
                class,
                escape(&card.id),
                escape(href)
            ),
            "</a>",
        ),
        None => (
            format!("<div class=\"{}\" id=\"{}\">", class, escape(&card.id)),
            "</div>",
        ),
    };

    out.push_str(&open);
    let _ = write!(out, "<h4>{}</h4>", escape(&card.title));
    if let Some(tag) = &card.tag {
        let _ = write!(
            out,
            "<span class=\"tag tag-{}\">{}</span>",
            tag.tone.as_str(),
            escape(&tag.label)
        );
    }
    let _ = write!(out, "<p>{}</p>", escape(&card.description));
    if let Some(note) = &card.note {
        let _ = write!(out, "<p class=\"note\">{}</p>", escape(note));
    }
    if !card.controls.is_empty() {
        out.push_str("<div class=\"controls\">");
        for control in &card.controls {
            control_html(out, control);
        }
        out.push_str("</div>");
    }
    out.push_str(close);
}

fn control_html(out: &mut String, control: &Control) {
    let class = format!("btn btn-{}", control.emphasis.as_str());
    let label = escape(&control.label);

    match &control.action {
        Some(Action::SignOut) => {
            let _ = write!(
                out,
                "<form class=\"inline\" method=\"post\" action=\"{}\">\
                 <button class=\"{}\" type=\"submit\">{}</button></form>",
                LOGOUT_PATH, class, label
            );
        }
        Some(action) => match href(action) {
            Some(href) => {
                let _ = write!(
                    out,
                    "<a class=\"{}\" href=\"{}\">{}</a>",
                    class,
                    escape(&href),
                    label
                );
            }
            None => inert(out, &class, &label),
        },
        None => inert(out, &class, &label),
    }
}

fn inert(out: &mut String, class: &str, label: &str) {
    let _ = write!(out, "<button class=\"{}\" type=\"button\">{}</button>", class, label);
}

/// Link target for actions that are plain navigation.
fn href(action: &Action) -> Option<String> {
    match action {
        Action::Open(view) => Some(view.path().to_string()),
        Action::SelectTab(tab) => Some(format!(
            "{}?tab={}",
            ViewId::StrategyManagement.path(),
            tab.as_str()
        )),
        Action::SignOut | Action::SubmitCredential(_) | Action::SignInFailed(_) => None,
    }
}

/// Escape text for HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
