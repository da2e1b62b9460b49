//! Page shell: document head, collapsible sidebar and main column.

use crate::render::PageContext;
use maud::{DOCTYPE, Markup, html};

/// Site-relative location of the stylesheet written by the exporter.
pub const STYLESHEET_PATH: &str = "assets/site.css";

pub const SITE_CSS: &str = r#"*{box-sizing:border-box}
body{margin:0;font-family:system-ui,sans-serif;color:#1f2933;background:#f7f9fb}
.sidebar-toggle{display:none}
.layout{display:flex;min-height:100vh}
.sidebar{width:18rem;flex-shrink:0;background:#1f2933;color:#e4e7eb;padding:1rem;overflow-y:auto}
.sidebar a{color:#e4e7eb;text-decoration:none}
.sidebar a.active{color:#7cc4fa;font-weight:600}
.sidebar ul{list-style:none;padding-left:1rem;margin:.25rem 0}
.sidebar summary{cursor:pointer;padding:.25rem 0}
.sidebar-toggle-button{cursor:pointer;font-size:1.25rem;display:inline-block;margin-bottom:.5rem}
.sidebar-toggle:not(:checked)~.layout .sidebar{width:3rem}
.sidebar-toggle:not(:checked)~.layout .sidebar nav{display:none}
.main{flex:1;padding:2rem 3rem;max-width:72rem}
.breadcrumbs{font-size:.9rem;margin-bottom:1rem}
.breadcrumbs .separator{margin:0 .5rem;color:#9aa5b1}
.card-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(16rem,1fr));gap:1rem}
.card{display:block;background:#fff;border:1px solid #d9e2ec;border-radius:.5rem;padding:1rem;color:inherit;text-decoration:none}
.card:hover{border-color:#2186eb}
.card .meta{font-size:.8rem;color:#627d98}
.empty,.loading{color:#627d98}
.content-missing{background:#fff3c4;border:1px solid #f0b429;padding:1rem;border-radius:.5rem}
.markdown pre{background:#102a43;color:#f0f4f8;padding:1rem;border-radius:.5rem;overflow-x:auto}
.markdown blockquote{border-left:4px solid #9fb3c8;margin-left:0;padding-left:1rem;color:#486581}
"#;

pub(crate) fn render_layout(
    ctx: &PageContext<'_, '_>,
    sidebar: Markup,
    body: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (ctx.page.title()) " \u{b7} " (ctx.site_title) }
                link rel="stylesheet" href=(format!("/{STYLESHEET_PATH}"));
            }
            body {
                input type="checkbox" id="sidebar-toggle" class="sidebar-toggle" checked[ctx.sidebar.is_open()];
                div class="layout" data-path=(ctx.current_path) {
                    aside class="sidebar" data-mode=(ctx.store.mode().as_str()) {
                        label for="sidebar-toggle" class="sidebar-toggle-button" aria-label="Toggle sidebar" {
                            "\u{2630}"
                        }
                        (sidebar)
                    }
                    main class="main" { (body) }
                }
            }
        }
    }
}
