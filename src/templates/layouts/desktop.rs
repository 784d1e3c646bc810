use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f8f9fb; color: #222; }
.main-header { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; text-align: center; padding: 2rem; }
.layout { display: flex; gap: 2rem; padding: 1.5rem; }
.sidebar { width: 260px; flex-shrink: 0; }
.content { flex: 1; min-width: 0; }
.card { background: white; padding: 1rem; border-radius: 10px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); margin-bottom: 1rem; }
.metrics { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; }
.metric-card { border-left: 4px solid #667eea; }
.metric-value { font-size: 1.6rem; font-weight: 600; }
.delta { font-size: 0.9rem; color: #b91c1c; }
.bar { background: #667eea; height: 14px; border-radius: 3px; }
.listing-card { border: 1px solid #e9ecef; }
table { width: 100%; border-collapse: collapse; }
th, td { text-align: left; padding: 6px 8px; border-bottom: 1px solid #e5e7eb; }
pre { white-space: pre-wrap; font-family: 'Courier New', monospace; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                header class="main-header" {
                    h1 { "Real Estate Market Dashboard" }
                    p { "Market Analysis & Property Insights" }
                }
                (content)
            }
        }
    }
}
