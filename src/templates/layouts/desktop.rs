use maud::{html, Markup, DOCTYPE};

const STYLES: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #1f2937; }
header { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,.1); }
header nav ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; }
main { max-width: 72rem; margin: 1.5rem auto; padding: 0 1rem; }
.card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 1.5rem; margin-bottom: 1.5rem; }
table { width: 100%; border-collapse: collapse; }
th, td { padding: 0.5rem; text-align: left; border-top: 1px solid #e5e7eb; }
.btn { display: inline-block; padding: 0.4rem 0.9rem; border-radius: 6px; background: #524ed2; color: white; text-decoration: none; }
.btn.disabled { background: #c7c7d9; pointer-events: none; }
.pager { display: flex; justify-content: space-between; align-items: center; margin-top: 1rem; }
.tag { font-size: 0.8rem; background: #eef2ff; color: #3730a3; padding: 0.1rem 0.5rem; border-radius: 999px; }
pre.letter { white-space: pre-wrap; font-family: Georgia, serif; font-size: 1rem; line-height: 1.5; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · LOI Generator" }
                style { (maud::PreEscaped(STYLES)) }
            }
            body {
              header {
                  h3 { "LOI Generator" }
                  nav {
                      ul {
                          li { a href="/" { "Upload" } }
                          li { a href="/listings" { "Listings" } }
                          li { a href="/export.csv" { "Export CSV" } }
                      }
                  }
              }
              main { (content) }
            }
        }
    }
}
