// templates/pages/home.rs

use crate::templates::{card, components::button_link, desktop_layout};
use maud::{html, Markup, PreEscaped};

// The file is streamed as the raw request body; the server answers with a
// redirect to the listings table (or an error page, which replaces this one).
const UPLOAD_SCRIPT: &str = r#"
document.getElementById('csv-file').addEventListener('change', async (event) => {
  const file = event.target.files[0];
  if (!file) return;
  const scheme = document.getElementById('scheme').value;
  const params = new URLSearchParams({ name: file.name });
  if (scheme) params.set('scheme', scheme);
  const resp = await fetch('/upload?' + params.toString(), {
    method: 'POST',
    headers: { 'Content-Type': 'text/csv' },
    body: file,
  });
  if (resp.redirected) {
    window.location = resp.url;
  } else {
    document.open();
    document.write(await resp.text());
    document.close();
  }
});
"#;

pub fn home_page(has_session: bool) -> Markup {
    desktop_layout(
        "Upload",
        html! {
            (card("Upload listings", html! {
                p {
                    "Choose a CSV export of your listings. The first row must hold the column names "
                    "(for example " code { "PropertyAddress" } ", " code { "MLS_Curr_ListPrice" } ", "
                    code { "EstimatedMortgageBalance" } ", " code { "MLS_Curr_ListAgentName" } ")."
                }

                div {
                    label for="scheme" { "Letter rules: " }
                    select id="scheme" name="scheme" {
                        option value="" selected { "Detect from columns" }
                        option value="equity" { "Mortgage balance (no mortgage / low equity / standard)" }
                        option value="strategy" { "LTV column (seller financing / hybrid / subject-to)" }
                    }
                }

                p {
                    input type="file" id="csv-file" accept=".csv,text/csv";
                }

                @if has_session {
                    p { "A new upload replaces the listings you are working on. " (button_link("Back to listings", "/listings")) }
                }
            }))

            script { (PreEscaped(UPLOAD_SCRIPT)) }
        },
    )
}
