use crate::letters::ProcessedListing;
use crate::templates::{card, components::button_link, desktop_layout};
use maud::{html, Markup};

pub fn letter_page(index: usize, listing: &ProcessedListing, letter: &str, back_page: usize) -> Markup {
    let title = if listing.metrics.short_address.is_empty() {
        format!("Listing {}", index + 1)
    } else {
        listing.metrics.short_address.clone()
    };

    desktop_layout(
        &title,
        html! {
            (card(&title, html! {
                p {
                    span class="tag" { (listing.category.label()) " · " (listing.variant.as_str()) }
                }
                pre class="letter" { (letter) }
                p {
                    (button_link("Download LOI", &format!("/letters/{index}/download")))
                    " "
                    a href=(format!("/listings?page={back_page}")) { "Back to listings" }
                }
            }))
        },
    )
}
