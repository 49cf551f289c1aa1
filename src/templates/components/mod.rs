use crate::domain::pagination::Page;
use maud::{html, Markup};

pub mod error;

pub use error::html_error_response;

pub fn button_link(label: &str, href: &str) -> Markup {
    html! {
        a class="btn" href=(href) { (label) }
    }
}

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Previous / "Page x of y" / Next. Links point at `{base}?page=N`.
pub fn pager(page: &Page, base: &str) -> Markup {
    html! {
        div class="pager" {
            @if page.has_prev() {
                a class="btn" href=(format!("{base}?page={}", page.number - 1)) { "Previous" }
            } @else {
                span class="btn disabled" { "Previous" }
            }

            span { "Page " (page.number) " of " (page.page_count()) }

            @if page.has_next() {
                a class="btn" href=(format!("{base}?page={}", page.number + 1)) { "Next" }
            } @else {
                span class="btn disabled" { "Next" }
            }
        }
    }
}
