use crate::domain::amount::Amount;
use crate::domain::metrics::currency;
use crate::domain::pagination::Page;
use crate::letters::ProcessedListing;
use crate::templates::{components::pager, desktop_layout};
use maud::{html, Markup};

pub struct ListingsVm<'a> {
    pub file_name: Option<&'a str>,
    pub scheme_label: &'a str,
    pub page: Page,
    /// The rows on this page only.
    pub rows: &'a [ProcessedListing],
}

pub fn listings_page(vm: &ListingsVm<'_>) -> Markup {
    let offset = vm.page.range().start;

    desktop_layout(
        "Listings",
        html! {
            div class="card" {
                div class="pager" {
                    p {
                        "Loaded " strong { (vm.page.total_items) } " listings"
                        @if let Some(name) = vm.file_name {
                            " from " strong { (name) }
                        }
                        " · rules: " (vm.scheme_label)
                    }
                    div {
                        a class="btn" href="/export.csv" { "Download CSV" }
                        " "
                        a class="btn" href="/export.xlsx" { "Download XLSX" }
                    }
                }

                table {
                    thead {
                        tr {
                            th { "Address" }
                            th { "List Price" }
                            th { "Mortgage Balance" }
                            th { "LTV" }
                            th { "Agent" }
                            th { "Template" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        @for (i, listing) in vm.rows.iter().enumerate() {
                            @let index = offset + i;
                            tr {
                                td { (listing.metrics.short_address) }
                                td { (currency(listing.record.list_price)) }
                                td { (currency(Amount::Value(listing.quoted_balance() as f64))) }
                                td { (format!("{:.1}%", listing.display_ltv())) }
                                td { (listing.metrics.agent_first_name) }
                                td {
                                    span class="tag" { (listing.category.label()) " · " (listing.variant.as_str()) }
                                }
                                td {
                                    a href=(format!("/letters/{index}")) { "Preview" }
                                    " "
                                    a class="btn" href=(format!("/letters/{index}/download")) { "Download LOI" }
                                }
                            }
                        }
                    }
                }

                (pager(&vm.page, "/listings"))
            }
        },
    )
}
