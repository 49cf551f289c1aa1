// src/letters/mod.rs

mod category;
mod templates;
mod variant;

pub use category::{Category, Scheme};
pub use templates::{template_for, LetterFields};
pub use variant::{Variant, VariantSource};

use crate::domain::amount::Amount;
use crate::domain::listing::ListingRecord;
use crate::domain::metrics::{currency, rounded_balance, DerivedMetrics};

/// A record after template selection: everything needed to show a table row
/// and regenerate the same letter on every download.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedListing {
    pub record: ListingRecord,
    pub metrics: DerivedMetrics,
    pub category: Category,
    pub variant: Variant,
}

impl ProcessedListing {
    /// Derives metrics, classifies, and fixes the variant. The record's own
    /// variant is used when it has one; otherwise `source` picks.
    pub fn process<S>(record: ListingRecord, scheme: Scheme, source: &mut S) -> Self
    where
        S: VariantSource + ?Sized,
    {
        let metrics = DerivedMetrics::derive(&record);
        let category = scheme.classify(&record, &metrics);
        let variant = record.variant.unwrap_or_else(|| source.pick());

        Self {
            record,
            metrics,
            category,
            variant,
        }
    }

    pub fn letter(&self, signature: &str) -> String {
        render(&self.record, &self.metrics, self.category, self.variant, signature)
    }

    /// LTV shown to the user: the sheet's own value for strategy rows, the derived one otherwise.
    pub fn display_ltv(&self) -> f64 {
        match self.category {
            Category::SellerFinancing | Category::Hybrid | Category::SubjectTo => self
                .record
                .precomputed_ltv
                .value()
                .unwrap_or(self.metrics.ltv),
            _ => self.metrics.ltv,
        }
    }

    pub fn quoted_balance(&self) -> i64 {
        quoted_balance(&self.record, &self.metrics, self.category)
    }

    /// `<category>:<variant>`, written to the export column.
    pub fn template_tag(&self) -> String {
        format!("{}:{}", self.category.as_str(), self.variant.as_str())
    }

    /// `LOI_Main_St.txt`. Falls back to the row number when there is no street.
    pub fn letter_filename(&self, index: usize) -> String {
        let sanitized = sanitize_filename(&self.metrics.short_address);
        if sanitized.is_empty() {
            format!("LOI_listing_{}.txt", index + 1)
        } else {
            format!("LOI_{sanitized}.txt")
        }
    }
}

/// Replaces every character outside `[A-Za-z0-9]` with `_`.
pub fn sanitize_filename(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Balance quoted in the letter. Strategy sheets may carry total loans
/// across every lien; that wins over the single mortgage when present.
fn quoted_balance(record: &ListingRecord, metrics: &DerivedMetrics, category: Category) -> i64 {
    let strategy = matches!(
        category,
        Category::SellerFinancing | Category::Hybrid | Category::SubjectTo | Category::Unknown
    );

    if strategy && record.total_loans.nonzero().is_some() {
        rounded_balance(record.total_loans)
    } else {
        metrics.rounded_balance
    }
}

/// Renders one letter. Total: any record, however sparse, produces text.
pub fn render(
    record: &ListingRecord,
    metrics: &DerivedMetrics,
    category: Category,
    variant: Variant,
    signature: &str,
) -> String {
    let balance = quoted_balance(record, metrics, category);

    let fields = LetterFields {
        agent_first_name: &metrics.agent_first_name,
        short_address: &metrics.short_address,
        list_price: currency(record.list_price),
        mortgage_balance: currency(Amount::Value(balance as f64)),
        city: record.city.as_deref().unwrap_or(""),
        signature,
    };

    template_for(category, variant)(&fields)
}

/// Processes every record of a sheet in file order.
pub fn process_all<S>(records: Vec<ListingRecord>, scheme: Scheme, source: &mut S) -> Vec<ProcessedListing>
where
    S: VariantSource + ?Sized,
{
    records
        .into_iter()
        .map(|record| ProcessedListing::process(record, scheme, source))
        .collect()
}
