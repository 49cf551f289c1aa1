// src/letters/category.rs

use crate::domain::listing::ListingRecord;
use crate::domain::metrics::DerivedMetrics;
use serde::Serialize;

/// LTV above which a listing is treated as underwater-ish.
pub const LOW_EQUITY_LTV: f64 = 90.0;
/// Upper LTV bounds of the strategy buckets (inclusive).
pub const SELLER_FINANCING_MAX_LTV: f64 = 25.0;
pub const HYBRID_MAX_LTV: f64 = 75.0;

/// Which letter bucket a listing falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    // Equity scheme
    NoMortgage,
    LowEquity,
    Standard,
    // Strategy scheme
    SellerFinancing,
    Hybrid,
    SubjectTo,
    Unknown,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::NoMortgage => "no_mortgage",
            Category::LowEquity => "low_equity",
            Category::Standard => "standard",
            Category::SellerFinancing => "seller_financing",
            Category::Hybrid => "hybrid",
            Category::SubjectTo => "subject_to",
            Category::Unknown => "unknown",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::NoMortgage => "No Mortgage",
            Category::LowEquity => "Low Equity",
            Category::Standard => "Standard",
            Category::SellerFinancing => "Seller Financing",
            Category::Hybrid => "Hybrid",
            Category::SubjectTo => "Subject-To",
            Category::Unknown => "Unknown",
        }
    }
}

/// The rule set used to pick a category for every row of one upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    /// Driven by the derived mortgage balance and LTV.
    #[default]
    Equity,
    /// Driven by an LTV column already present in the sheet.
    Strategy,
}

impl Scheme {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "equity" => Some(Scheme::Equity),
            "strategy" => Some(Scheme::Strategy),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Equity => "equity",
            Scheme::Strategy => "strategy",
        }
    }

    /// Sheets that carry their own LTV but no mortgage balance are strategy sheets.
    pub fn detect(columns: &crate::domain::listing::ColumnMap) -> Self {
        if columns.precomputed_ltv.is_some() && columns.mortgage_balance.is_none() {
            Scheme::Strategy
        } else {
            Scheme::Equity
        }
    }

    /// Evaluates the cascade for this scheme. The order of checks is the
    /// precedence: a zero balance is `NoMortgage` whatever the LTV says.
    pub fn classify(self, record: &ListingRecord, metrics: &DerivedMetrics) -> Category {
        match self {
            Scheme::Equity => {
                if metrics.rounded_balance == 0 {
                    Category::NoMortgage
                } else if metrics.ltv > LOW_EQUITY_LTV {
                    Category::LowEquity
                } else {
                    Category::Standard
                }
            }
            Scheme::Strategy => match record.precomputed_ltv.value() {
                None => Category::Unknown,
                Some(ltv) if ltv <= SELLER_FINANCING_MAX_LTV => Category::SellerFinancing,
                Some(ltv) if ltv <= HYBRID_MAX_LTV => Category::Hybrid,
                Some(_) => Category::SubjectTo,
            },
        }
    }
}
