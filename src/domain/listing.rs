// src/domain/listing.rs

use crate::domain::amount::Amount;
use crate::letters::Variant;

/// Header aliases for each column we interpret. Matching ignores case and
/// every non-alphanumeric character, so `MLS_Curr_ListPrice`, `mls curr list price`
/// and `MLSCurrListPrice` are the same column.
const LIST_PRICE: &[&str] = &["MLS_Curr_ListPrice", "ListPrice"];
const MORTGAGE_BALANCE: &[&str] = &["EstimatedMortgageBalance", "MortgageBalance"];
const PRECOMPUTED_LTV: &[&str] = &["LTV", "EstimatedLTV"];
const TOTAL_LOANS: &[&str] = &["TotalLoans", "TotalLoanBalance"];
const AGENT_NAME: &[&str] = &["MLS_Curr_ListAgentName", "ListAgentName", "Agent"];
const ADDRESS: &[&str] = &["PropertyAddress", "Address"];
const CITY: &[&str] = &["PropertyCity", "City"];
const VARIANT: &[&str] = &["LOI_Variant", "TemplateVariant", "LOI_Template"];

fn header_key(header: &str) -> String {
    header
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Positions of the interpreted columns within a sheet's header row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnMap {
    pub list_price: Option<usize>,
    pub mortgage_balance: Option<usize>,
    pub precomputed_ltv: Option<usize>,
    pub total_loans: Option<usize>,
    pub agent_name: Option<usize>,
    pub address: Option<usize>,
    pub city: Option<usize>,
    pub variant: Option<usize>,
}

impl ColumnMap {
    pub fn resolve(headers: &[String]) -> Self {
        let keys: Vec<String> = headers.iter().map(|h| header_key(h)).collect();

        // Aliases are tried in order, so the preferred spelling wins when a
        // sheet carries more than one of them.
        let find = |aliases: &[&str]| {
            aliases.iter().find_map(|alias| {
                let wanted = header_key(alias);
                keys.iter().position(|k| *k == wanted)
            })
        };

        Self {
            list_price: find(LIST_PRICE),
            mortgage_balance: find(MORTGAGE_BALANCE),
            precomputed_ltv: find(PRECOMPUTED_LTV),
            total_loans: find(TOTAL_LOANS),
            agent_name: find(AGENT_NAME),
            address: find(ADDRESS),
            city: find(CITY),
            variant: find(VARIANT),
        }
    }
}

/// One spreadsheet row, with the columns we care about normalized up front.
///
/// `cells` keeps the row exactly as uploaded (aligned with the header row)
/// so it can be written back out untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingRecord {
    pub cells: Vec<String>,

    pub list_price: Amount,
    pub mortgage_balance: Amount,
    pub precomputed_ltv: Amount,
    pub total_loans: Amount,

    pub agent_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,

    /// Variant supplied by the sheet itself, if any.
    pub variant: Option<Variant>,
}

impl ListingRecord {
    pub fn from_cells(columns: &ColumnMap, cells: Vec<String>) -> Self {
        let cell = |idx: Option<usize>| idx.and_then(|i| cells.get(i)).map(String::as_str);
        let text = |idx: Option<usize>| {
            cell(idx)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        let amount = |idx: Option<usize>| cell(idx).map(Amount::parse).unwrap_or_default();

        Self {
            list_price: amount(columns.list_price),
            mortgage_balance: amount(columns.mortgage_balance),
            precomputed_ltv: cell(columns.precomputed_ltv)
                .map(Amount::parse_percent)
                .unwrap_or_default(),
            total_loans: amount(columns.total_loans),
            agent_name: text(columns.agent_name),
            address: text(columns.address),
            city: text(columns.city),
            variant: cell(columns.variant).and_then(Variant::parse),
            cells,
        }
    }
}

/// A parsed upload: the header row and every record, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingSheet {
    pub headers: Vec<String>,
    pub columns: ColumnMap,
    pub records: Vec<ListingRecord>,
}

impl ListingSheet {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let columns = ColumnMap::resolve(&headers);
        let records = rows
            .into_iter()
            .map(|cells| ListingRecord::from_cells(&columns, cells))
            .collect();

        Self {
            headers,
            columns,
            records,
        }
    }
}
