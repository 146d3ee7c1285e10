//! Plain-text reference report.
//!
//! Builds the copy-paste summary of a case's references from a user-selected
//! subset of columns. Scalar columns share one `" - "`-joined line per
//! reference; the url gets its own line; references are separated by a blank
//! line and the result is trimmed.

use crate::error::{DocketError, Result};
use crate::model::{Case, Reference};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefColumn {
    Name,
    Url,
    Profile,
    Collection,
    ProductId,
}

impl RefColumn {
    pub const ALL: [RefColumn; 5] = [
        RefColumn::Name,
        RefColumn::Url,
        RefColumn::Profile,
        RefColumn::Collection,
        RefColumn::ProductId,
    ];

    pub fn key(self) -> &'static str {
        match self {
            RefColumn::Name => "name",
            RefColumn::Url => "url",
            RefColumn::Profile => "profile",
            RefColumn::Collection => "collection",
            RefColumn::ProductId => "product-id",
        }
    }

    pub fn parse(s: &str) -> Result<RefColumn> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(RefColumn::Name),
            "url" => Ok(RefColumn::Url),
            "profile" => Ok(RefColumn::Profile),
            "collection" => Ok(RefColumn::Collection),
            "product-id" | "productid" | "product_id" => Ok(RefColumn::ProductId),
            other => Err(DocketError::Api(format!(
                "Unknown report column: {} (known: name, url, profile, collection, product-id)",
                other
            ))),
        }
    }

    /// Parses a comma-separated column list, dropping duplicates.
    pub fn parse_list(s: &str) -> Result<Vec<RefColumn>> {
        let mut picked = Vec::new();
        for part in s.split(',').filter(|p| !p.trim().is_empty()) {
            let col = RefColumn::parse(part)?;
            if !picked.contains(&col) {
                picked.push(col);
            }
        }
        Ok(picked)
    }

    // Everything but the url shares the joined first line.
    fn is_scalar(self) -> bool {
        self != RefColumn::Url
    }

    fn value(self, r: &Reference) -> &str {
        match self {
            RefColumn::Name => &r.name,
            RefColumn::Url => &r.url,
            RefColumn::Profile => &r.profile,
            RefColumn::Collection => &r.collection,
            RefColumn::ProductId => &r.product_id,
        }
    }
}

/// Builds the report text. Empty input or an empty selection produces an
/// empty string; selection order is normalized to the canonical column
/// order.
pub fn build_report(references: &[Reference], columns: &[RefColumn]) -> String {
    let scalars: Vec<RefColumn> = RefColumn::ALL
        .into_iter()
        .filter(|c| c.is_scalar() && columns.contains(c))
        .collect();
    let with_url = columns.contains(&RefColumn::Url);

    let mut out = String::new();
    for reference in references {
        let values: Vec<&str> = scalars.iter().map(|c| c.value(reference)).collect();
        let mut wrote = false;
        // The joined line only appears when it would carry some value
        if values.iter().any(|v| !v.is_empty()) {
            out.push_str(&values.join(" - "));
            out.push('\n');
            wrote = true;
        }
        if with_url {
            out.push_str(&reference.url);
            out.push('\n');
            wrote = true;
        }
        if wrote {
            out.push('\n');
        }
    }
    out.trim().to_string()
}

/// Suggested filename for a saved report, from the case number or, for an
/// unnumbered case, its id.
pub fn report_filename(case: &Case) -> String {
    let raw = if case.number.is_empty() {
        case.id.to_string()
    } else {
        case.number.clone()
    };
    let stem: String = raw
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();
    format!("refs-{}.txt", stem)
}
