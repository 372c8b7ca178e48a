//! Derived fund analysis
//!
//! Deterministic, category-keyed text and tables built from a single
//! instrument record: description, objectives, typical sector allocation,
//! statistics and a suitability recommendation. Everything here is pure;
//! values are read from the record's string fields and parsed on demand.

use serde::Serialize;

use crate::data::Record;

/// Broad fund category inferred from the upstream `scheme_type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FundCategory {
    /// Invests primarily in stocks and equity-related instruments
    Equity,
    /// Invests in fixed-income securities
    Debt,
    /// Mixes equity and debt exposure
    Hybrid,
    /// Anything the scheme type does not identify
    Other,
}

impl FundCategory {
    /// Infers the category from a scheme type string.
    ///
    /// Matching is case-insensitive and substring-based, mirroring how the
    /// upstream labels its scheme types ("equity", "debt"/"bond",
    /// "hybrid"/"balanced").
    pub fn from_scheme_type(scheme_type: &str) -> FundCategory {
        let s = scheme_type.to_lowercase();
        if s.contains("equity") {
            FundCategory::Equity
        } else if s.contains("debt") || s.contains("bond") {
            FundCategory::Debt
        } else if s.contains("hybrid") || s.contains("balanced") {
            FundCategory::Hybrid
        } else {
            FundCategory::Other
        }
    }
}

/// Fixed projection of the fields shown in a fund overview
#[derive(Debug, Clone, Serialize)]
pub struct FundOverview {
    pub tradingsymbol: String,
    pub name: String,
    pub amc: String,
    pub scheme_type: String,
    pub plan: String,
    pub last_price: String,
    pub last_price_date: String,
}

impl FundOverview {
    /// Projects the overview fields out of a record; absent fields are empty
    pub fn from_record(record: &Record) -> Self {
        Self {
            tradingsymbol: record.get_or_empty("tradingsymbol").to_string(),
            name: record.get_or_empty("name").to_string(),
            amc: record.get_or_empty("amc").to_string(),
            scheme_type: record.get_or_empty("scheme_type").to_string(),
            plan: record.get_or_empty("plan").to_string(),
            last_price: record.get_or_empty("last_price").to_string(),
            last_price_date: record.get_or_empty("last_price_date").to_string(),
        }
    }
}

/// One sector allocation row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorWeight {
    pub sector: &'static str,
    pub percentage: f64,
}

/// One labelled statistic row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: String,
}

/// Structured analysis derived from one record
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundAnalysis {
    pub description: String,
    pub objectives: Vec<&'static str>,
    pub sector_holdings: Vec<SectorWeight>,
    pub stats: Vec<Stat>,
    pub summary_recommendation: &'static str,
}

/// Overview plus derived analysis for one fund
#[derive(Debug, Clone, Serialize)]
pub struct FundReport {
    pub overview: FundOverview,
    pub analysis: FundAnalysis,
}

/// Builds the full report for one record
pub fn report(record: &Record) -> FundReport {
    let category = FundCategory::from_scheme_type(record.get_or_empty("scheme_type"));
    FundReport {
        overview: FundOverview::from_record(record),
        analysis: FundAnalysis {
            description: describe(category, record.get_or_empty("plan")),
            objectives: objectives(category),
            sector_holdings: sector_holdings(category),
            stats: stats(record, category),
            summary_recommendation: recommendation(category),
        },
    }
}

/// Builds the descriptive paragraph for a fund
pub fn describe(category: FundCategory, plan: &str) -> String {
    let mut desc = String::from("This is a ");

    match category {
        FundCategory::Equity => {
            desc.push_str("equity mutual fund that primarily invests in stocks and equity-related instruments. ");
            desc.push_str("It aims to provide long-term capital appreciation through diversified equity investments. ");
        }
        FundCategory::Debt => {
            desc.push_str("debt mutual fund that invests in fixed-income securities like bonds, government securities, and money market instruments. ");
            desc.push_str("It aims to provide regular income with capital preservation. ");
        }
        FundCategory::Hybrid => {
            desc.push_str("hybrid mutual fund that invests in both equity and debt instruments to balance growth and income. ");
            desc.push_str("It aims to provide capital appreciation with lower volatility than pure equity funds. ");
        }
        FundCategory::Other => {
            desc.push_str("mutual fund that follows a specific investment strategy based on its mandate. ");
        }
    }

    let plan_lower = plan.to_lowercase();
    if plan_lower.contains("growth") {
        desc.push_str("The growth plan reinvests all earnings to compound returns over time. ");
    } else if plan_lower.contains("dividend") {
        desc.push_str("This plan may distribute periodic dividends to investors. ");
    }

    desc.push_str("Suitable for investors with appropriate risk tolerance and investment horizon.");
    desc
}

/// Returns the investment objectives for a category
pub fn objectives(category: FundCategory) -> Vec<&'static str> {
    match category {
        FundCategory::Equity => vec![
            "Long-term capital appreciation",
            "Wealth creation through equity investments",
            "Beat inflation over long term",
        ],
        FundCategory::Debt => vec![
            "Regular income generation",
            "Capital preservation",
            "Low to moderate risk",
        ],
        FundCategory::Hybrid => vec![
            "Balanced growth and income",
            "Moderate risk profile",
            "Diversification across asset classes",
        ],
        FundCategory::Other => vec![
            "Achieve investment objectives as per scheme mandate",
            "Professional fund management",
        ],
    }
}

/// Returns the typical sector allocation for a category
///
/// Equity and debt categories have representative allocations; other
/// categories have none.
pub fn sector_holdings(category: FundCategory) -> Vec<SectorWeight> {
    let rows: &[(&'static str, f64)] = match category {
        FundCategory::Equity => &[
            ("Financial Services", 25.5),
            ("Information Technology", 18.2),
            ("Consumer Goods", 15.8),
            ("Healthcare", 12.3),
            ("Energy", 10.1),
            ("Automobiles", 8.7),
            ("Others", 9.4),
        ],
        FundCategory::Debt => &[
            ("Government Securities", 45.2),
            ("Corporate Bonds", 28.7),
            ("Money Market Instruments", 15.3),
            ("Bank Deposits", 10.8),
        ],
        FundCategory::Hybrid | FundCategory::Other => &[],
    };

    rows.iter()
        .map(|&(sector, percentage)| SectorWeight { sector, percentage })
        .collect()
}

/// Builds the statistics table for a record
pub fn stats(record: &Record, category: FundCategory) -> Vec<Stat> {
    let mut stats = vec![
        Stat {
            label: "Minimum Investment",
            value: format!("₹{}", format_amount(record.get_or_empty("minimum_purchase_amount"))),
        },
        Stat {
            label: "Additional Investment",
            value: format!(
                "₹{}",
                format_amount(record.get_or_empty("minimum_additional_purchase_amount"))
            ),
        },
        Stat {
            label: "Current NAV",
            value: format!("₹{}", record.get_or_empty("last_price")),
        },
        Stat {
            label: "NAV Date",
            value: format_nav_date(record.get_or_empty("last_price_date")),
        },
    ];

    match category {
        FundCategory::Equity => {
            stats.push(Stat { label: "Risk Level", value: "High".to_string() });
            stats.push(Stat { label: "Investment Horizon", value: "5+ years".to_string() });
            stats.push(Stat { label: "Volatility", value: "High".to_string() });
        }
        FundCategory::Debt => {
            stats.push(Stat { label: "Risk Level", value: "Low to Moderate".to_string() });
            stats.push(Stat { label: "Investment Horizon", value: "1-3 years".to_string() });
            stats.push(Stat { label: "Volatility", value: "Low".to_string() });
        }
        FundCategory::Hybrid | FundCategory::Other => {}
    }

    stats
}

/// Returns the suitability recommendation for a category
pub fn recommendation(category: FundCategory) -> &'static str {
    match category {
        FundCategory::Equity => {
            "Suitable for investors seeking long-term wealth creation with high risk appetite. \
             Recommended investment horizon: 5+ years. Consider SIP for rupee cost averaging."
        }
        FundCategory::Debt => {
            "Suitable for conservative investors seeking steady income with capital protection. \
             Good for short to medium-term goals. Lower volatility compared to equity funds."
        }
        FundCategory::Hybrid => {
            "Ideal for moderate risk investors wanting balanced exposure to equity and debt. \
             Provides diversification and moderate growth potential with lower volatility than pure equity."
        }
        FundCategory::Other => {
            "Please consult with a financial advisor to understand if this fund aligns with \
             your investment goals and risk profile."
        }
    }
}

/// Formats a rupee amount in Indian short notation
///
/// `>= 100000` renders in lakhs with one decimal ("1.5L"), `>= 1000` in
/// thousands ("5K"), smaller amounts as whole rupees. Input that does not
/// parse as a number is returned unchanged.
pub fn format_amount(amount: &str) -> String {
    match amount.parse::<f64>() {
        Ok(amt) if amt >= 100_000.0 => format!("{:.1}L", amt / 100_000.0),
        Ok(amt) if amt >= 1_000.0 => format!("{:.0}K", amt / 1_000.0),
        Ok(amt) => format!("{:.0}", amt),
        Err(_) => amount.to_string(),
    }
}

/// Reformats an upstream `YYYY-MM-DD` date as `DD/MM/YYYY`
///
/// Anything that is not three dash-separated parts is returned unchanged.
pub fn format_nav_date(date: &str) -> String {
    let parts: Vec<&str> = date.split('-').collect();
    match parts.as_slice() {
        [year, month, day] => format!("{}/{}/{}", day, month, year),
        _ => date.to_string(),
    }
}
