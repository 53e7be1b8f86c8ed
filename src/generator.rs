//! Synthetic case generation.
//!
//! Builds the fixed collection of underwriting cases served by the API. Every
//! field is sampled independently from a fixed range or vocabulary, except
//! `annual_income` which is derived from the sampled monthly income and
//! `documents_uploaded` which mirrors the number of generated documents.

use chrono::{DateTime, Duration, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::models::*;

/// Number of cases generated when nothing else is configured.
pub const DEFAULT_CASE_COUNT: usize = 15;

const ASSIGNEES: &[&str] = &["Rahul Sharma", "Priya Patel", "Amar Singh", "Diya Kapoor"];
const OCCUPATIONS: &[&str] = &[
    "Self-employed",
    "Salaried",
    "Business Owner",
    "Entrepreneur",
    "Freelancer",
];
const BUSINESS_TYPES: &[&str] = &[
    "Retail",
    "Services",
    "Manufacturing",
    "Technology",
    "Healthcare",
];
const BANKS: &[&str] = &[
    "HDFC Bank",
    "SBI",
    "ICICI Bank",
    "Axis Bank",
    "Kotak Mahindra",
];
const RISK_CATEGORIES: &[&str] = &["Low Risk", "Medium Risk", "High Risk"];
const DOCUMENT_TYPES: &[&str] = &["ID Proof", "Address Proof", "Income Proof", "Bank Statement"];

const SAMPLE_NOTES: &str = "These are sample notes for the case.";
const SAMPLE_COMMENTS: &str = "Sample comments about this case";

/// Formats the identifier of the `index`-th case (1-based).
pub fn case_id(index: usize) -> String {
    format!("CASE{:04}", index)
}

/// Random case source, optionally seeded for reproducible output.
pub struct CaseGenerator {
    rng: StdRng,
}

impl CaseGenerator {
    /// Creates a generator. With `Some(seed)` the produced cases are fully
    /// determined by the seed and the generation time.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Generates `count` cases with timestamps relative to the current time.
    pub fn generate(&mut self, count: usize) -> Vec<CustomerCase> {
        generate_cases(&mut self.rng, count, Utc::now())
    }
}

/// Generates `count` cases, identified `CASE0001` onwards, with timestamps
/// and report dates placed in the past relative to `now`.
pub fn generate_cases<R: Rng>(rng: &mut R, count: usize, now: DateTime<Utc>) -> Vec<CustomerCase> {
    let cases: Vec<CustomerCase> = (1..=count).map(|i| generate_case(rng, i, now)).collect();
    tracing::debug!("Generated {} synthetic cases", cases.len());
    cases
}

fn generate_case<R: Rng>(rng: &mut R, index: usize, now: DateTime<Utc>) -> CustomerCase {
    let customer_name = format!("Customer {}", index);
    let status = CaseStatus::ALL[rng.gen_range(0..CaseStatus::ALL.len())];
    let loan_amount = f64::from(rng.gen_range(100_000u32..=10_000_000));
    let timestamp = now - Duration::days(rng.gen_range(0..=30));

    let pd_details = PdDetails {
        probability_of_default: rng.gen_range(0.01..0.15),
        risk_score: rng.gen_range(60..=95),
        risk_category: pick(rng, RISK_CATEGORIES).to_string(),
    };

    let banking = BankingDetails {
        bank_name: pick(rng, BANKS).to_string(),
        account_number: format!("XXXX{}", rng.gen_range(1000..=9999)),
        average_balance: f64::from(rng.gen_range(50_000u32..=1_000_000)),
        transactions: Vec::new(),
    };

    let financials = FinancialDetails {
        monthly_income: f64::from(rng.gen_range(50_000u32..=500_000)),
        monthly_expenses: f64::from(rng.gen_range(20_000u32..=200_000)),
        profit_margin: rng.gen_range(0.1..0.4),
    };

    let basics = BasicsDetails {
        name: customer_name.clone(),
        age: rng.gen_range(25..=60),
        occupation: pick(rng, OCCUPATIONS).to_string(),
        business_type: pick(rng, BUSINESS_TYPES).to_string(),
        years_in_business: rng.gen_range(1..=20),
        establishment_year: rng.gen_range(1990..=2020),
        annual_income: financials.monthly_income * 12.0,
    };

    let bureau = BureauDetails {
        credit_score: rng.gen_range(600..=850),
        report_date: (now - Duration::days(rng.gen_range(1..=60))).date_naive(),
        outstanding_loans: rng.gen_range(0..=5),
        payment_history: Vec::new(),
    };

    let document_count = rng.gen_range(0..=3);
    let documents: Vec<Document> = (1..=document_count)
        .map(|j| Document {
            name: format!("Doc_{}.pdf", j),
            doc_type: pick(rng, DOCUMENT_TYPES).to_string(),
        })
        .collect();

    let additional = AdditionalDetails {
        notes: SAMPLE_NOTES.to_string(),
        documents_uploaded: documents.len(),
        completion_status: rng.gen_range(0.1..1.0),
        documents,
        comments: SAMPLE_COMMENTS.to_string(),
    };

    CustomerCase {
        id: case_id(index),
        customer_name,
        status,
        assigned_to: pick(rng, ASSIGNEES).to_string(),
        loan_amount,
        timestamp,
        details: CaseDetails {
            basics,
            banking,
            bureau,
            financials,
            pd_details,
            additional,
        },
    }
}

// Choice sets above are non-empty constants.
fn pick<'a, R: Rng>(rng: &mut R, choices: &[&'a str]) -> &'a str {
    choices[rng.gen_range(0..choices.len())]
}
