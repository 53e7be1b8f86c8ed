use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// ============ Case Models ============

/// Workflow state of an underwriting case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Assigned,
    Draft,
    Submitted,
}

impl CaseStatus {
    /// Every status, in the order the frontend lists them.
    pub const ALL: [CaseStatus; 3] = [CaseStatus::Assigned, CaseStatus::Draft, CaseStatus::Submitted];

    /// Wire representation, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Assigned => "assigned",
            CaseStatus::Draft => "draft",
            CaseStatus::Submitted => "submitted",
        }
    }
}

/// A synthetic loan-underwriting case.
///
/// This is the root record served by every case endpoint. Each case owns
/// exactly one [`CaseDetails`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCase {
    /// Sequential identifier of the form `CASE0001`.
    pub id: String,
    /// Applicant display name.
    pub customer_name: String,
    /// Current workflow status.
    pub status: CaseStatus,
    /// Underwriter the case is assigned to.
    pub assigned_to: String,
    /// Requested loan amount.
    pub loan_amount: f64,
    /// Case creation time.
    pub timestamp: DateTime<Utc>,
    /// Nested underwriting details.
    pub details: CaseDetails,
}

/// All detail sections attached to a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaseDetails {
    pub basics: BasicsDetails,
    pub banking: BankingDetails,
    pub bureau: BureauDetails,
    pub financials: FinancialDetails,
    pub pd_details: PdDetails,
    pub additional: AdditionalDetails,
}

/// Applicant profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BasicsDetails {
    pub name: String,
    pub age: u32,
    pub occupation: String,
    pub business_type: String,
    pub years_in_business: u32,
    pub establishment_year: i32,
    /// Always `monthly_income * 12` of the sibling financials section.
    pub annual_income: f64,
}

/// Primary bank account summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BankingDetails {
    pub bank_name: String,
    /// Masked account number, e.g. `XXXX4821`.
    pub account_number: String,
    pub average_balance: f64,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// A single bank transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

/// Credit bureau report summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BureauDetails {
    pub credit_score: u32,
    /// Report date, serialized as `YYYY-MM-DD`.
    pub report_date: NaiveDate,
    #[serde(default)]
    pub outstanding_loans: u32,
    #[serde(default)]
    pub payment_history: Vec<PaymentHistory>,
}

/// Repayment outcome recorded by the bureau.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    OnTime,
    Late,
    Missed,
}

/// A single bureau payment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentHistory {
    pub id: String,
    pub date: NaiveDate,
    pub status: PaymentStatus,
    pub amount: f64,
}

/// Monthly cash-flow figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinancialDetails {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    /// Fraction, e.g. `0.23`.
    pub profit_margin: f64,
}

/// Probability-of-default section.
///
/// Values are sampled, not computed from the rest of the case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PdDetails {
    /// Fraction between 0 and 1.
    pub probability_of_default: f64,
    pub risk_score: u32,
    pub risk_category: String,
}

/// Notes, uploaded documents and completion progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalDetails {
    pub notes: String,
    /// Equals `documents.len()` when the case is generated.
    pub documents_uploaded: usize,
    /// Fraction between 0 and 1.
    pub completion_status: f64,
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub comments: String,
}

/// An uploaded supporting document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Document {
    pub name: String,
    #[serde(rename = "type")]
    pub doc_type: String,
}

// ============ Request Models ============

/// Query string accepted by `GET /cases`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CaseListQuery {
    /// Only return cases whose status equals this value exactly.
    pub status: Option<String>,
}

// ============ Response Models ============

/// Describes one case endpoint in the debug snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RouteInfo {
    pub path: String,
    pub method: String,
    pub description: String,
}

/// Diagnostic view of the generated collection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DebugSnapshot {
    pub routes: Vec<RouteInfo>,
    pub cases_count: usize,
    pub case_ids: Vec<String>,
    pub sample_case: Option<CustomerCase>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&CaseStatus::Submitted).unwrap();
        assert_eq!(json, "\"submitted\"");
        for status in CaseStatus::ALL {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(json, status.as_str());
        }
    }

    #[test]
    fn document_type_field_is_renamed() {
        let doc = Document {
            name: "Doc_1.pdf".to_string(),
            doc_type: "ID Proof".to_string(),
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["type"], "ID Proof");
        assert!(json.get("doc_type").is_none());
    }

    #[test]
    fn payment_status_uses_snake_case() {
        let json = serde_json::to_value(PaymentStatus::OnTime).unwrap();
        assert_eq!(json, "on_time");
    }

    #[test]
    fn bureau_defaults_missing_lists() {
        let bureau: BureauDetails = serde_json::from_value(serde_json::json!({
            "creditScore": 720,
            "reportDate": "2024-03-01"
        }))
        .unwrap();
        assert_eq!(bureau.outstanding_loans, 0);
        assert!(bureau.payment_history.is_empty());
        assert_eq!(bureau.report_date.to_string(), "2024-03-01");
    }
}
