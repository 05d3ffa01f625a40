use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::lookup::model::ClientRecord;

/// Months offered by the validity selector.
pub const MONTHS: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Spot durations offered by the plan editor.
pub const DURATIONS: [&str; 4] = ["10 SEG", "15 SEG", "20 SEG", "30 SEG"];

/// Canonical site names of the LED panels.
pub const LOCATIONS: [&str; 3] = [
    "ITAMARAJÚ/BA - PRAÇA CASTELO BRANCO",
    "EUNÁPOLIS/BA - BR101",
    "EUNÁPOLIS/BA - BR367",
];

/// Contract terms offered by the plan editor.
pub const CONTRACT_TIMES: [&str; 3] = ["30 dias", "6 meses", "12 meses"];

const DEFAULT_DURATION: &str = "10 SEG";
const DEFAULT_CONTRACT_TIME: &str = "30 dias";
const DEFAULT_DIRECTED_TO: &str = "Itamarajú - BA";

/// One row of the proposal's pricing table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanLineItem {
    pub id: Uuid,
    #[schema(example = "15 SEG")]
    pub duration: String,
    #[schema(example = "EUNÁPOLIS/BA - BR101")]
    pub location: String,
    #[schema(example = "12 meses")]
    pub contract_time: String,
    #[schema(example = "R$ 1.200,00")]
    pub value: String,
}

impl PlanLineItem {
    /// A fresh row with the editor defaults and a new id.
    pub fn new() -> Self {
        PlanLineItem {
            id: Uuid::new_v4(),
            duration: DEFAULT_DURATION.to_string(),
            location: String::new(),
            contract_time: DEFAULT_CONTRACT_TIME.to_string(),
            value: String::new(),
        }
    }
}

impl Default for PlanLineItem {
    fn default() -> Self {
        Self::new()
    }
}

/// Editable fields of a plan line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum PlanField {
    Duration,
    Location,
    ContractTime,
    Value,
}

/// Finalized, immutable input to the catalog renderer. Each successful
/// submission produces a fresh value; it is never mutated afterwards.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProposalSubmission {
    pub valid_until: String,
    pub plans: Vec<PlanLineItem>,
    pub proposal_code: String,
    pub location: String,
    pub client: Option<ClientRecord>,
}

/// Compose the proposal code from the submission timestamp:
/// `FCV` + YYMMDDhhmmss on the local wall clock.
pub fn proposal_code_at(now: DateTime<Local>) -> String {
    now.format("FCV%y%m%d%H%M%S").to_string()
}

/// Short display form of a site name for the proposal's "directed to" line.
///
/// Unknown site names fall back to the default display location rather
/// than failing.
pub fn directed_to_location(site: &str) -> &'static str {
    match site {
        "ITAMARAJÚ/BA - PRAÇA CASTELO BRANCO" => "Itamarajú - BA",
        "EUNÁPOLIS/BA - BR101" | "EUNÁPOLIS/BA - BR367" => "Eunápolis - BA",
        _ => DEFAULT_DIRECTED_TO,
    }
}

/// Prefix a plan value with the currency marker unless it already carries
/// one. This is a plain prefix check, not a numeric parse.
pub fn format_value_with_currency(value: &str) -> String {
    if value.trim().starts_with("R$") {
        value.to_string()
    } else {
        format!("R$ {}", value)
    }
}
