use chrono::{DateTime, Local};
use uuid::Uuid;

use super::models::{
    directed_to_location, format_value_with_currency, proposal_code_at, PlanField, PlanLineItem,
    ProposalSubmission,
};
use super::SubmitError;
use crate::lookup::model::ClientRecord;

/// Outcome of a plan-removal attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovePlanOutcome {
    Removed,
    /// The plan list must never become empty; removing the only remaining
    /// row is rejected and reported, not treated as an error.
    LastPlan,
    NotFound,
}

/// Mutable editing state of one commercial proposal.
///
/// Field edits are accepted as typed; all validation is deferred to
/// [`ProposalForm::submit`].
#[derive(Debug, Clone)]
pub struct ProposalForm {
    valid_until: String,
    plans: Vec<PlanLineItem>,
    client: Option<ClientRecord>,
}

impl ProposalForm {
    /// A new form starts with no validity month and exactly one default plan.
    pub fn new() -> Self {
        ProposalForm {
            valid_until: String::new(),
            plans: vec![PlanLineItem::new()],
            client: None,
        }
    }

    pub fn valid_until(&self) -> &str {
        &self.valid_until
    }

    pub fn plans(&self) -> &[PlanLineItem] {
        &self.plans
    }

    pub fn client(&self) -> Option<&ClientRecord> {
        self.client.as_ref()
    }

    pub fn set_valid_until(&mut self, month: impl Into<String>) {
        self.valid_until = month.into();
    }

    /// Replace the client record wholesale after a successful lookup.
    pub fn set_client(&mut self, record: ClientRecord) {
        self.client = Some(record);
    }

    /// Append a new default plan row and return a copy of it.
    pub fn add_plan(&mut self) -> PlanLineItem {
        let plan = PlanLineItem::new();
        self.plans.push(plan.clone());
        plan
    }

    /// Remove the plan with the given id, unless it is the only one left.
    pub fn remove_plan(&mut self, id: &Uuid) -> RemovePlanOutcome {
        if !self.plans.iter().any(|plan| plan.id == *id) {
            return RemovePlanOutcome::NotFound;
        }
        if self.plans.len() == 1 {
            return RemovePlanOutcome::LastPlan;
        }
        self.plans.retain(|plan| plan.id != *id);
        RemovePlanOutcome::Removed
    }

    /// Replace one field of the plan with the given id. Returns `false`
    /// when no plan carries that id.
    pub fn update_field(&mut self, id: &Uuid, field: PlanField, value: impl Into<String>) -> bool {
        let Some(plan) = self.plans.iter_mut().find(|plan| plan.id == *id) else {
            return false;
        };
        let value = value.into();
        match field {
            PlanField::Duration => plan.duration = value,
            PlanField::Location => plan.location = value,
            PlanField::ContractTime => plan.contract_time = value,
            PlanField::Value => plan.value = value,
        }
        true
    }

    /// Validate the form and derive an immutable submission.
    pub fn submit(&self) -> Result<ProposalSubmission, SubmitError> {
        self.submit_at(Local::now())
    }

    /// Submission with an explicit timestamp for the proposal code.
    ///
    /// Either fully succeeds, or fails leaving the form untouched; no
    /// partial submission is ever produced.
    pub fn submit_at(&self, now: DateTime<Local>) -> Result<ProposalSubmission, SubmitError> {
        if self.valid_until.is_empty() {
            return Err(SubmitError::MissingValidity);
        }
        if self
            .plans
            .iter()
            .any(|plan| plan.location.is_empty() || plan.value.is_empty())
        {
            return Err(SubmitError::IncompletePlan);
        }

        let location = directed_to_location(
            self.plans
                .first()
                .map(|plan| plan.location.as_str())
                .unwrap_or_default(),
        )
        .to_string();

        let plans = self
            .plans
            .iter()
            .map(|plan| PlanLineItem {
                value: format_value_with_currency(&plan.value),
                ..plan.clone()
            })
            .collect();

        Ok(ProposalSubmission {
            valid_until: self.valid_until.clone(),
            plans,
            proposal_code: proposal_code_at(now),
            location,
            client: self.client.clone(),
        })
    }
}

impl Default for ProposalForm {
    fn default() -> Self {
        Self::new()
    }
}
