use chrono::{Local, TimeZone};

use super::form::{ProposalForm, RemovePlanOutcome};
use super::models::{
    directed_to_location, format_value_with_currency, proposal_code_at, PlanField, MONTHS,
};
use super::SubmitError;

fn filled_form() -> ProposalForm {
    let mut form = ProposalForm::new();
    form.set_valid_until("Julho");
    let id = form.plans()[0].id;
    form.update_field(&id, PlanField::Duration, "15 SEG");
    form.update_field(&id, PlanField::Location, "EUNÁPOLIS/BA - BR101");
    form.update_field(&id, PlanField::ContractTime, "12 meses");
    form.update_field(&id, PlanField::Value, "1200");
    form
}

#[test]
fn new_form_has_exactly_one_default_plan() {
    let form = ProposalForm::new();
    assert_eq!(form.plans().len(), 1);

    let plan = &form.plans()[0];
    assert_eq!(plan.duration, "10 SEG");
    assert_eq!(plan.contract_time, "30 dias");
    assert_eq!(plan.location, "");
    assert_eq!(plan.value, "");
    assert_eq!(form.valid_until(), "");
    assert!(form.client().is_none());
}

#[test]
fn added_plans_get_fresh_ids_and_keep_insertion_order() {
    let mut form = ProposalForm::new();
    let first = form.plans()[0].id;
    let second = form.add_plan().id;
    let third = form.add_plan().id;

    let ids: Vec<_> = form.plans().iter().map(|plan| plan.id).collect();
    assert_eq!(ids, vec![first, second, third]);
    assert_ne!(first, second);
    assert_ne!(second, third);
}

#[test]
fn removing_the_last_plan_is_always_rejected() {
    let mut form = ProposalForm::new();
    let only = form.plans()[0].id;

    assert_eq!(form.remove_plan(&only), RemovePlanOutcome::LastPlan);
    assert_eq!(form.plans().len(), 1);

    // Grow and shrink back down to one: the floor holds at every step.
    let extra = form.add_plan().id;
    assert_eq!(form.remove_plan(&extra), RemovePlanOutcome::Removed);
    assert_eq!(form.plans().len(), 1);
    assert_eq!(form.remove_plan(&only), RemovePlanOutcome::LastPlan);
    assert_eq!(form.plans().len(), 1);
}

#[test]
fn removing_an_unknown_id_reports_not_found() {
    let mut form = ProposalForm::new();
    form.add_plan();
    let unknown = uuid::Uuid::new_v4();
    assert_eq!(form.remove_plan(&unknown), RemovePlanOutcome::NotFound);
    assert_eq!(form.plans().len(), 2);
}

#[test]
fn update_field_replaces_each_named_field() {
    let mut form = ProposalForm::new();
    let id = form.plans()[0].id;

    assert!(form.update_field(&id, PlanField::Duration, "30 SEG"));
    assert!(form.update_field(&id, PlanField::Location, "EUNÁPOLIS/BA - BR367"));
    assert!(form.update_field(&id, PlanField::ContractTime, "6 meses"));
    assert!(form.update_field(&id, PlanField::Value, "R$ 900,00"));

    let plan = &form.plans()[0];
    assert_eq!(plan.duration, "30 SEG");
    assert_eq!(plan.location, "EUNÁPOLIS/BA - BR367");
    assert_eq!(plan.contract_time, "6 meses");
    assert_eq!(plan.value, "R$ 900,00");

    assert!(!form.update_field(&uuid::Uuid::new_v4(), PlanField::Value, "1"));
}

#[test]
fn submit_without_validity_month_fails_and_leaves_the_form_intact() {
    let mut form = filled_form();
    form.set_valid_until("");

    assert_eq!(form.submit().unwrap_err(), SubmitError::MissingValidity);
    assert_eq!(form.plans().len(), 1);
    assert_eq!(form.plans()[0].value, "1200");
}

#[test]
fn submit_with_an_incomplete_plan_fails() {
    let mut form = filled_form();
    let id = form.plans()[0].id;

    form.update_field(&id, PlanField::Location, "");
    assert_eq!(form.submit().unwrap_err(), SubmitError::IncompletePlan);

    form.update_field(&id, PlanField::Location, "EUNÁPOLIS/BA - BR101");
    form.update_field(&id, PlanField::Value, "");
    assert_eq!(form.submit().unwrap_err(), SubmitError::IncompletePlan);
}

#[test]
fn submit_derives_code_location_and_normalized_values() {
    let form = filled_form();
    let when = Local.with_ymd_and_hms(2026, 7, 15, 9, 30, 5).unwrap();
    let submission = form.submit_at(when).unwrap();

    assert_eq!(submission.proposal_code, "FCV260715093005");
    assert_eq!(submission.location, "Eunápolis - BA");
    assert_eq!(submission.valid_until, "Julho");
    assert_eq!(submission.plans.len(), 1);
    assert_eq!(submission.plans[0].value, "R$ 1200");
    // Ids carry over from the form into the submission.
    assert_eq!(submission.plans[0].id, form.plans()[0].id);
    // The form itself keeps the raw value.
    assert_eq!(form.plans()[0].value, "1200");
}

#[test]
fn each_submission_is_a_fresh_value() {
    let form = filled_form();
    let when = Local.with_ymd_and_hms(2026, 7, 15, 9, 30, 5).unwrap();

    let first = form.submit_at(when).unwrap();
    let second = form.submit_at(when).unwrap();
    assert_eq!(first, second);

    let later = Local.with_ymd_and_hms(2026, 7, 15, 9, 30, 6).unwrap();
    let third = form.submit_at(later).unwrap();
    assert_eq!(third.proposal_code, "FCV260715093006");
}

#[test]
fn proposal_code_matches_the_expected_pattern() {
    let when = Local.with_ymd_and_hms(2031, 12, 1, 23, 59, 59).unwrap();
    let code = proposal_code_at(when);
    assert_eq!(code, "FCV311201235959");
    assert!(code.starts_with("FCV"));
    assert_eq!(code.len(), 15);
    assert!(code[3..].chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn directed_to_uses_the_fixed_site_table() {
    assert_eq!(
        directed_to_location("ITAMARAJÚ/BA - PRAÇA CASTELO BRANCO"),
        "Itamarajú - BA"
    );
    assert_eq!(directed_to_location("EUNÁPOLIS/BA - BR101"), "Eunápolis - BA");
    assert_eq!(directed_to_location("EUNÁPOLIS/BA - BR367"), "Eunápolis - BA");
    // Unrecognized sites fall back to the default display location.
    assert_eq!(directed_to_location("SALVADOR/BA - ORLA"), "Itamarajú - BA");
    assert_eq!(directed_to_location(""), "Itamarajú - BA");
}

#[test]
fn currency_prefix_is_added_only_when_missing() {
    assert_eq!(format_value_with_currency("1200"), "R$ 1200");
    assert_eq!(format_value_with_currency("R$ 1.650,00"), "R$ 1.650,00");
    assert_eq!(format_value_with_currency("R$1.200,00"), "R$1.200,00");
    // Leading whitespace does not defeat the prefix check.
    assert_eq!(format_value_with_currency("  R$ 900"), "  R$ 900");
    assert_eq!(
        format_value_with_currency("1.200,00 /por mês"),
        "R$ 1.200,00 /por mês"
    );
}

#[test]
fn month_list_matches_the_validity_selector() {
    assert_eq!(MONTHS.len(), 12);
    assert_eq!(MONTHS[0], "Janeiro");
    assert_eq!(MONTHS[11], "Dezembro");
}
