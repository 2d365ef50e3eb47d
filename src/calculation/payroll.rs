//! Payroll line calculation.
//!
//! This module derives pay, bonus, client billing and net profit figures for
//! one candidate from their stored base record and one period's overrides.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{CandidateBase, MissedPaymentType, PayrollLine, PeriodInput, RateField};

/// Vendor-management-system fee deducted from overtime and holiday billing.
pub const VMS_CHARGE_RATE: Decimal = Decimal::from_parts(6, 0, 0, false, 2);

/// Discount applied to standard-hour client billing.
///
/// Equal to [`VMS_CHARGE_RATE`] today but tracked separately.
pub const CLIENT_STANDARD_DISCOUNT: Decimal = Decimal::from_parts(6, 0, 0, false, 2);

/// Rounds a monetary amount to cents, half away from zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("1.005").unwrap()), Decimal::from_str("1.01").unwrap());
/// assert_eq!(round_money(Decimal::from_str("-2.345").unwrap()), Decimal::from_str("-2.35").unwrap());
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Resolves one overridable field: the period value if entered, else the
/// candidate's default, else zero.
pub fn resolve_field(base: &CandidateBase, input: &PeriodInput, field: RateField) -> Decimal {
    input
        .overrides
        .get(field)
        .or_else(|| base.rates.get(field))
        .unwrap_or(Decimal::ZERO)
}

/// Computes a complete payroll line.
///
/// This function never fails: missing or malformed numbers have already
/// been coerced to `None` or zero by the model layer, and every remaining
/// gap resolves to zero here. Arithmetic saturates at [`Decimal::MAX`] and
/// [`Decimal::MIN`] instead of overflowing.
///
/// # Arguments
///
/// * `base` - The candidate's stored record with default hours and rates
/// * `input` - This period's overrides and period-only values
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute;
/// use payroll_engine::models::{CandidateBase, PeriodInput, RateField};
/// use rust_decimal::Decimal;
///
/// let mut base = CandidateBase::new("c-001", "Jane Doe");
/// base.rates = base.rates.with(RateField::W2Rate, Decimal::from(20));
///
/// let mut input = PeriodInput::default();
/// input.overrides = input.overrides.with(RateField::RegHours, Decimal::from(40));
///
/// let line = compute(&base, &input);
/// assert_eq!(line.standard_w2_amount, Decimal::from(800));
/// assert!(line.net_profit.is_none());
/// ```
pub fn compute(base: &CandidateBase, input: &PeriodInput) -> PayrollLine {
    let resolve = |field| resolve_field(base, input, field);

    let reg = resolve(RateField::RegHours);
    let ot = resolve(RateField::OtHours);
    let hol = resolve(RateField::HolidayHours);

    let w2 = resolve(RateField::W2Rate);
    let stipend = resolve(RateField::StipendRate);
    let ot_rate = resolve(RateField::OtRate);
    let holiday_rate = resolve(RateField::HolidayRate);
    let sign_bonus = resolve(RateField::SignBonus);

    let mut standard_w2_amount = reg.saturating_mul(w2);
    let mut ot_amount = ot.saturating_mul(ot_rate);
    let mut holiday_amount = hol.saturating_mul(holiday_rate);
    let mut standard_stipend_amount = reg.saturating_mul(stipend);

    let missed_amount = input.missed_payment_amount.unwrap_or(Decimal::ZERO);
    if missed_amount > Decimal::ZERO {
        let bucket = match input.missed_payment_kind() {
            Some(MissedPaymentType::Regular) => Some(&mut standard_w2_amount),
            Some(MissedPaymentType::Ot) => Some(&mut ot_amount),
            Some(MissedPaymentType::Holiday) => Some(&mut holiday_amount),
            Some(MissedPaymentType::Stipend) => Some(&mut standard_stipend_amount),
            None => None,
        };
        if let Some(amount) = bucket {
            *amount = amount.saturating_add(missed_amount);
        }
    }

    // W2 rate times overtime hours, not an overtime rate. Reports consume it as-is.
    let guaranteed = w2.saturating_mul(ot);
    let overall_bonus = sign_bonus
        .saturating_add(ot_amount)
        .saturating_add(holiday_amount);
    let total_pay = standard_w2_amount.saturating_add(overall_bonus);
    let total_payable = standard_w2_amount
        .saturating_add(standard_stipend_amount)
        .saturating_add(overall_bonus);

    let client_standard_bill_rate = resolve(RateField::ClientStandardBillRate);
    let client_ot_bill_rate = resolve(RateField::ClientOtBillRate);
    let client_holiday_bill_rate = resolve(RateField::ClientHolidayBillRate);

    let client_standard_amount = reg
        .saturating_mul(client_standard_bill_rate)
        .saturating_mul(Decimal::ONE - CLIENT_STANDARD_DISCOUNT);
    let client_ot_amount =
        ot.saturating_mul(client_ot_bill_rate.saturating_mul(Decimal::ONE - VMS_CHARGE_RATE));
    let client_holiday_amount =
        hol.saturating_mul(client_holiday_bill_rate.saturating_mul(Decimal::ONE - VMS_CHARGE_RATE));
    let client_ot_holiday_amount = client_ot_amount.saturating_add(client_holiday_amount);
    let total_received = client_standard_amount.saturating_add(client_ot_holiday_amount);

    let total_candidate_expense = input.total_candidate_expense;
    let net_profit = total_candidate_expense
        .map(|expense| round_money(total_received.saturating_sub(expense)));

    PayrollLine {
        candidate_uuid: base.candidate_uuid.clone(),
        candidate_name: base.candidate_name.clone(),

        reg_hours: reg,
        ot_hours: ot,
        holiday_hours: hol,
        total_hours: reg.saturating_add(ot).saturating_add(hol),

        w2_rate: w2,
        stipend_rate: stipend,
        ot_rate,
        holiday_rate,

        guaranteed: round_money(guaranteed),

        standard_w2_amount: round_money(standard_w2_amount),
        ot_amount: round_money(ot_amount),
        holiday_amount: round_money(holiday_amount),

        sign_bonus: round_money(sign_bonus),
        overall_bonus: round_money(overall_bonus),
        total_pay: round_money(total_pay),

        standard_stipend_amount: round_money(standard_stipend_amount),
        total_payable: round_money(total_payable),

        total_candidate_expense: total_candidate_expense.map(round_money),

        client_standard_bill_rate,
        vms_charges: round_money(VMS_CHARGE_RATE),
        client_standard_amount: round_money(client_standard_amount),

        client_ot_bill_rate,
        client_holiday_bill_rate,
        client_ot_holiday_amount: round_money(client_ot_holiday_amount),

        total_amount_received_from_client: round_money(total_received),
        net_profit,

        missed_payment_amount: input.missed_payment_amount.filter(|amount| !amount.is_zero()),
        missed_payment_type: input.missed_payment_type.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn scenario_base() -> CandidateBase {
        let mut base = CandidateBase::new("c-001", "Jane Doe");
        base.rates = base
            .rates
            .with(RateField::W2Rate, dec("20"))
            .with(RateField::StipendRate, dec("5"))
            .with(RateField::OtRate, dec("30"))
            .with(RateField::HolidayRate, dec("25"))
            .with(RateField::ClientStandardBillRate, dec("50"))
            .with(RateField::ClientOtBillRate, dec("60"))
            .with(RateField::ClientHolidayBillRate, dec("55"))
            .with(RateField::SignBonus, dec("0"));
        base
    }

    fn scenario_input() -> PeriodInput {
        let mut input = PeriodInput::default();
        input.overrides = input
            .overrides
            .with(RateField::RegHours, dec("40"))
            .with(RateField::OtHours, dec("5"))
            .with(RateField::HolidayHours, dec("0"));
        input
    }

    fn with_missed(amount: &str, kind: &str) -> PeriodInput {
        let mut input = scenario_input();
        input.missed_payment_amount = Some(dec(amount));
        input.missed_payment_type = Some(kind.to_string());
        input
    }

    #[test]
    fn test_weekly_scenario_without_expense() {
        let line = compute(&scenario_base(), &scenario_input());

        assert_eq!(line.standard_w2_amount, dec("800"));
        assert_eq!(line.ot_amount, dec("150"));
        assert_eq!(line.holiday_amount, dec("0"));
        assert_eq!(line.overall_bonus, dec("150"));
        assert_eq!(line.total_pay, dec("950"));
        assert_eq!(line.standard_stipend_amount, dec("200"));
        assert_eq!(line.total_payable, dec("1150"));
        assert_eq!(line.client_standard_amount, dec("1880"));
        assert_eq!(line.client_ot_holiday_amount, dec("282"));
        assert_eq!(line.total_amount_received_from_client, dec("2162"));
        assert_eq!(line.total_candidate_expense, None);
        assert_eq!(line.net_profit, None);
    }

    #[test]
    fn test_weekly_scenario_with_expense() {
        let mut input = scenario_input();
        input.total_candidate_expense = Some(dec("1500"));

        let line = compute(&scenario_base(), &input);

        assert_eq!(line.total_candidate_expense, Some(dec("1500")));
        assert_eq!(line.net_profit, Some(dec("662")));
    }

    #[test]
    fn test_zero_expense_still_yields_profit() {
        let mut input = scenario_input();
        input.total_candidate_expense = Some(Decimal::ZERO);

        let line = compute(&scenario_base(), &input);

        assert_eq!(line.total_candidate_expense, Some(Decimal::ZERO));
        assert_eq!(line.net_profit, Some(dec("2162")));
    }

    #[test]
    fn test_expense_larger_than_receipts_gives_negative_profit() {
        let mut input = scenario_input();
        input.total_candidate_expense = Some(dec("2500.10"));

        let line = compute(&scenario_base(), &input);

        assert_eq!(line.net_profit, Some(dec("-338.10")));
    }

    #[test]
    fn test_identity_and_derived_hours() {
        let line = compute(&scenario_base(), &scenario_input());

        assert_eq!(line.candidate_uuid, "c-001");
        assert_eq!(line.candidate_name, "Jane Doe");
        assert_eq!(line.total_hours, dec("45"));
        assert_eq!(line.vms_charges, dec("0.06"));
    }

    #[test]
    fn test_guaranteed_multiplies_w2_rate_by_ot_hours() {
        // Named like a guaranteed-hours figure but defined as w2_rate * ot_hours.
        let line = compute(&scenario_base(), &scenario_input());
        assert_eq!(line.guaranteed, dec("100"));
    }

    #[test]
    fn test_missed_payment_regular() {
        let line = compute(&scenario_base(), &with_missed("75", "regular"));

        assert_eq!(line.standard_w2_amount, dec("875"));
        assert_eq!(line.ot_amount, dec("150"));
        assert_eq!(line.holiday_amount, dec("0"));
        assert_eq!(line.standard_stipend_amount, dec("200"));
        assert_eq!(line.overall_bonus, dec("150"));
        assert_eq!(line.total_pay, dec("1025"));
        assert_eq!(line.total_payable, dec("1225"));
    }

    #[test]
    fn test_missed_payment_ot_is_exclusive() {
        let line = compute(&scenario_base(), &with_missed("50", "ot"));

        assert_eq!(line.ot_amount, dec("200"));
        assert_eq!(line.overall_bonus, dec("200"));
        assert_eq!(line.total_pay, dec("1000"));
        assert_eq!(line.standard_w2_amount, dec("800"));
        assert_eq!(line.holiday_amount, dec("0"));
        assert_eq!(line.standard_stipend_amount, dec("200"));
        assert_eq!(line.missed_payment_amount, Some(dec("50")));
        assert_eq!(line.missed_payment_type.as_deref(), Some("ot"));
    }

    #[test]
    fn test_missed_payment_holiday() {
        let line = compute(&scenario_base(), &with_missed("40", "holiday"));

        assert_eq!(line.holiday_amount, dec("40"));
        assert_eq!(line.overall_bonus, dec("190"));
        assert_eq!(line.ot_amount, dec("150"));
    }

    #[test]
    fn test_missed_payment_stipend_only_moves_payable() {
        let line = compute(&scenario_base(), &with_missed("30", "stipend"));

        assert_eq!(line.standard_stipend_amount, dec("230"));
        assert_eq!(line.total_pay, dec("950"));
        assert_eq!(line.total_payable, dec("1180"));
    }

    #[test]
    fn test_missed_payment_with_unknown_type_is_ignored() {
        let baseline = compute(&scenario_base(), &scenario_input());
        let line = compute(&scenario_base(), &with_missed("30", "bonus"));

        assert_eq!(line.total_payable, baseline.total_payable);
        assert_eq!(line.missed_payment_amount, Some(dec("30")));
        assert_eq!(line.missed_payment_type.as_deref(), Some("bonus"));
    }

    #[test]
    fn test_missed_payment_without_type_is_ignored() {
        let mut input = scenario_input();
        input.missed_payment_amount = Some(dec("30"));

        let line = compute(&scenario_base(), &input);

        assert_eq!(line.total_payable, dec("1150"));
        assert_eq!(line.missed_payment_type, None);
    }

    #[test]
    fn test_zero_missed_payment_is_reported_as_null() {
        let line = compute(&scenario_base(), &with_missed("0", "ot"));

        assert_eq!(line.ot_amount, dec("150"));
        assert_eq!(line.missed_payment_amount, None);
        assert_eq!(line.missed_payment_type.as_deref(), Some("ot"));
    }

    #[test]
    fn test_negative_missed_payment_is_echoed_but_not_applied() {
        let line = compute(&scenario_base(), &with_missed("-20", "regular"));

        assert_eq!(line.standard_w2_amount, dec("800"));
        assert_eq!(line.missed_payment_amount, Some(dec("-20")));
    }

    #[test]
    fn test_empty_inputs_produce_zero_line() {
        let line = compute(&CandidateBase::new("c-000", ""), &PeriodInput::default());

        assert_eq!(line.total_hours, Decimal::ZERO);
        assert_eq!(line.total_payable, Decimal::ZERO);
        assert_eq!(line.total_amount_received_from_client, Decimal::ZERO);
        assert_eq!(line.net_profit, None);
    }

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        let mut base = scenario_base();
        base.rates.w2_rate = Some(dec("10.005"));
        let mut input = PeriodInput::default();
        input.overrides.reg_hours = Some(dec("1"));

        let line = compute(&base, &input);

        assert_eq!(line.standard_w2_amount, dec("10.01"));
        // Rates pass through unrounded.
        assert_eq!(line.w2_rate, dec("10.005"));
    }

    #[test]
    fn test_tenths_do_not_drift() {
        let mut base = CandidateBase::new("c-001", "Jane Doe");
        base.rates.w2_rate = Some(dec("0.1"));
        base.rates.sign_bonus = Some(dec("0.2"));
        base.rates.ot_rate = Some(dec("0.1"));
        let mut input = PeriodInput::default();
        input.overrides.reg_hours = Some(dec("3"));
        input.overrides.ot_hours = Some(dec("1"));

        let line = compute(&base, &input);

        assert_eq!(line.standard_w2_amount, dec("0.30"));
        assert_eq!(line.overall_bonus, dec("0.30"));
        assert_eq!(line.total_pay, dec("0.60"));
    }

    #[test]
    fn test_client_billing_applies_discount_per_hour_type() {
        let mut input = scenario_input();
        input.overrides.holiday_hours = Some(dec("8"));

        let line = compute(&scenario_base(), &input);

        // 5 * 60 * 0.94 + 8 * 55 * 0.94 = 282 + 413.6
        assert_eq!(line.client_ot_holiday_amount, dec("695.60"));
        assert_eq!(line.total_amount_received_from_client, dec("2575.60"));
    }

    #[test]
    fn test_net_profit_uses_unrounded_receipts() {
        let mut base = scenario_base();
        base.rates.client_standard_bill_rate = Some(dec("10.0053"));
        let mut input = PeriodInput::default();
        input.overrides.reg_hours = Some(dec("1"));
        input.total_candidate_expense = Some(dec("0.0051"));

        let line = compute(&base, &input);

        // 10.0053 * 0.94 = 9.404982; 9.404982 - 0.0051 = 9.399882
        assert_eq!(line.total_amount_received_from_client, dec("9.40"));
        assert_eq!(line.net_profit, Some(dec("9.40")));
        assert_eq!(line.total_candidate_expense, Some(dec("0.01")));
    }

    #[test]
    fn test_huge_inputs_saturate_instead_of_panicking() {
        let mut input = PeriodInput::default();
        input.overrides.reg_hours = Some(dec("100000000000000000000"));
        input.overrides.w2_rate = Some(dec("100000000000000000000"));
        input.overrides.client_standard_bill_rate = Some(dec("100000000000000000000"));
        input.total_candidate_expense = Some(Decimal::MIN);

        let line = compute(&CandidateBase::new("c", "n"), &input);

        assert_eq!(line.standard_w2_amount, Decimal::MAX);
        assert_eq!(line.total_pay, Decimal::MAX);
        assert_eq!(line.total_payable, Decimal::MAX);
        // Saturated receipts still carry the client discount.
        assert!(line.total_amount_received_from_client > dec("70000000000000000000000000000"));
        assert_eq!(line.net_profit, Some(Decimal::MAX));
    }

    #[test]
    fn test_huge_negative_inputs_saturate_at_min() {
        let mut input = PeriodInput::default();
        input.overrides.ot_hours = Some(dec("-100000000000000000000"));
        input.overrides.ot_rate = Some(dec("100000000000000000000"));
        input.overrides.sign_bonus = Some(Decimal::MIN);

        let line = compute(&CandidateBase::new("c", "n"), &input);

        assert_eq!(line.ot_amount, Decimal::MIN);
        assert_eq!(line.overall_bonus, Decimal::MIN);
    }

    #[test]
    fn test_constants_are_equal_but_distinct() {
        assert_eq!(VMS_CHARGE_RATE, dec("0.06"));
        assert_eq!(CLIENT_STANDARD_DISCOUNT, dec("0.06"));
    }

    fn decimal_strategy() -> impl Strategy<Value = Decimal> {
        (0i64..1_000_000, 0u32..4).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
    }

    fn field_strategy() -> impl Strategy<Value = RateField> {
        (0..RateField::ALL.len()).prop_map(|i| RateField::ALL[i])
    }

    proptest! {
        #[test]
        fn prop_override_wins_over_base(field in field_strategy(), base_value in decimal_strategy(), override_value in decimal_strategy()) {
            let mut base = CandidateBase::new("c", "n");
            base.rates.set(field, Some(base_value));
            let mut input = PeriodInput::default();
            input.overrides.set(field, Some(override_value));

            prop_assert_eq!(resolve_field(&base, &input, field), override_value);
        }

        #[test]
        fn prop_base_used_when_override_absent(field in field_strategy(), base_value in decimal_strategy()) {
            let mut base = CandidateBase::new("c", "n");
            base.rates.set(field, Some(base_value));

            prop_assert_eq!(resolve_field(&base, &PeriodInput::default(), field), base_value);
        }

        #[test]
        fn prop_zero_when_both_absent(field in field_strategy()) {
            let base = CandidateBase::new("c", "n");
            prop_assert_eq!(resolve_field(&base, &PeriodInput::default(), field), Decimal::ZERO);
        }

        #[test]
        fn prop_compute_is_deterministic(reg in decimal_strategy(), w2 in decimal_strategy(), expense in proptest::option::of(decimal_strategy())) {
            let mut base = scenario_base();
            base.rates.w2_rate = Some(w2);
            let mut input = scenario_input();
            input.overrides.reg_hours = Some(reg);
            input.total_candidate_expense = expense;

            let first = compute(&base, &input);
            let second = compute(&base, &input);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_monetary_fields_have_at_most_two_places(reg in decimal_strategy(), w2 in decimal_strategy(), bill in decimal_strategy()) {
            let mut base = scenario_base();
            base.rates.w2_rate = Some(w2);
            base.rates.client_standard_bill_rate = Some(bill);
            let mut input = PeriodInput::default();
            input.overrides.reg_hours = Some(reg);

            let line = compute(&base, &input);
            for amount in [
                line.standard_w2_amount,
                line.standard_stipend_amount,
                line.total_pay,
                line.total_payable,
                line.client_standard_amount,
                line.total_amount_received_from_client,
            ] {
                prop_assert!(amount.scale() <= 2, "{} has more than two places", amount);
            }
        }
    }
}
