//! Overridable hour and rate fields.
//!
//! A candidate record stores default values for these fields and a period
//! input may override any of them. Both sides share the [`RateFields`]
//! struct so that every field is resolved the same way.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lenient;

/// Identifies one of the overridable hour or rate fields.
///
/// # Example
///
/// ```
/// use payroll_engine::models::RateField;
///
/// assert_eq!(RateField::ALL.len(), 11);
/// assert_eq!(RateField::OtHours.key(), "ot_hours");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateField {
    /// Regular hours worked.
    RegHours,
    /// Overtime hours worked.
    OtHours,
    /// Holiday hours worked.
    HolidayHours,
    /// Hourly W2 pay rate for regular hours.
    W2Rate,
    /// Stipend paid per regular hour.
    StipendRate,
    /// Hourly pay rate for overtime.
    OtRate,
    /// Hourly pay rate for holiday hours.
    HolidayRate,
    /// Flat sign-on bonus.
    SignBonus,
    /// Client bill rate for regular hours.
    ClientStandardBillRate,
    /// Client bill rate for overtime hours.
    ClientOtBillRate,
    /// Client bill rate for holiday hours.
    ClientHolidayBillRate,
}

impl RateField {
    /// Every overridable field, in column order.
    pub const ALL: [RateField; 11] = [
        RateField::RegHours,
        RateField::OtHours,
        RateField::HolidayHours,
        RateField::W2Rate,
        RateField::StipendRate,
        RateField::OtRate,
        RateField::HolidayRate,
        RateField::SignBonus,
        RateField::ClientStandardBillRate,
        RateField::ClientOtBillRate,
        RateField::ClientHolidayBillRate,
    ];

    /// Returns the JSON key for this field.
    pub fn key(self) -> &'static str {
        match self {
            RateField::RegHours => "reg_hours",
            RateField::OtHours => "ot_hours",
            RateField::HolidayHours => "holiday_hours",
            RateField::W2Rate => "w2_rate",
            RateField::StipendRate => "stipend_rate",
            RateField::OtRate => "ot_rate",
            RateField::HolidayRate => "holiday_rate",
            RateField::SignBonus => "sign_bonus",
            RateField::ClientStandardBillRate => "client_standard_bill_rate",
            RateField::ClientOtBillRate => "client_ot_bill_rate",
            RateField::ClientHolidayBillRate => "client_holiday_bill_rate",
        }
    }
}

/// Optional values for every overridable field.
///
/// `None` means "not entered". Deserialization never fails on a bad value:
/// blank text becomes `None` and unparseable text becomes zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateFields {
    /// Regular hours worked.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub reg_hours: Option<Decimal>,
    /// Overtime hours worked.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub ot_hours: Option<Decimal>,
    /// Holiday hours worked.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub holiday_hours: Option<Decimal>,
    /// Hourly W2 pay rate for regular hours.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub w2_rate: Option<Decimal>,
    /// Stipend paid per regular hour.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub stipend_rate: Option<Decimal>,
    /// Hourly pay rate for overtime.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub ot_rate: Option<Decimal>,
    /// Hourly pay rate for holiday hours.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub holiday_rate: Option<Decimal>,
    /// Flat sign-on bonus.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub sign_bonus: Option<Decimal>,
    /// Client bill rate for regular hours.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub client_standard_bill_rate: Option<Decimal>,
    /// Client bill rate for overtime hours.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub client_ot_bill_rate: Option<Decimal>,
    /// Client bill rate for holiday hours.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub client_holiday_bill_rate: Option<Decimal>,
}

impl RateFields {
    /// Returns the value of a field.
    pub fn get(&self, field: RateField) -> Option<Decimal> {
        *self.slot(field)
    }

    /// Sets the value of a field.
    pub fn set(&mut self, field: RateField, value: Option<Decimal>) {
        *self.slot_mut(field) = value;
    }

    /// Builder-style variant of [`RateFields::set`].
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{RateField, RateFields};
    /// use rust_decimal::Decimal;
    ///
    /// let fields = RateFields::default().with(RateField::RegHours, Decimal::from(40));
    /// assert_eq!(fields.reg_hours, Some(Decimal::from(40)));
    /// ```
    pub fn with(mut self, field: RateField, value: Decimal) -> Self {
        self.set(field, Some(value));
        self
    }

    fn slot(&self, field: RateField) -> &Option<Decimal> {
        match field {
            RateField::RegHours => &self.reg_hours,
            RateField::OtHours => &self.ot_hours,
            RateField::HolidayHours => &self.holiday_hours,
            RateField::W2Rate => &self.w2_rate,
            RateField::StipendRate => &self.stipend_rate,
            RateField::OtRate => &self.ot_rate,
            RateField::HolidayRate => &self.holiday_rate,
            RateField::SignBonus => &self.sign_bonus,
            RateField::ClientStandardBillRate => &self.client_standard_bill_rate,
            RateField::ClientOtBillRate => &self.client_ot_bill_rate,
            RateField::ClientHolidayBillRate => &self.client_holiday_bill_rate,
        }
    }

    fn slot_mut(&mut self, field: RateField) -> &mut Option<Decimal> {
        match field {
            RateField::RegHours => &mut self.reg_hours,
            RateField::OtHours => &mut self.ot_hours,
            RateField::HolidayHours => &mut self.holiday_hours,
            RateField::W2Rate => &mut self.w2_rate,
            RateField::StipendRate => &mut self.stipend_rate,
            RateField::OtRate => &mut self.ot_rate,
            RateField::HolidayRate => &mut self.holiday_rate,
            RateField::SignBonus => &mut self.sign_bonus,
            RateField::ClientStandardBillRate => &mut self.client_standard_bill_rate,
            RateField::ClientOtBillRate => &mut self.client_ot_bill_rate,
            RateField::ClientHolidayBillRate => &mut self.client_holiday_bill_rate,
        }
    }
}
