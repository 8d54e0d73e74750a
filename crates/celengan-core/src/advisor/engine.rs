//! Goal contribution engine
//!
//! Given a goal's amounts and deadline plus the user's average monthly cash
//! flow, decides whether the goal can be reached on time and how much to set
//! aside per day, week or month. The checks run as ordered guard clauses:
//!
//! 1. goal already met
//! 2. no deadline
//! 3. deadline passed or under a day away
//! 4. negative or zero discretionary income
//! 5. required amount vs. savings capacity (discretionary income minus a
//!    20% safety buffer)
//!
//! Results depend on "now" and must be recomputed rather than cached.

use chrono::{DateTime, Datelike, Local, Months, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rounding::round_to_sensible_amount;
use crate::error::{Error, Result};

/// Share of discretionary income held back for unplanned costs
pub const SAFETY_BUFFER: f64 = 0.20;

/// Average number of days in a month
pub const DAYS_PER_MONTH: f64 = 30.44;

/// Average number of weeks in a month
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Upper bound on the projected months to completion (100 years)
pub const MAX_MONTHS_NEEDED: u32 = 1200;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Time unit a contribution is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Daily,
    #[default]
    Weekly,
    Monthly,
}

impl Cadence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Plural unit shown in messages ("per weeks" reads as "per week(s)")
    pub fn unit_label(&self) -> &'static str {
        match self {
            Self::Daily => "days",
            Self::Weekly => "weeks",
            Self::Monthly => "months",
        }
    }

    /// How many of this unit fit in an average month
    pub fn per_month(&self) -> f64 {
        match self {
            Self::Daily => DAYS_PER_MONTH,
            Self::Weekly => WEEKS_PER_MONTH,
            Self::Monthly => 1.0,
        }
    }
}

impl std::str::FromStr for Cadence {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" | "day" => Ok(Self::Daily),
            "weekly" | "week" => Ok(Self::Weekly),
            "monthly" | "month" => Ok(Self::Monthly),
            _ => Err(format!(
                "Unknown cadence: {}. Available: daily, weekly, monthly",
                s
            )),
        }
    }
}

impl std::fmt::Display for Cadence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything the engine needs to know about a goal and the user's cash flow
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    pub target_amount: f64,
    pub current_amount: f64,
    /// `None` means the goal has no deadline
    pub target_date: Option<NaiveDate>,
    /// Average monthly income (not specific to this goal)
    pub monthly_income: f64,
    /// Average monthly expense (not specific to this goal)
    pub monthly_expense: f64,
}

impl FinancialSnapshot {
    /// Amount still missing; zero or less means the goal is met
    pub fn amount_needed(&self) -> f64 {
        self.target_amount - self.current_amount
    }

    /// Income minus expense; may be negative
    pub fn monthly_discretionary_income(&self) -> f64 {
        self.monthly_income - self.monthly_expense
    }

    /// Reject figures that would produce a misleading recommendation
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("target amount", self.target_amount),
            ("current amount", self.current_amount),
            ("monthly income", self.monthly_income),
            ("monthly expense", self.monthly_expense),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(Error::InvalidData(format!(
                    "{} must be a finite number (got {})",
                    name, value
                )));
            }
        }
        if self.target_amount < 0.0 {
            return Err(Error::InvalidData(format!(
                "target amount cannot be negative (got {})",
                self.target_amount
            )));
        }
        if self.current_amount < 0.0 {
            return Err(Error::InvalidData(format!(
                "current amount cannot be negative (got {})",
                self.current_amount
            )));
        }
        Ok(())
    }
}

/// Classification of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SuggestionStatus {
    Completed,
    NoDate,
    Overdue,
    Ideal,
    Challenging,
    NeedsAdjustment,
    Unrealistic,
}

impl SuggestionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "COMPLETED",
            Self::NoDate => "NO_DATE",
            Self::Overdue => "OVERDUE",
            Self::Ideal => "IDEAL",
            Self::Challenging => "CHALLENGING",
            Self::NeedsAdjustment => "NEEDS_ADJUSTMENT",
            Self::Unrealistic => "UNREALISTIC",
        }
    }
}

impl std::fmt::Display for SuggestionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A rounded contribution per cadence unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContributionPlan {
    pub amount: f64,
    pub cadence: Cadence,
}

/// Outcome of the engine, one shape per status
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    Completed,
    NoDate,
    Overdue,
    /// Income does not exceed expenses
    Unrealistic { monthly_discretionary_income: f64 },
    /// Fits within savings capacity
    Ideal(ContributionPlan),
    /// Fits only by dipping into the safety buffer
    Challenging(ContributionPlan),
    /// Exceeds discretionary income; `alternative` is sized to capacity
    NeedsAdjustment {
        required: ContributionPlan,
        alternative: ContributionPlan,
        months_needed: u32,
        projected_completion: NaiveDate,
    },
}

impl Recommendation {
    pub fn status(&self) -> SuggestionStatus {
        match self {
            Self::Completed => SuggestionStatus::Completed,
            Self::NoDate => SuggestionStatus::NoDate,
            Self::Overdue => SuggestionStatus::Overdue,
            Self::Unrealistic { .. } => SuggestionStatus::Unrealistic,
            Self::Ideal(_) => SuggestionStatus::Ideal,
            Self::Challenging(_) => SuggestionStatus::Challenging,
            Self::NeedsAdjustment { .. } => SuggestionStatus::NeedsAdjustment,
        }
    }

    /// The amount to surface to the user (0 when there is nothing to suggest)
    pub fn suggestion(&self) -> f64 {
        match self {
            Self::Completed | Self::NoDate | Self::Overdue | Self::Unrealistic { .. } => 0.0,
            Self::Ideal(plan) | Self::Challenging(plan) => plan.amount,
            Self::NeedsAdjustment { alternative, .. } => alternative.amount,
        }
    }

    /// Cadence the suggestion is expressed in, if any
    pub fn cadence(&self) -> Option<Cadence> {
        match self {
            Self::Ideal(plan) | Self::Challenging(plan) => Some(plan.cadence),
            Self::NeedsAdjustment { alternative, .. } => Some(alternative.cadence),
            _ => None,
        }
    }
}

/// Recommend a contribution toward a goal as of `now`
///
/// The deadline is midnight UTC at the start of the target date. Calendar
/// months (the monthly divider and the projected completion) are read in
/// `now`'s time zone. Pure: the same inputs always give the same result.
pub fn suggest_contribution<Tz: TimeZone>(
    snapshot: &FinancialSnapshot,
    cadence: Cadence,
    now: DateTime<Tz>,
) -> Recommendation {
    let recommendation = classify(snapshot, cadence, &now);
    debug!(
        status = %recommendation.status(),
        suggestion = recommendation.suggestion(),
        cadence = %cadence,
        "Goal suggestion computed"
    );
    recommendation
}

/// Recommend a contribution using the local wall clock, read once
pub fn suggest_contribution_now(snapshot: &FinancialSnapshot, cadence: Cadence) -> Recommendation {
    suggest_contribution(snapshot, cadence, Local::now())
}

fn classify<Tz: TimeZone>(
    snapshot: &FinancialSnapshot,
    cadence: Cadence,
    now: &DateTime<Tz>,
) -> Recommendation {
    let amount_needed = snapshot.amount_needed();
    if amount_needed <= 0.0 {
        return Recommendation::Completed;
    }

    let Some(target_date) = snapshot.target_date else {
        return Recommendation::NoDate;
    };

    let deadline: DateTime<Utc> = target_date.and_time(NaiveTime::MIN).and_utc();
    let days_remaining =
        (deadline - now.with_timezone(&Utc)).num_milliseconds() as f64 / MILLIS_PER_DAY;
    if days_remaining <= 1.0 {
        return Recommendation::Overdue;
    }

    let mut divider = match cadence {
        Cadence::Daily => days_remaining,
        Cadence::Weekly => days_remaining / 7.0,
        Cadence::Monthly => {
            let deadline_local = deadline.with_timezone(&now.timezone());
            let months = (deadline_local.year() - now.year()) * 12
                + (deadline_local.month() as i32 - now.month() as i32);
            if months <= 0 {
                1.0
            } else {
                months as f64
            }
        }
    };
    if divider <= 0.0 {
        divider = 1.0;
    }

    let required = ContributionPlan {
        amount: round_to_sensible_amount(amount_needed / divider),
        cadence,
    };

    let discretionary = snapshot.monthly_discretionary_income();
    let savings_capacity = discretionary * (1.0 - SAFETY_BUFFER);

    if discretionary <= 0.0 {
        return Recommendation::Unrealistic {
            monthly_discretionary_income: discretionary,
        };
    }

    let required_monthly = required.amount * cadence.per_month();

    if required_monthly <= savings_capacity {
        Recommendation::Ideal(required)
    } else if required_monthly <= discretionary {
        Recommendation::Challenging(required)
    } else {
        let months_needed = months_needed(amount_needed, savings_capacity);
        let projected_completion = now
            .date_naive()
            .checked_add_months(Months::new(months_needed))
            .unwrap_or(NaiveDate::MAX);
        let alternative = ContributionPlan {
            amount: round_to_sensible_amount(savings_capacity / cadence.per_month()).max(0.0),
            cadence,
        };

        Recommendation::NeedsAdjustment {
            required,
            alternative,
            months_needed,
            projected_completion,
        }
    }
}

/// Whole months to save `amount_needed` at `monthly_capacity`, clamped to
/// `MAX_MONTHS_NEEDED`
fn months_needed(amount_needed: f64, monthly_capacity: f64) -> u32 {
    if monthly_capacity <= 0.0 {
        return MAX_MONTHS_NEEDED;
    }
    let months = (amount_needed / monthly_capacity).ceil();
    if !months.is_finite() || months >= MAX_MONTHS_NEEDED as f64 {
        MAX_MONTHS_NEEDED
    } else {
        (months as u32).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::rounding::rounding_step;
    use chrono::{Duration, FixedOffset};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
    }

    fn at(offset_hours: i32, y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(offset_hours * 3600)
            .unwrap()
            .with_ymd_and_hms(y, m, d, h, min, 0)
            .unwrap()
    }

    fn snapshot(days_ahead: i64, income: f64, expense: f64) -> FinancialSnapshot {
        FinancialSnapshot {
            target_amount: 900_000.0,
            current_amount: 0.0,
            target_date: Some(now().date_naive() + Duration::days(days_ahead)),
            monthly_income: income,
            monthly_expense: expense,
        }
    }

    #[test]
    fn test_completed_when_target_met() {
        for current in [900_000.0, 1_000_000.0] {
            let snap = FinancialSnapshot {
                current_amount: current,
                ..snapshot(70, 5_000_000.0, 3_000_000.0)
            };
            let rec = suggest_contribution(&snap, Cadence::Weekly, now());
            assert_eq!(rec, Recommendation::Completed);
            assert_eq!(rec.suggestion(), 0.0);
        }
    }

    #[test]
    fn test_completed_wins_over_missing_date() {
        let snap = FinancialSnapshot {
            current_amount: 900_000.0,
            target_date: None,
            ..snapshot(70, 0.0, 0.0)
        };
        assert_eq!(
            suggest_contribution(&snap, Cadence::Daily, now()).status(),
            SuggestionStatus::Completed
        );
    }

    #[test]
    fn test_no_date() {
        let snap = FinancialSnapshot {
            target_date: None,
            ..snapshot(70, 5_000_000.0, 3_000_000.0)
        };
        let rec = suggest_contribution(&snap, Cadence::Monthly, now());
        assert_eq!(rec, Recommendation::NoDate);
        assert_eq!(rec.suggestion(), 0.0);
    }

    #[test]
    fn test_overdue_within_a_day_or_past() {
        for days in [-30, 0, 1] {
            let rec = suggest_contribution(&snapshot(days, 5_000_000.0, 0.0), Cadence::Weekly, now());
            assert_eq!(rec, Recommendation::Overdue, "days ahead: {}", days);
            assert_eq!(rec.suggestion(), 0.0);
        }
    }

    #[test]
    fn test_just_over_a_day_is_not_overdue() {
        let now = now() - Duration::hours(1);
        let rec = suggest_contribution(&snapshot(1, 50_000_000.0, 0.0), Cadence::Daily, now);
        assert_ne!(rec.status(), SuggestionStatus::Overdue);
    }

    #[test]
    fn test_deadline_is_utc_midnight_east_of_utc() {
        // 00:30 at UTC+7 is 17:30 UTC the day before: about 1.27 days remain
        let snap = FinancialSnapshot {
            target_date: NaiveDate::from_ymd_opt(2026, 1, 2),
            ..snapshot(1, 50_000_000.0, 0.0)
        };
        let rec = suggest_contribution(&snap, Cadence::Daily, at(7, 2026, 1, 1, 0, 30));
        assert_eq!(
            rec,
            Recommendation::Ideal(ContributionPlan {
                amount: 725_000.0,
                cadence: Cadence::Daily,
            })
        );

        // The same wall-clock time in UTC leaves under a day
        let utc = Utc.with_ymd_and_hms(2026, 1, 1, 0, 30, 0).unwrap();
        assert_eq!(suggest_contribution(&snap, Cadence::Daily, utc), Recommendation::Overdue);
    }

    #[test]
    fn test_monthly_divider_reads_deadline_in_local_month() {
        // Mar 1 00:00 UTC is still Feb 28 at UTC-5: one month from January
        let snap = FinancialSnapshot {
            target_date: NaiveDate::from_ymd_opt(2026, 3, 1),
            ..snapshot(1, 50_000_000.0, 0.0)
        };
        let west = suggest_contribution(&snap, Cadence::Monthly, at(-5, 2026, 1, 15, 12, 0));
        assert_eq!(west.suggestion(), 900_000.0);

        let east = suggest_contribution(&snap, Cadence::Monthly, at(7, 2026, 1, 15, 12, 0));
        assert_eq!(east.suggestion(), 450_000.0);
    }

    #[test]
    fn test_ideal_weekly() {
        // 70 days = 10 weeks, 900k / 10 = 90k per week; 90k * 4.33 fits in 1.6M capacity
        let rec = suggest_contribution(&snapshot(70, 5_000_000.0, 3_000_000.0), Cadence::Weekly, now());
        assert_eq!(
            rec,
            Recommendation::Ideal(ContributionPlan {
                amount: 90_000.0,
                cadence: Cadence::Weekly,
            })
        );
        assert_eq!(rec.suggestion(), 90_000.0);
    }

    #[test]
    fn test_needs_adjustment_weekly() {
        // discretionary 100k, capacity 80k; 90k * 4.33 exceeds both
        let rec = suggest_contribution(&snapshot(70, 5_000_000.0, 4_900_000.0), Cadence::Weekly, now());
        match rec {
            Recommendation::NeedsAdjustment {
                required,
                alternative,
                months_needed,
                projected_completion,
            } => {
                assert_eq!(required.amount, 90_000.0);
                assert_eq!(alternative.amount, 20_000.0);
                assert_eq!(alternative.cadence, Cadence::Weekly);
                assert_eq!(months_needed, 12);
                assert_eq!(projected_completion, NaiveDate::from_ymd_opt(2027, 1, 1).unwrap());
            }
            other => panic!("expected NeedsAdjustment, got {:?}", other),
        }
        assert_eq!(rec.suggestion(), 20_000.0);
    }

    #[test]
    fn test_challenging_uses_safety_buffer() {
        // 90k * 4.33 = 389.7k; capacity 360k < 389.7k <= discretionary 450k
        let rec = suggest_contribution(&snapshot(70, 950_000.0, 500_000.0), Cadence::Weekly, now());
        assert_eq!(
            rec,
            Recommendation::Challenging(ContributionPlan {
                amount: 90_000.0,
                cadence: Cadence::Weekly,
            })
        );
    }

    #[test]
    fn test_unrealistic_with_non_positive_cash_flow() {
        for (income, expense) in [(3_000_000.0, 3_000_000.0), (1_000_000.0, 2_500_000.0)] {
            let rec = suggest_contribution(&snapshot(70, income, expense), Cadence::Weekly, now());
            assert_eq!(rec.status(), SuggestionStatus::Unrealistic);
            assert_eq!(rec.suggestion(), 0.0);
        }
    }

    #[test]
    fn test_daily_divider_uses_fractional_days() {
        // 900k over 70 days = 12,857.14 -> 15k per day
        let rec = suggest_contribution(&snapshot(70, 5_000_000.0, 3_000_000.0), Cadence::Daily, now());
        assert_eq!(
            rec,
            Recommendation::Ideal(ContributionPlan {
                amount: 15_000.0,
                cadence: Cadence::Daily,
            })
        );
    }

    #[test]
    fn test_monthly_divider_counts_calendar_months() {
        // Jan 1 -> Mar 12 is two calendar months: 450k per month
        let rec = suggest_contribution(&snapshot(70, 5_000_000.0, 3_000_000.0), Cadence::Monthly, now());
        assert_eq!(
            rec,
            Recommendation::Ideal(ContributionPlan {
                amount: 450_000.0,
                cadence: Cadence::Monthly,
            })
        );
    }

    #[test]
    fn test_monthly_divider_clamps_to_one_within_same_month() {
        // Jan 1 -> Jan 20: zero calendar months apart, whole amount in one month
        let rec = suggest_contribution(&snapshot(19, 5_000_000.0, 3_000_000.0), Cadence::Monthly, now());
        assert_eq!(rec.suggestion(), 900_000.0);
        assert_eq!(rec.status(), SuggestionStatus::Ideal);
    }

    #[test]
    fn test_feasibility_is_cadence_invariant() {
        let cases = [
            (5_000_000.0, 3_000_000.0, SuggestionStatus::Ideal),
            (5_000_000.0, 4_900_000.0, SuggestionStatus::NeedsAdjustment),
            (2_000_000.0, 2_500_000.0, SuggestionStatus::Unrealistic),
        ];
        for (income, expense, expected) in cases {
            for cadence in [Cadence::Daily, Cadence::Weekly, Cadence::Monthly] {
                let rec = suggest_contribution(&snapshot(70, income, expense), cadence, now());
                assert_eq!(rec.status(), expected, "{} with {}", cadence, expense);
                if let Some(c) = rec.cadence() {
                    assert_eq!(c, cadence);
                }
            }
        }
    }

    #[test]
    fn test_suggestion_is_multiple_of_rounding_step() {
        let incomes = [1_000_000.0, 3_500_000.0, 8_000_000.0, 40_000_000.0];
        for income in incomes {
            for days in [3, 10, 45, 200, 900] {
                for cadence in [Cadence::Daily, Cadence::Weekly, Cadence::Monthly] {
                    let rec = suggest_contribution(&snapshot(days, income, 900_000.0), cadence, now());
                    let suggestion = rec.suggestion();
                    assert!(suggestion >= 0.0);
                    if suggestion > 0.0 {
                        assert_eq!(suggestion % rounding_step(suggestion), 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_projection_clamps_to_end_of_shorter_month() {
        // 900k over 3 days needs 300k a day; capacity 1.6M covers it in one month
        let now = Utc.with_ymd_and_hms(2026, 1, 31, 0, 0, 0).unwrap();
        let snap = FinancialSnapshot {
            target_date: NaiveDate::from_ymd_opt(2026, 2, 3),
            ..snapshot(1, 2_000_000.0, 0.0)
        };
        match suggest_contribution(&snap, Cadence::Daily, now) {
            Recommendation::NeedsAdjustment {
                months_needed,
                projected_completion,
                ..
            } => {
                assert_eq!(months_needed, 1);
                assert_eq!(projected_completion, NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
            }
            other => panic!("expected NeedsAdjustment, got {:?}", other),
        }
    }

    #[test]
    fn test_months_needed_is_clamped() {
        assert_eq!(months_needed(900_000.0, 80_000.0), 12);
        assert_eq!(months_needed(1e15, 0.01), MAX_MONTHS_NEEDED);
        assert_eq!(months_needed(900_000.0, 0.0), MAX_MONTHS_NEEDED);
    }

    #[test]
    fn test_tiny_capacity_projects_clamped_date() {
        // discretionary 1, capacity 0.8: would need over a million months
        let snap = FinancialSnapshot {
            target_amount: 1_000_000.0,
            ..snapshot(70, 1_000_001.0, 1_000_000.0)
        };
        match suggest_contribution(&snap, Cadence::Monthly, now()) {
            Recommendation::NeedsAdjustment {
                alternative,
                months_needed,
                projected_completion,
                ..
            } => {
                assert_eq!(months_needed, MAX_MONTHS_NEEDED);
                assert_eq!(projected_completion, NaiveDate::from_ymd_opt(2126, 1, 1).unwrap());
                assert_eq!(alternative.amount, 1_000.0);
            }
            other => panic!("expected NeedsAdjustment, got {:?}", other),
        }
    }

    #[test]
    fn test_snapshot_validation() {
        assert!(snapshot(70, 1.0, 1.0).validate().is_ok());

        let nan = FinancialSnapshot {
            monthly_income: f64::NAN,
            ..snapshot(70, 1.0, 1.0)
        };
        assert!(nan.validate().is_err());

        let negative = FinancialSnapshot {
            target_amount: -1.0,
            ..snapshot(70, 1.0, 1.0)
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_cadence_parse_and_default() {
        assert_eq!(Cadence::default(), Cadence::Weekly);
        assert_eq!("Daily".parse::<Cadence>(), Ok(Cadence::Daily));
        assert_eq!("monthly".parse::<Cadence>(), Ok(Cadence::Monthly));
        assert!("yearly".parse::<Cadence>().is_err());
        assert_eq!(Cadence::Weekly.unit_label(), "weeks");
    }

    #[test]
    fn test_recommendation_serializes_with_status_tag() {
        let rec = Recommendation::Ideal(ContributionPlan {
            amount: 90_000.0,
            cadence: Cadence::Weekly,
        });
        let value = serde_json::to_value(rec).unwrap();
        assert_eq!(value["status"], "IDEAL");
        assert_eq!(value["amount"], 90_000.0);
        assert_eq!(value["cadence"], "weekly");

        let value = serde_json::to_value(Recommendation::NoDate).unwrap();
        assert_eq!(value["status"], "NO_DATE");
    }

    #[test]
    fn test_concurrent_callers_agree() {
        let snap = &snapshot(70, 5_000_000.0, 3_000_000.0);
        let results: Vec<Recommendation> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(move || suggest_contribution(snap, Cadence::Weekly, now())))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(results.iter().all(|r| *r == results[0]));
    }
}
