//! Rendering recommendations as user-facing messages
//!
//! The engine only produces numbers and a status; everything locale or
//! output specific lives here.

use serde::{Deserialize, Serialize};

use super::engine::{Cadence, ContributionPlan, Recommendation};
use crate::config::AdvisorConfig;

/// How a currency amount is written out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub grouping_separator: String,
    /// Put a space between the symbol and the digits
    pub symbol_spacing: bool,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "Rp".to_string(),
            grouping_separator: ".".to_string(),
            symbol_spacing: true,
        }
    }
}

impl CurrencyFormat {
    /// Format with no fractional digits, e.g. `Rp 1.250.000`
    pub fn format(&self, amount: f64) -> String {
        let rounded = amount.round();
        let digits = format!("{:.0}", rounded.abs());

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push_str(&self.grouping_separator);
            }
            grouped.push(ch);
        }

        format!(
            "{}{}{}{}",
            if rounded < 0.0 { "-" } else { "" },
            self.symbol,
            if self.symbol_spacing { " " } else { "" },
            grouped
        )
    }
}

/// Emphasis style for the highlighted parts of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Markup {
    #[default]
    Plain,
    Html,
    Ansi,
}

impl Markup {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Html => "html",
            Self::Ansi => "ansi",
        }
    }

    fn emphasize(&self, text: &str) -> String {
        match self {
            Self::Plain => text.to_string(),
            Self::Html => format!("<strong>{}</strong>", text),
            Self::Ansi => format!("\x1b[1m{}\x1b[0m", text),
        }
    }

    fn paragraph_break(&self) -> &'static str {
        match self {
            Self::Html => "<br><br>",
            Self::Plain | Self::Ansi => "\n\n",
        }
    }
}

impl std::str::FromStr for Markup {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(Self::Plain),
            "html" => Ok(Self::Html),
            "ansi" => Ok(Self::Ansi),
            _ => Err(format!("Unknown markup: {}. Available: plain, html, ansi", s)),
        }
    }
}

impl std::fmt::Display for Markup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Turns recommendations into explanatory text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageFormatter {
    pub currency: CurrencyFormat,
    pub markup: Markup,
}

impl MessageFormatter {
    pub fn new(currency: CurrencyFormat, markup: Markup) -> Self {
        Self { currency, markup }
    }

    pub fn from_config(config: &AdvisorConfig) -> Self {
        Self::new(config.currency.clone(), config.markup)
    }

    /// Amount with emphasis applied
    pub fn amount(&self, amount: f64) -> String {
        self.markup.emphasize(&self.currency.format(amount))
    }

    fn unit(&self, cadence: Cadence) -> String {
        self.markup.emphasize(cadence.unit_label())
    }

    pub fn message(&self, recommendation: &Recommendation) -> String {
        match recommendation {
            Recommendation::Completed => "Congratulations! This goal has been reached.".to_string(),
            Recommendation::NoDate => "Set a target date to get a recommendation.".to_string(),
            Recommendation::Overdue => {
                "The target date is too close or has already passed. Please update it.".to_string()
            }
            Recommendation::Unrealistic { .. } => {
                "Your monthly cash flow is negative, so it is hard to recommend saving right now. \
                 Try focusing on reducing expenses first."
                    .to_string()
            }
            Recommendation::Ideal(plan) => format!(
                "This plan is very realistic! You only need to set aside {} per {}. \
                 That still leaves enough room for other needs.",
                self.amount(plan.amount),
                self.unit(plan.cadence)
            ),
            Recommendation::Challenging(plan) => format!(
                "Achievable, but it takes commitment! You need to set aside {} per {}. \
                 This plan will use almost all of your leftover money.",
                self.amount(plan.amount),
                self.unit(plan.cadence)
            ),
            Recommendation::NeedsAdjustment {
                required,
                alternative,
                projected_completion,
                ..
            } => {
                let projected = projected_completion.format("%B %Y").to_string();
                self.adjustment_message(required, alternative, &projected)
            }
        }
    }

    fn adjustment_message(
        &self,
        required: &ContributionPlan,
        alternative: &ContributionPlan,
        projected: &str,
    ) -> String {
        format!(
            "This goal is not realistic yet. What you need ({} per {}) exceeds your monthly \
             leftover money.{}Our suggestion: save according to your capacity, about {} per {}. \
             That way you will reach your goal around {}.",
            self.amount(required.amount),
            required.cadence.unit_label(),
            self.markup.paragraph_break(),
            self.amount(alternative.amount),
            self.unit(alternative.cadence),
            self.markup.emphasize(projected)
        )
    }
}
