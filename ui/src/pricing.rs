//! Monthly price estimates for the pricing page.
//!
//! Plans charge a flat fee covering a number of active students, plus a fee
//! for each student beyond that.

use derive_more::Display;
use rust_decimal::prelude::*;
use rust_decimal::dec;

/// Largest class the calculator quotes for. Anything above is a custom deal.
pub const MAX_STUDENTS: u32 = 200;

pub const PRESETS: &[u32] = &[10, 25, 50, 100, 200];

pub const CONTACT_US_COPY: &str =
    "Teaching more than 200 active students? Get in touch and we'll put together a plan.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElasticModel {
    pub base_fee: Decimal,
    pub included_students: u32,
    pub per_extra_student: Decimal,
}

pub const SPARK: ElasticModel = ElasticModel {
    base_fee: dec!(100),
    included_students: 10,
    per_extra_student: dec!(10),
};

/// Rate for the first cohort of teachers.
pub const FOUNDER: ElasticModel = ElasticModel {
    base_fee: dec!(50),
    included_students: 10,
    per_extra_student: dec!(5),
};

impl ElasticModel {
    pub fn extra_students(&self, students: u32) -> u32 {
        students.saturating_sub(self.included_students)
    }

    pub fn price(&self, students: u32) -> Decimal {
        self.base_fee + Decimal::from(self.extra_students(students)) * self.per_extra_student
    }

    /// How the price for `students` is made up, as shown under the total.
    pub fn breakdown(&self, students: u32) -> String {
        let base = format_usd(self.base_fee);
        let included = self.included_students;
        match self.extra_students(students) {
            0 => format!("{base} for up to {included} active students only."),
            extra => {
                let extra_cost = format_usd(Decimal::from(extra) * self.per_extra_student);
                format!(
                    "{base} for up to {included} active students + {extra_cost} for {extra} additional students."
                )
            }
        }
    }
}

/// Whole dollars, e.g. `$2000`.
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{sign}${}", rounded.abs().trunc())
}

/// The student count entered on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentCount {
    Exact(u32),
    /// More than [`MAX_STUDENTS`]; quoted on request.
    OverMax,
}

impl StudentCount {
    /// Parse the input box. Fractions round to the nearest student and
    /// negatives count as zero. Returns `None` for text that is not a number.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw == format!("{MAX_STUDENTS}+") {
            return Some(StudentCount::OverMax);
        }
        let value: f64 = raw.parse().ok().filter(|v: &f64| v.is_finite())?;
        Some(Self::from_value(value))
    }

    pub fn from_value(value: f64) -> Self {
        let students = value.round().max(0.0);
        if students > f64::from(MAX_STUDENTS) {
            StudentCount::OverMax
        } else {
            StudentCount::Exact(students as u32)
        }
    }

    /// Value for the slider, which tops out at [`MAX_STUDENTS`].
    pub fn slider_value(&self) -> u32 {
        match self {
            StudentCount::Exact(students) => *students,
            StudentCount::OverMax => MAX_STUDENTS,
        }
    }

    pub fn label(&self) -> String {
        match self {
            StudentCount::Exact(students) => students.to_string(),
            StudentCount::OverMax => format!("{MAX_STUDENTS}+"),
        }
    }

    pub fn is_preset(&self, preset: u32) -> bool {
        *self == StudentCount::Exact(preset)
    }
}

/// What the calculator shows for a student count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Quote {
    Priced {
        price: String,
        founder_price: String,
        breakdown: String,
    },
    ContactUs,
}

pub fn quote(count: StudentCount) -> Quote {
    match count {
        StudentCount::Exact(students) => Quote::Priced {
            price: format_usd(SPARK.price(students)),
            founder_price: format_usd(FOUNDER.price(students)),
            breakdown: SPARK.breakdown(students),
        },
        StudentCount::OverMax => Quote::ContactUs,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum PricingTab {
    #[default]
    #[display("Spark")]
    Spark,
    #[display("Spark Live")]
    SparkLive,
}

impl PricingTab {
    pub const ALL: [PricingTab; 2] = [PricingTab::Spark, PricingTab::SparkLive];

    pub fn panel_id(&self) -> &'static str {
        match self {
            PricingTab::Spark => "pricing-panel-spark",
            PricingTab::SparkLive => "pricing-panel-live",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_grows_past_the_included_students() {
        assert_eq!(SPARK.price(0), dec!(100));
        assert_eq!(SPARK.price(10), dec!(100));
        assert_eq!(SPARK.price(15), dec!(150));
        assert_eq!(FOUNDER.price(15), dec!(75));
        assert_eq!(SPARK.price(200), dec!(2000));
    }

    #[test]
    fn breakdown_mentions_extra_students_only_when_there_are_some() {
        assert_eq!(
            SPARK.breakdown(8),
            "$100 for up to 10 active students only."
        );
        assert_eq!(
            SPARK.breakdown(25),
            "$100 for up to 10 active students + $150 for 15 additional students."
        );
    }

    #[test]
    fn dollars_are_whole_without_separators() {
        assert_eq!(format_usd(dec!(0)), "$0");
        assert_eq!(format_usd(dec!(99.5)), "$100");
        assert_eq!(format_usd(dec!(1250)), "$1250");
        assert_eq!(format_usd(dec!(2000)), "$2000");
    }

    #[test]
    fn student_input_is_rounded_and_clamped() {
        assert_eq!(StudentCount::parse("12.4"), Some(StudentCount::Exact(12)));
        assert_eq!(StudentCount::parse("12.5"), Some(StudentCount::Exact(13)));
        assert_eq!(StudentCount::parse("-3"), Some(StudentCount::Exact(0)));
        assert_eq!(StudentCount::parse(" 200 "), Some(StudentCount::Exact(200)));
        assert_eq!(StudentCount::parse("201"), Some(StudentCount::OverMax));
        assert_eq!(StudentCount::parse("200+"), Some(StudentCount::OverMax));
        assert_eq!(StudentCount::parse("lots"), None);
        assert_eq!(StudentCount::parse("NaN"), None);
    }

    #[test]
    fn over_max_asks_to_get_in_touch() {
        assert_eq!(quote(StudentCount::OverMax), Quote::ContactUs);
        assert_eq!(StudentCount::OverMax.slider_value(), 200);
        assert_eq!(StudentCount::OverMax.label(), "200+");
    }

    #[test]
    fn quote_carries_both_rates() {
        let Quote::Priced { price, founder_price, breakdown } = quote(StudentCount::Exact(20)) else {
            panic!("expected a price");
        };
        assert_eq!(price, "$200");
        assert_eq!(founder_price, "$100");
        assert!(breakdown.ends_with("$100 for 10 additional students."));
    }

    #[test]
    fn presets_match_exact_counts() {
        assert!(StudentCount::Exact(50).is_preset(50));
        assert!(!StudentCount::Exact(51).is_preset(50));
        assert!(!StudentCount::OverMax.is_preset(200));
    }

    #[test]
    fn tabs_have_labels_and_panels() {
        assert_eq!(PricingTab::SparkLive.to_string(), "Spark Live");
        assert_eq!(PricingTab::default().panel_id(), "pricing-panel-spark");
    }
}
