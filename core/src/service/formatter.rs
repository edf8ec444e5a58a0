use crate::model::language::LanguageProfile;
use crate::service::aggregator::YearTotals;

/// Fixed marker in front of every event summary.
pub const SUMMARY_MARKER: &str = "🕒";

/// Substitutes `${name}` placeholders in one pass.
///
/// Each named argument is used for its first occurrence only. Unknown or repeated
/// placeholders stay in the output untouched, and substituted values are never rescanned.
pub fn render(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut used = vec![false; args.len()];
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };

        let name = &after[..end];
        match args.iter().position(|(key, _)| *key == name) {
            Some(i) if !used[i] => {
                used[i] = true;
                out.push_str(args[i].1);
            }
            _ => out.push_str(&rest[start..start + end + 3]),
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Hours with at most two decimals and no trailing zeros: `8`, `7.5`, `0.33`.
pub fn format_hours(hours: f64) -> String {
    let rounded = (hours * 100.0).round() / 100.0;
    if rounded == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    format!("{}", rounded)
}

/// How much aggregate context a day's description carries.
#[derive(Debug, Clone, Copy)]
pub enum DescriptionLevel<'a> {
    Day,
    /// Last recorded day of a month
    MonthEnd { month_total: f64 },
    /// Last recorded day of December
    YearEnd {
        month_total: f64,
        totals: &'a YearTotals,
    },
}

pub struct TextFormatter<'a> {
    profile: &'a LanguageProfile,
}

impl<'a> TextFormatter<'a> {
    pub fn new(profile: &'a LanguageProfile) -> Self {
        Self { profile }
    }

    pub fn summary(&self, hours: f64) -> String {
        let hours = format_hours(hours);
        let text = render(self.profile.summary_template, &[("hours", &hours)]);
        format!("{} {}", SUMMARY_MARKER, text)
    }

    pub fn description(&self, day: u32, month: u32, hours: f64, level: DescriptionLevel<'_>) -> String {
        let month_name = self.profile.month_name(month).unwrap_or_default();
        let day = day.to_string();
        let hours = format_hours(hours);
        let mut text = render(
            self.profile.description_template,
            &[("day", &day), ("monthName", month_name), ("hours", &hours)],
        );

        match level {
            DescriptionLevel::Day => {}
            DescriptionLevel::MonthEnd { month_total } => {
                text.push_str("\n\n");
                text.push_str(&self.month_total(month_name, month_total));
            }
            DescriptionLevel::YearEnd { month_total, totals } => {
                text.push_str("\n\n");
                text.push_str(&self.month_total(month_name, month_total));
                text.push_str("\n\n");
                text.push_str(&self.yearly_totals(totals));
            }
        }
        text
    }

    fn month_total(&self, month_name: &str, total: f64) -> String {
        let total = format_hours(total);
        render(
            self.profile.month_total_template,
            &[("monthName", month_name), ("hours", &total)],
        )
    }

    /// Yearly breakdown with capitalized month names, January first.
    pub fn yearly_totals(&self, totals: &YearTotals) -> String {
        let lines: Vec<String> = totals
            .months()
            .map(|m| {
                let name = self.profile.month_name(m.month).unwrap_or_default();
                format!("{}: {}", capitalize_first(name), format_hours(m.hours))
            })
            .collect();
        let monthly = lines.join("\n");
        let year_total = format_hours(totals.year_total);
        render(
            self.profile.yearly_totals_template,
            &[("monthlyTotals", &monthly), ("yearTotalHours", &year_total)],
        )
    }
}
