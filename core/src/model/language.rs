/// Text templates and month names for one calendar language.
///
/// Templates use `${name}` placeholders, see [`crate::service::formatter::render`].
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageProfile {
    pub code: &'static str,
    /// `${hours}`
    pub summary_template: &'static str,
    /// `${day}`, `${monthName}`, `${hours}`
    pub description_template: &'static str,
    /// `${monthName}`, `${hours}`
    pub month_total_template: &'static str,
    /// `${monthlyTotals}`, `${yearTotalHours}`
    pub yearly_totals_template: &'static str,
    pub month_names: [&'static str; 12],
}

impl LanguageProfile {
    pub fn month_name(&self, month: u32) -> Option<&'static str> {
        let index = (month as usize).checked_sub(1)?;
        self.month_names.get(index).copied()
    }

    /// Case-insensitive lookup of a month number by name.
    pub fn month_number(&self, name: &str) -> Option<u32> {
        let name = name.trim().to_lowercase();
        self.month_names
            .iter()
            .position(|m| m.to_lowercase() == name)
            .map(|i| i as u32 + 1)
    }
}

pub const LANGUAGES: &[LanguageProfile] = &[
    LanguageProfile {
        code: "en",
        summary_template: "Work Hours: ${hours}",
        description_template: "Work hours for ${day} ${monthName}: ${hours} hours",
        month_total_template: "Total work hours for ${monthName}: ${hours}",
        yearly_totals_template: "Yearly Summary:\n${monthlyTotals}\nTotal: ${yearTotalHours} hours",
        month_names: [
            "January", "February", "March", "April", "May", "June",
            "July", "August", "September", "October", "November", "December",
        ],
    },
    LanguageProfile {
        code: "sv",
        summary_template: "Arbetstid: ${hours}",
        description_template: "Arbetstid ${day} ${monthName}: ${hours} timmar",
        month_total_template: "Totalt arbetstid för ${monthName}: ${hours}",
        yearly_totals_template: "Årssammanställning:\n${monthlyTotals}\nTotal: ${yearTotalHours} timmar",
        month_names: [
            "januari", "februari", "mars", "april", "maj", "juni",
            "juli", "augusti", "september", "oktober", "november", "december",
        ],
    },
];

pub fn find_language(code: &str) -> Option<&'static LanguageProfile> {
    LANGUAGES.iter().find(|l| l.code.eq_ignore_ascii_case(code.trim()))
}

/// Resolves a month key written as a number or as a month name in any catalog language.
pub fn parse_month_key(key: &str) -> Option<u32> {
    let key = key.trim();
    if let Ok(n) = key.parse::<u32>() {
        return (1..=12).contains(&n).then_some(n);
    }
    LANGUAGES.iter().find_map(|l| l.month_number(key))
}
