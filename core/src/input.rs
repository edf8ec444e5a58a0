use crate::error::{Result, WorkHoursError};
use crate::model::language::{find_language, LanguageProfile};

const HELP_FLAGS: &[&str] = &["h", "help"];
const VERSION_FLAGS: &[&str] = &["V", "version"];

/// Rewrites position-paired `-name value` tokens into `--name=value`.
///
/// The first argument (program name) is kept as is. Leading dashes on names are
/// stripped, so `--name value` works too. Help and version flags stand alone. A
/// trailing name without a value is passed on bare, leaving the error to the parser.
pub fn normalize_flags<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut normalized: Vec<String> = args.next().into_iter().collect();

    while let Some(token) = args.next() {
        let name = token.trim_start_matches('-');
        if HELP_FLAGS.contains(&name) {
            normalized.push("--help".to_string());
            continue;
        }
        if VERSION_FLAGS.contains(&name) {
            normalized.push("--version".to_string());
            continue;
        }
        match args.next() {
            Some(value) => normalized.push(format!("--{}={}", name, value)),
            None => normalized.push(format!("--{}", name)),
        }
    }

    normalized
}

/// Comma-separated language codes, in the given order, duplicates dropped.
pub fn parse_languages(input: &str) -> Result<Vec<&'static LanguageProfile>> {
    let mut languages: Vec<&'static LanguageProfile> = Vec::new();
    for code in input.split(',').map(str::trim).filter(|c| !c.is_empty()) {
        let profile = find_language(code)
            .ok_or_else(|| WorkHoursError::UnknownLanguage(code.to_string()))?;
        if !languages.iter().any(|l| l.code == profile.code) {
            languages.push(profile);
        }
    }
    if languages.is_empty() {
        return Err(WorkHoursError::UnknownLanguage(input.to_string()));
    }
    Ok(languages)
}

pub fn parse_latest_files(input: &str) -> Result<usize> {
    match input.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(WorkHoursError::InvalidLatestFiles(input.to_string())),
    }
}
