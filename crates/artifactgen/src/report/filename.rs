use chrono::NaiveDate;

use crate::extract::UNKNOWN_TEST_CASE_ID;
use crate::prefs::CategoryPrefix;

/// Artifact name: `<prefix>_<testCaseId>_<YYYYMMDD>_Passed.docx`.
pub fn report_file_name(prefix: CategoryPrefix, test_case_id: &str, date: NaiveDate) -> String {
    format!(
        "{}_{}_{}_Passed.docx",
        prefix.code(),
        sanitize_component(test_case_id),
        date.format("%Y%m%d")
    )
}

/// Keeps a filename component filesystem-safe: alphanumerics, `-` and `_`
/// pass through, everything else becomes `-`. An empty or never-extracted
/// ID falls back to the unknown sentinel.
fn sanitize_component(component: &str) -> String {
    let sanitized: String = component
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();

    if sanitized.is_empty() {
        UNKNOWN_TEST_CASE_ID.to_string()
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 23).unwrap()
    }

    #[test]
    fn test_report_file_name() {
        assert_eq!(
            report_file_name(CategoryPrefix::Regression, "SIS-1234", date()),
            "REG_SIS-1234_20260823_Passed.docx"
        );
    }

    #[test]
    fn test_empty_id_uses_sentinel() {
        assert_eq!(
            report_file_name(CategoryPrefix::Smoke, "", date()),
            "SMK_Unknown-ID_20260823_Passed.docx"
        );
    }

    #[test]
    fn test_unsafe_characters_replaced() {
        assert_eq!(
            report_file_name(CategoryPrefix::Uat, "SIS 12/34", date()),
            "UAT_SIS-12-34_20260823_Passed.docx"
        );
    }
}
