use crate::error::PatternError;

/// Lower-cased keywords; a name matches when it contains any of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternSet {
    patterns: Vec<String>,
}

impl PatternSet {
    /// Build from raw form input. Each item may hold several keywords, one
    /// per line; blank lines are dropped.
    pub fn build<I, S>(raw_lines: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns: Vec<String> = raw_lines
            .into_iter()
            .flat_map(|raw| {
                raw.as_ref()
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_lowercase)
                    .collect::<Vec<_>>()
            })
            .collect();

        if patterns.is_empty() {
            return Err(PatternError::EmptyPatternSet);
        }
        Ok(Self { patterns })
    }

    /// Case-insensitive substring test against every keyword.
    pub fn matches(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.patterns.iter().any(|p| name.contains(p.as_str()))
    }

    pub fn patterns(&self) -> &[String] { &self.patterns }

    pub fn len(&self) -> usize { self.patterns.len() }

    pub fn is_empty(&self) -> bool { self.patterns.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_splits_trims_and_lowercases() {
        let set = PatternSet::build(["Sales\n  PO123 \r\n\nReport"]).unwrap();
        assert_eq!(set.patterns(), ["sales", "po123", "report"]);
    }

    #[test]
    fn build_accepts_many_items() {
        let set = PatternSet::build(vec!["a".to_string(), " b ".to_string()]).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn build_keeps_duplicates() {
        let set = PatternSet::build(["x", "x"]).unwrap();
        assert_eq!(set.patterns(), ["x", "x"]);
    }

    #[test]
    fn build_rejects_empty_input() {
        let none: [&str; 0] = [];
        assert_eq!(PatternSet::build(none), Err(PatternError::EmptyPatternSet));
        assert_eq!(PatternSet::build(["", "  "]), Err(PatternError::EmptyPatternSet));
        assert_eq!(PatternSet::build(["\n \n\t"]), Err(PatternError::EmptyPatternSet));
    }

    #[test]
    fn matches_is_case_insensitive_substring() {
        let set = PatternSet::build(["sales"]).unwrap();
        assert!(set.matches("2024_SALES_REPORT.xlsx"));
        assert!(set.matches("presales.xls"));
        assert!(!set.matches("sale.xlsx"));
    }

    #[test]
    fn matches_has_no_fuzziness() {
        let set = PatternSet::build(["sale s"]).unwrap();
        assert!(!set.matches("2024_SALES_REPORT.xlsx"));
    }

    #[test]
    fn matches_any_of_several() {
        let set = PatternSet::build(["po123", "budget"]).unwrap();
        assert!(set.matches("Q1_budget.xlsm"));
        assert!(set.matches("po123.xls"));
        assert!(!set.matches("inventory.xlsx"));
    }

    #[test]
    fn keyword_is_lowercased_before_matching() {
        let set = PatternSet::build(["PO123"]).unwrap();
        assert!(set.matches("scan_po123.xlsx"));
    }
}
