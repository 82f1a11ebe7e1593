//! Demo clinical texts.
//!
//! Three short case reports that exercise every category of the built-in
//! lexicon. Data only; used by the CLI `--sample` option and by tests.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    DiabetesCase,
    DrugReaction,
    RadiologyReport,
}

impl Sample {
    pub const ALL: [Sample; 3] = [
        Sample::DiabetesCase,
        Sample::DrugReaction,
        Sample::RadiologyReport,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Sample::DiabetesCase => "Sample 1: Diabetes Case",
            Sample::DrugReaction => "Sample 2: Drug Reaction",
            Sample::RadiologyReport => "Sample 3: Radiology Report",
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Sample::DiabetesCase => DIABETES_CASE,
            Sample::DrugReaction => DRUG_REACTION,
            Sample::RadiologyReport => RADIOLOGY_REPORT,
        }
    }

    /// 1-based sample number.
    pub fn from_number(n: usize) -> Option<Self> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Sample {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let sample = match key.as_str() {
            "diabetes" => Some(Sample::DiabetesCase),
            "drug" | "drug-reaction" => Some(Sample::DrugReaction),
            "radiology" => Some(Sample::RadiologyReport),
            _ => key.parse().ok().and_then(Sample::from_number),
        };
        sample.ok_or_else(|| format!("unknown sample: {s}. Use 1, 2 or 3"))
    }
}

const DIABETES_CASE: &str = "The patient was prescribed metformin 500mg twice daily for type 2 diabetes mellitus. After two weeks, she developed nausea, vomiting, and abdominal pain. Laboratory tests showed elevated lactate levels at 8.2 mmol/L, indicating lactic acidosis. Metformin was discontinued immediately and she was admitted to the ICU for supportive care. Her renal function showed creatinine at 2.1 mg/dL.";

const DRUG_REACTION: &str = "A 45-year-old male with hypertension was started on lisinopril 10mg daily. Within 3 days, he developed a persistent dry cough and mild angioedema of the lips. Blood pressure readings were 145/92 mmHg. The ACE inhibitor was discontinued and he was switched to losartan 50mg with resolution of symptoms within 48 hours.";

const RADIOLOGY_REPORT: &str = "Chest CT scan reveals a 2.5 cm mass in the right upper lobe with spiculated margins. Multiple enlarged mediastinal lymph nodes measuring up to 1.8 cm. No pleural effusion. Findings are highly suspicious for primary lung carcinoma with nodal metastases. Recommend tissue biopsy for histological confirmation.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_one_based() {
        assert_eq!(Sample::from_number(1), Some(Sample::DiabetesCase));
        assert_eq!(Sample::from_number(3), Some(Sample::RadiologyReport));
        assert_eq!(Sample::from_number(0), None);
        assert_eq!(Sample::from_number(4), None);
    }

    #[test]
    fn parse_by_number_or_name() {
        assert_eq!("2".parse::<Sample>(), Ok(Sample::DrugReaction));
        assert_eq!("Radiology".parse::<Sample>(), Ok(Sample::RadiologyReport));
        assert!("7".parse::<Sample>().is_err());
    }

    #[test]
    fn every_number_parses_to_its_sample() {
        for (i, sample) in Sample::ALL.into_iter().enumerate() {
            assert_eq!((i + 1).to_string().parse::<Sample>(), Ok(sample));
        }
        assert!("0".parse::<Sample>().is_err());
        assert!("-1".parse::<Sample>().is_err());
        assert!(" 3 ".parse::<Sample>().is_ok());
    }

    #[test]
    fn texts_are_non_empty() {
        for sample in Sample::ALL {
            assert!(!sample.text().trim().is_empty(), "{sample}");
        }
    }
}
