//! Built-in clinical dictionary.
//!
//! Term order within each list is preserved as-is; it drives match emission
//! order and therefore tie-breaking in the span merger.

pub(crate) const DISEASES: &[&str] = &[
    "diabetes",
    "diabetes mellitus",
    "type 2 diabetes",
    "hypertension",
    "lactic acidosis",
    "angioedema",
    "lung carcinoma",
    "carcinoma",
    "metastases",
    "renal dysfunction",
];

pub(crate) const DRUGS: &[&str] = &["metformin", "lisinopril", "losartan", "ACE inhibitor", "insulin"];

pub(crate) const SYMPTOMS: &[&str] = &[
    "nausea",
    "vomiting",
    "abdominal pain",
    "cough",
    "dry cough",
    "pain",
    "fever",
    "headache",
    "dizziness",
];

pub(crate) const ANATOMY: &[&str] = &[
    "ICU",
    "renal",
    "lips",
    "chest",
    "lung",
    "right upper lobe",
    "mediastinal lymph nodes",
    "pleural",
];

pub(crate) const TESTS: &[&str] = &[
    "laboratory tests",
    "blood pressure",
    "CT scan",
    "chest CT",
    "biopsy",
    "tissue biopsy",
    "creatinine",
    "lactate",
];
