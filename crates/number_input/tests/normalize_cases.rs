use number_input::{Constraints, Decision, normalize};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const CASES_FORMAT_V1: &str = "normalize-cases-v1";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CaseFile {
    format: String,
    #[serde(rename = "case")]
    cases: Vec<Case>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Case {
    id: String,
    input: String,
    #[serde(default)]
    constraints: Constraints,
    expect: Option<String>,
    #[serde(default)]
    reject: bool,
}

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("normalize_cases.toml")
}

fn load_cases(path: &Path) -> Vec<Case> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read case file {path:?}: {err}"));
    let file: CaseFile = toml::from_str(&content)
        .unwrap_or_else(|err| panic!("failed to parse case file {path:?}: {err}"));
    assert_eq!(
        file.format, CASES_FORMAT_V1,
        "unsupported format in {path:?}"
    );
    assert!(!file.cases.is_empty(), "case file {path:?} has no cases");

    let mut seen = BTreeSet::new();
    for case in &file.cases {
        if !seen.insert(case.id.as_str()) {
            panic!("duplicate case id '{}' in {path:?}", case.id);
        }
        match (&case.expect, case.reject) {
            (Some(_), true) => panic!("case '{}' has both expect and reject", case.id),
            (None, false) => panic!("case '{}' needs expect or reject = true", case.id),
            _ => {}
        }
        if let Err(err) = case.constraints.validate() {
            panic!("case '{}' has invalid constraints: {err}", case.id);
        }
    }
    file.cases
}

#[test]
fn normalize_matches_golden_cases() {
    let path = fixture_path();
    let cases = load_cases(&path);
    let mut failures = Vec::new();

    for case in &cases {
        let expected = match &case.expect {
            Some(text) => Decision::accepted(text.as_str()),
            None => Decision::Rejected,
        };
        let actual = normalize(&case.input, &case.constraints);
        if actual != expected {
            failures.push(format!(
                "{}: normalize({:?}) = {actual:?}, expected {expected:?}",
                case.id, case.input
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "{} of {} cases failed:\n{}",
        failures.len(),
        cases.len(),
        failures.join("\n")
    );
}

#[test]
fn golden_outputs_are_stable() {
    for case in load_cases(&fixture_path()) {
        let Some(text) = case.expect else {
            continue;
        };
        assert_eq!(
            normalize(&text, &case.constraints),
            Decision::accepted(text.as_str()),
            "case '{}': accepted text is not stable",
            case.id
        );
    }
}

#[test]
fn constraints_load_from_toml() {
    let c: Constraints = toml::from_str("min = -1.5\nmax_dp = 3\nprecision = \"truncate\"")
        .expect("constraints parse");
    assert_eq!(
        c,
        Constraints::default().with_min(-1.5).with_max_dp(3)
    );

    let c: Constraints = toml::from_str("allow_decimal = false").expect("constraints parse");
    assert_eq!(c, Constraints::integers());
}
