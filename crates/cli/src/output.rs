use anyhow::bail;
use ferrous_nscheck_domain::{rcode_to_string, Record, Report, ValidationError};
use serde::Serialize;

/// Parse an `--expect` argument: `<name> <TYPE> <value...>`.
pub fn parse_expectation(arg: &str) -> anyhow::Result<Record> {
    let tokens: Vec<&str> = arg.split_whitespace().collect();
    if tokens.len() < 3 {
        bail!(
            "Invalid expectation '{}': expected \"<name> <TYPE> <value>\"",
            arg
        );
    }

    Ok(Record::expected(
        tokens[0],
        tokens[1].to_uppercase(),
        tokens[2..].join("\t"),
    ))
}

/// Zone-file style listing, one block per endpoint in sorted order.
pub fn render_report(report: &Report) -> String {
    let mut out = String::new();

    for (endpoint, entry) in report.sorted() {
        out.push_str(&format!(
            ";; {}: {}\n",
            endpoint,
            rcode_to_string(entry.response_code)
        ));
        for record in &entry.records {
            out.push_str(&format!("{}\n", record));
        }
    }

    out
}

pub fn render_validation(validation: &Result<(), ValidationError>) -> String {
    match validation {
        Ok(()) => "Valid!".to_string(),
        Err(e) => e.to_string(),
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    qname: &'a str,
    qtype: &'a str,
    report: &'a Report,
    #[serde(skip_serializing_if = "Option::is_none")]
    valid: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    failures: Vec<String>,
}

pub fn render_json(
    qname: &str,
    qtype: &str,
    report: &Report,
    validation: Option<&Result<(), ValidationError>>,
) -> anyhow::Result<String> {
    let output = JsonOutput {
        qname,
        qtype,
        report,
        valid: validation.map(Result::is_ok),
        failures: match validation {
            Some(Err(e)) => e.detail_lines(),
            _ => Vec::new(),
        },
    };

    Ok(serde_json::to_string_pretty(&output)?)
}
