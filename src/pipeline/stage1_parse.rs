use crate::input::{InputError, RawSamples};
use crate::model::factors::{Method, Metric};
use crate::model::scores::ResponseRow;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    pub rows: Vec<ResponseRow>,
    pub skipped_tokens: Vec<String>,
    pub trailing_values: Vec<u32>,
}

impl ParseOutcome {
    pub fn is_clean(&self) -> bool {
        self.skipped_tokens.is_empty() && self.trailing_values.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Stage1Output {
    pub rows: [Vec<ResponseRow>; Method::COUNT],
}

/// Keeps purely-digit tokens and groups them into rows of four. Anything
/// else is skipped, and a short trailing group is discarded.
pub fn parse_sample(raw: &str) -> ParseOutcome {
    let mut values = Vec::new();
    let mut skipped_tokens = Vec::new();
    for token in raw.split_whitespace() {
        if !token.bytes().all(|b| b.is_ascii_digit()) {
            skipped_tokens.push(token.to_string());
            continue;
        }
        match token.parse::<u32>() {
            Ok(v) => values.push(v),
            Err(_) => skipped_tokens.push(token.to_string()),
        }
    }

    let chunks = values.chunks_exact(Metric::COUNT);
    let trailing_values = chunks.remainder().to_vec();
    let rows = chunks
        .map(|chunk| {
            let mut row = [0u32; Metric::COUNT];
            row.copy_from_slice(chunk);
            row
        })
        .collect();

    ParseOutcome {
        rows,
        skipped_tokens,
        trailing_values,
    }
}

pub fn run_stage1(samples: &RawSamples, strict: bool) -> Result<Stage1Output, InputError> {
    let mut rows: [Vec<ResponseRow>; Method::COUNT] = Default::default();
    for method in Method::ALL {
        let outcome = parse_sample(samples.text(method));
        if !outcome.is_clean() {
            report_drops(method, &outcome, strict)?;
        }
        tracing::debug!(
            method = method.name(),
            participants = outcome.rows.len(),
            "parsed response rows"
        );
        rows[method.index()] = outcome.rows;
    }
    Ok(Stage1Output { rows })
}

fn report_drops(method: Method, outcome: &ParseOutcome, strict: bool) -> Result<(), InputError> {
    if strict {
        let mut reasons = Vec::new();
        if !outcome.skipped_tokens.is_empty() {
            reasons.push(format!(
                "non-numeric tokens {:?}",
                outcome.skipped_tokens
            ));
        }
        if !outcome.trailing_values.is_empty() {
            reasons.push(format!(
                "{} trailing value(s) {:?} do not form a full group of {}",
                outcome.trailing_values.len(),
                outcome.trailing_values,
                Metric::COUNT
            ));
        }
        return Err(InputError::Rejected(format!(
            "{} sample: {}",
            method.name(),
            reasons.join("; ")
        )));
    }

    if !outcome.skipped_tokens.is_empty() {
        tracing::warn!(
            method = method.name(),
            count = outcome.skipped_tokens.len(),
            tokens = ?outcome.skipped_tokens,
            "skipped non-numeric tokens"
        );
    }
    if !outcome.trailing_values.is_empty() {
        tracing::warn!(
            method = method.name(),
            values = ?outcome.trailing_values,
            "dropped incomplete trailing group"
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_parse.rs"]
mod tests;
