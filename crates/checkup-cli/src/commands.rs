use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span, trace};

use checkup_core::{CheckupProcessor, STATION_CATALOG};
use checkup_ingest::read_workbook;
use checkup_model::ProcessingResult;

use crate::cli::ProcessArgs;
use crate::config::load_options;
use crate::logging::redact_value;
use crate::summary::catalog_table;

/// What a successful `process` run produced.
#[derive(Debug)]
pub struct ProcessOutcome {
    pub result: ProcessingResult,
    /// Set when the JSON went to a file rather than stdout.
    pub output: Option<PathBuf>,
}

pub fn run_stations() -> Result<()> {
    STATION_CATALOG.validate().context("validate station catalog")?;
    println!("{}", catalog_table(&STATION_CATALOG));
    Ok(())
}

pub fn run_process(args: &ProcessArgs) -> Result<ProcessOutcome> {
    let span = info_span!("run", input = %args.input.display());
    let _guard = span.enter();

    let options = load_options(args.config.as_deref())?;
    let workbook = read_workbook(&args.input)?;
    let result = CheckupProcessor::new(options).process_workbook(&workbook)?;
    log_persons(&result);

    let json = render_json(&result, args.compact).context("serialize result")?;
    match &args.output {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(output = %path.display(), "wrote result");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes()).context("write result")?;
            writeln!(stdout).context("write result")?;
        }
    }
    Ok(ProcessOutcome {
        result,
        output: args.output.clone(),
    })
}

/// Serializes a result as pretty or single-line JSON.
pub fn render_json(result: &ProcessingResult, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(result)
    } else {
        serde_json::to_string_pretty(result)
    }
}

fn log_persons(result: &ProcessingResult) {
    for person in &result.persons {
        trace!(
            employee_id = redact_value(&person.employee_id),
            name = redact_value(&person.name),
            status = %person.status,
            pending = person.uncompleted_stations.len(),
            "person derived"
        );
    }
}
