//! Batch command implementation.
//!
//! Records are evaluated on the blocking thread pool, sharing one pipeline.
//! A failing or slow record is reported in its entry and does not stop the
//! others.

use super::read_input;
use crate::cli::BatchArgs;
use crate::config::Config;
use crate::engine::Pipeline;
use crate::error::{CliError, Result};
use crate::input::parse_record;
use crate::output::Formatter;
use greenclaim_domain::FinalVerdict;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

/// Outcome for one input line.
#[derive(Debug)]
pub struct BatchEntry {
    /// 1-based line number in the input
    pub line: usize,
    /// Verdict, or the error message
    pub result: std::result::Result<FinalVerdict, String>,
}

type Evaluator = Arc<dyn Fn(&str) -> Result<FinalVerdict> + Send + Sync>;

/// Execute the batch command.
pub fn execute_batch(
    args: BatchArgs,
    pipeline: Arc<Pipeline>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let contents = read_input(&args.file)?;
    let concurrency = args.concurrency.unwrap_or(config.evaluation.concurrency);
    let timeout_secs = args.timeout.unwrap_or(config.evaluation.timeout_secs);
    if concurrency == 0 || timeout_secs == 0 {
        return Err(CliError::InvalidInput(
            "concurrency and timeout must be greater than 0".to_string(),
        ));
    }

    let evaluate: Evaluator = Arc::new(move |json: &str| Ok(pipeline.run(&parse_record(json)?)?));

    let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
    let entries = runtime.block_on(evaluate_lines(
        evaluate,
        non_empty_lines(&contents),
        concurrency,
        timeout_secs,
    ));
    // Timed-out evaluations may still be running on the blocking pool
    runtime.shutdown_timeout(Duration::from_millis(100));

    println!("{}", formatter.format_batch(&entries)?);

    Ok(())
}

fn non_empty_lines(contents: &str) -> Vec<(usize, String)> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| (i + 1, line.to_string()))
        .collect()
}

async fn evaluate_lines(
    evaluate: Evaluator,
    lines: Vec<(usize, String)>,
    concurrency: usize,
    timeout_secs: u64,
) -> Vec<BatchEntry> {
    let semaphore = Arc::new(Semaphore::new(concurrency));
    let timeout = Duration::from_secs(timeout_secs);

    let handles: Vec<_> = lines
        .into_iter()
        .map(|(line, json)| {
            let semaphore = Arc::clone(&semaphore);
            let evaluate = Arc::clone(&evaluate);
            let handle = tokio::spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|e| format!("Evaluation aborted: {}", e))?;

                let task = tokio::task::spawn_blocking(move || evaluate(&json));
                match tokio::time::timeout(timeout, task).await {
                    Ok(Ok(result)) => result.map_err(|e| e.to_string()),
                    Ok(Err(e)) => Err(format!("Evaluation task failed: {}", e)),
                    Err(_) => Err(CliError::Timeout(timeout_secs).to_string()),
                }
            });
            (line, handle)
        })
        .collect();

    let mut entries = Vec::with_capacity(handles.len());
    for (line, handle) in handles {
        let result = handle
            .await
            .unwrap_or_else(|e| Err(format!("Evaluation task failed: {}", e)));
        match &result {
            Ok(verdict) => debug!(line, label = %verdict.document.label, "Record evaluated"),
            Err(message) => warn!(line, "Record failed: {}", message),
        }
        entries.push(BatchEntry { line, result });
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::engine::{build_pipeline, tests::write_artifacts};
    use greenclaim_domain::{DocumentVerdict, SemanticCategory};
    use std::fs;

    fn fixed(rationale: &'static str) -> Evaluator {
        Arc::new(move |_: &str| {
            Ok(FinalVerdict {
                document: DocumentVerdict::certain_risk(rationale),
                semantic: None,
            })
        })
    }

    #[test]
    fn test_non_empty_lines_keeps_numbers() {
        let lines = non_empty_lines("{\"a\":1}\n\n  \n{\"b\":2}\n");
        assert_eq!(lines.iter().map(|(n, _)| *n).collect::<Vec<_>>(), vec![1, 4]);
    }

    #[tokio::test]
    async fn test_entries_follow_input_order() {
        let lines = (1..=6).map(|i| (i, format!("record {}", i))).collect();
        let entries = evaluate_lines(fixed("risk"), lines, 2, 5).await;
        assert_eq!(entries.iter().map(|e| e.line).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
        assert!(entries.iter().all(|e| e.result.is_ok()));
    }

    #[tokio::test]
    async fn test_failure_is_reported_per_record() {
        let evaluate: Evaluator = Arc::new(|json: &str| {
            if json.contains("bad") {
                Err(CliError::InvalidInput("bad record".to_string()))
            } else {
                Ok(FinalVerdict {
                    document: DocumentVerdict::certain_risk("risk"),
                    semantic: None,
                })
            }
        });
        let lines = vec![(1, "good".to_string()), (2, "bad".to_string()), (3, "good".to_string())];

        let entries = evaluate_lines(evaluate, lines, 4, 5).await;
        assert!(entries[0].result.is_ok());
        assert_eq!(entries[1].result.as_ref().unwrap_err(), "Invalid input: bad record");
        assert!(entries[2].result.is_ok());
    }

    #[tokio::test]
    async fn test_slow_record_times_out() {
        let evaluate: Evaluator = Arc::new(|_: &str| {
            std::thread::sleep(Duration::from_millis(1500));
            Err(CliError::InvalidInput("too late".to_string()))
        });

        let entries = evaluate_lines(evaluate, vec![(1, "slow".to_string())], 1, 1).await;
        assert_eq!(entries[0].result.as_ref().unwrap_err(), "Evaluation timed out after 1s");
    }

    #[test]
    fn test_batch_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_artifacts(dir.path(), 16, [2.0, 0.0]);
        let pipeline = Arc::new(build_pipeline(&config).unwrap());

        let input = dir.path().join("records.jsonl");
        fs::write(
            &input,
            "{\"assertion\": \"100% recyclable\"}\n\n{\"assertion\": \"\"}\n{\"assertion\": \"Reduced emissions\"}\n",
        )
        .unwrap();

        let evaluate: Evaluator = {
            let pipeline = Arc::clone(&pipeline);
            Arc::new(move |json: &str| Ok(pipeline.run(&parse_record(json)?)?))
        };
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let entries = runtime.block_on(evaluate_lines(
            evaluate,
            non_empty_lines(&fs::read_to_string(&input).unwrap()),
            2,
            10,
        ));

        assert_eq!(entries.len(), 3);
        assert!(entries[0].result.as_ref().unwrap().document.rationale.contains("ISO 14021"));
        assert!(entries[1].result.is_err());
        let semantic = entries[2].result.as_ref().unwrap().semantic.as_ref().unwrap();
        assert_eq!(semantic.category, SemanticCategory::Misleading);

        let formatter = Formatter::new(OutputFormat::Table, false);
        execute_batch(
            BatchArgs { file: input, concurrency: Some(2), timeout: None },
            pipeline,
            &config,
            &formatter,
        )
        .unwrap();
    }
}
