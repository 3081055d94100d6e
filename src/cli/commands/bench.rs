use crate::cli::Output;
use crate::config::BenchConfig;
use crate::harness::{ComparisonHarness, FileComparison};
use crate::parallel::ParallelCountEngine;
use crate::process::{BatchSummary, MultiProcessDriver};
use crate::utils::Timed;
use crate::utils::rusage::ResourceUsage;
use anyhow::Result;

pub fn execute(output: &Output, worker_flags: Vec<String>) -> Result<()> {
    let config = BenchConfig::default();
    config.validate()?;

    output.verbose(&format!(
        "{} counting threads per file, {:?} partitioning, top {} words",
        config.workers, config.partition_policy, config.top_n
    ));

    // Phase 1: single-threaded vs thread pool, file by file
    output.header("Single-threaded vs multi-threaded");
    let engine = ParallelCountEngine::new(config.workers, config.partition_policy);
    let harness = ComparisonHarness::new(engine);
    for path in &config.files {
        let result = harness.compare_file(path)?;
        report_comparison(output, &result);
    }

    // Phase 2: one process per file, each running the thread pool
    output.header("Multiprocessing + multithreading");
    let driver = MultiProcessDriver::from_current_exe()?.with_global_args(worker_flags);
    let batch = driver.run(&config.files)?;
    report_batch(output, &batch);

    report_resource_usage(output);
    Ok(())
}

fn report_comparison(output: &Output, result: &FileComparison) {
    let comparison = &result.comparison;
    let path = result.path.display();

    output.section_header(&format!("Processing file: {path}"));
    output.timing_row("Single-threaded time:", comparison.single.elapsed);
    output.timing_row("Multi-threaded time:", comparison.parallel.elapsed);
    if let Some(speedup) = comparison.speedup() {
        output.table_row("Speedup:", &format!("{speedup:.2}x"));
    }
    output.verbose(&format!(
        "{} words, {} distinct (single-threaded)",
        comparison.single.value.total(),
        comparison.single.value.distinct()
    ));

    if comparison.matches() {
        output.success(&format!("Results match for file: {path}"));
    } else {
        output.warning(&format!(
            "Results mismatch for file: {path} ({} words differ)",
            comparison.divergence()
        ));
    }
}

fn report_batch(output: &Output, batch: &Timed<BatchSummary>) {
    for report in &batch.value.reports {
        output.table_row(
            &format!("Word count in file: {}", report.path.display()),
            &report.distinct_words.to_string(),
        );
    }
    output.total(
        "Total word count across all files:",
        &batch.value.total_distinct.to_string(),
    );
    output.timing_row(
        "Elapsed time for multiprocessing + multithreading:",
        batch.elapsed,
    );
}

fn report_resource_usage(output: &Output) {
    output.header("Resource Usage");
    for (label, usage) in [
        ("this process", ResourceUsage::for_self()),
        ("worker processes", ResourceUsage::for_children()),
    ] {
        match usage {
            Ok(usage) => {
                output.section_header(&format!("Resource usage ({label})"));
                output.timing_row("CPU time used (user):", usage.user_cpu);
                output.timing_row("CPU time used (system):", usage.system_cpu);
                output.table_row(
                    "Maximum memory usage:",
                    &format!("{} kilobytes", usage.max_rss_kb),
                );
            }
            Err(e) => output.error(&format!("Error retrieving resource usage data: {e}")),
        }
    }
}
