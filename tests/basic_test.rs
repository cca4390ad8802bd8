mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{body, capturing};
use console_logging::{Logger, Severity};
use tokio_test::{assert_err, assert_ok};

#[test]
fn severity_gate_holds_for_every_pair() {
    for threshold in Severity::ALL {
        for severity in &Severity::ALL[2..] {
            let (logger, out, err) = capturing(threshold);
            console_logging::log!(logger: logger; *severity, "gate");

            let lines = out.contents().lines().count() + err.contents().lines().count();
            let expected = usize::from(*severity <= threshold);
            assert_eq!(lines, expected, "{severity} at {threshold}");
        }
    }
}

#[test]
fn macros_route_to_the_right_stream() {
    let (logger, out, err) = capturing(Severity::Trace);
    console_logging::info!(logger: logger; "to stdout");
    console_logging::verbose!(logger: logger; "verbose");
    console_logging::debug!(logger: logger; "debug");
    console_logging::warning!(logger: logger; "warning");
    console_logging::error!(logger: logger; "error");

    let out = out.contents();
    assert_eq!(out.lines().count(), 1);
    assert!(body(&out).ends_with("to stdout\n"));

    let err = err.contents();
    let tags: Vec<&str> = err.lines().map(|line| &line[..11]).collect();
    assert_eq!(tags, ["[VERBOSE]  ", "[DEBUG]    ", "[WARNING]  ", "[ERROR]    "]);
}

#[test]
fn rejected_threshold_keeps_the_old_one() {
    let out = common::Capture::default();
    let err = common::Capture::default();
    let logger = Logger::builder()
        .threshold(Severity::Info)
        .ceiling(Severity::Verbose)
        .streams(console_logging::Streams::new(out.clone(), err.clone()))
        .build();

    assert!(!logger.set_threshold(Severity::Debug));
    assert_eq!(logger.threshold(), Severity::Info);
    assert!(logger.set_threshold(Severity::Verbose));
    assert_eq!(logger.threshold(), Severity::Verbose);

    let err = err.contents();
    assert_eq!(err.matches("[ERROR]").count(), 1);
    assert!(err.contains("Invalid log level: 6. Maximum allowed is: 5"));
    assert!(out.contents().is_empty());
}

#[test]
fn rejection_is_written_at_critical_threshold() {
    let out = common::Capture::default();
    let err = common::Capture::default();
    let logger = Logger::builder()
        .threshold(Severity::Critical)
        .ceiling(Severity::Verbose)
        .streams(console_logging::Streams::new(out.clone(), err.clone()))
        .build();

    assert!(!logger.set_threshold(Severity::Trace));
    assert_eq!(logger.threshold(), Severity::Critical);

    let err = err.contents();
    assert_eq!(err.lines().count(), 1);
    assert!(err.starts_with("[ERROR]    "));
    assert!(err.contains("Invalid log level: 7. Maximum allowed is: 5"));
    assert!(out.contents().is_empty());
}

#[test]
fn flag_reports_are_written_at_critical_threshold() {
    let (logger, out, err) = capturing(Severity::Critical);

    logger.release_flag("missing");
    logger.add_flag("x");
    logger.add_flag("x");
    logger.release_flag("x");

    let err = err.contents();
    assert_eq!(err.lines().count(), 2);
    assert_eq!(err.matches("[ERROR]").count(), 1);
    assert_eq!(err.matches("[WARNING]").count(), 1);
    assert_eq!(out.contents().matches("Flag 'x' released after ").count(), 1);
}

#[test]
fn flag_lifecycle() {
    let (logger, out, err) = capturing(Severity::Trace);

    logger.release_flag("missing");
    assert_eq!(err.contents().matches("[ERROR]").count(), 1);
    assert!(out.contents().is_empty());

    logger.add_flag("x");
    std::thread::sleep(Duration::from_millis(150));
    logger.add_flag("x");
    let elapsed = logger.release_flag("x").unwrap();

    assert!(elapsed < Duration::from_millis(150), "{elapsed:?}");
    assert_eq!(err.contents().matches("[WARNING]").count(), 1);
    assert_eq!(out.contents().matches("Flag 'x' released after ").count(), 1);
    assert_eq!(logger.active_flags(), 0);
}

#[test]
fn progress_redraws_on_whole_percent_steps() {
    let (logger, out, _) = capturing(Severity::Info);
    let redraws = (0..500).filter(|&i| logger.report_progress(i, 500)).count();

    // Every whole percentage from 0 to 99 once, then the final 100%.
    assert_eq!(redraws, 101);
    let out = out.contents();
    assert_eq!(out.matches('\r').count(), redraws);
    assert!(out.ends_with("] 100%\r"));
    assert!(!out.contains('\n'));
}

#[test]
fn single_step_progress_is_complete() {
    let (logger, out, _) = capturing(Severity::Info);
    assert!(logger.report_progress(0, 1));
    assert!(out.contents().ends_with("] 100%\r"));
}

#[test]
fn parsing_and_flushing() {
    assert_ok!("verbose".parse::<Severity>());
    assert_err!("chatty".parse::<Severity>());
    assert_err!(Severity::try_from(9u8));

    let (logger, _, _) = capturing(Severity::Info);
    assert_ok!(logger.flush());
}

#[cfg(feature = "singleton")]
#[test]
fn global_logger_is_configured_once() {
    let first: *const Logger = console_logging::logger();
    console_logging::trace!("global ", "handle");
    let second: *const Logger = console_logging::logger();
    assert_eq!(first, second);
}

fn check_lines(contents: &str, tasks: usize, per_task: usize) {
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), tasks * per_task);

    for line in &lines {
        assert!(line.starts_with("[INFO]     "), "{line}");
        let words: Vec<&str> = body(line).split(' ').collect();
        assert_eq!(words.len(), 3, "{line}");
        assert_eq!(words[0], words[2], "{line}");
        assert_eq!(words[1].len(), 64, "{line}");
    }

    for task in 0..tasks {
        for n in 0..per_task {
            let marker = format!("<task-{task}-line-{n}>");
            assert_eq!(contents.matches(&format!("{marker} ")).count(), 1, "{marker}");
        }
    }
}

#[test]
fn threads_never_interleave_characters() {
    let (logger, out, _) = capturing(Severity::Info);
    let logger = Arc::new(logger);

    let handles: Vec<_> = (0..8)
        .map(|task| {
            let logger = logger.clone();
            std::thread::spawn(move || {
                for n in 0..50 {
                    let marker = format!("<task-{task}-line-{n}>");
                    logger.info(&[&marker, &" ", &"x".repeat(64), &" ", &marker]);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    check_lines(&out.contents(), 8, 50);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn blocking_tasks_share_one_logger() {
    let (logger, out, _) = capturing(Severity::Info);
    let logger = Arc::new(logger);

    let mut handles = Vec::new();
    for task in 0..6 {
        let logger = logger.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            for n in 0..40 {
                let marker = format!("<task-{task}-line-{n}>");
                logger.info(&[&marker, &" ", &"y".repeat(64), &" ", &marker]);
            }
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    check_lines(&out.contents(), 6, 40);
}
