use delegating_sample::{CallMode, CallPlan, CallRunner, Driver, LeafPrinter, Relay, SampleError};
use std::io::{self, Write};

fn lines(buf: &[u8]) -> Vec<String> {
    String::from_utf8(buf.to_vec())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

/// A sink whose stream has been closed underneath the writer.
struct ClosedSink;

impl Write for ClosedSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_direct_and_indirect_print_same_six_lines() {
    let driver = Driver::new();

    let mut direct = Vec::new();
    driver.direct_call_to(&mut direct).unwrap();

    let mut indirect = Vec::new();
    driver.indirect_call_to(&mut indirect).unwrap();

    assert_eq!(lines(&direct), vec!["1", "2", "3", "4", "5", "6"]);
    assert_eq!(direct, indirect);
}

#[test]
fn test_direct_then_indirect_on_same_driver_gives_twelve_lines() {
    let driver = Driver::new();
    let mut buf = Vec::new();

    driver.direct_call_to(&mut buf).unwrap();
    driver.indirect_call_to(&mut buf).unwrap();

    let out = lines(&buf);
    assert_eq!(out.len(), 12);
    assert_eq!(out[..6], out[6..]);
    assert_eq!(out[..6], ["1", "2", "3", "4", "5", "6"]);
}

#[test]
fn test_repeated_calls_stay_identical() {
    let driver = Driver::new();

    for _ in 0..5 {
        let mut direct = Vec::new();
        let mut indirect = Vec::new();
        driver.direct_call_to(&mut direct).unwrap();
        driver.indirect_call_to(&mut indirect).unwrap();
        assert_eq!(direct, indirect);
        assert_eq!(direct, b"1\n2\n3\n4\n5\n6\n");
    }
}

#[test]
fn test_standalone_relay_and_leaf_print_tail_only() {
    let mut relay_out = Vec::new();
    Relay::new().forward_to(&mut relay_out).unwrap();
    assert_eq!(lines(&relay_out), vec!["4", "5", "6"]);

    let mut leaf_out = Vec::new();
    LeafPrinter::new().print_sequence_to(&mut leaf_out).unwrap();
    assert_eq!(lines(&leaf_out), vec!["4", "5", "6"]);
}

#[test]
fn test_independent_drivers_do_not_share_output() {
    let first = Driver::new();
    let second = Driver::new();

    let mut first_out = Vec::new();
    first.direct_call_to(&mut first_out).unwrap();
    first.direct_call_to(&mut first_out).unwrap();

    let mut second_out = Vec::new();
    second.direct_call_to(&mut second_out).unwrap();

    assert_eq!(lines(&first_out).len(), 12);
    assert_eq!(lines(&second_out), vec!["1", "2", "3", "4", "5", "6"]);
}

#[test]
fn test_closed_sink_surfaces_io_error() {
    let driver = Driver::new();

    assert!(matches!(
        driver.direct_call_to(&mut ClosedSink),
        Err(SampleError::IoError(_))
    ));
    assert!(matches!(
        driver.indirect_call_to(&mut ClosedSink),
        Err(SampleError::IoError(_))
    ));
    assert!(matches!(
        Relay::new().forward_to(&mut ClosedSink),
        Err(SampleError::IoError(_))
    ));
    assert!(matches!(
        LeafPrinter::new().print_sequence_to(&mut ClosedSink),
        Err(SampleError::IoError(_))
    ));
}

#[test]
fn test_runner_stops_on_first_write_failure() {
    let runner = CallRunner::new(Driver::new(), CallPlan::default());
    let err = runner.run_to(&mut ClosedSink).unwrap_err();
    assert!(!err.is_config_error());
}

#[test]
fn test_runner_follows_plan_order() {
    let plan = CallPlan {
        calls: vec![CallMode::Indirect, CallMode::Direct],
        repeat: 2,
    };
    let runner = CallRunner::new(Driver::new(), plan);

    let mut buf = Vec::new();
    let summary = runner.run_to(&mut buf).unwrap();

    assert_eq!(summary.direct_calls, 2);
    assert_eq!(summary.indirect_calls, 2);
    assert_eq!(summary.lines_written, 24);
    assert_eq!(buf, "1\n2\n3\n4\n5\n6\n".repeat(4).into_bytes());
}

#[test]
fn test_stdout_operations_succeed() {
    let driver = Driver::new();

    LeafPrinter::new().print_sequence().unwrap();
    Relay::new().forward().unwrap();
    driver.direct_call().unwrap();
    driver.indirect_call().unwrap();
    driver.call(CallMode::Indirect).unwrap();

    let summary = CallRunner::new(driver, CallPlan::default()).run().unwrap();
    assert_eq!(summary.total_calls(), 2);
}
