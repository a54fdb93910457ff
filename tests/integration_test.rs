// Integration tests for the tape interpreter

use tapetty::interpreter::constants::SNAPSHOT_BASE_SIZE;
use tapetty::interpreter::engine::{Interpreter, StepOutcome};
use tapetty::interpreter::errors::{BracketFault, RuntimeError};
use tapetty::interpreter::input::{CallbackInput, QueuedInput};
use tapetty::interpreter::{interpret, interpret_with};

fn run(source: &str) -> Result<String, RuntimeError> {
    interpret_with(source, &mut QueuedInput::default())
}

fn run_with_input(source: &str, input: &str) -> Result<String, RuntimeError> {
    interpret_with(source, &mut QueuedInput::new(input))
}

#[test]
fn test_counter_loop_prints_bang() {
    let output = interpret("++++++++[>++++<-]>+.").expect("Execution failed");
    assert_eq!(output, "!");
}

#[test]
fn test_empty_program() {
    assert_eq!(run("").unwrap(), "");
    assert_eq!(run("no instructions here").unwrap(), "");
}

#[test]
fn test_non_instruction_characters_are_ignored() {
    let noisy = "add eight: ++++ ++++\nloop [ > four ++++ < back - ]\nmove > and bump + then print .";
    let filtered = "++++++++[>++++<-]>+.";
    assert_eq!(run(noisy).unwrap(), run(filtered).unwrap());
}

#[test]
fn test_hello_world() {
    let source = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.";
    assert_eq!(run(source).unwrap(), "Hello World!\n");
}

#[test]
fn test_increment_wraps_past_255() {
    let source = format!("{}.", "+".repeat(256));
    assert_eq!(run(&source).unwrap(), "\0");
}

#[test]
fn test_decrement_wraps_below_zero() {
    assert_eq!(run("-.").unwrap(), "\u{ff}");
}

#[test]
fn test_skipped_loop_body() {
    // Cell is 0, so the body never runs
    assert_eq!(run("[.+.]").unwrap(), "");
}

#[test]
fn test_nested_loops() {
    // 2 * 2 * 2 = 8
    assert_eq!(run("++[>++[>++<-]<-]>>.").unwrap(), "\u{8}");
}

#[test]
fn test_loop_exit_falls_through_close() {
    assert_eq!(run("+[-].").unwrap(), "\0");
}

#[test]
fn test_unclosed_open_is_malformed() {
    assert_eq!(
        run("["),
        Err(RuntimeError::MalformedProgram {
            fault: BracketFault::UnclosedOpen,
            position: 0,
        })
    );
    assert_eq!(
        run("[[]"),
        Err(RuntimeError::MalformedProgram {
            fault: BracketFault::UnclosedOpen,
            position: 0,
        })
    );
}

#[test]
fn test_unmatched_close_is_malformed() {
    assert_eq!(
        run("]"),
        Err(RuntimeError::MalformedProgram {
            fault: BracketFault::UnmatchedClose,
            position: 0,
        })
    );
    // Positions index the filtered stream
    assert_eq!(
        run("[ x ] y ]"),
        Err(RuntimeError::MalformedProgram {
            fault: BracketFault::UnmatchedClose,
            position: 2,
        })
    );
}

#[test]
fn test_malformed_program_produces_no_output() {
    // The '.' would run first if brackets were checked lazily
    let err = run("+++.[").unwrap_err();
    assert!(matches!(err, RuntimeError::MalformedProgram { .. }));
}

#[test]
fn test_tape_underflow_is_fatal() {
    assert_eq!(run("<"), Err(RuntimeError::TapeUnderflow { position: 0 }));
    assert_eq!(
        run("+.><<"),
        Err(RuntimeError::TapeUnderflow { position: 4 })
    );
}

#[test]
fn test_input_is_written_to_cell() {
    assert_eq!(run_with_input(",.", "x").unwrap(), "x");
    assert_eq!(run_with_input(",+.", "x").unwrap(), "y");
}

#[test]
fn test_echo_until_zero() {
    assert_eq!(run_with_input(",[.,]", "abc\0").unwrap(), "abc");
}

#[test]
fn test_input_out_of_range() {
    assert_eq!(
        run_with_input(",.", "€"),
        Err(RuntimeError::InputOutOfRange {
            ch: '€',
            position: 0
        })
    );
}

#[test]
fn test_exhausted_input_source() {
    let err = run(",.").unwrap_err();
    assert!(matches!(err, RuntimeError::InputUnavailable { .. }));
}

#[test]
fn test_callback_input_source() {
    let mut calls = 0;
    let mut source = CallbackInput(|| {
        calls += 1;
        Ok::<char, RuntimeError>('k')
    });
    let output = interpret_with(",.,.", &mut source).unwrap();
    assert_eq!(output, "kk");
    assert_eq!(calls, 2);
}

#[test]
fn test_stepwise_execution() {
    let mut interpreter = Interpreter::new("+>+").expect("Load failed");
    assert_eq!(interpreter.step(), Ok(StepOutcome::Executed));
    assert_eq!(interpreter.machine().cells(), &[1]);
    assert_eq!(interpreter.step(), Ok(StepOutcome::Executed));
    assert_eq!(interpreter.machine().cursor(), 1);
    assert_eq!(interpreter.step(), Ok(StepOutcome::Executed));
    assert_eq!(interpreter.machine().cells(), &[1, 1]);
    assert!(interpreter.is_finished());
    assert_eq!(interpreter.step(), Ok(StepOutcome::Finished));
    assert_eq!(interpreter.steps_executed(), 3);
}

#[test]
fn test_taken_jump_lands_past_partner() {
    // '[' at 0 jumps to its partner at 2, then moves past it to the final '+'
    let mut interpreter = Interpreter::new("[+]+").unwrap();
    interpreter.step().unwrap();
    assert_eq!(interpreter.position(), 3);
    interpreter.step().unwrap();
    assert_eq!(interpreter.machine().current_value(), 1);
    assert!(interpreter.is_finished());
}

#[test]
fn test_step_pauses_for_input() {
    let mut interpreter = Interpreter::new(",.").unwrap();
    assert_eq!(interpreter.step(), Ok(StepOutcome::NeedsInput));
    assert!(interpreter.awaiting_input());
    // Stepping again does not skip the pending ','
    assert_eq!(interpreter.step(), Ok(StepOutcome::NeedsInput));
    assert_eq!(interpreter.position(), 0);

    interpreter.provide_input('q').unwrap();
    assert!(!interpreter.awaiting_input());
    assert_eq!(interpreter.step(), Ok(StepOutcome::Executed));
    assert_eq!(interpreter.output().as_str(), "q");
}

#[test]
fn test_unexpected_input_is_rejected() {
    let mut interpreter = Interpreter::new("+").unwrap();
    assert_eq!(
        interpreter.provide_input('a'),
        Err(RuntimeError::InputNotExpected { position: 0 })
    );
}

#[test]
fn test_history_step_backward_and_replay() {
    let mut interpreter = Interpreter::new("+++.")
        .unwrap()
        .with_history(1024 * 1024)
        .unwrap();
    assert_eq!(interpreter.total_snapshots(), 1);

    for _ in 0..4 {
        assert_eq!(interpreter.step_forward(), Ok(StepOutcome::Executed));
    }
    assert_eq!(interpreter.total_snapshots(), 5);
    assert_eq!(interpreter.output().as_str(), "\u{3}");

    interpreter.step_backward().unwrap();
    assert_eq!(interpreter.machine().current_value(), 3);
    assert_eq!(interpreter.output().as_str(), "");
    assert!(!interpreter.is_finished());

    interpreter.rewind_to_start().unwrap();
    assert_eq!(interpreter.position(), 0);
    assert_eq!(interpreter.machine().current_value(), 0);
    assert!(interpreter.step_backward().is_err());

    // Replaying does not add snapshots
    interpreter.step_forward().unwrap();
    assert_eq!(interpreter.history_position(), 1);
    assert_eq!(interpreter.machine().current_value(), 1);
    assert_eq!(interpreter.total_snapshots(), 5);
}

#[test]
fn test_live_step_after_rewind_discards_future() {
    let mut interpreter = Interpreter::new("+++").unwrap().with_history(1024).unwrap();
    while interpreter.step_forward() == Ok(StepOutcome::Executed) {}
    assert_eq!(interpreter.total_snapshots(), 4);

    interpreter.rewind_to_start().unwrap();
    interpreter.step().unwrap();
    assert_eq!(interpreter.total_snapshots(), 2);
    assert_eq!(interpreter.history_position(), 1);
}

#[test]
fn test_snapshot_limit_exceeded() {
    // Each snapshot of a one-cell tape with no output costs SNAPSHOT_BASE_SIZE + 1
    let per_snapshot = SNAPSHOT_BASE_SIZE + 1;
    let mut interpreter = Interpreter::new("+++")
        .unwrap()
        .with_history(per_snapshot * 2)
        .unwrap();

    assert_eq!(interpreter.step(), Ok(StepOutcome::Executed));
    let err = interpreter.step().unwrap_err();
    assert!(matches!(err, RuntimeError::SnapshotLimitExceeded { .. }));
}

#[test]
fn test_refused_snapshot_leaves_state_unchanged() {
    let per_snapshot = SNAPSHOT_BASE_SIZE + 1;
    let mut interpreter = Interpreter::new("++++")
        .unwrap()
        .with_history(per_snapshot * 2)
        .unwrap();

    interpreter.step().unwrap();
    for _ in 0..3 {
        assert!(matches!(
            interpreter.step(),
            Err(RuntimeError::SnapshotLimitExceeded { .. })
        ));
        assert_eq!(interpreter.machine().current_value(), 1);
        assert_eq!(interpreter.position(), 1);
        assert_eq!(interpreter.steps_executed(), 1);
        assert_eq!(interpreter.history_position(), 1);
        assert_eq!(interpreter.total_snapshots(), 2);
    }

    // Every recorded state is still one step apart
    interpreter.step_backward().unwrap();
    assert_eq!(interpreter.machine().current_value(), 0);
    assert_eq!(interpreter.position(), 0);
}

#[test]
fn test_refused_snapshot_after_input_reopens_prompt() {
    let per_snapshot = SNAPSHOT_BASE_SIZE + 1;
    let mut interpreter = Interpreter::new(",.")
        .unwrap()
        .with_history(per_snapshot)
        .unwrap();

    assert_eq!(interpreter.step(), Ok(StepOutcome::NeedsInput));
    assert!(interpreter.provide_input('z').is_err());
    assert_eq!(interpreter.machine().current_value(), 0);
    assert_eq!(interpreter.position(), 0);
    assert_eq!(interpreter.step(), Ok(StepOutcome::NeedsInput));
}

#[test]
fn test_error_display() {
    let err = run("]").unwrap_err();
    assert_eq!(err.position(), Some(0));
    assert!(err.to_string().contains("no matching '['"));

    let err = run("<").unwrap_err();
    assert!(err.to_string().contains("Tape underflow"));
}
