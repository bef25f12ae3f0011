use libinspector::{FilterError, ListFilter, MalformedInput};
use libpvmisa::instruction::{operation::Operation, register::Register};

use super::{Action, Command, CommandError};

fn action(line: &str) -> Result<Action, CommandError> {
    Command::new(line).action()
}

#[test]
fn hex_word() {
    assert_eq!(action("1023"), Ok(Action::Inspect(0x1023)));
    assert_eq!(action("  0xffff  "), Ok(Action::Inspect(0xFFFF)));
}

#[test]
fn blank_line_does_nothing() {
    assert_eq!(action(""), Ok(Action::Nothing));
    assert_eq!(action("   "), Ok(Action::Nothing));
}

#[test]
fn quit_and_help() {
    assert_eq!(action("q"), Ok(Action::Quit));
    assert_eq!(action("quit"), Ok(Action::Quit));
    assert_eq!(action("help"), Ok(Action::Help));
    assert_eq!(action("makelut"), Ok(Action::MakeLut));
}

#[test]
fn list_with_filters() {
    assert_eq!(
        action("list op=sum src=x"),
        Ok(Action::List(ListFilter {
            operation: Some(Operation::Sum),
            source: Some(Register::X),
            ..Default::default()
        }))
    );
    assert_eq!(action("list"), Ok(Action::List(ListFilter::default())));
}

#[test]
fn malformed_word_is_not_an_encoding_error() {
    assert_eq!(
        action("zz"),
        Err(CommandError::Malformed(MalformedInput::NotHex(
            "zz".to_string()
        )))
    );
}

#[test]
fn bad_filter() {
    assert_eq!(
        action("list foo=bar"),
        Err(CommandError::Filter(FilterError::UnknownKey(
            "foo".to_string()
        )))
    );
}

#[test]
fn trailing_arguments() {
    assert_eq!(
        action("1023 extra"),
        Err(CommandError::UnexpectedArgument("an instruction word"))
    );
    assert_eq!(action("q now"), Err(CommandError::UnexpectedArgument("quit")));
}
