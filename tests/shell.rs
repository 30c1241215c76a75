use parsecond::eoi::ended;
use parsecond::error::{ErrorKind, ParseError};
use parsecond::grammars::shell::{Action, Command, Shell, command};
use parsecond::parser::run;

fn execute<'code>(shell: &'code Shell, line: &'code str) -> Result<String, ParseError<'code>> {
    run(&ended(command(shell)), line).map(|(output, _)| output)
}

#[test]
fn test_help_lists_root_children() {
    let shell = Shell::default();
    assert_eq!(
        execute(&shell, "help").unwrap(),
        "[root]: [no description]\n * echo\n * foo\n * help"
    );
}

#[test]
fn test_help_for_command() {
    let shell = Shell::default();
    assert_eq!(execute(&shell, "help echo").unwrap(), "echo: Echo text.");
    assert_eq!(execute(&shell, "help foo.bar").unwrap(), "foo.bar: [no description]");
    assert_eq!(execute(&shell, "help nope").unwrap(), "Command 'nope' not found.");
}

#[test]
fn test_echo_arguments() {
    let shell = Shell::default();
    assert_eq!(execute(&shell, "echo hello   world").unwrap(), "hello world");
    assert_eq!(execute(&shell, "echo \"hello   world\" !").unwrap(), "hello   world !");
    assert_eq!(execute(&shell, "echo").unwrap(), "");
}

#[test]
fn test_nested_command() {
    let shell = Shell::default();
    assert_eq!(execute(&shell, "foo.bar").unwrap(), "bar");
    assert_eq!(execute(&shell, "  foo  ").unwrap(), "foo");
}

#[test]
fn test_unknown_command() {
    let shell = Shell::default();
    let error = execute(&shell, "foo.baz").unwrap_err();
    assert!(error.is(ErrorKind::Custom));
    assert_eq!(error, ParseError::custom("Command 'foo.baz' not found."));
    assert_eq!(error.to_string(), "Command 'foo.baz' not found.");
}

#[test]
fn test_unterminated_quote_is_a_word() {
    let shell = Shell::default();
    assert_eq!(execute(&shell, "echo \"open").unwrap(), "\"open");
}

#[test]
fn test_empty_line_is_not_a_command() {
    let shell = Shell::default();
    assert_eq!(execute(&shell, "   "), Err(ParseError::Mismatch));
}

#[test]
fn test_custom_tree() {
    let root = Command::new(Action::Name("top"))
        .child("greet", Command::new(Action::Echo).describe("Say something."))
        .child("help", Command::new(Action::Help));
    let shell = Shell::new(root);

    assert_eq!(
        execute(&shell, "help").unwrap(),
        "[root]: [no description]\n * greet\n * help"
    );
    assert_eq!(execute(&shell, "greet hi there").unwrap(), "hi there");
    assert_eq!(execute(&shell, "help greet").unwrap(), "greet: Say something.");
}
