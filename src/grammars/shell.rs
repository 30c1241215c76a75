//! A small hierarchical command shell
//!
//! A line is a dotted command path followed by whitespace-separated
//! arguments. The path is resolved first and decides how the arguments are
//! handled, so an unknown command fails before any argument is read.

use crate::alternative::alternative;
use crate::and::AndExt;
use crate::between::delimited_by;
use crate::bind::BindExt;
use crate::error::ParseError;
use crate::join::JoinExt;
use crate::many::many;
use crate::map::MapExt;
use crate::optional::optional;
use crate::parser::{BoxedExt, BoxedParser, Parser};
use crate::pure::fail;
use crate::separated_list::separated_by1;
use crate::some::some;
use crate::text::char::{char, none_of, satisfy};
use crate::text::whitespace::{spaced, white};
use std::collections::BTreeMap;

/// What a command does when run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Print a fixed name
    Name(&'static str),
    /// Describe the command at the path given as first argument
    Help,
    /// Print the arguments joined by spaces
    Echo,
}

#[derive(Debug, Clone)]
pub struct Command {
    pub description: Option<&'static str>,
    pub action: Action,
    pub children: BTreeMap<&'static str, Command>,
}

impl Command {
    pub fn new(action: Action) -> Self {
        Command {
            description: None,
            action,
            children: BTreeMap::new(),
        }
    }

    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn child(mut self, name: &'static str, command: Command) -> Self {
        self.children.insert(name, command);
        self
    }
}

/// A command tree rooted at an unnamed command
#[derive(Debug, Clone)]
pub struct Shell {
    root: Command,
}

impl Default for Shell {
    fn default() -> Self {
        let root = Command::new(Action::Name("root"))
            .child("help", Command::new(Action::Help).describe("Get help of a command."))
            .child("echo", Command::new(Action::Echo).describe("Echo text."))
            .child(
                "foo",
                Command::new(Action::Name("foo")).child("bar", Command::new(Action::Name("bar"))),
            );
        Shell::new(root)
    }
}

impl Shell {
    pub fn new(root: Command) -> Self {
        Shell { root }
    }

    pub fn root(&self) -> &Command {
        &self.root
    }

    /// Walk the tree along `path`
    pub fn find<I, S>(&self, path: I) -> Option<&Command>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        path.into_iter().try_fold(&self.root, |command, segment| {
            command.children.get(segment.as_ref())
        })
    }

    /// Run `command` with `args` and return what it prints
    pub fn execute(&self, command: &Command, args: &[String]) -> String {
        match command.action {
            Action::Name(name) => name.to_string(),
            Action::Echo => args.join(" "),
            Action::Help => self.help(args.first().map(String::as_str).unwrap_or("")),
        }
    }

    fn help(&self, path: &str) -> String {
        let command = if path.is_empty() {
            Some(&self.root)
        } else {
            self.find(path.split('.'))
        };
        let Some(command) = command else {
            return format!("Command '{}' not found.", path);
        };

        let mut text = format!(
            "{}: {}",
            if path.is_empty() { "[root]" } else { path },
            command.description.unwrap_or("[no description]")
        );
        for name in command.children.keys() {
            text.push_str("\n * ");
            text.push_str(name);
        }
        text
    }
}

/// A run of non-whitespace characters
pub fn word<'code>() -> impl Parser<'code, Output = String, Error = ParseError<'code>> {
    some(satisfy(|ch| !ch.is_whitespace())).join()
}

/// Text between double quotes, which may contain whitespace
pub fn quoted_word<'code>() -> impl Parser<'code, Output = String, Error = ParseError<'code>> {
    delimited_by(char('"'), many(none_of("\"")).join(), char('"'))
}

/// Dot-separated command path such as `foo.bar`
pub fn command_path<'code>()
-> impl Parser<'code, Output = Vec<String>, Error = ParseError<'code>> {
    let segment = some(satisfy(|ch| ch != '.' && !ch.is_whitespace())).join();
    separated_by1(segment, char('.'))
}

/// Whitespace-separated arguments after a command path, possibly none
pub fn arguments<'code>()
-> impl Parser<'code, Output = Vec<String>, Error = ParseError<'code>> {
    let argument = alternative((quoted_word(), word()));
    optional(some(white()).right(separated_by1(argument, some(white()))))
        .map(Option::unwrap_or_default)
}

/// Parser that runs a whole command line against `shell`
///
/// Fails with [`ParseError::Custom`] when the path names no command.
pub fn command<'code>(
    shell: &'code Shell,
) -> impl Parser<'code, Output = String, Error = ParseError<'code>> {
    spaced(command_path().bind(move |path| -> BoxedParser<'code, String, ParseError<'code>> {
        match shell.find(&path) {
            Some(command) => arguments()
                .map(move |args| shell.execute(command, &args))
                .boxed(),
            None => fail(ParseError::custom(format!(
                "Command '{}' not found.",
                path.join(".")
            )))
            .boxed(),
        }
    }))
}
