//! Business logic.
use std::io::{self, Write};

use tracing::debug;

use crate::error::Result;
use crate::models::Person;

const GREETING_PREFIX: &str = "Hello, ";
const VERBOSE_SUFFIX: &str = " [verbose mode]";

/// Composes greetings for people.
#[derive(Debug, Clone)]
pub struct GreetingService {
    prefix: &'static str,
    verbose: bool,
}

impl GreetingService {
    /// Create a service with the standard prefix and verbose mode off.
    pub fn new() -> Self {
        GreetingService {
            prefix: GREETING_PREFIX,
            verbose: false,
        }
    }

    /// Greet a person.
    pub fn greet(&self, person: &Person) -> String {
        let name = person.get_name();

        let mut greeting = String::with_capacity(self.prefix.len() + name.len());
        greeting.push_str(self.prefix);
        greeting.push_str(name);
        if self.verbose {
            greeting.push_str(VERBOSE_SUFFIX);
        }

        debug!(name, verbose = self.verbose, "composed greeting");
        greeting
    }

    /// Write the greeting for `person` to `out`, followed by a newline.
    pub fn write_greeting<W: Write>(&self, out: &mut W, person: &Person) -> Result<()> {
        writeln!(out, "{}", self.greet(person))?;
        Ok(())
    }

    /// Print the greeting for `person` to standard output.
    pub fn print_greeting(&self, person: &Person) -> Result<()> {
        self.write_greeting(&mut io::stdout().lock(), person)
    }
}

impl Default for GreetingService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greets_with_prefix() {
        let service = GreetingService::new();
        assert_eq!(service.greet(&Person::new("Alice")), "Hello, Alice");
    }

    #[test]
    fn greets_unnamed_person() {
        let service = GreetingService::default();
        assert_eq!(service.greet(&Person::unnamed()), "Hello, Unnamed");
        assert_eq!(service.greet(&Person::new("")), "Hello, Unnamed");
    }

    #[test]
    fn greeting_matches_prefix_plus_name() {
        let service = GreetingService::new();
        for person in [
            Person::new("Bob"),
            Person::new("  spaced  "),
            Person::new("Zoë"),
            Person::unnamed(),
        ] {
            assert_eq!(
                service.greet(&person),
                format!("Hello, {}", person.get_name())
            );
        }
    }

    #[test]
    fn repeated_greet_is_identical() {
        let service = GreetingService::new();
        let person = Person::new("Alice");
        let first = service.greet(&person);
        let second = service.greet(&person);
        assert_eq!(first, second);
    }

    #[test]
    fn verbose_appends_suffix() {
        let service = GreetingService {
            prefix: GREETING_PREFIX,
            verbose: true,
        };
        assert_eq!(
            service.greet(&Person::new("Alice")),
            "Hello, Alice [verbose mode]"
        );
    }

    #[test]
    fn write_greeting_adds_newline() {
        let service = GreetingService::new();
        let mut out = Vec::new();
        service
            .write_greeting(&mut out, &Person::new("Alice"))
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Hello, Alice\n");
    }

    #[test]
    fn print_greeting_succeeds() {
        let service = GreetingService::new();
        assert!(service.print_greeting(&Person::new("Alice")).is_ok());
    }
}
