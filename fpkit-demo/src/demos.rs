//! The demonstrations, one per capability.
//!
//! Each demonstration writes one line per example, `<Label> Example: <value>`.

use std::io::{self, Write};

use fpkit::collection::{List, TraversableList};
use fpkit::control::Outcome;
use fpkit::optics::{Lens, lens};
use fpkit::typeclass::{Monoid, concat};

use crate::cli::Demo;

#[derive(Clone, Debug, PartialEq)]
struct Person {
    name: String,
    age: u32,
}

/// Runs the selected demonstrations in order, writing their results to `out`.
pub fn run(selection: &[Demo], out: &mut impl Write) -> io::Result<()> {
    for demo in selection {
        tracing::debug!(demo = %demo.name(), "running demonstration");
        match demo {
            Demo::Functor => functor(out)?,
            Demo::Applicative => applicative(out)?,
            Demo::Monad => monad(out)?,
            Demo::StringMonoid => string_monoid(out)?,
            Demo::Foldable => foldable(out)?,
            Demo::Traversable => traversable(out)?,
            Demo::Lens => lens_update(out)?,
        }
    }
    Ok(())
}

fn functor(out: &mut impl Write) -> io::Result<()> {
    let ok_result: Outcome<i32, String> = Outcome::Ok(5);
    writeln!(out, "Functor Example: {}", ok_result.map(|value| value + 1))
}

fn applicative(out: &mut impl Write) -> io::Result<()> {
    let ok_result: Outcome<i32, String> = Outcome::Ok(5);
    let increment = Outcome::of(|value: i32| value + 1);
    writeln!(out, "Applicative Example: {}", ok_result.ap(increment))
}

fn monad(out: &mut impl Write) -> io::Result<()> {
    let ok_result: Outcome<i32, String> = Outcome::Ok(5);
    let chained = ok_result.flat_map(|value| Outcome::Ok(value + 1));
    writeln!(out, "Monad Example: {chained}")?;

    let err_result: Outcome<i32, String> = Outcome::Err("Something went wrong".to_string());
    let short_circuited = err_result.flat_map(|value| Outcome::Ok(value + 1));
    writeln!(out, "Monad Error Example: {short_circuited}")
}

fn string_monoid(out: &mut impl Write) -> io::Result<()> {
    let greeting = concat(
        "Hello".to_string(),
        concat(" World".to_string(), String::empty()),
    );
    writeln!(out, "String Monoid Example: {greeting}")
}

fn foldable(out: &mut impl Write) -> io::Result<()> {
    let numbers = List::new(vec![1, 2, 3, 4]);
    let sum = numbers.reduce(|accumulator, value| accumulator + value, 0);
    writeln!(out, "Foldable Example: {sum}")
}

fn traversable(out: &mut impl Write) -> io::Result<()> {
    let incremented = TraversableList::new(vec![1, 2, 3])
        .traverse(|value| Outcome::<i32, String>::of(value + 1));
    writeln!(out, "Traversable Example: {incremented}")
}

fn lens_update(out: &mut impl Write) -> io::Result<()> {
    let name = lens(
        |person: &Person| &person.name,
        |person: Person, name: String| Person { name, ..person },
    );
    let person = Person {
        name: "John".to_string(),
        age: 30,
    };
    writeln!(out, "Lens Example: {:?}", name.set(person, "Johnny".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn output_of(selection: &[Demo]) -> String {
        let mut buffer = Vec::new();
        run(selection, &mut buffer).unwrap_or_else(|error| panic!("write failed: {error}"));
        String::from_utf8(buffer).unwrap_or_else(|error| panic!("invalid utf-8: {error}"))
    }

    #[rstest]
    #[case(Demo::Functor, "Functor Example: Ok(6)\n")]
    #[case(Demo::Applicative, "Applicative Example: Ok(6)\n")]
    #[case(
        Demo::Monad,
        "Monad Example: Ok(6)\nMonad Error Example: Err(Something went wrong)\n"
    )]
    #[case(Demo::StringMonoid, "String Monoid Example: Hello World\n")]
    #[case(Demo::Foldable, "Foldable Example: 10\n")]
    #[case(Demo::Traversable, "Traversable Example: Ok(TraversableList[2, 3, 4])\n")]
    #[case(
        Demo::Lens,
        "Lens Example: Person { name: \"Johnny\", age: 30 }\n"
    )]
    fn each_demo_prints_its_example(#[case] demo: Demo, #[case] expected: &str) {
        assert_eq!(output_of(&[demo]), expected);
    }

    #[rstest]
    fn empty_selection_prints_nothing() {
        assert_eq!(output_of(&[]), "");
    }

    #[rstest]
    fn full_run_prints_eight_labelled_lines() {
        let output = output_of(&[
            Demo::Functor,
            Demo::Applicative,
            Demo::Monad,
            Demo::StringMonoid,
            Demo::Foldable,
            Demo::Traversable,
            Demo::Lens,
        ]);
        assert_eq!(output.lines().count(), 8);
        assert!(output.lines().all(|line| line.contains(" Example: ")));
    }
}
