//! Builds the list 4, 7, 4, 9 and reports its length and how often 4 occurs.
//!
//! Set `RUST_LOG` to see the library's log records on stderr.

use std::io;
use std::io::Write;
use lista::List;
use lista::report::ElementCount;
use lista::report::Occurrences;

const VALUES: [i32; 4] = [4, 7, 4, 9];

const TARGET: i32 = 4;

fn demo<W: Write>(out: &mut W, values: &[i32], target: i32) -> io::Result<()> {
  let mut list = List::with_capacity(values.len());

  for &value in values {
    list.append(value);
  }

  writeln!(out, "{}", ElementCount(list.count_elements()))?;
  writeln!(out, "{}", Occurrences(list.count_value(target)))?;

  Ok(())
}

fn main() -> io::Result<()> {
  env_logger::init();

  let stdout = io::stdout();
  let mut out = stdout.lock();

  demo(&mut out, &VALUES, TARGET)
}

#[cfg(test)]
mod tests {
  use super::*;
  use expect_test::expect;

  fn run(values: &[i32], target: i32) -> String {
    let mut out = Vec::new();
    demo(&mut out, values, target).unwrap();
    String::from_utf8(out).unwrap()
  }

  #[test]
  fn test_demo_output() {
    expect![[r#"
        Cantidad de elementos: 4
        El dato se encontró 2 veces.
    "#]].assert_eq(&run(&VALUES, TARGET));
  }

  #[test]
  fn test_demo_output_not_found() {
    expect![[r#"
        Cantidad de elementos: 4
        El dato no fue encontrado.
    "#]].assert_eq(&run(&VALUES, 3));
  }

  #[test]
  fn test_demo_output_empty() {
    expect![[r#"
        Cantidad de elementos: 0
        El dato no fue encontrado.
    "#]].assert_eq(&run(&[], TARGET));
  }
}
