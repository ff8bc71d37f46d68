//! Console wording for query results.
//!
//! The queries on [`List`](crate::List) only return numbers. These wrappers
//! pick the message shown for them.

use core::fmt;

/// The result of [`count_elements`](crate::List::count_elements).

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementCount(pub usize);

/// The result of [`count_value`](crate::List::count_value).
///
/// Zero occurrences is reported as "not found" rather than as a count.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Occurrences(pub usize);

impl Occurrences {
  /// Whether the value occurred at least once.

  #[inline(always)]
  pub fn found(self) -> bool {
    self.0 > 0
  }
}

impl fmt::Display for ElementCount {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Cantidad de elementos: {}", self.0)
  }
}

impl fmt::Display for Occurrences {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.found() {
      write!(f, "El dato se encontró {} veces.", self.0)
    } else {
      f.write_str("El dato no fue encontrado.")
    }
  }
}
