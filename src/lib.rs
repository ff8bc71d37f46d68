#![doc = include_str!("../README.md")]
#![no_std]
#![cfg_attr(feature = "allocator_api", feature(allocator_api))]

use allocator_api2::alloc::Allocator;
use allocator_api2::alloc::Global;
use allocator_api2::vec::Vec;
use core::fmt;
use link::Link;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// SUBMODULES                                                                 //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

pub mod report;

mod link;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PUBLIC TYPE AND TRAIT DEFINITIONS                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// A singly-linked list of integers.
///
/// Nodes live in slots owned by the list and are chained by slot index
/// starting from the head. Appending walks the chain to its last node, so it
/// costs time linear in the length of the list.
///
/// Nodes are only ever added. They are freed together when the list is
/// dropped.

pub struct List<A: Allocator = Global> {
  head: Link,
  slots: Vec<Node, A>,
}

/// The list could not make room for another node.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapacityError;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PRIVATE TYPE AND TRAIT DEFINITIONS                                         //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

struct Node {
  value: i32,
  next: Link,
}

struct Nodes<'a> {
  link: Link,
  slots: &'a [Node],
}

enum Error {
  TooManyNodes,
  ReserveFailed,
}

enum Panicked { }

trait Fail: Sized {
  fn fail<T>(_: Error) -> Result<T, Self>;
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// UTILITY FUNCTIONS                                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

#[inline(always)]
fn unwrap<T>(x: Result<T, Panicked>) -> T {
  match x { Ok(x) => x, Err(e) => match e { } }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Fail                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl Fail for Panicked {
  #[inline(never)]
  #[cold]
  fn fail<T>(e: Error) -> Result<T, Self> {
    match e {
      Error::TooManyNodes =>
        panic!("lista: attempted to append past the last addressable slot!"),
      Error::ReserveFailed =>
        panic!("lista: failed to reserve a slot for a new node!"),
    }
  }
}

impl Fail for CapacityError {
  #[inline(always)]
  fn fail<T>(_: Error) -> Result<T, Self> {
    Err(CapacityError)
  }
}

impl fmt::Display for CapacityError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("no room for another node")
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Nodes                                                                      //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<'a> Iterator for Nodes<'a> {
  type Item = (usize, &'a Node);

  #[inline(always)]
  fn next(&mut self) -> Option<Self::Item> {
    let i = self.link.slot()?;
    let node = self.slots.get(i)?;
    self.link = node.next;
    Some((i, node))
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// List                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

fn append<A, E>(list: &mut List<A>, value: i32) -> Result<(), E>
where
  A: Allocator,
  E: Fail,
{
  let n = list.slots.len();

  let Some(link) = Link::to_slot(n) else {
    return E::fail(Error::TooManyNodes);
  };

  if list.slots.try_reserve(1).is_err() {
    return E::fail(Error::ReserveFailed);
  }

  let last = list.nodes().last().map(|(i, _)| i);

  list.slots.push(Node { value, next: Link::NONE });

  match last {
    None => list.head = link,
    Some(i) => list.slots[i].next = link,
  }

  log::trace!("appended {value} in slot {n}");

  Ok(())
}

impl List<Global> {
  /// Creates an empty list backed by the global allocator.

  pub fn new() -> Self {
    Self::new_in(Global)
  }

  /// Creates an empty list backed by the global allocator, with room for
  /// `capacity` nodes before it needs to grow.

  pub fn with_capacity(capacity: usize) -> Self {
    Self::with_capacity_in(capacity, Global)
  }
}

impl<A: Allocator> List<A> {
  /// Creates an empty list backed by the given allocator.

  pub fn new_in(allocator: A) -> Self {
    Self { head: Link::NONE, slots: Vec::new_in(allocator) }
  }

  /// Creates an empty list backed by the given allocator, with room for
  /// `capacity` nodes before it needs to grow.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn with_capacity_in(capacity: usize, allocator: A) -> Self {
    Self { head: Link::NONE, slots: Vec::with_capacity_in(capacity, allocator) }
  }

  /// Whether the list has no nodes.

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.head.is_none()
  }

  /// The number of nodes reachable from the head. This is zero for an empty
  /// list.

  pub fn count_elements(&self) -> usize {
    let mut n = 0;

    for _ in self.nodes() {
      n = n + 1;
    }

    n
  }

  /// The number of nodes whose value equals `target`.
  ///
  /// When there are none an info-level log record is emitted. Deciding what
  /// to show the user is left to the caller, see
  /// [`Occurrences`](report::Occurrences).

  pub fn count_value(&self, target: i32) -> usize {
    let mut n = 0;

    for (_, node) in self.nodes() {
      if node.value == target {
        n = n + 1;
      }
    }

    if n == 0 {
      log::info!("El dato no fue encontrado: {target}");
    }

    n
  }

  /// Adds a node holding `value` after the current last node.
  ///
  /// # Panics
  ///
  /// Panics if the list already holds `u32::MAX` nodes or on failure to
  /// allocate memory.

  pub fn append(&mut self, value: i32) {
    unwrap(append(self, value))
  }

  /// Adds a node holding `value` after the current last node.
  ///
  /// # Errors
  ///
  /// An error is returned if the list already holds `u32::MAX` nodes or on
  /// failure to allocate memory. The list is unchanged in that case.

  pub fn try_append(&mut self, value: i32) -> Result<(), CapacityError> {
    append(self, value)
  }

  /// A reference to the backing allocator.

  pub fn allocator(&self) -> &A {
    self.slots.allocator()
  }

  #[inline(always)]
  fn nodes(&self) -> Nodes<'_> {
    Nodes { link: self.head, slots: &self.slots }
  }
}

impl Default for List<Global> {
  fn default() -> Self {
    Self::new()
  }
}

impl<A: Allocator> fmt::Debug for List<A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.nodes().map(|(_, node)| node.value)).finish()
  }
}
