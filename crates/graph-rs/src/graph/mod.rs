use std::hash::Hash;

use num_traits::Num;
use serde::{Deserialize, Serialize};

pub mod csr;
pub mod named;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Target<EV> {
    target: usize,
    value: EV,
}

/// A path starting at `start`, every entry of `path` stores the node reached
/// and the cost of the edge used to get there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Path<EV> {
    pub start: usize,
    pub path: Vec<Target<EV>>,
}

impl<EV> Path<EV> {
    pub fn new(start: usize, path: Vec<Target<EV>>) -> Self {
        Self { start, path }
    }

    /// Node ids from start to end, both inclusive.
    pub fn nodes(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::once(self.start).chain(self.path.iter().map(|n| n.target()))
    }
}

impl<EV: Num + Copy> Path<EV> {
    pub fn cost(&self) -> EV {
        self.path.iter().fold(EV::zero(), |c, n| c + n.value)
    }
}

impl<EV> Target<EV> {
    pub fn new(target: usize, value: EV) -> Target<EV> {
        Self { target, value }
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn value(&self) -> &EV {
        &self.value
    }
}

impl<EV> Hash for Target<EV> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.target.hash(state)
    }
}

impl<EV> PartialEq for Target<EV> {
    fn eq(&self, other: &Self) -> bool {
        self.target == other.target
    }
}

impl<EV> Eq for Target<EV> {}

impl Target<()> {
    pub fn new_without_value(target: usize) -> Target<()> {
        self::Target::new(target, ())
    }
}
