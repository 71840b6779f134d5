mod generator;
use generator::*;

use proptest::prelude::*;

use super::sorted;
use crate::prelude::*;

pub mod state_evolution;

pub mod frontier_equivalence;

const CASES: u32 = 256;
