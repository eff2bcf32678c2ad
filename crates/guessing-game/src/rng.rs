//! Random secret selection.

use crate::ports::SecretPicker;
use rand::Rng;

/// Picks secrets uniformly from 1 through 9 using the thread-local RNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPicker;

impl SecretPicker for RandomPicker {
    fn pick_secret(&mut self) -> u32 {
        rand::thread_rng().gen_range(1..10)
    }
}
