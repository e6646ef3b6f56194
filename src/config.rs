// SPDX-License-Identifier: MPL-2.0

use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use cosmic_speed_dial::Orientation;

#[derive(Debug, Clone, CosmicConfigEntry, PartialEq, Eq)]
#[version = 1]
pub struct Config {
    /// Direction the dial expands in
    pub orientation: Orientation,
    /// Base animation speed in milliseconds
    pub animation_speed: u64,
    /// Skip the overlay; the demo closes the dial through the external signal
    pub close_manually: bool,
    /// Treat a short press on the closed dial as a direct action
    pub direct_press: bool,
    /// How many sample actions to populate the dial with
    pub action_count: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            orientation: Orientation::Up,
            animation_speed: 150,
            close_manually: false,
            direct_press: false,
            action_count: 3,
        }
    }
}
