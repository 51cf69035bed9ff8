// SPDX-License-Identifier: MPL-2.0
pub mod region_probe;

pub use region_probe::RegionProbe;
