//! Tests built on hand-written trait impls, the way payload types opt into
//! custom wire layouts.

use mempack::error::{Error, ErrorKind};
use mempack::packer::Packer;
use mempack::serialize::{Deserialize, Serialize, Serializer};

mod layout;

/// Per-phase surface rates. The `total` member is derived, so the impls
/// leave it out of the wire format and refresh it after a read.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct PhaseRates {
    pub oil: f64,
    pub gas: f64,
    pub water: f64,
    pub total: f64,
}

impl PhaseRates {
    pub fn new(oil: f64, gas: f64, water: f64) -> Self {
        Self { oil, gas, water, total: oil + gas + water }
    }
}

impl Serialize for PhaseRates {
    fn serialize<P: Packer>(&self, serializer: &mut Serializer<'_, P>) -> Result<(), Error> {
        self.oil.serialize(serializer)?;
        self.gas.serialize(serializer)?;
        self.water.serialize(serializer)
    }
}

impl Deserialize for PhaseRates {
    fn deserialize<P: Packer>(&mut self, serializer: &mut Serializer<'_, P>) -> Result<(), Error> {
        self.oil.deserialize(serializer)?;
        self.gas.deserialize(serializer)?;
        self.water.deserialize(serializer)?;
        self.total = self.oil + self.gas + self.water;
        Ok(())
    }
}

/// A three-alternative target mode, implemented by hand the way the derive
/// would lay it out: a leading index, then the active alternative's payload.
#[derive(Debug, PartialEq, Clone)]
pub enum WellTarget {
    Rate(f64),
    Pressure(f64),
    Shut,
}

impl Default for WellTarget {
    fn default() -> Self {
        WellTarget::Shut
    }
}

impl Serialize for WellTarget {
    fn serialize<P: Packer>(&self, serializer: &mut Serializer<'_, P>) -> Result<(), Error> {
        match self {
            WellTarget::Rate(target) => {
                0usize.serialize(serializer)?;
                target.serialize(serializer)
            }
            WellTarget::Pressure(target) => {
                1usize.serialize(serializer)?;
                target.serialize(serializer)
            }
            WellTarget::Shut => 2usize.serialize(serializer),
        }
    }
}

impl Deserialize for WellTarget {
    fn deserialize<P: Packer>(&mut self, serializer: &mut Serializer<'_, P>) -> Result<(), Error> {
        let mut index = 0usize;
        index.deserialize(serializer)?;
        *self = match index {
            0 => WellTarget::Rate(0.0),
            1 => WellTarget::Pressure(0.0),
            2 => WellTarget::Shut,
            _ => return Err(ErrorKind::InvalidVariant.into()),
        };
        match self {
            WellTarget::Rate(target) | WellTarget::Pressure(target) => target.deserialize(serializer),
            WellTarget::Shut => Ok(()),
        }
    }
}
