//! CLI subcommand implementations.

use anyhow::Result;
use cdss_api::Aoi;
use clap::Args;

pub mod analysis;
pub mod calls;
pub mod diversions;
pub mod readings;
pub mod reference;
pub mod stations;
pub mod structures;
pub mod water_rights;
pub mod wells;

/// Spatial search flags shared by the location-based subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct AoiArgs {
    /// Latitude of the search center (decimal degrees)
    #[arg(long, requires = "longitude")]
    pub latitude: Option<f64>,

    /// Longitude of the search center (decimal degrees)
    #[arg(long, requires = "latitude")]
    pub longitude: Option<f64>,

    /// Search radius in miles (default 20)
    #[arg(long)]
    pub radius: Option<f64>,
}

impl AoiArgs {
    pub fn aoi(&self) -> Result<Option<Aoi>> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Ok(Some(Aoi::new(latitude, longitude)?)),
            _ => Ok(None),
        }
    }
}
