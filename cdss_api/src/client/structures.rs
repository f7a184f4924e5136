use super::Client;
use crate::{
    parse,
    query::{endpoint, DiversionRecordQuery, StageVolumeQuery, StructureQuery, WaterClassQuery},
    transport::Transport,
    types::{DiversionRecord, DiversionRecordType, Structure, WaterClass},
    Error,
};

impl<T: Transport> Client<T> {
    /// Fetches administrative structures (ditches, wells, reservoirs, ...).
    pub fn get_structures(&self, query: &StructureQuery) -> Result<Vec<Structure>, Error> {
        self.fetch(&endpoint::STRUCTURES, query, parse::structure)
    }

    /// Fetches day, month or year diversion/release records.
    pub fn get_diversion_records_ts(
        &self,
        query: &DiversionRecordQuery,
    ) -> Result<Vec<DiversionRecord>, Error> {
        let endpoint = query.endpoint()?;
        let record_type = query.record_type;
        self.fetch(&endpoint, query, |raw| parse::diversion_record(raw, record_type))
    }

    pub fn get_stage_volume_ts(
        &self,
        query: &StageVolumeQuery,
    ) -> Result<Vec<DiversionRecord>, Error> {
        self.fetch(&endpoint::STAGE_VOLUME, query, |raw| {
            parse::diversion_record(raw, DiversionRecordType::StageVolume)
        })
    }

    pub fn get_water_classes(&self, query: &WaterClassQuery) -> Result<Vec<WaterClass>, Error> {
        self.fetch(&endpoint::WATER_CLASSES, query, parse::water_class)
    }
}
