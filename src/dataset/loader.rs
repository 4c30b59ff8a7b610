// TOON / JSON documents -> Dataset
//
// Documents carry three top level keys: skills, positions, people.
// Positions and people may use either `requirements`/`acquired` or the
// older `skills_needed`/`skills_acquired` field names.
use crate::dataset::Dataset;
use crate::error::DatasetError;

impl Dataset {
    pub fn from_toon(input: &str) -> Result<Self, DatasetError> {
        //decode to a generic value first, then let serde apply aliases/defaults
        let value: serde_json::Value =
            toon_format::decode_default(input).map_err(|e| DatasetError::Toon(e.to_string()))?;
        let dataset: Dataset = serde_json::from_value(value)?;
        dataset.log_loaded("toon");
        Ok(dataset)
    }

    pub fn to_toon(&self) -> Result<String, DatasetError> {
        let value = serde_json::to_value(self)?;
        toon_format::encode_default(&value).map_err(|e| DatasetError::Encode(e.to_string()))
    }

    pub fn from_json(input: &str) -> Result<Self, DatasetError> {
        let dataset: Dataset = serde_json::from_str(input)?;
        dataset.log_loaded("json");
        Ok(dataset)
    }

    pub fn to_json(&self) -> Result<String, DatasetError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn log_loaded(&self, format: &str) {
        tracing::debug!(
            format,
            skills = self.skills.len(),
            positions = self.positions.len(),
            people = self.people.len(),
            "dataset loaded"
        );
    }
}
