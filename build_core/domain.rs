use crate::core::DEFAULT_STEP_DELAY_MS;
use serde::Deserialize;

//==================================================================================MANIFEST
// Structures to deserialize `demo_manifest.json`.
#[derive(Debug, Deserialize)]
/// Manifest describing the demonstration sequences.
pub(crate) struct Manifest {
    /// Labels written after each demonstration title, in order.
    pub(crate) countdown: Vec<String>,
    /// Demonstrations, in start order.
    pub(crate) demonstrations: Vec<DemonstrationDef>,
}

#[derive(Debug, Deserialize)]
/// One demonstration entry.
pub(crate) struct DemonstrationDef {
    /// snake_case identifier, also used to name the generated step table.
    pub(crate) name: String,
    /// First label of the sequence.
    pub(crate) title: String,
    /// Start offset from the orchestrator start (ms).
    pub(crate) offset_ms: u32,
    /// Delay between consecutive steps (ms).
    #[serde(default = "default_step_delay_ms")]
    pub(crate) step_delay_ms: u32,
    /// Also emit the final label on the diagnostic log.
    #[serde(default)]
    pub(crate) log_final_step: bool,
}

fn default_step_delay_ms() -> u32 {
    DEFAULT_STEP_DELAY_MS
}

impl DemonstrationDef {
    /// Labels of the full sequence: title first, then the countdown.
    pub(crate) fn labels<'m>(&'m self, countdown: &'m [String]) -> impl Iterator<Item = &'m str> {
        std::iter::once(self.title.as_str()).chain(countdown.iter().map(String::as_str))
    }
}
