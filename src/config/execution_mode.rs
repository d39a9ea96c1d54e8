use strum_macros::{Display, EnumIter, EnumString};

//=====================================================================
// How the trials of a run are executed. Trials are independent, so the
// parallel mode only changes how the random stream is partitioned.
//=====================================================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExecutionMode {
    #[default]
    Serial,   // One generator, trials drawn in order
    Parallel, // Independent generator per rayon partition
}
