//! Search configuration.

/// Tuning for [`super::PathFinder`].
#[derive(Clone, Copy, Debug)]
pub struct SearchCfg {
    /// Keep turnout partial paths warm across `paths_to` calls on one
    /// finder. Off, every call re-derives every turnout result from
    /// scratch. Results are identical either way; keep configurable only
    /// to run controlled comparisons.
    pub keep_partial_paths: bool,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            keep_partial_paths: true,
        }
    }
}
