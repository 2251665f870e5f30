//! Debugging feature flags.

pub struct LogFlags {
    /// Activate trace_time macro (for cool scope-level timing)
    pub log_performance: bool,

    /// Report every fallback substitution made while validating a snapshot.
    pub log_fallbacks: bool,

    /// Report how many forecast days had to be extrapolated.
    pub log_extrapolation: bool,
}

pub const DEBUG_FLAGS: LogFlags = LogFlags {
    log_performance: false,
    log_fallbacks: true,
    log_extrapolation: true,
};
