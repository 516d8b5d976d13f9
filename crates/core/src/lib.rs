mod apply;
mod audit_log;
mod discovery;
mod grouping;
mod planner;
mod record;
mod sanitize;
mod sequence;
mod settings;

pub use apply::{apply_plan, ApplyResult, RenameOutcome};
pub use audit_log::{log_file_name, AuditLog};
pub use discovery::{
    collect_records, discover_files, Discovery, DiscoveryOptions, DiscoveryStats, SkippedFile,
    DEFAULT_EXCLUDED_EXTENSIONS,
};
pub use grouping::{group_key, group_records, sort_records, Group, UNGROUPED_KEY};
pub use planner::{
    compose_stem, generate_plan, Collision, PlannedRename, RenamePlan, RenameStats,
};
pub use record::FileRecord;
pub use sanitize::sanitize_prefix;
pub use sequence::{sequence_token, SequenceError};
pub use settings::{DateMode, RenameSettings, Scheme};
