/// Separator between organisation path segments.
pub const PATH_SEPARATOR: char = '/';

/// Top-level path meaning "no organisation assigned".
pub const DEFAULT_ROOT_SENTINEL: &str = "組織";

/// Organisations with fewer prev-side members than this keep their identity
/// when the name is unchanged.
pub const SMALL_ORG_SIZE: usize = 3;

/// Suffix for the disposable segment used by a two-phase rename.
pub const DEFAULT_PLACEHOLDER_SUFFIX: &str = "_temp";

/// Widest rank change still offered for manual review.
pub const DEFAULT_REVIEW_MAX_RANK_DIFF: i32 = 2;

/// Attribute name carrying the employment type of a snapshot row.
pub const EMPLOYEE_TYPE_ATTRIBUTE: &str = "employee_type";

/// Attribute name carrying the external group id of a snapshot row.
pub const GROUP_ID_ATTRIBUTE: &str = "group_id";

/// Config file looked up by `OrgTraceConfig::load`.
pub const CONFIG_FILE_NAME: &str = "orgtrace.toml";
