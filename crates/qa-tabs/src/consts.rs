//! Class names and structural constants for the tabs transform.

/// Primary class marking a container for transformation.
pub const TRIGGER_CLASS: &str = "question-answer";

/// Alternate trigger spelling, kept for containers authored against the
/// predecessor pipeline.
pub const TRIGGER_CLASS_LEGACY: &str = "questionanswer";

/// Class the downstream tab renderer matches on emitted panels.
pub const PANEL_CLASS: &str = "panel-tabset";

/// Class applying the question styling to emitted output.
pub const QUESTION_CLASS: &str = "question";

/// Class distinguishing output of this transform from legacy call sites.
///
/// Suppressed whenever the container carried [`TRIGGER_CLASS_LEGACY`], so
/// predecessor content keeps its original class set.
pub const VARIANT_CLASS: &str = "qa-tabs";

/// Attribute key for the per-container selection override.
pub const TARGET_ATTR: &str = "target";

/// Heading level for emitted section titles, independent of the level the
/// sections were split at.
pub const PANEL_HEADING_LEVEL: u8 = 3;

/// Base heading level assumed when a container holds no headings.
pub const DEFAULT_BASE_LEVEL: u8 = 3;

/// Title given to an implicit leading section.
pub const UNTITLED_LABEL: &str = "Untitled";
