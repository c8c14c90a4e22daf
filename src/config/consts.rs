// src/config/consts.rs

// Net config
pub const WIKI_API: &str = "https://spacemarine2.fandom.com/api.php";
pub const USER_AGENT: &str = concat!("sm2_scrape/", env!("CARGO_PKG_VERSION"));

// Export
pub const DEFAULT_ROOT: &str = ".";
pub const DATA_SUBDIR: &str = "data";
pub const RESOURCES_SUBDIR: &str = "resources";

// Page markup
pub const PERK_TREE_CLASS: &str = "perktree-table";
pub const PERK_LIST_CLASS: &str = "perklist-table";
/// Largest `colspan` HTML allows; bigger values are treated as malformed.
pub const MAX_COLSPAN: usize = 1000;
/// Zero-based index of the prestige table among the perk-list tables.
/// The first one lists regular perks.
pub const PRESTIGE_TABLE_INDEX: usize = 1;

/// Wiki page names, one per playable class, in output order.
pub const CLASSES: &[&str] = &["Assault", "Bulwark", "Vanguard", "Tactical", "Heavy", "Sniper"];
