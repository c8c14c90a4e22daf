// src/config/schema.rs
//! Fixed section/column layout shared by every class.
//!
//! Header cells on the wiki expand to keys like `core-col-2`; those keys must
//! match a [`ColumnSpec::id`] here or the perk has nowhere to go.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub columns: &'static [ColumnSpec],
}

const fn col(id: &'static str, name: &'static str) -> ColumnSpec {
    ColumnSpec { id, name }
}

pub const SECTIONS: &[SectionSpec] = &[
    SectionSpec {
        id: "core",
        name: "CORE",
        columns: &[
            col("core-col-1", "COMBAT"),
            col("core-col-2", "TACTICS"),
            col("core-col-3", "MASTERY"),
        ],
    },
    SectionSpec {
        id: "team",
        name: "TEAM",
        columns: &[col("team-col-1", "SQUAD")],
    },
    SectionSpec {
        id: "gear",
        name: "GEAR",
        columns: &[
            col("gear-col-1", "PRIMARY"),
            col("gear-col-2", "SECONDARY"),
            col("gear-col-3", "EQUIPMENT"),
        ],
    },
    SectionSpec {
        id: "signature",
        name: "SIGNATURE",
        columns: &[col("signature-col-1", "ABILITY")],
    },
];
