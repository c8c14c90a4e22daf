// src/model.rs
//! Output shape of `data/<class>.json`. Field order here is key order in the file.

use serde::{Deserialize, Serialize};

use crate::config::consts::RESOURCES_SUBDIR;
use crate::config::schema::SectionSpec;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub sections: Vec<Section>,
    pub prestige: Vec<PrestigePerk>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub name: String,
    pub columns: Vec<Column>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub name: String,
    pub perks: Vec<Perk>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Perk {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

/// A row of the prestige list. A row made only of rank counters serializes as `{}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrestigePerk {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

impl ClassDescriptor {
    /// Empty descriptor for `class_name` with every section and column in place.
    pub fn skeleton(class_name: &str, sections: &[SectionSpec]) -> Self {
        let id = class_name.to_lowercase();
        let icon = format!("{RESOURCES_SUBDIR}/{class_name}/{id}classicon.webp");
        let sections = sections
            .iter()
            .map(|s| Section {
                id: s!(s.id),
                name: s!(s.name),
                columns: s
                    .columns
                    .iter()
                    .map(|c| Column { id: s!(c.id), name: s!(c.name), perks: Vec::new() })
                    .collect(),
            })
            .collect();

        Self { id, name: s!(class_name), icon, sections, prestige: Vec::new() }
    }

    pub fn column_mut(&mut self, column_id: &str) -> Option<&mut Column> {
        self.sections
            .iter_mut()
            .flat_map(|s| s.columns.iter_mut())
            .find(|c| c.id == column_id)
    }

    pub fn perk_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| &s.columns)
            .map(|c| c.perks.len())
            .sum()
    }
}
