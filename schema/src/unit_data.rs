use serde::{Deserialize, Serialize};

/// Combat stats of a unit. `spd` is optional; a missing speed sorts as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Status {
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    #[serde(default)]
    pub spd: Option<u32>,
}

impl Status {
    pub fn new(hp: u32, atk: u32, def: u32) -> Self {
        Self {
            hp,
            atk,
            def,
            spd: None,
        }
    }

    pub fn with_spd(mut self, spd: u32) -> Self {
        self.spd = Some(spd);
        self
    }

    /// Speed used for turn ordering.
    pub fn effective_spd(&self) -> u32 {
        self.spd.unwrap_or(0)
    }
}

/// A unit as it is offered to a roster, before a join number is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitTemplate {
    pub name: String,
    pub default_status: Status,
}

impl UnitTemplate {
    pub fn new(name: impl Into<String>, default_status: Status) -> Self {
        Self {
            name: name.into(),
            default_status,
        }
    }
}

/// A unit that belongs to a player's roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub name: String,
    pub join_number: u32,
    pub default_status: Status,
}

impl Unit {
    pub fn from_template(template: &UnitTemplate, join_number: u32) -> Self {
        Self {
            name: template.name.clone(),
            join_number,
            default_status: template.default_status,
        }
    }
}
