use schema::{Status, UnitTemplate};
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::warn;

const DEFAULT_UNITS_RON: &str = include_str!("../data/default_units.ron");

static DEFAULT_UNITS: LazyLock<HashMap<String, UnitTemplate>> =
    LazyLock::new(|| match parse_default_units(DEFAULT_UNITS_RON) {
        Ok(units) => units,
        Err(e) => {
            warn!(error = %e, "failed to parse default unit catalogue");
            HashMap::new()
        }
    });

fn parse_default_units(
    content: &str,
) -> Result<HashMap<String, UnitTemplate>, ron::error::SpannedError> {
    ron::from_str(content)
}

/// Stand-in handed out for ids that are not in the catalogue.
fn broken_unit() -> UnitTemplate {
    UnitTemplate::new("Broken", Status::new(1, 1, 1).with_spd(0))
}

/// Look up a stock unit by catalogue id. Unknown ids yield the "Broken" unit.
pub fn get_default_unit(unit_id: &str) -> UnitTemplate {
    DEFAULT_UNITS
        .get(unit_id)
        .cloned()
        .unwrap_or_else(broken_unit)
}

/// All catalogue ids, sorted.
pub fn default_unit_ids() -> Vec<&'static str> {
    let mut ids: Vec<&'static str> = DEFAULT_UNITS.keys().map(String::as_str).collect();
    ids.sort_unstable();
    ids
}
