//! Categorical breakdowns of directory records.
//!
//! Records are resolved against their label tables (entreprise types,
//! sectors, sub-sectors) and counted per label.

use std::collections::{BTreeMap, HashMap};

use analytics_spi::{Distribution, EntityRecord, GroupedValue, LabelRecord};
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::descriptive;

/// Label used for records whose foreign key does not resolve.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Window, in days, within which an entity counts as recently created.
pub const RECENT_DAYS: i64 = 30;

/// Count of a label and its share of the total, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Share {
    pub count: u64,
    pub percentage: f64,
}

/// Share of every label in a distribution. Percentages are `0` when the
/// distribution is empty.
pub fn shares(distribution: &Distribution) -> BTreeMap<String, Share> {
    let total = distribution.total();
    distribution
        .iter()
        .map(|(label, count)| {
            let percentage = if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            };
            (label.to_string(), Share { count, percentage })
        })
        .collect()
}

/// Breakdown of entities by entreprise type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityAnalytics {
    pub entity_distribution: Distribution,
    pub performance: BTreeMap<String, Share>,
    /// Entities that carry a type id.
    pub total_entities: u64,
    /// Distinct type labels seen.
    pub total_types: usize,
}

/// Count entities per entreprise type name.
///
/// Entities without a type id are ignored; ids missing from `types` (or
/// types without a name) are counted under [`UNKNOWN_LABEL`].
pub fn entity_analytics(entities: &[EntityRecord], types: &[LabelRecord]) -> EntityAnalytics {
    let names = label_lookup(types);

    let distribution = Distribution::from_labels(entities.iter().filter_map(|entity| {
        let id = entity.type_entreprise_id?;
        Some(
            names
                .get(&id)
                .copied()
                .flatten()
                .unwrap_or(UNKNOWN_LABEL),
        )
    }));

    debug!(
        entities = entities.len(),
        typed = distribution.total(),
        types = distribution.len(),
        "computed entity distribution"
    );

    EntityAnalytics {
        performance: shares(&distribution),
        total_entities: distribution.total(),
        total_types: distribution.len(),
        entity_distribution: distribution,
    }
}

/// Entities created recently in one sector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorTrend {
    pub total: u64,
    pub recent: u64,
    /// `recent / total`, in percent.
    pub growth: f64,
}

/// Breakdown of entities by business sector and sub-sector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorAnalysis {
    pub secteurs: Distribution,
    pub sous_secteurs: Distribution,
    /// Sectors with at least one entity.
    pub performance: BTreeMap<String, Share>,
    pub trends: BTreeMap<String, SectorTrend>,
}

/// Count entities per sector and sub-sector.
///
/// Every named sector and sub-sector appears, with zero when no entity
/// references it. `trends` counts entities created in the
/// [`RECENT_DAYS`] days before `now`.
pub fn sector_analysis(
    entities: &[EntityRecord],
    secteurs: &[LabelRecord],
    sous_secteurs: &[LabelRecord],
    now: NaiveDateTime,
) -> SectorAnalysis {
    let mut by_secteur = Distribution::with_labels(secteurs.iter().filter_map(|s| s.nom.clone()));
    let mut by_sous_secteur =
        Distribution::with_labels(sous_secteurs.iter().filter_map(|s| s.nom.clone()));

    let cutoff = now - Duration::days(RECENT_DAYS);
    let mut recent: HashMap<&str, u64> = HashMap::new();

    for entity in entities {
        if let Some(secteur) = entity.secteur() {
            by_secteur.increment(secteur);
            if entity.created_at.is_some_and(|created| created >= cutoff) {
                *recent.entry(secteur).or_insert(0) += 1;
            }
        }
        if let Some(sous_secteur) = entity.sous_secteur() {
            by_sous_secteur.increment(sous_secteur);
        }
    }

    let performance = shares(&by_secteur)
        .into_iter()
        .filter(|(_, share)| share.count > 0)
        .collect();

    let trends = by_secteur
        .iter()
        .filter(|&(_, total)| total > 0)
        .map(|(secteur, total)| {
            let recent = recent.get(secteur).copied().unwrap_or(0);
            let trend = SectorTrend {
                total,
                recent,
                growth: recent as f64 / total as f64 * 100.0,
            };
            (secteur.to_string(), trend)
        })
        .collect();

    debug!(
        entities = entities.len(),
        secteurs = by_secteur.len(),
        sous_secteurs = by_sous_secteur.len(),
        "computed sector analysis"
    );

    SectorAnalysis {
        secteurs: by_secteur,
        sous_secteurs: by_sous_secteur,
        performance,
        trends,
    }
}

/// Summary statistics of one group of observations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStatistics {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub growth_rate: f64,
}

/// Mean, median, standard deviation and growth rate per group, with values
/// taken in input order.
pub fn group_statistics(values: &[GroupedValue]) -> BTreeMap<String, GroupStatistics> {
    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for item in values.iter().filter(|v| v.value.is_finite()) {
        groups.entry(item.group.as_str()).or_default().push(item.value);
    }

    groups
        .into_iter()
        .map(|(group, series)| {
            let stats = GroupStatistics {
                mean: descriptive::mean(&series),
                median: descriptive::median(&series),
                std_dev: descriptive::std_dev(&series),
                growth_rate: descriptive::growth_rate(&series),
            };
            (group.to_string(), stats)
        })
        .collect()
}

fn label_lookup(labels: &[LabelRecord]) -> HashMap<i64, Option<&str>> {
    labels
        .iter()
        .map(|label| (label.id, label.nom.as_deref()))
        .collect()
}
