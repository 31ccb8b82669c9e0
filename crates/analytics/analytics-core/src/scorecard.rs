//! Business scorecard over the entity directory.
//!
//! Scores how complete and how diverse the directory is: completeness of the
//! business, contact and products sections, sector and regional spread, and
//! risk. The KPIs feed a ranking of the largest sectors and regions, a fixed
//! action plan and a weighted overall grade.

use std::collections::{BTreeMap, BTreeSet};

use analytics_spi::{AnalyticsError, Distribution, EntityRecord, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Completeness, in percent, at or above which a KPI is green.
pub const COMPLETENESS_TARGET: f64 = 80.0;
const COMPLETENESS_WARNING: f64 = 60.0;

/// Distinct sectors or regions at or above which a KPI is green.
pub const DIVERSITY_TARGET: usize = 5;
const DIVERSITY_WARNING: usize = 3;

/// Entries kept in each ranking.
pub const TOP_RANKED: usize = 5;

/// Traffic-light status of a KPI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KpiStatus {
    Green,
    Yellow,
    Red,
}

impl KpiStatus {
    /// Green at or above `green`, yellow at or above `yellow`, red below.
    pub fn from_thresholds(value: f64, green: f64, yellow: f64) -> Self {
        if value >= green {
            KpiStatus::Green
        } else if value >= yellow {
            KpiStatus::Yellow
        } else {
            KpiStatus::Red
        }
    }
}

/// Risk bucket of an entity's risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// `<= 2` is low, `<= 4` medium, anything above high.
    pub fn from_score(risk: i32) -> Self {
        match risk {
            i32::MIN..=2 => RiskLevel::Low,
            3..=4 => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }
}

/// Directory-wide indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    pub total_entities: u64,
    pub entities_with_business: u64,
    /// Percent of entities with a business section.
    pub business_data_completeness: f64,
    pub entities_with_contact: u64,
    pub contact_data_completeness: f64,
    pub entities_with_products: u64,
    pub products_data_completeness: f64,
    pub sector_diversity: usize,
    /// Distinct non-blank sectors, sorted.
    pub sectors: Vec<String>,
    pub regional_diversity: usize,
    /// Distinct non-blank regions, sorted.
    pub regions: Vec<String>,
    /// Entities per risk bucket; entities without a score are not counted.
    pub risk_distribution: BTreeMap<RiskLevel, u64>,
    /// Mean risk over every entity, a missing score counting as zero.
    pub average_risk: f64,
    pub business_data_status: KpiStatus,
    pub contact_data_status: KpiStatus,
    pub sector_diversity_status: KpiStatus,
    pub regional_diversity_status: KpiStatus,
}

/// One entry of a ranking: a sector or region and its share of all entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedGroup {
    pub name: String,
    pub count: u64,
    pub percentage: f64,
}

/// Largest sectors and regions by entity count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rankings {
    pub top_sectors: Vec<RankedGroup>,
    pub top_regions: Vec<RankedGroup>,
}

/// Priority, impact or effort of an action item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionItem {
    pub title: String,
    pub description: String,
    pub priority: Rating,
    pub impact: Rating,
    pub effort: Rating,
    pub timeline: String,
}

impl ActionItem {
    fn new(
        title: &str,
        description: String,
        (priority, impact, effort): (Rating, Rating, Rating),
        timeline: &str,
    ) -> Self {
        Self {
            title: title.to_string(),
            description,
            priority,
            impact,
            effort,
            timeline: timeline.to_string(),
        }
    }
}

/// Recommended actions grouped by priority.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItems {
    pub high_priority: Vec<ActionItem>,
    pub medium_priority: Vec<ActionItem>,
    pub low_priority: Vec<ActionItem>,
    pub total_actions: usize,
}

/// Letter grade of the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreGrade {
    A,
    B,
    C,
    D,
    F,
}

impl ScoreGrade {
    /// A from 80, then one letter per 10 points down to D at 50.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreGrade::A
        } else if score >= 70.0 {
            ScoreGrade::B
        } else if score >= 60.0 {
            ScoreGrade::C
        } else if score >= 50.0 {
            ScoreGrade::D
        } else {
            ScoreGrade::F
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorecardSummary {
    pub overall_score: f64,
    pub score_grade: ScoreGrade,
    pub highlights: Vec<String>,
    pub performance: Performance,
}

/// The complete business scorecard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scorecard {
    pub kpis: Kpis,
    pub rankings: Rankings,
    pub action_items: ActionItems,
    pub summary: ScorecardSummary,
}

const OPPORTUNITIES: [&str; 4] = [
    "Expand into underserved sectors based on diversity analysis",
    "Increase presence in regions with low coverage",
    "Improve data quality through systematic data collection",
    "Focus on completing missing business and contact information",
];

/// Build the scorecard of a directory.
///
/// Fails with [`AnalyticsError::NoEntities`] when `entities` is empty.
pub fn scorecard(entities: &[EntityRecord]) -> Result<Scorecard> {
    if entities.is_empty() {
        return Err(AnalyticsError::NoEntities);
    }

    let kpis = kpis(entities);
    let rankings = rankings(entities);
    let action_items = action_items(&kpis);
    let summary = summary(&kpis);

    debug!(
        entities = entities.len(),
        score = summary.overall_score,
        grade = ?summary.score_grade,
        actions = action_items.total_actions,
        "scorecard generated"
    );

    Ok(Scorecard {
        kpis,
        rankings,
        action_items,
        summary,
    })
}

fn percent(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Compute the directory KPIs.
pub fn kpis(entities: &[EntityRecord]) -> Kpis {
    let total = entities.len() as u64;
    let count = |has: fn(&EntityRecord) -> bool| entities.iter().filter(|e| has(e)).count() as u64;

    let with_business = count(|e| e.entite_business.is_some());
    let with_contact = count(|e| e.entite_contact.is_some());
    let with_products = count(|e| e.entite_products.is_some());

    let sectors: BTreeSet<&str> = entities
        .iter()
        .filter_map(|e| non_blank(e.secteur()))
        .collect();
    let regions: BTreeSet<&str> = entities.iter().filter_map(EntityRecord::region).collect();

    let mut risk_distribution = BTreeMap::new();
    for risk in entities.iter().filter_map(|e| e.risk) {
        *risk_distribution.entry(RiskLevel::from_score(risk)).or_insert(0) += 1;
    }
    let risk_sum: f64 = entities
        .iter()
        .map(|e| f64::from(e.risk.unwrap_or(0)))
        .sum();
    let average_risk = if entities.is_empty() {
        0.0
    } else {
        risk_sum / entities.len() as f64
    };

    let business_data_completeness = percent(with_business, total);
    let contact_data_completeness = percent(with_contact, total);
    let diversity_status = |n: usize| {
        KpiStatus::from_thresholds(n as f64, DIVERSITY_TARGET as f64, DIVERSITY_WARNING as f64)
    };

    Kpis {
        total_entities: total,
        entities_with_business: with_business,
        business_data_completeness,
        entities_with_contact: with_contact,
        contact_data_completeness,
        entities_with_products: with_products,
        products_data_completeness: percent(with_products, total),
        sector_diversity: sectors.len(),
        regional_diversity: regions.len(),
        sector_diversity_status: diversity_status(sectors.len()),
        regional_diversity_status: diversity_status(regions.len()),
        sectors: sectors.into_iter().map(str::to_string).collect(),
        regions: regions.into_iter().map(str::to_string).collect(),
        risk_distribution,
        average_risk,
        business_data_status: KpiStatus::from_thresholds(
            business_data_completeness,
            COMPLETENESS_TARGET,
            COMPLETENESS_WARNING,
        ),
        contact_data_status: KpiStatus::from_thresholds(
            contact_data_completeness,
            COMPLETENESS_TARGET,
            COMPLETENESS_WARNING,
        ),
    }
}

/// Top sectors and regions by entity count.
///
/// Ties keep name order. Percentages are over all entities, not only those
/// with a sector or region.
pub fn rankings(entities: &[EntityRecord]) -> Rankings {
    let total = entities.len() as u64;
    let top = |distribution: Distribution| {
        let mut groups: Vec<RankedGroup> = distribution
            .iter()
            .map(|(name, count)| RankedGroup {
                name: name.to_string(),
                count,
                percentage: percent(count, total),
            })
            .collect();
        // stable: equal counts stay in name order
        groups.sort_by(|a, b| b.count.cmp(&a.count));
        groups.truncate(TOP_RANKED);
        groups
    };

    Rankings {
        top_sectors: top(Distribution::from_labels(
            entities.iter().filter_map(|e| non_blank(e.secteur())),
        )),
        top_regions: top(Distribution::from_labels(
            entities.iter().filter_map(EntityRecord::region),
        )),
    }
}

/// Actions recommended for the given KPIs.
pub fn action_items(kpis: &Kpis) -> ActionItems {
    use Rating::{High, Low, Medium};

    let mut items = ActionItems::default();

    let completeness = [
        ("Business", kpis.business_data_completeness),
        ("Contact", kpis.contact_data_completeness),
    ];
    for (section, value) in completeness {
        if value < COMPLETENESS_TARGET {
            items.high_priority.push(ActionItem::new(
                &format!("Improve {} Data Completeness", section),
                format!("Current completeness: {:.1}%. Target: 80%+", value),
                (High, High, Medium),
                "30 days",
            ));
        }
    }

    if kpis.sector_diversity < DIVERSITY_TARGET {
        items.medium_priority.push(ActionItem::new(
            "Increase Sector Diversity",
            format!(
                "Current diversity: {} sectors. Target: 5+ sectors",
                kpis.sector_diversity
            ),
            (Medium, Medium, High),
            "60 days",
        ));
    }

    items.low_priority.push(ActionItem::new(
        "Regular Data Quality Review",
        "Schedule monthly data quality assessment".to_string(),
        (Low, Medium, Low),
        "Ongoing",
    ));

    items.total_actions =
        items.high_priority.len() + items.medium_priority.len() + items.low_priority.len();
    items
}

/// Weighted score out of 100.
///
/// Completeness weighs 30% (business) and 20% (contact). Sector and regional
/// diversity add up to 5 points each, and low average risk up to 2.5.
pub fn overall_score(kpis: &Kpis) -> f64 {
    let diversity = |n: usize| n.saturating_mul(5).min(25) as f64;
    kpis.business_data_completeness * 0.3
        + kpis.contact_data_completeness * 0.2
        + diversity(kpis.sector_diversity) * 0.2
        + diversity(kpis.regional_diversity) * 0.2
        + ((5.0 - kpis.average_risk) * 5.0).max(0.0) * 0.1
}

fn summary(kpis: &Kpis) -> ScorecardSummary {
    let overall_score = overall_score(kpis);

    let highlights = vec![
        format!("Total Entities: {}", kpis.total_entities),
        format!(
            "Business Data Completeness: {:.1}%",
            kpis.business_data_completeness
        ),
        format!("Sector Diversity: {} sectors", kpis.sector_diversity),
        format!("Regional Diversity: {} regions", kpis.regional_diversity),
    ];

    let checks = [
        (
            kpis.business_data_completeness >= COMPLETENESS_TARGET,
            "High business data completeness indicates good data quality",
            "Low business data completeness needs improvement",
        ),
        (
            kpis.contact_data_completeness >= COMPLETENESS_TARGET,
            "Good contact data completeness shows strong customer information",
            "Low contact data completeness restricts customer insights",
        ),
        (
            kpis.sector_diversity >= DIVERSITY_TARGET,
            "Good sector diversity shows balanced portfolio",
            "Limited sector diversity increases concentration risk",
        ),
        (
            kpis.regional_diversity >= DIVERSITY_TARGET,
            "Strong regional diversity indicates broad market presence",
            "Limited regional diversity restricts market reach",
        ),
    ];

    let mut performance = Performance {
        opportunities: OPPORTUNITIES.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    };
    for (met, strength, weakness) in checks {
        if met {
            performance.strengths.push(strength.to_string());
        } else {
            performance.weaknesses.push(weakness.to_string());
        }
    }

    ScorecardSummary {
        overall_score,
        score_grade: ScoreGrade::from_score(overall_score),
        highlights,
        performance,
    }
}
