//! Typed records at the data-access boundary.
//!
//! Backend payloads are decoded into these once; the engine never reads raw
//! JSON. Unknown fields are ignored.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Business section of an entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntiteBusiness {
    #[serde(default)]
    pub secteur: Option<String>,
    #[serde(default)]
    pub sous_secteur: Option<String>,
}

/// Contact section of an entity. Only its presence is scored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntiteContact {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Products section of an entity. Only its presence is scored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntiteProducts {
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

/// An entity ("entite") as listed by the directory backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub type_entreprise_id: Option<i64>,
    #[serde(default)]
    pub entite_business: Option<EntiteBusiness>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub region: Option<String>,
    /// Risk score, lower is safer.
    #[serde(default)]
    pub risk: Option<i32>,
    #[serde(default)]
    pub entite_contact: Option<EntiteContact>,
    #[serde(default)]
    pub entite_products: Option<EntiteProducts>,
}

impl EntityRecord {
    /// Business sector, if the entity has one.
    pub fn secteur(&self) -> Option<&str> {
        self.entite_business.as_ref()?.secteur.as_deref()
    }

    /// Business sub-sector, if the entity has one.
    pub fn sous_secteur(&self) -> Option<&str> {
        self.entite_business.as_ref()?.sous_secteur.as_deref()
    }

    /// Region, unless missing or blank.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref().filter(|r| !r.trim().is_empty())
    }
}

/// An id/name pair: entreprise types, sectors and sub-sectors all share it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelRecord {
    pub id: i64,
    #[serde(default)]
    pub nom: Option<String>,
}

impl LabelRecord {
    pub fn new(id: i64, nom: impl Into<String>) -> Self {
        Self {
            id,
            nom: Some(nom.into()),
        }
    }
}

/// A numeric observation tagged with its group (sector, type, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedValue {
    pub group: String,
    pub value: f64,
}

impl GroupedValue {
    pub fn new(group: impl Into<String>, value: f64) -> Self {
        Self {
            group: group.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_record_decodes_camel_case() {
        let json = r#"{
            "id": 7,
            "typeEntrepriseId": 2,
            "nom": "Atlas Textiles",
            "entiteBusiness": {"secteur": "Industrie", "sousSecteur": "Textile", "risk": 3},
            "createdAt": "2024-03-01T09:30:00"
        }"#;
        let record: EntityRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, Some(7));
        assert_eq!(record.type_entreprise_id, Some(2));
        assert_eq!(record.secteur(), Some("Industrie"));
        assert_eq!(record.sous_secteur(), Some("Textile"));
        assert!(record.created_at.is_some());
    }

    #[test]
    fn test_entity_record_missing_sections() {
        let record: EntityRecord = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(record.secteur(), None);
        assert_eq!(record.type_entreprise_id, None);
    }

    #[test]
    fn test_entity_record_scorecard_sections() {
        let json = r#"{
            "id": 9,
            "region": "Souss-Massa",
            "risk": 4,
            "entiteContact": {"email": "info@example.ma", "isPrimary": true},
            "entiteProducts": {"productName": "Argan oil", "price": 12.5}
        }"#;
        let record: EntityRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.region(), Some("Souss-Massa"));
        assert_eq!(record.risk, Some(4));
        assert_eq!(
            record.entite_contact.unwrap().email.as_deref(),
            Some("info@example.ma")
        );
        assert_eq!(record.entite_products.unwrap().price, Some(12.5));

        let blank: EntityRecord = serde_json::from_str(r#"{"region": "  "}"#).unwrap();
        assert_eq!(blank.region(), None);
    }

    #[test]
    fn test_label_record_without_name() {
        let record: LabelRecord = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(record.nom, None);
    }
}
