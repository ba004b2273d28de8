use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BusinessId(pub String);

/// Business record shown to investors in the swipe deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub id: BusinessId,
    pub name: String,
    pub owner: String,
    pub description: String,
    pub funding_needed: f64,
    pub industry: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rated_at: Option<DateTime<Utc>>,
}

/// Investor interest in a business, recorded when the investor swipes right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub investor_id: String,
    pub business_id: BusinessId,
    pub matched_at: DateTime<Utc>,
}

/// Sample businesses the marketplace opens with.
pub fn seed_businesses() -> Vec<Business> {
    vec![
        seeded(
            "1",
            "Artizanat Shqiptar",
            "Arta Krasniqi",
            "Prodhimi i produkteve artizanale tradicionale shqiptare, duke përdorur teknika të trashëguara për breza me materiale lokale për të krijuar punime dore unike.",
            25000.0,
            "Artizanat",
            78,
        ),
        seeded(
            "2",
            "Ferma Organike Malësia",
            "Besnik Gjoni",
            "Fermë organike që prodhon fruta dhe perime pa përdorur pesticide kimike. Fokusohemi në ruajtjen e varieteteve tradicionale dhe praktikat e qëndrueshme të bujqësisë.",
            40000.0,
            "Bujqësi",
            85,
        ),
        seeded(
            "3",
            "TechKosovo",
            "Elona Hoxha",
            "Startup teknologjik që zhvillon aplikacione për të përmirësuar arsimin në zonat rurale të Kosovës, duke i bërë materialet mësimore të disponueshme në gjuhën shqipe.",
            60000.0,
            "Teknologji",
            92,
        ),
        seeded(
            "4",
            "Agro Turizëm Prizren",
            "Dritan Basha",
            "Projekt agro-turizmi që kombinon eksperiencën e një ferme tradicionale me akomodim turistik, duke promovuar kulturën dhe ushqimin autentik të zonës së Prizrenit.",
            50000.0,
            "Turizëm",
            80,
        ),
    ]
}

fn seeded(
    id: &str,
    name: &str,
    owner: &str,
    description: &str,
    funding_needed: f64,
    industry: &str,
    ai_rating: u8,
) -> Business {
    Business {
        id: BusinessId(id.to_string()),
        name: name.to_string(),
        owner: owner.to_string(),
        description: description.to_string(),
        funding_needed,
        industry: industry.to_string(),
        ai_rating: Some(ai_rating),
        rated_at: None,
    }
}
