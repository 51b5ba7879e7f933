use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Étiquette d'un jour de repos.
pub const OFF: &str = "OFF";
/// Étiquette d'un employé en congés toute la semaine (orthographe héritée).
pub const HOLYDAYS: &str = "HOLYDAYS";

/// Type de turno : trois blocs fixes de 8 heures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShiftKind {
    /// Nocturno, heures 0–7.
    Night,
    /// Mañana, heures 8–15.
    Morning,
    /// Tarde, heures 16–23.
    Afternoon,
}

impl ShiftKind {
    /// Ordre canonique d'attribution : N, M, T.
    pub const ALL: [ShiftKind; 3] = [ShiftKind::Night, ShiftKind::Morning, ShiftKind::Afternoon];

    pub fn index(self) -> usize {
        match self {
            ShiftKind::Night => 0,
            ShiftKind::Morning => 1,
            ShiftKind::Afternoon => 2,
        }
    }

    /// Code court utilisé dans les étiquettes et avertissements.
    pub fn code(self) -> &'static str {
        match self {
            ShiftKind::Night => "N",
            ShiftKind::Morning => "M",
            ShiftKind::Afternoon => "T",
        }
    }

    /// Bloc horaire contenant `hour`, ou `None` hors 0–23.
    pub fn from_hour(hour: u32) -> Option<ShiftKind> {
        match hour {
            0..=7 => Some(ShiftKind::Night),
            8..=15 => Some(ShiftKind::Morning),
            16..=23 => Some(ShiftKind::Afternoon),
            _ => None,
        }
    }
}

/// Employé d'une zone : un nom (unique dans la zone) et un drapeau congés.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    #[serde(default)]
    pub is_holiday: bool,
}

impl Employee {
    pub fn new<N: Into<String>>(name: N, is_holiday: bool) -> Self {
        Self {
            name: name.into(),
            is_holiday,
        }
    }
}

/// Demande agrégée d'une zone : un total par (jour 0–6, turno).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandProfile([[u32; 3]; 7]);

impl DemandProfile {
    pub fn new(totals: [[u32; 3]; 7]) -> Self {
        Self(totals)
    }

    pub fn get(&self, day: usize, shift: ShiftKind) -> u32 {
        self.0[day][shift.index()]
    }

    pub fn day_total(&self, day: usize) -> u32 {
        self.0[day].iter().sum()
    }
}

/// Ligne finale du planning : un employé, sept étiquettes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterRow {
    pub employee: String,
    pub days: [String; 7],
    pub is_holiday: bool,
}

/// Résultat d'une zone : lignes triées par nom et avertissements dans
/// l'ordre de découverte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneSchedule {
    pub zone: String,
    pub rows: Vec<RosterRow>,
    pub warnings: Vec<String>,
}

/// Identifiant fort pour WeekPlan
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanId(String);

impl PlanId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Plan hebdomadaire complet : toutes les zones d'une même semaine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekPlan {
    pub id: PlanId,
    pub week_start: NaiveDate,
    pub zones: Vec<ZoneSchedule>,
}

impl WeekPlan {
    pub fn new(week_start: NaiveDate, zones: Vec<ZoneSchedule>) -> Self {
        Self {
            id: PlanId::random(),
            week_start,
            zones,
        }
    }

    pub fn find_zone<'a>(&'a self, tag: &str) -> Option<&'a ZoneSchedule> {
        self.zones.iter().find(|z| z.zone == tag)
    }

    /// Avertissements de toutes les zones, dans l'ordre des zones.
    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.zones
            .iter()
            .flat_map(|z| z.warnings.iter().map(String::as_str))
    }
}
