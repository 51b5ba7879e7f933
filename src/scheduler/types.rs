use crate::model::{DemandProfile, ShiftKind};
use crate::scheduler::need::NeedMatrix;
use thiserror::Error;

/// Politique d'une zone : matrice de besoins et variantes d'attribution.
#[derive(Debug, Clone)]
pub struct ZoneConfig {
    /// Tag de zone, préfixe des étiquettes et des avertissements.
    pub tag: String,
    /// Minimum requis par (jour, turno).
    pub need: NeedMatrix,
    /// Nocturnes attribués par rotation round-robin plutôt qu'au moins-chargé.
    pub rotate_night: bool,
    /// Émettre le résumé des refuerzos après la passe de remplissage.
    pub report_backfill: bool,
}

impl ZoneConfig {
    /// Zone type réception : besoins guidés par la demande, sans rotation.
    pub fn reception(profile: &DemandProfile) -> Self {
        Self {
            tag: "REC".to_string(),
            need: NeedMatrix::demand_driven(profile),
            rotate_night: false,
            report_backfill: false,
        }
    }

    /// Zone type entrées : plancher fixe, nocturnes en rotation, résumé
    /// des refuerzos.
    pub fn entrance() -> Self {
        Self {
            tag: "ENT".to_string(),
            need: NeedMatrix::fixed_floor(),
            rotate_night: true,
            report_backfill: true,
        }
    }

    /// Étiquette d'un turno attribué, stable par (zone, turno).
    pub fn shift_label(&self, shift: ShiftKind) -> String {
        format!("{}-{} (8,h)", self.tag, shift.code())
    }
}

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("duplicate employee name: {0}")]
    DuplicateEmployee(String),
    #[error("employee name cannot be empty")]
    EmptyName,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
