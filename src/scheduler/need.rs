use crate::model::{DemandProfile, ShiftKind};

/// Un poste pour ~20 mouvements dans la zone guidée par la demande.
const MOVEMENTS_PER_STAFF: u32 = 20;
/// Plancher par turno de la zone guidée par la demande.
const RECEPTION_FLOOR: u32 = 2;
/// Plancher fixe N/M/T de la zone entrées.
const ENTRANCE_FLOOR: [u32; 3] = [1, 2, 2];

/// Minimum d'employés requis par (jour 0–6, turno). Possédée par une seule
/// exécution d'attribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeedMatrix([[u32; 3]; 7]);

impl NeedMatrix {
    /// Matrice arbitraire, pour les appelants qui portent leur propre
    /// politique.
    pub fn from_rows(rows: [[u32; 3]; 7]) -> Self {
        Self(rows)
    }

    /// Besoin dérivé de la demande : `max(2, ceil(demande / 20))`.
    pub fn demand_driven(profile: &DemandProfile) -> Self {
        let mut rows = [[0u32; 3]; 7];
        for (day, row) in rows.iter_mut().enumerate() {
            for &shift in ShiftKind::ALL.iter() {
                let demand = profile.get(day, shift);
                row[shift.index()] = demand.div_ceil(MOVEMENTS_PER_STAFF).max(RECEPTION_FLOOR);
            }
        }
        Self(rows)
    }

    /// Plancher fixe 1/2/2, identique chaque jour, indépendant de la demande.
    pub fn fixed_floor() -> Self {
        Self([ENTRANCE_FLOOR; 7])
    }

    pub fn get(&self, day: usize, shift: ShiftKind) -> u32 {
        self.0[day][shift.index()]
    }

    /// Somme de toutes les cases, base du budget de refuerzos.
    pub fn total(&self) -> u32 {
        self.0.iter().flatten().sum()
    }
}
