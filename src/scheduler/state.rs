use crate::model::{Employee, ShiftKind};
use crate::scheduler::types::PlanError;

pub(crate) const DAYS: usize = 7;
/// Plafond hebdomadaire de jours travaillés par employé.
pub(crate) const MAX_WORKED_DAYS: u8 = 5;

/// État mutable d'un employé pendant une exécution.
#[derive(Debug, Clone)]
struct EmployeeState {
    name: String,
    is_holiday: bool,
    slots: [Option<ShiftKind>; DAYS],
    worked_days: u8,
    night_count: u8,
}

/// État d'une zone pour une semaine : arène d'employés triée par nom et
/// compteur d'effectifs par (jour, turno). Possédé exclusivement par
/// l'exécution, jamais partagé.
#[derive(Debug, Clone)]
pub(crate) struct WeekState {
    states: Vec<EmployeeState>,
    staffing: [[u32; 3]; DAYS],
}

impl WeekState {
    /// Construit l'arène en retriant par nom, quel que soit l'ordre d'entrée.
    /// Rejette les noms vides et les doublons (comparaison exacte).
    pub(crate) fn new(employees: &[Employee]) -> Result<Self, PlanError> {
        let mut states: Vec<EmployeeState> = employees
            .iter()
            .map(|e| EmployeeState {
                name: e.name.clone(),
                is_holiday: e.is_holiday,
                slots: [None; DAYS],
                worked_days: 0,
                night_count: 0,
            })
            .collect();
        states.sort_by(|a, b| a.name.cmp(&b.name));

        if states.iter().any(|s| s.name.trim().is_empty()) {
            return Err(PlanError::EmptyName);
        }
        if let Some(dup) = states.windows(2).find(|w| w[0].name == w[1].name) {
            return Err(PlanError::DuplicateEmployee(dup[0].name.clone()));
        }

        Ok(Self {
            states,
            staffing: [[0; 3]; DAYS],
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.states.len()
    }

    pub(crate) fn name(&self, idx: usize) -> &str {
        &self.states[idx].name
    }

    pub(crate) fn is_holiday(&self, idx: usize) -> bool {
        self.states[idx].is_holiday
    }

    pub(crate) fn worked_days(&self, idx: usize) -> u8 {
        self.states[idx].worked_days
    }

    pub(crate) fn night_count(&self, idx: usize) -> u8 {
        self.states[idx].night_count
    }

    pub(crate) fn slot(&self, idx: usize, day: usize) -> Option<ShiftKind> {
        self.states[idx].slots[day]
    }

    /// Éligible pour (employé, jour) : pas en congés, sous le plafond,
    /// case du jour encore vide.
    pub(crate) fn eligible(&self, idx: usize, day: usize) -> bool {
        let state = &self.states[idx];
        !state.is_holiday && state.worked_days < MAX_WORKED_DAYS && state.slots[day].is_none()
    }

    /// Pose une attribution définitive : une case ne se réécrit jamais.
    pub(crate) fn assign(&mut self, idx: usize, day: usize, shift: ShiftKind) {
        debug_assert!(self.eligible(idx, day));
        let state = &mut self.states[idx];
        state.slots[day] = Some(shift);
        state.worked_days += 1;
        if shift == ShiftKind::Night {
            state.night_count += 1;
        }
        self.staffing[day][shift.index()] += 1;
    }

    pub(crate) fn staffing(&self, day: usize, shift: ShiftKind) -> u32 {
        self.staffing[day][shift.index()]
    }

    /// Turno le moins pourvu du jour ; à égalité, ordre N < M < T.
    pub(crate) fn least_staffed_shift(&self, day: usize) -> ShiftKind {
        let mut best = ShiftKind::Night;
        for &shift in &ShiftKind::ALL[1..] {
            if self.staffing(day, shift) < self.staffing(day, best) {
                best = shift;
            }
        }
        best
    }

    /// Pool de rotation : indices des non-congés, dans l'ordre des noms.
    /// Composition figée pour toute l'exécution.
    pub(crate) fn rotation_pool(&self) -> Vec<usize> {
        (0..self.states.len())
            .filter(|&i| !self.states[i].is_holiday)
            .collect()
    }
}
