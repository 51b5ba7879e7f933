use super::state::WeekState;
use super::types::ZoneConfig;
use super::util;
use crate::model::ShiftKind;
use chrono::NaiveDate;

/// Curseur round-robin sur le pool de nocturnes. État local à une
/// exécution : passé explicitement, jamais stocké globalement.
pub(super) struct NightRotation {
    pool: Vec<usize>,
    cursor: usize,
}

impl NightRotation {
    pub(super) fn new(pool: Vec<usize>) -> Self {
        Self { pool, cursor: 0 }
    }

    /// Balaye au plus un tour complet à partir du curseur et attribue les
    /// `required` premiers éligibles. Le curseur avance juste après le
    /// dernier employé réellement attribué.
    pub(super) fn assign(&mut self, week: &mut WeekState, day: usize, required: u32) -> u32 {
        if self.pool.is_empty() {
            return 0;
        }
        let len = self.pool.len();
        let mut index = self.cursor;
        let mut assigned = 0u32;

        for _ in 0..len {
            if assigned >= required {
                break;
            }
            let candidate = self.pool[index];
            index = (index + 1) % len;
            if week.eligible(candidate, day) {
                week.assign(candidate, day, ShiftKind::Night);
                assigned += 1;
                self.cursor = index;
            }
        }

        assigned
    }
}

/// Attribue jusqu'à `required` éligibles au moins-chargé d'abord :
/// tri `(jours travaillés, nocturnes, nom)` croissant.
pub(super) fn assign_least_worked(
    week: &mut WeekState,
    day: usize,
    shift: ShiftKind,
    required: u32,
) -> u32 {
    let mut candidates: Vec<usize> = (0..week.len()).filter(|&i| week.eligible(i, day)).collect();
    // l'arène est triée par nom ; le tri stable garde l'ordre alphabétique
    // à égalité de compteurs
    candidates.sort_by_key(|&i| (week.worked_days(i), week.night_count(i)));

    let mut assigned = 0u32;
    for candidate in candidates {
        if assigned >= required {
            break;
        }
        week.assign(candidate, day, shift);
        assigned += 1;
    }
    assigned
}

/// Passe de couverture d'un jour : turnos dans l'ordre fixe N, M, T.
/// Toute attribution est définitive, aucun retour en arrière.
pub(super) fn assign_day(
    week: &mut WeekState,
    config: &ZoneConfig,
    rotation: &mut NightRotation,
    week_start: NaiveDate,
    day: usize,
    warnings: &mut Vec<String>,
) {
    for &shift in ShiftKind::ALL.iter() {
        let required = config.need.get(day, shift);
        let assigned = if shift == ShiftKind::Night && config.rotate_night {
            rotation.assign(week, day, required)
        } else {
            assign_least_worked(week, day, shift, required)
        };

        if assigned < required {
            warnings.push(format!(
                "FALTA {} {} {} (need={}, asignado={})",
                config.tag,
                util::dia_label(week_start, day),
                shift.code(),
                required,
                assigned
            ));
        }
    }
}

/// Couverture minimale de la semaine : jours 0..6 dans l'ordre.
pub(super) fn coverage_pass(
    week: &mut WeekState,
    config: &ZoneConfig,
    week_start: NaiveDate,
    warnings: &mut Vec<String>,
) {
    let mut rotation = NightRotation::new(week.rotation_pool());
    for day in 0..super::state::DAYS {
        assign_day(week, config, &mut rotation, week_start, day, warnings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Employee;

    fn lunes() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 2).unwrap()
    }

    fn entrance_config() -> ZoneConfig {
        ZoneConfig::entrance()
    }

    // L'exclusivité des cases provoque la pénurie de l'après-midi : trois
    // employés, tous déjà pris au jour 0 après N et M.
    #[test]
    fn slot_exclusivity_causes_afternoon_shortage() {
        let mut week = WeekState::new(&[
            Employee::new("Ana", false),
            Employee::new("Bob", false),
            Employee::new("Cara", false),
        ])
        .unwrap();
        let config = entrance_config();
        let mut rotation = NightRotation::new(week.rotation_pool());
        let mut warnings = Vec::new();

        assign_day(&mut week, &config, &mut rotation, lunes(), 0, &mut warnings);

        // la rotation démarre à l'indice 0 : Ana prend le nocturne
        assert_eq!(week.slot(0, 0), Some(ShiftKind::Night));
        assert_eq!(week.worked_days(0), 1);
        assert_eq!(week.night_count(0), 1);
        // égalité parfaite entre Bob et Cara : l'ordre alphabétique tranche
        assert_eq!(week.slot(1, 0), Some(ShiftKind::Morning));
        assert_eq!(week.slot(2, 0), Some(ShiftKind::Morning));
        assert_eq!(week.worked_days(1), 1);
        assert_eq!(week.worked_days(2), 1);

        assert_eq!(
            warnings,
            vec!["FALTA ENT lun 02/02 T (need=2, asignado=0)".to_string()]
        );
    }

    #[test]
    fn rotation_cursor_skips_ineligible_and_wraps() {
        let mut week = WeekState::new(&[
            Employee::new("Ana", false),
            Employee::new("Bob", true),
            Employee::new("Cara", false),
        ])
        .unwrap();
        // Bob en congés : le pool ne contient qu'Ana et Cara
        let mut rotation = NightRotation::new(week.rotation_pool());

        assert_eq!(rotation.assign(&mut week, 0, 1), 1);
        assert_eq!(week.slot(0, 0), Some(ShiftKind::Night));
        assert_eq!(rotation.assign(&mut week, 1, 1), 1);
        assert_eq!(week.slot(2, 1), Some(ShiftKind::Night));
        assert_eq!(rotation.assign(&mut week, 2, 1), 1);
        assert_eq!(week.slot(0, 2), Some(ShiftKind::Night));
    }

    #[test]
    fn rotation_stops_after_one_full_lap() {
        let mut week = WeekState::new(&[
            Employee::new("Ana", true),
            Employee::new("Bob", true),
        ])
        .unwrap();
        let mut rotation = NightRotation::new(week.rotation_pool());
        assert_eq!(rotation.assign(&mut week, 0, 1), 0);

        let config = entrance_config();
        let mut warnings = Vec::new();
        assign_day(&mut week, &config, &mut rotation, lunes(), 0, &mut warnings);
        assert_eq!(
            warnings,
            vec![
                "FALTA ENT lun 02/02 N (need=1, asignado=0)".to_string(),
                "FALTA ENT lun 02/02 M (need=2, asignado=0)".to_string(),
                "FALTA ENT lun 02/02 T (need=2, asignado=0)".to_string(),
            ]
        );
    }
}
