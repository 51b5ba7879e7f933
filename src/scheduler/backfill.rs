use super::state::{WeekState, DAYS, MAX_WORKED_DAYS};
use super::types::ZoneConfig;
use super::util;
use chrono::NaiveDate;

/// Remplissage de la capacité restante : chaque employé sous le plafond
/// reçoit des turnos supplémentaires sur le turno le moins pourvu du
/// premier jour libre. Au mieux de la capacité ; ne corrige pas les
/// pénuries déjà constatées et ne respecte aucun plafond de besoin.
pub(super) fn balance(
    week: &mut WeekState,
    config: &ZoneConfig,
    week_start: NaiveDate,
    warnings: &mut Vec<String>,
) {
    let available = week.rotation_pool().len() as u32;
    let budget = (available * u32::from(MAX_WORKED_DAYS)).saturating_sub(config.need.total());

    let mut filled = 0u32;
    let mut slot_labels: Vec<String> = Vec::new();

    for idx in 0..week.len() {
        if week.is_holiday(idx) {
            continue;
        }
        while week.worked_days(idx) < MAX_WORKED_DAYS {
            let Some(day) = (0..DAYS).find(|&d| week.eligible(idx, d)) else {
                break;
            };
            let shift = week.least_staffed_shift(day);
            week.assign(idx, day, shift);
            filled += 1;

            let label = format!("{} {}", util::dia_label(week_start, day), shift.code());
            if !slot_labels.contains(&label) {
                slot_labels.push(label);
            }
        }
    }

    if config.report_backfill && budget > 0 {
        let resumen = if slot_labels.is_empty() {
            "sin_asignacion".to_string()
        } else {
            slot_labels.join(", ")
        };
        warnings.push(format!(
            "REFUERZOS {}: presupuesto={}, asignados={}, topSlots={}",
            config.tag, budget, filled, resumen
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Employee, ShiftKind};
    use crate::scheduler::assignment;
    use crate::scheduler::need::NeedMatrix;

    fn lunes() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 2).unwrap()
    }

    #[test]
    fn backfill_never_unassigns_and_never_lowers_counters() {
        let employees = vec![
            Employee::new("Ana", false),
            Employee::new("Bob", false),
            Employee::new("Cara", false),
            Employee::new("Dario", false),
            Employee::new("Eva", true),
        ];
        let mut week = WeekState::new(&employees).unwrap();
        let config = ZoneConfig::entrance();
        let mut warnings = Vec::new();

        assignment::coverage_pass(&mut week, &config, lunes(), &mut warnings);
        let before: Vec<(u8, Vec<Option<ShiftKind>>)> = (0..week.len())
            .map(|i| (week.worked_days(i), (0..DAYS).map(|d| week.slot(i, d)).collect()))
            .collect();

        balance(&mut week, &config, lunes(), &mut warnings);

        for (idx, (worked, slots)) in before.iter().enumerate() {
            assert!(week.worked_days(idx) >= *worked);
            for (day, slot) in slots.iter().enumerate() {
                if slot.is_some() {
                    assert_eq!(week.slot(idx, day), *slot);
                }
            }
        }
        // Eva reste en congés, jamais remplie
        assert_eq!(week.worked_days(4), 0);
    }

    #[test]
    fn backfill_targets_least_staffed_shift_of_first_free_day() {
        let mut week = WeekState::new(&[Employee::new("Ana", false)]).unwrap();
        // besoin nul partout : tout le plafond est discrétionnaire
        let config = ZoneConfig {
            need: NeedMatrix::from_rows([[0; 3]; 7]),
            report_backfill: true,
            ..ZoneConfig::entrance()
        };
        let mut warnings = Vec::new();
        balance(&mut week, &config, lunes(), &mut warnings);

        // cinq jours remplis, plafond atteint, premier jour libre d'abord
        assert_eq!(week.worked_days(0), 5);
        for day in 0..5 {
            assert_eq!(week.slot(0, day), Some(ShiftKind::Night));
        }
        assert_eq!(week.slot(0, 5), None);

        assert_eq!(warnings.len(), 1);
        let resumen = &warnings[0];
        assert!(resumen.starts_with("REFUERZOS ENT: presupuesto=5, asignados=5"));
        assert!(resumen.contains("lun 02/02 N"));
        assert!(resumen.contains("vie 06/02 N"));
    }

    #[test]
    fn summary_suppressed_without_discretionary_budget() {
        let mut week = WeekState::new(&[
            Employee::new("Ana", false),
            Employee::new("Bob", false),
            Employee::new("Cara", false),
        ])
        .unwrap();
        let config = ZoneConfig::entrance();
        let mut warnings = Vec::new();

        assignment::coverage_pass(&mut week, &config, lunes(), &mut warnings);
        let coverage_count = warnings.len();
        balance(&mut week, &config, lunes(), &mut warnings);

        // 3 employés * 5 = 15 < 35 de besoin : budget nul, pas de résumé
        assert_eq!(warnings.len(), coverage_count);
    }
}
