use super::state::{WeekState, DAYS};
use super::types::ZoneConfig;
use crate::model::{RosterRow, HOLYDAYS, OFF};

/// Finalisation : congés sur toute la ligne, OFF pour les cases restées
/// vides, lignes dans l'ordre des noms (l'arène est déjà triée).
pub(super) fn assemble_rows(week: &WeekState, config: &ZoneConfig) -> Vec<RosterRow> {
    (0..week.len())
        .map(|idx| {
            let mut days: [String; DAYS] = Default::default();
            if week.is_holiday(idx) {
                // jamais attribués par la passe de couverture ; on écrase
                // quand même les sept cases
                for cell in days.iter_mut() {
                    *cell = HOLYDAYS.to_string();
                }
            } else {
                for (day, cell) in days.iter_mut().enumerate() {
                    *cell = match week.slot(idx, day) {
                        Some(shift) => config.shift_label(shift),
                        None => OFF.to_string(),
                    };
                }
            }
            RosterRow {
                employee: week.name(idx).to_string(),
                days,
                is_holiday: week.is_holiday(idx),
            }
        })
        .collect()
}
