mod assignment;
mod backfill;
mod need;
mod report;
mod state;
mod types;
mod util;

pub use need::NeedMatrix;
pub use types::{PlanError, ZoneConfig};

use crate::model::{Employee, ZoneSchedule};
use chrono::NaiveDate;

/// Planificateur d'une zone : encapsule la politique et déroule les passes.
#[derive(Debug, Clone)]
pub struct ZonePlanner {
    config: ZoneConfig,
}

impl ZonePlanner {
    pub fn new(config: ZoneConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ZoneConfig {
        &self.config
    }

    /// Génère le planning de la semaine pour la zone. Fonction pure de ses
    /// entrées : même liste (dans n'importe quel ordre) et même semaine
    /// donnent octet pour octet les mêmes lignes et avertissements.
    pub fn assign_week(
        &self,
        employees: &[Employee],
        week_start: NaiveDate,
    ) -> Result<ZoneSchedule, PlanError> {
        let mut week = state::WeekState::new(employees)?;
        let mut warnings = Vec::new();

        assignment::coverage_pass(&mut week, &self.config, week_start, &mut warnings);
        backfill::balance(&mut week, &self.config, week_start, &mut warnings);
        let rows = report::assemble_rows(&week, &self.config);

        Ok(ZoneSchedule {
            zone: self.config.tag.clone(),
            rows,
            warnings,
        })
    }
}
