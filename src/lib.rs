#![forbid(unsafe_code)]
//! Turnos — bibliothèque de génération de turnos hebdomadaires (sans BD).
//!
//! - Entrées/sorties fichiers (JSON/CSV).
//! - Une passe gloutonne par zone : couverture minimale puis remplissage.
//! - Rotation round-robin des nocturnes pour la zone à plancher fixe.
//! - Sous-couverture signalée par avertissements, jamais par échec.
//! - Déterminisme total : tri par nom à la construction, départages totaux.

pub mod demand;
pub mod io;
pub mod model;
pub mod scheduler;
pub mod storage;

pub use demand::{Direction, TrafficEvent, WeekTraffic};
pub use model::{
    DemandProfile, Employee, PlanId, RosterRow, ShiftKind, WeekPlan, ZoneSchedule, HOLYDAYS, OFF,
};
pub use scheduler::{NeedMatrix, PlanError, ZoneConfig, ZonePlanner};
pub use storage::{JsonStorage, Storage};
