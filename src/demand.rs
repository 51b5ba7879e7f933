//! Agrégation du trafic brut (entrées/sorties datées) en demande par turno.

use crate::model::{DemandProfile, ShiftKind};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sens d'un mouvement : arrivée (entrada) ou départ (salida).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Arrival,
    Departure,
}

/// Mouvement brut horodaté, tel que fourni par l'amont.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficEvent {
    pub date: NaiveDate,
    pub hour: u32,
    pub direction: Direction,
}

impl TrafficEvent {
    pub fn new(date: NaiveDate, hour: u32, direction: Direction) -> Self {
        Self {
            date,
            hour,
            direction,
        }
    }
}

/// Compteurs hebdomadaires par (jour, turno), arrivées et départs séparés.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekTraffic {
    arrivals: [[u32; 3]; 7],
    departures: [[u32; 3]; 7],
}

impl WeekTraffic {
    /// Classe chaque mouvement dans son (jour, turno). Les mouvements hors
    /// semaine ou avec une heure hors 0–23 sont ignorés.
    pub fn aggregate(week_start: NaiveDate, events: &[TrafficEvent]) -> Self {
        let mut traffic = WeekTraffic::default();

        for event in events {
            let offset = event.date.signed_duration_since(week_start).num_days();
            if !(0..7).contains(&offset) {
                continue;
            }
            let Some(shift) = ShiftKind::from_hour(event.hour) else {
                continue;
            };

            let cell = match event.direction {
                Direction::Arrival => &mut traffic.arrivals[offset as usize][shift.index()],
                Direction::Departure => &mut traffic.departures[offset as usize][shift.index()],
            };
            *cell += 1;
        }

        traffic
    }

    pub fn arrivals(&self, day: usize, shift: ShiftKind) -> u32 {
        self.arrivals[day][shift.index()]
    }

    pub fn departures(&self, day: usize, shift: ShiftKind) -> u32 {
        self.departures[day][shift.index()]
    }

    /// Total arrivées + départs d'un (jour, turno).
    pub fn total(&self, day: usize, shift: ShiftKind) -> u32 {
        self.arrivals(day, shift) + self.departures(day, shift)
    }

    pub fn day_total(&self, day: usize) -> u32 {
        ShiftKind::ALL.iter().map(|&s| self.total(day, s)).sum()
    }

    /// Profil de demande consommé par le calcul de besoins.
    pub fn demand_profile(&self) -> DemandProfile {
        let mut totals = [[0u32; 3]; 7];
        for (day, row) in totals.iter_mut().enumerate() {
            for &shift in ShiftKind::ALL.iter() {
                row[shift.index()] = self.total(day, shift);
            }
        }
        DemandProfile::new(totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 2).unwrap()
    }

    #[test]
    fn buckets_hours_into_day_parts() {
        let events = vec![
            TrafficEvent::new(monday(), 0, Direction::Arrival),
            TrafficEvent::new(monday(), 7, Direction::Arrival),
            TrafficEvent::new(monday(), 8, Direction::Departure),
            TrafficEvent::new(monday(), 15, Direction::Arrival),
            TrafficEvent::new(monday(), 16, Direction::Departure),
            TrafficEvent::new(monday(), 23, Direction::Departure),
        ];
        let traffic = WeekTraffic::aggregate(monday(), &events);

        assert_eq!(traffic.arrivals(0, ShiftKind::Night), 2);
        assert_eq!(traffic.total(0, ShiftKind::Morning), 2);
        assert_eq!(traffic.departures(0, ShiftKind::Afternoon), 2);
        assert_eq!(traffic.day_total(0), 6);
    }

    #[test]
    fn skips_events_outside_the_week() {
        let before = monday().pred_opt().unwrap();
        let after = monday() + chrono::Duration::days(7);
        let events = vec![
            TrafficEvent::new(before, 10, Direction::Arrival),
            TrafficEvent::new(after, 10, Direction::Arrival),
            TrafficEvent::new(monday(), 24, Direction::Arrival),
            TrafficEvent::new(monday() + chrono::Duration::days(6), 10, Direction::Arrival),
        ];
        let traffic = WeekTraffic::aggregate(monday(), &events);

        assert_eq!(traffic.day_total(0), 0);
        assert_eq!(traffic.total(6, ShiftKind::Morning), 1);
    }

    #[test]
    fn demand_profile_sums_both_directions() {
        let events = vec![
            TrafficEvent::new(monday(), 9, Direction::Arrival),
            TrafficEvent::new(monday(), 10, Direction::Departure),
        ];
        let profile = WeekTraffic::aggregate(monday(), &events).demand_profile();
        assert_eq!(profile.get(0, ShiftKind::Morning), 2);
    }
}
