use crate::demand::{Direction, TrafficEvent, WeekTraffic};
use crate::model::{ShiftKind, WeekPlan};
use anyhow::{bail, Context};
use chrono::{Duration, NaiveDate};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Ligne du fichier d'affectations : un employé, sa zone, son drapeau congés.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub name: String,
    pub zone: String,
    pub is_holiday: bool,
}

/// Import des affectations depuis CSV: header `name,zone[,on_holiday]`
pub fn import_roster_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<RosterEntry>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        let zone = rec.get(1).context("missing zone")?.trim();
        if name.is_empty() || zone.is_empty() {
            bail!("invalid roster row (empty)");
        }
        let mut entry = RosterEntry {
            name: name.to_string(),
            zone: zone.to_string(),
            is_holiday: false,
        };
        if let Some(flag) = rec.get(2) {
            let flag = flag.trim();
            if !flag.is_empty() {
                entry.is_holiday = parse_bool(flag)
                    .with_context(|| format!("invalid on_holiday value for {name}"))?;
            }
        }
        out.push(entry);
    }
    Ok(out)
}

/// Import des mouvements bruts: header `date,hour,direction`
pub fn import_events_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<TrafficEvent>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let date = parse_fecha(rec.get(0).context("missing date")?.trim())?;
        let hour = parse_hora(rec.get(1).context("missing hour")?.trim())?;
        let direction = parse_direction(rec.get(2).context("missing direction")?.trim())?;
        out.push(TrafficEvent::new(date, hour, direction));
    }
    Ok(out)
}

fn parse_bool(s: &str) -> anyhow::Result<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "si" | "sí" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        _ => bail!("expected boolean"),
    }
}

fn parse_fecha(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d/%m/%Y"))
        .with_context(|| format!("invalid date: {raw}"))
}

fn parse_hora(raw: &str) -> anyhow::Result<u32> {
    let hour = if let Ok(h) = raw.parse::<u32>() {
        h
    } else if let Some((h, _)) = raw.split_once(':') {
        h.trim()
            .parse::<u32>()
            .with_context(|| format!("invalid hour: {raw}"))?
    } else {
        bail!("invalid hour: {raw}");
    };
    if hour > 23 {
        bail!("hour out of range: {hour}");
    }
    Ok(hour)
}

fn parse_direction(raw: &str) -> anyhow::Result<Direction> {
    match raw.to_ascii_lowercase().as_str() {
        "entrada" | "arrival" | "in" => Ok(Direction::Arrival),
        "salida" | "departure" | "out" => Ok(Direction::Departure),
        _ => bail!("invalid direction: {raw}"),
    }
}

/// Export JSON du plan (jolie mise en forme)
pub fn export_plan_json<P: AsRef<Path>>(path: P, plan: &WeekPlan) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(plan)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV du planning: header `zone,employee,d0..d6,on_holiday`
pub fn export_schedule_csv<P: AsRef<Path>>(path: P, plan: &WeekPlan) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record([
        "zone",
        "employee",
        "d0",
        "d1",
        "d2",
        "d3",
        "d4",
        "d5",
        "d6",
        "on_holiday",
    ])?;
    for schedule in &plan.zones {
        for row in &schedule.rows {
            let holiday = if row.is_holiday { "true" } else { "false" };
            let mut record = vec![schedule.zone.as_str(), row.employee.as_str()];
            record.extend(row.days.iter().map(String::as_str));
            record.push(holiday);
            w.write_record(record)?;
        }
    }
    w.flush()?;
    Ok(())
}

/// Export CSV du résumé de demande, une ligne par jour:
/// header `fecha,noct_ent,noct_sal,man_ent,man_sal,tar_ent,tar_sal,total`
pub fn export_demand_csv<P: AsRef<Path>>(
    path: P,
    week_start: NaiveDate,
    traffic: &WeekTraffic,
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record([
        "fecha", "noct_ent", "noct_sal", "man_ent", "man_sal", "tar_ent", "tar_sal", "total",
    ])?;
    let mut buffers: [itoa::Buffer; 7] = Default::default();
    for day in 0..7 {
        let fecha = (week_start + Duration::days(day as i64)).to_string();
        let mut record = vec![fecha.as_str()];
        let counts = [
            traffic.arrivals(day, ShiftKind::Night),
            traffic.departures(day, ShiftKind::Night),
            traffic.arrivals(day, ShiftKind::Morning),
            traffic.departures(day, ShiftKind::Morning),
            traffic.arrivals(day, ShiftKind::Afternoon),
            traffic.departures(day, ShiftKind::Afternoon),
            traffic.day_total(day),
        ];
        for (buffer, count) in buffers.iter_mut().zip(counts) {
            record.push(buffer.format(count));
        }
        w.write_record(record)?;
    }
    w.flush()?;
    Ok(())
}

/// Export CSV des avertissements: header `zone,warning`
pub fn export_warnings_csv<P: AsRef<Path>>(path: P, plan: &WeekPlan) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["zone", "warning"])?;
    for schedule in &plan.zones {
        for warning in &schedule.warnings {
            w.write_record([schedule.zone.as_str(), warning.as_str()])?;
        }
    }
    w.flush()?;
    Ok(())
}
