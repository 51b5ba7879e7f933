#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use turnos::{
    io,
    model::{Employee, WeekPlan},
    scheduler::{ZoneConfig, ZonePlanner},
    storage::{JsonStorage, Storage},
    WeekTraffic,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de génération de turnos hebdomadaires (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON du plan
    #[arg(long, global = true, default_value = "plan.json")]
    plan: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Générer le plan de la semaine pour les deux zones
    Generate {
        /// CSV des affectations `name,zone,on_holiday` (zones REC / ENT)
        #[arg(long)]
        roster: String,
        /// CSV des mouvements `date,hour,direction` (optionnel)
        #[arg(long)]
        events: Option<String>,
        /// Lundi de la semaine, AAAA-MM-JJ
        #[arg(long)]
        week_start: String,
    },

    /// Lister le plan sauvegardé et optionnellement exporter
    Show {
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Résumer la demande par jour et par turno
    Demand {
        /// CSV des mouvements `date,hour,direction`
        #[arg(long)]
        events: String,
        /// Lundi de la semaine, AAAA-MM-JJ
        #[arg(long)]
        week_start: String,
        /// Export CSV du résumé (optionnel)
        #[arg(long)]
        out: Option<String>,
    },

    /// Vérifier les avertissements du plan sauvegardé
    Check {
        /// Export CSV des avertissements (optionnel)
        #[arg(long)]
        report: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.plan)?;

    let code = match cli.cmd {
        Commands::Generate {
            roster,
            events,
            week_start,
        } => {
            let week_start = parse_week_start(&week_start)?;
            let entries = io::import_roster_csv(roster)?;

            let mut recepcion: Vec<Employee> = Vec::new();
            let mut entradas: Vec<Employee> = Vec::new();
            for entry in entries {
                let employee = Employee::new(entry.name, entry.is_holiday);
                match entry.zone.to_ascii_uppercase().as_str() {
                    "REC" => recepcion.push(employee),
                    "ENT" => entradas.push(employee),
                    other => bail!("zone inconnue: {other}"),
                }
            }

            let traffic = match events {
                Some(path) => WeekTraffic::aggregate(week_start, &io::import_events_csv(path)?),
                None => WeekTraffic::default(),
            };
            let profile = traffic.demand_profile();

            let rec = ZonePlanner::new(ZoneConfig::reception(&profile))
                .assign_week(&recepcion, week_start)?;
            let ent = ZonePlanner::new(ZoneConfig::entrance()).assign_week(&entradas, week_start)?;

            let plan = WeekPlan::new(week_start, vec![rec, ent]);
            storage.save(&plan)?;

            print_plan(&plan);
            let warning_count = plan.warnings().count();
            if warning_count == 0 {
                0
            } else {
                eprintln!("Found {} warning(s)", warning_count);
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::Show { out_json, out_csv } => {
            let plan = storage.load()?;
            if let Some(path) = out_json {
                io::export_plan_json(path, &plan)?;
            }
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, &plan)?;
            }
            print_plan(&plan);
            0
        }
        Commands::Demand {
            events,
            week_start,
            out,
        } => {
            let week_start = parse_week_start(&week_start)?;
            let traffic = WeekTraffic::aggregate(week_start, &io::import_events_csv(events)?);
            if let Some(path) = out {
                io::export_demand_csv(path, week_start, &traffic)?;
            }
            for day in 0..7 {
                let fecha = week_start + chrono::Duration::days(day as i64);
                println!(
                    "{} | N={} M={} T={} | total={}",
                    fecha,
                    traffic.total(day, turnos::ShiftKind::Night),
                    traffic.total(day, turnos::ShiftKind::Morning),
                    traffic.total(day, turnos::ShiftKind::Afternoon),
                    traffic.day_total(day)
                );
            }
            0
        }
        Commands::Check { report } => {
            let plan = storage.load()?;
            let warnings: Vec<&str> = plan.warnings().collect();
            if warnings.is_empty() {
                println!("OK: no warnings");
                0
            } else {
                eprintln!("Found {} warning(s)", warnings.len());
                for warning in &warnings {
                    eprintln!("{warning}");
                }
                if let Some(path) = report {
                    io::export_warnings_csv(path, &plan)?;
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
    };

    std::process::exit(code);
}

fn parse_week_start(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("invalid week start (expected AAAA-MM-JJ): {raw}"))
}

// impression compacte
fn print_plan(plan: &WeekPlan) {
    for schedule in &plan.zones {
        for row in &schedule.rows {
            println!(
                "{} | {} | {}",
                schedule.zone,
                row.employee,
                row.days.join(" | ")
            );
        }
    }
}
