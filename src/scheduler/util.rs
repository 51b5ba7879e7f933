use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Étiquette de jour façon `ddd dd/MM` es-ES : `lun 02/02`.
pub(super) fn dia_label(week_start: NaiveDate, day: usize) -> String {
    let fecha = week_start + Duration::days(day as i64);
    format!("{} {}", weekday_abbrev(fecha.weekday()), fecha.format("%d/%m"))
}

fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "lun",
        Weekday::Tue => "mar",
        Weekday::Wed => "mié",
        Weekday::Thu => "jue",
        Weekday::Fri => "vie",
        Weekday::Sat => "sáb",
        Weekday::Sun => "dom",
    }
}
