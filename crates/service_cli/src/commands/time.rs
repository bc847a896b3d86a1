//! World time difference and duration commands

use calc_core::traits::Calculate;
use calc_core::types::LocalDateTime;
use calc_models::time::{find_city, world_clock, DurationInput, TimeDifferenceInput};
use serde_json::json;
use tracing::{debug, info};

use crate::output::{Report, Table};
use crate::Result;

fn signed_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{:+}시간", hours as i64)
    } else {
        format!("{:+.2}시간", hours)
    }
}

/// Run the time-diff command
///
/// Without a target city every supported city is listed.
pub fn time_difference(from: &str, to: Option<&str>, at: Option<LocalDateTime>) -> Result<Report> {
    let at = at.unwrap_or_else(|| LocalDateTime::new(chrono::Local::now().naive_local()));
    debug!(from, ?to, %at);

    let Some(to) = to else {
        info!("Building world clock...");
        let source = find_city(from)?;
        let rows = world_clock(from, at)?;
        let mut table = Table::new(["도시", "UTC 오프셋", "현지 시각", "시차"]);
        let mut data = Vec::with_capacity(rows.len());
        for (city, local) in &rows {
            let hours = f64::from(city.utc_offset_minutes - source.utc_offset_minutes) / 60.0;
            table.push([
                city.name.to_string(),
                city.offset_label(),
                local.to_string(),
                signed_hours(hours),
            ]);
            data.push(json!({ "city": city, "local_time": local }));
        }
        return Ok(Report::new("세계 시각", &data)?
            .field("기준 도시", source.name)
            .field("기준 시각", at.to_string())
            .with_table(table));
    };

    info!("Converting local time...");
    let result = TimeDifferenceInput::new(from, to, at).calculate()?;
    let mut report = Report::new("세계 시차", &result)?
        .field(
            format!("{} ({})", result.from.name, result.from.offset_label()),
            result.source.to_string(),
        )
        .field(
            format!("{} ({})", result.to.name, result.to.offset_label()),
            result.converted.to_string(),
        )
        .field("시차", signed_hours(result.offset_difference_hours));
    if result.day_shift != 0 {
        report = report.field("날짜", format!("{:+}일", result.day_shift));
    }
    Ok(report)
}

/// Run the duration command
pub fn duration(start: LocalDateTime, end: LocalDateTime) -> Result<Report> {
    info!("Calculating elapsed time...");
    let result = DurationInput::new(start, end).calculate()?;

    Ok(Report::new("경과 시간", &result)?
        .field("시작", start.to_string())
        .field("종료", end.to_string())
        .field(
            "경과",
            format!("{}일 {}시간 {}분", result.days, result.hours, result.minutes),
        )
        .field("총 분", format!("{}분", result.total_minutes))
        .field("총 시간", format!("{:.2}시간", result.total_hours())))
}
