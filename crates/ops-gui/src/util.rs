//! Display formatting helpers.

/// "—" for missing values, "45 mins", "1h 15m", "2h".
pub fn format_minutes(minutes: Option<u32>) -> String {
    let Some(minutes) = minutes else {
        return "\u{2014}".to_string();
    };
    if minutes < 60 {
        return format!("{minutes} mins");
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    if mins > 0 {
        format!("{hours}h {mins}m")
    } else {
        format!("{hours}h")
    }
}

/// "90s" stays under a minute as "1m 30s"; "120s" becomes "2m".
pub fn format_seconds(seconds: u32) -> String {
    if seconds < 60 {
        return format!("{seconds}s");
    }
    let mins = seconds / 60;
    let secs = seconds % 60;
    if secs > 0 {
        format!("{mins}m {secs}s")
    } else {
        format!("{mins}m")
    }
}

/// Scale an ingredient quantity for display.
///
/// Values under 10 keep one decimal place (with a trailing ".0"
/// stripped); larger values round to whole numbers. Missing quantities
/// render as "—".
pub fn format_scaled_qty(qty: Option<f64>, scale: f64) -> String {
    let Some(qty) = qty else {
        return "\u{2014}".to_string();
    };
    let scaled = qty * scale;
    let rendered = if scaled < 10.0 {
        format!("{scaled:.1}")
    } else {
        format!("{scaled:.0}")
    };
    rendered
        .strip_suffix(".0")
        .map(ToString::to_string)
        .unwrap_or(rendered)
}

/// "mains.fish.salmon" -> "mains › fish › salmon".
pub fn breadcrumb(category_path: &str) -> String {
    category_path
        .split('.')
        .collect::<Vec<_>>()
        .join(" \u{203a} ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_formatting() {
        assert_eq!(format_minutes(None), "\u{2014}");
        assert_eq!(format_minutes(Some(45)), "45 mins");
        assert_eq!(format_minutes(Some(60)), "1h");
        assert_eq!(format_minutes(Some(75)), "1h 15m");
    }

    #[test]
    fn seconds_formatting() {
        assert_eq!(format_seconds(45), "45s");
        assert_eq!(format_seconds(90), "1m 30s");
        assert_eq!(format_seconds(120), "2m");
    }

    #[test]
    fn scaled_quantity_matches_display_rules() {
        // 2 g per portion at 5x shows "10", no decimal.
        assert_eq!(format_scaled_qty(Some(2.0), 5.0), "10");
        assert_eq!(format_scaled_qty(Some(2.0), 1.0), "2");
        assert_eq!(format_scaled_qty(Some(2.5), 1.0), "2.5");
        assert_eq!(format_scaled_qty(Some(25.0), 2.0), "50");
        assert_eq!(format_scaled_qty(Some(0.4), 2.0), "0.8");
        assert_eq!(format_scaled_qty(None, 5.0), "\u{2014}");
    }

    #[test]
    fn breadcrumb_splits_dot_paths() {
        assert_eq!(breadcrumb("mains.fish.salmon"), "mains \u{203a} fish \u{203a} salmon");
        assert_eq!(breadcrumb("training"), "training");
    }
}
