use metar_decoder::report::{Trend, WindDirection};
use metar_decoder::units::{DistanceUnit, Unit};
use metar_decoder::{DecodeResultVerbose, DecodedReport, Observer, ParseError, Remark, StepSummary};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(input: &str, res: &DecodeResultVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Decoding: \"{}\"", input.trim()), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Report ━━━", ansi::GRAY));
    print_report(&res.report, &palette);

    println!("\n{}", palette.paint("━━━ Remarks ━━━", ansi::GRAY));
    if res.report.remarks.is_empty() {
        println!("{}", palette.dim("  No remarks"));
    } else {
        for remark in &res.report.remarks {
            println!("  {}", fmt_remark(remark, &palette));
        }
    }

    if !res.report.unparsed.is_empty() {
        println!("\n{}", palette.paint("━━━ Unparsed ━━━", ansi::GRAY));
        println!("  {}", palette.paint(res.report.unparsed.join(" "), ansi::YELLOW));
    }

    println!("\n{}", palette.paint("━━━ Steps ━━━", ansi::GRAY));
    for (idx, step) in res.details.steps.iter().enumerate() {
        println!("  {} {}", palette.paint(format!("[{}]", idx), ansi::GRAY), fmt_step(step, &palette));
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Chunks: {}",
        palette.paint(format!("{:?}", res.details.total), ansi::GREEN),
        palette.paint(res.details.chunk_count.to_string(), ansi::BLUE),
    );
    println!();
}

pub fn print_error(input: &str, err: &ParseError, color: bool) {
    let palette = ansi::Palette::new(color);
    eprintln!("\n{}", palette.bold(palette.paint(format!("⚙  Decoding: \"{}\"", input.trim()), ansi::CYAN)));
    eprintln!("\n  {} {}", palette.paint("✗", ansi::RED), palette.bold(err.to_string()));
    if let ParseError::Unparsable { .. } = err {
        eprintln!("\n{}", palette.dim("  Tip: --loose keeps unrecognised chunks and decodes the rest"));
    }
    eprintln!();
}

fn field(palette: &ansi::Palette, label: &str, value: impl AsRef<str>) {
    println!("  {} {}", palette.paint(format!("{:<20}", label), ansi::BLUE), value.as_ref());
}

fn print_report(report: &DecodedReport, palette: &ansi::Palette) {
    let mut station = report.station.clone();
    if let Some(kind) = report.kind {
        station = format!("{} ({:?})", station, kind);
    }
    field(palette, "station", palette.bold(station));

    let time = match report.observed_at {
        Some(at) => format!("{}  {}", report.time, palette.dim(at.format("%Y-%m-%d %H:%MZ").to_string())),
        None => report.time.to_string(),
    };
    field(palette, "time", time);

    if report.nil {
        field(palette, "status", palette.paint("NIL (missing report)", ansi::YELLOW));
    }
    if report.observer != Observer::Real {
        field(palette, "observer", format!("{:?}", report.observer));
    }

    if let Some(wind) = report.wind {
        let direction = match wind.direction {
            WindDirection::Bearing(d) => d.to_string(),
            WindDirection::Variable => "variable".to_string(),
        };
        let mut text = format!("{} at {}", direction, wind.speed);
        if let Some(gust) = wind.gust {
            text.push_str(&format!(", gusting {}", gust));
        }
        field(palette, "wind", text);
    }
    if let Some(v) = report.variable_wind {
        field(palette, "variable wind", format!("{} to {}", v.from, v.to));
    }
    if report.cavok {
        field(palette, "CAVOK", palette.paint("ceiling and visibility OK", ansi::GREEN));
    }
    if let Some(v) = report.visibility {
        field(palette, "visibility", format!("{}  {}", v, palette.dim(meters(&v.distance))));
    }
    if let Some(v) = report.minimum_visibility {
        field(palette, "minimum visibility", v.to_string());
    }
    for rvr in &report.runway_visibility {
        let mut text = format!("runway {}: {}", rvr.runway, rvr.visibility);
        if let Some(high) = rvr.secondary {
            text.push_str(&format!(" to {}", high));
        }
        if let Some(tendency) = rvr.tendency {
            text.push_str(&format!(" ({:?})", tendency));
        }
        field(palette, "RVR", text);
    }
    for w in &report.present_weather {
        field(palette, "weather", w.to_string());
    }
    for layer in &report.sky {
        let text = match (layer.cover, layer.height) {
            (None, None) if layer.is_clear() => "clear".to_string(),
            (cover, height) => {
                let mut parts = Vec::new();
                if let Some(cover) = cover {
                    parts.push(format!("{:?}", cover).to_lowercase());
                }
                if let Some(height) = height {
                    parts.push(format!("at {}", height));
                }
                if let Some(cloud_type) = layer.cloud_type {
                    parts.push(format!("{:?}", cloud_type).to_lowercase());
                }
                parts.join(" ")
            }
        };
        field(palette, "sky", text);
    }
    if let Some(vv) = report.vertical_visibility {
        field(palette, "vertical visibility", vv.to_string());
    }
    if let Some(t) = report.temperature {
        field(palette, "temperature", t.to_string());
    }
    if let Some(d) = report.dew_point {
        field(palette, "dew point", d.to_string());
    }
    if let Some(p) = report.sea_level_pressure {
        field(palette, "pressure", p.to_string());
    }
    for w in &report.recent_weather {
        field(palette, "recent weather", w.to_string());
    }
    for ws in &report.wind_shear {
        field(palette, "wind shear", format!("{:?}", ws));
    }
    if let Some(da) = report.density_altitude {
        field(palette, "density altitude", da.to_string());
    }
    if let Some(trend) = &report.trend {
        let text = match trend {
            Trend::NoSignificantChange => "no significant change".to_string(),
            Trend::Becoming(rest) => format!("becoming {}", rest.join(" ")),
            Trend::Temporary(rest) => format!("temporarily {}", rest.join(" ")),
        };
        field(palette, "trend", text);
    }
}

fn meters(distance: &metar_decoder::units::Distance) -> String {
    match distance.to(DistanceUnit::Meters).value() {
        Some(m) if distance.unit() != DistanceUnit::Meters => format!("({:.0} {})", m, DistanceUnit::Meters.symbol()),
        _ => String::new(),
    }
}

fn fmt_remark(remark: &Remark, palette: &ansi::Palette) -> String {
    match remark {
        Remark::Raw(text) => palette.dim(text),
        other => palette.paint(format!("{:?}", other), ansi::GREEN),
    }
}

fn fmt_step(step: &StepSummary, palette: &ansi::Palette) -> String {
    format!(
        "{} {} {} {}",
        palette.paint(step.chunks.join(" "), ansi::YELLOW),
        palette.dim("│"),
        palette.paint(&step.state, ansi::BLUE),
        palette.dim(format!("({})", step.rule)),
    )
}
