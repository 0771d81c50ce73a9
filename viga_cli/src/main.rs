//! # VigaCalc CLI
//!
//! Terminal front-end for the beam design engine. Prompts for the section,
//! materials and design moments, runs the full check and prints the
//! verification table a report would carry.

use std::io::{self, BufRead, Write};

use viga_core::catalog::BarSize;
use viga_core::design::beam::{check, BeamDesign};
use viga_core::design::section::RebarEntry;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() {
    println!("VigaCalc CLI - RC Beam Flexural Design");
    println!("======================================");
    println!();

    let b_cm = prompt_f64("Section width b (cm) [30]: ", 30.0);
    let h_cm = prompt_f64("Section height h (cm) [50]: ", 50.0);
    let m_support = prompt_f64("Support moment M- (T·m) [8.0]: ", 8.0);
    let m_span = prompt_f64("Span moment M+ (T·m) [6.0]: ", 6.0);

    println!();
    println!("Checking {}x{} beam with 2 x 5/8\" per section...", b_cm, h_cm);
    println!();

    let mut design = BeamDesign::new("CLI-Demo").with_moments(
        [-m_support, -m_support / 2.0, -m_support],
        [m_span / 2.0, m_span, m_span / 2.0],
    );
    design.geometry.b_cm = b_cm;
    design.geometry.h_cm = h_cm;
    for section in &mut design.sections {
        section.rebar = vec![RebarEntry::new(2, Some(BarSize::D5_8), 1)];
    }

    let summary = check(&design);

    println!("═══════════════════════════════════════");
    println!("  BEAM DESIGN RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Section:");
    println!("  b x h    = {:.0} x {:.0} cm", b_cm, h_cm);
    println!("  d        = {:.2} cm", summary.effective_depth_cm);
    println!("  layers   = {}", summary.active_layers);
    println!();
    println!("Limits:");
    println!("  β1       = {:.3}", summary.limits.beta1);
    println!("  As_min   = {:.2} cm²", summary.limits.as_min_cm2);
    println!("  As_max   = {:.2} cm²", summary.limits.as_max_cm2);
    println!();
    println!("Verification:");
    println!("  {:<5} {:>8} {:>10} {:>10}  {}", "Point", "Mu", "As req", "As prov", "Status");
    for row in &summary.checks {
        println!(
            "  {:<5} {:>8.2} {:>10.2} {:>10.2}  {}",
            row.point.label(),
            row.moment_tnm,
            row.required_cm2,
            row.provided_cm2,
            if row.meets_area { "OK" } else { "NO OK" }
        );
    }
    println!();
    println!(
        "Base width: required {:.1} cm vs b = {:.0} cm -> {}",
        summary.required_base_cm,
        b_cm,
        summary.base_status.label()
    );
    println!();
    if summary.passes() {
        println!("Design PASSES at every control point.");
    } else {
        let labels: Vec<&str> = summary
            .deficient_points()
            .iter()
            .map(|p| p.label())
            .collect();
        if labels.is_empty() {
            println!("Bars do not fit the section width.");
        } else {
            println!("Add steel at: {}", labels.join(", "));
        }
    }
}
