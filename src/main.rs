//! Cardiorisk: SMART CVD risk reduction calculator.
//!
//! Thin command-line collaborator for the calculation core: reads a JSON
//! assessment request, prints the resulting report.

use std::io::Read;

use anyhow::{bail, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cardiorisk::domain::{LipidTherapy, INTERVENTIONS};
use cardiorisk::{run_assessment, AssessmentRequest, RiskAssessment};

const USAGE: &str = "usage: cardiorisk [--json] <request.json | ->
       cardiorisk --tables";

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut json_output = false;
    let mut input: Option<String> = None;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json_output = true,
            "--tables" => {
                print_tables();
                return Ok(());
            }
            "--help" | "-h" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ if input.is_none() => input = Some(arg),
            _ => bail!("unexpected argument: {arg}\n{USAGE}"),
        }
    }

    let Some(input) = input else {
        bail!("missing request path\n{USAGE}");
    };

    let raw = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read request from stdin")?;
        buf
    } else {
        std::fs::read_to_string(&input)
            .with_context(|| format!("Failed to read request from {input}"))?
    };

    let request: AssessmentRequest =
        serde_json::from_str(&raw).context("Failed to parse assessment request")?;

    let assessment = run_assessment(&request)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        print_report(&assessment);
    }

    Ok(())
}

fn print_report(assessment: &RiskAssessment) {
    println!(
        "SMART CVD risk assessment ({})",
        chrono::Utc::now().format("%Y-%m-%d %H:%M UTC")
    );
    println!();

    if assessment.crp_advisory {
        println!("Warning: hs-CRP >10 mg/L suggests acute inflammation. Avoid using acute-phase values.");
        println!();
    }

    println!(
        "Baseline SMART 10-year risk: {:.1}%",
        assessment.baseline_risk_pct
    );
    println!(
        "LDL-C after adjustments: {:.2} mmol/L (initial: {:.2})",
        assessment.final_ldl, assessment.baseline_ldl
    );
    println!("Estimated Cumulative RRR: {:.1}%", assessment.total_rrr_pct);
    println!("Final CVD Risk: {:.1}%", assessment.final_risk_pct);
}

fn print_tables() {
    println!("Interventions (ARR in percentage points):");
    for i in &INTERVENTIONS {
        println!(
            "  {:<34} lifetime {:>2}  5-year {:>2}",
            i.name, i.arr_lifetime, i.arr_5yr
        );
    }

    println!();
    println!("Lipid-lowering therapies (expected LDL-C reduction):");
    for t in LipidTherapy::ALL {
        println!("  {:<24} {:>3}%", t.label(), t.ldl_reduction_pct());
    }
}
