use serde::Serialize;
use ts_rs::TS;

use crate::input::SimulationInput;
use crate::rng::SeededRng;

/// Shown alongside every simulation result.
pub const DISCLAIMER: &str = "This simulator provides illustrative estimates only based on \
    patterns from a small (N=21) cohort. It is not a validated clinical prediction tool and \
    should not be used for individual patient decision-making.";

/// Illustrative risk of worsening on one measure.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct MeasureRisk {
    pub label: String,
    pub risk: f64,
    pub band: RiskBand,
}

impl MeasureRisk {
    fn new(label: &str, risk: f64) -> Self {
        Self {
            label: label.to_string(),
            risk,
            band: RiskBand::of(risk),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl RiskBand {
    pub fn of(risk: f64) -> Self {
        if risk > 60.0 {
            Self::High
        } else if risk > 40.0 {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

/// Output of the toy risk model. Not a statistical estimate.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct SimulationResult {
    pub instrumental_risk: f64,
    pub pro_risk: f64,
    pub discordance: f64,
    /// DIGEST, EAT-10, SWAL-QoL, Bazaz, HSS-DDI, in that order.
    pub measures: Vec<MeasureRisk>,
}

/// Run the toy risk model.
///
/// Draw order is fixed: instrumental, PRO, then EAT-10, SWAL-QoL, Bazaz and
/// HSS-DDI. Each draw advances the generator, so reordering any of them
/// changes every later value.
pub fn run_simulation(input: &SimulationInput) -> SimulationResult {
    let mut rng = SeededRng::new(input.seed());
    let base = input.baseline();

    let instrumental_risk = (base + (rng.advance() - 0.5) * 20.0).clamp(5.0, 95.0);
    let pro_risk = (base * 1.6 + (rng.advance() - 0.5) * 15.0).clamp(10.0, 98.0);
    let discordance = (pro_risk - instrumental_risk).abs();

    let eat10 = (pro_risk + (rng.advance() - 0.5) * 10.0).min(98.0);
    let swalqol = (pro_risk + (rng.advance() - 0.5) * 8.0).min(98.0);
    let bazaz = (pro_risk * 0.95 + (rng.advance() - 0.5) * 10.0).min(98.0);
    let hssddi = (pro_risk * 0.9 + (rng.advance() - 0.5) * 12.0).min(98.0);

    SimulationResult {
        instrumental_risk,
        pro_risk,
        discordance,
        measures: vec![
            MeasureRisk::new("DIGEST Worsening", instrumental_risk),
            MeasureRisk::new("EAT-10 Worsening", eat10),
            MeasureRisk::new("SWAL-QoL Decline", swalqol),
            MeasureRisk::new("Bazaz Worsening", bazaz),
            MeasureRisk::new("HSS-DDI Worsening", hssddi),
        ],
    }
}

/// How the instrumental and patient-reported estimates relate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Interpretation {
    ProDominant,
    Concordant,
    ModerateDiscordance,
}

impl Interpretation {
    pub fn message(&self) -> &'static str {
        match self {
            Self::ProDominant => {
                "PROs predict substantially greater worsening than VFSS, consistent with the \
                 study's central finding of patient-reported sensitivity."
            }
            Self::Concordant => {
                "Relatively concordant risk estimates across measure types for this patient profile."
            }
            Self::ModerateDiscordance => {
                "Moderate discordance between VFSS and PRO risk; clinical monitoring with both \
                 measure types recommended."
            }
        }
    }
}

/// Widths, in percent, of the low/moderate/high segments of the risk meter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct RiskMeter {
    pub low: f64,
    pub moderate: f64,
    pub high: f64,
}

impl SimulationResult {
    /// Mean of the instrumental and PRO risks.
    pub fn overall_risk(&self) -> f64 {
        (self.instrumental_risk + self.pro_risk) / 2.0
    }

    pub fn interpretation(&self) -> Interpretation {
        if self.pro_risk > self.instrumental_risk + 15.0 {
            Interpretation::ProDominant
        } else if self.discordance < 10.0 {
            Interpretation::Concordant
        } else {
            Interpretation::ModerateDiscordance
        }
    }

    pub fn risk_meter(&self) -> RiskMeter {
        let overall = self.overall_risk();
        let low = (100.0 - overall * 1.2).max(5.0);
        let moderate = (overall * 0.6).min(45.0);
        let high = (100.0 - low - moderate).max(0.0);
        RiskMeter {
            low,
            moderate,
            high,
        }
    }
}
