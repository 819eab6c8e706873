use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum FuelMode {
	Cost,
	Range,
}

#[derive(Debug, Deserialize)]
pub struct FuelEstimateRequest {
	pub mode: FuelMode,
	pub fuel_price: f64,
	/// Kilometres per litre.
	pub mileage: f64,
	pub distance: Option<f64>,
	pub tank_size: Option<f64>,
	pub passengers: Option<u32>,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum FuelEstimate {
	Cost {
		distance: f64,
		litres_used: f64,
		total_cost: f64,
		cost_per_km: f64,
		cost_per_person: f64,
	},
	Range {
		tank_size: f64,
		range_km: f64,
		full_tank_cost: f64,
	},
}

/// Stateless fuel arithmetic: either the cost of a trip of a known distance,
/// or how far a full tank goes.
pub fn estimate(req: &FuelEstimateRequest) -> Result<FuelEstimate, String> {
	if req.fuel_price <= 0.0 {
		return Err("fuel_price must be positive".to_string());
	}
	if req.mileage <= 0.0 {
		return Err("mileage must be positive".to_string());
	}

	match req.mode {
		FuelMode::Cost => {
			let distance = req.distance.unwrap_or(0.0);
			if distance <= 0.0 {
				return Err("distance must be positive".to_string());
			}
			let passengers = req.passengers.unwrap_or(1).max(1) as f64;
			let litres_used = distance / req.mileage;
			let total_cost = litres_used * req.fuel_price;
			Ok(FuelEstimate::Cost {
				distance,
				litres_used,
				total_cost,
				cost_per_km: total_cost / distance,
				cost_per_person: total_cost / passengers,
			})
		},
		FuelMode::Range => {
			let tank_size = req.tank_size.unwrap_or(0.0);
			if tank_size <= 0.0 {
				return Err("tank_size must be positive".to_string());
			}
			Ok(FuelEstimate::Range {
				tank_size,
				range_km: tank_size * req.mileage,
				full_tank_cost: tank_size * req.fuel_price,
			})
		},
	}
}
