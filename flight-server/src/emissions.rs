//! CO2 emissions estimate for a flown distance.

/// Average emissions per passenger-kilometre, in kg CO2.
const KG_CO2_PER_PASSENGER_KM: f64 = 0.115;

/// Estimated CO2 emissions in kilograms for a total flown distance in
/// kilometres, rounded to two decimal places.
pub fn calculate_emissions(distance_km: f64) -> f64 {
    (distance_km * KG_CO2_PER_PASSENGER_KM * 100.0).round() / 100.0
}
