//! Weather data models
//!
//! Shapes follow the OpenWeatherMap payloads so that live and fallback
//! responses are interchangeable for the front-end.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Current conditions for a city
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherReading {
    pub name: String,
    pub main: MainReadings,
    pub weather: Vec<ConditionSummary>,
    pub wind: Wind,
    pub visibility: i32,
    pub clouds: Clouds,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MainReadings {
    pub temp: i32,
    pub humidity: i32,
    pub pressure: i32,
    pub feels_like: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConditionSummary {
    pub main: String,
    pub description: String,
    pub icon: String,
}

impl ConditionSummary {
    pub fn new(condition: &str) -> Self {
        Self {
            main: condition.to_string(),
            description: condition.to_lowercase(),
            icon: "01d".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Wind {
    pub speed: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Clouds {
    pub all: i32,
}

/// One day of a forecast
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastEntry {
    /// Unix timestamp (seconds)
    pub dt: i64,
    pub main: ForecastReadings,
    pub weather: Vec<ConditionSummary>,
    pub wind: Wind,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastReadings {
    pub temp_max: i32,
    pub temp_min: i32,
    pub temp: i32,
    pub humidity: i32,
}

/// Multi-day forecast
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Forecast {
    pub list: Vec<ForecastEntry>,
}

/// Typical conditions for a city, used when the provider is unavailable
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CityClimate {
    pub temp: i32,
    pub humidity: i32,
    pub condition: &'static str,
    pub wind: i32,
}

/// Cities with hand-picked fallback conditions
pub const FALLBACK_CITIES: &[(&str, CityClimate)] = &[
    ("Mumbai", CityClimate { temp: 29, humidity: 78, condition: "Partly Cloudy", wind: 12 }),
    ("Delhi", CityClimate { temp: 34, humidity: 42, condition: "Hazy", wind: 8 }),
    ("Pune", CityClimate { temp: 26, humidity: 65, condition: "Clear", wind: 6 }),
    ("Bangalore", CityClimate { temp: 24, humidity: 72, condition: "Cloudy", wind: 4 }),
    ("Chennai", CityClimate { temp: 31, humidity: 80, condition: "Humid", wind: 10 }),
    ("Kolkata", CityClimate { temp: 28, humidity: 85, condition: "Overcast", wind: 7 }),
];

/// Conditions for any city not in [`FALLBACK_CITIES`]
pub const DEFAULT_CLIMATE: CityClimate = CityClimate {
    temp: 28,
    humidity: 60,
    condition: "Clear",
    wind: 5,
};

/// Conditions drawn from when synthesising a forecast
pub const FORECAST_CONDITIONS: &[&str] = &["Clear", "Partly Cloudy", "Cloudy", "Light Rain", "Sunny"];

/// Base temperature of a synthetic forecast
pub const FORECAST_BASE_TEMP: i32 = 28;

/// Number of days in a synthetic forecast
pub const FORECAST_DAYS: i64 = 5;

/// Look up the fallback climate for a city (exact match)
pub fn climate_for(city: &str) -> CityClimate {
    FALLBACK_CITIES
        .iter()
        .find(|(name, _)| *name == city)
        .map(|(_, climate)| *climate)
        .unwrap_or(DEFAULT_CLIMATE)
}

/// Build the fallback reading for a city
pub fn fallback_reading(city: &str) -> WeatherReading {
    let climate = climate_for(city);

    WeatherReading {
        name: city.to_string(),
        main: MainReadings {
            temp: climate.temp,
            humidity: climate.humidity,
            pressure: 1013,
            feels_like: climate.temp + 2,
        },
        weather: vec![ConditionSummary::new(climate.condition)],
        wind: Wind { speed: climate.wind },
        visibility: 10000,
        clouds: Clouds { all: 20 },
    }
}

/// Perturbation applied to one day of a synthetic forecast
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayVariation {
    /// Offset from [`FORECAST_BASE_TEMP`], expected in -3..=5
    pub temp_offset: i32,
    pub humidity: i32,
    pub wind: i32,
    pub condition: &'static str,
}

/// Build a synthetic forecast starting the day after `now`
///
/// One entry is produced per variation, dated `now + 1 day`, `now + 2 days`, ...
pub fn synthetic_forecast(now: DateTime<Utc>, variations: &[DayVariation]) -> Forecast {
    let list = variations
        .iter()
        .zip(1i64..)
        .map(|(v, day)| {
            let temp = FORECAST_BASE_TEMP + v.temp_offset;
            ForecastEntry {
                dt: (now + Duration::days(day)).timestamp(),
                main: ForecastReadings {
                    temp_max: temp + 3,
                    temp_min: temp - 2,
                    temp,
                    humidity: v.humidity,
                },
                weather: vec![ConditionSummary::new(v.condition)],
                wind: Wind { speed: v.wind },
            }
        })
        .collect();

    Forecast { list }
}
