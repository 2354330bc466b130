// ABOUTME: Domain models for nutrient data returned by the Nutrition Tracker API
// ABOUTME: NutrientReading measurement type and the NutritionFacts mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single nutritional measurement returned by the API
///
/// The nutrient name is carried as the key of the containing
/// [`NutritionFacts`] table. Doubles as the projection target for upstream
/// entries of the shape `{"value": <number>, "unit": "<string>"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientReading {
    /// Magnitude of the measurement
    pub value: f64,
    /// Unit of the measurement (e.g. "g", "kcal", "mg")
    pub unit: String,
}

/// Nutrient table for one calculated query, keyed by nutrient name
///
/// Created fresh per call; iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NutritionFacts {
    nutrients: HashMap<String, NutrientReading>,
}

impl NutritionFacts {
    /// Create an empty nutrient table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a nutrient by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&NutrientReading> {
        self.nutrients.get(name)
    }

    /// Number of nutrients in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.nutrients.len()
    }

    /// Whether the table contains no nutrients
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nutrients.is_empty()
    }

    /// Iterate over (name, reading) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, &NutrientReading)> {
        self.nutrients.iter()
    }

    /// Nutrient names present in the table
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.nutrients.keys()
    }

    /// Insert a reading under the given nutrient name
    pub fn insert(&mut self, name: String, reading: NutrientReading) {
        self.nutrients.insert(name, reading);
    }

    /// Consume the table and return the underlying map
    #[must_use]
    pub fn into_inner(self) -> HashMap<String, NutrientReading> {
        self.nutrients
    }
}

impl FromIterator<(String, NutrientReading)> for NutritionFacts {
    fn from_iter<I: IntoIterator<Item = (String, NutrientReading)>>(iter: I) -> Self {
        Self {
            nutrients: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(value: f64, unit: &str) -> NutrientReading {
        NutrientReading {
            value,
            unit: unit.to_owned(),
        }
    }

    #[test]
    fn test_insert_and_get() {
        let mut facts = NutritionFacts::new();
        assert!(facts.is_empty());

        facts.insert("Protein".to_owned(), reading(31.0, "g"));

        assert_eq!(facts.len(), 1);
        assert_eq!(facts.get("Protein"), Some(&reading(31.0, "g")));
        assert_eq!(facts.get("Energy"), None);
    }

    #[test]
    fn test_from_iterator() {
        let facts: NutritionFacts = vec![
            ("Energy".to_owned(), reading(165.0, "kcal")),
            ("Fat".to_owned(), reading(3.6, "g")),
        ]
        .into_iter()
        .collect();

        assert_eq!(facts.len(), 2);
        assert_eq!(facts.get("Energy"), Some(&reading(165.0, "kcal")));

        let mut names: Vec<&String> = facts.names().collect();
        names.sort();
        assert_eq!(names, ["Energy", "Fat"]);

        assert!(facts.iter().all(|(_, r)| r.value > 0.0));

        let map = facts.into_inner();
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_reading_deserializes_from_wire_shape() {
        let reading: NutrientReading =
            serde_json::from_str(r#"{"value": 165.0, "unit": "kcal"}"#).unwrap();

        assert!((reading.value - 165.0).abs() < f64::EPSILON);
        assert_eq!(reading.unit, "kcal");
    }

    #[test]
    fn test_facts_serialize_as_plain_map() {
        let facts: NutritionFacts = vec![("Fiber".to_owned(), reading(2.4, "g"))]
            .into_iter()
            .collect();

        let json = serde_json::to_value(&facts).unwrap();
        assert_eq!(json["Fiber"]["unit"], "g");
    }
}
