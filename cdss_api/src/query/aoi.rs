use serde_json::Value;

use crate::{coerce::safe_float, Error};

/// Search radius (miles) used when a spatial query does not give one.
pub const DEFAULT_RADIUS: f64 = 20.0;

/// Area of interest: the centre point of a radius search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aoi {
    latitude: f64,
    longitude: f64,
}

impl Aoi {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, Error> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::invalid(format!("AOI latitude {} is out of range", latitude)));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::invalid(format!("AOI longitude {} is out of range", longitude)));
        }
        Ok(Self { latitude, longitude })
    }

    /// Builds an AOI from an `[x, y]` pair, i.e. `[longitude, latitude]`.
    pub fn from_pair(pair: &[f64]) -> Result<Self, Error> {
        match pair {
            [longitude, latitude] => Self::new(*latitude, *longitude),
            _ => Err(Error::invalid(format!(
                "AOI pair must have exactly 2 elements [longitude, latitude], got {}",
                pair.len()
            ))),
        }
    }

    /// Accepts `{"latitude": .., "longitude": ..}` or `[longitude, latitude]`.
    pub fn from_json(value: &Value) -> Result<Self, Error> {
        match value {
            Value::Object(map) => {
                let latitude = safe_float(map.get("latitude"));
                let longitude = safe_float(map.get("longitude"));
                match (latitude, longitude) {
                    (Some(latitude), Some(longitude)) => Self::new(latitude, longitude),
                    _ => Err(Error::invalid(
                        "AOI object must contain numeric 'latitude' and 'longitude'",
                    )),
                }
            }
            Value::Array(items) => {
                let pair = items
                    .iter()
                    .map(|item| safe_float(Some(item)))
                    .collect::<Option<Vec<_>>>()
                    .ok_or_else(|| Error::invalid("AOI pair must contain only numbers"))?;
                Self::from_pair(&pair)
            }
            other => Err(Error::invalid(format!(
                "AOI must be an object or a [longitude, latitude] pair, got {}",
                other
            ))),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// `(latitude, longitude, radius)` as sent on the wire.
    pub fn resolve(&self, radius: Option<f64>) -> (f64, f64, f64) {
        (self.latitude, self.longitude, radius.unwrap_or(DEFAULT_RADIUS))
    }
}

impl TryFrom<&Value> for Aoi {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::from_json(value)
    }
}

impl TryFrom<&[f64]> for Aoi {
    type Error = Error;

    fn try_from(pair: &[f64]) -> Result<Self, Self::Error> {
        Self::from_pair(pair)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn object_and_pair_forms_agree() {
        let from_object = Aoi::from_json(&json!({"latitude": 39.7, "longitude": -104.9})).unwrap();
        let from_array = Aoi::from_json(&json!([-104.9, 39.7])).unwrap();
        let from_slice = Aoi::try_from(&[-104.9, 39.7][..]).unwrap();
        assert_eq!(from_object, from_array);
        assert_eq!(from_object, from_slice);
        assert_eq!(from_object.resolve(None), (39.7, -104.9, 20.0));
    }

    #[test]
    fn other_shapes_are_invalid() {
        for bad in [
            json!([1.0, 2.0, 3.0]),
            json!([-104.9]),
            json!({"lat": 39.7, "lng": -104.9}),
            json!("39.7,-104.9"),
            json!(null),
            json!(["a", "b"]),
        ] {
            assert!(
                matches!(Aoi::from_json(&bad), Err(Error::InvalidArgument(_))),
                "accepted {}",
                bad
            );
        }
    }

    #[test]
    fn swapped_pair_is_out_of_range() {
        assert!(matches!(
            Aoi::from_pair(&[39.7, -104.9]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(Aoi::new(f64::NAN, -104.9).is_err());
    }
}
