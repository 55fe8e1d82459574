//! Client-side predicate construction
//!
//! Builds pure local predicates for (preset, property, args) triples.
//! Validation happens entirely here, before a predicate exists: an invalid
//! pairing, a mis-shaped argument, an empty membership list, or an
//! all-zero age is rejected up front. The built predicate extracts the
//! property and evaluates one comparison; it never fails.

use crate::args::PresetArgs;
use crate::preset::{DateTimePreset, GenericPreset, IntegerPreset, Preset, StringPreset};
use regex::Regex;
use sq_core::{Clock, PropertyValue, QueryError, QueryResult, SystemClock};
use sq_properties::ResourceProperty;
use std::marker::PhantomData;
use std::sync::Arc;

/// A pure filter over one resource
pub type Predicate<R> = Box<dyn Fn(&R) -> bool + Send + Sync>;

/// Predicate factory for one resource type
pub struct ClientSideHandler<P: ResourceProperty> {
    clock: Arc<dyn Clock>,
    _properties: PhantomData<P>,
}

impl<P: ResourceProperty> Default for ClientSideHandler<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ResourceProperty> ClientSideHandler<P> {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Use an explicit clock for relative-age presets
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            _properties: PhantomData,
        }
    }

    /// Whether the preset is valid for this property's value kind
    pub fn supports(preset: Preset, property: P) -> bool {
        preset.applies_to(property.kind())
    }

    /// Build a predicate, validating the pairing and argument shape first
    pub fn build(
        &self,
        preset: Preset,
        property: P,
        args: &PresetArgs,
    ) -> QueryResult<Predicate<P::Resource>> {
        if !Self::supports(preset, property) {
            return Err(QueryError::UnsupportedPreset {
                preset: preset.to_string(),
                property: property.to_string(),
                reason: format!("property kind is {:?}", property.kind()),
            });
        }

        match preset {
            Preset::Generic(generic) => self.build_generic(generic, property, args),
            Preset::String(string) => self.build_string(string, property, args),
            Preset::Integer(integer) => self.build_integer(integer, property, args),
            Preset::DateTime(datetime) => self.build_datetime(datetime, property, args),
        }
    }

    fn build_generic(
        &self,
        preset: GenericPreset,
        property: P,
        args: &PresetArgs,
    ) -> QueryResult<Predicate<P::Resource>> {
        match preset {
            GenericPreset::EqualTo => {
                let want = expect_value(Preset::Generic(preset), args)?;
                Ok(Box::new(move |resource| property.extract(resource) == want))
            }
            GenericPreset::NotEqualTo => {
                let want = expect_value(Preset::Generic(preset), args)?;
                Ok(Box::new(move |resource| property.extract(resource) != want))
            }
            GenericPreset::AnyIn => {
                let wanted = expect_values(Preset::Generic(preset), args)?;
                Ok(Box::new(move |resource| {
                    wanted.contains(&property.extract(resource))
                }))
            }
            GenericPreset::NotAnyIn => {
                let wanted = expect_values(Preset::Generic(preset), args)?;
                Ok(Box::new(move |resource| {
                    !wanted.contains(&property.extract(resource))
                }))
            }
        }
    }

    fn build_string(
        &self,
        preset: StringPreset,
        property: P,
        args: &PresetArgs,
    ) -> QueryResult<Predicate<P::Resource>> {
        let StringPreset::MatchesRegex = preset;
        let pattern = match args {
            PresetArgs::Pattern(p) => p,
            other => return Err(shape_error(preset.into(), "a regex pattern", other)),
        };
        // Anchored: the whole property value must match the pattern
        let regex = Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| {
            QueryError::InvalidArgs {
                preset: Preset::from(preset).to_string(),
                reason: format!("unparsable pattern {:?}: {}", pattern, e),
            }
        })?;
        Ok(Box::new(move |resource| {
            match property.extract(resource) {
                PropertyValue::String(s) => regex.is_match(&s),
                _ => false,
            }
        }))
    }

    fn build_integer(
        &self,
        preset: IntegerPreset,
        property: P,
        args: &PresetArgs,
    ) -> QueryResult<Predicate<P::Resource>> {
        let threshold = match args {
            PresetArgs::Threshold(t) => *t,
            other => return Err(shape_error(preset.into(), "an integer threshold", other)),
        };
        // A value that is not an integer (including NotFound) compares false
        Ok(Box::new(move |resource| {
            match property.extract(resource).as_int() {
                Some(value) => match preset {
                    IntegerPreset::LessThan => value < threshold,
                    IntegerPreset::LessThanOrEqualTo => value <= threshold,
                    IntegerPreset::GreaterThan => value > threshold,
                    IntegerPreset::GreaterThanOrEqualTo => value >= threshold,
                },
                None => false,
            }
        }))
    }

    fn build_datetime(
        &self,
        preset: DateTimePreset,
        property: P,
        args: &PresetArgs,
    ) -> QueryResult<Predicate<P::Resource>> {
        let age = match args {
            PresetArgs::Age(age) => *age,
            other => return Err(shape_error(preset.into(), "a relative age", other)),
        };
        if age.is_zero() {
            return Err(QueryError::MissingParam {
                name: "age",
                reason: "at least one of days/hours/minutes/seconds must be non-zero".to_string(),
            });
        }
        let clock = Arc::clone(&self.clock);
        Ok(Box::new(move |resource| {
            let cutoff = clock.now() - age.to_duration();
            match property.extract(resource).as_datetime() {
                Some(timestamp) => match preset {
                    DateTimePreset::OlderThan => timestamp < cutoff,
                    DateTimePreset::OlderThanOrEqualTo => timestamp <= cutoff,
                    DateTimePreset::YoungerThan => timestamp > cutoff,
                    DateTimePreset::YoungerThanOrEqualTo => timestamp >= cutoff,
                },
                None => false,
            }
        }))
    }
}

fn expect_value(preset: Preset, args: &PresetArgs) -> QueryResult<PropertyValue> {
    match args {
        PresetArgs::Value(v) => Ok(v.clone()),
        other => Err(shape_error(preset, "a single value", other)),
    }
}

fn expect_values(preset: Preset, args: &PresetArgs) -> QueryResult<Vec<PropertyValue>> {
    match args {
        PresetArgs::Values(values) if values.is_empty() => Err(QueryError::MissingParam {
            name: "values",
            reason: format!("{} requires a non-empty list of values", preset),
        }),
        PresetArgs::Values(values) => Ok(values.clone()),
        other => Err(shape_error(preset, "a list of values", other)),
    }
}

fn shape_error(preset: Preset, expected: &str, got: &PresetArgs) -> QueryError {
    QueryError::InvalidArgs {
        preset: preset.to_string(),
        reason: format!("expected {}, got {}", expected, got.shape()),
    }
}
