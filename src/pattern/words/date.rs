//! `%date{format, zone}` and `%time{format, zone}`.

use super::unit;
use crate::Error;
use crate::fmt::date::{DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT};
use crate::fmt::{DatePattern, TimeZoneSpec};
use crate::pattern::converter::Converter;
use crate::pattern::factory::{ConversionFactory, FormatContext};
use crate::pattern::spec::ConversionSpec;
use crate::record::LogRecord;

pub fn register(factory: &mut ConversionFactory) {
    factory.register_fn("date", |spec, context| {
        unit(Timestamp::from_spec(spec, context, DEFAULT_DATE_FORMAT)?)
    });
    factory.aliases_for("date", &["d"]);

    factory.register_fn("time", |spec, context| {
        unit(Timestamp::from_spec(spec, context, DEFAULT_TIME_FORMAT)?)
    });
}

#[derive(Debug)]
struct Timestamp {
    pattern: DatePattern,
    zone: TimeZoneSpec,
}

impl Timestamp {
    /// An empty or missing format falls back to `default_format`; a missing
    /// zone to the context's zone.
    fn from_spec(
        spec: &ConversionSpec,
        context: &FormatContext,
        default_format: &str,
    ) -> Result<Self, Error> {
        let format = spec
            .parameter(0)
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .unwrap_or(default_format);
        let pattern = DatePattern::parse(format)
            .map_err(|reason| Error::invalid_parameter(&spec.word, format, reason))?;

        let zone = match spec.parameter(1) {
            Some(zone) => TimeZoneSpec::parse(zone)
                .map_err(|reason| Error::invalid_parameter(&spec.word, zone, reason))?,
            None => context.timezone,
        };

        Ok(Self { pattern, zone })
    }
}

impl Converter for Timestamp {
    fn render(&self, record: &LogRecord) -> String {
        self.pattern.format(&self.zone.apply(&record.timestamp))
    }
}
