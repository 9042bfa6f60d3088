//! Registry mapping conversion words to the builders of their units.
//!
//! Each word is an entry, never a branch: adding a word means registering a
//! builder, and no existing builder changes. The registry is filled during
//! setup through `&mut self` and only read afterwards, so compiled patterns
//! can share it across threads without locking.

use super::converter::{CompiledPattern, Converter, Justified};
use super::spec::ConversionSpec;
use super::words;
use crate::Error;
use crate::config::Config;
use crate::fmt::{ConsoleFormatting, TimeZoneSpec};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::io::IsTerminal;
use std::sync::{Arc, LazyLock};

/// Settings units may read while they are built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatContext {
    /// `%application`
    pub application: String,
    /// `%node`
    pub node: String,
    pub console: ConsoleFormatting,
    /// Zone for `%date`/`%time` without a zone parameter.
    pub timezone: TimeZoneSpec,
}

impl Default for FormatContext {
    fn default() -> Self {
        Self {
            application: default_application_name(),
            node: default_node_name(),
            console: ConsoleFormatting::default(),
            timezone: TimeZoneSpec::default(),
        }
    }
}

impl FormatContext {
    /// Context described by the `[formatter]` and `[context]` sections.
    ///
    /// # Errors
    /// `InvalidParameter` when the configured time zone is not understood.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let timezone = TimeZoneSpec::parse(&config.formatter.timezone)
            .map_err(|reason| Error::invalid_parameter("date", &config.formatter.timezone, reason))?;
        Ok(Self {
            application: config
                .context
                .application
                .clone()
                .unwrap_or_else(default_application_name),
            node: config.context.node.clone().unwrap_or_else(default_node_name),
            console: ConsoleFormatting::from_mode(
                config.formatter.colors,
                std::io::stdout().is_terminal(),
            ),
            timezone,
        })
    }

    #[must_use]
    pub fn application(mut self, application: impl Into<String>) -> Self {
        self.application = application.into();
        self
    }

    #[must_use]
    pub fn node(mut self, node: impl Into<String>) -> Self {
        self.node = node.into();
        self
    }

    #[must_use]
    pub const fn console(mut self, console: ConsoleFormatting) -> Self {
        self.console = console;
        self
    }

    #[must_use]
    pub const fn timezone(mut self, timezone: TimeZoneSpec) -> Self {
        self.timezone = timezone;
        self
    }
}

fn default_application_name() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "application".to_string())
}

fn default_node_name() -> String {
    std::env::var("HOSTNAME")
        .ok()
        .filter(|h| !h.is_empty())
        .or_else(|| {
            std::fs::read_to_string("/etc/hostname")
                .ok()
                .map(|h| h.trim().to_string())
                .filter(|h| !h.is_empty())
        })
        .unwrap_or_else(|| "localhost".to_string())
}

/// Builds the unit for one conversion word.
pub trait ConverterBuilder: Send + Sync {
    /// Consumes the parsed spec. Parameters are interpreted here, so a bad
    /// parameter fails at compile time.
    ///
    /// # Errors
    /// `InvalidParameter` when a parameter cannot be used.
    fn build(
        &self,
        spec: &mut ConversionSpec,
        context: &FormatContext,
    ) -> Result<Box<dyn Converter>, Error>;

    /// Whether a `(` right after the word opens a sub-pattern. Otherwise the
    /// parenthesis is literal text.
    fn accepts_subpattern(&self) -> bool {
        false
    }
}

type BuildFn =
    dyn Fn(&mut ConversionSpec, &FormatContext) -> Result<Box<dyn Converter>, Error> + Send + Sync;

struct FnBuilder(Box<BuildFn>);

impl ConverterBuilder for FnBuilder {
    fn build(
        &self,
        spec: &mut ConversionSpec,
        context: &FormatContext,
    ) -> Result<Box<dyn Converter>, Error> {
        (self.0)(spec, context)
    }
}

/// String-to-string function applied by a transformer unit.
pub type Transform = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Renders a sub-pattern, then passes its output through a transform.
pub struct Transformed {
    subpattern: CompiledPattern,
    transform: Transform,
}

impl Transformed {
    #[must_use]
    pub fn new(subpattern: CompiledPattern, transform: Transform) -> Self {
        Self {
            subpattern,
            transform,
        }
    }
}

impl fmt::Debug for Transformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transformed")
            .field("subpattern", &self.subpattern)
            .finish_non_exhaustive()
    }
}

impl Converter for Transformed {
    fn render(&self, record: &crate::record::LogRecord) -> String {
        (self.transform)(&self.subpattern.render(record))
    }
}

type TransformFactory =
    dyn Fn(&ConversionSpec, &FormatContext) -> Result<Transform, Error> + Send + Sync;

struct TransformerBuilder {
    make: Box<TransformFactory>,
}

impl ConverterBuilder for TransformerBuilder {
    fn build(
        &self,
        spec: &mut ConversionSpec,
        context: &FormatContext,
    ) -> Result<Box<dyn Converter>, Error> {
        let transform = (self.make)(spec, context)?;
        let subpattern = spec.take_subpattern().unwrap_or_default();
        Ok(Box::new(Transformed::new(subpattern, transform)))
    }

    fn accepts_subpattern(&self) -> bool {
        true
    }
}

/// Conversion-word registry.
#[derive(Clone, Default)]
pub struct ConversionFactory {
    builders: HashMap<String, Arc<dyn ConverterBuilder>>,
    aliases: BTreeMap<String, String>,
}

static DEFAULT_FACTORY: LazyLock<Arc<ConversionFactory>> =
    LazyLock::new(|| Arc::new(ConversionFactory::new()));

impl fmt::Debug for ConversionFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionFactory")
            .field("words", &self.conversion_words())
            .field("aliases", &self.aliases)
            .finish()
    }
}

impl ConversionFactory {
    /// A factory with every built-in word registered.
    #[must_use]
    pub fn new() -> Self {
        let mut factory = Self::empty();
        words::register_defaults(&mut factory);
        factory
    }

    /// A factory without any words.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The shared factory with the built-in words.
    #[must_use]
    pub fn global() -> Arc<Self> {
        Arc::clone(&DEFAULT_FACTORY)
    }

    /// Registers `builder` under `word`, replacing any earlier entry.
    pub fn register(&mut self, word: impl Into<String>, builder: impl ConverterBuilder + 'static) {
        let word = word.into();
        self.aliases.remove(&word);
        self.builders.insert(word, Arc::new(builder));
    }

    /// Registers a closure as the builder for `word`.
    pub fn register_fn<F>(&mut self, word: impl Into<String>, build: F)
    where
        F: Fn(&mut ConversionSpec, &FormatContext) -> Result<Box<dyn Converter>, Error>
            + Send
            + Sync
            + 'static,
    {
        self.register(word, FnBuilder(Box::new(build)));
    }

    /// Registers a word that decorates its sub-pattern's output.
    ///
    /// `make` runs once per directive at compile time and returns the
    /// transform applied at every render.
    pub fn register_transformer<F>(&mut self, word: impl Into<String>, make: F)
    where
        F: Fn(&ConversionSpec, &FormatContext) -> Result<Transform, Error> + Send + Sync + 'static,
    {
        self.register(
            word,
            TransformerBuilder {
                make: Box::new(make),
            },
        );
    }

    /// Makes `alias` another name for `target`. Returns `false` when `target`
    /// is not registered.
    ///
    /// The alias follows `target`: registering `target` again later changes
    /// what both names build.
    pub fn alias(&mut self, alias: impl Into<String>, target: &str) -> bool {
        let canonical = self
            .aliases
            .get(target)
            .cloned()
            .unwrap_or_else(|| target.to_string());
        if !self.builders.contains_key(&canonical) {
            return false;
        }
        let alias = alias.into();
        if alias == canonical {
            return true;
        }
        self.builders.remove(&alias);
        for target in self.aliases.values_mut() {
            if *target == alias {
                target.clone_from(&canonical);
            }
        }
        self.aliases.insert(alias, canonical);
        true
    }

    /// Registers several aliases for one word.
    pub fn aliases_for(&mut self, target: &str, aliases: &[&str]) {
        for alias in aliases {
            self.alias(*alias, target);
        }
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.builder(word).is_some()
    }

    fn builder(&self, word: &str) -> Option<&dyn ConverterBuilder> {
        let canonical = self.aliases.get(word).map_or(word, String::as_str);
        self.builders.get(canonical).map(AsRef::as_ref)
    }

    /// Looks up the builder for a parsed directive.
    ///
    /// # Errors
    /// `UnknownConversionWord` naming the word and its position in `pattern`.
    pub fn resolve(
        &self,
        spec: &ConversionSpec,
        pattern: &str,
    ) -> Result<&dyn ConverterBuilder, Error> {
        self.builder(&spec.word)
            .ok_or_else(|| Error::UnknownConversionWord {
                word: spec.word.clone(),
                position: spec.position,
                pattern: pattern.to_string(),
            })
    }

    /// Builds the unit for `spec`, wrapped in the padding/truncation stage
    /// when the directive carries lengths.
    ///
    /// # Errors
    /// `UnknownConversionWord` or any error from the word's builder.
    pub fn create(
        &self,
        spec: ConversionSpec,
        pattern: &str,
        context: &FormatContext,
    ) -> Result<Box<dyn Converter>, Error> {
        let builder = self.resolve(&spec, pattern)?;
        Self::instantiate(builder, spec, context)
    }

    pub(crate) fn instantiate(
        builder: &dyn ConverterBuilder,
        mut spec: ConversionSpec,
        context: &FormatContext,
    ) -> Result<Box<dyn Converter>, Error> {
        let limits = spec.limits();
        let unit = builder.build(&mut spec, context)?;
        if limits.is_unbounded() {
            Ok(unit)
        } else {
            Ok(Box::new(Justified::new(unit, limits)))
        }
    }

    /// Registered words that are not aliases, sorted.
    #[must_use]
    pub fn conversion_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.builders.keys().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    /// `(alias, word)` pairs, sorted by alias.
    pub fn alias_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(a, w)| (a.as_str(), w.as_str()))
    }
}
